//! Shared fixtures for engine integration tests.

#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use cellax_engine::{
    DecisionPrompt, LogError, MemoryRenderLog, MergePreview, RenderError, RenderLog, Renderer,
};
use cellax_model::{ContainerId, Location, MergeDecision, Rendering, TransformationRule};
use cellax_sheet::{DataSource, Sheet, Workbook};

pub fn iri(value: &str) -> ContainerId {
    ContainerId::new(value).unwrap()
}

/// A `width` x `height` sheet where every cell holds its A1 address.
pub fn grid_sheet(name: &str, width: u32, height: u32) -> Sheet {
    let mut sheet = Sheet::new(name);
    for column in 0..width {
        for row in 0..height {
            sheet.set_cell(column, row, Location::new(name, column, row).to_a1());
        }
    }
    sheet
}

pub fn workbook(sheets: impl IntoIterator<Item = Sheet>) -> Workbook {
    Workbook::from_sheets(sheets).unwrap()
}

/// Renders `Class(<cell value>)` for populated cells and nothing for blanks.
///
/// Records every location it was asked to render and can be told to fail on
/// the n-th call (zero-based).
#[derive(Debug, Default)]
pub struct CellRenderer {
    pub visited: Vec<Location>,
    pub fail_at: Option<usize>,
}

impl CellRenderer {
    pub fn failing_at(call: usize) -> Self {
        Self {
            fail_at: Some(call),
            ..Self::default()
        }
    }
}

impl Renderer for CellRenderer {
    fn render(
        &mut self,
        _rule: &TransformationRule,
        source: &dyn DataSource,
    ) -> Result<Vec<Rendering>, RenderError> {
        let location = source
            .current_location()
            .cloned()
            .ok_or_else(|| RenderError::evaluation("no current location"))?;
        let call = self.visited.len();
        self.visited.push(location);
        if self.fail_at == Some(call) {
            return Err(RenderError::evaluation("unresolvable reference"));
        }
        Ok(source
            .current_value()
            .map(|value| vec![Rendering::axiom(format!("Class({value})"))])
            .unwrap_or_default())
    }
}

/// Always renders the same axiom, whatever the location.
#[derive(Debug)]
pub struct ConstantRenderer(pub &'static str);

impl Renderer for ConstantRenderer {
    fn render(
        &mut self,
        _rule: &TransformationRule,
        _source: &dyn DataSource,
    ) -> Result<Vec<Rendering>, RenderError> {
        Ok(vec![Rendering::axiom(self.0)])
    }
}

/// Returns a fixed decision and counts how often it was asked.
#[derive(Debug, Clone)]
pub struct RecordingPrompt {
    pub decision: MergeDecision,
    pub calls: Rc<Cell<usize>>,
    pub last_axiom_count: Rc<Cell<usize>>,
}

impl RecordingPrompt {
    pub fn new(decision: MergeDecision) -> Self {
        Self {
            decision,
            calls: Rc::default(),
            last_axiom_count: Rc::default(),
        }
    }
}

impl DecisionPrompt for RecordingPrompt {
    fn decide(&mut self, preview: &MergePreview) -> MergeDecision {
        self.calls.set(self.calls.get() + 1);
        self.last_axiom_count.set(preview.axioms.len());
        self.decision
    }
}

/// Records like [`MemoryRenderLog`] but refuses to save.
#[derive(Debug, Default)]
pub struct BrokenLog {
    pub inner: MemoryRenderLog,
    pub save_attempts: usize,
}

impl RenderLog for BrokenLog {
    fn record(&mut self, rule: &TransformationRule, location: &Location, renderings: &[Rendering]) {
        self.inner.record(rule, location, renderings);
    }

    fn save(&mut self) -> Result<(), LogError> {
        self.save_attempts += 1;
        Err(LogError::Io {
            path: "render-log.jsonl".into(),
            source: std::io::Error::other("disk full"),
        })
    }
}
