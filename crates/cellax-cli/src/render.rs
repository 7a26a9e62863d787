//! Placeholder templates as a rule expression language.
//!
//! Each non-empty line of a rule's expression becomes one axiom. Placeholders
//! are filled from the current location:
//!
//! | placeholder | value                         |
//! |-------------|-------------------------------|
//! | `{value}`   | text of the current cell      |
//! | `{column}`  | column letters, e.g. `C`      |
//! | `{row}`     | one-based row label, e.g. `7` |
//! | `{sheet}`   | sheet name                    |
//!
//! `{{` and `}}` produce literal braces. Blank cells render nothing.

use std::collections::hash_map::Entry;
use std::collections::{BTreeSet, HashMap};

use cellax_engine::{RenderError, Renderer};
use cellax_model::{Axiom, Location, Rendering, TransformationRule};
use cellax_sheet::DataSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placeholder {
    Value,
    Column,
    Row,
    Sheet,
}

impl Placeholder {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "value" => Some(Self::Value),
            "column" => Some(Self::Column),
            "row" => Some(Self::Row),
            "sheet" => Some(Self::Sheet),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(Placeholder),
}

/// A parsed expression: one segment list per output line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    lines: Vec<Vec<Segment>>,
}

impl Template {
    pub fn parse(expression: &str) -> Result<Self, RenderError> {
        let lines = expression
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(parse_line)
            .collect::<Result<_, _>>()?;
        Ok(Self { lines })
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Fill every line for `value` at `location`.
    pub fn fill(&self, value: &str, location: &Location) -> BTreeSet<Axiom> {
        self.lines
            .iter()
            .map(|segments| {
                let mut text = String::new();
                for segment in segments {
                    match segment {
                        Segment::Literal(literal) => text.push_str(literal),
                        Segment::Placeholder(Placeholder::Value) => text.push_str(value),
                        Segment::Placeholder(Placeholder::Column) => {
                            text.push_str(&location.column_name());
                        }
                        Segment::Placeholder(Placeholder::Row) => {
                            text.push_str(&(location.row + 1).to_string());
                        }
                        Segment::Placeholder(Placeholder::Sheet) => {
                            text.push_str(&location.sheet_name);
                        }
                    }
                }
                Axiom::new(text)
            })
            .collect()
    }
}

fn parse_line(line: &str) -> Result<Vec<Segment>, RenderError> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                literal.push('{');
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                literal.push('}');
            }
            '{' => {
                let mut name = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some(ch) => name.push(ch),
                        None => {
                            return Err(RenderError::parse(format!(
                                "unclosed placeholder in '{line}'"
                            )));
                        }
                    }
                }
                let placeholder = Placeholder::from_name(name.trim()).ok_or_else(|| {
                    RenderError::parse(format!("unknown placeholder {{{name}}} in '{line}'"))
                })?;
                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(Segment::Placeholder(placeholder));
            }
            '}' => {
                return Err(RenderError::parse(format!("unmatched '}}' in '{line}'")));
            }
            other => literal.push(other),
        }
    }
    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }
    Ok(segments)
}

/// [`Renderer`] over placeholder templates, caching each parsed expression.
#[derive(Debug, Default)]
pub struct TemplateRenderer {
    templates: HashMap<String, Template>,
}

impl TemplateRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    fn template(&mut self, expression: &str) -> Result<&Template, RenderError> {
        match self.templates.entry(expression.to_string()) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => Ok(entry.insert(Template::parse(expression)?)),
        }
    }
}

impl Renderer for TemplateRenderer {
    fn render(
        &mut self,
        rule: &TransformationRule,
        source: &dyn DataSource,
    ) -> Result<Vec<Rendering>, RenderError> {
        let template = self.template(&rule.expression)?;
        let location = source
            .current_location()
            .ok_or_else(|| RenderError::evaluation("no current location"))?;
        let Some(value) = source.cell_value(location) else {
            return Ok(Vec::new());
        };
        if template.is_empty() {
            return Ok(Vec::new());
        }
        Ok(vec![Rendering::Axioms(template.fill(value.trim(), location))])
    }
}
