//! The `generate` flow: load inputs, run the transformation, persist.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use cellax_engine::{
    Collaborators, DecisionPrompt, FileRenderLog, FixedDecision, MemoryRenderLog, RenderLog,
    RunOutcome, RunReport, run_transformation,
};
use cellax_model::{ContainerId, RuleDocument};
use cellax_ontology::{FreshIriGenerator, ModelService, Ontology, OntologyStore, write_functional};
use cellax_sheet::open_workbook;

use crate::config::{DecisionMode, Settings};
use crate::prompt::TerminalPrompt;
use crate::render::TemplateRenderer;

/// Inputs of one `generate` run. `None` fields fall back to [`Settings`].
#[derive(Debug, Clone, Default)]
pub struct GenerateRequest {
    pub rules: PathBuf,
    pub workbook: PathBuf,
    /// Store to load; also the save destination when `output` is absent.
    pub ontology: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub decision: Option<DecisionMode>,
    pub render_log: Option<PathBuf>,
}

#[derive(Debug)]
pub struct GenerateResult {
    pub report: RunReport,
    /// Ontology that received the axioms, if any.
    pub target: Option<ContainerId>,
    /// Where the updated store was written.
    pub saved_to: Option<PathBuf>,
    /// Functional-syntax text of the target when there was nowhere to save.
    pub document: Option<String>,
}

impl GenerateResult {
    /// 0 on success, 1 when the run failed, 2 when only the render log failed.
    pub fn exit_code(&self) -> i32 {
        exit_code(&self.report)
    }
}

pub fn exit_code(report: &RunReport) -> i32 {
    if report.is_failed() {
        1
    } else if report.log_error.is_some() {
        2
    } else {
        0
    }
}

pub fn run_generate(request: &GenerateRequest, settings: &Settings) -> Result<GenerateResult> {
    let started = Instant::now();
    let span = info_span!("generate", rules = %request.rules.display());
    let _guard = span.enter();

    let document = RuleDocument::load(&request.rules).context("load rules")?;
    let mut workbook = open_workbook(&request.workbook)
        .with_context(|| format!("load workbook {}", request.workbook.display()))?;
    let mut store = load_store(request.ontology.as_deref(), settings)?;
    info!(
        rules = document.rules.len(),
        active_rules = document.active_count(),
        sheets = workbook.len(),
        ontologies = store.len(),
        "inputs loaded"
    );

    let mode = request.decision.unwrap_or(settings.run.decision);
    let mut prompt: Box<dyn DecisionPrompt> = match mode.fixed() {
        Some(decision) => Box::new(FixedDecision(decision)),
        None => Box::new(TerminalPrompt::stdio()),
    };
    let render_log = request
        .render_log
        .clone()
        .or_else(|| settings.log.render_log.clone());
    let mut log: Box<dyn RenderLog> = match render_log {
        Some(path) => Box::new(FileRenderLog::new(path)),
        None => Box::new(MemoryRenderLog::new()),
    };
    let mut ids = FreshIriGenerator::new(settings.ontology.base_iri.clone())
        .continuing_after(store.ontologies().map(|ontology| &ontology.id));
    let mut renderer = TemplateRenderer::new();

    let report = run_transformation(
        &document.rules,
        Collaborators {
            source: &mut workbook,
            renderer: &mut renderer,
            log: log.as_mut(),
            model: &mut store,
            ids: &mut ids,
            prompt: prompt.as_mut(),
        },
    );

    let target = match &report.outcome {
        RunOutcome::MergedIntoNew(id) => Some(id.clone()),
        RunOutcome::MergedIntoCurrent => store.active_container().cloned(),
        RunOutcome::Discarded | RunOutcome::Failed(_) => None,
    };
    let destination = request.output.as_ref().or(request.ontology.as_ref());
    let (saved_to, document) = match (&target, destination) {
        (Some(_), Some(path)) => {
            store
                .save(path)
                .with_context(|| format!("save ontology store {}", path.display()))?;
            (Some(path.clone()), None)
        }
        (Some(id), None) => (None, store.get(id).map(write_functional)),
        (None, _) => (None, None),
    };
    info!(
        duration_ms = started.elapsed().as_millis(),
        "generate complete"
    );
    Ok(GenerateResult {
        report,
        target,
        saved_to,
        document,
    })
}

/// The store at `path`, else one holding only `ontology.default_iri`, else empty.
pub fn load_store(path: Option<&Path>, settings: &Settings) -> Result<OntologyStore> {
    if let Some(path) = path {
        return OntologyStore::load(path)
            .with_context(|| format!("load ontology store {}", path.display()));
    }
    match &settings.ontology.default_iri {
        Some(iri) => {
            let id = ContainerId::new(iri.clone()).context("invalid ontology.default_iri")?;
            Ok(OntologyStore::with_active(Ontology::new(id)))
        }
        None => Ok(OntologyStore::new()),
    }
}
