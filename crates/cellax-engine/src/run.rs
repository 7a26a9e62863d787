//! The transformation run: collect results over all active rules, then merge.
//!
//! Rules are processed in declaration order, locations in traversal order.
//! Any rule-definition or render failure aborts the run before the operator
//! is asked anything. The render log is saved only after the merge step, and
//! a failure to save it never undoes the merge.

use std::time::Instant;

use cellax_model::{ContainerId, TransformationRule};
use cellax_ontology::{IdentifierService, ModelService};
use cellax_sheet::DataSource;
use tracing::{debug, error, info, info_span, warn};

use crate::collect::{ResultCollector, collect_axioms};
use crate::error::{EngineError, Result, RuleDefinitionError};
use crate::evaluate::{Renderer, evaluate};
use crate::log::RenderLog;
use crate::merge::{DecisionPrompt, MergeCoordinator, MergeOutcome};
use crate::region::resolve_in;
use crate::traversal::advance;

/// Every external handle a run needs, passed in explicitly.
pub struct Collaborators<'a> {
    pub source: &'a mut dyn DataSource,
    pub renderer: &'a mut dyn Renderer,
    pub log: &'a mut dyn RenderLog,
    pub model: &'a mut dyn ModelService,
    pub ids: &'a mut dyn IdentifierService,
    pub prompt: &'a mut dyn DecisionPrompt,
}

/// Final state of a run.
#[derive(Debug)]
pub enum RunOutcome {
    Discarded,
    MergedIntoNew(ContainerId),
    MergedIntoCurrent,
    Failed(EngineError),
}

impl From<MergeOutcome> for RunOutcome {
    fn from(outcome: MergeOutcome) -> Self {
        match outcome {
            MergeOutcome::Discarded => Self::Discarded,
            MergeOutcome::MergedIntoNew(id) => Self::MergedIntoNew(id),
            MergeOutcome::MergedIntoCurrent => Self::MergedIntoCurrent,
        }
    }
}

/// Counters gathered while collecting results.
///
/// A failed run reports the counts reached before the failure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub rules_evaluated: usize,
    pub rules_skipped: usize,
    pub locations_visited: usize,
    /// Renderings returned by the renderer, duplicates included.
    pub renderings_produced: usize,
    pub unique_renderings: usize,
    pub axioms: usize,
}

/// Outcome of a run plus anything surfaced after the merge.
#[derive(Debug)]
pub struct RunReport {
    pub outcome: RunOutcome,
    pub stats: RunStats,
    /// Render log persistence failure, reported after the merge was applied.
    pub log_error: Option<EngineError>,
}

impl RunReport {
    fn failed(error: EngineError, stats: RunStats) -> Self {
        Self {
            outcome: RunOutcome::Failed(error),
            stats,
            log_error: None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.outcome, RunOutcome::Failed(_))
    }

    /// The run's error, if it failed.
    pub fn error(&self) -> Option<&EngineError> {
        match &self.outcome {
            RunOutcome::Failed(error) => Some(error),
            _ => None,
        }
    }
}

/// Results gathered over all active rules.
#[derive(Debug)]
pub struct Collected {
    pub collector: ResultCollector,
    pub stats: RunStats,
}

/// Resolve, traverse, and evaluate every active rule.
pub fn collect_results(
    rules: &[TransformationRule],
    source: &mut dyn DataSource,
    renderer: &mut dyn Renderer,
    log: &mut dyn RenderLog,
) -> Result<Collected> {
    let mut collected = Collected {
        collector: ResultCollector::new(),
        stats: RunStats::default(),
    };
    collect_into(rules, source, renderer, log, &mut collected)?;
    Ok(collected)
}

/// Like [`collect_results`], but leaves partial counts in `collected` when a
/// rule fails part way.
fn collect_into(
    rules: &[TransformationRule],
    source: &mut dyn DataSource,
    renderer: &mut dyn Renderer,
    log: &mut dyn RenderLog,
    collected: &mut Collected,
) -> Result<()> {
    if rules.is_empty() {
        return Err(RuleDefinitionError::NoRules.into());
    }
    if !rules.iter().any(TransformationRule::is_active) {
        return Err(RuleDefinitionError::NoActiveRules.into());
    }

    let Collected { collector, stats } = collected;
    for (index, rule) in rules.iter().enumerate() {
        if !rule.is_active() {
            debug!(index, rule = %rule, "skipping inactive rule");
            stats.rules_skipped += 1;
            continue;
        }
        let _rule_guard = info_span!("rule", index, rule = %rule).entered();

        let region = resolve_in(rule, source)?;
        let (start, end) = (region.start(), region.end());
        let mut current = start.clone();
        loop {
            stats.renderings_produced += evaluate(rule, &current, source, renderer, collector, log)?;
            stats.locations_visited += 1;
            stats.unique_renderings = collector.len();
            if current == *end {
                break;
            }
            current = advance(&current, start, end)?;
        }
        stats.rules_evaluated += 1;
        debug!(unique = collector.len(), "rule evaluated");
    }
    Ok(())
}

/// Run a full transformation and report how it ended.
pub fn run_transformation(rules: &[TransformationRule], c: Collaborators<'_>) -> RunReport {
    let started = Instant::now();
    let _run_guard = info_span!("transformation", rules = rules.len()).entered();

    let mut collected = Collected {
        collector: ResultCollector::new(),
        stats: RunStats::default(),
    };
    if let Err(err) = collect_into(
        rules,
        &mut *c.source,
        &mut *c.renderer,
        &mut *c.log,
        &mut collected,
    ) {
        error!(error = %err, "transformation aborted");
        return RunReport::failed(err, collected.stats);
    }
    let Collected {
        collector,
        mut stats,
    } = collected;

    let axioms = collect_axioms(collector.results());
    stats.axioms = axioms.len();
    info!(
        rules = stats.rules_evaluated,
        locations = stats.locations_visited,
        renderings = stats.unique_renderings,
        axioms = stats.axioms,
        duration_ms = started.elapsed().as_millis(),
        "results collected"
    );

    let mut coordinator = MergeCoordinator::new(c.model, c.ids);
    let preview = coordinator.preview(axioms, collector.len());
    let outcome = match coordinator.run(preview, c.prompt) {
        Ok(outcome) => RunOutcome::from(outcome),
        Err(err) => {
            error!(error = %err, "merge failed");
            return RunReport::failed(err, stats);
        }
    };

    let log_error = c.log.save().err().map(EngineError::from);
    if let Some(err) = &log_error {
        warn!(error = %err, "merge applied but render log was not saved");
    }
    info!(duration_ms = started.elapsed().as_millis(), "transformation complete");

    RunReport {
        outcome,
        stats,
        log_error,
    }
}
