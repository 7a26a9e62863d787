//! Operator decision and model reconciliation for collected axioms.
//!
//! The coordinator starts in the results-collected state with the flattened
//! axiom set and the active ontology. The operator picks one of three
//! choices; each non-cancel choice submits its changes as a single batch.

use std::collections::BTreeSet;

use cellax_model::{Axiom, ContainerId, MergeDecision};
use cellax_ontology::{IdentifierService, ModelService, OntologyChange, add_axioms, add_import};
use tracing::{info, warn};

use crate::error::{EngineError, Result};

/// What the operator sees before deciding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergePreview {
    pub axioms: BTreeSet<Axiom>,
    /// Distinct renderings collected, including ones without axioms.
    pub rendering_count: usize,
    pub active: Option<ContainerId>,
}

/// Blocking operator choice. There is no timeout.
pub trait DecisionPrompt {
    fn decide(&mut self, preview: &MergePreview) -> MergeDecision;
}

/// Prompt that always answers with the same decision.
#[derive(Debug, Clone, Copy)]
pub struct FixedDecision(pub MergeDecision);

impl DecisionPrompt for FixedDecision {
    fn decide(&mut self, _preview: &MergePreview) -> MergeDecision {
        self.0
    }
}

/// Terminal state of a merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    Discarded,
    MergedIntoNew(ContainerId),
    MergedIntoCurrent,
}

/// Applies an operator decision to the logical model.
pub struct MergeCoordinator<'a> {
    model: &'a mut dyn ModelService,
    ids: &'a mut dyn IdentifierService,
}

impl<'a> MergeCoordinator<'a> {
    pub fn new(model: &'a mut dyn ModelService, ids: &'a mut dyn IdentifierService) -> Self {
        Self { model, ids }
    }

    /// Snapshot of what is about to be merged.
    pub fn preview(&self, axioms: BTreeSet<Axiom>, rendering_count: usize) -> MergePreview {
        MergePreview {
            axioms,
            rendering_count,
            active: self.model.active_container().cloned(),
        }
    }

    /// Ask the operator and execute the answer.
    pub fn run(
        &mut self,
        preview: MergePreview,
        prompt: &mut dyn DecisionPrompt,
    ) -> Result<MergeOutcome> {
        let decision = prompt.decide(&preview);
        info!(decision = %decision, axioms = preview.axioms.len(), "merge decision");
        self.execute(decision, preview)
    }

    pub fn execute(&mut self, decision: MergeDecision, preview: MergePreview) -> Result<MergeOutcome> {
        match decision {
            MergeDecision::Cancel => Ok(MergeOutcome::Discarded),
            MergeDecision::CreateNewContainer => self.merge_into_new(preview),
            MergeDecision::MergeIntoCurrentContainer => self.merge_into_current(preview),
        }
    }

    fn merge_into_new(&mut self, preview: MergePreview) -> Result<MergeOutcome> {
        let id = self
            .ids
            .generate_fresh_identifier()
            .map_err(EngineError::ContainerCreation)?;
        self.model
            .create_container(id.clone())
            .map_err(EngineError::ContainerCreation)?;

        let mut batch = Vec::with_capacity(preview.axioms.len() + 1);
        match &preview.active {
            Some(active) => batch.push(add_import(&id, active)),
            None => warn!(ontology = %id, "no active ontology, new ontology has no import"),
        }
        batch.extend(add_axioms(&id, &preview.axioms));
        self.submit(batch)?;
        info!(ontology = %id, axioms = preview.axioms.len(), "added axioms to new ontology");
        Ok(MergeOutcome::MergedIntoNew(id))
    }

    fn merge_into_current(&mut self, preview: MergePreview) -> Result<MergeOutcome> {
        let active = preview.active.as_ref().ok_or(EngineError::NoActiveContainer)?;
        self.submit(add_axioms(active, &preview.axioms))?;
        info!(ontology = %active, axioms = preview.axioms.len(), "added axioms to current ontology");
        Ok(MergeOutcome::MergedIntoCurrent)
    }

    fn submit(&mut self, batch: Vec<OntologyChange>) -> Result<()> {
        self.model
            .apply_changes(batch)
            .map(|_| ())
            .map_err(EngineError::ModelChange)
    }
}
