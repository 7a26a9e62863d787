//! Interfaces the merge step drives the logical model through.

use cellax_model::ContainerId;

use crate::change::{ChangeSummary, OntologyChange};
use crate::error::Result;

/// Source of identifiers for newly created ontologies.
pub trait IdentifierService {
    fn generate_fresh_identifier(&mut self) -> Result<ContainerId>;
}

/// The logical-model subsystem: container lifecycle and change application.
pub trait ModelService {
    /// The ontology currently selected by the operator, if any.
    fn active_container(&self) -> Option<&ContainerId>;

    /// Create a new, empty ontology at `id`.
    fn create_container(&mut self, id: ContainerId) -> Result<()>;

    /// Apply a batch of changes. Implementations either apply every change or
    /// none of them.
    fn apply_changes(&mut self, changes: Vec<OntologyChange>) -> Result<ChangeSummary>;
}
