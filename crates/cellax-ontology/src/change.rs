//! Structural changes submitted to a model service as one batch.

use std::collections::BTreeSet;

use cellax_model::{Axiom, ContainerId};
use serde::{Deserialize, Serialize};

/// A single structural change to one ontology.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "change", rename_all = "snake_case")]
pub enum OntologyChange {
    /// Declare that `ontology` imports `import`.
    AddImport {
        ontology: ContainerId,
        import: ContainerId,
    },
    /// Add one axiom to `ontology`.
    AddAxiom { ontology: ContainerId, axiom: Axiom },
}

impl OntologyChange {
    /// The ontology this change modifies.
    pub fn target(&self) -> &ContainerId {
        match self {
            Self::AddImport { ontology, .. } | Self::AddAxiom { ontology, .. } => ontology,
        }
    }
}

/// Counts of what a batch actually changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChangeSummary {
    pub imports_added: usize,
    pub axioms_added: usize,
    /// Changes that were already present and had no effect.
    pub unchanged: usize,
}

/// One `AddImport` declaring that `ontology` imports `import`.
pub fn add_import(ontology: &ContainerId, import: &ContainerId) -> OntologyChange {
    OntologyChange::AddImport {
        ontology: ontology.clone(),
        import: import.clone(),
    }
}

/// One `AddAxiom` per axiom, in set order.
pub fn add_axioms(ontology: &ContainerId, axioms: &BTreeSet<Axiom>) -> Vec<OntologyChange> {
    axioms
        .iter()
        .map(|axiom| OntologyChange::AddAxiom {
            ontology: ontology.clone(),
            axiom: axiom.clone(),
        })
        .collect()
}
