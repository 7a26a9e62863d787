use std::collections::BTreeSet;

use cellax_model::{Axiom, ContainerId};
use serde::{Deserialize, Serialize};

/// A logical-model container: an IRI, its imports, and its axioms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ontology {
    pub id: ContainerId,
    #[serde(default)]
    pub imports: BTreeSet<ContainerId>,
    #[serde(default)]
    pub axioms: BTreeSet<Axiom>,
}

impl Ontology {
    pub fn new(id: ContainerId) -> Self {
        Self {
            id,
            imports: BTreeSet::new(),
            axioms: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn with_axioms(mut self, axioms: impl IntoIterator<Item = Axiom>) -> Self {
        self.axioms.extend(axioms);
        self
    }

    pub fn imports_ontology(&self, id: &ContainerId) -> bool {
        self.imports.contains(id)
    }

    pub fn axiom_count(&self) -> usize {
        self.axioms.len()
    }
}
