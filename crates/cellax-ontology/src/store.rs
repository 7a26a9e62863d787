//! In-memory model store with JSON persistence.

use std::collections::BTreeMap;
use std::path::Path;

use cellax_model::ContainerId;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::change::{ChangeSummary, OntologyChange};
use crate::error::{OntologyError, Result};
use crate::ontology::Ontology;
use crate::service::ModelService;

/// Loaded ontologies keyed by IRI, plus the operator's active selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OntologyStore {
    #[serde(default)]
    ontologies: BTreeMap<ContainerId, Ontology>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    active: Option<ContainerId>,
}

impl OntologyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding `ontology` as its active selection.
    pub fn with_active(ontology: Ontology) -> Self {
        let mut store = Self::new();
        let id = ontology.id.clone();
        store.ontologies.insert(id.clone(), ontology);
        store.active = Some(id);
        store
    }

    pub fn insert(&mut self, ontology: Ontology) -> Result<()> {
        if self.ontologies.contains_key(&ontology.id) {
            return Err(OntologyError::DuplicateOntology { id: ontology.id });
        }
        self.ontologies.insert(ontology.id.clone(), ontology);
        Ok(())
    }

    pub fn set_active(&mut self, id: &ContainerId) -> Result<()> {
        if !self.ontologies.contains_key(id) {
            return Err(OntologyError::UnknownOntology { id: id.clone() });
        }
        self.active = Some(id.clone());
        Ok(())
    }

    pub fn get(&self, id: &ContainerId) -> Option<&Ontology> {
        self.ontologies.get(id)
    }

    pub fn contains(&self, id: &ContainerId) -> bool {
        self.ontologies.contains_key(id)
    }

    pub fn active_ontology(&self) -> Option<&Ontology> {
        self.active.as_ref().and_then(|id| self.ontologies.get(id))
    }

    pub fn ontologies(&self) -> impl Iterator<Item = &Ontology> {
        self.ontologies.values()
    }

    pub fn len(&self) -> usize {
        self.ontologies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ontologies.is_empty()
    }

    /// Load a store previously written with [`OntologyStore::save`].
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| OntologyError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let store: Self = serde_json::from_str(&json).map_err(|source| OntologyError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        if let Some(active) = &store.active
            && !store.ontologies.contains_key(active)
        {
            return Err(OntologyError::UnknownOntology { id: active.clone() });
        }
        info!(path = %path.display(), ontologies = store.len(), "loaded ontology store");
        Ok(store)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|source| OntologyError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        std::fs::write(path, json).map_err(|source| OntologyError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl ModelService for OntologyStore {
    fn active_container(&self) -> Option<&ContainerId> {
        self.active.as_ref()
    }

    fn create_container(&mut self, id: ContainerId) -> Result<()> {
        debug!(ontology = %id, "creating ontology");
        self.insert(Ontology::new(id))
    }

    fn apply_changes(&mut self, changes: Vec<OntologyChange>) -> Result<ChangeSummary> {
        // Validate the whole batch before touching any ontology.
        if let Some(change) = changes
            .iter()
            .find(|change| !self.ontologies.contains_key(change.target()))
        {
            return Err(OntologyError::UnknownOntology {
                id: change.target().clone(),
            });
        }

        let mut summary = ChangeSummary::default();
        for change in changes {
            let applied = match change {
                OntologyChange::AddImport { ontology, import } => {
                    let applied = self.target_mut(&ontology)?.imports.insert(import);
                    if applied {
                        summary.imports_added += 1;
                    }
                    applied
                }
                OntologyChange::AddAxiom { ontology, axiom } => {
                    let applied = self.target_mut(&ontology)?.axioms.insert(axiom);
                    if applied {
                        summary.axioms_added += 1;
                    }
                    applied
                }
            };
            if !applied {
                summary.unchanged += 1;
            }
        }
        debug!(
            imports_added = summary.imports_added,
            axioms_added = summary.axioms_added,
            unchanged = summary.unchanged,
            "applied ontology changes"
        );
        Ok(summary)
    }
}

impl OntologyStore {
    fn target_mut(&mut self, id: &ContainerId) -> Result<&mut Ontology> {
        self.ontologies
            .get_mut(id)
            .ok_or_else(|| OntologyError::UnknownOntology { id: id.clone() })
    }
}
