//! Logical-model containers for generated axioms.
//!
//! This crate defines the interfaces the transformation engine uses to reach
//! the logical model ([`ModelService`], [`IdentifierService`]) and provides
//! in-memory implementations of both:
//!
//! - **Store** (`store`): ontologies keyed by IRI with an active selection and
//!   all-or-nothing change batches
//! - **Identifiers** (`iri`): fresh `untitled-ontology-N` IRIs
//! - **Documents** (`document`): functional-style text output

pub mod change;
pub mod document;
pub mod error;
pub mod iri;
pub mod ontology;
pub mod service;
pub mod store;

pub use change::{ChangeSummary, OntologyChange, add_axioms, add_import};
pub use document::write_functional;
pub use error::{OntologyError, Result};
pub use iri::{DEFAULT_BASE_IRI, FreshIriGenerator};
pub use ontology::Ontology;
pub use service::{IdentifierService, ModelService};
pub use store::OntologyStore;
