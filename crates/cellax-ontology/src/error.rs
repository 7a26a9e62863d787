//! Error types for ontology storage.

use std::path::PathBuf;

use cellax_model::{ContainerId, ModelError};
use thiserror::Error;

/// Errors raised by the model store and identifier generation.
#[derive(Debug, Error)]
pub enum OntologyError {
    /// An ontology with this IRI is already loaded.
    #[error("ontology already exists: {id}")]
    DuplicateOntology { id: ContainerId },

    /// A change targets an ontology that is not loaded.
    #[error("unknown ontology: {id}")]
    UnknownOntology { id: ContainerId },

    /// Generated identifier is not a valid IRI.
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(#[from] ModelError),

    /// Failed to read or write a store file.
    #[error("failed to access ontology store {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Store file is not valid JSON.
    #[error("failed to parse ontology store {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for ontology operations.
pub type Result<T> = std::result::Result<T, OntologyError>;
