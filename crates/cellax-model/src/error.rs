//! Error types for model construction and rule document loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building model values or reading rule documents.
#[derive(Debug, Error)]
pub enum ModelError {
    // === Address Errors ===
    /// Column name is empty or contains non-letter characters.
    #[error("invalid column name '{name}'")]
    InvalidColumn { name: String },

    /// Row label is empty, not a number, or zero.
    #[error("invalid row label '{label}'")]
    InvalidRow { label: String },

    // === Identifier Errors ===
    /// Container identifier is empty or contains whitespace.
    #[error("invalid ontology IRI '{0}'")]
    InvalidContainerId(String),

    // === Rule Document Errors ===
    /// Failed to read a rule document from disk.
    #[error("failed to read rule document {path}: {source}")]
    RuleDocumentRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Rule document is not valid JSON or has an unexpected shape.
    #[error("failed to parse rule document {path}: {source}")]
    RuleDocumentParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
