//! Unified error types for the transformation engine.
//!
//! Every failure is terminal for the current run. The variants group into the
//! categories the caller reports on: rule definition, rendering, internal
//! traversal misuse, merge, and log persistence.

use std::path::PathBuf;

use cellax_model::{Location, ModelError};
use cellax_ontology::OntologyError;
use thiserror::Error;

/// A rule cannot be evaluated as declared.
#[derive(Debug, Error)]
pub enum RuleDefinitionError {
    #[error("No transformation rules created")]
    NoRules,

    #[error("No active transformation rules")]
    NoActiveRules,

    #[error("Start column after end column in rule {rule}")]
    StartColumnAfterEndColumn { rule: String },

    #[error("Start row after end row in rule {rule}")]
    StartRowAfterEndRow { rule: String },

    #[error("Unknown sheet '{sheet}' in rule {rule}")]
    UnknownSheet { sheet: String, rule: String },

    /// The end column wildcard needs a populated start row.
    #[error("Row {row} of sheet '{sheet}' is empty, cannot resolve end column in rule {rule}")]
    EmptyStartRow {
        sheet: String,
        row: String,
        rule: String,
    },

    /// The end row wildcard needs at least one populated row.
    #[error("Sheet '{sheet}' is empty, cannot resolve end row in rule {rule}")]
    EmptySheet { sheet: String, rule: String },

    #[error("Invalid address in rule {rule}: {source}")]
    InvalidAddress {
        rule: String,
        #[source]
        source: ModelError,
    },
}

/// Failure reported by a renderer for one rule at one location.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The rule's expression could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),

    /// The expression parsed but could not be evaluated at this location.
    #[error("{0}")]
    Evaluation(String),
}

impl RenderError {
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    pub fn evaluation(message: impl Into<String>) -> Self {
        Self::Evaluation(message.into())
    }
}

/// Failure persisting the render log.
#[derive(Debug, Error)]
pub enum LogError {
    #[error("failed to write render log {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize render log record: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// `advance` was called on the last location of a region.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Location advanced past end of region at {location}")]
pub struct TraversalExhausted {
    pub location: Location,
}

/// Unified error type for a transformation run.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EngineError {
    #[error(transparent)]
    RuleDefinition(#[from] RuleDefinitionError),

    #[error("Error rendering rule {rule} at {location}: {source}")]
    Render {
        rule: String,
        location: Location,
        #[source]
        source: RenderError,
    },

    /// Internal misuse of the traversal; never caused by user input.
    #[error(transparent)]
    TraversalExhausted(#[from] TraversalExhausted),

    #[error("Error while creating a new ontology: {0}")]
    ContainerCreation(#[source] OntologyError),

    #[error("No active ontology to add axioms to")]
    NoActiveContainer,

    #[error("Error while applying ontology changes: {0}")]
    ModelChange(#[source] OntologyError),

    #[error("Error while saving render log: {0}")]
    LoggingIo(#[from] LogError),
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

impl EngineError {
    /// Whether the error stems from how the rules were written.
    pub fn is_rule_definition(&self) -> bool {
        matches!(self, Self::RuleDefinition(_))
    }

    /// Get a user-friendly suggestion for fixing this error.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::RuleDefinition(RuleDefinitionError::NoRules | RuleDefinitionError::NoActiveRules) => {
                Some("Create or activate at least one transformation rule.")
            }
            Self::RuleDefinition(RuleDefinitionError::UnknownSheet { .. }) => {
                Some("Check that the rule's sheet name matches a sheet in the workbook.")
            }
            Self::RuleDefinition(_) => {
                Some("Check the rule's start and end cells against the sheet contents.")
            }
            Self::Render { .. } => Some("Fix the rule expression and run the transformation again."),
            Self::ContainerCreation(_) => {
                Some("Choose a different ontology IRI prefix or remove the conflicting ontology.")
            }
            Self::NoActiveContainer => {
                Some("Load an ontology first or add the axioms to a new ontology.")
            }
            Self::LoggingIo(_) => Some("Check file permissions for the render log path."),
            Self::TraversalExhausted(_) | Self::ModelChange(_) => None,
        }
    }
}
