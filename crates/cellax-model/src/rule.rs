//! Transformation rules and the JSON documents they are authored in.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::address::{WILDCARD, is_wildcard};
use crate::error::{ModelError, Result};

fn default_active() -> bool {
    true
}

/// A declared mapping from a spreadsheet region to a statement template.
///
/// Coordinates keep their textual spreadsheet notation (column letters and
/// 1-based row labels). `end_column` and `end_row` may hold the wildcard `+`,
/// meaning the boundary is resolved against the sheet at run time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformationRule {
    pub sheet_name: String,
    pub start_column: String,
    pub end_column: String,
    pub start_row: String,
    pub end_row: String,
    /// Mapping expression handed to the renderer untouched.
    pub expression: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

impl TransformationRule {
    /// Create an active rule over `start_column start_row : end_column end_row`.
    pub fn new(
        sheet_name: impl Into<String>,
        start_column: impl Into<String>,
        end_column: impl Into<String>,
        start_row: impl Into<String>,
        end_row: impl Into<String>,
        expression: impl Into<String>,
    ) -> Self {
        Self {
            sheet_name: sheet_name.into(),
            start_column: start_column.into(),
            end_column: end_column.into(),
            start_row: start_row.into(),
            end_row: end_row.into(),
            expression: expression.into(),
            comment: String::new(),
            active: true,
        }
    }

    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    #[must_use]
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn has_end_column_wildcard(&self) -> bool {
        is_wildcard(&self.end_column)
    }

    pub fn has_end_row_wildcard(&self) -> bool {
        is_wildcard(&self.end_row)
    }

    /// Declared range in spreadsheet notation, e.g. `"A2:C+"`.
    pub fn range_label(&self) -> String {
        let end_column = if self.has_end_column_wildcard() {
            WILDCARD
        } else {
            self.end_column.trim()
        };
        let end_row = if self.has_end_row_wildcard() {
            WILDCARD
        } else {
            self.end_row.trim()
        };
        format!(
            "{}{}:{}{}",
            self.start_column.trim(),
            self.start_row.trim(),
            end_column,
            end_row
        )
    }
}

impl fmt::Display for TransformationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}!{}", self.sheet_name, self.range_label())
    }
}

/// A persisted collection of rules in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleDocument {
    #[serde(default)]
    pub rules: Vec<TransformationRule>,
}

impl RuleDocument {
    pub fn new(rules: Vec<TransformationRule>) -> Self {
        Self { rules }
    }

    /// Parse a rule document from JSON text. `origin` is only used in errors.
    pub fn from_json_str(json: &str, origin: &Path) -> Result<Self> {
        serde_json::from_str(json).map_err(|source| ModelError::RuleDocumentParse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Read and parse a rule document from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| ModelError::RuleDocumentRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json, path)
    }

    pub fn active_count(&self) -> usize {
        self.rules.iter().filter(|rule| rule.is_active()).count()
    }
}
