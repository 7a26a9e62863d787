//! Error types for sheet loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building or loading a workbook.
#[derive(Debug, Error)]
pub enum SheetError {
    // === File System Errors ===
    /// Workbook path does not exist.
    #[error("workbook not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    /// Failed to parse a CSV sheet.
    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// File name cannot be used as a sheet name.
    #[error("cannot derive a sheet name from {path}")]
    InvalidSheetName { path: PathBuf },

    // === Workbook Errors ===
    /// Two sheets share a name.
    #[error("duplicate sheet name '{name}'")]
    DuplicateSheet { name: String },

    /// Directory holds no CSV files.
    #[error("no CSV sheets found in {path}")]
    EmptyWorkbook { path: PathBuf },
}

/// Result type for sheet operations.
pub type Result<T> = std::result::Result<T, SheetError>;
