//! Per-location render log.
//!
//! One record is written for every (rule, location) pair the evaluator
//! visits, whether or not anything was rendered. The log is persisted once,
//! after the merge step.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use cellax_model::{Location, Rendering, TransformationRule};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::LogError;

/// Sink for render log records.
pub trait RenderLog {
    fn record(&mut self, rule: &TransformationRule, location: &Location, renderings: &[Rendering]);

    /// Persist the records collected so far.
    fn save(&mut self) -> Result<(), LogError>;
}

/// One evaluated (rule, location) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    pub rule: String,
    pub expression: String,
    pub location: Location,
    pub cell: String,
    pub rendered: Vec<String>,
}

impl LogRecord {
    pub fn new(rule: &TransformationRule, location: &Location, renderings: &[Rendering]) -> Self {
        Self {
            rule: rule.to_string(),
            expression: rule.expression.clone(),
            location: location.clone(),
            cell: location.to_a1(),
            rendered: renderings.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Render log kept in memory; `save` is a no-op.
#[derive(Debug, Default)]
pub struct MemoryRenderLog {
    records: Vec<LogRecord>,
}

impl MemoryRenderLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[LogRecord] {
        &self.records
    }
}

impl RenderLog for MemoryRenderLog {
    fn record(&mut self, rule: &TransformationRule, location: &Location, renderings: &[Rendering]) {
        self.records.push(LogRecord::new(rule, location, renderings));
    }

    fn save(&mut self) -> Result<(), LogError> {
        Ok(())
    }
}

/// Render log written to a JSON-lines file on `save`.
#[derive(Debug)]
pub struct FileRenderLog {
    path: PathBuf,
    records: Vec<LogRecord>,
}

impl FileRenderLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            records: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn records(&self) -> &[LogRecord] {
        &self.records
    }

    fn write_all(&self) -> Result<(), LogError> {
        let io_error = |source| LogError::Io {
            path: self.path.clone(),
            source,
        };
        let file = File::create(&self.path).map_err(io_error)?;
        let mut writer = BufWriter::new(file);
        for record in &self.records {
            serde_json::to_writer(&mut writer, record)?;
            writer.write_all(b"\n").map_err(io_error)?;
        }
        writer.flush().map_err(io_error)
    }
}

impl RenderLog for FileRenderLog {
    fn record(&mut self, rule: &TransformationRule, location: &Location, renderings: &[Rendering]) {
        debug!(rule = %rule, location = %location, rendered = renderings.len(), "render log record");
        self.records.push(LogRecord::new(rule, location, renderings));
    }

    fn save(&mut self) -> Result<(), LogError> {
        self.write_all()?;
        info!(path = %self.path.display(), records = self.records.len(), "saved render log");
        Ok(())
    }
}
