//! `cellax.toml` settings.
//!
//! Every field has a default, so an absent file and an empty file behave the
//! same. Command line flags override whatever is loaded here.

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use cellax_model::MergeDecision;
use cellax_ontology::DEFAULT_BASE_IRI;

/// File name looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "cellax.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub ontology: OntologySettings,
    pub run: RunSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OntologySettings {
    /// Prefix for freshly generated ontology IRIs.
    pub base_iri: String,
    /// IRI of the active ontology when no ontology file is loaded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_iri: Option<String>,
}

impl Default for OntologySettings {
    fn default() -> Self {
        Self {
            base_iri: DEFAULT_BASE_IRI.to_string(),
            default_iri: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunSettings {
    pub decision: DecisionMode,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogSettings {
    /// Where the render log is written; in memory only when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub render_log: Option<PathBuf>,
}

/// How the merge decision is obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionMode {
    /// Ask on the terminal.
    #[default]
    Prompt,
    Cancel,
    New,
    Current,
}

impl DecisionMode {
    /// The decision to apply without asking, if any.
    #[must_use]
    pub const fn fixed(self) -> Option<MergeDecision> {
        match self {
            Self::Prompt => None,
            Self::Cancel => Some(MergeDecision::Cancel),
            Self::New => Some(MergeDecision::CreateNewContainer),
            Self::Current => Some(MergeDecision::MergeIntoCurrentContainer),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Prompt => "prompt",
            Self::Cancel => "cancel",
            Self::New => "new",
            Self::Current => "current",
        }
    }
}

impl fmt::Display for DecisionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Settings {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("parse settings")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("in {}", path.display()))
    }

    /// Load `path` if given, else `cellax.toml` in `dir` if it exists, else defaults.
    ///
    /// An explicitly named file must exist.
    pub fn discover(path: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        let candidate = dir.join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }
}
