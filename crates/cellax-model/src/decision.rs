use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How the operator wants the collected axioms reconciled with the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergeDecision {
    /// Discard the results.
    Cancel,
    /// Create a fresh ontology that imports the active one and holds the results.
    CreateNewContainer,
    /// Add the results to the active ontology.
    MergeIntoCurrentContainer,
}

impl MergeDecision {
    /// All choices in the order they are offered to the operator.
    pub const ALL: [MergeDecision; 3] = [
        MergeDecision::Cancel,
        MergeDecision::CreateNewContainer,
        MergeDecision::MergeIntoCurrentContainer,
    ];

    /// Button label shown to the operator.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Cancel => "Cancel",
            Self::CreateNewContainer => "Add to a new ontology",
            Self::MergeIntoCurrentContainer => "Add to current ontology",
        }
    }

    /// Position of this choice in [`MergeDecision::ALL`].
    pub const fn index(&self) -> usize {
        match self {
            Self::Cancel => 0,
            Self::CreateNewContainer => 1,
            Self::MergeIntoCurrentContainer => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for MergeDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MergeDecision {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "0" | "c" | "cancel" => Ok(Self::Cancel),
            "1" | "n" | "new" => Ok(Self::CreateNewContainer),
            "2" | "m" | "current" | "merge" => Ok(Self::MergeIntoCurrentContainer),
            _ => Err(format!("Unknown merge decision: {s}")),
        }
    }
}
