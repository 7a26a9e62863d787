//! Rendering results produced by evaluating a rule at one location.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One logical statement, kept as its serialized text.
///
/// Two axioms are the same statement iff their text is equal; the text is
/// trimmed on construction so incidental whitespace does not defeat dedup.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Axiom(String);

impl Axiom {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let trimmed = text.trim();
        if trimmed.len() == text.len() {
            Self(text)
        } else {
            Self(trimmed.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Axiom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Output of a renderer for one (rule, location) pair.
///
/// Equality is structural, so identical content rendered from different
/// rules or cells collapses to one entry in a set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "content", rename_all = "snake_case")]
pub enum Rendering {
    /// Statements destined for the target ontology.
    Axioms(BTreeSet<Axiom>),
    /// Plain text output with no ontology counterpart.
    Text(String),
}

impl Rendering {
    pub fn axioms<I, A>(axioms: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<Axiom>,
    {
        Self::Axioms(axioms.into_iter().map(Into::into).collect())
    }

    pub fn axiom(axiom: impl Into<Axiom>) -> Self {
        Self::axioms([axiom])
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// The axioms carried by this rendering, if it is the axiom variant.
    pub fn as_axioms(&self) -> Option<&BTreeSet<Axiom>> {
        match self {
            Self::Axioms(axioms) => Some(axioms),
            Self::Text(_) => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Axioms(_) => "axioms",
            Self::Text(_) => "text",
        }
    }
}

impl From<&str> for Axiom {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Axiom {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for Rendering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Axioms(axioms) => {
                for (pos, axiom) in axioms.iter().enumerate() {
                    if pos > 0 {
                        f.write_str("\n")?;
                    }
                    write!(f, "{axiom}")?;
                }
                Ok(())
            }
            Self::Text(text) => f.write_str(text),
        }
    }
}
