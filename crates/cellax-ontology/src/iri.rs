//! Fresh ontology IRI generation.

use chrono::{Datelike, Local, NaiveDate};
use tracing::debug;

use cellax_model::ContainerId;

use crate::error::Result;
use crate::service::IdentifierService;

/// Default IRI prefix for generated ontologies.
pub const DEFAULT_BASE_IRI: &str = "http://www.semanticweb.org/ontologies";

/// Generates `{base}/{year}/{month}/untitled-ontology-{n}` IRIs.
///
/// The counter only moves forward. Use [`FreshIriGenerator::continuing_after`]
/// to resume numbering past ontologies generated in earlier sessions; any
/// remaining collision is detected by the model service when the container
/// is created.
#[derive(Debug, Clone)]
pub struct FreshIriGenerator {
    base: String,
    date: NaiveDate,
    next: u32,
}

impl FreshIriGenerator {
    /// Generator stamped with today's local date.
    pub fn new(base: impl Into<String>) -> Self {
        Self::with_date(base, Local::now().date_naive())
    }

    pub fn with_date(base: impl Into<String>, date: NaiveDate) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
            date,
            next: 1,
        }
    }

    /// Start numbering at `next` instead of 1.
    #[must_use]
    pub fn starting_at(mut self, next: u32) -> Self {
        self.next = next;
        self
    }

    /// Skip past the highest `untitled-ontology-N` among `existing` that
    /// shares this generator's base and month.
    #[must_use]
    pub fn continuing_after<'a>(
        mut self,
        existing: impl IntoIterator<Item = &'a ContainerId>,
    ) -> Self {
        let prefix = self.prefix();
        let highest = existing
            .into_iter()
            .filter_map(|id| id.as_str().strip_prefix(&prefix)?.parse::<u32>().ok())
            .max();
        if let Some(highest) = highest {
            self.next = self.next.max(highest.saturating_add(1));
            debug!(next = self.next, "resuming ontology numbering");
        }
        self
    }

    fn prefix(&self) -> String {
        format!(
            "{}/{}/{}/untitled-ontology-",
            self.base,
            self.date.year(),
            self.date.month()
        )
    }
}

impl Default for FreshIriGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_IRI)
    }
}

impl IdentifierService for FreshIriGenerator {
    fn generate_fresh_identifier(&mut self) -> Result<ContainerId> {
        let iri = format!("{}{}", self.prefix(), self.next);
        self.next = self.next.saturating_add(1);
        debug!(iri = %iri, "generated ontology IRI");
        Ok(ContainerId::new(iri)?)
    }
}
