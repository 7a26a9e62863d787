//! Deduplicating accumulation of rendering results.

use std::collections::{BTreeSet, HashSet};

use cellax_model::{Axiom, Rendering};

/// Running set of renderings for one transformation run.
///
/// Results are compared by content, so the same statement produced by
/// different rules or cells is kept once.
#[derive(Debug, Default)]
pub struct ResultCollector {
    results: HashSet<Rendering>,
    produced: usize,
}

impl ResultCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge `renderings` into the set and return how many were new.
    pub fn add(&mut self, renderings: impl IntoIterator<Item = Rendering>) -> usize {
        let mut inserted = 0;
        for rendering in renderings {
            self.produced += 1;
            if self.results.insert(rendering) {
                inserted += 1;
            }
        }
        inserted
    }

    /// Number of distinct renderings.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Number of renderings offered, duplicates included.
    pub fn produced(&self) -> usize {
        self.produced
    }

    pub fn contains(&self, rendering: &Rendering) -> bool {
        self.results.contains(rendering)
    }

    pub fn results(&self) -> &HashSet<Rendering> {
        &self.results
    }

    pub fn into_results(self) -> HashSet<Rendering> {
        self.results
    }
}

/// Flatten the axiom renderings of a result set into one sorted axiom set.
///
/// Non-axiom renderings contribute nothing.
pub fn collect_axioms<'a>(results: impl IntoIterator<Item = &'a Rendering>) -> BTreeSet<Axiom> {
    results
        .into_iter()
        .filter_map(Rendering::as_axioms)
        .flat_map(|axioms| axioms.iter().cloned())
        .collect()
}
