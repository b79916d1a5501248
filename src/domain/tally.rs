//! Tag count accumulator

use std::collections::BTreeMap;

/// Accumulates occurrence counts keyed by normalized tag slug.
///
/// One tally is created per aggregation call and discarded with it;
/// nothing is cached across calls.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TagTally {
    counts: BTreeMap<String, u64>,
}

impl TagTally {
    pub fn new() -> Self {
        TagTally::default()
    }

    /// Increment the count for a slug, inserting it at 1 on first sight.
    pub fn bump(&mut self, slug: &str) {
        *self.counts.entry(slug.to_string()).or_insert(0) += 1;
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn get(&self, slug: &str) -> u64 {
        self.counts.get(slug).copied().unwrap_or(0)
    }

    /// Consume the tally, yielding the final slug → count mapping.
    pub fn into_counts(self) -> BTreeMap<String, u64> {
        self.counts
    }
}
