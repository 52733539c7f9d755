//! Per-category counts over finished records.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::record::OutputRecord;

/// Number of documents per category, ordered by category name.
///
/// A document carrying several categories is counted once under each.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    counts: BTreeMap<String, usize>,
    documents: usize,
}

impl CategorySummary {
    pub fn from_records(records: &[OutputRecord]) -> Self {
        records.iter().fold(Self::default(), |mut summary, record| {
            summary.documents += 1;
            for category in record.categories.iter() {
                *summary.counts.entry(category.to_string()).or_insert(0) += 1;
            }
            summary
        })
    }

    /// `(category, count)` pairs sorted by category name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(name, count)| (name.as_str(), *count))
    }

    pub fn count(&self, category: &str) -> usize {
        self.counts.get(category).copied().unwrap_or(0)
    }

    /// Number of records summarized.
    pub fn documents(&self) -> usize {
        self.documents
    }
}
