//! Keyword-based invoice categorization.

mod classifier;
mod table;

pub use classifier::{classify, Categories, KeywordClassifier, UNCATEGORIZED};
pub use table::{Category, CategoryTable};

/// Trait for document classifiers.
pub trait DocumentClassifier {
    /// Assign categories to a document's text. Never fails and never
    /// returns an empty result.
    fn classify(&self, text: &str) -> Categories;
}
