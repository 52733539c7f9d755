//! Literal substring classifier.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::table::CategoryTable;
use super::DocumentClassifier;

/// Fallback category assigned when no keyword matches.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Ordered, non-empty list of matched category names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Categories(Vec<String>);

impl Categories {
    /// The fallback result.
    pub fn uncategorized() -> Self {
        Self(vec![UNCATEGORIZED.to_string()])
    }

    /// Whether this is the fallback result.
    pub fn is_uncategorized(&self) -> bool {
        self.0.len() == 1 && self.0[0] == UNCATEGORIZED
    }

    /// First matched category in table order.
    pub fn primary(&self) -> &str {
        &self.0[0]
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|c| c == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|c| c.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Categories joined with `", "`, as written to the CSV column.
    pub fn joined(&self) -> String {
        self.0.join(", ")
    }
}

impl From<Vec<String>> for Categories {
    fn from(names: Vec<String>) -> Self {
        if names.is_empty() {
            Self::uncategorized()
        } else {
            Self(names)
        }
    }
}

impl From<Categories> for Vec<String> {
    fn from(categories: Categories) -> Self {
        categories.0
    }
}

impl fmt::Display for Categories {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.joined())
    }
}

/// Classify text against a category table.
///
/// Text is lowercased before matching. A category matches when any of its
/// keywords occurs anywhere in the text, including inside longer words.
/// Matches are returned in table order; with no match the result is
/// `["Uncategorized"]`.
pub fn classify(text: &str, table: &CategoryTable) -> Categories {
    let lowered = text.to_lowercase();

    let matched: Vec<String> = table
        .iter()
        .filter(|category| match category.first_match(&lowered) {
            Some(keyword) => {
                trace!("'{}' matched on keyword '{}'", category.name(), keyword);
                true
            }
            None => false,
        })
        .map(|category| category.name().to_string())
        .collect();

    Categories::from(matched)
}

/// Classifier owning its category table.
#[derive(Debug, Clone)]
pub struct KeywordClassifier {
    table: CategoryTable,
}

impl KeywordClassifier {
    pub fn new(table: CategoryTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &CategoryTable {
        &self.table
    }
}

impl DocumentClassifier for KeywordClassifier {
    fn classify(&self, text: &str) -> Categories {
        classify(text, &self.table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn table() -> CategoryTable {
        CategoryTable::from_json(
            r#"{
                "Utilities": ["electric", "water supply"],
                "Office Supplies": ["toner", "paper"],
                "Vendors": ["acme"]
            }"#,
        )
        .unwrap()
    }

    fn names(categories: &Categories) -> Vec<&str> {
        categories.iter().collect()
    }

    #[test]
    fn test_no_keyword_is_uncategorized() {
        let result = classify("consulting services rendered", &table());
        assert_eq!(names(&result), vec![UNCATEGORIZED]);
        assert!(result.is_uncategorized());
    }

    #[test]
    fn test_empty_text_is_uncategorized() {
        assert!(classify("", &table()).is_uncategorized());
    }

    #[test]
    fn test_case_insensitive() {
        let result = classify("INVOICE FROM ACME", &table());
        assert_eq!(names(&result), vec!["Vendors"]);
    }

    #[test]
    fn test_mixed_case_keyword_matches() {
        let table = CategoryTable::from_entries([("Vendors", ["AcMe"])]).unwrap();
        assert_eq!(names(&classify("acme ltd", &table)), vec!["Vendors"]);
    }

    #[test]
    fn test_multiple_categories_in_table_order() {
        // Vendors keyword appears first in the text but Utilities comes first in the table.
        let result = classify("acme ltd\nelectric bill\nprinter toner", &table());
        assert_eq!(names(&result), vec!["Utilities", "Office Supplies", "Vendors"]);
    }

    #[test]
    fn test_substring_inside_word_matches() {
        let result = classify("paperclips x 200", &table());
        assert_eq!(names(&result), vec!["Office Supplies"]);
    }

    #[test]
    fn test_category_listed_once_when_several_keywords_match() {
        let result = classify("toner and paper", &table());
        assert_eq!(names(&result), vec!["Office Supplies"]);
    }

    #[test]
    fn test_stable_across_calls() {
        let table = table();
        let text = "Water supply for ACME offices, paper";
        assert_eq!(classify(text, &table), classify(text, &table));
    }

    #[test]
    fn test_keyword_classifier_trait() {
        let classifier = KeywordClassifier::new(table());
        let result = DocumentClassifier::classify(&classifier, "Electric company");
        assert_eq!(result.primary(), "Utilities");
        assert_eq!(classifier.table().len(), 3);
    }

    #[test]
    fn test_categories_joined_and_serde() {
        let categories = Categories::from(vec!["Utilities".to_string(), "Vendors".to_string()]);
        assert_eq!(categories.joined(), "Utilities, Vendors");
        assert_eq!(categories.to_string(), "Utilities, Vendors");

        let json = serde_json::to_string(&categories).unwrap();
        assert_eq!(json, r#"["Utilities","Vendors"]"#);

        let empty: Categories = serde_json::from_str("[]").unwrap();
        assert!(empty.is_uncategorized());
    }
}
