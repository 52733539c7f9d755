//! Documents entering the pipeline and records leaving it.

use serde::{Deserialize, Serialize};

use crate::category::Categories;

/// A document whose text has already been extracted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// File name or path identifying the document.
    pub id: String,

    /// Raw extracted text. Empty when extraction failed.
    pub text: String,
}

impl Document {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// One triaged document, as handed to persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRecord {
    /// Source file name.
    pub filename: String,

    /// Matched categories, never empty.
    pub categories: Categories,

    /// Text left after boilerplate removal.
    pub description: String,

    /// Full extracted text.
    pub full_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_record_json_shape() {
        let record = OutputRecord {
            filename: "scan_01.png".to_string(),
            categories: Categories::from(vec!["Utilities".to_string(), "Telecom".to_string()]),
            description: "Fiber plan".to_string(),
            full_text: "fiber plan".to_string(),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "filename": "scan_01.png",
                "categories": ["Utilities", "Telecom"],
                "description": "Fiber plan",
                "full_text": "fiber plan",
            })
        );
    }
}
