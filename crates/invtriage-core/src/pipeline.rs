//! Record assembly: classification plus description filtering per document.

use tracing::{debug, info};

use crate::category::{CategoryTable, DocumentClassifier, KeywordClassifier};
use crate::description::DescriptionFilter;
use crate::error::Result;
use crate::models::config::TriageConfig;
use crate::models::record::{Document, OutputRecord};

/// Turns extracted text into output records.
///
/// Holds only immutable state, so one assembler can be shared across
/// threads and applied to documents in any order.
#[derive(Debug, Clone)]
pub struct RecordAssembler {
    classifier: KeywordClassifier,
    filter: DescriptionFilter,
}

impl RecordAssembler {
    /// Assembler with the built-in boilerplate filter.
    pub fn new(table: CategoryTable) -> Self {
        Self {
            classifier: KeywordClassifier::new(table),
            filter: DescriptionFilter::new(),
        }
    }

    /// Replace the description filter.
    pub fn with_filter(mut self, filter: DescriptionFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Load the category table and filter named by the configuration.
    pub fn from_config(config: &TriageConfig) -> Result<Self> {
        let table = CategoryTable::from_file(&config.categories_file)?;
        let filter = DescriptionFilter::with_extra_patterns(&config.filter.extra_patterns)?;
        Ok(Self::new(table).with_filter(filter))
    }

    pub fn table(&self) -> &CategoryTable {
        self.classifier.table()
    }

    /// Build the record for one document.
    pub fn assemble(&self, filename: &str, raw_text: &str) -> OutputRecord {
        let categories = self.classifier.classify(raw_text);
        let description = self.filter.filter(raw_text);

        debug!(
            "{}: {} ({} chars of description)",
            filename,
            categories,
            description.len()
        );

        OutputRecord {
            filename: filename.to_string(),
            categories,
            description,
            full_text: raw_text.to_string(),
        }
    }

    /// Build records for a batch, preserving input order.
    pub fn assemble_all(&self, documents: &[Document]) -> Vec<OutputRecord> {
        let records: Vec<OutputRecord> = documents
            .iter()
            .map(|doc| self.assemble(&doc.id, &doc.text))
            .collect();

        info!("Assembled {} records", records.len());
        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn assembler() -> RecordAssembler {
        let table = CategoryTable::from_entries([
            ("Utilities", vec!["electric", "gas"]),
            ("Repairs", vec!["repair"]),
        ])
        .unwrap();
        RecordAssembler::new(table)
    }

    #[test]
    fn test_assemble_record() {
        let text = "Invoice No: 12345\nWidget Repair Service\nTax ID: 99-1234567\n";
        let record = assembler().assemble("scan_01.png", text);

        assert_eq!(record.filename, "scan_01.png");
        assert_eq!(record.categories.as_slice(), &["Repairs".to_string()]);
        assert_eq!(record.description, "Widget Repair Service");
        assert_eq!(record.full_text, text);
    }

    #[test]
    fn test_assemble_is_deterministic() {
        let assembler = assembler();
        let text = "City Gas & Electric\nRepair of meter\nDate: 2024-01-01";
        assert_eq!(assembler.assemble("a.jpg", text), assembler.assemble("a.jpg", text));
    }

    #[test]
    fn test_failed_extraction_degrades_gracefully() {
        let record = assembler().assemble("broken.png", "");
        assert!(record.categories.is_uncategorized());
        assert_eq!(record.description, "");
        assert_eq!(record.full_text, "");
    }

    #[test]
    fn test_assemble_all_preserves_order() {
        let docs = vec![
            Document::new("b.png", "gas bill"),
            Document::new("a.png", "nothing here"),
            Document::new("c.png", "boiler repair"),
        ];
        let records = assembler().assemble_all(&docs);

        let summary: Vec<(&str, &str)> = records
            .iter()
            .map(|r| (r.filename.as_str(), r.categories.primary()))
            .collect();
        assert_eq!(
            summary,
            vec![("b.png", "Utilities"), ("a.png", "Uncategorized"), ("c.png", "Repairs")]
        );
    }

    #[test]
    fn test_shared_across_threads() {
        let assembler = assembler();
        let texts = ["gas", "repair", "electric repair", "misc"];

        let parallel: Vec<OutputRecord> = std::thread::scope(|scope| {
            let handles: Vec<_> = texts
                .iter()
                .enumerate()
                .map(|(i, text)| {
                    let assembler = &assembler;
                    scope.spawn(move || assembler.assemble(&format!("{i}.png"), text))
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        let sequential: Vec<OutputRecord> = texts
            .iter()
            .enumerate()
            .map(|(i, text)| assembler.assemble(&format!("{i}.png"), text))
            .collect();

        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_from_config() {
        let dir = tempfile::tempdir().unwrap();
        let categories = dir.path().join("categories.json");
        std::fs::write(&categories, r#"{ "Cloud": ["hosting"] }"#).unwrap();

        let mut config = TriageConfig::default();
        config.categories_file = categories;
        config.filter.extra_patterns = vec!["^thank you".to_string()];

        let assembler = RecordAssembler::from_config(&config).unwrap();
        let record = assembler.assemble("x.txt", "Hosting plan\nThank you!");
        assert_eq!(record.categories.primary(), "Cloud");
        assert_eq!(record.description, "Hosting plan");
    }

    #[test]
    fn test_from_config_bad_table_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let categories = dir.path().join("categories.json");
        std::fs::write(&categories, r#"{ "Cloud": "hosting" }"#).unwrap();

        let mut config = TriageConfig::default();
        config.categories_file = categories;

        let err = RecordAssembler::from_config(&config).unwrap_err();
        assert!(matches!(err, crate::TriageError::Config(crate::ConfigError::NotAList(_))));
    }
}
