//! Core library for invoice triage.
//!
//! This crate provides:
//! - Category keyword tables loaded from JSON
//! - Literal, case-insensitive keyword classification
//! - Boilerplate line filtering (invoice numbers, dates, tax IDs, bank codes)
//! - Output record assembly and per-category summaries
//! - Text sources feeding the pipeline (plain text, PDF, OCR)

pub mod category;
pub mod description;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod source;
pub mod summary;

pub use category::{Categories, Category, CategoryTable, DocumentClassifier, KeywordClassifier, classify, UNCATEGORIZED};
pub use description::{filter_description, DescriptionFilter};
pub use error::{ConfigError, Result, SourceError, TriageError};
pub use models::config::TriageConfig;
pub use models::record::{Document, OutputRecord};
pub use pipeline::RecordAssembler;
pub use source::{DocumentReader, PdfTextSource, PlainTextSource, TextSource};
#[cfg(feature = "native")]
pub use source::OcrTextSource;
pub use summary::CategorySummary;
