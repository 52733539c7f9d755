//! Error types for the invtriage-core library.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the invtriage library.
#[derive(Error, Debug)]
pub enum TriageError {
    /// Category table or tool configuration is unusable.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A text source could not be set up.
    #[error("text source error: {0}")]
    Source(#[from] SourceError),
}

/// Errors raised while loading or validating configuration.
///
/// Every variant is fatal to a run: without a category table no document
/// can be classified.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file does not exist.
    #[error("file not found: {0}")]
    Missing(PathBuf),

    /// The configuration file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The content is not valid JSON.
    #[error("failed to parse: {0}")]
    Parse(#[from] serde_json::Error),

    /// The category table is not a JSON object.
    #[error("category table must be a JSON object of category name to keyword list")]
    NotAnObject,

    /// The category table has no categories.
    #[error("category table is empty")]
    EmptyTable,

    /// A category name is empty or whitespace.
    #[error("category name must not be empty")]
    EmptyCategoryName,

    /// A category uses the reserved fallback name.
    #[error("category name '{0}' is reserved")]
    ReservedName(String),

    /// A category name appears more than once.
    #[error("duplicate category '{0}'")]
    DuplicateCategory(String),

    /// A category maps to something other than a list.
    #[error("category '{0}' must map to a list of keywords")]
    NotAList(String),

    /// A category maps to an empty list.
    #[error("category '{0}' has no keywords")]
    NoKeywords(String),

    /// A keyword is not a non-empty string.
    #[error("category '{category}' has an invalid keyword at position {index}")]
    InvalidKeyword { category: String, index: usize },

    /// An extra boilerplate pattern failed to compile.
    #[error("invalid boilerplate pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Errors related to extracting text from a document.
#[derive(Error, Debug)]
pub enum SourceError {
    /// No configured source handles this file type.
    #[error("unsupported file type: {0}")]
    Unsupported(String),

    /// The file could not be read.
    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// The image could not be decoded.
    #[error("failed to decode image: {0}")]
    Image(#[from] image::ImageError),

    /// PDF text extraction failed.
    #[error("failed to extract PDF text: {0}")]
    Pdf(String),

    /// OCR models could not be loaded.
    #[error("failed to load OCR model: {0}")]
    ModelLoad(String),

    /// OCR inference failed.
    #[error("OCR failed: {0}")]
    Ocr(String),
}

/// Result type for the invtriage library.
pub type Result<T> = std::result::Result<T, TriageError>;
