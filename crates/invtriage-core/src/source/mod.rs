//! Text sources feeding documents into the pipeline.

#[cfg(feature = "native")]
mod ocr;
mod pdf;
mod text;

#[cfg(feature = "native")]
pub use ocr::OcrTextSource;
pub use pdf::PdfTextSource;
pub use text::PlainTextSource;

use std::path::Path;

use tracing::{debug, error, warn};

use crate::error::{SourceError, TriageError};
use crate::models::config::TriageConfig;
use crate::models::record::Document;

/// Result type for text extraction.
pub type Result<T> = std::result::Result<T, SourceError>;

/// Trait for anything that turns a file into raw text.
pub trait TextSource {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Whether this source handles the given file.
    fn supports(&self, path: &Path) -> bool;

    /// Extract raw text from the file.
    fn extract(&self, path: &Path) -> Result<String>;
}

/// Lowercased extension of a path, or empty.
pub(crate) fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}

/// Dispatches files to the first source that supports them.
///
/// Extraction failures never escape: they are logged and the document
/// carries empty text, which the pipeline classifies as uncategorized.
pub struct DocumentReader {
    sources: Vec<Box<dyn TextSource>>,
    lowercase: bool,
}

impl DocumentReader {
    /// Reader with no sources.
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
            lowercase: false,
        }
    }

    /// Reader with the plain text and PDF sources.
    pub fn with_default_sources() -> Self {
        Self::new()
            .with_source(PlainTextSource::new())
            .with_source(PdfTextSource::new())
    }

    /// Reader for the configured input settings.
    ///
    /// With `with_ocr` set, the OCR engine is loaded as well and a load
    /// failure is returned to the caller.
    pub fn from_config(config: &TriageConfig, with_ocr: bool) -> std::result::Result<Self, TriageError> {
        let reader = Self::with_default_sources().with_lowercase(config.input.lowercase_text);
        if !with_ocr {
            return Ok(reader);
        }

        #[cfg(feature = "native")]
        {
            return Ok(reader.with_source(OcrTextSource::from_config(&config.ocr)?));
        }

        #[cfg(not(feature = "native"))]
        {
            drop(reader);
            Err(SourceError::ModelLoad("built without OCR support".to_string()).into())
        }
    }

    /// Append a source. Earlier sources win.
    pub fn with_source<S: TextSource + 'static>(mut self, source: S) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Lowercase extracted text.
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    /// Whether any source handles the path.
    pub fn supports(&self, path: &Path) -> bool {
        self.sources.iter().any(|s| s.supports(path))
    }

    /// Extract text, propagating errors.
    pub fn try_read_text(&self, path: &Path) -> Result<String> {
        let source = self
            .sources
            .iter()
            .find(|s| s.supports(path))
            .ok_or_else(|| SourceError::Unsupported(extension_of(path)))?;

        debug!("Reading {} with {} source", path.display(), source.name());
        let text = source.extract(path)?;

        if self.lowercase {
            Ok(text.to_lowercase())
        } else {
            Ok(text)
        }
    }

    /// Read a document, degrading to empty text on any failure.
    pub fn read(&self, path: &Path) -> Document {
        let id = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string)
            .unwrap_or_else(|| path.display().to_string());

        let text = match self.try_read_text(path) {
            Ok(text) => {
                if text.trim().is_empty() {
                    warn!("No text extracted from {}", path.display());
                }
                text
            }
            Err(e) => {
                error!("Error processing {}: {}", path.display(), e);
                String::new()
            }
        };

        Document::new(id, text)
    }
}

impl Default for DocumentReader {
    fn default() -> Self {
        Self::with_default_sources()
    }
}
