//! Embedded text of digital PDF invoices.

use std::path::Path;

use tracing::debug;

use crate::error::SourceError;

use super::{extension_of, Result, TextSource};

/// Extracts the text layer of a PDF. Scanned PDFs without a text layer
/// yield empty text.
#[derive(Debug, Clone, Default)]
pub struct PdfTextSource;

impl PdfTextSource {
    pub fn new() -> Self {
        Self
    }

    /// Extract text from PDF bytes.
    pub fn extract_from_bytes(&self, data: &[u8]) -> Result<String> {
        let text = pdf_extract::extract_text_from_mem(data)
            .map_err(|e| SourceError::Pdf(e.to_string()))?;
        debug!("Extracted {} chars of PDF text", text.len());
        Ok(text)
    }
}

impl TextSource for PdfTextSource {
    fn name(&self) -> &'static str {
        "pdf"
    }

    fn supports(&self, path: &Path) -> bool {
        extension_of(path) == "pdf"
    }

    fn extract(&self, path: &Path) -> Result<String> {
        let data = std::fs::read(path)?;
        self.extract_from_bytes(&data)
    }
}
