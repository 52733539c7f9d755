//! Pre-extracted plain text files.

use std::path::Path;

use super::{extension_of, Result, TextSource};

/// Reads `.txt` files as-is.
#[derive(Debug, Clone, Default)]
pub struct PlainTextSource;

impl PlainTextSource {
    pub fn new() -> Self {
        Self
    }
}

impl TextSource for PlainTextSource {
    fn name(&self) -> &'static str {
        "text"
    }

    fn supports(&self, path: &Path) -> bool {
        extension_of(path) == "txt"
    }

    fn extract(&self, path: &Path) -> Result<String> {
        Ok(std::fs::read_to_string(path)?)
    }
}
