pub mod batch;
pub mod categories;
pub mod config;
pub mod process;

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use invtriage_core::models::config::TriageConfig;
use invtriage_core::DocumentReader;

/// Load the explicit config file, else the user config file, else defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<TriageConfig> {
    if let Some(path) = config_path {
        return Ok(TriageConfig::from_file(Path::new(path))?);
    }

    let default_path = config::default_config_path();
    if default_path.exists() {
        debug!("Using config file {}", default_path.display());
        Ok(TriageConfig::from_file(&default_path)?)
    } else {
        Ok(TriageConfig::default())
    }
}

/// Build a document reader for the given files.
///
/// The OCR engine is only loaded when at least one file needs it; if it
/// cannot be loaded, images come through as empty text.
pub fn build_reader(config: &TriageConfig, files: &[PathBuf]) -> anyhow::Result<DocumentReader> {
    let plain = DocumentReader::from_config(config, false)?;
    if files.iter().all(|f| plain.supports(f)) {
        return Ok(plain);
    }

    match DocumentReader::from_config(config, true) {
        Ok(reader) => Ok(reader),
        Err(e) => {
            warn!("OCR unavailable, images will be left uncategorized: {}", e);
            Ok(plain)
        }
    }
}
