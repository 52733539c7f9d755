//! Configuration structures for the triage tool.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Main configuration for invtriage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TriageConfig {
    /// Category keyword table (JSON object of name to keyword list).
    pub categories_file: PathBuf,

    /// Input discovery and text normalization.
    pub input: InputConfig,

    /// OCR engine configuration.
    pub ocr: OcrConfig,

    /// Boilerplate filter configuration.
    pub filter: FilterConfig,

    /// Result file configuration.
    pub output: OutputConfig,
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self {
            categories_file: PathBuf::from("categories.json"),
            input: InputConfig::default(),
            ocr: OcrConfig::default(),
            filter: FilterConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

/// Input discovery configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// File extensions picked up from an input directory (lowercase, no dot).
    pub extensions: Vec<String>,

    /// Lowercase extracted text before it enters the pipeline.
    pub lowercase_text: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            extensions: ["jpg", "jpeg", "png", "pdf", "txt"]
                .iter()
                .map(|e| e.to_string())
                .collect(),
            lowercase_text: true,
        }
    }
}

impl InputConfig {
    /// Whether a path has one of the configured extensions.
    pub fn accepts(&self, path: &Path) -> bool {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        self.extensions.iter().any(|e| e.eq_ignore_ascii_case(&ext))
    }
}

/// OCR engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrConfig {
    /// Directory containing model files.
    pub model_dir: PathBuf,

    /// Text detection model file name.
    pub detection_model: String,

    /// Text recognition model file name.
    pub recognition_model: String,

    /// Character dictionary file name.
    pub dictionary: String,

    /// Keep `[UNK]` markers for unrecognized characters instead of blanking them.
    pub keep_unk: bool,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            model_dir: PathBuf::from("models"),
            detection_model: "det.onnx".to_string(),
            recognition_model: "latin_rec.onnx".to_string(),
            dictionary: "latin_dict.txt".to_string(),
            keep_unk: false,
        }
    }
}

impl OcrConfig {
    /// Get full path to a model file.
    pub fn model_path(&self, model_name: &str) -> PathBuf {
        self.model_dir.join(model_name)
    }
}

/// Boilerplate filter configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Regex patterns appended to the built-in boilerplate set.
    pub extra_patterns: Vec<String>,
}

/// Result file configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory receiving result files.
    pub results_dir: PathBuf,

    /// File name prefix for result files.
    pub file_prefix: String,

    /// `chrono` format string appended to the prefix.
    pub timestamp_format: String,

    /// Write the JSON result file.
    pub write_json: bool,

    /// Write the CSV result file.
    pub write_csv: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            results_dir: PathBuf::from("results"),
            file_prefix: "categorization_results".to_string(),
            timestamp_format: "%Y%m%d_%H%M%S".to_string(),
            write_json: true,
            write_csv: true,
        }
    }
}

impl TriageConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::Missing(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        std::fs::write(path, content)
    }
}
