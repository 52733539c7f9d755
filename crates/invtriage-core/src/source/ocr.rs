//! Image text extraction using `pure-onnx-ocr`.

use std::path::Path;
use std::time::Instant;

use image::{DynamicImage, GenericImageView};
use tracing::{debug, info};

use crate::error::SourceError;
use crate::models::config::OcrConfig;

use super::{extension_of, Result, TextSource};

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "tif", "tiff", "bmp", "webp"];

/// Rows closer than this many pixels are treated as one line.
const ROW_HEIGHT: f32 = 20.0;

/// A recognized text region with its top-left corner.
struct Region {
    x: f32,
    y: f32,
    text: String,
}

/// OCR source backed by `pure-onnx-ocr` (pure Rust, no external ONNX Runtime).
pub struct OcrTextSource {
    engine: pure_onnx_ocr::engine::OcrEngine,
    keep_unk: bool,
}

impl OcrTextSource {
    /// Load detection, recognition and dictionary files from the configured directory.
    pub fn from_config(config: &OcrConfig) -> Result<Self> {
        let det_path = config.model_path(&config.detection_model);
        let rec_path = config.model_path(&config.recognition_model);
        let dict_path = config.model_path(&config.dictionary);

        for path in [&det_path, &rec_path, &dict_path] {
            if !path.exists() {
                return Err(SourceError::ModelLoad(format!(
                    "missing model file {}",
                    path.display()
                )));
            }
        }

        let engine = pure_onnx_ocr::engine::OcrEngineBuilder::new()
            .det_model_path(&det_path)
            .rec_model_path(&rec_path)
            .dictionary_path(&dict_path)
            .build()
            .map_err(|e| SourceError::ModelLoad(format!("pure-onnx-ocr: {}", e)))?;

        info!("Loaded pure-onnx-ocr engine from {}", config.model_dir.display());

        Ok(Self {
            engine,
            keep_unk: config.keep_unk,
        })
    }

    /// Recognize text in an image, one line per region in reading order.
    pub fn recognize(&self, image: &DynamicImage) -> Result<String> {
        let start = Instant::now();
        let (width, height) = image.dimensions();
        debug!("Processing image: {}x{}", width, height);

        let results = self
            .engine
            .run_from_image(image)
            .map_err(|e| SourceError::Ocr(format!("pure-onnx-ocr: {}", e)))?;

        let mut regions: Vec<Region> = results
            .iter()
            .map(|r| {
                let (x, y) = top_left(&r.bounding_box);
                let text = if self.keep_unk {
                    r.text.clone()
                } else {
                    r.text.replace("[UNK]", " ")
                };
                Region { x, y, text }
            })
            .collect();

        sort_reading_order(&mut regions);

        let text = regions
            .iter()
            .map(|r| r.text.as_str())
            .collect::<Vec<_>>()
            .join("\n");

        debug!(
            "OCR complete: {} text regions in {}ms",
            regions.len(),
            start.elapsed().as_millis()
        );

        Ok(text)
    }
}

impl TextSource for OcrTextSource {
    fn name(&self) -> &'static str {
        "ocr"
    }

    fn supports(&self, path: &Path) -> bool {
        IMAGE_EXTENSIONS.contains(&extension_of(path).as_str())
    }

    fn extract(&self, path: &Path) -> Result<String> {
        let image = image::open(path)?;
        self.recognize(&image)
    }
}

/// Top-to-bottom by row band, then left-to-right.
fn sort_reading_order(regions: &mut [Region]) {
    regions.sort_by(|a, b| {
        let row_a = (a.y / ROW_HEIGHT) as i32;
        let row_b = (b.y / ROW_HEIGHT) as i32;
        if row_a != row_b {
            row_a.cmp(&row_b)
        } else {
            a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal)
        }
    });
}

/// Minimum x and y over the polygon's exterior points.
fn top_left(polygon: &pure_onnx_ocr::Polygon<f64>) -> (f32, f32) {
    polygon
        .exterior()
        .coords()
        .fold((f32::INFINITY, f32::INFINITY), |(x, y), c| {
            (x.min(c.x as f32), y.min(c.y as f32))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(x: f32, y: f32, text: &str) -> Region {
        Region {
            x,
            y,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_reading_order() {
        let mut regions = vec![
            region(300.0, 45.0, "total"),
            region(10.0, 5.0, "acme"),
            region(10.0, 42.0, "hosting"),
            region(200.0, 8.0, "invoice"),
        ];
        sort_reading_order(&mut regions);

        let texts: Vec<&str> = regions.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["acme", "invoice", "hosting", "total"]);
    }

    #[test]
    fn test_missing_models() {
        let config = OcrConfig {
            model_dir: "/nonexistent/models".into(),
            ..OcrConfig::default()
        };
        assert!(matches!(
            OcrTextSource::from_config(&config),
            Err(SourceError::ModelLoad(_))
        ));
    }
}
