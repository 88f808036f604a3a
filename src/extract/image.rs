//! OCR of raster images through the tesseract command-line tool.

use std::io::ErrorKind;
use std::process::Command;

use image::ImageFormat;
use tempfile::TempDir;
use tracing::debug;

use super::ExtractError;
use crate::config::Config;

pub struct ImageExtractor {
    tesseract_cmd: String,
    language: String,
}

impl ImageExtractor {
    pub fn new(tesseract_cmd: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            tesseract_cmd: tesseract_cmd.into(),
            language: language.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.tesseract_cmd.clone(), config.ocr_language.clone())
    }

    /// Decode `bytes` and return whatever tesseract prints, untouched.
    pub fn extract(&self, bytes: &[u8]) -> Result<String, ExtractError> {
        let img = image::load_from_memory(bytes).map_err(|e| match e {
            image::ImageError::Unsupported(_) | image::ImageError::Decoding(_) => {
                ExtractError::Decode(e.to_string())
            }
            other => ExtractError::Processing(other.to_string()),
        })?;
        debug!(width = img.width(), height = img.height(), "decoded image");

        // tesseract only gets PNG, whatever the source format was.
        let temp_dir = TempDir::new()?;
        let image_path = temp_dir.path().join("input.png");
        img.save_with_format(&image_path, ImageFormat::Png)
            .map_err(|e| ExtractError::Processing(e.to_string()))?;

        let output = Command::new(&self.tesseract_cmd)
            .arg(&image_path)
            .arg("stdout")
            .args(["-l", &self.language])
            .output();

        match output {
            Ok(output) if output.status.success() => {
                Ok(String::from_utf8_lossy(&output.stdout).into_owned())
            }
            Ok(output) => {
                let stderr = String::from_utf8_lossy(&output.stderr);
                Err(ExtractError::Processing(format!(
                    "tesseract failed ({}): {}",
                    output.status,
                    stderr.trim()
                )))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(ExtractError::EngineUnavailable(self.tesseract_cmd.clone()))
            }
            Err(e) => Err(e.into()),
        }
    }
}
