//! Format-specific resume readers.
//!
//! Dispatch is by filename extension (the substring after the last dot,
//! lowercased). CPU-bound readers run off the async reactor; images go
//! through the pluggable [`OcrEngine`].

pub mod docx;
pub mod ocr;
pub mod pdf;
pub mod text;

use anyhow::Context;
use bytes::Bytes;
use thiserror::Error;

use crate::errors::AppError;

pub use ocr::{OcrEngine, VisionOcr};

/// Listed in the 400 response for unsupported uploads.
pub const SUPPORTED_TYPES: &str = "PDF, DOCX, PNG, JPG, JPEG, TIFF, BMP, TXT";

/// Reader-level failure. All variants map to a 400: the uploaded document
/// could not be read, which is a property of the document.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    #[error("DOCX extraction failed: {0}")]
    Docx(String),

    #[error("invalid image: {0}")]
    Image(String),

    #[error("OCR failed: {0}")]
    Ocr(String),

    #[error("text file is not valid UTF-8")]
    InvalidUtf8,
}

/// Resume formats this service accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Pdf,
    Docx,
    Image,
    Text,
}

impl FileFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "pdf" => Some(FileFormat::Pdf),
            "docx" => Some(FileFormat::Docx),
            "png" | "jpg" | "jpeg" | "tiff" | "bmp" => Some(FileFormat::Image),
            "txt" => Some(FileFormat::Text),
            _ => None,
        }
    }
}

/// Returns the lowercased extension of `filename`: the substring after the
/// last dot, or the whole name when there is none.
pub fn extension_of(filename: &str) -> String {
    match filename.rsplit_once('.') {
        Some((_, ext)) => ext.to_lowercase(),
        None => filename.to_lowercase(),
    }
}

/// Runs the reader for `format` over the uploaded bytes.
pub async fn extract_text(
    format: FileFormat,
    data: Bytes,
    ocr: &dyn OcrEngine,
) -> Result<String, AppError> {
    let text = match format {
        FileFormat::Pdf => tokio::task::spawn_blocking(move || pdf::extract(&data))
            .await
            .context("PDF extraction task failed")??,
        FileFormat::Docx => tokio::task::spawn_blocking(move || docx::extract(&data))
            .await
            .context("DOCX extraction task failed")??,
        FileFormat::Image => ocr.extract_text(&data).await?,
        FileFormat::Text => text::extract(&data)?,
    };
    Ok(text)
}
