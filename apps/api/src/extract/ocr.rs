//! Image text extraction via the vision-capable LLM endpoint.

use async_trait::async_trait;
use base64::Engine as _;

use crate::llm_client::prompts::{OCR_SYSTEM, OCR_TRANSCRIBE_PROMPT};
use crate::llm_client::LlmClient;

use super::ExtractError;

/// Pluggable OCR engine.
#[async_trait]
pub trait OcrEngine: Send + Sync {
    async fn extract_text(&self, image_bytes: &[u8]) -> Result<String, ExtractError>;
}

/// OCR engine backed by the LLM's vision endpoint. The upload is validated
/// locally, then shipped as a base64 data URL with a transcription prompt.
pub struct VisionOcr {
    llm: LlmClient,
}

impl VisionOcr {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl OcrEngine for VisionOcr {
    async fn extract_text(&self, image_bytes: &[u8]) -> Result<String, ExtractError> {
        let format = image::guess_format(image_bytes)
            .map_err(|e| ExtractError::Image(format!("unrecognized image data: {e}")))?;

        // Full decode catches truncated or corrupt files before an API call is spent
        let bytes = image_bytes.to_vec();
        tokio::task::spawn_blocking(move || image::load_from_memory(&bytes))
            .await
            .map_err(|e| ExtractError::Image(format!("decode task failed: {e}")))?
            .map_err(|e| ExtractError::Image(format!("undecodable image: {e}")))?;

        let url = data_url(format.to_mime_type(), image_bytes);

        let text = self
            .llm
            .call_vision(OCR_TRANSCRIBE_PROMPT, OCR_SYSTEM, &url)
            .await
            .map_err(|e| ExtractError::Ocr(e.to_string()))?;

        tracing::debug!(text_len = text.len(), "vision OCR transcription complete");

        Ok(text)
    }
}

/// Encodes raw bytes as a `data:<mime>;base64,...` URL.
fn data_url(mime: &str, bytes: &[u8]) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    format!("data:{mime};base64,{encoded}")
}
