use std::sync::Arc;

use crate::config::Config;
use crate::extract::OcrEngine;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    /// Pluggable OCR engine. Default: `VisionOcr` over the LLM's vision endpoint.
    pub ocr: Arc<dyn OcrEngine>,
    pub config: Config,
}
