#![allow(dead_code)]

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::extract::ExtractError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractError),

    #[error("Empty document")]
    EmptyDocument,

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::UnsupportedFileType(msg) => (
                StatusCode::BAD_REQUEST,
                "UNSUPPORTED_FILE_TYPE",
                msg.clone(),
            ),
            AppError::Extraction(e) => {
                // Unreadable upload, not a server fault
                tracing::warn!("Extraction error: {e}");
                (
                    StatusCode::BAD_REQUEST,
                    "EXTRACTION_ERROR",
                    format!("Error processing file: {e}"),
                )
            }
            AppError::EmptyDocument => (
                StatusCode::BAD_REQUEST,
                "EMPTY_DOCUMENT",
                "Could not extract text from the file. It may be empty or too complex.".to_string(),
            ),
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "LLM_ERROR",
                    "An AI processing error occurred".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
