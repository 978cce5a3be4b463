use axum::extract::{Multipart, State};
use axum::Json;
use bytes::Bytes;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::extract::{self, FileFormat};
use crate::profile::extractor::extract_profile;
use crate::profile::models::CandidateProfile;
use crate::state::AppState;

/// Response message attached to OCR-processed uploads.
const OCR_MESSAGE: &str = "Image file processed with OCR.";

/// POST /api/v1/resumes/parse
///
/// Accepts one multipart field named `file`, reads the resume it carries,
/// and returns the extracted candidate profile.
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<CandidateProfile>, AppError> {
    let (file_name, data) = read_file_field(&mut multipart).await?;

    let file_name = file_name
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| "unknown".to_string());
    let file_type = extract::extension_of(&file_name);

    let format = FileFormat::from_extension(&file_type).ok_or_else(|| {
        AppError::UnsupportedFileType(format!(
            "Unsupported file type: .{file_type}. Supported types: {}.",
            extract::SUPPORTED_TYPES
        ))
    })?;

    let upload_id = Uuid::new_v4();
    info!(
        %upload_id,
        file_name = %file_name,
        size_bytes = data.len(),
        format = ?format,
        "resume upload received"
    );

    let text = extract::extract_text(format, data, state.ocr.as_ref()).await?;
    if text.trim().is_empty() {
        return Err(AppError::EmptyDocument);
    }

    let (summary, extracted_info) = extract_profile(&text, &state.llm).await;

    info!(%upload_id, text_len = text.len(), "resume parsed");

    let message = matches!(format, FileFormat::Image).then(|| OCR_MESSAGE.to_string());

    Ok(Json(CandidateProfile {
        summary,
        extracted_info,
        file_type,
        message,
    }))
}

/// Pulls the `file` field out of the multipart payload.
async fn read_file_field(multipart: &mut Multipart) -> Result<(Option<String>, Bytes), AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart payload: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().map(str::to_owned);
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Could not read upload: {e}")))?;
        return Ok((file_name, data));
    }

    Err(AppError::Validation(
        "Missing multipart field 'file'".to_string(),
    ))
}
