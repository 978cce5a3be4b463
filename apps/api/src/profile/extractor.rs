//! Profile extraction: prompts the LLM over raw resume text and normalizes
//! its output into the response schema.

use serde::Deserialize;
use tracing::warn;

use crate::llm_client::{LlmClient, LlmError};
use crate::profile::contact;
use crate::profile::dates::normalize_date;
use crate::profile::models::ExtractedInfo;
use crate::profile::prompts::{PROFILE_EXTRACTION_PROMPT_TEMPLATE, PROFILE_EXTRACTION_SYSTEM};

/// Resume text is truncated to this many characters before prompting.
const MAX_PROMPT_CHARS: usize = 4000;

const SUMMARY_MISSING: &str = "A detailed summary could not be generated by the AI.";
const SUMMARY_BAD_JSON: &str =
    "A detailed summary could not be generated. The AI response was not valid JSON.";
const SUMMARY_UNEXPECTED: &str =
    "A detailed summary could not be generated. An unexpected AI error occurred.";

/// Raw payload the model returns: the profile fields plus the narrative summary.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LlmProfile {
    summary: Option<String>,
    #[serde(flatten)]
    info: ExtractedInfo,
}

/// Extracts a candidate profile from raw resume text.
///
/// LLM failures degrade instead of failing the request: the summary then
/// explains what went wrong and the contact fields fall back to the regex
/// scan. This function always yields a presentable profile.
pub async fn extract_profile(raw_text: &str, llm: &LlmClient) -> (String, ExtractedInfo) {
    let email_fallback = contact::find_email(raw_text);
    let phone_fallback = contact::find_phone(raw_text);

    let prompt = PROFILE_EXTRACTION_PROMPT_TEMPLATE
        .replace("{resume_text}", truncate_chars(raw_text, MAX_PROMPT_CHARS));

    match llm
        .call_json::<LlmProfile>(&prompt, PROFILE_EXTRACTION_SYSTEM)
        .await
    {
        Ok(parsed) => {
            let info = normalize_info(parsed.info, email_fallback, phone_fallback);
            let summary = parsed
                .summary
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| SUMMARY_MISSING.to_string());
            (summary, info)
        }
        Err(e) => {
            warn!("profile extraction degraded to fallback: {e}");
            let info = ExtractedInfo {
                email: email_fallback,
                phone: phone_fallback,
                ..ExtractedInfo::default()
            };
            (degraded_summary(&e), info)
        }
    }
}

/// Summary text for the degraded response, by failure class.
fn degraded_summary(error: &LlmError) -> String {
    match error {
        LlmError::Parse(_) => SUMMARY_BAD_JSON.to_string(),
        LlmError::Api { .. } | LlmError::RateLimited { .. } => format!(
            "A detailed summary could not be generated. \
             Error communicating with the AI service: {error}."
        ),
        LlmError::Http(_) | LlmError::EmptyContent => SUMMARY_UNEXPECTED.to_string(),
    }
}

/// Applies the post-LLM rules: contact fallbacks, date canonicalization,
/// and the `is_current` end-date invariant.
fn normalize_info(
    mut info: ExtractedInfo,
    email_fallback: Option<String>,
    phone_fallback: Option<String>,
) -> ExtractedInfo {
    info.name = non_empty(info.name);
    info.email = non_empty(info.email).or(email_fallback);
    info.phone = non_empty(info.phone).or(phone_fallback);

    for entry in &mut info.experience {
        entry.start_date = entry.start_date.as_deref().and_then(normalize_date);
        entry.end_date = entry.end_date.as_deref().and_then(normalize_date);
        if entry.is_current {
            entry.end_date = None;
        }
    }

    for entry in &mut info.education {
        entry.start_date = entry.start_date.as_deref().and_then(normalize_date);
        entry.end_date = entry.end_date.as_deref().and_then(normalize_date);
    }

    info
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Cuts `s` to at most `max_chars` characters, on a char boundary.
fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
