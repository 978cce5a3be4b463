#![allow(dead_code)]

// Shared prompt constants.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting fragments used by the client itself.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// System prompt for vision transcription calls.
pub const OCR_SYSTEM: &str = "You are a document text extractor. Your task is to \
    extract ALL visible text from the provided image, exactly as written. \
    Be thorough and accurate. Do not summarize, translate, or comment.";

/// User prompt sent alongside the image on vision transcription calls.
/// Resumes arrive in English or Portuguese; both must transcribe cleanly.
pub const OCR_TRANSCRIBE_PROMPT: &str = "Extract all visible text from this image \
    of a resume. The text may be in English or Portuguese. Preserve the reading \
    order and line breaks. Return ONLY the transcribed text, with no commentary. \
    If the image contains no readable text, return an empty response.";
