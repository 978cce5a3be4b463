//! Vitae API: resume intake and candidate-profile extraction service.
//!
//! One upload endpoint accepts a resume (PDF, DOCX, image, or plain text),
//! runs the matching reader (vision OCR for images), and asks the LLM for a
//! structured candidate profile.

pub mod config;
pub mod errors;
pub mod extract;
pub mod llm_client;
pub mod profile;
pub mod routes;
pub mod state;
