//! Candidate profile domain: response models, extraction prompt, LLM
//! orchestration, and the upload handler.

pub mod contact;
pub mod dates;
pub mod extractor;
pub mod handlers;
pub mod models;
pub mod prompts;
