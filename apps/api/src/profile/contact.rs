//! Regex fallback scan for contact details.
//!
//! Runs over the raw resume text before the LLM call. The results backfill
//! the profile when the model returns nothing for a contact field, and are
//! all the contact data available on the degraded path.

use std::sync::OnceLock;

use regex::Regex;

const EMAIL_PATTERN: &str = r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}";
/// Favors Brazilian layouts (optional country and area codes) but matches
/// most plain digit runs of phone length.
const PHONE_PATTERN: &str = r"(\+?\d{2,3}\s?)?(\(?\d{2}\)?\s?)?\d{4,5}[-\s]?\d{4}";

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"))
}

fn phone_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(PHONE_PATTERN).expect("phone pattern compiles"))
}

/// First email-looking token in the text.
pub fn find_email(text: &str) -> Option<String> {
    email_regex().find(text).map(|m| m.as_str().to_string())
}

/// First phone-looking token in the text.
pub fn find_phone(text: &str) -> Option<String> {
    phone_regex()
        .find(text)
        .map(|m| m.as_str().trim().to_string())
}
