//! Date normalization for model-returned profile dates.
//!
//! The prompt asks for `YYYY-MM-DD` (or `YYYY-MM` when the day is unknown,
//! `YYYY-01-01` when only a year is known). Models drift, so the same rules
//! are enforced here: valid shapes are canonicalized, everything else is
//! dropped to `null`.

use chrono::NaiveDate;

/// Normalizes one date string. Returns `None` for anything that is not a
/// real calendar date in one of the accepted shapes.
pub fn normalize_date(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date.format("%Y-%m-%d").to_string());
    }

    // "YYYY-MM": validate by pinning the first day of the month
    if raw.contains('-') {
        if let Ok(date) = NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d") {
            return Some(date.format("%Y-%m").to_string());
        }
    }

    // Bare year
    if let Ok(year) = raw.parse::<i32>() {
        if (1000..=9999).contains(&year) {
            return Some(format!("{year}-01-01"));
        }
    }

    None
}
