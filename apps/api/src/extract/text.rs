//! Plain-text decoding.

use super::ExtractError;

/// Decodes a `.txt` upload as strict UTF-8.
pub fn extract(data: &[u8]) -> Result<String, ExtractError> {
    std::str::from_utf8(data)
        .map(str::to_owned)
        .map_err(|_| ExtractError::InvalidUtf8)
}
