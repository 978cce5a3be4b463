//! PDF text extraction.

use super::ExtractError;

/// Extracts the text layer from a PDF held in memory.
/// Scanned PDFs without a text layer come back (near-)empty; the caller
/// rejects empty results rather than guessing.
pub fn extract(data: &[u8]) -> Result<String, ExtractError> {
    pdf_extract::extract_text_from_mem(data).map_err(|e| ExtractError::Pdf(e.to_string()))
}
