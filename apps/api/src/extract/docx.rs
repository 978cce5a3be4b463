//! DOCX text extraction.
//!
//! A `.docx` file is a ZIP archive whose document body lives in
//! `word/document.xml`. Text is carried in `<w:t>` runs; paragraph ends
//! (`</w:p>`) become newlines, explicit breaks (`<w:br/>`) and tabs
//! (`<w:tab/>`) are kept.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use zip::ZipArchive;

use super::ExtractError;

pub fn extract(data: &[u8]) -> Result<String, ExtractError> {
    let mut archive = ZipArchive::new(Cursor::new(data))
        .map_err(|e| ExtractError::Docx(format!("not a valid archive: {e}")))?;

    let mut document_xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| ExtractError::Docx(format!("missing document body: {e}")))?
        .read_to_string(&mut document_xml)
        .map_err(|e| ExtractError::Docx(format!("unreadable document body: {e}")))?;

    document_text(&document_xml)
}

/// Walks the WordprocessingML body, collecting run text.
fn document_text(xml: &str) -> Result<String, ExtractError> {
    let mut reader = Reader::from_str(xml);
    let mut out = String::new();
    let mut in_run_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => match e.name().as_ref() {
                b"w:t" => in_run_text = true,
                b"w:br" => out.push('\n'),
                b"w:tab" => out.push('\t'),
                _ => {}
            },
            Ok(Event::Empty(ref e)) => match e.name().as_ref() {
                b"w:br" => out.push('\n'),
                b"w:tab" => out.push('\t'),
                _ => {}
            },
            Ok(Event::End(ref e)) => match e.name().as_ref() {
                b"w:t" => in_run_text = false,
                b"w:p" => out.push('\n'),
                _ => {}
            },
            Ok(Event::Text(e)) => {
                if in_run_text {
                    let run = e
                        .unescape()
                        .map_err(|e| ExtractError::Docx(format!("malformed body XML: {e}")))?;
                    out.push_str(&run);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ExtractError::Docx(format!("malformed body XML: {e}"))),
            _ => {}
        }
    }

    Ok(out)
}
