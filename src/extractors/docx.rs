use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Cursor, Read, Seek};
use std::path::Path;

use crate::{ExtractError, Result};

/// Extract text from a DOCX file on disk
pub fn extract_from_file(path: &Path) -> Result<String> {
    let file = fs_err::File::open(path)?;
    extract_from_reader(file)
}

/// Extract text from DOCX bytes already in memory
pub fn extract_from_bytes(bytes: &[u8]) -> Result<String> {
    extract_from_reader(Cursor::new(bytes))
}

/// A DOCX archive is a ZIP whose main body lives in `word/document.xml`.
fn extract_from_reader<R: Read + Seek>(reader: R) -> Result<String> {
    let mut archive = zip::ZipArchive::new(reader).map_err(|e| parse_error(e.to_string()))?;

    let mut document_xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| parse_error(format!("main document part not found: {e}")))?
        .read_to_string(&mut document_xml)
        .map_err(|e| parse_error(e.to_string()))?;

    extract_paragraphs(&document_xml)
}

/// Collect `w:t` run text in document order, emitting a newline at the end of
/// every paragraph (`w:p`), empty paragraphs included.
fn extract_paragraphs(xml: &str) -> Result<String> {
    let mut reader = Reader::from_str(xml);
    let mut text = String::new();
    let mut in_run_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) if e.name().as_ref() == b"w:t" => in_run_text = true,
            Ok(Event::End(ref e)) => match e.name().as_ref() {
                b"w:t" => in_run_text = false,
                b"w:p" => text.push('\n'),
                _ => {}
            },
            Ok(Event::Empty(ref e)) if e.name().as_ref() == b"w:p" => text.push('\n'),
            Ok(Event::Text(e)) if in_run_text => {
                let run = e.unescape().map_err(|e| parse_error(e.to_string()))?;
                text.push_str(&run);
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(parse_error(e.to_string())),
            _ => {}
        }
    }

    Ok(text)
}

fn parse_error(message: String) -> ExtractError {
    ExtractError::Parse {
        format: "DOCX",
        message,
    }
}
