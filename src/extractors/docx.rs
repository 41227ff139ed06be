//! DOCX text extraction.
//!
//! DOCX files are ZIP archives containing XML files in Open XML format.
//! The body text lives in `word/document.xml` as runs (`<w:r>`) of text
//! elements (`<w:t>`) grouped into paragraphs (`<w:p>`). Word documents carry
//! no fixed pagination, so no page sentinels are emitted.

use crate::error::{Error, Result};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Cursor, Read, Seek};
use zip::ZipArchive;

const FORMAT: &str = "DOCX";

/// Extracts the body text of Word documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocxExtractor;

impl DocxExtractor {
    /// Create a new DOCX extractor.
    pub fn new() -> Self {
        Self
    }

    /// Extract text from DOCX bytes.
    ///
    /// Paragraphs are separated by newlines, `<w:tab/>` becomes a tab and
    /// `<w:br/>`/`<w:cr/>` become newlines.
    pub fn extract(&self, bytes: &[u8]) -> Result<String> {
        let mut archive = ZipArchive::new(Cursor::new(bytes))
            .map_err(|e| Error::extraction(FORMAT, format!("failed to open archive: {}", e)))?;

        let xml = read_document_xml(&mut archive)?;
        let paragraphs = parse_paragraphs(&xml)?;

        log::debug!("Extracted {} paragraphs from DOCX", paragraphs.len());
        Ok(paragraphs.join("\n"))
    }
}

/// Read `word/document.xml` from the archive.
fn read_document_xml<R: Read + Seek>(archive: &mut ZipArchive<R>) -> Result<String> {
    let mut file = archive
        .by_name("word/document.xml")
        .map_err(|e| Error::extraction(FORMAT, format!("missing word/document.xml: {}", e)))?;

    let mut content = String::new();
    file.read_to_string(&mut content)
        .map_err(|e| Error::extraction(FORMAT, format!("failed to read document.xml: {}", e)))?;
    Ok(content)
}

/// Collect the text of each paragraph in document order.
fn parse_paragraphs(xml: &str) -> Result<Vec<String>> {
    let mut reader = Reader::from_str(xml);

    let mut buf = Vec::new();
    let mut paragraphs = Vec::new();
    let mut current = String::new();
    // Text boxes nest paragraphs inside paragraphs
    let mut depth = 0usize;
    let mut run_depth = 0usize;
    let mut in_text = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => match e.local_name().as_ref() {
                b"p" => depth += 1,
                b"r" => run_depth += 1,
                b"t" => in_text = true,
                _ => {},
            },
            Ok(Event::End(ref e)) => match e.local_name().as_ref() {
                b"p" => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        paragraphs.push(std::mem::take(&mut current));
                    } else {
                        current.push('\n');
                    }
                },
                b"r" => run_depth = run_depth.saturating_sub(1),
                b"t" => in_text = false,
                _ => {},
            },
            Ok(Event::Empty(ref e)) => match e.local_name().as_ref() {
                b"p" if depth == 0 => paragraphs.push(String::new()),
                // Tab stop definitions in <w:pPr> also use <w:tab/>
                b"tab" if run_depth > 0 => current.push('\t'),
                b"br" | b"cr" if run_depth > 0 => current.push('\n'),
                _ => {},
            },
            Ok(Event::Text(e)) => {
                if in_text && depth > 0 {
                    let text = e
                        .unescape()
                        .map_err(|e| Error::extraction(FORMAT, format!("bad text: {}", e)))?;
                    current.push_str(&text);
                }
            },
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(Error::extraction(FORMAT, format!("XML parse error: {}", e)));
            },
            _ => {},
        }
        buf.clear();
    }

    Ok(paragraphs)
}
