//! PDF text extraction.
//!
//! Text is extracted page by page with `pdf_oxide`; each page is preceded by
//! its sentinel line (`--- Page N ---`) so matches can be placed on the page
//! they were found on.

use crate::error::{Error, Result};
use crate::search::page_sentinel;
use pdf_oxide::document::PdfDocument;
use std::path::Path;

const FORMAT: &str = "PDF";

/// Text of a PDF with its page count.
#[derive(Debug, Clone)]
pub struct PdfText {
    /// Page texts, each preceded by its sentinel
    pub text: String,
    /// Number of pages in the document
    pub page_count: usize,
}

/// Extract the text of every page of a PDF file.
pub fn extract_pdf(path: &Path) -> Result<PdfText> {
    let mut doc = PdfDocument::open(path).map_err(|e| Error::extraction(FORMAT, e))?;
    let page_count = doc.page_count().map_err(|e| Error::extraction(FORMAT, e))?;

    let mut pages = Vec::with_capacity(page_count);
    for index in 0..page_count {
        let page_text = doc
            .extract_text(index)
            .map_err(|e| Error::extraction(FORMAT, format!("page {}: {}", index + 1, e)))?;
        pages.push(join_page(index + 1, &page_text));
    }

    log::debug!("Extracted {} pages from {}", page_count, path.display());
    Ok(PdfText {
        text: pages.join("\n"),
        page_count,
    })
}

/// Prefix a page's text with its sentinel line.
pub(crate) fn join_page(page: usize, text: &str) -> String {
    format!("{}\n{}", page_sentinel(page), text.trim_end())
}
