//! Text extraction from uploaded documents.
//!
//! Turns a file into one text string that the match engine can search.
//!
//! # Supported Formats
//!
//! - **Plain text** (`.txt`, `.text`, `.md`, `.csv`): UTF-8
//! - **DOCX** (`office` feature): paragraph text of Word documents
//! - **PDF** (`pdf` feature): per-page text, each page preceded by a
//!   `--- Page N ---` sentinel
//!
//! # Example
//!
//! ```no_run
//! use doc_matcher::extractors::TextExtractor;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let doc = TextExtractor::new().extract_file("contract.pdf")?;
//! println!("{}: {} characters", doc.name, doc.char_count());
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "office")]
mod docx;
#[cfg(feature = "pdf")]
mod pdf;
mod plain_text;

#[cfg(feature = "office")]
pub use docx::DocxExtractor;
#[cfg(feature = "pdf")]
pub use pdf::{extract_pdf, PdfText};
pub use plain_text::extract_plain_text;

use crate::error::{Error, Result};
use std::fmt;
use std::path::Path;

/// Characters shown by [`ExtractedDocument::preview`] by default.
pub const PREVIEW_CHARS: usize = 200;

/// Document formats with an extraction backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    /// UTF-8 text
    PlainText,
    /// Word document (Office Open XML)
    Docx,
    /// Portable Document Format
    Pdf,
}

impl DocumentFormat {
    /// Detect the format from a file name's extension (case-insensitive).
    pub fn from_name(name: &str) -> Result<Self> {
        let extension = Path::new(name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "txt" | "text" | "md" | "csv" => Ok(DocumentFormat::PlainText),
            "docx" => Ok(DocumentFormat::Docx),
            "pdf" => Ok(DocumentFormat::Pdf),
            "" => Err(Error::UnsupportedFormat(format!("{} (no file extension)", name))),
            other => Err(Error::UnsupportedFormat(other.to_string())),
        }
    }

    /// Whether the extractor emits page sentinels for this format.
    pub fn is_paginated(self) -> bool {
        matches!(self, DocumentFormat::Pdf)
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DocumentFormat::PlainText => "text",
            DocumentFormat::Docx => "DOCX",
            DocumentFormat::Pdf => "PDF",
        };
        f.write_str(name)
    }
}

/// The text of an uploaded document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedDocument {
    /// File name as uploaded
    pub name: String,
    /// Detected format
    pub format: DocumentFormat,
    /// Extracted text, with page sentinels for paginated formats
    pub text: String,
    /// Page count, when the format has pages
    pub page_count: Option<usize>,
}

impl ExtractedDocument {
    /// Length of the text in characters.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Whether there is any non-whitespace text to search.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// The first `limit` characters, with `"..."` appended when cut.
    pub fn preview(&self, limit: usize) -> String {
        let mut chars = self.text.chars();
        let mut preview: String = chars.by_ref().take(limit).collect();
        if chars.next().is_some() {
            preview.push_str("...");
        }
        preview
    }
}

/// Dispatches documents to the backend for their format.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextExtractor;

impl TextExtractor {
    /// Create a new extractor.
    pub fn new() -> Self {
        Self
    }

    /// Extract the text of a file, detecting the format from its extension.
    pub fn extract_file(&self, path: impl AsRef<Path>) -> Result<ExtractedDocument> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        let format = DocumentFormat::from_name(&name)?;

        log::debug!("Extracting {} as {}", path.display(), format);

        let document = match format {
            DocumentFormat::Pdf => self.extract_pdf_file(name, path)?,
            _ => {
                let bytes = std::fs::read(path)?;
                self.extract_with_format(name, format, &bytes)?
            },
        };

        log::info!(
            "Extracted {} characters from {}",
            document.char_count(),
            document.name
        );
        Ok(document)
    }

    /// Extract the text of in-memory content named `name`.
    ///
    /// PDF content needs a file; use [`TextExtractor::extract_file`].
    pub fn extract_bytes(&self, name: &str, bytes: &[u8]) -> Result<ExtractedDocument> {
        let format = DocumentFormat::from_name(name)?;
        self.extract_with_format(name.to_string(), format, bytes)
    }

    fn extract_with_format(
        &self,
        name: String,
        format: DocumentFormat,
        bytes: &[u8],
    ) -> Result<ExtractedDocument> {
        let text = match format {
            DocumentFormat::PlainText => extract_plain_text(bytes)?,
            DocumentFormat::Docx => Self::extract_docx(bytes)?,
            DocumentFormat::Pdf => {
                return Err(Error::UnsupportedFormat(
                    "PDF content must be extracted from a file path".to_string(),
                ))
            },
        };

        Ok(ExtractedDocument {
            name,
            format,
            text,
            page_count: None,
        })
    }

    #[cfg(feature = "office")]
    fn extract_docx(bytes: &[u8]) -> Result<String> {
        DocxExtractor::new().extract(bytes)
    }

    /// Stub for non-office feature builds
    #[cfg(not(feature = "office"))]
    fn extract_docx(_bytes: &[u8]) -> Result<String> {
        Err(Error::UnsupportedFormat(
            "DOCX extraction requires the 'office' feature".to_string(),
        ))
    }

    #[cfg(feature = "pdf")]
    fn extract_pdf_file(&self, name: String, path: &Path) -> Result<ExtractedDocument> {
        let pdf = extract_pdf(path)?;
        Ok(ExtractedDocument {
            name,
            format: DocumentFormat::Pdf,
            text: pdf.text,
            page_count: Some(pdf.page_count),
        })
    }

    /// Stub for non-pdf feature builds
    #[cfg(not(feature = "pdf"))]
    fn extract_pdf_file(&self, _name: String, _path: &Path) -> Result<ExtractedDocument> {
        Err(Error::UnsupportedFormat(
            "PDF extraction requires the 'pdf' feature".to_string(),
        ))
    }
}
