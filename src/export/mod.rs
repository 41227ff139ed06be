//! Export of match results.
//!
//! - **CSV**: one row per match, or one row per term summary
//! - **JSON**: the same records, for programmatic consumers
//!
//! Exporters only render text and suggest a file name; saving it is up to
//! the caller ([`CsvExport::write_to_dir`] is a convenience for that).
//!
//! # Examples
//!
//! ```
//! use doc_matcher::export::CsvExporter;
//! use doc_matcher::search::search;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let records = search(&["cat"], "The cat sat on the mat.");
//! let export = CsvExporter::new().export(&records, "notes.txt")?;
//!
//! assert_eq!(export.file_name, "notes_matches.csv");
//! assert!(export.content.starts_with("InputBoxID,SearchText,MatchedText,Context,PageNumber"));
//! # Ok(())
//! # }
//! ```

mod csv_writer;

pub use csv_writer::{CsvExport, CsvExporter, MATCH_HEADERS, SUMMARY_HEADERS};

use crate::error::Result;
use crate::results::SearchSummary;
use crate::search::MatchRecord;
use std::path::Path;

/// Options for delimited-text export.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Field delimiter (default: `,`)
    pub delimiter: u8,
    /// Always quote text columns (terms, matched text, context, page lists);
    /// numeric columns stay bare
    pub quote_all_text: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote_all_text: false,
        }
    }
}

impl ExportOptions {
    /// Create default export options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Quote all text fields.
    pub fn with_quote_all_text(mut self, value: bool) -> Self {
        self.quote_all_text = value;
        self
    }
}

/// Suggest an export file name: `<base>_<suffix>.<extension>`.
///
/// The base is the document name without directory or extension, or
/// `document` when nothing is left.
///
/// ```
/// use doc_matcher::export::suggested_file_name;
///
/// assert_eq!(suggested_file_name("reports/q3.final.pdf", "matches", "csv"), "q3.final_matches.csv");
/// assert_eq!(suggested_file_name("", "matches", "csv"), "document_matches.csv");
/// ```
pub fn suggested_file_name(document_name: &str, suffix: &str, extension: &str) -> String {
    let base = Path::new(document_name.trim())
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| "document".to_string());
    format!("{}_{}.{}", base, suffix, extension)
}

/// Render match records as pretty-printed JSON.
pub fn to_json(records: &[MatchRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Render summaries as pretty-printed JSON.
pub fn summaries_to_json(summaries: &[SearchSummary]) -> Result<String> {
    Ok(serde_json::to_string_pretty(summaries)?)
}
