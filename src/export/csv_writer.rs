//! CSV export of match records and summaries.

use super::{suggested_file_name, ExportOptions};
use crate::error::{Error, Result};
use crate::results::SearchSummary;
use crate::search::MatchRecord;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::path::{Path, PathBuf};

/// Header row of the match export.
pub const MATCH_HEADERS: [&str; 5] =
    ["InputBoxID", "SearchText", "MatchedText", "Context", "PageNumber"];

/// Header row of the summary export.
pub const SUMMARY_HEADERS: [&str; 3] = ["SearchText", "Occurrences", "Pages"];

/// Match columns quoted by [`ExportOptions::quote_all_text`].
const MATCH_TEXT_COLUMNS: [usize; 3] = [1, 2, 3];

/// Summary columns quoted by [`ExportOptions::quote_all_text`].
const SUMMARY_TEXT_COLUMNS: [usize; 2] = [0, 2];

/// A rendered CSV file, ready to be saved or downloaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    /// Suggested file name, e.g. `report_matches.csv`
    pub file_name: String,
    /// CSV text, rows joined with `\n`
    pub content: String,
    rows: usize,
}

impl CsvExport {
    /// The CSV text as bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.content.as_bytes()
    }

    /// Number of data rows (header excluded).
    pub fn row_count(&self) -> usize {
        self.rows
    }

    /// Write the file under `dir` using the suggested name.
    pub fn write_to_dir(&self, dir: impl AsRef<Path>) -> Result<PathBuf> {
        let path = dir.as_ref().join(&self.file_name);
        std::fs::write(&path, self.as_bytes())?;
        log::info!("Wrote {} ({} bytes)", path.display(), self.content.len());
        Ok(path)
    }
}

/// Serializes records into delimited text.
#[derive(Debug, Clone, Default)]
pub struct CsvExporter {
    options: ExportOptions,
}

impl CsvExporter {
    /// Create an exporter with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an exporter with custom options.
    pub fn with_options(options: ExportOptions) -> Self {
        Self { options }
    }

    /// Get the current options.
    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    /// Export match records.
    ///
    /// Columns are input box, search term, matched text, context and page.
    /// Exporting nothing is refused with [`Error::NothingToExport`].
    pub fn export(&self, records: &[MatchRecord], document_name: &str) -> Result<CsvExport> {
        if records.is_empty() {
            return Err(Error::NothingToExport);
        }

        let rows = records.iter().map(|r| {
            vec![
                r.input_box_id.to_string(),
                r.search_term.clone(),
                r.matched_text.clone(),
                r.context.clone(),
                r.page_number.to_string(),
            ]
        });
        let (content, rows) = self.render(&MATCH_HEADERS, &MATCH_TEXT_COLUMNS, rows)?;

        log::info!("Exported {} match rows for {:?}", records.len(), document_name);
        Ok(CsvExport {
            file_name: suggested_file_name(document_name, "matches", "csv"),
            content,
            rows,
        })
    }

    /// Export per-term summaries. Pages are joined with `;`.
    pub fn export_summaries(
        &self,
        summaries: &[SearchSummary],
        document_name: &str,
    ) -> Result<CsvExport> {
        if summaries.is_empty() {
            return Err(Error::NothingToExport);
        }

        let rows = summaries.iter().map(|s| {
            let pages = s
                .pages
                .iter()
                .map(|p| p.to_string())
                .collect::<Vec<_>>()
                .join(";");
            vec![s.search_term.clone(), s.occurrence_count.to_string(), pages]
        });
        let (content, rows) = self.render(&SUMMARY_HEADERS, &SUMMARY_TEXT_COLUMNS, rows)?;

        log::info!("Exported {} summary rows for {:?}", summaries.len(), document_name);
        Ok(CsvExport {
            file_name: suggested_file_name(document_name, "summary", "csv"),
            content,
            rows,
        })
    }

    /// Render the header and rows, returning the text and the data row count.
    ///
    /// With `quote_all_text`, the fields listed in `text_columns` are quoted
    /// whatever they contain and all other fields are written bare.
    fn render<I>(
        &self,
        headers: &[&str],
        text_columns: &[usize],
        rows: I,
    ) -> Result<(String, usize)>
    where
        I: Iterator<Item = Vec<String>>,
    {
        let quote_all_text = self.options.quote_all_text;
        // Text fields are quoted up front, so the writer must leave them alone
        let quote_style = if quote_all_text {
            QuoteStyle::Never
        } else {
            QuoteStyle::Necessary
        };

        let mut writer = WriterBuilder::new()
            .delimiter(self.options.delimiter)
            .quote_style(quote_style)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(Vec::new());

        writer.write_record(headers)?;
        let mut row_count = 0;
        for mut row in rows {
            if quote_all_text {
                for &column in text_columns {
                    if let Some(field) = row.get_mut(column) {
                        *field = quote_field(field);
                    }
                }
            }
            writer.write_record(&row)?;
            row_count += 1;
        }

        let bytes = writer.into_inner().map_err(|e| Error::Io(e.into_error()))?;
        let mut content = String::from_utf8(bytes)
            .map_err(|e| Error::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))?;
        // Rows are newline-joined, not newline-terminated.
        if content.ends_with('\n') {
            content.pop();
        }
        Ok((content, row_count))
    }
}

/// Wrap a field in quotes, doubling embedded quotes.
fn quote_field(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
