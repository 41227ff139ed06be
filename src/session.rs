//! A document search session.
//!
//! Holds the currently loaded document and the results of the last search.
//! Loading a document clears old results; a failed load clears the document
//! too, so nothing can be searched until a file extracts cleanly.

use crate::config::MatchConfig;
use crate::error::{Error, Result};
use crate::export::{CsvExport, CsvExporter, ExportOptions};
use crate::extractors::{ExtractedDocument, TextExtractor};
use crate::results::{summarize, SearchSummary};
use crate::search::{MatchEngine, MatchRecord};
use std::path::Path;

/// Current document and search results.
#[derive(Debug, Default)]
pub struct MatchSession {
    engine: MatchEngine,
    extractor: TextExtractor,
    exporter: CsvExporter,
    document: Option<ExtractedDocument>,
    results: Vec<MatchRecord>,
}

impl MatchSession {
    /// Create a session with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session with a custom engine configuration.
    pub fn with_config(config: MatchConfig) -> Self {
        Self {
            engine: MatchEngine::new(config),
            ..Self::default()
        }
    }

    /// Use custom export options.
    pub fn with_export_options(mut self, options: ExportOptions) -> Self {
        self.exporter = CsvExporter::with_options(options);
        self
    }

    /// Load a document from a file.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<&ExtractedDocument> {
        let extracted = self.extractor.extract_file(path);
        self.replace_document(extracted)
    }

    /// Load a document from in-memory content.
    pub fn load_bytes(&mut self, name: &str, bytes: &[u8]) -> Result<&ExtractedDocument> {
        let extracted = self.extractor.extract_bytes(name, bytes);
        self.replace_document(extracted)
    }

    fn replace_document(
        &mut self,
        extracted: Result<ExtractedDocument>,
    ) -> Result<&ExtractedDocument> {
        self.results.clear();
        match extracted {
            Ok(document) => {
                if document.is_empty() {
                    log::warn!("{} contains no searchable text", document.name);
                }
                Ok(self.document.insert(document))
            },
            Err(e) => {
                log::warn!("Extraction failed: {}", e);
                self.document = None;
                Err(e)
            },
        }
    }

    /// The loaded document, if any.
    pub fn document(&self) -> Option<&ExtractedDocument> {
        self.document.as_ref()
    }

    /// Search the loaded document, replacing the previous results.
    pub fn search<S: AsRef<str>>(&mut self, inputs: &[S]) -> Result<&[MatchRecord]> {
        let document = self.document.as_ref().ok_or(Error::NoDocument)?;
        self.results = self.engine.search(inputs, &document.text);
        Ok(&self.results)
    }

    /// Results of the last search.
    pub fn results(&self) -> &[MatchRecord] {
        &self.results
    }

    /// Per-term summaries of the last search.
    pub fn summaries(&self) -> Vec<SearchSummary> {
        summarize(&self.results)
    }

    /// Export the last results as CSV named after the document.
    pub fn export_csv(&self) -> Result<CsvExport> {
        let document = self.document.as_ref().ok_or(Error::NoDocument)?;
        self.exporter.export(&self.results, &document.name)
    }

    /// Export the per-term summaries as CSV named after the document.
    pub fn export_summary_csv(&self) -> Result<CsvExport> {
        let document = self.document.as_ref().ok_or(Error::NoDocument)?;
        self.exporter.export_summaries(&self.summaries(), &document.name)
    }
}
