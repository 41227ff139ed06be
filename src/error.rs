//! Error types for document matching.
//!
//! Only extraction and export can fail. Searching never errors: an empty
//! document or empty search inputs simply produce no matches.

/// Result type alias for doc_matcher operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while extracting, searching or exporting.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The file type is not recognized by any extraction backend
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// A backend recognized the file but could not decode it
    #[error("Failed to extract text from {format} document: {reason}")]
    Extraction {
        /// Format being decoded (e.g. "DOCX")
        format: String,
        /// Human-readable reason for the failure
        reason: String,
    },

    /// Export was requested with zero records
    #[error("No results to export")]
    NothingToExport,

    /// A session operation needs a loaded document
    #[error("No document loaded")]
    NoDocument,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Build an extraction error for the given format.
    pub fn extraction(format: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Error::Extraction {
            format: format.into(),
            reason: reason.to_string(),
        }
    }
}
