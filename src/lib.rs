//! # doc_matcher
//!
//! Find every occurrence of search terms in a document and export the hits.
//!
//! ## Core Features
//!
//! - **Extraction**: plain text, Word (`.docx`) and PDF, with `--- Page N ---`
//!   sentinels for paginated formats
//! - **Matching**: literal, case-insensitive, overlap-permitting search of
//!   every whitespace-separated term of every search input
//! - **Context**: bounded, truncation-marked snippets with optional highlighting
//! - **Pages**: sentinel-based page numbers with an offset-based estimate
//! - **Aggregation**: sorting, deduplication and per-term summaries
//! - **Export**: CSV (`<document>_matches.csv`) and JSON
//!
//! ## Quick Start
//!
//! ```
//! use doc_matcher::export::CsvExporter;
//! use doc_matcher::results::summarize;
//! use doc_matcher::search::search;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let text = "--- Page 1 --- The cat sat. --- Page 2 --- Another cat, and a catalog.";
//! let records = search(&["cat"], text);
//! assert_eq!(records.len(), 3);
//!
//! let summaries = summarize(&records);
//! assert_eq!(summaries[0].occurrence_count, 3);
//! assert_eq!(summaries[0].page_list(), vec![1, 2]);
//!
//! let export = CsvExporter::new().export(&records, "pets.pdf")?;
//! assert_eq!(export.file_name, "pets_matches.csv");
//! # Ok(())
//! # }
//! ```
//!
//! ## License
//!
//! Licensed under either of:
//!
//! * Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.

#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Error handling
pub mod error;

// Configuration
pub mod config;

// Text extraction
pub mod extractors;

// Term search
pub mod search;

// Aggregation
pub mod results;

// CSV / JSON export
pub mod export;

// Document + results state
pub mod session;

pub use config::{HighlightMarkers, MatchConfig};
pub use error::{Error, Result};
pub use extractors::{DocumentFormat, ExtractedDocument, TextExtractor};
pub use results::{DedupKey, SearchSummary};
pub use search::{MatchEngine, MatchRecord};
pub use session::MatchSession;
