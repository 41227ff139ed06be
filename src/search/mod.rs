//! Term search over extracted document text.
//!
//! This module finds every occurrence of user-supplied terms in a document's
//! text and reports, for each one, where it is, what surrounds it and which
//! page it is on. Supports:
//! - Several independent search inputs, each split into whitespace terms
//! - Case-insensitive literal matching that preserves document casing
//! - Overlapping occurrences (`"aa"` in `"aaaa"` matches three times)
//! - Page numbers from `--- Page N ---` sentinels with an offset estimate fallback
//! - Optional highlighting of the match inside its context
//!
//! ## Example
//!
//! ```
//! use doc_matcher::config::MatchConfig;
//! use doc_matcher::search::MatchEngine;
//!
//! let text = "--- Page 1 --- The door was open. --- Page 2 --- It opened again.";
//! let engine = MatchEngine::new(MatchConfig::default());
//! let records = engine.search(&["OPEN"], text);
//!
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[0].matched_text, "open");
//! assert_eq!(records[1].page_number, 2);
//! ```

mod context;
mod folded;
mod page;
mod text_search;

pub use context::{collapse_whitespace, extract_context, ELLIPSIS};
pub use folded::{fold, fold_char};
pub use page::{page_sentinel, resolve_page, PageMap};
pub use text_search::{search, split_terms, MatchEngine, MatchRecord};
