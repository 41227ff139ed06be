//! Aggregation of match records.
//!
//! The engine produces a raw listing; this module turns it into what gets
//! shown or exported:
//! - **Sorting**: by input box, then position
//! - **Deduplication**: coarse or strict key, first occurrence wins
//! - **Summaries**: one entry per term with a count and its pages

mod dedup;
mod summary;

pub use dedup::{collapse_phrase_duplicates, deduplicate, DedupKey};
pub use summary::{summarize, SearchSummary};

use crate::search::MatchRecord;

/// Sort records by `(input_box_id, position)`.
///
/// The sort is stable, so records of different terms at the same position
/// keep their engine order.
pub fn sort_records(records: &[MatchRecord]) -> Vec<MatchRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by_key(|r| (r.input_box_id, r.position));
    sorted
}
