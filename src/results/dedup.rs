//! Duplicate removal for match listings.
//!
//! Two records are duplicates when they agree on the fields selected by a
//! [`DedupKey`]. The first record of each key (lowest position, when the
//! input is in engine order) is kept and the relative order of kept records
//! is unchanged.

use crate::search::MatchRecord;
use std::collections::HashSet;

/// Fields that decide whether two records are the same hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DedupKey {
    /// `(search_term, context, page_number)`.
    ///
    /// Two distinct nearby occurrences that render the same context string
    /// collapse into one.
    #[default]
    Coarse,
    /// `(search_term, context, page_number, position)`: only exact repeats
    /// collapse.
    Strict,
}

impl DedupKey {
    fn key<'a>(self, record: &'a MatchRecord) -> (&'a str, &'a str, usize, Option<usize>) {
        let position = match self {
            DedupKey::Coarse => None,
            DedupKey::Strict => Some(record.position),
        };
        (
            record.search_term.as_str(),
            record.context.as_str(),
            record.page_number,
            position,
        )
    }
}

/// Remove duplicate records, keeping the first of each key.
pub fn deduplicate(records: &[MatchRecord], key: DedupKey) -> Vec<MatchRecord> {
    let mut seen = HashSet::new();
    let kept: Vec<MatchRecord> = records
        .iter()
        .filter(|record| seen.insert(key.key(*record)))
        .cloned()
        .collect();

    log::debug!(
        "Deduplicated {} records to {} ({:?} key)",
        records.len(),
        kept.len(),
        key
    );
    kept
}

/// Drop single-word records covered by a phrase match from the same input.
///
/// With phrase search enabled, an input like `"red fox"` reports `red`,
/// `fox` and `red fox`. Word hits that lie entirely inside a phrase hit of
/// the same input box are dropped; word hits elsewhere are kept.
pub fn collapse_phrase_duplicates(records: &[MatchRecord]) -> Vec<MatchRecord> {
    let phrase_spans: Vec<(usize, usize, usize)> = records
        .iter()
        .filter(|r| r.search_term.chars().any(char::is_whitespace))
        .map(|r| (r.input_box_id, r.position, r.position + r.search_term.chars().count()))
        .collect();

    if phrase_spans.is_empty() {
        return records.to_vec();
    }

    records
        .iter()
        .filter(|r| {
            if r.search_term.chars().any(char::is_whitespace) {
                return true;
            }
            let end = r.position + r.search_term.chars().count();
            !phrase_spans.iter().any(|&(box_id, start, phrase_end)| {
                box_id == r.input_box_id && start <= r.position && end <= phrase_end
            })
        })
        .cloned()
        .collect()
}
