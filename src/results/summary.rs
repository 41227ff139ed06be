//! Per-term summaries of match records.

use crate::search::MatchRecord;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Aggregated view of all matches for one search term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSummary {
    /// The term, exactly as stored on the records
    pub search_term: String,
    /// Number of records for the term (not deduplicated by page)
    pub occurrence_count: usize,
    /// Unique pages the term occurs on, ascending
    pub pages: BTreeSet<usize>,
}

impl SearchSummary {
    fn new(search_term: &str) -> Self {
        Self {
            search_term: search_term.to_string(),
            occurrence_count: 0,
            pages: BTreeSet::new(),
        }
    }

    /// Pages as a list, e.g. for display.
    pub fn page_list(&self) -> Vec<usize> {
        self.pages.iter().copied().collect()
    }
}

/// Group records by search term.
///
/// Grouping uses exact, case-sensitive equality on `search_term`. Summaries
/// are returned in order of each term's first appearance in `records`.
pub fn summarize(records: &[MatchRecord]) -> Vec<SearchSummary> {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut summaries: Vec<SearchSummary> = Vec::new();

    for record in records {
        let slot = *slots.entry(record.search_term.as_str()).or_insert_with(|| {
            summaries.push(SearchSummary::new(&record.search_term));
            summaries.len() - 1
        });
        let summary = &mut summaries[slot];
        summary.occurrence_count += 1;
        summary.pages.insert(record.page_number);
    }

    log::debug!("Summarized {} records into {} terms", records.len(), summaries.len());
    summaries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(term: &str, page: usize, position: usize) -> MatchRecord {
        MatchRecord {
            input_box_id: 1,
            search_term: term.to_string(),
            matched_text: term.to_string(),
            context: format!("...{}...", term),
            page_number: page,
            position,
        }
    }

    #[test]
    fn test_summary_counts_all_records() {
        let records = vec![record("cat", 1, 0), record("cat", 1, 10), record("cat", 2, 900)];
        let summaries = summarize(&records);

        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].search_term, "cat");
        assert_eq!(summaries[0].occurrence_count, 3);
        assert_eq!(summaries[0].page_list(), vec![1, 2]);
    }

    #[test]
    fn test_summary_pages_sorted() {
        let records = vec![record("dog", 5, 0), record("dog", 2, 1), record("dog", 5, 2)];
        let summaries = summarize(&records);
        assert_eq!(summaries[0].page_list(), vec![2, 5]);
    }

    #[test]
    fn test_summary_case_sensitive_terms_in_first_seen_order() {
        let records = vec![record("Cat", 1, 0), record("bird", 3, 5), record("cat", 2, 9)];
        let terms: Vec<String> = summarize(&records).into_iter().map(|s| s.search_term).collect();
        assert_eq!(terms, vec!["Cat", "bird", "cat"]);
    }

    #[test]
    fn test_summary_empty() {
        assert!(summarize(&[]).is_empty());
    }
}
