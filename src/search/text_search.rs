//! Literal, case-insensitive term search with overlap.
//!
//! Each raw input (one per search box) is trimmed and split on whitespace
//! into terms. Every term is searched on its own across the whole document,
//! resuming one character after each hit so overlapping occurrences are all
//! reported.

use super::context::{collapse_whitespace, window_context};
use super::folded::{fold, FoldedText};
use super::page::PageMap;
use crate::config::MatchConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One occurrence of one search term in the document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchRecord {
    /// 1-based index of the search input that produced the term
    pub input_box_id: usize,
    /// The term searched for, as split from the input
    pub search_term: String,
    /// The document text at the match, in the document's casing
    pub matched_text: String,
    /// Surrounding text, truncation-marked and whitespace-collapsed
    pub context: String,
    /// 1-based page the match falls on
    pub page_number: usize,
    /// Character offset of the match start in the extracted text
    pub position: usize,
}

/// Split a raw input into search terms.
///
/// Terms shorter than `min_len` characters are dropped. A term repeated
/// within the input is kept once, at its first position; comparison is
/// exact, so `"Cat cat"` stays two terms.
pub fn split_terms(input: &str, min_len: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    input
        .split_whitespace()
        .filter(|term| term.chars().count() >= min_len.max(1))
        .filter(|term| seen.insert(*term))
        .map(str::to_string)
        .collect()
}

/// The match engine.
#[derive(Debug, Clone, Default)]
pub struct MatchEngine {
    config: MatchConfig,
}

impl MatchEngine {
    /// Create an engine with the given configuration.
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Get the current configuration.
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Terms searched for a single raw input, in search order.
    ///
    /// The phrase term, when enabled, is the input with each whitespace run
    /// collapsed to one space. It only matches document text whose words are
    /// separated by exactly one space.
    pub fn terms_for(&self, input: &str) -> Vec<String> {
        let mut terms = split_terms(input, self.config.min_term_length);
        if self.config.include_phrase && terms.len() > 1 {
            terms.push(collapse_whitespace(input));
        }
        terms
    }

    /// Search a document for every term of every input.
    ///
    /// Records come out in input order, then term order, then ascending
    /// position. An empty document or empty inputs give an empty result.
    pub fn search<S: AsRef<str>>(&self, inputs: &[S], text: &str) -> Vec<MatchRecord> {
        if text.trim().is_empty() {
            log::debug!("Empty document, nothing to search");
            return Vec::new();
        }

        let document = FoldedText::new(text);
        let pages = PageMap::with_estimates(
            text,
            self.config.chars_per_page_plain,
            self.config.chars_per_page_paginated,
        );

        log::debug!(
            "Searching {} inputs in {} characters ({} page sentinels)",
            inputs.len(),
            document.char_len(),
            pages.sentinels().len()
        );

        let records: Vec<MatchRecord> = inputs
            .iter()
            .enumerate()
            .flat_map(|(index, input)| {
                let input_box_id = index + 1;
                self.terms_for(input.as_ref())
                    .into_iter()
                    .map(move |term| (input_box_id, term))
            })
            .flat_map(|(input_box_id, term)| {
                self.find_term(&document, &pages, input_box_id, &term)
            })
            .collect();

        log::info!("Search complete: {} matches", records.len());
        records
    }

    /// All occurrences of one term, in ascending position order.
    fn find_term(
        &self,
        document: &FoldedText<'_>,
        pages: &PageMap,
        input_box_id: usize,
        term: &str,
    ) -> Vec<MatchRecord> {
        let needle = fold(term);
        let term_len = term.chars().count();

        let records: Vec<MatchRecord> =
            std::iter::successors(document.find_from(&needle, 0), |&previous| {
                document.find_from(&needle, previous + 1)
            })
            .map(|position| MatchRecord {
                input_box_id,
                search_term: term.to_string(),
                matched_text: document.slice(position, position + term_len).to_string(),
                context: window_context(
                    document,
                    position,
                    term_len,
                    self.config.context_radius,
                    self.config.highlight.as_ref(),
                ),
                page_number: pages.resolve(position),
                position,
            })
            .collect();

        log::debug!("Box {} term {:?}: {} matches", input_box_id, term, records.len());
        records
    }
}

/// Search with the default configuration.
pub fn search<S: AsRef<str>>(inputs: &[S], text: &str) -> Vec<MatchRecord> {
    MatchEngine::default().search(inputs, text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HighlightMarkers;

    fn positions(records: &[MatchRecord]) -> Vec<usize> {
        records.iter().map(|r| r.position).collect()
    }

    #[test]
    fn test_split_terms() {
        assert_eq!(split_terms("  alpha \t beta\ngamma ", 1), vec!["alpha", "beta", "gamma"]);
        assert_eq!(split_terms("a bb ccc", 2), vec!["bb", "ccc"]);
        assert!(split_terms("   ", 1).is_empty());
    }

    #[test]
    fn test_split_terms_drops_repeats() {
        assert_eq!(split_terms("cat dog cat", 1), vec!["cat", "dog"]);
        assert_eq!(split_terms("Cat cat", 1), vec!["Cat", "cat"]);
    }

    #[test]
    fn test_overlapping_matches() {
        let records = search(&["aa"], "aaaa");
        assert_eq!(positions(&records), vec![0, 1, 2]);

        let records = search(&["aa"], "aaa");
        assert_eq!(positions(&records), vec![0, 1]);
    }

    #[test]
    fn test_case_insensitive_case_preserving() {
        let text = "the door was open then opened";
        let records = search(&["OPEN"], text);
        assert_eq!(positions(&records), vec![13, 23]);
        assert!(records.iter().all(|r| r.matched_text == "open"));
        assert!(records.iter().all(|r| r.search_term == "OPEN"));
    }

    #[test]
    fn test_matched_text_keeps_document_casing() {
        let records = search(&["rust"], "Rust and RUST");
        let matched: Vec<&str> = records.iter().map(|r| r.matched_text.as_str()).collect();
        assert_eq!(matched, vec!["Rust", "RUST"]);
    }

    #[test]
    fn test_literal_metacharacters() {
        let records = search(&["a.b"], "axb a.b");
        assert_eq!(positions(&records), vec![4]);

        let records = search(&["(x)"], "f(x) = (x)");
        assert_eq!(positions(&records), vec![1, 7]);
    }

    #[test]
    fn test_input_and_term_order() {
        let text = "beta alpha beta alpha";
        let records = search(&["alpha beta", "", "beta"], text);
        let order: Vec<(usize, &str, usize)> = records
            .iter()
            .map(|r| (r.input_box_id, r.search_term.as_str(), r.position))
            .collect();
        assert_eq!(
            order,
            vec![
                (1, "alpha", 5),
                (1, "alpha", 16),
                (1, "beta", 0),
                (1, "beta", 11),
                (3, "beta", 0),
                (3, "beta", 11),
            ]
        );
    }

    #[test]
    fn test_empty_inputs() {
        let none: [&str; 0] = [];
        assert!(search(&none, "any text").is_empty());
        assert!(search(&[""], "any text").is_empty());
        assert!(search(&["   \t"], "any text").is_empty());
    }

    #[test]
    fn test_empty_document() {
        assert!(search(&["a"], "").is_empty());
        assert!(search(&["a"], "   \n ").is_empty());
    }

    #[test]
    fn test_min_term_length() {
        let engine = MatchEngine::new(MatchConfig::new().with_min_term_length(2));
        let records = engine.search(&["a an"], "a banana");
        assert!(records.iter().all(|r| r.search_term == "an"));
        assert_eq!(positions(&records), vec![3, 5]);
    }

    #[test]
    fn test_phrase_variant() {
        let engine = MatchEngine::new(MatchConfig::new().with_phrase(true));
        assert_eq!(engine.terms_for("red   fox"), vec!["red", "fox", "red fox"]);
        assert_eq!(engine.terms_for("fox"), vec!["fox"]);

        let records = engine.search(&["red fox"], "a red fox");
        let terms: Vec<&str> = records.iter().map(|r| r.search_term.as_str()).collect();
        assert_eq!(terms, vec!["red", "fox", "red fox"]);
        assert_eq!(records[2].matched_text, "red fox");
    }

    #[test]
    fn test_phrase_matches_single_spaced_text_only() {
        let engine = MatchEngine::new(MatchConfig::new().with_phrase(true));
        assert_eq!(engine.terms_for("red\tfox"), vec!["red", "fox", "red fox"]);

        let records = engine.search(&["red\tfox"], "red\tfox");
        assert!(records.iter().all(|r| r.search_term != "red fox"));
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_page_numbers_from_sentinels() {
        let text = "--- Page 1 --- hello --- Page 2 --- world";
        let records = search(&["world hello"], text);
        assert_eq!(records[0].page_number, 2);
        assert_eq!(records[1].page_number, 1);
    }

    #[test]
    fn test_page_numbers_fallback() {
        let mut text = "x".repeat(1499);
        text.push_str("needle");
        let records = search(&["needle"], &text);
        assert_eq!(records[0].position, 1499);
        assert_eq!(records[0].page_number, 3);
    }

    #[test]
    fn test_highlighted_context() {
        let engine = MatchEngine::new(
            MatchConfig::new()
                .with_context_radius(4)
                .with_highlight(HighlightMarkers::brackets()),
        );
        let records = engine.search(&["fox"], "the quick brown fox jumps");
        assert_eq!(records[0].context, "...own [fox] jum...");
    }

    #[test]
    fn test_unicode_positions_are_chars() {
        let records = search(&["café"], "Un CAFÉ, deux cafés");
        assert_eq!(positions(&records), vec![3, 14]);
        assert_eq!(records[0].matched_text, "CAFÉ");
    }
}
