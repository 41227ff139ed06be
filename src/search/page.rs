//! Page number resolution.
//!
//! Paginated extractors insert a sentinel line `--- Page N ---` before each
//! page. A match belongs to the page of the last sentinel at or before it.
//! When there is no such sentinel, the page is estimated from the character
//! offset; the estimate is a heuristic, not a guarantee.

use crate::config::{CHARS_PER_PAGE_PAGINATED, CHARS_PER_PAGE_PLAIN};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Page boundary sentinel inserted by paginated extractors
    static ref RE_PAGE_SENTINEL: Regex = Regex::new(r"--- Page (\d+) ---").unwrap();
}

/// Render the sentinel for a 1-based page number.
pub fn page_sentinel(page: usize) -> String {
    format!("--- Page {} ---", page)
}

/// Sorted page sentinels of one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMap {
    /// `(char_offset, page_number)` in ascending offset order
    sentinels: Vec<(usize, usize)>,
    chars_per_page_plain: usize,
    chars_per_page_paginated: usize,
}

impl PageMap {
    /// Scan a document for sentinels using the default page estimates.
    pub fn build(text: &str) -> Self {
        Self::with_estimates(text, CHARS_PER_PAGE_PLAIN, CHARS_PER_PAGE_PAGINATED)
    }

    /// Scan a document for sentinels with custom page estimates.
    pub fn with_estimates(text: &str, plain: usize, paginated: usize) -> Self {
        let mut sentinels = Vec::new();
        let mut last_byte = 0;
        let mut last_char = 0;

        for caps in RE_PAGE_SENTINEL.captures_iter(text) {
            let whole = caps.get(0).map_or(0..0, |m| m.range());
            last_char += text[last_byte..whole.start].chars().count();
            last_byte = whole.start;

            match caps[1].parse::<usize>() {
                Ok(0) => {
                    log::warn!("Page sentinel with page 0 at offset {}, using page 1", last_char);
                    sentinels.push((last_char, 1));
                },
                Ok(page) => sentinels.push((last_char, page)),
                Err(e) => {
                    log::warn!("Ignoring page sentinel at offset {}: {}", last_char, e);
                },
            }
        }

        log::debug!("Found {} page sentinels", sentinels.len());

        Self {
            sentinels,
            chars_per_page_plain: plain.max(1),
            chars_per_page_paginated: paginated.max(1),
        }
    }

    /// Whether the document carries any sentinels.
    pub fn is_paginated(&self) -> bool {
        !self.sentinels.is_empty()
    }

    /// The sentinels found, as `(char_offset, page_number)`.
    pub fn sentinels(&self) -> &[(usize, usize)] {
        &self.sentinels
    }

    /// Resolve the page of a match starting at character offset `offset`.
    pub fn resolve(&self, offset: usize) -> usize {
        let preceding = self.sentinels.partition_point(|&(start, _)| start <= offset);
        if preceding > 0 {
            return self.sentinels[preceding - 1].1;
        }

        let per_page = if self.is_paginated() {
            self.chars_per_page_paginated
        } else {
            self.chars_per_page_plain
        };
        offset / per_page + 1
    }
}

/// Resolve the page of a single offset.
///
/// Builds a [`PageMap`] on every call; use the map directly when resolving
/// many offsets in the same document.
pub fn resolve_page(text: &str, offset: usize) -> usize {
    PageMap::build(text).resolve(offset)
}
