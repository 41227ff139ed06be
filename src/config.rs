//! Configuration for the match engine.

/// Characters per page assumed when a document carries no page sentinels.
pub const CHARS_PER_PAGE_PLAIN: usize = 500;

/// Characters per page assumed for a paginated document when a match
/// precedes its first sentinel.
pub const CHARS_PER_PAGE_PAGINATED: usize = 3000;

/// Characters of surrounding text kept on each side of a match.
pub const DEFAULT_CONTEXT_RADIUS: usize = 50;

/// Markers wrapped around the matched span inside a context string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightMarkers {
    /// Inserted before the match
    pub open: String,
    /// Inserted after the match
    pub close: String,
}

impl HighlightMarkers {
    /// Create markers from an opening and closing string.
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }

    /// Square brackets: `[match]`.
    pub fn brackets() -> Self {
        Self::new("[", "]")
    }
}

/// Match engine configuration.
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Radius of the context window, in characters.
    pub context_radius: usize,

    /// Terms shorter than this (in characters) are skipped.
    pub min_term_length: usize,

    /// Also search multi-word inputs as one phrase, with whitespace runs
    /// collapsed to single spaces.
    pub include_phrase: bool,

    /// Highlight the match span inside the context.
    pub highlight: Option<HighlightMarkers>,

    /// Page size estimate for documents without sentinels.
    pub chars_per_page_plain: usize,

    /// Page size estimate for matches before the first sentinel.
    pub chars_per_page_paginated: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchConfig {
    /// Create new configuration with defaults.
    pub fn new() -> Self {
        Self {
            context_radius: DEFAULT_CONTEXT_RADIUS,
            min_term_length: 1,
            include_phrase: false,
            highlight: None,
            chars_per_page_plain: CHARS_PER_PAGE_PLAIN,
            chars_per_page_paginated: CHARS_PER_PAGE_PAGINATED,
        }
    }

    /// Set the context radius.
    pub fn with_context_radius(mut self, radius: usize) -> Self {
        self.context_radius = radius;
        self
    }

    /// Set the minimum term length. Zero is treated as one.
    pub fn with_min_term_length(mut self, len: usize) -> Self {
        self.min_term_length = len.max(1);
        self
    }

    /// Search multi-word inputs as a phrase as well as word by word.
    pub fn with_phrase(mut self, enable: bool) -> Self {
        self.include_phrase = enable;
        self
    }

    /// Wrap matches in the context with the given markers.
    pub fn with_highlight(mut self, markers: HighlightMarkers) -> Self {
        self.highlight = Some(markers);
        self
    }

    /// Override both page-size estimates.
    pub fn with_chars_per_page(mut self, plain: usize, paginated: usize) -> Self {
        self.chars_per_page_plain = plain.max(1);
        self.chars_per_page_paginated = paginated.max(1);
        self
    }
}
