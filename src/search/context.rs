//! Context windows around matches.
//!
//! A context is the text within `radius` characters on each side of a match,
//! with `"..."` marking each side where the document continues, and all
//! whitespace runs collapsed to a single space.

use super::folded::FoldedText;
use crate::config::HighlightMarkers;

/// Marker for text cut off at either end of a context window.
pub const ELLIPSIS: &str = "...";

/// Extract the context around a match.
///
/// `position` and `match_len` are character offsets into `text`.
///
/// ```
/// use doc_matcher::search::extract_context;
///
/// let text = "The quick brown fox jumps over the lazy dog";
/// let ctx = extract_context(text, 16, 3, 6, None);
/// assert_eq!(ctx, "...brown fox jumps...");
/// ```
pub fn extract_context(
    text: &str,
    position: usize,
    match_len: usize,
    radius: usize,
    highlight: Option<&HighlightMarkers>,
) -> String {
    window_context(&FoldedText::new(text), position, match_len, radius, highlight)
}

/// Same as [`extract_context`] over a prepared document.
pub(crate) fn window_context(
    text: &FoldedText<'_>,
    position: usize,
    match_len: usize,
    radius: usize,
    highlight: Option<&HighlightMarkers>,
) -> String {
    let len = text.char_len();
    let match_start = position.min(len);
    let match_end = position.saturating_add(match_len).min(len);
    let start = match_start.saturating_sub(radius);
    let end = match_end.saturating_add(radius).min(len);

    let mut raw = String::new();
    if start > 0 {
        raw.push_str(ELLIPSIS);
    }
    raw.push_str(text.slice(start, match_start));
    // Markers go in while assembling, so the leading ellipsis never shifts them.
    match highlight {
        Some(markers) => {
            raw.push_str(&markers.open);
            raw.push_str(text.slice(match_start, match_end));
            raw.push_str(&markers.close);
        },
        None => raw.push_str(text.slice(match_start, match_end)),
    }
    raw.push_str(text.slice(match_end, end));
    if end < len {
        raw.push_str(ELLIPSIS);
    }

    collapse_whitespace(&raw)
}

/// Collapse whitespace runs to single spaces and trim both ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_clamped_left() {
        let text = "x".repeat(200);
        let ctx = extract_context(&text, 10, 4, 50, None);
        // [0, 64) plus trailing ellipsis
        assert_eq!(ctx, format!("{}...", "x".repeat(64)));
    }

    #[test]
    fn test_window_clamped_right() {
        let text = "y".repeat(100);
        let ctx = extract_context(&text, 90, 5, 50, None);
        assert_eq!(ctx, format!("...{}", "y".repeat(60)));
    }

    #[test]
    fn test_window_both_sides() {
        let text = "0123456789abcdefghij";
        let ctx = extract_context(text, 10, 2, 3, None);
        assert_eq!(ctx, "...789abcde...");
    }

    #[test]
    fn test_whole_text_fits() {
        let ctx = extract_context("short text", 0, 5, 50, None);
        assert_eq!(ctx, "short text");
    }

    #[test]
    fn test_whitespace_collapsed() {
        let text = "alpha\n\n  beta\t\tgamma   ";
        let ctx = extract_context(text, 9, 4, 50, None);
        assert_eq!(ctx, "alpha beta gamma");
    }

    #[test]
    fn test_leading_whitespace_after_ellipsis() {
        let text = "abc   def";
        let ctx = extract_context(text, 6, 3, 4, None);
        // window starts at offset 2 ("c   def")
        assert_eq!(ctx, "...c def");
    }

    #[test]
    fn test_highlight_with_leading_ellipsis() {
        let text = "aaaa needle bbbb";
        let markers = HighlightMarkers::brackets();
        let ctx = extract_context(text, 5, 6, 2, Some(&markers));
        assert_eq!(ctx, "...a [needle] b...");
    }

    #[test]
    fn test_highlight_without_truncation() {
        let markers = HighlightMarkers::new("<<", ">>");
        let ctx = extract_context("find me here", 5, 2, 50, Some(&markers));
        assert_eq!(ctx, "find <<me>> here");
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  a \n b  "), "a b");
        assert_eq!(collapse_whitespace("   "), "");
    }
}
