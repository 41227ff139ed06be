//! Case-folded view of a document with character offset tables.
//!
//! Every character folds to exactly one character, so the folded text and
//! the original text share character offsets. Matches are found in the
//! folded text and sliced out of the original.

/// Fold a character to its lowercase form.
///
/// Characters whose lowercase mapping expands to several characters
/// (e.g. `İ`) are kept unchanged.
pub fn fold_char(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// Fold a whole string with [`fold_char`].
pub fn fold(text: &str) -> String {
    text.chars().map(fold_char).collect()
}

/// A document paired with its folded form.
#[derive(Debug)]
pub(crate) struct FoldedText<'a> {
    original: &'a str,
    folded: String,
    /// Byte offset of each char in `original`, plus `original.len()`
    original_starts: Vec<usize>,
    /// Byte offset of each char in `folded`, plus `folded.len()`
    folded_starts: Vec<usize>,
}

impl<'a> FoldedText<'a> {
    pub(crate) fn new(original: &'a str) -> Self {
        let mut folded = String::with_capacity(original.len());
        let mut original_starts = Vec::with_capacity(original.len() + 1);
        let mut folded_starts = Vec::with_capacity(original.len() + 1);

        for (byte, c) in original.char_indices() {
            original_starts.push(byte);
            folded_starts.push(folded.len());
            folded.push(fold_char(c));
        }
        original_starts.push(original.len());
        folded_starts.push(folded.len());

        Self {
            original,
            folded,
            original_starts,
            folded_starts,
        }
    }

    /// Length in characters.
    pub(crate) fn char_len(&self) -> usize {
        self.original_starts.len() - 1
    }

    /// Original text between two character offsets (clamped).
    pub(crate) fn slice(&self, start: usize, end: usize) -> &'a str {
        let len = self.char_len();
        let start = start.min(len);
        let end = end.clamp(start, len);
        &self.original[self.original_starts[start]..self.original_starts[end]]
    }

    /// Character offset of the first occurrence of an already-folded needle
    /// starting at or after character offset `from`.
    pub(crate) fn find_from(&self, needle: &str, from: usize) -> Option<usize> {
        if needle.is_empty() || from >= self.char_len() {
            return None;
        }
        let byte_from = self.folded_starts[from];
        let found = self.folded[byte_from..].find(needle)? + byte_from;
        // `find` only reports char boundaries, which are all in the table.
        self.folded_starts.binary_search(&found).ok()
    }
}
