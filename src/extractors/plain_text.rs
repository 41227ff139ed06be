//! Plain text extraction.

use crate::error::{Error, Result};

const UTF8_BOM: &str = "\u{feff}";

/// Decode a plain text file.
///
/// Input must be UTF-8; a leading byte order mark is dropped.
pub fn extract_plain_text(bytes: &[u8]) -> Result<String> {
    let text = std::str::from_utf8(bytes).map_err(|e| Error::extraction("text", e))?;
    Ok(text.strip_prefix(UTF8_BOM).unwrap_or(text).to_string())
}
