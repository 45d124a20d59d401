//! Word keys: query normalization and key extraction from index lines.
//!
//! An index line starts with its word key, a run of word characters, dots and
//! hyphens. Multi-word lexical items are stored joined with `_` instead of
//! spaces, so a user query has to be normalized before it can be compared to
//! an extracted key.
//!
//! # Examples
//!
//! ```
//! use wndict::utils::{extract_key, normalize_query};
//!
//! let key = extract_key("ice_cream n 1 1 @ 1 0 07611358").unwrap();
//! assert_eq!(key, normalize_query("  Ice Cream "));
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{Result, WnError};

/// Character joining the words of a multi-word lexical item.
pub const WORD_JOINER: char = '_';

// The patterns below are string literals checked once at first use; their
// `expect` can't fire on any input.

/// Leading word key of an index line.
pub static WORD_KEY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w.-]+\b").expect("word key pattern is valid"));

/// Single-letter part-of-speech marker token.
pub static POS_MARKER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[a-z]\b").expect("marker pattern is valid"));

/// Exact 8-digit byte offset into a data file.
pub static OFFSET_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[0-9]{8}\b").expect("offset pattern is valid"));

/// Converts a user query into the canonical key form: trimmed, lowercased,
/// with every space replaced by [`WORD_JOINER`].
///
/// # Examples
///
/// ```
/// use wndict::utils::normalize_query;
///
/// let cases = [
///     ("run", "run"),
///     ("  Run\t", "run"),
///     ("ice cream", "ice_cream"),
///     ("New York City", "new_york_city"),
///     ("", ""),
/// ];
/// for (query, expected) in cases {
///     assert_eq!(normalize_query(query), expected);
/// }
/// ```
pub fn normalize_query(query: &str) -> String {
    query
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == ' ' { WORD_JOINER } else { c })
        .collect()
}

/// Extracts the leading word key from an index line.
///
/// # Errors
///
/// Returns `CorruptData` when the line doesn't start with a word key. This is
/// a structural violation of the index file, not a "word not found".
pub fn extract_key(line: &str) -> Result<&str> {
    WORD_KEY_PATTERN
        .find(line)
        .map(|m| m.as_str())
        .ok_or_else(|| WnError::corrupt_data(format!("line {:?} does not start with a word key", line)))
}

/// Same as [`extract_key`] for callers that skip non-matching lines.
pub fn try_extract_key(line: &str) -> Option<&str> {
    WORD_KEY_PATTERN.find(line).map(|m| m.as_str())
}

/// Header lines (the licence block at the top of every index file) are
/// indented; blank lines carry nothing either.
pub fn is_header_line(raw_line: &str) -> bool {
    raw_line.trim().is_empty() || raw_line.starts_with(char::is_whitespace)
}
