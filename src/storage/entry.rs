//! Lookup results.
//!
//! An [`Entry`] is created from the index line a search found and is then
//! filled with definitions by the data reader. Offsets keep the order they have
//! in the index line; sense numbers are 1-based positions in that order.

use serde::{Deserialize, Serialize};

use super::category::Category;
use crate::utils::key::{extract_key, normalize_query, OFFSET_PATTERN, POS_MARKER_PATTERN};
use crate::{Result, WnError};

/// A word found in one category, with its data-file offsets and, once
/// resolved, one formatted definition per offset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// The normalized word
    pub word: String,
    /// Category resolved from the line's part-of-speech marker
    pub category: Category,
    /// Byte offsets into the category's data file
    pub offsets: Vec<u64>,
    /// Formatted definitions, one per resolved offset
    pub definitions: Vec<String>,
}

impl Entry {
    /// Builds an entry from a matching index line.
    ///
    /// The part-of-speech marker is the first single-letter token after the
    /// word key; offsets are every exact 8-digit run after the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use wndict::{Category, Entry};
    ///
    /// let entry = Entry::from_index_line("Run", "run v 41 2 @ ~ 41 38 01926311 02075049").unwrap();
    /// assert_eq!(entry.word, "run");
    /// assert_eq!(entry.category, Category::Verb);
    /// assert_eq!(entry.offsets, vec![1926311, 2075049]);
    /// assert!(entry.definitions.is_empty());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `CorruptData` if the line has no word key, no marker, or an
    /// unknown marker.
    pub fn from_index_line(query: &str, line: &str) -> Result<Self> {
        let key = extract_key(line)?;
        let fields = &line[key.len()..];

        let marker = POS_MARKER_PATTERN
            .find(fields)
            .and_then(|m| m.as_str().chars().next())
            .ok_or_else(|| WnError::corrupt_data(format!("line {:?} has no part-of-speech marker", line)))?;
        let category = Category::from_code(marker)
            .map_err(|_| WnError::corrupt_data(format!("line {:?} has unknown part-of-speech marker {:?}", line, marker)))?;

        let offsets = OFFSET_PATTERN
            .find_iter(fields)
            .map(|m| {
                m.as_str()
                    .parse::<u64>()
                    .map_err(|e| WnError::corrupt_data(format!("bad offset {:?}: {}", m.as_str(), e)))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            word: normalize_query(query),
            category,
            offsets,
            definitions: Vec::new(),
        })
    }

    /// Number of senses recorded for this entry.
    pub fn sense_count(&self) -> usize {
        self.offsets.len()
    }
}

/// Formats one definition as `"(<label> <sense>) <gloss>"`.
pub fn format_definition(category: Category, sense: usize, gloss: &str) -> String {
    format!("({} {}) {}", category.label(), sense, gloss)
}
