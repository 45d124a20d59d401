//! Binary search over sorted index lines, comparing against each line's word
//! key rather than the raw line.
//!
//! [`SortedLines`] owns its lines and sorts them once on construction, so the
//! search never reorders data it doesn't own. Indexes returned by
//! [`binary_search`] are positions in that sorted collection.
//!
//! # Examples
//!
//! ```
//! use wndict::utils::{binary_search, SortedLines};
//!
//! let lines = SortedLines::new(vec![
//!     "cherry\t00000030".to_string(),
//!     "apple\t00000010".to_string(),
//!     "banana\t00000020".to_string(),
//! ]);
//! assert_eq!(binary_search(&lines, "banana").unwrap(), Some(1));
//! assert_eq!(binary_search(&lines, "durian").unwrap(), None);
//! ```

use std::cmp::Ordering;

use log::trace;

use super::key::{extract_key, normalize_query};
use crate::Result;

/// An immutable collection of index lines in ascending byte order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortedLines {
    lines: Vec<String>,
}

impl SortedLines {
    /// Takes ownership of `lines` and sorts them ascending.
    pub fn new(mut lines: Vec<String>) -> Self {
        lines.sort();
        Self { lines }
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn into_inner(self) -> Vec<String> {
        self.lines
    }
}

impl From<Vec<String>> for SortedLines {
    fn from(lines: Vec<String>) -> Self {
        Self::new(lines)
    }
}

impl FromIterator<String> for SortedLines {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Finds the line whose word key equals the normalized `query`.
///
/// Returns `Ok(None)` when no line matches, including for an empty
/// collection. Index `0` is an ordinary hit.
///
/// # Errors
///
/// Returns `CorruptData` if a probed line doesn't start with a word key.
pub fn binary_search(lines: &SortedLines, query: &str) -> Result<Option<usize>> {
    if lines.is_empty() {
        return Ok(None);
    }
    let search_key = normalize_query(query);
    let mut left = 0;
    let mut right = lines.len() - 1;

    while left <= right {
        let mid = (left + right) / 2;
        let mid_key = extract_key(&lines.lines[mid])?;
        trace!("probe {} [{}..={}]: {:?}", mid, left, right, mid_key);

        match search_key.as_str().cmp(mid_key) {
            Ordering::Equal => return Ok(Some(mid)),
            Ordering::Greater => left = mid + 1,
            Ordering::Less => {
                if mid == 0 {
                    break;
                }
                right = mid - 1;
            }
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> SortedLines {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_finds_every_present_key() {
        let data = lines(&[
            "elderberry\t00000050",
            "apple\t00000010",
            "date\t00000040",
            "banana\t00000020",
            "cherry\t00000030",
        ]);
        for (i, key) in ["apple", "banana", "cherry", "date", "elderberry"].iter().enumerate() {
            assert_eq!(binary_search(&data, key).unwrap(), Some(i), "searching {:?}", key);
        }
    }

    #[test]
    fn test_absent_keys_are_not_found() {
        let data = lines(&["apple\t00000010", "banana\t00000020", "cherry\t00000030"]);
        for key in ["aardvark", "apricot", "blueberry", "zucchini", ""] {
            assert_eq!(binary_search(&data, key).unwrap(), None, "searching {:?}", key);
        }
    }

    #[test]
    fn test_first_and_last_positions() {
        let data = lines(&["apple\t00000010", "banana\t00000020", "cherry\t00000030"]);
        // index 0 is a hit, not "nothing"
        assert_eq!(binary_search(&data, "apple").unwrap(), Some(0));
        assert_eq!(binary_search(&data, "cherry").unwrap(), Some(2));
    }

    #[test]
    fn test_empty_and_single_element() {
        let empty = SortedLines::default();
        assert_eq!(binary_search(&empty, "anything").unwrap(), None);
        assert_eq!(binary_search(&empty, "").unwrap(), None);

        let single = lines(&["run n 2 0 2 0 00000000 00000100"]);
        assert_eq!(binary_search(&single, "run").unwrap(), Some(0));
        assert_eq!(binary_search(&single, "ran").unwrap(), None);
        assert_eq!(binary_search(&single, "rut").unwrap(), None);
    }

    #[test]
    fn test_query_is_normalized() {
        let data = lines(&["ice n 1 00000010", "ice_cream n 1 00000020", "icebox n 1 00000030"]);
        assert_eq!(binary_search(&data, " Ice Cream ").unwrap(), Some(1));
        assert_eq!(binary_search(&data, "ICE").unwrap(), Some(0));
    }

    #[test]
    fn test_sorting_is_owned_by_the_collection() {
        let data = lines(&["cherry 1", "apple 1", "banana 1"]);
        assert_eq!(data.get(0), Some("apple 1"));
        assert_eq!(data.into_inner(), vec!["apple 1", "banana 1", "cherry 1"]);
    }

    #[test]
    fn test_corrupt_probe_is_an_error() {
        let data = lines(&["!!broken", "run n 1 00000010"]);
        let err = binary_search(&data, "run").unwrap_err();
        assert!(err.is_corrupt_data(), "got {}", err);
    }
}
