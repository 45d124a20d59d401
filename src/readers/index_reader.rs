//! Per-category index file reader.
//!
//! [`IndexReader`] loads one `index.<label>` file, drops its header block and
//! keeps the remaining lines sorted. A loaded reader can serve any number of
//! lookups without touching the file again.

use std::path::Path;

use encoding_rs::Encoding;
use log::debug;

use crate::storage::{Category, Entry};
use crate::utils::io_utils::read_lines;
use crate::utils::key::{is_header_line, try_extract_key};
use crate::utils::search::{binary_search, SortedLines};
use crate::Result;

/// Sorted word lines of one category's index file.
#[derive(Debug, Clone)]
pub struct IndexReader {
    pub category: Category,
    lines: SortedLines,
}

impl IndexReader {
    /// Reads `index.<label>` from `dict_path`.
    ///
    /// Header and blank lines are dropped. Any other line is kept, even one
    /// that has no word key, so that a search probing it reports the file as
    /// corrupt.
    pub fn open<P: AsRef<Path>>(dict_path: P, category: Category, encoding_obj: &'static Encoding) -> Result<Self> {
        let path = dict_path.as_ref().join(category.index_file_name());
        let lines: Vec<String> = read_lines(&path, encoding_obj)?
            .into_iter()
            .filter(|line| !is_header_line(line))
            .map(|line| line.trim().to_string())
            .collect();
        debug!("Loaded {} lines from {}", lines.len(), path.display());
        Ok(Self::from_lines(category, lines))
    }

    pub fn from_lines(category: Category, lines: Vec<String>) -> Self {
        Self { category, lines: SortedLines::new(lines) }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Finds `query` in this index.
    ///
    /// Returns the matching entry without definitions, or `None` if the word
    /// isn't in this category.
    pub fn lookup(&self, query: &str) -> Result<Option<Entry>> {
        let file_name = self.category.index_file_name();
        let found = binary_search(&self.lines, query).map_err(|e| e.in_file(&file_name))?;
        let Some(index) = found else {
            debug!("{:?} not found in {}", query, file_name);
            return Ok(None);
        };
        let line = self.lines.get(index).unwrap_or_default();
        let entry = Entry::from_index_line(query, line).map_err(|e| e.in_file(&file_name))?;
        debug!("{:?} found in {} with {} senses", query, file_name, entry.sense_count());
        Ok(Some(entry))
    }

    /// Word keys of every line, in sorted order. Lines without a key are skipped.
    pub fn words(&self) -> Vec<String> {
        self.lines.iter().filter_map(try_extract_key).map(str::to_string).collect()
    }
}

/// Lists the word keys of `index.<label>` in file order, skipping every line
/// that doesn't start with a key.
pub fn read_words<P: AsRef<Path>>(dict_path: P, category: Category, encoding_obj: &'static Encoding) -> Result<Vec<String>> {
    let path = dict_path.as_ref().join(category.index_file_name());
    let words: Vec<String> = read_lines(&path, encoding_obj)?
        .iter()
        .filter_map(|line| try_extract_key(line))
        .map(str::to_string)
        .collect();
    debug!("Read {} words from {}", words.len(), path.display());
    Ok(words)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    const INDEX_NOUN: &str = "  1 This software and database is being provided to you, the LICENSEE, by
  2 Princeton University under the following license.
run n 2 1 @ 2 0 00000000 00000046
apple n 1 1 @ 1 0 00000092
ice_cream n 1 1 @ 1 0 00000130
";

    fn write_index(content: &str) -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("index.noun"), content).unwrap();
        dir
    }

    #[test]
    fn test_open_skips_header() {
        let dir = write_index(INDEX_NOUN);
        let reader = IndexReader::open(dir.path(), Category::Noun, encoding_rs::UTF_8).unwrap();
        assert_eq!(reader.len(), 3);
        assert_eq!(reader.words(), vec!["apple", "ice_cream", "run"]);
    }

    #[test]
    fn test_lookup() {
        let dir = write_index(INDEX_NOUN);
        let reader = IndexReader::open(dir.path(), Category::Noun, encoding_rs::UTF_8).unwrap();

        let entry = reader.lookup("Ice Cream").unwrap().expect("ice cream is indexed");
        assert_eq!(entry.word, "ice_cream");
        assert_eq!(entry.offsets, vec![130]);

        // first sorted line
        let entry = reader.lookup("apple").unwrap().expect("apple is indexed");
        assert_eq!(entry.offsets, vec![92]);

        assert!(reader.lookup("walk").unwrap().is_none());
    }

    #[test]
    fn test_lookup_in_empty_index() {
        let dir = write_index("");
        let reader = IndexReader::open(dir.path(), Category::Noun, encoding_rs::UTF_8).unwrap();
        assert!(reader.is_empty());
        for query in ["run", "", "ice cream"] {
            assert!(reader.lookup(query).unwrap().is_none());
        }
    }

    #[test]
    fn test_corrupt_line_is_reported_with_file_name() {
        let reader = IndexReader::from_lines(
            Category::Noun,
            vec!["run n 1 0 00000000".to_string(), "%%% garbage".to_string()],
        );
        let err = reader.lookup("run").unwrap_err();
        assert!(err.is_corrupt_data());
        assert!(err.to_string().contains("index.noun"), "got {}", err);
    }

    #[test]
    fn test_read_words_keeps_file_order() {
        let dir = write_index(INDEX_NOUN);
        let words = read_words(dir.path(), Category::Noun, encoding_rs::UTF_8).unwrap();
        assert_eq!(words, vec!["run", "apple", "ice_cream"]);
    }

    #[test]
    fn test_missing_index_file() {
        let dir = TempDir::new().unwrap();
        let err = IndexReader::open(dir.path(), Category::Verb, encoding_rs::UTF_8).unwrap_err();
        assert!(err.is_resource_unavailable(), "got {}", err);
    }
}
