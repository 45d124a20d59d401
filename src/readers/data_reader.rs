//! Gloss retrieval from a category's data file.
//!
//! Index entries point into `data.<label>` by byte offset. At each offset
//! starts one record line of `|`-delimited fields; the gloss is whatever
//! follows the last `|`.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use encoding_rs::Encoding;
use log::debug;

use crate::storage::entry::format_definition;
use crate::storage::{Category, Entry};
use crate::utils::io_utils::{open_resource, read_line_at};
use crate::{Result, WnError};

const GLOSS_DELIMITER: char = '|';

/// Random-access reader over one `data.<label>` file.
pub struct DataReader {
    pub category: Category,
    pub path: PathBuf,
    reader: BufReader<File>,
    encoding_obj: &'static Encoding,
}

impl DataReader {
    pub fn open<P: AsRef<Path>>(dict_path: P, category: Category, encoding_obj: &'static Encoding) -> Result<Self> {
        let path = dict_path.as_ref().join(category.data_file_name());
        let reader = open_resource(&path)?;
        Ok(Self { category, path, reader, encoding_obj })
    }

    /// Reads the gloss of the record starting at `offset`.
    ///
    /// # Errors
    ///
    /// Returns `CorruptData` if the offset is past end of file or the record
    /// has no gloss delimiter.
    pub fn read_gloss(&mut self, offset: u64) -> Result<String> {
        let file_name = self.category.data_file_name();
        let line = read_line_at(&mut self.reader, offset, self.encoding_obj)
            .map_err(|e| e.in_file(&file_name))?
            .ok_or_else(|| WnError::corrupt_data(format!("{}: offset {:08} is past end of file", file_name, offset)))?;
        let gloss = line
            .rsplit_once(GLOSS_DELIMITER)
            .map(|(_, gloss)| gloss.trim())
            .ok_or_else(|| WnError::corrupt_data(format!("{}: record at offset {:08} has no gloss", file_name, offset)))?;
        Ok(gloss.to_string())
    }

    /// Appends one definition per offset of `entry`, in offset order.
    ///
    /// Sense numbers are 1-based positions in `entry.offsets`; the label is
    /// this reader's category.
    pub fn resolve(&mut self, mut entry: Entry) -> Result<Entry> {
        for (sense, &offset) in (1..).zip(entry.offsets.iter()) {
            let gloss = self.read_gloss(offset)?;
            entry.definitions.push(format_definition(self.category, sense, &gloss));
        }
        debug!("Resolved {} definitions of {:?} from {}", entry.definitions.len(), entry.word, self.path.display());
        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    const DATA_VERB: &str = "  1 This software and database is being provided to you
00000056 38 v 01 run 0 | move fast by using one's feet
00000111 38 v 01 run 1 | stretch out over a distance; \"the road runs along the river\"  
broken record without delimiter
";

    fn open_fixture() -> (TempDir, DataReader) {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("data.verb"), DATA_VERB).unwrap();
        let reader = DataReader::open(dir.path(), Category::Verb, encoding_rs::UTF_8).unwrap();
        (dir, reader)
    }

    #[test]
    fn test_read_gloss() {
        let (_dir, mut reader) = open_fixture();
        assert_eq!(reader.read_gloss(56).unwrap(), "move fast by using one's feet");
        assert_eq!(
            reader.read_gloss(111).unwrap(),
            "stretch out over a distance; \"the road runs along the river\""
        );
    }

    #[test]
    fn test_resolve_numbers_senses_in_offset_order() {
        let (_dir, mut reader) = open_fixture();
        let entry = Entry {
            word: "run".to_string(),
            category: Category::Verb,
            offsets: vec![111, 56],
            definitions: Vec::new(),
        };
        let entry = reader.resolve(entry).unwrap();
        assert_eq!(
            entry.definitions,
            vec![
                "(verb 1) stretch out over a distance; \"the road runs along the river\"",
                "(verb 2) move fast by using one's feet",
            ]
        );
    }

    #[test]
    fn test_bad_offsets_are_corrupt() {
        let (_dir, mut reader) = open_fixture();
        let eof = DATA_VERB.len() as u64;
        for offset in [eof, eof + 100, eof - 4] {
            let err = reader.read_gloss(offset).unwrap_err();
            assert!(err.is_corrupt_data(), "offset {} gave {}", offset, err);
            assert!(err.to_string().contains("data.verb"), "got {}", err);
        }
    }

    #[test]
    fn test_missing_data_file() {
        let dir = TempDir::new().unwrap();
        let err = DataReader::open(dir.path(), Category::Noun, encoding_rs::UTF_8).err().unwrap();
        assert!(err.is_resource_unavailable());
    }
}
