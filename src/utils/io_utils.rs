//! I/O utility functions for the database files.
//!
//! This module provides helper functions for:
//! - Opening database files, reporting missing ones as `ResourceUnavailable`
//! - Resolving encoding labels and decoding raw lines
//! - Reading whole index files as lines
//! - Random-access reads of a single line at a byte offset
//! - File URL to path conversion

use std::fs::File;
use std::io::{BufRead, BufReader, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use encoding_rs::Encoding;
use log::debug;
use percent_encoding::percent_decode_str;
use url::Url;

use crate::{Result, WnError};

/// Gets an encoding object by its label string.
///
/// # Examples
///
/// ```
/// use wndict::utils::get_encoding_object_by_label;
///
/// assert_eq!(get_encoding_object_by_label("UTF-8").unwrap(), encoding_rs::UTF_8);
/// assert_eq!(get_encoding_object_by_label("latin1").unwrap(), encoding_rs::WINDOWS_1252);
/// assert!(get_encoding_object_by_label("klingon").is_err());
/// ```
pub fn get_encoding_object_by_label(label: &str) -> Result<&'static Encoding> {
    let label = label.trim().to_lowercase();
    Encoding::for_label(label.as_bytes())
        .ok_or_else(|| WnError::invalid_parameter(format!("Invalid encoding: {}", label)))
}

/// Decodes raw bytes into a string; malformed sequences are replaced.
pub fn decode_bytes_to_string(bytes: &[u8], encoding_obj: &'static Encoding) -> String {
    let (decoded, _, had_errors) = encoding_obj.decode(bytes);
    if had_errors {
        debug!("Decoding error with: {}", encoding_obj.name());
    }
    decoded.into_owned()
}

/// Opens a database file for buffered reading.
///
/// # Errors
///
/// Returns `ResourceUnavailable` naming `path` if the file cannot be opened.
pub fn open_resource<P: AsRef<Path>>(path: P) -> Result<BufReader<File>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| WnError::resource_unavailable(path, e))?;
    Ok(BufReader::new(file))
}

/// Reads a whole text file and returns its decoded lines, without line
/// terminators.
pub fn read_lines<P: AsRef<Path>>(path: P, encoding_obj: &'static Encoding) -> Result<Vec<String>> {
    let mut reader = open_resource(&path)?;
    let mut buffer = Vec::new();
    reader
        .read_to_end(&mut buffer)
        .map_err(|e| WnError::read_failed(path.as_ref().display().to_string(), e))?;
    let text = decode_bytes_to_string(&buffer, encoding_obj);
    Ok(text.lines().map(str::to_string).collect())
}

/// Seeks to `offset` and reads the line starting there.
///
/// Returns `None` when the offset is at or past end of file. Records are
/// split on a `\n` byte, so `encoding_obj` must be ASCII-compatible.
pub fn read_line_at<R: BufRead + Seek>(
    reader: &mut R,
    offset: u64,
    encoding_obj: &'static Encoding,
) -> Result<Option<String>> {
    let at_offset = |e: std::io::Error| WnError::read_failed(format!("offset {:08}", offset), e);
    reader.seek(SeekFrom::Start(offset)).map_err(at_offset)?;
    let mut buffer = Vec::new();
    if reader.read_until(b'\n', &mut buffer).map_err(at_offset)? == 0 {
        return Ok(None);
    }
    Ok(Some(decode_bytes_to_string(&buffer, encoding_obj)))
}

/// Converts a `file://` URL into a local path, decoding percent escapes.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use wndict::utils::file_url_to_path;
///
/// let url = Url::parse("file:///usr/share/word%20net/dict").unwrap();
/// assert_eq!(file_url_to_path(&url).unwrap().to_str(), Some("/usr/share/word net/dict"));
/// ```
pub fn file_url_to_path(url: &Url) -> Result<PathBuf> {
    if url.scheme() != "file" {
        return Err(WnError::invalid_parameter(format!(
            "Unsupported scheme: {}",
            url.scheme()
        )));
    }
    let decoded = percent_decode_str(url.path()).decode_utf8()?;
    Ok(PathBuf::from(fix_windows_path(&decoded)))
}

/// File URLs carry Windows drive paths as `/C:/...`; drop the leading slash.
fn fix_windows_path(path: &str) -> String {
    #[cfg(windows)]
    {
        let bytes = path.as_bytes();
        if bytes.len() > 3 && bytes[0] == b'/' && bytes[1].is_ascii_alphabetic() && bytes[2] == b':' {
            return path[1..].to_string();
        }
    }
    path.to_string()
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_read_line_at() {
        let data = b"00000000 first | one\n00000021 second | two\n";
        let mut cursor = Cursor::new(&data[..]);
        let cases = [
            (21, Some("00000021 second | two\n")),
            (0, Some("00000000 first | one\n")),
            (30, Some("second | two\n")),
            (data.len() as u64, None),
            (10_000, None),
        ];
        for (offset, expected) in cases {
            let line = read_line_at(&mut cursor, offset, encoding_rs::UTF_8).unwrap();
            assert_eq!(line.as_deref(), expected, "offset {}", offset);
        }
    }

    /// Fails every seek and read.
    struct BrokenReader;

    impl Read for BrokenReader {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("device gone"))
        }
    }

    impl BufRead for BrokenReader {
        fn fill_buf(&mut self) -> std::io::Result<&[u8]> {
            Err(std::io::Error::other("device gone"))
        }
        fn consume(&mut self, _amt: usize) {}
    }

    impl Seek for BrokenReader {
        fn seek(&mut self, _pos: SeekFrom) -> std::io::Result<u64> {
            Err(std::io::Error::other("device gone"))
        }
    }

    #[test]
    fn test_read_line_at_failure_names_offset() {
        let err = read_line_at(&mut BrokenReader, 1740, encoding_rs::UTF_8).unwrap_err();
        assert!(matches!(err, WnError::ReadFailed { .. }), "got {}", err);
        assert!(err.to_string().contains("offset 00001740"), "got {}", err);
    }

    #[test]
    fn test_read_lines_failure_names_path() {
        // a directory opens fine on unix but can't be read
        let dir = tempfile::TempDir::new().unwrap();
        let err = read_lines(dir.path(), encoding_rs::UTF_8).unwrap_err();
        if !err.is_resource_unavailable() {
            assert!(matches!(err, WnError::ReadFailed { .. }), "got {}", err);
            assert!(err.to_string().contains(&dir.path().display().to_string()), "got {}", err);
        }
    }

    #[test]
    fn test_utf16_label_is_not_ascii_compatible() {
        let encoding_obj = get_encoding_object_by_label("utf-16").unwrap();
        assert!(!encoding_obj.is_ascii_compatible());
    }

    #[test]
    fn test_decode_latin1() {
        let text = decode_bytes_to_string(b"caf\xe9", get_encoding_object_by_label("latin1").unwrap());
        assert_eq!(text, "café");
    }

    #[test]
    fn test_open_missing_file() {
        let err = open_resource("/nonexistent/wndict/index.noun").unwrap_err();
        assert!(err.is_resource_unavailable(), "got {}", err);
    }

    #[test]
    fn test_non_file_url_is_rejected() {
        let url = Url::parse("https://example.com/dict").unwrap();
        assert!(file_url_to_path(&url).is_err());
    }
}
