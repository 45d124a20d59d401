// Utility functions and helpers
//
// This module provides the pure lookup helpers (query normalization, key
// extraction, binary search) and the file I/O helpers they are fed by.

pub mod io_utils;
pub mod key;
pub mod search;

pub use io_utils::{
    decode_bytes_to_string, file_url_to_path, get_encoding_object_by_label, open_resource,
    read_line_at, read_lines,
};
pub use key::{extract_key, is_header_line, normalize_query, try_extract_key, WORD_JOINER};
pub use search::{binary_search, SortedLines};
