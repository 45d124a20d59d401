// Data model for the lexical database
//
// This module provides the part-of-speech categories with their fixed
// file-name mapping, and the entries produced by lookups.

pub mod category;
pub mod entry;

pub use category::Category;
pub use entry::{format_definition, Entry};
