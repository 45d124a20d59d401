// Readers for the database files
//
// This module provides the per-category index and data readers, and the
// high-level reader that runs lookups across all categories.

pub mod data_reader;
pub mod index_reader;
pub mod wordnet_reader;

pub use data_reader::DataReader;
pub use index_reader::{read_words, IndexReader};
pub use wordnet_reader::{CategoryOutcome, LookupReport, WordNetReader};
