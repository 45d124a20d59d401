//! # wndict - WordNet-style Lexical Database Reader
//!
//! This crate looks words up in a WordNet-style lexical database, a directory
//! holding one `index.<category>` / `data.<category>` file pair per part of
//! speech, and returns their glosses.
//!
//! ## Features
//!
//! - **Keyed binary search**: index lines are compared by their leading word key
//! - **Query normalization**: `"Ice Cream"` finds the stored `ice_cream`
//! - **Concurrent lookup**: every category is searched on its own worker
//! - **Deterministic output**: noun, adverb, verb, adjective, whatever finishes first
//! - **Failure isolation**: a missing or corrupt file only drops its own category
//! - **Word listing**: every key of every index file
//!
//! ## Quick Start
//!
//! ### Looking up a word
//!
//! ```no_run
//! use wndict::WordNetReader;
//!
//! # fn main() -> wndict::Result<()> {
//! let reader = WordNetReader::from_path("/usr/share/wordnet/dict")?;
//! for definition in reader.search_all("ice cream")? {
//!     // "(noun 1) frozen dessert containing cream and sugar and flavoring"
//!     println!("{}", definition);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ### Repeated lookups in one category
//!
//! ```no_run
//! use wndict::{Category, WordNetReader};
//!
//! # fn main() -> wndict::Result<()> {
//! let reader = WordNetReader::from_path("./dict")?;
//! let nouns = reader.index(Category::Noun)?;
//! for word in ["cat", "dog", "eel"] {
//!     if let Some(entry) = nouns.lookup(word)? {
//!         println!("{}: {} senses", entry.word, entry.sense_count());
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - **Storage**: [`storage`] for categories and lookup entries
//! - **Utilities**: [`utils`] for normalization, key extraction, search and file I/O
//! - **Readers**: [`readers`] for index, data and whole-database readers
//! - **Configuration**: [`config`] for the database location and encoding
//!
//! ## Error Handling
//!
//! All fallible operations return a [`Result<T>`] type, where errors are
//! represented by [`WnError`]. A word that isn't in the database is not an
//! error: it yields `None` or an empty list.

pub mod config;
pub mod error;
pub mod readers;
pub mod storage;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::LookupConfig;
pub use readers::{CategoryOutcome, DataReader, IndexReader, LookupReport, WordNetReader};
pub use storage::{Category, Entry};

// Re-export error types for convenience
pub use error::{snafu, Result, WnError};
