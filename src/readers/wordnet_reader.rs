//! WordNet database reader for high-level lookups.
//!
//! This module provides the main API for reading a WordNet-style lexical
//! database. It handles:
//! - Running a lookup against every category concurrently
//! - Assembling definitions in fixed category order
//! - Isolating per-category failures from the rest of the lookup
//! - Listing every word of the database
//!
//! # Examples
//!
//! ```no_run
//! use wndict::WordNetReader;
//!
//! # fn main() -> wndict::Result<()> {
//! let reader = WordNetReader::from_path("/usr/share/wordnet/dict")?;
//! for definition in reader.search_all("run")? {
//!     println!("{}", definition);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Concurrency
//!
//! Every aggregate call spawns one scoped worker per category, all before
//! any is joined. Each worker opens and releases its own files. Results are
//! collected in [`Category::ALL`] order, whatever order the workers finish in.

use std::path::{Path, PathBuf};
use std::thread;

use encoding_rs::Encoding;
use indexmap::IndexMap;
use log::*;
use url::Url;

use super::data_reader::DataReader;
use super::index_reader::{read_words, IndexReader};
use crate::config::LookupConfig;
use crate::storage::{Category, Entry};
use crate::utils::io_utils::{file_url_to_path, get_encoding_object_by_label};
use crate::utils::key::normalize_query;
use crate::{Result, WnError};

/// What one category contributed to a lookup.
#[derive(Debug)]
pub enum CategoryOutcome {
    /// The word was found and its definitions resolved
    Found(Entry),
    /// The word isn't in this category
    NotFound,
    /// The category's files are missing or corrupt
    Failed(WnError),
}

/// Per-category outcomes of one lookup, in category order.
#[derive(Debug)]
pub struct LookupReport {
    /// The normalized query
    pub word: String,
    pub outcomes: IndexMap<Category, CategoryOutcome>,
}

impl LookupReport {
    /// Resolved entries in category order.
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.outcomes.values().filter_map(|outcome| match outcome {
            CategoryOutcome::Found(entry) => Some(entry),
            _ => None,
        })
    }

    /// Definitions of every found entry, concatenated in category order.
    pub fn definitions(&self) -> Vec<String> {
        self.entries().flat_map(|entry| entry.definitions.iter().cloned()).collect()
    }

    /// Categories that failed, with their errors.
    pub fn failures(&self) -> impl Iterator<Item = (Category, &WnError)> {
        self.outcomes.iter().filter_map(|(category, outcome)| match outcome {
            CategoryOutcome::Failed(e) => Some((*category, e)),
            _ => None,
        })
    }

    /// Merges the report into its definitions.
    ///
    /// # Errors
    ///
    /// Returns `AllCategoriesFailed` only if every category failed; isolated
    /// failures are logged and dropped.
    pub fn into_definitions(self) -> Result<Vec<String>> {
        merge_outcomes(self.outcomes.into_iter().map(|(category, outcome)| {
            let result = match outcome {
                CategoryOutcome::Found(entry) => Ok(entry.definitions),
                CategoryOutcome::NotFound => Ok(Vec::new()),
                CategoryOutcome::Failed(e) => Err(e),
            };
            (category, result)
        }))
    }
}

/// High-level reader over a database directory.
///
/// The reader holds only immutable configuration; every call opens the
/// files it needs and closes them before returning.
#[derive(Debug, Clone)]
pub struct WordNetReader {
    config: LookupConfig,
    encoding_obj: &'static Encoding,
}

impl WordNetReader {
    /// Creates a reader from a configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the configured encoding is unknown or
    /// not ASCII-compatible; records are addressed by byte offset and end at
    /// a `\n` byte. The database directory isn't checked here; missing files
    /// are reported per category by each lookup.
    pub fn from_config(config: LookupConfig) -> Result<Self> {
        let encoding_obj = get_encoding_object_by_label(&config.encoding)?;
        if !encoding_obj.is_ascii_compatible() {
            return Err(WnError::invalid_parameter(format!(
                "Encoding {} is not ASCII-compatible",
                encoding_obj.name()
            )));
        }
        Ok(Self { config, encoding_obj })
    }

    pub fn from_path<P: Into<PathBuf>>(dict_path: P) -> Result<Self> {
        Self::from_config(LookupConfig::new(dict_path))
    }

    /// Opens a database directory given as a `file://` URL.
    pub fn from_url(url: &Url) -> Result<Self> {
        Self::from_path(file_url_to_path(url)?)
    }

    pub fn dict_path(&self) -> &Path {
        &self.config.dict_path
    }

    pub fn config(&self) -> &LookupConfig {
        &self.config
    }

    /// Loads one category's index for repeated lookups.
    pub fn index(&self, category: Category) -> Result<IndexReader> {
        IndexReader::open(self.dict_path(), category, self.encoding_obj)
    }

    /// Looks `query` up in a single category and resolves its definitions.
    pub fn lookup_in_category(&self, query: &str, category: Category) -> Result<Option<Entry>> {
        let Some(entry) = self.index(category)?.lookup(query)? else {
            return Ok(None);
        };
        let mut data_reader = DataReader::open(self.dict_path(), entry.category, self.encoding_obj)?;
        Ok(Some(data_reader.resolve(entry)?))
    }

    /// Word keys of one category's index file, in file order.
    pub fn words_in_category(&self, category: Category) -> Result<Vec<String>> {
        read_words(self.dict_path(), category, self.encoding_obj)
    }

    /// Looks `query` up in every category concurrently and reports each
    /// category's outcome.
    pub fn search_report(&self, query: &str) -> LookupReport {
        let outcomes = self
            .fan_out(|category| self.lookup_in_category(query, category))
            .into_iter()
            .map(|(category, result)| {
                let outcome = match result {
                    Ok(Some(entry)) => CategoryOutcome::Found(entry),
                    Ok(None) => CategoryOutcome::NotFound,
                    Err(e) => CategoryOutcome::Failed(e),
                };
                (category, outcome)
            })
            .collect();
        LookupReport { word: normalize_query(query), outcomes }
    }

    /// Looks `query` up in every category and returns all definitions,
    /// noun first, then adverb, verb and adjective.
    ///
    /// A word found nowhere yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns `AllCategoriesFailed` if every category failed. Otherwise
    /// failed categories are logged and contribute nothing.
    pub fn search_all(&self, query: &str) -> Result<Vec<String>> {
        let report = self.search_report(query);
        let definitions = report.into_definitions()?;
        info!("{:?}: {} definitions", query, definitions.len());
        Ok(definitions)
    }

    /// Lists every word of every category, categories in enumeration order.
    ///
    /// # Errors
    ///
    /// Same policy as [`WordNetReader::search_all`].
    pub fn all_words(&self) -> Result<Vec<String>> {
        let words = merge_outcomes(self.fan_out(|category| self.words_in_category(category)))?;
        info!("{} words in {}", words.len(), self.dict_path().display());
        Ok(words)
    }

    /// Runs `task` once per category on its own scoped thread and gathers the
    /// results in category order. A panicking task becomes that category's
    /// error.
    fn fan_out<T, F>(&self, task: F) -> IndexMap<Category, Result<T>>
    where
        T: Send,
        F: Fn(Category) -> Result<T> + Sync,
    {
        thread::scope(|s| {
            let handles: Vec<_> = Category::ALL
                .into_iter()
                .map(|category| {
                    let task = &task;
                    (category, s.spawn(move || task(category)))
                })
                .collect();

            handles
                .into_iter()
                .map(|(category, handle)| {
                    let result = handle
                        .join()
                        .unwrap_or_else(|_| Err(WnError::general_error(format!("{} worker panicked", category))));
                    (category, result)
                })
                .collect()
        })
    }
}

/// Concatenates successful per-category results in iteration order.
///
/// Fails only when there was at least one category and every one of them
/// failed.
fn merge_outcomes<T, I>(outcomes: I) -> Result<Vec<T>>
where
    I: IntoIterator<Item = (Category, Result<Vec<T>>)>,
{
    let mut merged = Vec::new();
    let mut failures = Vec::new();
    let mut succeeded = false;

    for (category, result) in outcomes {
        match result {
            Ok(items) => {
                succeeded = true;
                merged.extend(items);
            }
            Err(e) => {
                warn!("{} skipped: {}", category, e);
                failures.push(format!("{}: {}", category, e));
            }
        }
    }

    if !succeeded && !failures.is_empty() {
        return Err(WnError::all_categories_failed(failures.join("; ")));
    }
    Ok(merged)
}
