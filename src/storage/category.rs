//! Part-of-speech categories and their file-name mapping.
//!
//! The lexical database is partitioned into one `index.<label>` /
//! `data.<label>` file pair per category. The set of categories, their
//! one-letter markers and the enumeration order used for aggregated results
//! are fixed here and never discovered at runtime.
//!
//! # Examples
//!
//! ```
//! use wndict::Category;
//!
//! let verb = Category::from_code('v').unwrap();
//! assert_eq!(verb.index_file_name(), "index.verb");
//! assert_eq!(verb.data_file_name(), "data.verb");
//! assert_eq!(Category::ALL[1], Category::Adverb);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Result, WnError};

/// A part-of-speech classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Noun,
    Adverb,
    Verb,
    Adjective,
}

impl Category {
    /// Every category, in the order aggregated results are reported.
    pub const ALL: [Category; 4] = [
        Category::Noun,
        Category::Adverb,
        Category::Verb,
        Category::Adjective,
    ];

    /// One-letter part-of-speech marker used inside index lines.
    pub fn code(self) -> char {
        match self {
            Category::Noun => 'n',
            Category::Adverb => 'r',
            Category::Verb => 'v',
            Category::Adjective => 'a',
        }
    }

    /// Label used both as file extension and in formatted definitions.
    pub fn label(self) -> &'static str {
        match self {
            Category::Noun => "noun",
            Category::Adverb => "adv",
            Category::Verb => "verb",
            Category::Adjective => "adj",
        }
    }

    pub fn from_code(code: char) -> Result<Self> {
        Category::ALL
            .into_iter()
            .find(|category| category.code() == code)
            .ok_or_else(|| WnError::invalid_parameter(format!("Unknown part-of-speech marker: {:?}", code)))
    }

    pub fn index_file_name(self) -> String {
        format!("index.{}", self.label())
    }

    pub fn data_file_name(self) -> String {
        format!("data.{}", self.label())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = WnError;

    /// Parses a file label (`noun`, `adv`, `verb`, `adj`).
    fn from_str(label: &str) -> Result<Self> {
        Category::ALL
            .into_iter()
            .find(|category| category.label() == label)
            .ok_or_else(|| WnError::invalid_parameter(format!("Unknown category: {}", label)))
    }
}
