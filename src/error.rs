//! Error types and result type for the wndict crate.
//!
//! This module defines all error variants that can occur when reading a
//! WordNet-style lexical database. It uses the `snafu` library for ergonomic
//! error handling with automatic backtrace capture.
//!
//! A word that is simply absent from the database is *not* an error: lookups
//! report it as `None` or as an empty sequence. The variants below are reserved
//! for conditions the caller has to be told about.
//!
//! # Examples
//!
//! ```
//! use wndict::{Result, WnError};
//!
//! fn read_record() -> Result<String> {
//!     Err(WnError::corrupt_data("data.noun: offset 00001740 is past end of file"))
//! }
//!
//! match read_record() {
//!     Ok(data) => println!("Success: {}", data),
//!     Err(e) => assert!(e.is_corrupt_data()),
//! }
//! ```
//!
//! # Error Variants
//!
//! - [`WnError::Io`]: other I/O errors (e.g. reading a configuration file)
//! - [`WnError::ReadFailed`]: reading or seeking an open database file failed
//! - [`WnError::ResourceUnavailable`]: an index or data file cannot be opened
//! - [`WnError::CorruptData`]: a file violates the expected line structure
//! - [`WnError::InvalidParameter`]: invalid configuration or arguments
//! - [`WnError::ParserError`]: JSON, URL or UTF-8 parsing errors
//! - [`WnError::AllCategoriesFailed`]: every part-of-speech task failed

use std::io;
use std::path::PathBuf;

use snafu::{Backtrace, Snafu};

// Re-export snafu for context providers
pub use snafu;

/// Main error type for the wndict crate.
///
/// All errors include automatic backtrace capture for debugging purposes.
/// Use the helper methods on `WnError` for convenient error construction.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum WnError {
    /// I/O error outside the database files, e.g. reading a configuration file.
    #[snafu(display("IO error: {source}"))]
    Io {
        source: io::Error,
        backtrace: Backtrace,
    },

    /// Reading or seeking an open file failed.
    #[snafu(display("Read error: {context}: {source}"))]
    ReadFailed {
        context: String,
        source: io::Error,
        backtrace: Backtrace,
    },

    /// An index or data file could not be opened.
    #[snafu(display("Resource unavailable: {}: {source}", path.display()))]
    ResourceUnavailable {
        path: PathBuf,
        source: io::Error,
        backtrace: Backtrace,
    },

    /// A database file doesn't match the expected line structure.
    #[snafu(display("Corrupt data: {message}"))]
    CorruptData {
        message: String,
        backtrace: Backtrace,
    },

    /// Function was called with invalid parameters.
    #[snafu(display("Invalid parameter: {message}"))]
    InvalidParameter {
        message: String,
        backtrace: Backtrace,
    },

    /// Error parsing JSON, URL or other structured input.
    #[snafu(display("Parser error: {source}"))]
    ParserError {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
        backtrace: Backtrace,
    },

    /// Every category task of an aggregate call failed.
    #[snafu(display("All categories failed: {summary}"))]
    AllCategoriesFailed {
        summary: String,
        backtrace: Backtrace,
    },

    /// General error that doesn't fit other categories.
    #[snafu(display("General error: {message}"))]
    General {
        message: String,
        backtrace: Backtrace,
    },
}

impl From<io::Error> for WnError {
    fn from(source: io::Error) -> Self {
        Self::Io { source, backtrace: Backtrace::capture() }
    }
}

impl From<serde_json::Error> for WnError {
    fn from(source: serde_json::Error) -> Self {
        Self::ParserError { source: Box::new(source), backtrace: Backtrace::capture() }
    }
}

impl From<url::ParseError> for WnError {
    fn from(source: url::ParseError) -> Self {
        Self::ParserError { source: Box::new(source), backtrace: Backtrace::capture() }
    }
}

impl From<std::str::Utf8Error> for WnError {
    fn from(source: std::str::Utf8Error) -> Self {
        Self::ParserError { source: Box::new(source), backtrace: Backtrace::capture() }
    }
}

/// Helper methods for creating errors without context providers.
impl WnError {
    /// Creates a `CorruptData` error with the given message.
    pub fn corrupt_data<S: Into<String>>(message: S) -> Self {
        Self::CorruptData {
            message: message.into(),
            backtrace: Backtrace::capture(),
        }
    }

    /// Creates a `ResourceUnavailable` error for a file that failed to open.
    pub fn resource_unavailable<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        Self::ResourceUnavailable {
            path: path.into(),
            source,
            backtrace: Backtrace::capture(),
        }
    }

    /// Creates a `ReadFailed` error naming the file or offset being read.
    pub fn read_failed<S: Into<String>>(context: S, source: io::Error) -> Self {
        Self::ReadFailed {
            context: context.into(),
            source,
            backtrace: Backtrace::capture(),
        }
    }

    /// Creates an `InvalidParameter` error with the given message.
    ///
    /// # Examples
    ///
    /// ```
    /// use wndict::WnError;
    ///
    /// let error = WnError::invalid_parameter("Unknown encoding: klingon");
    /// assert!(error.to_string().contains("klingon"));
    /// ```
    pub fn invalid_parameter<S: Into<String>>(message: S) -> Self {
        Self::InvalidParameter {
            message: message.into(),
            backtrace: Backtrace::capture(),
        }
    }

    /// Creates an `AllCategoriesFailed` error with the given summary.
    pub fn all_categories_failed<S: Into<String>>(summary: S) -> Self {
        Self::AllCategoriesFailed {
            summary: summary.into(),
            backtrace: Backtrace::capture(),
        }
    }

    /// Creates a `General` error with the given message.
    pub fn general_error<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
            backtrace: Backtrace::capture(),
        }
    }

    /// Prefixes a `CorruptData` message or `ReadFailed` context with the name
    /// of the file it came from. Other variants are returned unchanged.
    pub fn in_file(self, file_name: &str) -> Self {
        match self {
            WnError::CorruptData { message, backtrace } => WnError::CorruptData {
                message: format!("{}: {}", file_name, message),
                backtrace,
            },
            WnError::ReadFailed { context, source, backtrace } => WnError::ReadFailed {
                context: format!("{}: {}", file_name, context),
                source,
                backtrace,
            },
            other => other,
        }
    }

    /// Checks if this error is a `CorruptData` variant.
    pub fn is_corrupt_data(&self) -> bool {
        matches!(self, WnError::CorruptData { .. })
    }

    /// Checks if this error is a `ResourceUnavailable` variant.
    pub fn is_resource_unavailable(&self) -> bool {
        matches!(self, WnError::ResourceUnavailable { .. })
    }
}

/// A specialized `Result` type for wndict operations.
///
/// This is a convenience type alias that uses [`WnError`] as the error type.
pub type Result<T> = std::result::Result<T, WnError>;
