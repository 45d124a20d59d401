//! Reader configuration.
//!
//! [`LookupConfig`] names the database directory and the text encoding of its
//! files. It can be built in code or loaded from JSON:
//!
//! ```
//! use wndict::LookupConfig;
//!
//! # fn main() -> wndict::Result<()> {
//! let config = LookupConfig::from_json_str(r#"{ "dict_path": "/usr/share/wordnet" }"#)?;
//! assert_eq!(config.dict_path.to_str(), Some("/usr/share/wordnet"));
//! assert_eq!(config.encoding, "utf-8");
//! # Ok(())
//! # }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::Result;

/// Database directory used when none is given.
pub const DEFAULT_DICT_PATH: &str = "./dict";

/// Encoding label used when none is given.
pub const DEFAULT_ENCODING: &str = "utf-8";

/// Configuration for opening a lexical database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    /// Directory holding the `index.*` and `data.*` files
    pub dict_path: PathBuf,
    /// Encoding label of the database files (e.g. "utf-8", "latin1")
    pub encoding: String,
}

impl Default for LookupConfig {
    fn default() -> Self {
        LookupConfig {
            dict_path: PathBuf::from(DEFAULT_DICT_PATH),
            encoding: DEFAULT_ENCODING.to_string(),
        }
    }
}

impl LookupConfig {
    pub fn new<P: Into<PathBuf>>(dict_path: P) -> Self {
        LookupConfig {
            dict_path: dict_path.into(),
            ..Default::default()
        }
    }

    /// Parses a configuration from JSON; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}
