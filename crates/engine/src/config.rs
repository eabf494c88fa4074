//! Engine configuration
//!
//! Loaded from TOML; every field is optional and falls back to its default.
//!
//! ```toml
//! id_prefix = "ABC"
//! backend = "sqlite"
//! seed_when_empty = true
//! categories = ["Equipment", "Supplies", "Raw Materials", "Finished Goods"]
//! recent_limit = 5
//! ```

use crate::error::{EngineError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use stockroom_core::DEFAULT_ID_PREFIX;
use stockroom_storage::BackendKind;

/// Default number of rows in the recent-activity view.
pub const DEFAULT_RECENT_LIMIT: usize = 5;

/// Settings for opening an inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Prefix for allocated item codes
    pub id_prefix: String,
    /// Where the item collection is persisted
    pub backend: BackendKind,
    /// Write the starter data set into an empty store with no legacy data
    pub seed_when_empty: bool,
    /// Allowed categories; empty means any non-empty category is accepted
    pub categories: Vec<String>,
    /// Rows shown by the recent-activity view
    pub recent_limit: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            id_prefix: DEFAULT_ID_PREFIX.to_string(),
            backend: BackendKind::default(),
            seed_when_empty: true,
            categories: Vec::new(),
            recent_limit: DEFAULT_RECENT_LIMIT,
        }
    }
}

impl EngineConfig {
    /// Parse a TOML document
    pub fn from_toml_str(source: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(source)
    }

    /// Read and parse a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| EngineError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::from_toml_str(&source).map_err(|e| EngineError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Canonical spelling of `category` if it is allowed
    ///
    /// Matching against the configured list ignores case; with no list
    /// configured the trimmed input is returned as-is.
    pub fn resolve_category(&self, category: &str) -> Option<String> {
        let category = category.trim();
        if category.is_empty() {
            return None;
        }
        if self.categories.is_empty() {
            return Some(category.to_string());
        }
        self.categories
            .iter()
            .find(|allowed| allowed.eq_ignore_ascii_case(category))
            .cloned()
    }
}
