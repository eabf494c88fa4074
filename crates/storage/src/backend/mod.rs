//! Persistence strategies for the item collection
//!
//! The store keeps its authoritative collection in memory and hands the full
//! collection to an [`ItemBackend`] after every mutation. Which backend is
//! used is decided once, when the store is composed.
//!
//! | Backend | Layout | Notes |
//! |---------|--------|-------|
//! | [`JsonItemBackend`] | JSON array under [`keys::ITEMS`](crate::keys::ITEMS) | Same medium as the counter |
//! | [`SqliteItemBackend`] | `inventory` table | File or in-memory SQLite database |

mod json;
mod sqlite;

pub use json::JsonItemBackend;
pub use sqlite::SqliteItemBackend;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use stockroom_core::InventoryItem;

/// Which persistence strategy to compose the store with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Flat JSON collection in the key-value medium
    #[default]
    Json,
    /// Relational table in an embedded SQLite database
    Sqlite,
}

impl BackendKind {
    /// Human-readable description of the backend.
    pub fn description(&self) -> &'static str {
        match self {
            BackendKind::Json => "JSON collection in key-value medium",
            BackendKind::Sqlite => "SQLite inventory table",
        }
    }

    /// Lowercase name as used in configuration files and CLI flags.
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::Json => "json",
            BackendKind::Sqlite => "sqlite",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackendKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(BackendKind::Json),
            "sqlite" | "sql" => Ok(BackendKind::Sqlite),
            other => Err(format!("unknown backend '{}' (expected json or sqlite)", other)),
        }
    }
}

/// Durable home of the item collection.
pub trait ItemBackend: Send {
    /// Which strategy this is
    fn kind(&self) -> BackendKind;

    /// Read the full collection in storage order
    ///
    /// Returns an empty collection when nothing has been stored yet and
    /// [`StorageError::Corrupt`](crate::StorageError::Corrupt) when stored
    /// data cannot be decoded.
    fn load(&mut self) -> Result<Vec<InventoryItem>>;

    /// Replace the stored collection with `items`. Durable once this returns `Ok`.
    fn save(&mut self, items: &[InventoryItem]) -> Result<()>;
}
