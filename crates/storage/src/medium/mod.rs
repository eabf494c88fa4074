//! Key-value storage media
//!
//! A medium is a flat map from short string keys to string values, the same
//! shape as browser local storage. Two implementations are provided:
//!
//! | Medium | Survives restart | Use case |
//! |--------|------------------|----------|
//! | [`MemoryMedium`] | No | Tests, ephemeral stores, quota simulation |
//! | [`FileMedium`] | Yes | One file per key inside a data directory |
//!
//! Media are shared between the item backend and the id allocator through
//! [`SharedMedium`], so every method takes `&self`.

mod file;
mod memory;

pub use file::FileMedium;
pub use memory::MemoryMedium;

use crate::error::{Result, StorageError};
use std::sync::Arc;

/// Shared handle to a medium.
pub type SharedMedium = Arc<dyn KeyValueMedium>;

/// Durable string key/value storage.
pub trait KeyValueMedium: Send + Sync {
    /// Read a value. Returns `None` if the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one. Durable once this returns `Ok`.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a key. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;

    /// Short human-readable description for logs
    fn describe(&self) -> String;
}

/// Keys are used as file names by [`FileMedium`], so both media restrict them
/// to `[A-Za-z0-9_.-]` and forbid a leading dot.
pub(crate) fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}
