//! In-process medium with an optional byte quota.

use super::{validate_key, KeyValueMedium};
use crate::error::{Result, StorageError};
use parking_lot::RwLock;
use std::collections::HashMap;

/// Medium that keeps every key in memory
///
/// Nothing survives the process. An optional quota (total bytes of keys plus
/// values) makes writes fail the way a full browser storage area does, which
/// is how the store's persist-failure path is exercised.
#[derive(Debug, Default)]
pub struct MemoryMedium {
    entries: RwLock<HashMap<String, String>>,
    quota: Option<usize>,
}

impl MemoryMedium {
    /// Create an empty, unbounded medium
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty medium that rejects writes once `limit` bytes are in use
    pub fn with_quota(limit: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            quota: Some(limit),
        }
    }

    /// Number of keys currently stored
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Check if no keys are stored
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Bytes currently in use (keys plus values)
    pub fn used_bytes(&self) -> usize {
        self.entries
            .read()
            .iter()
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl KeyValueMedium for MemoryMedium {
    fn get(&self, key: &str) -> Result<Option<String>> {
        validate_key(key)?;
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        validate_key(key)?;
        let mut entries = self.entries.write();
        if let Some(limit) = self.quota {
            let others: usize = entries
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            let requested = others + key.len() + value.len();
            if requested > limit {
                return Err(StorageError::QuotaExceeded { limit, requested });
            }
        }
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        validate_key(key)?;
        self.entries.write().remove(key);
        Ok(())
    }

    fn describe(&self) -> String {
        match self.quota {
            Some(limit) => format!("memory (quota {} bytes)", limit),
            None => "memory".to_string(),
        }
    }
}
