//! JSON collection stored under a single medium key.

use super::{BackendKind, ItemBackend};
use crate::error::{Result, StorageError};
use crate::keys;
use crate::medium::SharedMedium;
use stockroom_core::InventoryItem;

/// Stores the whole collection as one JSON array in a [`KeyValueMedium`](crate::KeyValueMedium).
pub struct JsonItemBackend {
    medium: SharedMedium,
    key: &'static str,
}

impl JsonItemBackend {
    /// Use `medium`, storing items under [`keys::ITEMS`]
    pub fn new(medium: SharedMedium) -> Self {
        Self {
            medium,
            key: keys::ITEMS,
        }
    }
}

impl ItemBackend for JsonItemBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Json
    }

    fn load(&mut self) -> Result<Vec<InventoryItem>> {
        let Some(raw) = self.medium.get(self.key)? else {
            return Ok(Vec::new());
        };
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&raw).map_err(|e| StorageError::Corrupt {
            key: self.key.to_string(),
            reason: e.to_string(),
        })
    }

    fn save(&mut self, items: &[InventoryItem]) -> Result<()> {
        let encoded = serde_json::to_string(items)?;
        self.medium.set(self.key, &encoded)
    }
}
