//! Reader for the older flat-array collection
//!
//! Earlier versions kept items as a plain JSON array under
//! [`keys::LEGACY_ITEMS`]. Any stored `totalValue` is ignored and recomputed
//! from quantity and unit price; a missing status defaults to `In Stock`.

use crate::error::{Result, StorageError};
use crate::keys;
use crate::medium::KeyValueMedium;
use serde::Deserialize;
use stockroom_core::{InventoryItem, ItemId, ItemStatus};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegacyItem {
    id: ItemId,
    name: String,
    category: String,
    quantity: f64,
    unit_price: f64,
    date_added: String,
    #[serde(default)]
    status: ItemStatus,
}

impl From<LegacyItem> for InventoryItem {
    fn from(old: LegacyItem) -> Self {
        InventoryItem::new(
            old.id,
            old.name,
            old.category,
            old.quantity,
            old.unit_price,
            old.date_added,
            old.status,
        )
    }
}

/// Read the legacy collection
///
/// Returns `Ok(None)` when the key is absent or blank, and
/// [`StorageError::Corrupt`] when it holds something other than an item array.
pub fn read_legacy(medium: &dyn KeyValueMedium) -> Result<Option<Vec<InventoryItem>>> {
    let Some(raw) = medium.get(keys::LEGACY_ITEMS)? else {
        return Ok(None);
    };
    if raw.trim().is_empty() {
        return Ok(None);
    }
    let entries: Vec<LegacyItem> =
        serde_json::from_str(&raw).map_err(|e| StorageError::Corrupt {
            key: keys::LEGACY_ITEMS.to_string(),
            reason: e.to_string(),
        })?;
    Ok(Some(entries.into_iter().map(InventoryItem::from).collect()))
}

/// Delete the legacy collection after it has been imported
pub fn clear_legacy(medium: &dyn KeyValueMedium) -> Result<()> {
    medium.remove(keys::LEGACY_ITEMS)
}
