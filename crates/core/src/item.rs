//! The inventory record
//!
//! [`InventoryItem`] is the only persisted entity. Its `total_value` is always
//! `quantity * unit_price`: the constructors compute it and the only in-place
//! mutation ([`InventoryItem::set_quantity`]) recomputes it.

use crate::error::{CoreError, Result};
use crate::types::{ItemId, ItemStatus};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date format used for `date_added`. Lexicographic order equals chronological order.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A validated item waiting for an id
///
/// Produced by form validation; turned into an [`InventoryItem`] once the
/// allocator has issued an id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    /// Trimmed, non-empty name
    pub name: String,
    /// Non-empty category
    pub category: String,
    /// Non-negative quantity
    pub quantity: f64,
    /// Non-negative unit price
    pub unit_price: f64,
    /// Caller-chosen status
    pub status: ItemStatus,
}

impl NewItem {
    /// Attach an id and the date the item was added
    pub fn into_item(self, id: ItemId, date_added: NaiveDate) -> InventoryItem {
        InventoryItem::new(
            id,
            self.name,
            self.category,
            self.quantity,
            self.unit_price,
            date_added.format(DATE_FORMAT).to_string(),
            self.status,
        )
    }
}

/// A stock item
///
/// Serialized with camelCase keys (`unitPrice`, `totalValue`, `dateAdded`) so the
/// persisted collection matches the layout other tools already read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    /// Immutable item code
    pub id: ItemId,
    /// Display name, unique case-insensitively
    pub name: String,
    /// Category label
    pub category: String,
    /// Units on hand (may be fractional)
    pub quantity: f64,
    /// Price per unit
    pub unit_price: f64,
    /// `quantity * unit_price`
    pub total_value: f64,
    /// `YYYY-MM-DD`
    pub date_added: String,
    /// Stock status as supplied by the caller
    pub status: ItemStatus,
}

impl InventoryItem {
    /// Create an item, computing its total value
    ///
    /// # Examples
    ///
    /// ```
    /// use stockroom_core::{InventoryItem, ItemId, ItemStatus};
    ///
    /// let item = InventoryItem::new(
    ///     ItemId::new("ABC", 1),
    ///     "Pallet Wrap Film",
    ///     "Supplies",
    ///     8.0,
    ///     120.0,
    ///     "2025-12-01",
    ///     ItemStatus::LowStock,
    /// );
    /// assert_eq!(item.total_value, 960.0);
    /// ```
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        category: impl Into<String>,
        quantity: f64,
        unit_price: f64,
        date_added: impl Into<String>,
        status: ItemStatus,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            quantity,
            unit_price,
            total_value: quantity * unit_price,
            date_added: date_added.into(),
            status,
        }
    }

    /// Replace the quantity and recompute the total value from this item's own unit price
    pub fn set_quantity(&mut self, quantity: f64) {
        self.quantity = quantity;
        self.total_value = quantity * self.unit_price;
    }

    /// Lowercased name used for case-insensitive comparisons
    pub fn name_key(&self) -> String {
        name_key(&self.name)
    }

    /// Whether the stored total still equals `quantity * unit_price`
    pub fn total_is_consistent(&self) -> bool {
        self.total_value == self.quantity * self.unit_price
    }

    /// Parse `date_added` as a calendar date
    pub fn added_on(&self) -> Result<NaiveDate> {
        NaiveDate::parse_from_str(&self.date_added, DATE_FORMAT)
            .map_err(|_| CoreError::InvalidDate(self.date_added.clone()))
    }
}

/// Normalize a name for case-insensitive matching (trimmed, lowercased)
pub fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}
