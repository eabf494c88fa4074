//! Identifier and status types
//!
//! - [`ItemId`]: `PREFIX-NNNN` item code issued by the allocator
//! - [`ItemStatus`]: the three stock states an item can be tagged with

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Prefix used for item codes when none is configured.
pub const DEFAULT_ID_PREFIX: &str = "ABC";

/// Human-readable item code, e.g. `ABC-0007`
///
/// Ids are issued by the allocator from a monotonically increasing counter and
/// never change after creation. The numeric part is zero-padded to four digits;
/// counters above 9999 simply grow wider.
///
/// Persisted ids are deserialized verbatim so that imported data with
/// non-conforming codes still loads.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Build an id from a prefix and a counter value
    ///
    /// # Examples
    ///
    /// ```
    /// use stockroom_core::ItemId;
    ///
    /// let id = ItemId::new("ABC", 6);
    /// assert_eq!(id.as_str(), "ABC-0006");
    /// ```
    pub fn new(prefix: &str, sequence: u32) -> Self {
        ItemId(format!("{}-{:04}", prefix, sequence))
    }

    /// Borrow the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The prefix part (everything before the last `-`)
    pub fn prefix(&self) -> Option<&str> {
        self.0.rsplit_once('-').map(|(prefix, _)| prefix)
    }

    /// The numeric part, if the id is well-formed
    ///
    /// # Examples
    ///
    /// ```
    /// use stockroom_core::ItemId;
    ///
    /// assert_eq!(ItemId::new("ABC", 42).sequence(), Some(42));
    /// ```
    pub fn sequence(&self) -> Option<u32> {
        let (_, digits) = self.0.rsplit_once('-')?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.parse().ok()
    }

    /// Consume the id and return the inner string
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ItemId {
    type Err = CoreError;

    /// Parse a strictly formatted id (`PREFIX-` followed by at least four digits).
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (prefix, digits) = s
            .rsplit_once('-')
            .ok_or_else(|| CoreError::InvalidId(s.to_string()))?;
        if prefix.is_empty() || digits.len() < 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CoreError::InvalidId(s.to_string()));
        }
        Ok(ItemId(s.to_string()))
    }
}

impl From<String> for ItemId {
    /// Wrap a stored code verbatim, without format checks.
    fn from(raw: String) -> Self {
        ItemId(raw)
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Stock status of an item
///
/// Supplied by whoever creates the item; it is never recomputed from the
/// quantity, so a merged record can carry a status that no longer matches
/// its stock level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemStatus {
    /// Available
    #[default]
    #[serde(rename = "In Stock")]
    InStock,
    /// Running low
    #[serde(rename = "Low Stock")]
    LowStock,
    /// None left
    #[serde(rename = "Out of Stock")]
    OutOfStock,
}

impl ItemStatus {
    /// Every status, in display order
    pub const ALL: [ItemStatus; 3] = [
        ItemStatus::InStock,
        ItemStatus::LowStock,
        ItemStatus::OutOfStock,
    ];

    /// The persisted/display label
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::InStock => "In Stock",
            ItemStatus::LowStock => "Low Stock",
            ItemStatus::OutOfStock => "Out of Stock",
        }
    }

    /// True for statuses that count towards the low-stock KPI
    pub fn needs_attention(&self) -> bool {
        matches!(self, ItemStatus::LowStock | ItemStatus::OutOfStock)
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemStatus {
    type Err = CoreError;

    /// Accepts the display label in any case, with spaces, dashes or underscores
    /// (`"Low Stock"`, `"low-stock"`, `"OUT_OF_STOCK"`).
    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| if c == '-' || c == '_' { ' ' } else { c })
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "in stock" => Ok(ItemStatus::InStock),
            "low stock" => Ok(ItemStatus::LowStock),
            "out of stock" => Ok(ItemStatus::OutOfStock),
            _ => Err(CoreError::UnknownStatus(s.to_string())),
        }
    }
}
