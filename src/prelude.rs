//! Convenient imports for stockroom.
//!
//! ```ignore
//! use stockroom::prelude::*;
//!
//! let mut inv = Inventory::ephemeral()?;
//! inv.add_item(&ItemDraft::new("Twine", "Supplies", "10", "1.25", ""))?;
//! ```

// Main entry point
pub use crate::inventory::{Dashboard, Inventory, InventoryBuilder};

// Error handling
pub use crate::error::{Error, Result};

// Data model
pub use stockroom_core::{InventoryItem, ItemId, ItemStatus};

// Input and configuration
pub use stockroom_engine::{EngineConfig, ItemDraft, MergeSummary};
pub use stockroom_storage::BackendKind;

// Views
pub use stockroom_views::{format_currency, ChartData, ItemFilter, Kpis, StockTier};
