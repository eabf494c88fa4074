//! # Stockroom
//!
//! Embedded inventory store with sequential item codes, duplicate
//! reconciliation and derived dashboard views.
//!
//! ## Quick Start
//!
//! ```ignore
//! use stockroom::prelude::*;
//!
//! // Open (and on first use, seed) an inventory
//! let mut inv = Inventory::open("./stock")?;
//!
//! // Add an item; validation errors come back per field
//! let draft = ItemDraft::new("Stretch Hood", "Supplies", "4", "12.50", "In Stock");
//! let item = inv.add_item(&draft)?;
//!
//! // Views are recomputed from the current collection
//! let kpis = inv.kpis();
//! let low = inv.filter(&ItemFilter::new().status(ItemStatus::LowStock));
//!
//! inv.delete_item(item.id.as_str());
//! ```
//!
//! ## Layers
//!
//! - `stockroom-core`: [`InventoryItem`], [`ItemId`], [`ItemStatus`]
//! - `stockroom-storage`: key-value media and the JSON / SQLite item backends
//! - `stockroom-engine`: allocator, store, reconciler, startup, validation
//! - `stockroom-views`: KPIs, recent activity, chart data, filter and search

#![warn(missing_docs)]

mod error;
mod inventory;

pub mod prelude;

// Re-export main entry points
pub use error::{Error, Result};
pub use inventory::{Dashboard, Inventory, InventoryBuilder, CONFIG_FILE, SQLITE_FILE};

// Re-export the layers
pub use stockroom_core::{InventoryItem, ItemId, ItemStatus, NewItem};
pub use stockroom_engine::{
    EngineConfig, Field, FieldError, ItemDraft, MergeSummary, StartupReport, StartupSource,
    ValidationErrors,
};
pub use stockroom_storage::{BackendKind, KeyValueMedium, MemoryMedium, SharedMedium};
pub use stockroom_views::{format_currency, ChartBar, ChartData, ItemFilter, Kpis, StockTier};
