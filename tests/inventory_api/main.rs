//! Inventory API Test Suite
//!
//! End-to-end tests through the `Inventory` facade, run against both item
//! backends and both media.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test inventory_api
//!
//! # Persistence tests only
//! cargo test --test inventory_api persistence::
//! ```

pub use std::path::Path;
pub use std::sync::Arc;

pub use chrono::NaiveDate;
pub use stockroom::prelude::*;
pub use stockroom::{
    Field, KeyValueMedium, MemoryMedium, SharedMedium, StartupSource, CONFIG_FILE, SQLITE_FILE,
};

// Test modules
pub mod lifecycle;
pub mod persistence;
pub mod reconcile;
pub mod views;

// =============================================================================
// SHARED TEST UTILITIES
// =============================================================================

/// Both item backends
pub const BACKENDS: [BackendKind; 2] = [BackendKind::Json, BackendKind::Sqlite];

/// Ephemeral, seeded inventory on `backend`
pub fn ephemeral(backend: BackendKind) -> Inventory {
    Inventory::builder()
        .ephemeral()
        .backend(backend)
        .open()
        .expect("Failed to open ephemeral inventory")
}

/// Inventory in `dir` on `backend`
pub fn on_disk(dir: &Path, backend: BackendKind) -> Inventory {
    Inventory::builder()
        .path(dir)
        .backend(backend)
        .open()
        .expect("Failed to open inventory")
}

/// Inventory over a caller-held memory medium
pub fn over_medium(medium: SharedMedium) -> Inventory {
    Inventory::builder()
        .medium(medium)
        .open()
        .expect("Failed to open inventory")
}

/// Fresh shared memory medium
pub fn memory_medium() -> SharedMedium {
    Arc::new(MemoryMedium::new())
}

/// Form input with sensible defaults
pub fn draft(name: &str, quantity: &str, unit_price: &str) -> ItemDraft {
    ItemDraft::new(name, "Supplies", quantity, unit_price, "In Stock")
}

/// Fixed date for deterministic adds
pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// Ids of `items` in order
pub fn ids(items: &[InventoryItem]) -> Vec<String> {
    items.iter().map(|i| i.id.to_string()).collect()
}
