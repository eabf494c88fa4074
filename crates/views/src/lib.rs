//! Derived views over the inventory
//!
//! Pure functions of a snapshot (`&[InventoryItem]`). Nothing here keeps
//! state or touches storage; callers recompute after every mutation.
//!
//! - [`Kpis`]: headline counters
//! - [`recent_activity`]: newest items first
//! - [`ChartData`]: per-item quantity bars with stock tiers
//! - [`ItemFilter`] / [`search_items`]: the inventory table and dashboard search
//! - [`format_currency`]: dollar formatting used by every view

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod chart;
pub mod currency;
pub mod filter;
pub mod kpi;
pub mod recent;

pub use chart::{ChartBar, ChartData, StockTier};
pub use currency::format_currency;
pub use filter::{filter_items, search_items, ItemFilter};
pub use kpi::Kpis;
pub use recent::recent_activity;
