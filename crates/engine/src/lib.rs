//! Inventory engine
//!
//! The stateful core of stockroom:
//! - [`IdAllocator`]: issues `PREFIX-NNNN` codes from a persisted counter
//! - [`ItemStore`]: authoritative in-memory collection, persisted through an
//!   [`ItemBackend`](stockroom_storage::ItemBackend) after every mutation
//! - [`Reconciler`]: one-shot startup pass merging case-insensitive name duplicates
//! - [`bootstrap`]: load, migrate legacy data or seed, then reconcile
//! - [`Validator`]: form-style validation of new items
//! - [`EngineConfig`]: TOML-loadable settings
//!
//! Everything here is single-threaded and synchronous: mutators take
//! `&mut self` and run to completion before returning.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod allocator;
pub mod bootstrap;
pub mod config;
pub mod error;
pub mod reconcile;
pub mod store;
pub mod validate;

pub use allocator::IdAllocator;
pub use bootstrap::{startup, StartupReport, StartupSource};
pub use config::EngineConfig;
pub use error::{EngineError, Result};
pub use reconcile::{MergeSummary, Reconciler};
pub use store::ItemStore;
pub use validate::{Field, FieldError, ItemDraft, ValidationErrors, Validator};
