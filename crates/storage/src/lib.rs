//! Storage layer for stockroom
//!
//! This crate implements the durable side of the inventory store:
//! - [`KeyValueMedium`]: string key/value medium (`MemoryMedium`, `FileMedium`)
//! - [`ItemBackend`]: persistence strategy for the item collection
//!   (`JsonItemBackend` over a medium, `SqliteItemBackend` over a relational table)
//! - [`legacy`]: reader for the older flat-array format
//! - [`keys`]: the fixed key names
//!
//! The allocator counter and the legacy collection always live in the
//! key-value medium; only the item collection itself moves between backends.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod backend;
pub mod error;
pub mod keys;
pub mod legacy;
pub mod medium;

pub use backend::{BackendKind, ItemBackend, JsonItemBackend, SqliteItemBackend};
pub use error::{Result, StorageError};
pub use medium::{FileMedium, KeyValueMedium, MemoryMedium, SharedMedium};
