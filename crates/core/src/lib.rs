//! Core types for the stockroom inventory store
//!
//! This crate defines the data model shared by every other crate:
//! - [`ItemId`]: Human-readable sequential item code (`ABC-0001`)
//! - [`InventoryItem`]: The single persisted entity
//! - [`ItemStatus`]: Caller-supplied stock status
//! - [`NewItem`]: A validated item that has not been assigned an id yet
//! - [`seed`]: The fixed starter data set

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod item;
pub mod seed;
pub mod types;

pub use error::{CoreError, Result};
pub use item::{name_key, InventoryItem, NewItem, DATE_FORMAT};
pub use seed::{seed_items, NEXT_SEQUENCE_AFTER_SEED};
pub use types::{ItemId, ItemStatus, DEFAULT_ID_PREFIX};
