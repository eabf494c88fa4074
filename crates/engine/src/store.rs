//! The item store
//!
//! [`ItemStore`] owns the authoritative collection. It is composed with one
//! [`ItemBackend`] and writes the full collection through it after every
//! mutation. A failed write is logged and remembered ([`ItemStore::is_dirty`])
//! but never returned: for the rest of the session the in-memory collection
//! is the source of truth.
//!
//! ## Load behavior
//!
//! | Backend returns | Store starts with |
//! |-----------------|-------------------|
//! | items | those items, in storage order |
//! | nothing stored | empty collection |
//! | corrupt data | empty collection (logged) |
//! | I/O / engine error | error from [`ItemStore::open`] |

use stockroom_core::{name_key, InventoryItem};
use stockroom_storage::{BackendKind, ItemBackend, Result as StorageResult};
use tracing::{debug, warn};

/// Authoritative inventory collection with write-through persistence.
pub struct ItemStore {
    items: Vec<InventoryItem>,
    backend: Box<dyn ItemBackend>,
    dirty: bool,
}

impl ItemStore {
    /// Load the collection from `backend`
    pub fn open(backend: Box<dyn ItemBackend>) -> StorageResult<Self> {
        let mut store = Self {
            items: Vec::new(),
            backend,
            dirty: false,
        };
        store.reload()?;
        Ok(store)
    }

    /// Re-read the collection from the backend, replacing the in-memory copy
    ///
    /// Unreadable data is discarded and the store becomes empty.
    pub fn reload(&mut self) -> StorageResult<()> {
        self.items = match self.backend.load() {
            Ok(items) => items,
            Err(e) if e.is_corrupt() => {
                warn!(error = %e, backend = %self.backend.kind(), "discarding unreadable inventory");
                Vec::new()
            }
            Err(e) => return Err(e),
        };
        self.dirty = false;
        debug!(items = self.items.len(), backend = %self.backend.kind(), "inventory loaded");
        Ok(())
    }

    /// Append a fully formed item and persist
    ///
    /// The caller is responsible for validation and the duplicate-name check.
    pub fn insert(&mut self, item: InventoryItem) {
        debug!(id = %item.id, name = %item.name, "insert");
        self.items.push(item);
        self.persist();
    }

    /// Append several items and persist once
    pub fn insert_all(&mut self, items: impl IntoIterator<Item = InventoryItem>) {
        self.items.extend(items);
        self.persist();
    }

    /// Remove the item with `id`
    ///
    /// Returns `true` if it existed. Deleting an unknown id changes nothing
    /// and writes nothing.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id.as_str() != id);
        if self.items.len() == before {
            return false;
        }
        debug!(id, "delete");
        self.persist();
        true
    }

    /// First item whose name equals `name` ignoring case and surrounding whitespace
    pub fn find_by_name(&self, name: &str) -> Option<&InventoryItem> {
        let key = name_key(name);
        self.items.iter().find(|item| item.name_key() == key)
    }

    /// Item with the given id
    pub fn get(&self, id: &str) -> Option<&InventoryItem> {
        self.items.iter().find(|item| item.id.as_str() == id)
    }

    /// Snapshot copy of the collection in storage order
    pub fn all(&self) -> Vec<InventoryItem> {
        self.items.clone()
    }

    /// Borrowed view of the collection in storage order
    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the store holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True when the last persist attempt failed
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Backend this store writes through
    pub fn backend_kind(&self) -> BackendKind {
        self.backend.kind()
    }

    /// Retry persisting after an earlier failure
    ///
    /// Returns `true` once the collection is durable.
    pub fn flush(&mut self) -> bool {
        if self.dirty {
            self.persist()
        } else {
            true
        }
    }

    pub(crate) fn items_mut(&mut self) -> &mut Vec<InventoryItem> {
        &mut self.items
    }

    /// Write the full collection; failures are logged, not returned.
    pub(crate) fn persist(&mut self) -> bool {
        match self.backend.save(&self.items) {
            Ok(()) => {
                self.dirty = false;
                true
            }
            Err(e) => {
                warn!(
                    error = %e,
                    backend = %self.backend.kind(),
                    items = self.items.len(),
                    "inventory not persisted, continuing in memory"
                );
                self.dirty = true;
                false
            }
        }
    }
}
