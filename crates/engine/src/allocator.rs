//! Sequential item code allocation
//!
//! The counter lives in the key-value medium under
//! [`keys::NEXT_ID`](stockroom_storage::keys::NEXT_ID) as decimal text and
//! holds the sequence number the *next* call will hand out.
//!
//! Allocation is best-effort durable: if writing the advanced counter fails
//! the id is still returned, and after a restart the stale counter may hand
//! the same number out again.

use stockroom_core::ItemId;
use stockroom_storage::{keys, Result as StorageResult, SharedMedium};
use tracing::warn;

const FIRST_SEQUENCE: u32 = 1;

/// Issues strictly increasing `PREFIX-NNNN` codes.
pub struct IdAllocator {
    medium: SharedMedium,
    prefix: String,
}

impl IdAllocator {
    /// Allocator over `medium` producing codes with `prefix`
    pub fn new(medium: SharedMedium, prefix: impl Into<String>) -> Self {
        Self {
            medium,
            prefix: prefix.into(),
        }
    }

    /// Prefix of issued codes
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Sequence number the next call to [`next`](Self::next) will use
    ///
    /// An absent or unreadable counter reads as 1.
    pub fn peek(&self) -> u32 {
        match self.medium.get(keys::NEXT_ID) {
            Ok(Some(raw)) => raw.trim().parse().unwrap_or_else(|_| {
                warn!(value = %raw, "allocator counter unparseable, restarting at 1");
                FIRST_SEQUENCE
            }),
            Ok(None) => FIRST_SEQUENCE,
            Err(e) => {
                warn!(error = %e, "allocator counter unreadable, restarting at 1");
                FIRST_SEQUENCE
            }
        }
    }

    /// Issue the next code and advance the persisted counter
    pub fn next(&self) -> ItemId {
        let current = self.peek();
        let advanced = current.saturating_add(1);
        if let Err(e) = self.medium.set(keys::NEXT_ID, &advanced.to_string()) {
            warn!(error = %e, counter = advanced, "failed to persist allocator counter");
        }
        ItemId::new(&self.prefix, current)
    }

    /// Set the counter so the next code uses `next_sequence`
    pub fn reset_to(&self, next_sequence: u32) -> StorageResult<()> {
        self.medium.set(keys::NEXT_ID, &next_sequence.to_string())
    }

    /// Move the counter past `sequence` if it is not already beyond it
    ///
    /// Returns `true` when the counter was advanced.
    pub fn ensure_above(&self, sequence: u32) -> StorageResult<bool> {
        let wanted = sequence.saturating_add(1);
        if self.peek() >= wanted {
            return Ok(false);
        }
        self.reset_to(wanted)?;
        Ok(true)
    }
}
