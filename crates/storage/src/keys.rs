//! Fixed key names in the key-value medium.

/// Serialized item collection (JSON backend).
pub const ITEMS: &str = "inventory";

/// Allocator counter, stored as decimal text.
pub const NEXT_ID: &str = "next_id";

/// Older flat-array collection, migrated once and then removed.
pub const LEGACY_ITEMS: &str = "legacy_inventory";
