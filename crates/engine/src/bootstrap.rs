//! Startup sequence
//!
//! Runs once after the store has loaded:
//!
//! | Store after load | Legacy key | Result |
//! |------------------|------------|--------|
//! | non-empty | ignored | [`StartupSource::Existing`] |
//! | empty | item array | entries imported one by one, key removed, [`StartupSource::Migrated`] |
//! | empty | unparseable | warning, seed data, key left in place |
//! | empty | absent | seed data, or [`StartupSource::Empty`] if seeding is off |
//!
//! Seeding writes the five starter items and sets the counter to 6. After
//! that the [`Reconciler`] pass runs exactly once.

use crate::allocator::IdAllocator;
use crate::config::EngineConfig;
use crate::reconcile::{MergeSummary, Reconciler};
use crate::store::ItemStore;
use stockroom_core::{seed_items, InventoryItem, NEXT_SEQUENCE_AFTER_SEED};
use stockroom_storage::{legacy, KeyValueMedium};
use tracing::{info, warn};

/// Where the starting collection came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartupSource {
    /// Items were already stored
    Existing(usize),
    /// Items were imported from the legacy key
    Migrated(usize),
    /// The starter data set was written
    Seeded,
    /// Nothing stored and seeding is disabled
    Empty,
}

/// Outcome of [`startup`].
#[derive(Debug, Clone, PartialEq)]
pub struct StartupReport {
    /// Origin of the starting collection
    pub source: StartupSource,
    /// Groups merged by the reconciliation pass
    pub merged: Vec<MergeSummary>,
}

/// Migrate or seed an empty store, then reconcile duplicates
pub fn startup(
    store: &mut ItemStore,
    allocator: &IdAllocator,
    medium: &dyn KeyValueMedium,
    config: &EngineConfig,
) -> StartupReport {
    let source = if store.is_empty() {
        populate(store, allocator, medium, config)
    } else {
        StartupSource::Existing(store.len())
    };

    let merged = Reconciler::run(store);
    for summary in &merged {
        info!(%summary, "reconciled duplicates");
    }
    StartupReport { source, merged }
}

fn populate(
    store: &mut ItemStore,
    allocator: &IdAllocator,
    medium: &dyn KeyValueMedium,
    config: &EngineConfig,
) -> StartupSource {
    match legacy::read_legacy(medium) {
        Ok(Some(entries)) => return migrate(store, allocator, medium, entries),
        Ok(None) => {}
        Err(e) => warn!(error = %e, "legacy inventory unreadable, ignoring it"),
    }

    if !config.seed_when_empty {
        return StartupSource::Empty;
    }

    store.insert_all(seed_items(allocator.prefix()));
    if let Err(e) = allocator.reset_to(NEXT_SEQUENCE_AFTER_SEED) {
        warn!(error = %e, "failed to persist allocator counter after seeding");
    }
    info!(items = store.len(), "seeded starter inventory");
    StartupSource::Seeded
}

fn migrate(
    store: &mut ItemStore,
    allocator: &IdAllocator,
    medium: &dyn KeyValueMedium,
    entries: Vec<InventoryItem>,
) -> StartupSource {
    let count = entries.len();
    let highest = entries.iter().filter_map(|item| item.id.sequence()).max();

    for item in entries {
        store.insert(item);
    }
    if let Err(e) = legacy::clear_legacy(medium) {
        warn!(error = %e, "failed to remove legacy inventory after import");
    }
    if let Some(highest) = highest {
        if let Err(e) = allocator.ensure_above(highest) {
            warn!(error = %e, "failed to advance allocator past migrated items");
        }
    }

    info!(items = count, "migrated legacy inventory");
    StartupSource::Migrated(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use stockroom_core::{ItemId, ItemStatus};
    use stockroom_storage::{keys, JsonItemBackend, MemoryMedium, SharedMedium};

    struct Fixture {
        medium: SharedMedium,
        store: ItemStore,
        allocator: IdAllocator,
    }

    fn fixture(medium: SharedMedium) -> Fixture {
        let store = ItemStore::open(Box::new(JsonItemBackend::new(medium.clone()))).unwrap();
        let allocator = IdAllocator::new(medium.clone(), "ABC");
        Fixture {
            medium,
            store,
            allocator,
        }
    }

    fn run(fx: &mut Fixture, config: &EngineConfig) -> StartupReport {
        startup(&mut fx.store, &fx.allocator, fx.medium.as_ref(), config)
    }

    const LEGACY: &str = r#"[
        {"id":"ABC-0012","name":"Pallet Jack","category":"Equipment","quantity":1,
         "unitPrice":450,"dateAdded":"2023-11-02","status":"In Stock"},
        {"id":"ABC-0003","name":"Zip Ties","category":"Supplies","quantity":300,
         "unitPrice":0.25,"dateAdded":"2023-12-12"}
    ]"#;

    #[test]
    fn test_fresh_store_is_seeded() {
        let mut fx = fixture(Arc::new(MemoryMedium::new()));
        let report = run(&mut fx, &EngineConfig::default());

        assert_eq!(report.source, StartupSource::Seeded);
        assert!(report.merged.is_empty());
        assert_eq!(fx.store.len(), 5);
        assert_eq!(fx.allocator.peek(), 6);
        assert_eq!(fx.allocator.next().as_str(), "ABC-0006");
    }

    #[test]
    fn test_existing_items_win_over_legacy() {
        let medium: SharedMedium = Arc::new(MemoryMedium::new());
        medium.set(keys::LEGACY_ITEMS, LEGACY).unwrap();
        let mut fx = fixture(medium.clone());
        fx.store.insert(InventoryItem::new(
            ItemId::new("ABC", 1),
            "Twine",
            "Supplies",
            1.0,
            1.0,
            "2026-01-01",
            ItemStatus::InStock,
        ));

        let report = run(&mut fx, &EngineConfig::default());

        assert_eq!(report.source, StartupSource::Existing(1));
        assert!(medium.get(keys::LEGACY_ITEMS).unwrap().is_some());
    }

    #[test]
    fn test_legacy_is_migrated_and_removed() {
        let medium: SharedMedium = Arc::new(MemoryMedium::new());
        medium.set(keys::LEGACY_ITEMS, LEGACY).unwrap();
        let mut fx = fixture(medium.clone());

        let report = run(&mut fx, &EngineConfig::default());

        assert_eq!(report.source, StartupSource::Migrated(2));
        assert_eq!(fx.store.items()[0].id.as_str(), "ABC-0012");
        assert_eq!(fx.store.items()[1].total_value, 75.0);
        assert!(medium.get(keys::LEGACY_ITEMS).unwrap().is_none());
        // Counter moved past the highest migrated code
        assert_eq!(fx.allocator.next().as_str(), "ABC-0013");
    }

    #[test]
    fn test_empty_legacy_array_is_cleared() {
        let medium: SharedMedium = Arc::new(MemoryMedium::new());
        medium.set(keys::LEGACY_ITEMS, "[]").unwrap();
        let mut fx = fixture(medium.clone());

        let report = run(&mut fx, &EngineConfig::default());

        assert_eq!(report.source, StartupSource::Migrated(0));
        assert!(fx.store.is_empty());
        assert!(medium.get(keys::LEGACY_ITEMS).unwrap().is_none());
    }

    #[test]
    fn test_corrupt_legacy_falls_back_to_seed() {
        let medium: SharedMedium = Arc::new(MemoryMedium::new());
        medium.set(keys::LEGACY_ITEMS, "not json").unwrap();
        let mut fx = fixture(medium.clone());

        let report = run(&mut fx, &EngineConfig::default());

        assert_eq!(report.source, StartupSource::Seeded);
        assert_eq!(fx.store.len(), 5);
        assert_eq!(
            medium.get(keys::LEGACY_ITEMS).unwrap().as_deref(),
            Some("not json")
        );
    }

    #[test]
    fn test_seeding_disabled() {
        let mut fx = fixture(Arc::new(MemoryMedium::new()));
        let config = EngineConfig {
            seed_when_empty: false,
            ..EngineConfig::default()
        };

        let report = run(&mut fx, &config);

        assert_eq!(report.source, StartupSource::Empty);
        assert!(fx.store.is_empty());
        assert_eq!(fx.allocator.peek(), 1);
    }

    #[test]
    fn test_migrated_duplicates_are_reconciled() {
        let medium: SharedMedium = Arc::new(MemoryMedium::new());
        medium
            .set(
                keys::LEGACY_ITEMS,
                r#"[
                {"id":"ABC-0001","name":"Tarp","category":"Supplies","quantity":2,
                 "unitPrice":10,"dateAdded":"2024-01-01"},
                {"id":"ABC-0002","name":"TARP","category":"Supplies","quantity":3,
                 "unitPrice":12,"dateAdded":"2024-02-01"}
            ]"#,
            )
            .unwrap();
        let mut fx = fixture(medium);

        let report = run(&mut fx, &EngineConfig::default());

        assert_eq!(report.merged.len(), 1);
        assert_eq!(report.merged[0].merged_quantity, 5.0);
        assert_eq!(fx.store.len(), 1);
        assert_eq!(fx.store.items()[0].total_value, 50.0);
    }

    #[test]
    fn test_second_startup_keeps_data() {
        let medium: SharedMedium = Arc::new(MemoryMedium::new());
        let mut first = fixture(medium.clone());
        run(&mut first, &EngineConfig::default());
        first.store.delete("ABC-0001");

        let mut second = fixture(medium);
        let report = run(&mut second, &EngineConfig::default());

        assert_eq!(report.source, StartupSource::Existing(4));
        assert_eq!(second.allocator.peek(), 6);
    }
}
