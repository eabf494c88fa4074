//! Reopen, migration and failure behavior.

use crate::*;
use std::fs;

// =============================================================================
// REOPEN TESTS
// =============================================================================

#[test]
fn test_changes_survive_reopen() {
    for backend in BACKENDS {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut inv = on_disk(dir.path(), backend);
            assert_eq!(inv.startup_report().source, StartupSource::Seeded);
            inv.add_item(&draft("Stretch Hood", "4", "12.50")).unwrap();
            inv.delete_item("ABC-0001");
        }

        let mut inv = on_disk(dir.path(), backend);
        assert_eq!(inv.startup_report().source, StartupSource::Existing(5));
        assert!(inv.get("ABC-0001").is_none());
        assert!(inv.find_by_name("stretch hood").is_some());

        // Counter continues after the last issued code
        let next = inv.add_item(&draft("Corner Boards", "1", "1")).unwrap();
        assert_eq!(next.id.as_str(), "ABC-0007", "backend {}", backend);
    }
}

#[test]
fn test_config_file_in_data_dir_is_used() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join(CONFIG_FILE),
        "backend = \"sqlite\"\nid_prefix = \"WH\"\ncategories = [\"Supplies\"]\n",
    )
    .unwrap();

    let mut inv = Inventory::open(dir.path()).unwrap();
    assert_eq!(inv.backend(), BackendKind::Sqlite);
    assert!(dir.path().join(SQLITE_FILE).exists());
    assert_eq!(inv.items()[0].id.as_str(), "WH-0001");

    let err = inv
        .add_item(&ItemDraft::new("Rope", "Tools", "1", "1", ""))
        .unwrap_err();
    assert!(err.is_validation());
}

#[test]
fn test_bad_config_fails_open() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("custom.toml");
    fs::write(&path, "backend = \"redis\"").unwrap();

    let result = Inventory::builder().path(dir.path()).config_file(&path).open();
    assert!(matches!(result, Err(Error::Config(_))));
}

// =============================================================================
// CORRUPTION TESTS
// =============================================================================

#[test]
fn test_corrupt_json_blob_recovers_to_seed() {
    let dir = tempfile::tempdir().unwrap();
    drop(on_disk(dir.path(), BackendKind::Json));
    fs::write(dir.path().join("inventory"), "[{\"id\": \"ABC-00").unwrap();

    let inv = on_disk(dir.path(), BackendKind::Json);
    assert_eq!(inv.startup_report().source, StartupSource::Seeded);
    assert_eq!(inv.len(), 5);
}

#[test]
fn test_non_utf8_json_blob_recovers_to_seed() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("inventory"), [0xff, 0xfe, b'[', b']']).unwrap();

    let inv = on_disk(dir.path(), BackendKind::Json);
    assert_eq!(inv.startup_report().source, StartupSource::Seeded);
    assert_eq!(inv.len(), 5);
}

#[test]
fn test_corrupt_sqlite_file_is_moved_aside() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(SQLITE_FILE), vec![b'x'; 4096]).unwrap();

    let inv = on_disk(dir.path(), BackendKind::Sqlite);
    assert_eq!(inv.len(), 5);
    assert!(dir.path().join(format!("{}.corrupt", SQLITE_FILE)).exists());
}

// =============================================================================
// MIGRATION TESTS
// =============================================================================

#[test]
fn test_legacy_collection_migrated_once() {
    let medium = memory_medium();
    medium
        .set(
            "legacy_inventory",
            r#"[{"id":"ABC-0041","name":"Strapping Band","category":"Supplies",
                 "quantity":6,"unitPrice":22,"totalValue":999,"dateAdded":"2024-04-04",
                 "status":"In Stock"}]"#,
        )
        .unwrap();

    let mut inv = over_medium(medium.clone());
    assert_eq!(inv.startup_report().source, StartupSource::Migrated(1));
    assert_eq!(inv.items()[0].total_value, 132.0);
    assert!(medium.get("legacy_inventory").unwrap().is_none());
    assert_eq!(
        inv.add_item(&draft("Pallets", "1", "1")).unwrap().id.as_str(),
        "ABC-0042"
    );

    let again = over_medium(medium);
    assert_eq!(again.startup_report().source, StartupSource::Existing(2));
}

#[test]
fn test_seeding_can_be_disabled() {
    let inv = Inventory::builder()
        .ephemeral()
        .seed_when_empty(false)
        .open()
        .unwrap();
    assert!(inv.is_empty());
    assert_eq!(inv.startup_report().source, StartupSource::Empty);
    assert_eq!(inv.kpis().total_items, 0);
}

// =============================================================================
// FAILURE TESTS
// =============================================================================

#[test]
fn test_full_medium_keeps_in_memory_state() {
    let inv = Inventory::builder()
        .medium(Arc::new(MemoryMedium::with_quota(128)))
        .open()
        .unwrap();

    // Seed could not be written but is served from memory
    assert_eq!(inv.len(), 5);
    assert!(inv.is_dirty());
    assert_eq!(inv.kpis().low_stock_count, 2);
}

#[test]
fn test_flush_when_clean_is_noop() {
    let dir = tempfile::tempdir().unwrap();
    let mut inv = on_disk(dir.path(), BackendKind::Json);
    assert!(!inv.is_dirty());
    assert!(inv.flush());
}
