//! Duplicate reconciliation on open.

use crate::*;

fn legacy_widgets(medium: &SharedMedium) {
    medium
        .set(
            "legacy_inventory",
            r#"[
            {"id":"ABC-0001","name":"Widget","category":"Equipment","quantity":3,
             "unitPrice":4,"dateAdded":"2025-01-01","status":"Low Stock"},
            {"id":"ABC-0002","name":"widget","category":"Equipment","quantity":5,
             "unitPrice":9,"dateAdded":"2025-02-01","status":"In Stock"},
            {"id":"ABC-0003","name":"WIDGET","category":"Equipment","quantity":2,
             "unitPrice":1,"dateAdded":"2025-01-15","status":"In Stock"}
        ]"#,
        )
        .unwrap();
}

#[test]
fn test_widget_scenario_merged_on_open() {
    let medium = memory_medium();
    legacy_widgets(&medium);

    let inv = over_medium(medium);

    assert_eq!(inv.merged_on_open().len(), 1);
    assert_eq!(
        inv.merged_on_open()[0].to_string(),
        "\"Widget\" (3 entries merged, combined qty: 10)"
    );
    assert_eq!(inv.len(), 1);

    let keeper = &inv.items()[0];
    assert_eq!(keeper.id.as_str(), "ABC-0001");
    assert_eq!(keeper.quantity, 10.0);
    assert_eq!(keeper.total_value, 40.0);
    // Status stays whatever the keeper had
    assert_eq!(keeper.status, ItemStatus::LowStock);
}

#[test]
fn test_merge_is_durable_and_not_repeated() {
    let medium = memory_medium();
    legacy_widgets(&medium);
    drop(over_medium(medium.clone()));

    let mut inv = over_medium(medium);
    assert!(inv.merged_on_open().is_empty());
    assert_eq!(inv.len(), 1);
    assert!(inv.reconcile().is_empty());
}

#[test]
fn test_duplicates_written_externally_are_merged_on_reload() {
    let medium = memory_medium();
    let mut inv = over_medium(medium.clone());

    let mut items = inv.all();
    let mut copy = items[4].clone();
    copy.id = ItemId::from("ABC-0099".to_string());
    copy.name = "SAFETY HELMETS".to_string();
    copy.date_added = "2026-02-01".to_string();
    items.push(copy);
    medium
        .set("inventory", &serde_json::to_string(&items).unwrap())
        .unwrap();

    inv.reload().unwrap();
    assert_eq!(inv.len(), 6);

    let merged = inv.reconcile();
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].name, "Safety Helmets");
    assert_eq!(merged[0].merged_quantity, 90.0);
    assert_eq!(inv.len(), 5);
    assert_eq!(inv.get("ABC-0005").unwrap().total_value, 3150.0);
}
