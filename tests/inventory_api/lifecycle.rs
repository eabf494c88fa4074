//! Add / delete / lookup through the facade.

use crate::*;

// =============================================================================
// ADD TESTS
// =============================================================================

#[test]
fn test_first_add_after_seed_is_0006() {
    for backend in BACKENDS {
        let mut inv = ephemeral(backend);
        let item = inv.add_item(&draft("Stretch Hood", "4", "12.50")).unwrap();
        assert_eq!(item.id.as_str(), "ABC-0006", "backend {}", backend);
        assert_eq!(inv.len(), 6);
    }
}

#[test]
fn test_ids_strictly_increase_across_adds() {
    let mut inv = ephemeral(BackendKind::Json);
    let mut last = 5;
    for n in 0..20 {
        let item = inv
            .add_item(&draft(&format!("Part {}", n), "1", "1"))
            .unwrap();
        let seq = item.id.sequence().unwrap();
        assert_eq!(seq, last + 1);
        last = seq;
    }
}

#[test]
fn test_total_value_invariant_holds_for_every_item() {
    let mut inv = ephemeral(BackendKind::Sqlite);
    inv.add_item(&draft("Rope", "2.5", "4")).unwrap();
    inv.add_item(&draft("Shrink Film", "0", "19.99")).unwrap();

    for item in inv.items() {
        assert_eq!(item.total_value, item.quantity * item.unit_price, "{}", item.id);
    }
}

#[test]
fn test_duplicate_name_rejected_ignoring_case() {
    for backend in BACKENDS {
        let mut inv = ephemeral(backend);
        let before = inv.all();

        let err = inv.add_item(&draft("safety helmets", "1", "1")).unwrap_err();

        assert!(err.is_duplicate_name());
        assert_eq!(
            err.validation_errors().unwrap().message_for(Field::Name),
            Some("\"Safety Helmets\" already exists (ABC-0005). Item names must be unique.")
        );
        assert_eq!(inv.all(), before);
    }
}

#[test]
fn test_invalid_draft_reports_every_field() {
    let mut inv = ephemeral(BackendKind::Json);
    let err = inv
        .add_item(&ItemDraft::new("", "", "-1", "", "In Stock"))
        .unwrap_err();

    let errors = err.validation_errors().unwrap();
    assert_eq!(errors.message_for(Field::Name), Some("Item name is required."));
    assert_eq!(errors.message_for(Field::Category), Some("Please select a category."));
    assert_eq!(errors.message_for(Field::Quantity), Some("Quantity cannot be negative."));
    assert_eq!(errors.message_for(Field::UnitPrice), Some("Unit price is required."));
    assert_eq!(inv.len(), 5);
}

#[test]
fn test_add_uses_given_date() {
    let mut inv = ephemeral(BackendKind::Json);
    let item = inv
        .add_item_on(&draft("Dock Bumper", "2", "80"), day(2026, 3, 9))
        .unwrap();
    assert_eq!(item.date_added, "2026-03-09");
    assert_eq!(item.added_on().unwrap(), day(2026, 3, 9));
}

// =============================================================================
// DELETE TESTS
// =============================================================================

#[test]
fn test_delete_unknown_id_is_noop() {
    for backend in BACKENDS {
        let mut inv = ephemeral(backend);
        let before = inv.all();

        assert!(!inv.delete_item("ABC-9999"));
        assert_eq!(inv.all(), before);
        assert!(!inv.is_dirty());
    }
}

#[test]
fn test_delete_then_readd_same_name() {
    let mut inv = ephemeral(BackendKind::Json);
    assert!(inv.delete_item("ABC-0005"));
    assert!(inv.find_by_name("Safety Helmets").is_none());

    let item = inv.add_item(&draft("Safety Helmets", "10", "35")).unwrap();
    // Codes are never reused
    assert_eq!(item.id.as_str(), "ABC-0006");
}

#[test]
fn test_snapshot_does_not_alias_store() {
    let inv = ephemeral(BackendKind::Json);
    let mut snapshot = inv.all();
    snapshot.clear();
    assert_eq!(inv.len(), 5);
}
