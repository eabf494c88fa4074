//! Starter data set
//!
//! Written into an empty store the first time it is opened, unless legacy data
//! is available to migrate instead. The seeds occupy sequence numbers 1-5, so
//! the allocator continues from [`NEXT_SEQUENCE_AFTER_SEED`].

use crate::item::InventoryItem;
use crate::types::{ItemId, ItemStatus};

/// Counter value the allocator is set to after seeding.
pub const NEXT_SEQUENCE_AFTER_SEED: u32 = 6;

/// The five fixed starter items, with ids `PREFIX-0001` through `PREFIX-0005`.
pub fn seed_items(prefix: &str) -> Vec<InventoryItem> {
    let rows: [(&str, &str, f64, f64, &str, ItemStatus); 5] = [
        ("Forklift Model X200", "Equipment", 3.0, 45000.0, "2025-11-15", ItemStatus::InStock),
        ("Pallet Wrap Film", "Supplies", 8.0, 120.0, "2025-12-01", ItemStatus::LowStock),
        ("Steel Beams 6m", "Raw Materials", 0.0, 850.0, "2025-12-10", ItemStatus::OutOfStock),
        ("Shipping Containers 20ft", "Finished Goods", 12.0, 3200.0, "2026-01-05", ItemStatus::InStock),
        ("Safety Helmets", "Supplies", 45.0, 35.0, "2026-01-20", ItemStatus::InStock),
    ];

    rows.into_iter()
        .zip(1u32..)
        .map(|((name, category, quantity, unit_price, date, status), seq)| {
            InventoryItem::new(
                ItemId::new(prefix, seq),
                name,
                category,
                quantity,
                unit_price,
                date,
                status,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_ids_are_sequential() {
        let ids: Vec<String> = seed_items("ABC")
            .into_iter()
            .map(|item| item.id.into_string())
            .collect();
        assert_eq!(ids, ["ABC-0001", "ABC-0002", "ABC-0003", "ABC-0004", "ABC-0005"]);
    }

    #[test]
    fn test_seed_totals_match_source_values() {
        let totals: Vec<f64> = seed_items("ABC").iter().map(|i| i.total_value).collect();
        assert_eq!(totals, [135000.0, 960.0, 0.0, 38400.0, 1575.0]);
    }

    #[test]
    fn test_seed_uses_prefix() {
        assert!(seed_items("WH")
            .iter()
            .all(|item| item.id.as_str().starts_with("WH-")));
    }

    #[test]
    fn test_seed_names_are_unique() {
        let names: HashSet<String> = seed_items("ABC").iter().map(|i| i.name_key()).collect();
        assert_eq!(names.len(), 5);
    }
}
