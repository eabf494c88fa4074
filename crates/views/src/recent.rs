//! Recent activity feed

use stockroom_core::InventoryItem;

/// The `limit` most recently added items, newest first
///
/// Items added on the same day keep their storage order.
pub fn recent_activity(items: &[InventoryItem], limit: usize) -> Vec<InventoryItem> {
    let mut sorted: Vec<&InventoryItem> = items.iter().collect();
    sorted.sort_by(|a, b| b.date_added.cmp(&a.date_added));
    sorted.into_iter().take(limit).cloned().collect()
}
