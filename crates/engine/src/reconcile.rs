//! Duplicate reconciliation
//!
//! Items whose names differ only by case (or surrounding whitespace) are
//! merged into one record:
//!
//! 1. Group items by lowercased name.
//! 2. In each group of two or more, order members by `date_added`, oldest
//!    first. Equal dates keep storage order, so the first stored item wins.
//! 3. The oldest member is the keeper. Its quantity becomes the sum over the
//!    group and its total value is recomputed with the keeper's own unit price.
//! 4. All other members are deleted.
//!
//! The collection is persisted once at the end, and only if a merge happened.
//! The keeper's status is left untouched.
//!
//! Running the pass again on its own output changes nothing.

use crate::store::ItemStore;
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use tracing::info;

/// One merged group.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeSummary {
    /// Keeper's name
    pub name: String,
    /// Number of records that were merged (keeper included)
    pub count: usize,
    /// Combined quantity now held by the keeper
    pub merged_quantity: f64,
}

impl fmt::Display for MergeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\"{}\" ({} entries merged, combined qty: {})",
            self.name, self.count, self.merged_quantity
        )
    }
}

/// Startup pass that merges case-insensitive name duplicates.
pub struct Reconciler;

impl Reconciler {
    /// Merge every duplicate group in `store`
    ///
    /// Returns one summary per merged group, ordered by lowercased name; empty
    /// when there were no duplicates.
    pub fn run(store: &mut ItemStore) -> Vec<MergeSummary> {
        let mut groups: BTreeMap<String, Vec<usize>> = BTreeMap::new();
        for (idx, item) in store.items().iter().enumerate() {
            groups.entry(item.name_key()).or_default().push(idx);
        }

        let items = store.items_mut();
        let mut removed: HashSet<usize> = HashSet::new();
        let mut summaries = Vec::new();

        for mut members in groups.into_values().filter(|m| m.len() > 1) {
            // Stable: equal dates keep storage order
            members.sort_by(|&a, &b| items[a].date_added.cmp(&items[b].date_added));

            let keeper = members[0];
            let merged_quantity: f64 = members.iter().map(|&idx| items[idx].quantity).sum();
            items[keeper].set_quantity(merged_quantity);
            removed.extend(&members[1..]);

            summaries.push(MergeSummary {
                name: items[keeper].name.clone(),
                count: members.len(),
                merged_quantity,
            });
        }

        if summaries.is_empty() {
            return summaries;
        }

        let mut idx = 0;
        items.retain(|_| {
            let keep = !removed.contains(&idx);
            idx += 1;
            keep
        });

        info!(
            groups = summaries.len(),
            removed = removed.len(),
            "merged duplicate inventory items"
        );
        store.persist();
        summaries
    }
}
