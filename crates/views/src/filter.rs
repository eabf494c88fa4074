//! Inventory table filtering and dashboard search
//!
//! A search term matches an item when, ignoring case, it is a substring of
//! the name or a prefix of the id. Category and status filters are exact and
//! combine with the term conjunctively.

use stockroom_core::{InventoryItem, ItemStatus};

/// Criteria for the inventory table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemFilter {
    /// Free-text term; blank matches everything
    pub search: Option<String>,
    /// Exact category
    pub category: Option<String>,
    /// Exact status
    pub status: Option<ItemStatus>,
}

impl ItemFilter {
    /// Filter with no criteria
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search term
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Restrict to one category
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Restrict to one status
    pub fn status(mut self, status: ItemStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Check whether `item` passes every criterion
    pub fn matches(&self, item: &InventoryItem) -> bool {
        let term = self.search.as_deref().map(normalize_term).unwrap_or_default();
        if !term.is_empty() && !term_matches(&term, item) {
            return false;
        }
        if let Some(category) = &self.category {
            if item.category != *category {
                return false;
            }
        }
        if let Some(status) = self.status {
            if item.status != status {
                return false;
            }
        }
        true
    }
}

fn normalize_term(term: &str) -> String {
    term.trim().to_lowercase()
}

/// `term` must already be normalized.
fn term_matches(term: &str, item: &InventoryItem) -> bool {
    item.name.to_lowercase().contains(term) || item.id.as_str().to_lowercase().starts_with(term)
}

/// Items passing `filter`, newest first
pub fn filter_items(items: &[InventoryItem], filter: &ItemFilter) -> Vec<InventoryItem> {
    let mut matched: Vec<InventoryItem> = items.iter().filter(|i| filter.matches(i)).cloned().collect();
    matched.sort_by(|a, b| b.date_added.cmp(&a.date_added));
    matched
}

/// Dashboard search: items matching `term`, sorted by name
///
/// A blank term returns nothing.
pub fn search_items(items: &[InventoryItem], term: &str) -> Vec<InventoryItem> {
    let term = normalize_term(term);
    if term.is_empty() {
        return Vec::new();
    }
    let mut matched: Vec<InventoryItem> = items
        .iter()
        .filter(|i| term_matches(&term, i))
        .cloned()
        .collect();
    matched.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.name.cmp(&b.name))
    });
    matched
}
