//! Headline counters for the dashboard

use serde::Serialize;
use std::collections::HashSet;
use stockroom_core::InventoryItem;

/// Dashboard KPIs.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Kpis {
    /// Number of items
    pub total_items: usize,
    /// Sum of `total_value`
    pub total_value: f64,
    /// Items whose status is `Low Stock` or `Out of Stock`
    pub low_stock_count: usize,
    /// Distinct categories in use
    pub categories_in_use: usize,
}

impl Kpis {
    /// Compute the KPIs for `items`
    ///
    /// Low-stock counting looks at the status only, never at quantity.
    pub fn compute(items: &[InventoryItem]) -> Self {
        let categories: HashSet<&str> = items.iter().map(|i| i.category.as_str()).collect();
        Self {
            total_items: items.len(),
            total_value: items.iter().map(|i| i.total_value).sum(),
            low_stock_count: items.iter().filter(|i| i.status.needs_attention()).count(),
            categories_in_use: categories.len(),
        }
    }
}
