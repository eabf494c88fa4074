//! Bar chart data
//!
//! One bar per item, sorted by name. Each bar carries a [`StockTier`] that
//! picks its colours:
//!
//! | Quantity | Tier | Background | Border |
//! |----------|------|------------|--------|
//! | `0` | [`StockTier::Empty`] | `rgba(220, 38, 38, 0.75)` | `#dc2626` |
//! | `0 < q <= 5` | [`StockTier::Low`] | `rgba(217, 119, 6, 0.75)` | `#d97706` |
//! | `q > 5` | [`StockTier::Normal`] | `rgba(26, 58, 92, 0.75)` | `#1a3a5c` |

use serde::Serialize;
use std::cmp::Ordering;
use stockroom_core::InventoryItem;

/// Labels longer than this are shortened.
const MAX_LABEL_CHARS: usize = 20;
/// Characters kept before the ellipsis when a label is shortened.
const TRUNCATED_LABEL_CHARS: usize = 18;
const UNNAMED: &str = "(unnamed)";

/// Quantity band used for bar colouring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StockTier {
    /// Nothing on hand
    Empty,
    /// Five or fewer on hand
    Low,
    /// More than five on hand
    Normal,
}

impl StockTier {
    /// Tier for `quantity`
    pub fn for_quantity(quantity: f64) -> Self {
        if quantity <= 0.0 {
            StockTier::Empty
        } else if quantity <= 5.0 {
            StockTier::Low
        } else {
            StockTier::Normal
        }
    }

    /// Lowercase tier name
    pub fn as_str(&self) -> &'static str {
        match self {
            StockTier::Empty => "empty",
            StockTier::Low => "low",
            StockTier::Normal => "normal",
        }
    }

    /// Bar fill colour
    pub fn background(&self) -> &'static str {
        match self {
            StockTier::Empty => "rgba(220, 38, 38, 0.75)",
            StockTier::Low => "rgba(217, 119, 6, 0.75)",
            StockTier::Normal => "rgba(26, 58, 92, 0.75)",
        }
    }

    /// Bar border colour
    pub fn border(&self) -> &'static str {
        match self {
            StockTier::Empty => "#dc2626",
            StockTier::Low => "#d97706",
            StockTier::Normal => "#1a3a5c",
        }
    }
}

/// One bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartBar {
    /// Axis label, possibly shortened
    pub label: String,
    /// Untruncated item name for tooltips
    pub full_name: String,
    /// Bar height
    pub quantity: f64,
    /// Colour band
    pub tier: StockTier,
    /// Fill colour
    pub background: &'static str,
    /// Border colour
    pub border: &'static str,
}

/// All bars, in display order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ChartData {
    /// Bars sorted by name
    pub bars: Vec<ChartBar>,
}

impl ChartData {
    /// Build chart data for `items`
    pub fn build(items: &[InventoryItem]) -> Self {
        let mut sorted: Vec<&InventoryItem> = items.iter().collect();
        sorted.sort_by(|a, b| compare_names(&a.name, &b.name));

        let bars = sorted
            .into_iter()
            .map(|item| {
                let tier = StockTier::for_quantity(item.quantity);
                ChartBar {
                    label: axis_label(&item.name),
                    full_name: item.name.clone(),
                    quantity: item.quantity,
                    tier,
                    background: tier.background(),
                    border: tier.border(),
                }
            })
            .collect();
        Self { bars }
    }

    /// Axis labels in order
    pub fn labels(&self) -> Vec<&str> {
        self.bars.iter().map(|b| b.label.as_str()).collect()
    }

    /// Check if there is nothing to draw
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
}

fn axis_label(name: &str) -> String {
    let name = name.trim();
    if name.is_empty() {
        return UNNAMED.to_string();
    }
    if name.chars().count() > MAX_LABEL_CHARS {
        let mut short: String = name.chars().take(TRUNCATED_LABEL_CHARS).collect();
        short.push('…');
        short
    } else {
        name.to_string()
    }
}
