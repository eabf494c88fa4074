//! Output formatting for human and JSON modes.

use serde_json::json;
use stockroom::{
    format_currency, ChartData, Dashboard, Error, InventoryItem, Kpis, MergeSummary,
};

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

/// Result of one command, ready to print.
#[derive(Debug)]
pub enum Output {
    Items(Vec<InventoryItem>),
    Item(InventoryItem),
    Added(InventoryItem),
    Deleted { id: String, existed: bool },
    NotFound(String),
    Kpis(Kpis),
    Chart(ChartData),
    Dashboard(Dashboard),
    Merged(Vec<MergeSummary>),
}

impl Output {
    /// Process exit code for this result.
    pub fn exit_code(&self) -> i32 {
        match self {
            Output::NotFound(_) => 1,
            _ => 0,
        }
    }
}

/// Render `output` in `mode`.
pub fn format_output(output: &Output, mode: OutputMode) -> String {
    match mode {
        OutputMode::Human => format_human(output),
        OutputMode::Json => format_json(output),
    }
}

/// Render an error in `mode`.
pub fn format_error(err: &Error, mode: OutputMode) -> String {
    match mode {
        OutputMode::Human => match err.validation_errors() {
            Some(v) => v
                .errors()
                .iter()
                .map(|e| format!("(error) {}: {}", e.field, e.message))
                .collect::<Vec<_>>()
                .join("\n"),
            None => format!("(error) {}", err),
        },
        OutputMode::Json => {
            let value = match err.validation_errors() {
                Some(v) => {
                    let fields: Vec<_> = v
                        .errors()
                        .iter()
                        .map(|e| json!({ "field": e.field.as_str(), "message": e.message }))
                        .collect();
                    json!({ "error": "validation", "fields": fields })
                }
                None => json!({ "error": err.to_string() }),
            };
            value.to_string()
        }
    }
}

/// Banner lines for duplicates merged while opening.
pub fn format_merge_banner(merged: &[MergeSummary]) -> Option<String> {
    if merged.is_empty() {
        return None;
    }
    let lines: Vec<String> = merged.iter().map(|m| format!("  {}", m)).collect();
    Some(format!(
        "Duplicate items merged ({} group{}):\n{}",
        merged.len(),
        if merged.len() == 1 { "" } else { "s" },
        lines.join("\n")
    ))
}

// =========================================================================
// Human
// =========================================================================

fn format_human(output: &Output) -> String {
    match output {
        Output::Items(items) if items.is_empty() => "(empty)".to_string(),
        Output::Items(items) => item_table(items),
        Output::Item(item) => item_detail(item),
        Output::Added(item) => format!("Added {} \"{}\"", item.id, item.name),
        Output::Deleted { id, existed: true } => format!("Deleted {}", id),
        Output::Deleted { id, existed: false } => format!("(nil) no item {}", id),
        Output::NotFound(id) => format!("(nil) no item {}", id),
        Output::Kpis(kpis) => kpi_block(kpis),
        Output::Chart(chart) => chart_block(chart),
        Output::Dashboard(dash) => format!(
            "{}\n\nRecent activity\n{}\n\nStock levels\n{}",
            kpi_block(&dash.kpis),
            if dash.recent.is_empty() {
                "(empty)".to_string()
            } else {
                item_table(&dash.recent)
            },
            chart_block(&dash.chart)
        ),
        Output::Merged(merged) => match format_merge_banner(merged) {
            Some(banner) => banner,
            None => "No duplicates found".to_string(),
        },
    }
}

fn item_table(items: &[InventoryItem]) -> String {
    let name_width = items
        .iter()
        .map(|i| i.name.chars().count())
        .max()
        .unwrap_or(0)
        .max(4);
    let category_width = items
        .iter()
        .map(|i| i.category.chars().count())
        .max()
        .unwrap_or(0)
        .max(8);

    let mut lines = vec![format!(
        "{:<10} {:<nw$} {:<cw$} {:>10} {:>14} {:>16} {:<10} {}",
        "ID",
        "NAME",
        "CATEGORY",
        "QTY",
        "UNIT PRICE",
        "TOTAL",
        "ADDED",
        "STATUS",
        nw = name_width,
        cw = category_width
    )];
    for item in items {
        lines.push(format!(
            "{:<10} {:<nw$} {:<cw$} {:>10} {:>14} {:>16} {:<10} {}",
            item.id.as_str(),
            item.name,
            item.category,
            item.quantity,
            format_currency(item.unit_price),
            format_currency(item.total_value),
            item.date_added,
            item.status,
            nw = name_width,
            cw = category_width
        ));
    }
    lines.join("\n")
}

fn item_detail(item: &InventoryItem) -> String {
    [
        format!("id:         {}", item.id),
        format!("name:       {}", item.name),
        format!("category:   {}", item.category),
        format!("quantity:   {}", item.quantity),
        format!("unit price: {}", format_currency(item.unit_price)),
        format!("total:      {}", format_currency(item.total_value)),
        format!("added:      {}", item.date_added),
        format!("status:     {}", item.status),
    ]
    .join("\n")
}

fn kpi_block(kpis: &Kpis) -> String {
    [
        format!("Total items:       {}", kpis.total_items),
        format!("Total value:       {}", format_currency(kpis.total_value)),
        format!("Low/out of stock:  {}", kpis.low_stock_count),
        format!("Categories in use: {}", kpis.categories_in_use),
    ]
    .join("\n")
}

fn chart_block(chart: &ChartData) -> String {
    if chart.is_empty() {
        return "(empty)".to_string();
    }
    let max = chart.bars.iter().map(|b| b.quantity).fold(0.0_f64, f64::max);
    chart
        .bars
        .iter()
        .map(|bar| {
            let width = if max > 0.0 {
                ((bar.quantity / max) * 40.0).round() as usize
            } else {
                0
            };
            format!(
                "{:<20} {:>8} {:<7} {}",
                bar.label,
                bar.quantity,
                bar.tier.as_str(),
                "#".repeat(width)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// =========================================================================
// JSON
// =========================================================================

fn format_json(output: &Output) -> String {
    let value = match output {
        Output::Items(items) => json!(items),
        Output::Item(item) | Output::Added(item) => json!(item),
        Output::Deleted { id, existed } => json!({ "id": id, "deleted": existed }),
        Output::NotFound(id) => json!({ "id": id, "found": false }),
        Output::Kpis(kpis) => json!(kpis),
        Output::Chart(chart) => json!(chart),
        Output::Dashboard(dash) => json!(dash),
        Output::Merged(merged) => {
            let groups: Vec<_> = merged
                .iter()
                .map(|m| {
                    json!({
                        "name": m.name,
                        "count": m.count,
                        "mergedQuantity": m.merged_quantity,
                    })
                })
                .collect();
            json!({ "merged": groups })
        }
    };
    value.to_string()
}
