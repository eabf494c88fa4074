//! Derived views through the facade.

use crate::*;
use proptest::prelude::*;

#[test]
fn test_seed_kpis() {
    for backend in BACKENDS {
        let kpis = ephemeral(backend).kpis();
        assert_eq!(kpis.total_items, 5);
        assert_eq!(kpis.low_stock_count, 2);
        assert_eq!(kpis.categories_in_use, 4);
        assert_eq!(format_currency(kpis.total_value), "$175,935.00");
    }
}

#[test]
fn test_views_follow_mutations() {
    let mut inv = ephemeral(BackendKind::Json);
    inv.add_item_on(
        &ItemDraft::new("Label Printer", "Equipment", "5", "300", "Low Stock"),
        day(2026, 4, 1),
    )
    .unwrap();

    let dash = inv.dashboard();
    assert_eq!(dash.kpis.total_items, 6);
    assert_eq!(dash.kpis.low_stock_count, 3);
    assert_eq!(dash.recent[0].name, "Label Printer");

    let bar = dash
        .chart
        .bars
        .iter()
        .find(|b| b.full_name == "Label Printer")
        .unwrap();
    // Exactly five is still the low tier
    assert_eq!(bar.tier, StockTier::Low);
}

#[test]
fn test_recent_respects_configured_limit() {
    let mut inv = Inventory::builder()
        .ephemeral()
        .config(EngineConfig {
            recent_limit: 2,
            ..EngineConfig::default()
        })
        .open()
        .unwrap();
    assert_eq!(ids(&inv.recent()), ["ABC-0005", "ABC-0004"]);
    assert_eq!(inv.recent_n(10).len(), 5);

    inv.delete_item("ABC-0005");
    assert_eq!(ids(&inv.recent()), ["ABC-0004", "ABC-0003"]);
}

#[test]
fn test_filter_is_conjunctive() {
    let inv = ephemeral(BackendKind::Sqlite);

    let supplies = inv.filter(&ItemFilter::new().category("Supplies"));
    assert_eq!(ids(&supplies), ["ABC-0005", "ABC-0002"]);

    let in_stock_supplies = inv.filter(
        &ItemFilter::new()
            .category("Supplies")
            .status(ItemStatus::InStock),
    );
    assert_eq!(ids(&in_stock_supplies), ["ABC-0005"]);

    let by_id = inv.filter(&ItemFilter::new().search("abc-0003").category("Raw Materials"));
    assert_eq!(ids(&by_id), ["ABC-0003"]);
}

#[test]
fn test_search_hidden_when_blank() {
    let inv = ephemeral(BackendKind::Json);
    assert!(inv.search("  ").is_empty());
    assert_eq!(ids(&inv.search("beams")), ["ABC-0003"]);
}

#[test]
fn test_dashboard_serializes() {
    let inv = ephemeral(BackendKind::Json);
    let value = serde_json::to_value(inv.dashboard()).unwrap();
    assert_eq!(value["kpis"]["totalItems"], 5);
    assert_eq!(value["chart"]["bars"][0]["fullName"], "Forklift Model X200");
    assert_eq!(value["recent"][0]["id"], "ABC-0005");
}

#[derive(Debug, Clone)]
enum Op {
    Add { quantity: u16, cents: u32 },
    Delete(usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u16..500, 0u32..100_000).prop_map(|(quantity, cents)| Op::Add { quantity, cents }),
        (0usize..12).prop_map(Op::Delete),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_kpi_total_follows_adds_and_deletes(ops in prop::collection::vec(op(), 1..20)) {
        let mut inv = ephemeral(BackendKind::Json);
        let mut expected_len = inv.len();

        for (n, op) in ops.into_iter().enumerate() {
            match op {
                Op::Add { quantity, cents } => {
                    let price = format!("{}.{:02}", cents / 100, cents % 100);
                    let name = format!("Crate Lot {}", n);
                    inv.add_item(&draft(&name, &quantity.to_string(), &price)).unwrap();
                    expected_len += 1;
                }
                Op::Delete(index) => {
                    let Some(id) = inv.items().get(index).map(|i| i.id.to_string()) else {
                        continue;
                    };
                    prop_assert!(inv.delete_item(&id));
                    expected_len -= 1;
                }
            }
        }

        let kpis = inv.kpis();
        let expected: f64 = inv.items().iter().map(|i| i.quantity * i.unit_price).sum();
        prop_assert_eq!(kpis.total_items, expected_len);
        prop_assert!((kpis.total_value - expected).abs() < 1e-6);
    }
}
