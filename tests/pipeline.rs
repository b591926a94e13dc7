//! End-to-end pipeline tests over a realistic in-memory order export.

use std::collections::HashSet;

use analytics::{summarize, top_n, MarginCalculator, SummaryMetric};
use chrono::NaiveDate;
use core_types::{OrderRow, OrderStatus};
use ledger::CostLedger;
use report::ReportAssembler;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ---------------------------------------------------------------------------
// Test data fixtures
// ---------------------------------------------------------------------------

fn order(
    date: &str,
    name: &str,
    article: &str,
    amount: Decimal,
    status: OrderStatus,
    quantity: u32,
    shipping: Decimal,
    warehouse: &str,
) -> OrderRow {
    OrderRow {
        order_date: NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(14, 30, 0)),
        product_name: name.to_string(),
        article: article.to_string(),
        amount,
        status,
        quantity,
        shipping_cost: shipping,
        warehouse: warehouse.to_string(),
    }
}

/// A month of orders across two warehouses, with returns, an unknown status
/// and an out-of-period row mixed in.
fn sample_orders() -> Vec<OrderRow> {
    vec![
        order(
            "2024-03-01",
            "Чайник",
            "A1",
            dec!(1000),
            OrderStatus::Issued,
            2,
            dec!(50),
            "Алматы",
        ),
        order(
            "2024-03-05",
            "Чайник",
            "A1",
            dec!(500),
            OrderStatus::Issued,
            1,
            dec!(50),
            "Алматы",
        ),
        order(
            "2024-03-07",
            "Утюг",
            "B2",
            dec!(800),
            OrderStatus::Issued,
            1,
            dec!(40),
            "Петропавловск",
        ),
        order(
            "2024-03-10",
            "Чайник",
            "A1",
            dec!(1000),
            OrderStatus::Returned,
            2,
            dec!(50),
            "Алматы",
        ),
        order(
            "2024-03-12",
            "Утюг",
            "B2",
            dec!(800),
            OrderStatus::Other("Отменен".to_string()),
            1,
            dec!(40),
            "Петропавловск",
        ),
        // Outside the analysis period.
        order(
            "2024-05-01",
            "Чайник",
            "A1",
            dec!(700),
            OrderStatus::Issued,
            1,
            dec!(50),
            "Алматы",
        ),
    ]
}

fn period() -> (NaiveDate, NaiveDate) {
    (
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
    )
}

fn all_warehouses() -> HashSet<String> {
    ["Алматы".to_string(), "Петропавловск".to_string()].into()
}

// ---------------------------------------------------------------------------
// Pipeline assertions
// ---------------------------------------------------------------------------

#[test]
fn full_pipeline_produces_consistent_bundle() {
    let rows = sample_orders();
    let mut costs = CostLedger::new();
    costs.set("A1", dec!(200)).unwrap();
    costs.set("B2", dec!(300)).unwrap();

    let (start, end) = period();
    let assembler = ReportAssembler::default();
    let bundle = assembler.assemble(&rows, start, end, &all_warehouses(), &mut costs);

    // Working set: the three issued in-period rows.
    assert_eq!(bundle.detail.len(), 3);

    // Stats come from the same date bound as the detail table.
    assert_eq!(bundle.stats.returns_count, 1);
    assert_eq!(bundle.stats.returns_amount, dec!(1000));
    assert_eq!(bundle.stats.turnover, dec!(2300));

    // Two groups: (A1, Алматы) and (B2, Петропавловск).
    assert_eq!(bundle.summary.len(), 2);
    let a1 = &bundle.summary[0];
    assert_eq!(a1.article, "A1");
    assert_eq!(a1.total_orders, 3);
    assert_eq!(a1.total_sales, dec!(1500));
    // 1000*0.83 - 200*2 - 50*2 = 330; 500*0.83 - 200 - 50 = 165
    assert_eq!(a1.total_margin, dec!(495));
    assert_eq!(a1.avg_cost, dec!(200));
}

#[test]
fn warehouse_selection_narrows_working_set_but_not_stats() {
    let rows = sample_orders();
    let mut costs = CostLedger::new();
    let (start, end) = period();
    let only_almaty: HashSet<String> = ["Алматы".to_string()].into();

    let bundle =
        ReportAssembler::default().assemble(&rows, start, end, &only_almaty, &mut costs);

    // Detail shrinks to the Almaty rows...
    assert_eq!(bundle.detail.len(), 2);
    assert!(bundle.detail.iter().all(|d| d.row.warehouse == "Алматы"));

    // ...while turnover still covers every issued in-period row.
    assert_eq!(bundle.stats.turnover, dec!(2300));
}

#[test]
fn reaggregating_the_detail_sheet_reproduces_the_summary() {
    let rows = sample_orders();
    let mut costs = CostLedger::new();
    costs.set("A1", dec!(200)).unwrap();

    let (start, end) = period();
    let bundle =
        ReportAssembler::default().assemble(&rows, start, end, &all_warehouses(), &mut costs);

    // The export round-trip property: re-running the aggregation over the
    // bundle's own detail table must give back the bundle's summary.
    let reaggregated = summarize(&bundle.detail);
    assert_eq!(reaggregated, bundle.summary);
}

#[test]
fn top_n_is_a_ranked_subset_of_the_summary() {
    let rows = sample_orders();
    let mut costs = CostLedger::new();
    let (start, end) = period();
    let bundle =
        ReportAssembler::default().assemble(&rows, start, end, &all_warehouses(), &mut costs);

    let top = top_n(&bundle.summary, SummaryMetric::TotalMargin, 10);

    assert!(top.len() <= 10);
    for pair in top.windows(2) {
        assert!(pair[0].total_margin >= pair[1].total_margin);
    }
    for row in &top {
        assert!(bundle.summary.contains(row));
    }
}

#[test]
fn ledger_edits_between_runs_persist_and_recompute() {
    let rows = sample_orders();
    let mut costs = CostLedger::new();
    costs.set("A1", dec!(200)).unwrap();

    let (start, end) = period();
    let assembler = ReportAssembler::new(MarginCalculator::default());
    let first = assembler.assemble(&rows, start, end, &all_warehouses(), &mut costs);

    // Operator updates one cost; the other entry must survive untouched.
    costs.set("B2", dec!(300)).unwrap();
    let second = assembler.assemble(&rows, start, end, &all_warehouses(), &mut costs);

    assert_eq!(costs.get("A1"), dec!(200));

    let b2_first = first.summary.iter().find(|r| r.article == "B2").unwrap();
    let b2_second = second.summary.iter().find(|r| r.article == "B2").unwrap();
    // 800*0.83 - 0 - 40 = 624 before the cost entry, minus 300 after.
    assert_eq!(b2_first.total_margin, dec!(624));
    assert_eq!(b2_second.total_margin, dec!(324));
}
