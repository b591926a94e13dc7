use std::cmp::Reverse;
use std::collections::HashMap;
use std::str::FromStr;

use core_types::{DerivedRow, SummaryRow};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::AnalyticsError;

/// The metric a summary can be ranked by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SummaryMetric {
    TotalOrders,
    TotalSales,
    TotalMargin,
}

impl FromStr for SummaryMetric {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "orders" | "total_orders" => Ok(SummaryMetric::TotalOrders),
            "sales" | "total_sales" => Ok(SummaryMetric::TotalSales),
            "margin" | "total_margin" => Ok(SummaryMetric::TotalMargin),
            other => Err(AnalyticsError::UnknownMetric(other.to_string())),
        }
    }
}

/// Groups derived rows by (article, product name, warehouse) and computes the
/// per-group totals.
///
/// Groups are accumulated in first-seen order and the result is then stably
/// sorted descending by `total_orders`, so groups tied on the default metric
/// keep their emission order. `avg_cost` is the unweighted arithmetic mean of
/// the group's row unit costs — deliberately not weighted by quantity, to
/// stay comparable with the original report.
pub fn summarize(rows: &[DerivedRow]) -> Vec<SummaryRow> {
    let mut index: HashMap<(String, String, String), usize> = HashMap::new();
    let mut groups: Vec<(SummaryRow, Decimal, u64)> = Vec::new();

    for derived in rows {
        let row = &derived.row;
        let key = (
            row.article.clone(),
            row.product_name.clone(),
            row.warehouse.clone(),
        );

        let slot = *index.entry(key).or_insert_with(|| {
            groups.push((
                SummaryRow {
                    article: row.article.clone(),
                    product_name: row.product_name.clone(),
                    warehouse: row.warehouse.clone(),
                    total_orders: 0,
                    total_sales: Decimal::ZERO,
                    avg_cost: Decimal::ZERO,
                    total_margin: Decimal::ZERO,
                },
                Decimal::ZERO,
                0,
            ));
            groups.len() - 1
        });

        let (summary, cost_sum, row_count) = &mut groups[slot];
        summary.total_orders += u64::from(row.quantity);
        summary.total_sales += row.amount;
        summary.total_margin += derived.margin;
        *cost_sum += derived.unit_cost;
        *row_count += 1;
    }

    let mut summary: Vec<SummaryRow> = groups
        .into_iter()
        .map(|(mut summary, cost_sum, row_count)| {
            if row_count > 0 {
                summary.avg_cost = cost_sum / Decimal::from(row_count);
            }
            summary
        })
        .collect();

    summary.sort_by_key(|row| Reverse(row.total_orders));

    tracing::debug!(groups = summary.len(), rows = rows.len(), "Aggregated working set.");

    summary
}

/// Re-ranks the full summary descending by the chosen metric and returns the
/// first `n` rows. The sort is stable, so ties keep the incoming order.
pub fn top_n(summary: &[SummaryRow], metric: SummaryMetric, n: usize) -> Vec<SummaryRow> {
    let mut ranked = summary.to_vec();
    match metric {
        SummaryMetric::TotalOrders => ranked.sort_by_key(|row| Reverse(row.total_orders)),
        SummaryMetric::TotalSales => ranked.sort_by(|a, b| b.total_sales.cmp(&a.total_sales)),
        SummaryMetric::TotalMargin => ranked.sort_by(|a, b| b.total_margin.cmp(&a.total_margin)),
    }
    ranked.truncate(n);
    ranked
}
