use std::collections::HashSet;

use chrono::NaiveDate;
use core_types::{OrderRow, OrderStatus};

/// The three derived row sets every analysis run needs, produced from one
/// date-bounded pass.
///
/// All three are filters over the same date-bounded rows, so a single
/// `partition` call cannot produce the inconsistency that three separate
/// date filters could (e.g. a returns statistic and a turnover statistic
/// computed over different periods).
#[derive(Debug, Clone, Default)]
pub struct FilteredSets {
    /// Returned-status rows, kept only for the returns statistic.
    pub returned: Vec<OrderRow>,
    /// Issued-status rows — the base population for profitability analysis.
    pub issued: Vec<OrderRow>,
    /// Issued rows further restricted to the selected warehouses; the input
    /// to cost lookup and margin computation.
    pub working: Vec<OrderRow>,
}

/// Keeps rows whose order date falls within `[start, end]` inclusive.
///
/// Rows without a parsed date are excluded. An inverted range (`start > end`)
/// yields an empty set — it is a degenerate selection, not an error.
pub fn filter_by_date(rows: &[OrderRow], start: NaiveDate, end: NaiveDate) -> Vec<OrderRow> {
    rows.iter()
        .filter(|row| date_in_range(row, start, end))
        .cloned()
        .collect()
}

/// Exact-match filter on the status field, order preserved.
pub fn filter_by_status(rows: &[OrderRow], status: &OrderStatus) -> Vec<OrderRow> {
    rows.iter()
        .filter(|row| row.status == *status)
        .cloned()
        .collect()
}

/// Keeps rows whose warehouse is in the allowed set, order preserved.
pub fn filter_by_warehouses(rows: &[OrderRow], allowed: &HashSet<String>) -> Vec<OrderRow> {
    rows.iter()
        .filter(|row| allowed.contains(&row.warehouse))
        .cloned()
        .collect()
}

/// Applies the date bound once and derives the returned / issued / working
/// sets from the same bounded rows.
pub fn partition(
    rows: &[OrderRow],
    start: NaiveDate,
    end: NaiveDate,
    allowed_warehouses: &HashSet<String>,
) -> FilteredSets {
    let bounded: Vec<&OrderRow> = rows
        .iter()
        .filter(|row| date_in_range(row, start, end))
        .collect();

    let mut sets = FilteredSets::default();
    for row in bounded {
        match row.status {
            OrderStatus::Returned => sets.returned.push(row.clone()),
            OrderStatus::Issued => {
                sets.issued.push(row.clone());
                if allowed_warehouses.contains(&row.warehouse) {
                    sets.working.push(row.clone());
                }
            }
            OrderStatus::Other(_) => {}
        }
    }

    tracing::debug!(
        returned = sets.returned.len(),
        issued = sets.issued.len(),
        working = sets.working.len(),
        "Partitioned date-bounded rows."
    );

    sets
}

/// All distinct warehouses present in the given rows, first-seen order,
/// blank names excluded. Used as the default warehouse selection.
pub fn warehouses_present(rows: &[OrderRow]) -> Vec<String> {
    let mut seen = HashSet::new();
    rows.iter()
        .filter(|row| !row.warehouse.is_empty())
        .filter(|row| seen.insert(row.warehouse.clone()))
        .map(|row| row.warehouse.clone())
        .collect()
}

/// The `[min, max]` span of parsed order dates, `None` when no row has one.
/// Used as the default date range.
pub fn date_span(rows: &[OrderRow]) -> Option<(NaiveDate, NaiveDate)> {
    let mut dates = rows.iter().filter_map(|row| row.order_date).map(|dt| dt.date());

    let first = dates.next()?;
    let (min, max) = dates.fold((first, first), |(min, max), date| {
        (min.min(date), max.max(date))
    });
    Some((min, max))
}

fn date_in_range(row: &OrderRow, start: NaiveDate, end: NaiveDate) -> bool {
    match row.order_date {
        Some(dt) => {
            let date = dt.date();
            date >= start && date <= end
        }
        None => false,
    }
}
