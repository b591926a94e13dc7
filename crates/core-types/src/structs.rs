use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::enums::OrderStatus;

/// One normalized order line from the marketplace export.
///
/// Field names are canonical; the importer is responsible for mapping the
/// marketplace's raw column headers onto this shape. `order_date` is `None`
/// when the source cell could not be parsed — such rows are excluded from
/// every date-bounded view but are never a reason to abort the import.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRow {
    pub order_date: Option<NaiveDateTime>,
    pub product_name: String,
    /// The article code — the join key between order rows and cost entries.
    pub article: String,
    /// Gross sale amount for the line, in tenge.
    pub amount: Decimal,
    pub status: OrderStatus,
    pub quantity: u32,
    /// Delivery cost charged to the seller by the marketplace, per unit.
    pub shipping_cost: Decimal,
    /// Canonical warehouse display name (raw transfer code when unmapped).
    pub warehouse: String,
}

/// An `OrderRow` joined with the operator's unit cost and the computed margin.
///
/// Derived rows are transient: they are recomputed on every pipeline run and
/// never persisted independently of their source rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedRow {
    pub row: OrderRow,
    /// Unit cost from the cost ledger, `0` when the operator has not set one.
    pub unit_cost: Decimal,
    /// Net margin for the line, see `MarginCalculator` for the formula.
    pub margin: Decimal,
}

/// One (article, product name, warehouse) group of the profitability summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub article: String,
    pub product_name: String,
    pub warehouse: String,
    /// Total units ordered across the group.
    pub total_orders: u64,
    /// Total gross sale amount across the group.
    pub total_sales: Decimal,
    /// Arithmetic mean of `unit_cost` over the group's rows (unweighted).
    pub avg_cost: Decimal,
    /// Total computed margin across the group.
    pub total_margin: Decimal,
}

/// Headline statistics over the date-bounded row set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesStats {
    /// Number of returned order lines.
    pub returns_count: usize,
    /// Total gross amount of returned lines.
    pub returns_amount: Decimal,
    /// Total gross amount of issued lines (turnover).
    pub turnover: Decimal,
}

impl SalesStats {
    /// Creates a zeroed-out statistics block.
    pub fn new() -> Self {
        Self {
            returns_count: 0,
            returns_amount: Decimal::ZERO,
            turnover: Decimal::ZERO,
        }
    }
}

impl Default for SalesStats {
    fn default() -> Self {
        Self::new()
    }
}
