use std::collections::HashSet;

use analytics::{compute_stats, partition, summarize, MarginCalculator};
use chrono::NaiveDate;
use core_types::{DerivedRow, OrderRow, SalesStats, SummaryRow};
use ledger::CostLedger;
use serde::{Deserialize, Serialize};

/// A consistent snapshot of one full pipeline run.
///
/// The bundle owns its tables, so a cost-ledger edit made after assembly can
/// never bleed into an already-assembled report: Summary and Detail always
/// reflect the same filter and ledger state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportBundle {
    /// One row per (article, product name, warehouse) group, default order.
    pub summary: Vec<SummaryRow>,
    /// One row per working-set order line, with cost and margin columns.
    pub detail: Vec<DerivedRow>,
    /// Returns and turnover over the same date-bounded rows.
    pub stats: SalesStats,
    /// The inclusive date range the bundle was computed for.
    pub period: (NaiveDate, NaiveDate),
}

/// Runs the explicit analysis pipeline:
/// partition → observe → derive → aggregate → stats.
///
/// This is the single entry point the caller invokes whenever any input
/// (rows, range, warehouses, costs) changes; nothing recomputes implicitly.
#[derive(Debug, Clone, Default)]
pub struct ReportAssembler {
    calculator: MarginCalculator,
}

impl ReportAssembler {
    pub fn new(calculator: MarginCalculator) -> Self {
        Self { calculator }
    }

    /// Assembles a report bundle for one date range and warehouse selection.
    ///
    /// The ledger is read once per run; its only mutation is recording the
    /// working set's products for the cost-entry list.
    pub fn assemble(
        &self,
        rows: &[OrderRow],
        start: NaiveDate,
        end: NaiveDate,
        allowed_warehouses: &HashSet<String>,
        costs: &mut CostLedger,
    ) -> ReportBundle {
        let sets = partition(rows, start, end, allowed_warehouses);
        costs.observe(&sets.working);

        let detail = self.calculator.derive(&sets.working, costs);
        let summary = summarize(&detail);
        let stats = compute_stats(&sets);

        tracing::debug!(
            summary_groups = summary.len(),
            detail_rows = detail.len(),
            "Assembled report bundle."
        );

        ReportBundle {
            summary,
            detail,
            stats,
            period: (start, end),
        }
    }
}
