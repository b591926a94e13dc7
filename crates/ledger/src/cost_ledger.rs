use std::collections::{HashMap, HashSet};

use core_types::OrderRow;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::LedgerError;

/// A product that can be offered to the operator for cost entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnownProduct {
    pub article: String,
    pub product_name: String,
}

/// The operator's per-article unit costs.
///
/// The ledger is an explicit, owned value: the pipeline reads it through
/// `get` and the UI layer writes it through `set`. Entries default to zero
/// until the operator supplies a cost and are never deleted automatically,
/// so costs entered once survive every recomputation within a session.
/// The ledger is session state only and is not persisted, so the observed
/// list and its dedup set always move together.
#[derive(Debug, Clone, Default)]
pub struct CostLedger {
    costs: HashMap<String, Decimal>,
    /// (article, name) pairs observed in the working set, first-seen order.
    observed: Vec<KnownProduct>,
    observed_articles: HashSet<String>,
}

impl CostLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the operator-declared unit cost for an article, or zero when
    /// no cost has been entered yet.
    pub fn get(&self, article: &str) -> Decimal {
        self.costs.get(article).copied().unwrap_or(Decimal::ZERO)
    }

    /// Sets the unit cost for an article.
    ///
    /// A negative cost is rejected and the previous value (if any) is kept —
    /// there is no partial mutation on the error path.
    pub fn set(&mut self, article: &str, cost: Decimal) -> Result<(), LedgerError> {
        if cost < Decimal::ZERO {
            return Err(LedgerError::NegativeCost {
                article: article.to_string(),
                cost,
            });
        }
        self.costs.insert(article.to_string(), cost);
        Ok(())
    }

    /// Records the products present in the working set so they become
    /// presentable for cost entry. Duplicates are dropped; first-seen order
    /// is preserved across calls.
    pub fn observe<'a>(&mut self, rows: impl IntoIterator<Item = &'a OrderRow>) {
        for row in rows {
            if self.observed_articles.insert(row.article.clone()) {
                self.observed.push(KnownProduct {
                    article: row.article.clone(),
                    product_name: row.product_name.clone(),
                });
            }
        }
    }

    /// The products observed so far, in first-seen order.
    pub fn known_products(&self) -> &[KnownProduct] {
        &self.observed
    }

    /// Filters the presentable product list with a case-insensitive substring
    /// match over article or name. A blank query returns everything. The
    /// underlying cost entries are never filtered — only the presentation.
    pub fn search(&self, query: &str) -> Vec<&KnownProduct> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.observed.iter().collect();
        }
        self.observed
            .iter()
            .filter(|p| {
                p.article.to_lowercase().contains(&needle)
                    || p.product_name.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Number of articles with an explicitly entered cost.
    pub fn len(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }
}
