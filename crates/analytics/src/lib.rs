//! # Profitability Analytics Engine
//!
//! This crate provides the pure calculation core of the order analysis
//! pipeline: filtering, margin derivation and aggregation.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of
//!   spreadsheets, files or terminals. It depends only on `core-types` and
//!   the `ledger` read API.
//! - **Explicit data flow:** every function takes its inputs as arguments
//!   and returns fresh collections. There is no hidden state and no
//!   reactivity; the caller decides when to recompute.
//!
//! ## Public API
//!
//! - `filter`: date / status / warehouse predicates and the three-way
//!   `partition` into returned / issued / working sets.
//! - `MarginCalculator`: joins rows with unit costs and computes margin.
//! - `aggregate`: the grouped summary and the ranked top-N view.
//! - `compute_stats`: the returns/turnover headline numbers.

// Declare the modules that constitute this crate.
pub mod aggregate;
pub mod error;
pub mod filter;
pub mod margin;
pub mod stats;

// Re-export the key components to create a clean, public-facing API.
pub use aggregate::{summarize, top_n, SummaryMetric};
pub use error::AnalyticsError;
pub use filter::{
    date_span, filter_by_date, filter_by_status, filter_by_warehouses, partition,
    warehouses_present, FilteredSets,
};
pub use margin::MarginCalculator;
pub use stats::compute_stats;
