//! # Cost Ledger
//!
//! The operator-maintained mapping from article code to unit cost. This is
//! the one piece of session state in the system; it is modeled as an owned
//! value with an explicit get/set contract so the calculation crates can
//! read it without any hidden global lookup.

pub mod cost_ledger;
pub mod error;

// Re-export the key components to create a clean, public-facing API.
pub use cost_ledger::{CostLedger, KnownProduct};
pub use error::LedgerError;
