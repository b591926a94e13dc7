//! # Order Export Importer
//!
//! Reads the marketplace's .xlsx order export and normalizes it into the
//! canonical `OrderRow` shape used by the rest of the system.
//!
//! ## Architectural Principles
//!
//! - **Thin I/O edge:** `reader` is the only module touching the filesystem.
//!   The actual column mapping, date parsing and warehouse renaming live in
//!   `normalizer`, which is a pure function over raw cells and therefore
//!   trivially testable.
//! - **Fail fast on schema, never on data:** a missing required column aborts
//!   the import before any computation; a malformed date in a single row
//!   merely becomes `None` on that row.

pub mod error;
pub mod normalizer;
pub mod reader;
pub mod schema;

// Re-export the key components to create a clean, public-facing API.
pub use error::ImportError;
pub use normalizer::{normalize, ColumnMap};
pub use reader::load_orders;
