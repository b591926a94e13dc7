pub mod enums;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::OrderStatus;
pub use structs::{DerivedRow, OrderRow, SalesStats, SummaryRow};
