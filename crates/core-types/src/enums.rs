use serde::{Deserialize, Serialize};
use std::fmt;

/// The delivery status of an order line, as reported by the marketplace.
///
/// Only `Issued` and `Returned` carry meaning for the profitability pipeline;
/// every other status string is preserved verbatim in `Other` so that a
/// round-trip through normalization is lossless.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    /// The order was handed to the customer ("Выдан").
    Issued,
    /// The order was returned by the customer ("Возврат").
    Returned,
    /// Any other marketplace status, passed through unchanged.
    Other(String),
}

impl OrderStatus {
    /// Parses a raw marketplace status string.
    pub fn from_raw(raw: &str) -> Self {
        match raw.trim() {
            "Выдан" => OrderStatus::Issued,
            "Возврат" => OrderStatus::Returned,
            other => OrderStatus::Other(other.to_string()),
        }
    }

    /// Returns the original marketplace status string.
    pub fn as_str(&self) -> &str {
        match self {
            OrderStatus::Issued => "Выдан",
            OrderStatus::Returned => "Возврат",
            OrderStatus::Other(s) => s,
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
