use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Unit cost for article '{article}' must be non-negative, got {cost}")]
    NegativeCost { article: String, cost: Decimal },
}
