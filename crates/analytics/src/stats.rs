use core_types::SalesStats;

use crate::filter::FilteredSets;

/// Computes the headline statistics shown alongside the summary: returns
/// count and amount, and total turnover over issued orders. All three come
/// from the same date-bounded partition, so they always describe one period.
pub fn compute_stats(sets: &FilteredSets) -> SalesStats {
    let mut stats = SalesStats::new();

    stats.returns_count = sets.returned.len();
    for row in &sets.returned {
        stats.returns_amount += row.amount;
    }
    for row in &sets.issued {
        stats.turnover += row.amount;
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::{OrderRow, OrderStatus};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn order(amount: Decimal, status: OrderStatus) -> OrderRow {
        OrderRow {
            order_date: None,
            product_name: "Widget".to_string(),
            article: "A1".to_string(),
            amount,
            status,
            quantity: 1,
            shipping_cost: Decimal::ZERO,
            warehouse: "Алматы".to_string(),
        }
    }

    #[test]
    fn stats_cover_returns_and_turnover() {
        let sets = FilteredSets {
            returned: vec![
                order(dec!(100), OrderStatus::Returned),
                order(dec!(250), OrderStatus::Returned),
            ],
            issued: vec![
                order(dec!(1000), OrderStatus::Issued),
                order(dec!(500), OrderStatus::Issued),
            ],
            working: vec![],
        };

        let stats = compute_stats(&sets);
        assert_eq!(stats.returns_count, 2);
        assert_eq!(stats.returns_amount, dec!(350));
        assert_eq!(stats.turnover, dec!(1500));
    }

    #[test]
    fn empty_partition_yields_zeroes() {
        let stats = compute_stats(&FilteredSets::default());
        assert_eq!(stats, SalesStats::new());
    }
}
