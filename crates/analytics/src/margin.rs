use core_types::{DerivedRow, OrderRow};
use ledger::CostLedger;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// A stateless calculator deriving per-row margin from the cost ledger.
#[derive(Debug, Clone)]
pub struct MarginCalculator {
    /// The fraction of the gross amount the seller keeps after the
    /// marketplace commission. A domain parameter, not a universal constant.
    commission_rate: Decimal,
}

impl MarginCalculator {
    /// The marketplace's standard retention rate (17% commission).
    pub const DEFAULT_COMMISSION_RATE: Decimal = dec!(0.83);

    pub fn new(commission_rate: Decimal) -> Self {
        Self { commission_rate }
    }

    pub fn commission_rate(&self) -> Decimal {
        self.commission_rate
    }

    /// Joins each working-set row with its unit cost and computes the margin:
    ///
    /// `margin = amount * rate - unit_cost * quantity - shipping * quantity`
    ///
    /// With `quantity = 0` the cost and shipping terms vanish and the margin
    /// is exactly `amount * rate`.
    pub fn derive(&self, rows: &[OrderRow], costs: &CostLedger) -> Vec<DerivedRow> {
        rows.iter()
            .map(|row| {
                let unit_cost = costs.get(&row.article);
                let margin = self.margin_for(row, unit_cost);
                DerivedRow {
                    row: row.clone(),
                    unit_cost,
                    margin,
                }
            })
            .collect()
    }

    fn margin_for(&self, row: &OrderRow, unit_cost: Decimal) -> Decimal {
        let quantity = Decimal::from(row.quantity);
        row.amount * self.commission_rate
            - unit_cost * quantity
            - row.shipping_cost * quantity
    }
}

impl Default for MarginCalculator {
    fn default() -> Self {
        Self::new(Self::DEFAULT_COMMISSION_RATE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::OrderStatus;

    fn order(amount: Decimal, quantity: u32, shipping: Decimal) -> OrderRow {
        OrderRow {
            order_date: None,
            product_name: "Widget".to_string(),
            article: "A1".to_string(),
            amount,
            status: OrderStatus::Issued,
            quantity,
            shipping_cost: shipping,
            warehouse: "Алматы".to_string(),
        }
    }

    #[test]
    fn margin_formula_is_exact() {
        // 1000 * 0.83 - 200 * 2 - 50 * 2 = 330
        let mut costs = CostLedger::new();
        costs.set("A1", dec!(200)).unwrap();

        let rows = vec![order(dec!(1000), 2, dec!(50))];
        let derived = MarginCalculator::default().derive(&rows, &costs);

        assert_eq!(derived[0].unit_cost, dec!(200));
        assert_eq!(derived[0].margin, dec!(330));
    }

    #[test]
    fn zero_quantity_margin_is_commission_only() {
        let mut costs = CostLedger::new();
        costs.set("A1", dec!(9999)).unwrap();

        let rows = vec![order(dec!(1000), 0, dec!(500))];
        let derived = MarginCalculator::default().derive(&rows, &costs);

        assert_eq!(derived[0].margin, dec!(830));
    }

    #[test]
    fn missing_cost_defaults_to_zero() {
        let costs = CostLedger::new();
        let rows = vec![order(dec!(100), 1, dec!(10))];
        let derived = MarginCalculator::default().derive(&rows, &costs);

        assert_eq!(derived[0].unit_cost, Decimal::ZERO);
        assert_eq!(derived[0].margin, dec!(73)); // 100 * 0.83 - 10
    }

    #[test]
    fn commission_rate_is_configurable() {
        let costs = CostLedger::new();
        let rows = vec![order(dec!(100), 0, Decimal::ZERO)];

        let derived = MarginCalculator::new(dec!(0.9)).derive(&rows, &costs);
        assert_eq!(derived[0].margin, dec!(90));
    }
}
