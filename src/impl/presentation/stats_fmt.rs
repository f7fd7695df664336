use iso_currency::Currency;

use crate::entities::{FormattedStats, Stats};

use super::utils::format_amount;

impl Stats {
    pub fn formatted(&self, currency: Currency) -> FormattedStats {
        FormattedStats {
            total_amount: format_amount(self.total_amount, currency),
            paid_amount: format_amount(self.paid_amount, currency),
            outstanding: format_amount(self.outstanding, currency),
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    #[test]
    fn formats_every_amount() {
        let stats = Stats {
            total_amount: Decimal::new(150_000, 2),
            paid_amount: Decimal::new(100_000, 2),
            outstanding: Decimal::new(50_000, 2),
            ..Default::default()
        };
        assert_eq!(
            stats.formatted(Currency::USD),
            FormattedStats {
                total_amount: "$1,500.00".to_string(),
                paid_amount: "$1,000.00".to_string(),
                outstanding: "$500.00".to_string(),
            }
        );
    }
}
