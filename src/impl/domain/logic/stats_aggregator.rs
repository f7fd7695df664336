use rust_decimal::Decimal;

use crate::entities::{EntityKind, Field, InvoiceStatus, Record, Stats};

use super::normalizer::Normalizer;

pub struct StatsAggregator {
    normalizer: Normalizer,
}

impl StatsAggregator {
    pub fn new() -> Self {
        Self {
            normalizer: Normalizer::new(EntityKind::Invoice),
        }
    }

    /// Reduces the full invoice collection (independent of any search term)
    /// into summary stats. Statuses outside the fixed enumeration count
    /// towards `total_count` only.
    pub fn compute_stats(&self, records: &[Record]) -> Stats {
        let stats = records.iter().fold(Stats::default(), |mut stats, record| {
            let total = self.normalizer.amount(record, Field::Total);
            let paid = self.normalizer.amount(record, Field::Paid);

            stats.total_count += 1;
            if let Some(status) = InvoiceStatus::parse(&self.normalizer.status(record)) {
                stats.by_status.increment(status);
            }
            // Saturating: amounts near the Decimal range clamp instead of panicking.
            stats.total_amount = stats.total_amount.saturating_add(total);
            stats.paid_amount = stats.paid_amount.saturating_add(paid);
            stats.outstanding = stats
                .outstanding
                .saturating_add(total.saturating_sub(paid).max(Decimal::ZERO));
            stats
        });

        tracing::debug!(
            count = stats.total_count,
            total = %stats.total_amount,
            outstanding = %stats.outstanding,
            "computed invoice stats"
        );
        stats
    }
}

impl Default for StatsAggregator {
    fn default() -> Self {
        Self::new()
    }
}
