use chrono::{DateTime, Duration, Utc};

use crate::entities::{DashboardConfig, FreshnessTier};

/// Buckets the age of the last successful sync.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FreshnessClassifier {
    fresh_within: Duration,
    stale_within: Duration,
}

impl FreshnessClassifier {
    pub(crate) fn new(config: &DashboardConfig) -> Self {
        Self {
            fresh_within: config.fresh_within,
            stale_within: config.stale_within,
        }
    }

    /// Age of `then` relative to `now`. Timestamps in the future (clock skew
    /// between client and sync service) count as zero.
    pub(crate) fn age(then: DateTime<Utc>, now: DateTime<Utc>) -> Duration {
        (now - then).max(Duration::zero())
    }

    pub(crate) fn tier(
        &self,
        last_sync: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> FreshnessTier {
        let Some(last_sync) = last_sync else {
            return FreshnessTier::Unknown;
        };
        let age = Self::age(last_sync, now);
        if age < self.fresh_within {
            FreshnessTier::Fresh
        } else if age < self.stale_within {
            FreshnessTier::Stale
        } else {
            FreshnessTier::VeryStale
        }
    }
}
