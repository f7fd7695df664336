use chrono::{DateTime, Duration, Utc};

use crate::{
    domain::logic::freshness::FreshnessClassifier,
    entities::{DashboardConfig, Freshness, FreshnessTier, SyncMetadata, SyncStatus, SyncStatusView},
};

const NEVER_SYNCED: &str = "Never synced";
const NOT_SCHEDULED: &str = "Not scheduled";
const DUE_NOW: &str = "Due now";

/// Freshness of the last sync using the default 4h / 8h tier thresholds.
///
/// Labels read "N minutes ago" under an hour, "N hours ago" under a day, and
/// "N days ago" beyond that. Without a timestamp the label is "Never synced"
/// and the tier `Unknown`, whatever `now` is.
pub fn sync_freshness(last_sync: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Freshness {
    SyncStatusPresenter::new(&DashboardConfig::default()).freshness(last_sync, now)
}

pub struct SyncStatusPresenter {
    classifier: FreshnessClassifier,
}

impl SyncStatusPresenter {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            classifier: FreshnessClassifier::new(config),
        }
    }

    pub fn freshness(&self, last_sync: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Freshness {
        let tier = self.classifier.tier(last_sync, now);
        let label = match last_sync {
            Some(t) => format!("{} ago", span(FreshnessClassifier::age(t, now))),
            None => NEVER_SYNCED.to_string(),
        };
        Freshness { label, tier }
    }

    pub fn present(&self, metadata: &SyncMetadata, now: DateTime<Utc>) -> SyncStatusView {
        SyncStatusView {
            status: metadata.status,
            status_label: status_label(metadata.status, metadata.error.as_deref()),
            last_sync: self.freshness(metadata.last_sync_time, now),
            next_sync_label: next_sync_label(metadata.next_sync_time, now),
        }
    }
}

fn status_label(status: SyncStatus, error: Option<&str>) -> String {
    match (status, error.map(str::trim).filter(|e| !e.is_empty())) {
        (SyncStatus::Idle, _) => "Idle".to_string(),
        (SyncStatus::Syncing, _) => "Syncing…".to_string(),
        (SyncStatus::Success, _) => "Synced".to_string(),
        (SyncStatus::Error, Some(e)) => format!("Sync failed: {}", e),
        (SyncStatus::Error, None) => "Sync failed".to_string(),
    }
}

fn next_sync_label(next_sync: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    match next_sync {
        None => NOT_SCHEDULED.to_string(),
        Some(t) if t <= now => DUE_NOW.to_string(),
        Some(t) => format!("in {}", span(t - now)),
    }
}

/// "N minute(s)" under an hour, "N hour(s)" under a day, else "N day(s)".
fn span(d: Duration) -> String {
    if d < Duration::hours(1) {
        plural(d.num_minutes(), "minute")
    } else if d < Duration::days(1) {
        plural(d.num_hours(), "hour")
    } else {
        plural(d.num_days(), "day")
    }
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", n, unit)
    }
}

impl FreshnessTier {
    /// Badge colour hint for the tier.
    pub fn badge(&self) -> &'static str {
        match self {
            FreshnessTier::Fresh => "green",
            FreshnessTier::Stale => "amber",
            FreshnessTier::VeryStale => "red",
            FreshnessTier::Unknown => "grey",
        }
    }
}
