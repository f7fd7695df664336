use chrono::Duration;
use iso_currency::Currency;

/// Tunables for derivation and display. Load from RON through
/// `BusinessDashboardUtil::from_config_string` / `from_config_file`, or start
/// from `Default`.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub currency: Currency,
    /// Last sync younger than this is `Fresh`.
    pub fresh_within: Duration,
    /// Last sync younger than this (and not fresh) is `Stale`; anything older
    /// is `VeryStale`.
    pub stale_within: Duration,
    pub unknown_project_label: String,
    pub unknown_client_label: String,
}

pub(crate) const DEFAULT_FRESH_WITHIN_HOURS: i64 = 4;
pub(crate) const DEFAULT_STALE_WITHIN_HOURS: i64 = 8;
pub(crate) const DEFAULT_UNKNOWN_PROJECT_LABEL: &str = "Unknown Project";
pub(crate) const DEFAULT_UNKNOWN_CLIENT_LABEL: &str = "Unknown Client";

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            currency: Currency::USD,
            fresh_within: Duration::hours(DEFAULT_FRESH_WITHIN_HOURS),
            stale_within: Duration::hours(DEFAULT_STALE_WITHIN_HOURS),
            unknown_project_label: DEFAULT_UNKNOWN_PROJECT_LABEL.to_string(),
            unknown_client_label: DEFAULT_UNKNOWN_CLIENT_LABEL.to_string(),
        }
    }
}
