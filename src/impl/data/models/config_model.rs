use chrono::Duration;
use fractic_server_error::ServerError;
use iso_currency::Currency;

use crate::{
    entities::{
        DashboardConfig, DEFAULT_FRESH_WITHIN_HOURS, DEFAULT_STALE_WITHIN_HOURS,
        DEFAULT_UNKNOWN_CLIENT_LABEL, DEFAULT_UNKNOWN_PROJECT_LABEL,
    },
    errors::{InvalidFreshnessThresholds, InvalidIsoCurrencyCode},
};

/// On-disk shape of the dashboard config. Every field is optional; missing
/// ones take the `DashboardConfig::default()` values.
///
/// ```ron
/// (
///     currency: "EUR",
///     fresh_within_hours: 2,
///     stale_within_hours: 6,
///     unknown_client_label: "No client",
/// )
/// ```
#[derive(Debug, serde_derive::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct DashboardConfigModel {
    currency: String,
    fresh_within_hours: i64,
    stale_within_hours: i64,
    unknown_project_label: String,
    unknown_client_label: String,
}

impl Default for DashboardConfigModel {
    fn default() -> Self {
        Self {
            currency: Currency::USD.code().to_string(),
            fresh_within_hours: DEFAULT_FRESH_WITHIN_HOURS,
            stale_within_hours: DEFAULT_STALE_WITHIN_HOURS,
            unknown_project_label: DEFAULT_UNKNOWN_PROJECT_LABEL.to_string(),
            unknown_client_label: DEFAULT_UNKNOWN_CLIENT_LABEL.to_string(),
        }
    }
}

impl TryFrom<DashboardConfigModel> for DashboardConfig {
    type Error = ServerError;
    fn try_from(model: DashboardConfigModel) -> Result<DashboardConfig, Self::Error> {
        let currency = Currency::from_code(model.currency.trim())
            .ok_or_else(|| InvalidIsoCurrencyCode::new(&model.currency))?;
        if model.fresh_within_hours <= 0 || model.fresh_within_hours >= model.stale_within_hours {
            return Err(InvalidFreshnessThresholds::new(
                model.fresh_within_hours,
                model.stale_within_hours,
            ));
        }
        let invalid_thresholds =
            || InvalidFreshnessThresholds::new(model.fresh_within_hours, model.stale_within_hours);
        let fresh_within =
            Duration::try_hours(model.fresh_within_hours).ok_or_else(invalid_thresholds)?;
        let stale_within =
            Duration::try_hours(model.stale_within_hours).ok_or_else(invalid_thresholds)?;
        Ok(DashboardConfig {
            currency,
            fresh_within,
            stale_within,
            unknown_project_label: model.unknown_project_label,
            unknown_client_label: model.unknown_client_label,
        })
    }
}
