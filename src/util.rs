use chrono::{DateTime, Utc};
use fractic_server_error::ServerError;
use rust_decimal::Decimal;

use crate::{
    data::datasources::config_ron_datasource::{ConfigRonDatasource as _, ConfigRonDatasourceImpl},
    domain::usecases::dashboard_usecase::{DashboardUsecase as _, DashboardUsecaseImpl},
    entities::{
        CollectionSources, DashboardCollections, DashboardConfig, DashboardQuery,
        InvoiceDashboard, Record, SyncMetadata, SyncStatusView,
    },
    errors::InvalidSyncMetadata,
    presentation::{sync_status_presenter::SyncStatusPresenter, utils::format_amount},
};

pub struct BusinessDashboardUtil {
    dashboard_usecase: DashboardUsecaseImpl,
    sync_presenter: SyncStatusPresenter,
    config: DashboardConfig,
}

impl BusinessDashboardUtil {
    pub fn new() -> Self {
        Self::with_config(DashboardConfig::default())
    }

    pub fn with_config(config: DashboardConfig) -> Self {
        Self {
            dashboard_usecase: DashboardUsecaseImpl::new(config.clone()),
            sync_presenter: SyncStatusPresenter::new(&config),
            config,
        }
    }

    /// Builds the util from RON config text (see `DashboardConfig`).
    pub fn from_config_string(ron: &str) -> Result<Self, ServerError> {
        Ok(Self::with_config(ConfigRonDatasourceImpl::new().from_string(ron)?))
    }

    pub fn from_config_file<P>(path: P) -> Result<Self, ServerError>
    where
        P: AsRef<std::path::Path>,
    {
        Ok(Self::with_config(ConfigRonDatasourceImpl::new().from_file(path)?))
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    // Invoices.
    // ---

    pub async fn invoices_from_string(
        &self,
        sources: CollectionSources<&str>,
        query: &DashboardQuery,
    ) -> Result<InvoiceDashboard, ServerError> {
        self.dashboard_usecase
            .invoices_from_string(sources, query)
            .await
    }

    pub async fn invoices_from_file<P>(
        &self,
        sources: CollectionSources<P>,
        query: &DashboardQuery,
    ) -> Result<InvoiceDashboard, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        self.dashboard_usecase
            .invoices_from_file(sources, query)
            .await
    }

    /// Derivation only, for callers that already hold the collections.
    pub fn invoices(
        &self,
        collections: &DashboardCollections,
        query: &DashboardQuery,
    ) -> InvoiceDashboard {
        self.dashboard_usecase.derive_invoices(collections, query)
    }

    // Licensed businesses.
    // ---

    pub async fn licensed_businesses_from_string(
        &self,
        sources: CollectionSources<&str>,
        query: &DashboardQuery,
    ) -> Result<Vec<Record>, ServerError> {
        self.dashboard_usecase
            .licensed_businesses_from_string(sources, query)
            .await
    }

    pub async fn licensed_businesses_from_file<P>(
        &self,
        sources: CollectionSources<P>,
        query: &DashboardQuery,
    ) -> Result<Vec<Record>, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        self.dashboard_usecase
            .licensed_businesses_from_file(sources, query)
            .await
    }

    pub fn licensed_businesses(
        &self,
        collections: &DashboardCollections,
        query: &DashboardQuery,
    ) -> Vec<Record> {
        self.dashboard_usecase
            .derive_licensed_businesses(collections, query)
    }

    // Sync status.
    // ---

    pub fn sync_status(&self, metadata: &SyncMetadata, now: DateTime<Utc>) -> SyncStatusView {
        self.sync_presenter.present(metadata, now)
    }

    /// Same as `sync_status`, reading the sync service's JSON shape
    /// (`{status, error, lastSyncTime, nextSyncTime}`).
    pub fn sync_status_from_json(
        &self,
        json: &str,
        now: DateTime<Utc>,
    ) -> Result<SyncStatusView, ServerError> {
        let metadata: SyncMetadata = serde_json::from_str(json)
            .map_err(|e| InvalidSyncMetadata::with_debug(&e.to_string(), &e))?;
        Ok(self.sync_status(&metadata, now))
    }

    // Formatting.
    // ---

    pub fn format_amount(&self, amount: Decimal) -> String {
        format_amount(amount, self.config.currency)
    }
}

impl Default for BusinessDashboardUtil {
    fn default() -> Self {
        Self::new()
    }
}
