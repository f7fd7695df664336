use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::repositories::collections_repository_impl::CollectionsRepositoryImpl,
    domain::{
        logic::{filter_engine::FilterEngine, stats_aggregator::StatsAggregator},
        repositories::collections_repository::CollectionsRepository,
    },
    entities::{
        CollectionSources, DashboardCollections, DashboardConfig, DashboardQuery, EntityKind,
        InvoiceDashboard, Record,
    },
};

#[async_trait]
pub trait DashboardUsecase: Send + Sync {
    async fn invoices_from_string(
        &self,
        sources: CollectionSources<&str>,
        query: &DashboardQuery,
    ) -> Result<InvoiceDashboard, ServerError>;

    async fn invoices_from_file<P>(
        &self,
        sources: CollectionSources<P>,
        query: &DashboardQuery,
    ) -> Result<InvoiceDashboard, ServerError>
    where
        P: AsRef<std::path::Path> + Send;

    async fn licensed_businesses_from_string(
        &self,
        sources: CollectionSources<&str>,
        query: &DashboardQuery,
    ) -> Result<Vec<Record>, ServerError>;

    async fn licensed_businesses_from_file<P>(
        &self,
        sources: CollectionSources<P>,
        query: &DashboardQuery,
    ) -> Result<Vec<Record>, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}

pub(crate) struct DashboardUsecaseImpl<
    R1 = CollectionsRepositoryImpl, // Default.
> where
    R1: CollectionsRepository,
{
    collections_repository: R1,
    config: DashboardConfig,
}

#[async_trait]
impl<R1> DashboardUsecase for DashboardUsecaseImpl<R1>
where
    R1: CollectionsRepository,
{
    async fn invoices_from_string(
        &self,
        sources: CollectionSources<&str>,
        query: &DashboardQuery,
    ) -> Result<InvoiceDashboard, ServerError> {
        let collections = self
            .collections_repository
            .from_string(EntityKind::Invoice, sources)?;
        Ok(self.derive_invoices(&collections, query))
    }

    async fn invoices_from_file<P>(
        &self,
        sources: CollectionSources<P>,
        query: &DashboardQuery,
    ) -> Result<InvoiceDashboard, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let collections = self
            .collections_repository
            .from_file(EntityKind::Invoice, sources)
            .await?;
        Ok(self.derive_invoices(&collections, query))
    }

    async fn licensed_businesses_from_string(
        &self,
        sources: CollectionSources<&str>,
        query: &DashboardQuery,
    ) -> Result<Vec<Record>, ServerError> {
        let collections = self
            .collections_repository
            .from_string(EntityKind::LicensedBusiness, sources)?;
        Ok(self.derive_licensed_businesses(&collections, query))
    }

    async fn licensed_businesses_from_file<P>(
        &self,
        sources: CollectionSources<P>,
        query: &DashboardQuery,
    ) -> Result<Vec<Record>, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let collections = self
            .collections_repository
            .from_file(EntityKind::LicensedBusiness, sources)
            .await?;
        Ok(self.derive_licensed_businesses(&collections, query))
    }
}

impl<R1> DashboardUsecaseImpl<R1>
where
    R1: CollectionsRepository,
{
    pub(crate) fn derive_invoices(
        &self,
        collections: &DashboardCollections,
        query: &DashboardQuery,
    ) -> InvoiceDashboard {
        let invoices = FilterEngine::new(EntityKind::Invoice, &self.config)
            .filter(
                &collections.records,
                &collections.related,
                query.status,
                &query.search,
            )
            .into_iter()
            .cloned()
            .collect();
        let stats = StatsAggregator::new().compute_stats(&collections.records);
        let formatted_stats = stats.formatted(self.config.currency);
        InvoiceDashboard {
            invoices,
            stats,
            formatted_stats,
        }
    }

    pub(crate) fn derive_licensed_businesses(
        &self,
        collections: &DashboardCollections,
        query: &DashboardQuery,
    ) -> Vec<Record> {
        FilterEngine::new(EntityKind::LicensedBusiness, &self.config)
            .filter(
                &collections.records,
                &collections.related,
                query.status,
                &query.search,
            )
            .into_iter()
            .cloned()
            .collect()
    }
}

impl DashboardUsecaseImpl {
    pub(crate) fn new(config: DashboardConfig) -> Self {
        DashboardUsecaseImpl {
            collections_repository: CollectionsRepositoryImpl::new(),
            config,
        }
    }
}
