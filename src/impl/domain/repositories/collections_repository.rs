use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::entities::{CollectionSources, DashboardCollections, EntityKind};

#[async_trait]
pub trait CollectionsRepository: Send + Sync {
    fn from_string(
        &self,
        kind: EntityKind,
        sources: CollectionSources<&str>,
    ) -> Result<DashboardCollections, ServerError>;

    /// Reads the record collection and both related collections
    /// concurrently; fails if any of them fails.
    async fn from_file<P>(
        &self,
        kind: EntityKind,
        sources: CollectionSources<P>,
    ) -> Result<DashboardCollections, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}
