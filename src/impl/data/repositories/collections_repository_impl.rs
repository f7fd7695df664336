use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::datasources::{
        records_csv_datasource::RecordsCsvDatasourceImpl, records_datasource::RecordsDatasource,
        records_json_datasource::RecordsJsonDatasourceImpl,
    },
    domain::repositories::collections_repository::CollectionsRepository,
    entities::{
        CollectionSource, CollectionSources, DashboardCollections, EntityKind, Record,
        RelatedCollections,
    },
};

pub(crate) struct CollectionsRepositoryImpl<
    DS1 = RecordsJsonDatasourceImpl, // Default.
    DS2 = RecordsCsvDatasourceImpl,  // Default.
> where
    DS1: RecordsDatasource,
    DS2: RecordsDatasource,
{
    json_datasource: DS1,
    csv_datasource: DS2,
}

impl<DS1, DS2> CollectionsRepositoryImpl<DS1, DS2>
where
    DS1: RecordsDatasource,
    DS2: RecordsDatasource,
{
    fn load_string(
        &self,
        kind: EntityKind,
        source: CollectionSource<&str>,
    ) -> Result<Vec<Record>, ServerError> {
        match source {
            CollectionSource::Json(s) => self.json_datasource.from_string(kind, s),
            CollectionSource::Csv(s) => self.csv_datasource.from_string(kind, s),
            CollectionSource::Empty => Ok(Vec::new()),
        }
    }

    async fn load_file<P>(
        &self,
        kind: EntityKind,
        source: CollectionSource<P>,
    ) -> Result<Vec<Record>, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        match source {
            CollectionSource::Json(p) => self.json_datasource.from_file(kind, p).await,
            CollectionSource::Csv(p) => self.csv_datasource.from_file(kind, p).await,
            CollectionSource::Empty => Ok(Vec::new()),
        }
    }
}

#[async_trait]
impl<DS1, DS2> CollectionsRepository for CollectionsRepositoryImpl<DS1, DS2>
where
    DS1: RecordsDatasource,
    DS2: RecordsDatasource,
{
    fn from_string(
        &self,
        kind: EntityKind,
        sources: CollectionSources<&str>,
    ) -> Result<DashboardCollections, ServerError> {
        Ok(DashboardCollections {
            records: self.load_string(kind, sources.records)?,
            related: RelatedCollections {
                projects: self.load_string(EntityKind::Project, sources.projects)?,
                clients: self.load_string(EntityKind::Client, sources.clients)?,
            },
        })
    }

    async fn from_file<P>(
        &self,
        kind: EntityKind,
        sources: CollectionSources<P>,
    ) -> Result<DashboardCollections, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let CollectionSources {
            records,
            projects,
            clients,
        } = sources;
        let (records, projects, clients) = futures::try_join!(
            self.load_file(kind, records),
            self.load_file(EntityKind::Project, projects),
            self.load_file(EntityKind::Client, clients),
        )?;
        tracing::debug!(
            %kind,
            records = records.len(),
            projects = projects.len(),
            clients = clients.len(),
            "loaded collections"
        );
        Ok(DashboardCollections {
            records,
            related: RelatedCollections { projects, clients },
        })
    }
}

impl CollectionsRepositoryImpl {
    pub(crate) fn new() -> Self {
        CollectionsRepositoryImpl {
            json_datasource: RecordsJsonDatasourceImpl::new(),
            csv_datasource: RecordsCsvDatasourceImpl::new(),
        }
    }
}
