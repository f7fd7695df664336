use std::path::Path;

use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    entities::{EntityKind, Record},
    errors::ReadError,
};

#[async_trait]
pub(crate) trait RecordsDatasource: Send + Sync {
    fn from_string(&self, kind: EntityKind, s: &str) -> Result<Vec<Record>, ServerError>;

    async fn from_file<P>(&self, kind: EntityKind, path: P) -> Result<Vec<Record>, ServerError>
    where
        P: AsRef<Path> + Send,
    {
        let s = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ReadError::with_debug(&e))?;
        self.from_string(kind, &s)
    }
}
