use std::{fs, path::Path};

use fractic_server_error::ServerError;

use crate::{
    data::models::config_model::DashboardConfigModel,
    entities::DashboardConfig,
    errors::{InvalidRon, ReadError},
};

pub(crate) trait ConfigRonDatasource {
    fn from_string(&self, s: &str) -> Result<DashboardConfig, ServerError>;

    fn from_file<P>(&self, path: P) -> Result<DashboardConfig, ServerError>
    where
        P: AsRef<Path>;
}

pub(crate) struct ConfigRonDatasourceImpl;

impl ConfigRonDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl ConfigRonDatasource for ConfigRonDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<DashboardConfig, ServerError> {
        let model: DashboardConfigModel =
            ron::from_str(s).map_err(|e| InvalidRon::with_debug("DashboardConfig", &e))?;
        model.try_into()
    }

    fn from_file<P>(&self, path: P) -> Result<DashboardConfig, ServerError>
    where
        P: AsRef<Path>,
    {
        self.from_string(&fs::read_to_string(path).map_err(|e| ReadError::with_debug(&e))?)
    }
}
