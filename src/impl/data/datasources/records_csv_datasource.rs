use fractic_server_error::ServerError;
use serde_json::Value;

use crate::{
    entities::{EntityKind, Record},
    errors::InvalidCsv,
};

use super::records_datasource::RecordsDatasource;

/// Spreadsheet exports: first row is the header ("Invoice Number",
/// "Total Amount", ...), every cell is kept as a string. Blank cells are left
/// out so the normalizer falls through to the next alias or the default.
pub(crate) struct RecordsCsvDatasourceImpl;

impl RecordsCsvDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl RecordsDatasource for RecordsCsvDatasourceImpl {
    fn from_string(&self, kind: EntityKind, s: &str) -> Result<Vec<Record>, ServerError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(s.as_bytes());
        let headers = reader
            .headers()
            .map_err(|e| InvalidCsv::with_debug(kind.collection_name(), &e))?
            .clone();
        reader
            .records()
            .map(|r| {
                r.map_err(|e| InvalidCsv::with_debug(kind.collection_name(), &e))
                    .map(|r| {
                        headers
                            .iter()
                            .zip(r.iter())
                            .filter(|(header, cell)| !header.is_empty() && !cell.is_empty())
                            .fold(Record::new(), |record, (header, cell)| {
                                record.with(header, Value::String(cell.to_string()))
                            })
                    })
            })
            .collect()
    }
}
