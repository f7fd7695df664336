use fractic_server_error::ServerError;
use serde_json::Value;

use crate::{
    entities::{EntityKind, Record},
    errors::InvalidJson,
};

use super::records_datasource::RecordsDatasource;

/// API payloads: a JSON array of objects.
///
/// Anything that parses but isn't an array is treated as an empty
/// collection, and non-object rows are dropped; both are logged.
pub(crate) struct RecordsJsonDatasourceImpl;

impl RecordsJsonDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl RecordsDatasource for RecordsJsonDatasourceImpl {
    fn from_string(&self, kind: EntityKind, s: &str) -> Result<Vec<Record>, ServerError> {
        let payload: Value = serde_json::from_str(s)
            .map_err(|e| InvalidJson::with_debug(kind.collection_name(), &e))?;
        let rows = match payload {
            Value::Array(rows) => rows,
            other => {
                tracing::warn!(
                    %kind,
                    payload_type = json_type(&other),
                    "payload is not an array, treating as empty"
                );
                return Ok(Vec::new());
            }
        };
        let total = rows.len();
        let records: Vec<Record> = rows.into_iter().filter_map(Record::from_value).collect();
        if records.len() < total {
            tracing::warn!(%kind, dropped = total - records.len(), "dropped non-object rows");
        }
        Ok(records)
    }
}

fn json_type(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Result<Vec<Record>, ServerError> {
        RecordsJsonDatasourceImpl::new().from_string(EntityKind::Invoice, s)
    }

    #[test]
    fn parses_array_of_objects_in_order() {
        let records = parse(r#"[{"id": 1}, {"ID": "2", "Status": "paid"}]"#).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("id"), Some(&serde_json::json!(1)));
        assert_eq!(records[1].get("Status"), Some(&serde_json::json!("paid")));
    }

    #[test]
    fn non_array_payloads_are_empty() {
        assert!(parse("null").unwrap().is_empty());
        assert!(parse(r#"{"error": "nope"}"#).unwrap().is_empty());
        assert!(parse("42").unwrap().is_empty());
    }

    #[test]
    fn non_object_rows_are_dropped() {
        let records = parse(r#"[1, {"id": 3}, "x", null]"#).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(parse("[{").is_err());
    }
}
