use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use fractic_server_error::ServerError;

use crate::errors::InvalidIsoDate;

/// Accepts plain ISO dates (API), full RFC 3339 / naive timestamps (API
/// `created_at`-style values), and US-style dates from spreadsheet exports.
#[derive(Debug)]
pub(crate) struct ISODateModel(NaiveDate);

impl FromStr for ISODateModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Ok(ISODateModel(d));
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(ISODateModel(dt.date_naive()));
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
            return Ok(ISODateModel(dt.date()));
        }
        NaiveDate::parse_from_str(s, "%m/%d/%Y")
            .map(ISODateModel)
            .map_err(|e| InvalidIsoDate::with_debug(s, &e))
    }
}

impl Into<NaiveDate> for ISODateModel {
    fn into(self) -> NaiveDate {
        self.0
    }
}
