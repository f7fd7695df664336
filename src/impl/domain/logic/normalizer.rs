use std::{borrow::Cow, str::FromStr as _};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::Value;

use crate::{
    data::models::{amount_model::AmountModel, iso_date_model::ISODateModel},
    entities::{EntityKind, Field, FieldDefault, Record, NOT_SET},
};

/// Reads semantic fields off raw records of one entity kind, preferring the
/// canonical key, then the legacy alias, then the field default. Never fails.
#[derive(Debug, Clone, Copy)]
pub struct Normalizer {
    kind: EntityKind,
}

impl Normalizer {
    pub fn new(kind: EntityKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// The raw value backing `field`, if either key holds a non-null value.
    pub fn lookup<'a>(&self, record: &'a Record, field: Field) -> Option<&'a Value> {
        let alias = self.kind.alias(field)?;
        [alias.canonical, alias.legacy]
            .into_iter()
            .filter_map(|key| record.get(key))
            .find(|v| !v.is_null())
    }

    /// Like `lookup`, but substitutes the documented default.
    pub fn resolve<'a>(&self, record: &'a Record, field: Field) -> Cow<'a, Value> {
        match self.lookup(record, field) {
            Some(v) => Cow::Borrowed(v),
            None => Cow::Owned(match self.kind.default_for(field) {
                FieldDefault::Text(s) => Value::String(s.to_string()),
                FieldDefault::ZeroAmount => Value::from(0),
                FieldDefault::NotSet => Value::String(NOT_SET.to_string()),
            }),
        }
    }

    pub fn text(&self, record: &Record, field: Field) -> String {
        match self.lookup(record, field) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            _ => self.default_text(field),
        }
    }

    pub fn amount(&self, record: &Record, field: Field) -> Decimal {
        self.lookup(record, field)
            .and_then(|v| match AmountModel::try_from(v) {
                Ok(a) => Some(a.into()),
                Err(_) => {
                    tracing::trace!(
                        kind = %self.kind,
                        ?field,
                        value = %v,
                        "unparsable amount, using zero"
                    );
                    None
                }
            })
            .unwrap_or(Decimal::ZERO)
    }

    /// `None` when the field is missing or not a recognisable date; display
    /// code renders that as "Not set".
    pub fn date(&self, record: &Record, field: Field) -> Option<NaiveDate> {
        match self.lookup(record, field)? {
            Value::String(s) => ISODateModel::from_str(s).ok().map(Into::into),
            _ => None,
        }
    }

    /// Lower-cased status, or the entity's default status.
    pub fn status(&self, record: &Record) -> String {
        let raw = self.text(record, Field::Status);
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            self.default_text(Field::Status)
        } else {
            trimmed.to_lowercase()
        }
    }

    fn default_text(&self, field: Field) -> String {
        match self.kind.default_for(field) {
            FieldDefault::Text(s) => s.to_string(),
            FieldDefault::ZeroAmount => "0".to_string(),
            FieldDefault::NotSet => NOT_SET.to_string(),
        }
    }
}
