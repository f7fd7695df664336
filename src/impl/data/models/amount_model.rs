use std::{str::FromStr, sync::LazyLock};

use fractic_server_error::ServerError;
use regex::Regex;
use rust_decimal::Decimal;
use serde_json::Value;

use crate::errors::InvalidAmount;

/// Anything that isn't part of a plain decimal number (currency symbols,
/// thousands separators, whitespace).
static NON_NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9.\-]").expect("hardcoded regex should be valid"));

/// Plain scientific notation (ex. 1.5e3, -2E-2), parsed as-is rather than
/// having the exponent marker stripped with the other non-numeric characters.
static SCIENTIFIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-?[0-9]*\.?[0-9]+[eE][+\-]?[0-9]+$").expect("hardcoded regex should be valid")
});

#[derive(Debug)]
pub(crate) struct AmountModel(pub Decimal);

impl FromStr for AmountModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let is_negative = raw.starts_with('(') && raw.ends_with(')');
        let inner = raw.trim_matches(|c| c == '(' || c == ')').trim();
        let amount = if SCIENTIFIC.is_match(inner) {
            Decimal::from_scientific(&inner.to_lowercase())
                .map_err(|e| InvalidAmount::with_debug(s, &e))?
        } else {
            let numeric_part = NON_NUMERIC.replace_all(raw, "");
            if numeric_part.is_empty() {
                return Err(InvalidAmount::new(s));
            }
            Decimal::from_str(&numeric_part).map_err(|e| InvalidAmount::with_debug(s, &e))?
        };
        Ok(AmountModel(if is_negative { -amount } else { amount }))
    }
}

impl TryFrom<&Value> for AmountModel {
    type Error = ServerError;
    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            // Go through the textual form so that e.g. 0.1 stays exactly 0.1.
            Value::Number(n) => {
                let text = n.to_string();
                Decimal::from_str(&text)
                    .or_else(|_| Decimal::from_scientific(&text))
                    .map(AmountModel)
                    .map_err(|e| InvalidAmount::with_debug(&text, &e))
            }
            Value::String(s) => AmountModel::from_str(s),
            other => Err(InvalidAmount::new(&other.to_string())),
        }
    }
}

impl From<AmountModel> for Decimal {
    fn from(model: AmountModel) -> Self {
        model.0
    }
}
