use chrono::NaiveDate;
use iso_currency::Currency;
use num_format::{Locale, ToFormattedString as _};
use rust_decimal::{prelude::ToPrimitive as _, Decimal, RoundingStrategy};

use crate::entities::NOT_SET;

/// Standard number decimal places for the given currency
/// (ex. JPY = 0, USD = 2).
fn decimal_places(currency: Currency) -> usize {
    currency.exponent().unwrap_or(0) as usize
}

/// Format cash amount with currency symbol, correct number of decimal places
/// and proper thousands separators (ex. -$1,234.50, ¥1,235).
///
/// For consistency, uses en locale ('.' as decimal mark, i.e. 1,000.00)
/// regardless of user's locale or currency. Halves round away from zero.
pub fn format_amount(amount: Decimal, currency: Currency) -> String {
    let decimal_places = decimal_places(currency);
    let rounded = amount
        .round_dp_with_strategy(decimal_places as u32, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let abs = rounded.abs();
    let amount_integer_part = abs
        .trunc()
        .to_u128()
        .map(|i| i.to_formatted_string(&Locale::en))
        .unwrap_or_else(|| abs.trunc().to_string());
    if decimal_places == 0 {
        return format!("{}{}{}", sign, currency.symbol(), amount_integer_part);
    }
    let amount_fractional_part = format!("{:.decimal_places$}", abs)
        .split('.')
        .nth(1)
        .map(|f| f.to_string())
        .unwrap_or_default();
    format!(
        "{}{}{}.{:0<decimal_places$}",
        sign,
        currency.symbol(),
        amount_integer_part,
        amount_fractional_part,
    )
}

/// Ex. "Jan 5, 2024", or "Not set" when the record had no usable date.
pub fn format_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => d.format("%b %-d, %Y").to_string(),
        None => NOT_SET.to_string(),
    }
}
