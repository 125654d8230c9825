//! Price rendering: `"%.2f CUR"` with an uppercased ISO currency code.

use feedgen_model::AttrValue;
use tracing::debug;

use crate::context::TransformContext;

/// Formats a price as `"<amount .2f> <CURRENCY>"`.
///
/// The currency comes from the `currency` parameter, else from a code
/// already embedded in the value (`"25.50 AUD"`), else from the caller's
/// default. Input that carries no parsable amount is returned unchanged.
#[must_use]
pub fn format_price(value: &AttrValue, currency: Option<&str>, ctx: &TransformContext) -> AttrValue {
    let (amount, embedded) = match value {
        AttrValue::Number(number) => (Some(*number), None),
        other => parse_price(&other.to_text()),
    };
    let Some(amount) = amount else {
        debug!(value = %value.to_text(), "price not parsable, left unchanged");
        return value.clone();
    };
    let currency = currency
        .map(str::to_string)
        .or(embedded)
        .unwrap_or_else(|| ctx.default_currency.clone())
        .to_uppercase();
    AttrValue::Text(format!("{amount:.2} {currency}"))
}

/// Splits a price string into its numeric amount and an optional embedded
/// three-letter currency code. Used by the validator's cross-field price
/// comparison as well.
#[must_use]
pub fn parse_price(text: &str) -> (Option<f64>, Option<String>) {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return (None, None);
    }
    if let Ok(amount) = trimmed.parse::<f64>() {
        return (Some(amount), None);
    }
    let mut parts = trimmed.split_whitespace();
    let (Some(first), Some(second), None) = (parts.next(), parts.next(), parts.next()) else {
        return (None, None);
    };
    let Ok(amount) = first.parse::<f64>() else {
        return (None, None);
    };
    if second.len() == 3 && second.chars().all(|ch| ch.is_ascii_alphabetic()) {
        (Some(amount), Some(second.to_string()))
    } else {
        (None, None)
    }
}
