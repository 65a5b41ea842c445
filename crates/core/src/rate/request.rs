//! Lenient parsing of the carrier service request body.
//!
//! The platform payload is loosely typed. Missing or falsy fields fall back
//! to defaults, booleans follow JavaScript truthiness, and numeric fields
//! accept numbers, numeric strings and booleans. Only input that cannot be
//! read as a number at all (on an item that counts toward the subtotal) is
//! rejected.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::{Number, Value};

use super::error::RateError;
use super::types::{DEFAULT_CURRENCY, LineItem, RateRequest};

/// Parses a raw request body.
///
/// An empty body is read as `{}`.
pub fn parse_rate_request(body: &[u8]) -> Result<RateRequest, RateError> {
    if body.is_empty() {
        return Ok(RateRequest::default());
    }

    let value: Value = serde_json::from_slice(body)?;
    rate_request_from_value(&value)
}

/// Extracts a rate request from an already-decoded JSON document.
pub fn rate_request_from_value(value: &Value) -> Result<RateRequest, RateError> {
    let rate = match value {
        Value::Null => return Err(RateError::NullPayload),
        Value::Object(body) => match body.get("rate") {
            Some(Value::Null) => return Err(RateError::NullPayload),
            Some(rate) => rate,
            None => return Ok(RateRequest::default()),
        },
        _ => return Ok(RateRequest::default()),
    };

    let Value::Object(rate) = rate else {
        return Ok(RateRequest::default());
    };

    let country = match rate.get("destination") {
        Some(Value::Object(destination)) => match destination.get("country") {
            Some(Value::String(country)) => Some(country.clone()),
            _ => None,
        },
        _ => None,
    };

    let currency = match rate.get("currency") {
        Some(Value::String(currency)) if !currency.is_empty() => currency.clone(),
        _ => DEFAULT_CURRENCY.to_string(),
    };

    let items = match rate.get("items") {
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .map(|(index, item)| line_item(index, item))
            .collect::<Result<Vec<_>, _>>()?,
        _ => Vec::new(),
    };

    Ok(RateRequest {
        country,
        currency,
        items,
    })
}

fn line_item(index: usize, item: &Value) -> Result<LineItem, RateError> {
    let Value::Object(fields) = item else {
        return Ok(LineItem {
            price: Decimal::ZERO,
            quantity: Decimal::ZERO,
            requires_shipping: false,
            gift_card: false,
        });
    };

    let requires_shipping = is_truthy(fields.get("requires_shipping"));
    let gift_card = is_truthy(fields.get("gift_card"));
    let eligible = requires_shipping && !gift_card;

    // Ineligible lines never reach the subtotal, so garbage there is tolerated.
    let numeric = |field: &'static str| match coerce_number(fields.get(field)) {
        Some(value) => Ok(value),
        None if eligible => Err(RateError::NonNumeric { index, field }),
        None => Ok(Decimal::ZERO),
    };

    Ok(LineItem {
        price: numeric("price")?,
        quantity: numeric("quantity")?,
        requires_shipping,
        gift_card,
    })
}

/// JavaScript truthiness of an optional JSON value.
pub(crate) fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => number_to_decimal(n).is_none_or(|d| !d.is_zero()),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_) | Value::Object(_)) => true,
    }
}

/// Best-effort numeric coercion; falsy values count as zero.
///
/// Returns `None` when the value cannot be read as a number.
pub(crate) fn coerce_number(value: Option<&Value>) -> Option<Decimal> {
    match value {
        None | Some(Value::Null) => Some(Decimal::ZERO),
        Some(Value::Bool(b)) => Some(if *b { Decimal::ONE } else { Decimal::ZERO }),
        Some(Value::Number(n)) => number_to_decimal(n),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Some(Decimal::ZERO)
            } else {
                parse_decimal(trimmed)
            }
        }
        Some(Value::Array(_) | Value::Object(_)) => None,
    }
}

fn number_to_decimal(n: &Number) -> Option<Decimal> {
    if let Some(i) = n.as_i64() {
        return Some(Decimal::from(i));
    }
    if let Some(u) = n.as_u64() {
        return Some(Decimal::from(u));
    }
    parse_decimal(&n.to_string())
}

fn parse_decimal(text: &str) -> Option<Decimal> {
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}
