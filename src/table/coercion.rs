//! Decoding stored strings into typed values.
//!
//! Each [`ValueType`] maps to exactly one decode function.

use rust_decimal::Decimal;

use crate::error::{RateError, RateResult};
use crate::models::{RateValue, ValueType};

/// Largest scale a `Decimal` can hold.
const MAX_SCALE: u32 = 28;

/// Decodes `raw` as `value_type` for the rate called `name`.
///
/// # Examples
///
/// ```
/// use rate_table::models::{RateValue, ValueType};
/// use rate_table::table::decode_value;
///
/// let value = decode_value("Boolean Rate", "True", ValueType::Boolean).unwrap();
/// assert_eq!(value, RateValue::Boolean(true));
/// ```
pub fn decode_value(name: &str, raw: &str, value_type: ValueType) -> RateResult<RateValue> {
    match value_type {
        ValueType::String => Ok(decode_string(raw)),
        ValueType::Decimal => decode_decimal(name, raw),
        ValueType::Boolean => Ok(decode_boolean(raw)),
    }
}

fn decode_string(raw: &str) -> RateValue {
    RateValue::String(raw.to_string())
}

/// Exact decimal parse; scientific notation is accepted.
///
/// Values that would need rounding to fit a `Decimal` are rejected.
fn decode_decimal(name: &str, raw: &str) -> RateResult<RateValue> {
    let trimmed = raw.trim();
    Decimal::from_str_exact(trimmed)
        .ok()
        .or_else(|| scientific_exact(trimmed))
        .map(RateValue::Decimal)
        .ok_or_else(|| RateError::Decode {
            name: name.to_string(),
            value: raw.to_string(),
            value_type: ValueType::Decimal,
        })
}

/// Parses `<mantissa>e<exponent>` without rounding the mantissa.
fn scientific_exact(s: &str) -> Option<Decimal> {
    let (mantissa, exponent) = s.split_once(['e', 'E'])?;
    let mut value = Decimal::from_str_exact(mantissa).ok()?;
    let exponent: i64 = exponent.parse().ok()?;

    if exponent < 0 {
        let scale = i64::from(value.scale()) - exponent;
        if scale > i64::from(MAX_SCALE) {
            return None;
        }
        value.set_scale(scale as u32).ok()?;
        return Some(value);
    }

    if value.is_zero() {
        return Some(value);
    }
    if exponent > i64::from(MAX_SCALE) {
        return None;
    }
    for _ in 0..exponent {
        value = value.checked_mul(Decimal::TEN)?;
    }
    Some(value)
}

/// Only `true` and `1` (any case) are true. Anything else is false.
fn decode_boolean(raw: &str) -> RateValue {
    let lowered = raw.to_lowercase();
    RateValue::Boolean(lowered == "true" || lowered == "1")
}
