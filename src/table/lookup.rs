//! Detailed lookup results.

use serde::Serialize;

use crate::models::{DateMonth, RateValue, ValueType};

/// Warning code for a typed rate queried without an expected type.
pub const UNCHECKED_TYPE_WARNING: &str = "UNCHECKED_TYPE";

/// A non-fatal diagnostic raised during a lookup.
///
/// # Example
///
/// ```
/// use rate_table::table::LookupWarning;
///
/// let warning = LookupWarning {
///     code: "UNCHECKED_TYPE".to_string(),
///     message: "Rate 'X' declares type Decimal but no datatype was requested".to_string(),
/// };
/// assert_eq!(warning.code, "UNCHECKED_TYPE");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
}

impl LookupWarning {
    pub(crate) fn unchecked_type(name: &str, declared: ValueType) -> Self {
        Self {
            code: UNCHECKED_TYPE_WARNING.to_string(),
            message: format!(
                "Rate '{}' declares type {} but no datatype was requested; returning the raw value",
                name, declared
            ),
        }
    }
}

/// Everything a lookup found: the value, where it came from, and any warnings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RateLookup {
    /// The rate name.
    pub name: String,
    /// The month that was queried.
    pub date: DateMonth,
    /// The (possibly decoded) value.
    pub value: RateValue,
    /// The series' declared type, if any.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub declared_type: Option<ValueType>,
    /// First month of the matching interval.
    pub valid_from: DateMonth,
    /// Last month of the matching interval, if closed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<DateMonth>,
    /// Non-fatal diagnostics.
    pub warnings: Vec<LookupWarning>,
}
