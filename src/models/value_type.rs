//! Type tags and decoded rate values.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::RateError;

/// The declared decoding discipline for a rate's stored strings.
///
/// Tables written by hand use `str`, `Decimal` and `bool`; the spelled-out
/// forms `string`, `decimal` and `boolean` are accepted as well.
///
/// # Example
///
/// ```
/// use rate_table::models::ValueType;
///
/// assert_eq!("Decimal".parse::<ValueType>().unwrap(), ValueType::Decimal);
/// assert_eq!("boolean".parse::<ValueType>().unwrap(), ValueType::Boolean);
/// assert!("float".parse::<ValueType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// Stored string returned verbatim.
    String,
    /// Stored string parsed as an exact decimal.
    Decimal,
    /// Stored string read as a permissive boolean.
    Boolean,
}

impl ValueType {
    /// The canonical tag as written in rate tables.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::String => "str",
            Self::Decimal => "Decimal",
            Self::Boolean => "bool",
        }
    }
}

impl FromStr for ValueType {
    type Err = RateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "str" | "string" => Ok(Self::String),
            "Decimal" | "decimal" => Ok(Self::Decimal),
            "bool" | "boolean" => Ok(Self::Boolean),
            other => Err(RateError::UnknownTypeTag {
                tag: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl Serialize for ValueType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}

impl<'de> Deserialize<'de> for ValueType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// The result of a lookup.
///
/// Untyped lookups always yield [`RateValue::String`] holding the raw
/// stored literal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RateValue {
    /// A string value.
    String(String),
    /// An exact decimal value.
    Decimal(Decimal),
    /// A boolean value.
    Boolean(bool),
}

impl RateValue {
    /// Returns the string if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the decimal if this is a decimal value.
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            Self::Decimal(d) => Some(*d),
            _ => None,
        }
    }

    /// Returns the boolean if this is a boolean value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for RateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Decimal(d) => write!(f, "{}", d),
            Self::Boolean(b) => write!(f, "{}", b),
        }
    }
}
