//! Raw input records.
//!
//! These mirror the YAML/JSON table layout exactly and carry no
//! validation of their own; [`RateSeries`](super::RateSeries) and
//! [`ValueInterval`](super::ValueInterval) validate them on construction.

use serde::{Deserialize, Serialize};

/// One rate as it appears in a table file.
///
/// ```yaml
/// - name: CPU SU Rate
///   type: Decimal
///   history:
///     - value: "0.013"
///       from: 2023-06
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateRecord {
    /// The rate name.
    pub name: String,
    /// The series-level type tag.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_tag: Option<String>,
    /// The value history.
    pub history: Vec<IntervalRecord>,
}

/// One historical value as it appears in a table file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalRecord {
    /// The stored literal.
    pub value: String,
    /// Legacy per-entry type tag.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_tag: Option<String>,
    /// First month of validity, `YYYY-MM`.
    pub from: String,
    /// Last month of validity, `YYYY-MM`; absent means open-ended.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub until: Option<String>,
}

impl RateRecord {
    /// Creates a record with a series-level type tag.
    pub fn new(
        name: impl Into<String>,
        type_tag: Option<&str>,
        history: Vec<IntervalRecord>,
    ) -> Self {
        Self {
            name: name.into(),
            type_tag: type_tag.map(str::to_string),
            history,
        }
    }
}

impl IntervalRecord {
    /// Creates an untagged interval record.
    pub fn new(value: impl Into<String>, from: impl Into<String>, until: Option<&str>) -> Self {
        Self {
            value: value.into(),
            type_tag: None,
            from: from.into(),
            until: until.map(str::to_string),
        }
    }

    /// Attaches a legacy per-entry type tag.
    pub fn with_type(mut self, type_tag: impl Into<String>) -> Self {
        self.type_tag = Some(type_tag.into());
        self
    }
}
