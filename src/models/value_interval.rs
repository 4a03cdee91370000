//! A single historical value of a rate.

use serde::Serialize;

use crate::error::{RateError, RateResult};

use super::{DateMonth, IntervalRecord, ValueType};

/// One value together with the months it is valid for.
///
/// Both bounds are inclusive. A missing `valid_until` means the value
/// stays valid for every month from `valid_from` onwards.
///
/// # Example
///
/// ```
/// use rate_table::models::{DateMonth, IntervalRecord, ValueInterval};
///
/// let record = IntervalRecord::new("1", "2020-01", Some("2020-12"));
/// let interval = ValueInterval::from_record(&record).unwrap();
/// assert!(interval.contains(DateMonth::parse("2020-12").unwrap()));
/// assert!(!interval.contains(DateMonth::parse("2021-01").unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueInterval {
    value: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    type_tag: Option<ValueType>,
    #[serde(rename = "from")]
    valid_from: DateMonth,
    #[serde(rename = "until", skip_serializing_if = "Option::is_none")]
    valid_until: Option<DateMonth>,
}

impl ValueInterval {
    /// Validates and builds an interval from its raw record.
    ///
    /// # Errors
    ///
    /// - `InvalidDate` if `from` or `until` is not a `YYYY-MM` token
    /// - `InvalidDateRange` if `until` is earlier than `from`
    /// - `UnknownTypeTag` if the entry carries an unrecognized type tag
    pub fn from_record(record: &IntervalRecord) -> RateResult<Self> {
        let valid_from = DateMonth::parse(&record.from)?;
        let valid_until = record
            .until
            .as_deref()
            .map(DateMonth::parse)
            .transpose()?;
        let type_tag = record
            .type_tag
            .as_deref()
            .map(str::parse::<ValueType>)
            .transpose()?;

        Self::new(record.value.clone(), type_tag, valid_from, valid_until)
    }

    /// Builds an interval from already-parsed parts.
    pub fn new(
        value: impl Into<String>,
        type_tag: Option<ValueType>,
        valid_from: DateMonth,
        valid_until: Option<DateMonth>,
    ) -> RateResult<Self> {
        if let Some(until) = valid_until {
            if until < valid_from {
                return Err(RateError::InvalidDateRange {
                    from: valid_from.to_string(),
                    until: until.to_string(),
                });
            }
        }

        Ok(Self {
            value: value.into(),
            type_tag,
            valid_from,
            valid_until,
        })
    }

    /// The stored literal.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The legacy per-entry type tag, if one was given.
    pub fn type_tag(&self) -> Option<ValueType> {
        self.type_tag
    }

    /// First month of validity.
    pub fn valid_from(&self) -> DateMonth {
        self.valid_from
    }

    /// Last month of validity, or `None` when open-ended.
    pub fn valid_until(&self) -> Option<DateMonth> {
        self.valid_until
    }

    /// Returns true if `date` falls inside this interval's window.
    pub fn contains(&self, date: DateMonth) -> bool {
        self.valid_from <= date && self.valid_until.is_none_or(|until| date <= until)
    }

    /// Returns true if the two windows share at least one month.
    ///
    /// Symmetric: each interval's start is tested against the other's window.
    pub fn overlaps(&self, other: &ValueInterval) -> bool {
        other.contains(self.valid_from) || self.contains(other.valid_from)
    }

    /// Renders the window as `from..until` (or `from..` when open-ended).
    pub fn window(&self) -> String {
        match self.valid_until {
            Some(until) => format!("{}..{}", self.valid_from, until),
            None => format!("{}..", self.valid_from),
        }
    }
}
