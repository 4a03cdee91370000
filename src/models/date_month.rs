//! Month-granularity dates.
//!
//! Every boundary in a rate table is a month. [`DateMonth`] wraps a
//! [`NaiveDate`] that is always the first day of its month.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{RateError, RateResult};

/// A calendar month, stored as the first day of that month.
///
/// # Examples
///
/// ```
/// use rate_table::models::DateMonth;
/// use chrono::NaiveDate;
///
/// let month = DateMonth::parse("2023-06").unwrap();
/// assert_eq!(month.date(), NaiveDate::from_ymd_opt(2023, 6, 1).unwrap());
/// assert_eq!(month.to_string(), "2023-06");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateMonth(NaiveDate);

impl DateMonth {
    /// Parses a `YYYY-MM` token.
    ///
    /// The token must be exactly four year digits, a dash and two month
    /// digits, and the month must be between 01 and 12.
    pub fn parse(input: &str) -> RateResult<Self> {
        let invalid = || RateError::InvalidDate {
            input: input.to_string(),
        };

        let bytes = input.as_bytes();
        if bytes.len() != 7 || bytes[4] != b'-' {
            return Err(invalid());
        }
        if !bytes[..4].iter().chain(&bytes[5..]).all(u8::is_ascii_digit) {
            return Err(invalid());
        }

        let year: i32 = input[..4].parse().map_err(|_| invalid())?;
        let month: u32 = input[5..].parse().map_err(|_| invalid())?;

        NaiveDate::from_ymd_opt(year, month, 1)
            .map(Self)
            .ok_or_else(invalid)
    }

    /// Truncates a date to the first day of its month.
    pub fn from_date(date: NaiveDate) -> Self {
        // Day 1 exists in every month chrono can represent.
        Self(date.with_day(1).unwrap_or(date))
    }

    /// Returns the underlying first-of-month date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for DateMonth {
    fn from(date: NaiveDate) -> Self {
        Self::from_date(date)
    }
}

impl FromStr for DateMonth {
    type Err = RateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for DateMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.0.year(), self.0.month())
    }
}

impl Serialize for DateMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateMonth {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Anything a caller may pass as the as-of date of a lookup.
///
/// Strings are parsed as `YYYY-MM`; dates are truncated to their month.
/// `describe` is what error messages echo back to the caller.
pub trait AsOfDate {
    /// Resolves to a month.
    fn to_month(&self) -> RateResult<DateMonth>;

    /// The date as the caller supplied it.
    fn describe(&self) -> String;
}

impl AsOfDate for DateMonth {
    fn to_month(&self) -> RateResult<DateMonth> {
        Ok(*self)
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl AsOfDate for NaiveDate {
    fn to_month(&self) -> RateResult<DateMonth> {
        Ok(DateMonth::from_date(*self))
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl AsOfDate for str {
    fn to_month(&self) -> RateResult<DateMonth> {
        DateMonth::parse(self)
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl AsOfDate for String {
    fn to_month(&self) -> RateResult<DateMonth> {
        DateMonth::parse(self)
    }

    fn describe(&self) -> String {
        self.clone()
    }
}

impl<T: AsOfDate + ?Sized> AsOfDate for &T {
    fn to_month(&self) -> RateResult<DateMonth> {
        (**self).to_month()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
