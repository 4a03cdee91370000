//! Error types for the rate table.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure that can occur while building, loading or querying
//! a rate table.

use thiserror::Error;

use crate::models::ValueType;

/// The main error type for the rate table.
///
/// Construction errors (bad dates, overlapping windows, duplicate names)
/// abort the whole build. Lookup errors are per call and leave the table
/// untouched.
///
/// # Example
///
/// ```
/// use rate_table::error::RateError;
///
/// let error = RateError::RateNotFound {
///     name: "GPU A100 Rate".to_string(),
/// };
/// assert_eq!(error.to_string(), "Rate 'GPU A100 Rate' not found");
/// ```
#[derive(Debug, Error)]
pub enum RateError {
    /// A date token was not of the form `YYYY-MM` or named an invalid month.
    #[error("Invalid date '{input}': expected YYYY-MM")]
    InvalidDate {
        /// The token as it was supplied.
        input: String,
    },

    /// An interval ends before it starts.
    #[error("date_until must be after date_from ({from} > {until})")]
    InvalidDateRange {
        /// The interval's start month.
        from: String,
        /// The interval's end month.
        until: String,
    },

    /// A type tag was not one of the recognized tags.
    #[error("Unknown type tag '{tag}': type must be one of \"str\", \"Decimal\", or \"bool\"")]
    UnknownTypeTag {
        /// The unrecognized tag.
        tag: String,
    },

    /// Per-interval type tags disagree with each other or with the series tag.
    #[error("Rate '{name}' has inconsistent type tags: {first} and {second}")]
    InconsistentTypeTags {
        /// The series name.
        name: String,
        /// The first tag seen.
        first: ValueType,
        /// The conflicting tag.
        second: ValueType,
    },

    /// A rate record was structurally unusable.
    #[error("Invalid rate record '{name}': {message}")]
    InvalidRecord {
        /// The record's name (may be empty).
        name: String,
        /// What was wrong with it.
        message: String,
    },

    /// Two intervals in the same series overlap.
    #[error("Rate '{name}': date ranges overlap ({first} and {second})")]
    OverlappingIntervals {
        /// The series name.
        name: String,
        /// The first overlapping window.
        first: String,
        /// The second overlapping window.
        second: String,
    },

    /// Two records share a name.
    #[error("found duplicate name \"{name}\" in list")]
    DuplicateName {
        /// The duplicated name.
        name: String,
    },

    /// No series exists with the requested name.
    #[error("Rate '{name}' not found")]
    RateNotFound {
        /// The requested name.
        name: String,
    },

    /// The series exists but no interval covers the requested date.
    #[error("No value for '{name}' found for date '{date}'")]
    ValueNotFound {
        /// The series name.
        name: String,
        /// The queried date as the caller supplied it.
        date: String,
    },

    /// The caller asked for a type other than the one the series declares.
    #[error("Rate \"{name}\" expects datatype {declared}, but got {expected}")]
    TypeMismatch {
        /// The series name.
        name: String,
        /// The type declared by the series.
        declared: ValueType,
        /// The type requested by the caller.
        expected: ValueType,
    },

    /// The caller asked for a type but the series declares none.
    #[error("Rate \"{name}\" does not define a type but datatype was provided ({expected})")]
    UntypedRate {
        /// The series name.
        name: String,
        /// The type requested by the caller.
        expected: ValueType,
    },

    /// A stored value could not be decoded as its declared type.
    #[error("Rate \"{name}\": value '{value}' is not a valid {value_type}")]
    Decode {
        /// The series name.
        name: String,
        /// The stored string.
        value: String,
        /// The type it was decoded as.
        value_type: ValueType,
    },

    /// A local table or config file could not be read.
    #[error("Rate source not found: {path}")]
    SourceNotFound {
        /// The path that could not be read.
        path: String,
    },

    /// Table or config text could not be parsed.
    #[error("Failed to parse rate source '{source_name}': {message}")]
    SourceParse {
        /// Where the text came from (path, URL, or "<inline>").
        source_name: String,
        /// A description of the parse error.
        message: String,
    },

    /// A remote table could not be fetched.
    #[error("Failed to fetch rates from '{url}': {message}")]
    Fetch {
        /// The URL that was requested.
        url: String,
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return RateError.
pub type RateResult<T> = Result<T, RateError>;
