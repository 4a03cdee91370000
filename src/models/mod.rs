//! Core data models for the rate table.
//!
//! This module contains the validated entities a table is built from,
//! leaf-first: months, type tags, intervals and series.

mod date_month;
mod rate_series;
mod record;
mod value_interval;
mod value_type;

pub use date_month::{AsOfDate, DateMonth};
pub use rate_series::RateSeries;
pub use record::{IntervalRecord, RateRecord};
pub use value_interval::ValueInterval;
pub use value_type::{RateValue, ValueType};
