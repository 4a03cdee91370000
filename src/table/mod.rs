//! Table construction and as-of-date lookups.
//!
//! This module holds the [`RateTable`] index, the typed decoding applied
//! to looked-up values, and the detailed lookup result carrying any
//! non-fatal warnings.

mod coercion;
mod lookup;
mod rate_table;

pub use coercion::decode_value;
pub use lookup::{LookupWarning, RateLookup, UNCHECKED_TYPE_WARNING};
pub use rate_table::RateTable;
