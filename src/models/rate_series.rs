//! A named rate and its value history.

use serde::Serialize;
use tracing::debug;

use crate::error::{RateError, RateResult};

use super::{DateMonth, RateRecord, ValueInterval, ValueType};

/// One named rate with its validated, non-overlapping history.
///
/// The type tag is held once per series. Tables that still tag each
/// history entry are accepted as long as every tag agrees; the agreed tag
/// becomes the series tag. An untyped series may not mix tagged and
/// untagged entries.
///
/// # Example
///
/// ```
/// use rate_table::models::{DateMonth, IntervalRecord, RateRecord, RateSeries};
///
/// let record = RateRecord::new(
///     "Test Rate",
///     Some("str"),
///     vec![
///         IntervalRecord::new("1", "2020-01", Some("2020-12")),
///         IntervalRecord::new("2", "2021-01", None),
///     ],
/// );
/// let series = RateSeries::from_record(&record).unwrap();
/// let hit = series.find_at(DateMonth::parse("2021-06").unwrap()).unwrap();
/// assert_eq!(hit.value(), "2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RateSeries {
    name: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    type_tag: Option<ValueType>,
    history: Vec<ValueInterval>,
}

impl RateSeries {
    /// Validates and builds a series from its raw record.
    ///
    /// # Errors
    ///
    /// - `InvalidRecord` if the name or history is empty, or an untyped
    ///   series mixes tagged and untagged entries
    /// - `UnknownTypeTag` if the series carries an unrecognized tag
    /// - any interval error from [`ValueInterval::from_record`]
    /// - `InconsistentTypeTags` if entry tags disagree with each other or the series tag
    /// - `OverlappingIntervals` if any two windows share a month
    pub fn from_record(record: &RateRecord) -> RateResult<Self> {
        let type_tag = record
            .type_tag
            .as_deref()
            .map(str::parse::<ValueType>)
            .transpose()?;

        let history = record
            .history
            .iter()
            .map(ValueInterval::from_record)
            .collect::<RateResult<Vec<_>>>()?;

        Self::new(record.name.clone(), type_tag, history)
    }

    /// Builds a series from already-validated intervals.
    pub fn new(
        name: impl Into<String>,
        type_tag: Option<ValueType>,
        history: Vec<ValueInterval>,
    ) -> RateResult<Self> {
        let name = name.into();

        if name.is_empty() {
            return Err(RateError::InvalidRecord {
                name,
                message: "name must not be empty".to_string(),
            });
        }
        if history.is_empty() {
            return Err(RateError::InvalidRecord {
                name,
                message: "history must contain at least one value".to_string(),
            });
        }

        let type_tag = resolve_type_tag(&name, type_tag, &history)?;
        check_no_overlap(&name, &history)?;

        debug!(rate = %name, intervals = history.len(), "Validated rate series");

        Ok(Self {
            name,
            type_tag,
            history,
        })
    }

    /// The rate name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared type tag, if any.
    pub fn type_tag(&self) -> Option<ValueType> {
        self.type_tag
    }

    /// The history in input order.
    pub fn history(&self) -> &[ValueInterval] {
        &self.history
    }

    /// Finds the interval whose window contains `date`.
    ///
    /// Windows are disjoint, so at most one interval can match.
    pub fn find_at(&self, date: DateMonth) -> RateResult<&ValueInterval> {
        self.history
            .iter()
            .find(|interval| interval.contains(date))
            .ok_or_else(|| RateError::ValueNotFound {
                name: self.name.clone(),
                date: date.to_string(),
            })
    }

    /// The earliest month any value is defined for.
    pub fn first_month(&self) -> Option<DateMonth> {
        self.history.iter().map(ValueInterval::valid_from).min()
    }
}

/// Settles the series tag from the series-level tag and any legacy entry tags.
///
/// Without a series tag, entry tags are all-or-nothing: an untagged entry
/// next to a tagged one is rejected rather than typed by its neighbour.
fn resolve_type_tag(
    name: &str,
    series_tag: Option<ValueType>,
    history: &[ValueInterval],
) -> RateResult<Option<ValueType>> {
    if series_tag.is_none() {
        let tagged = history.iter().filter(|i| i.type_tag().is_some()).count();
        if tagged > 0 && tagged < history.len() {
            return Err(RateError::InvalidRecord {
                name: name.to_string(),
                message: "history mixes typed and untyped entries".to_string(),
            });
        }
    }

    let mut resolved = series_tag;
    for entry_tag in history.iter().filter_map(ValueInterval::type_tag) {
        match resolved {
            None => resolved = Some(entry_tag),
            Some(current) if current != entry_tag => {
                return Err(RateError::InconsistentTypeTags {
                    name: name.to_string(),
                    first: current,
                    second: entry_tag,
                });
            }
            Some(_) => {}
        }
    }
    Ok(resolved)
}

/// Rejects the series if any two windows share a month.
fn check_no_overlap(name: &str, history: &[ValueInterval]) -> RateResult<()> {
    for (i, x) in history.iter().enumerate() {
        for y in &history[i + 1..] {
            if x.overlaps(y) {
                return Err(RateError::OverlappingIntervals {
                    name: name.to_string(),
                    first: x.window(),
                    second: y.window(),
                });
            }
        }
    }
    Ok(())
}
