//! The rate table: validated series indexed by name.

use std::collections::HashMap;

use tracing::{debug, info, warn};

use crate::error::{RateError, RateResult};
use crate::models::{AsOfDate, RateRecord, RateSeries, RateValue, ValueType};

use super::coercion::decode_value;
use super::lookup::{LookupWarning, RateLookup};

/// An immutable, validated set of rate series.
///
/// A table is built in one step from its records; any invalid record
/// fails the whole build. Once built it is read-only and can be shared
/// between threads freely.
///
/// # Example
///
/// ```
/// use rate_table::models::{IntervalRecord, RateRecord, ValueType};
/// use rate_table::table::RateTable;
/// use rust_decimal::Decimal;
///
/// let table = RateTable::build(vec![RateRecord::new(
///     "CPU SU Rate",
///     Some("Decimal"),
///     vec![IntervalRecord::new("0.013", "2023-06", None)],
/// )])
/// .unwrap();
///
/// let value = table
///     .get_value_at("CPU SU Rate", "2024-01", Some(ValueType::Decimal))
///     .unwrap();
/// assert_eq!(value.as_decimal(), Some(Decimal::new(13, 3)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RateTable {
    /// Series in input order.
    series: Vec<RateSeries>,
    /// Name to position in `series`.
    index: HashMap<String, usize>,
}

impl RateTable {
    /// Validates every record and builds the table.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered, including `DuplicateName` on the
    /// second occurrence of a name. No partially built table is returned.
    pub fn build<I>(records: I) -> RateResult<Self>
    where
        I: IntoIterator<Item = RateRecord>,
    {
        let mut table = Self::default();

        for record in records {
            if table.index.contains_key(&record.name) {
                return Err(RateError::DuplicateName { name: record.name });
            }
            let series = RateSeries::from_record(&record)?;
            table
                .index
                .insert(series.name().to_string(), table.series.len());
            table.series.push(series);
        }

        info!(rates = table.series.len(), "Built rate table");
        Ok(table)
    }

    /// Returns the series called `name`.
    pub fn get(&self, name: &str) -> RateResult<&RateSeries> {
        self.index
            .get(name)
            .map(|&i| &self.series[i])
            .ok_or_else(|| RateError::RateNotFound {
                name: name.to_string(),
            })
    }

    /// Returns true if a series called `name` exists.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Rate names in input order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.series.iter().map(RateSeries::name)
    }

    /// All series in input order.
    pub fn iter(&self) -> impl Iterator<Item = &RateSeries> {
        self.series.iter()
    }

    /// Number of series.
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Returns true if the table holds no series.
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Looks up the value of `name` as of `date`.
    ///
    /// `expected_type` is the type the caller wants back; `None` asks for
    /// the raw stored string. When the series declares a type and the
    /// caller passes `None`, the raw string is returned and a warning is
    /// logged.
    ///
    /// # Errors
    ///
    /// - `RateNotFound` if no series has this name
    /// - `InvalidDate` if `date` is not a valid month
    /// - `ValueNotFound` if no interval covers `date`
    /// - `TypeMismatch` if `expected_type` differs from the declared type
    /// - `UntypedRate` if `expected_type` is given for an untyped series
    /// - `Decode` if a decimal series holds a non-numeric value
    pub fn get_value_at(
        &self,
        name: &str,
        date: impl AsOfDate,
        expected_type: Option<ValueType>,
    ) -> RateResult<RateValue> {
        self.lookup(name, date, expected_type)
            .map(|lookup| lookup.value)
    }

    /// Like [`get_value_at`](Self::get_value_at), but also returns the matching
    /// window and any warnings raised along the way.
    pub fn lookup(
        &self,
        name: &str,
        date: impl AsOfDate,
        expected_type: Option<ValueType>,
    ) -> RateResult<RateLookup> {
        let series = self.get(name)?;
        let month = date.to_month()?;
        let interval = series
            .find_at(month)
            .map_err(|_| RateError::ValueNotFound {
                name: name.to_string(),
                date: date.describe(),
            })?;

        let mut warnings = Vec::new();
        let raw = interval.value();

        let value = match (series.type_tag(), expected_type) {
            (Some(declared), None) => {
                let warning = LookupWarning::unchecked_type(name, declared);
                warn!(rate = %name, declared = %declared, "{}", warning.message);
                warnings.push(warning);
                RateValue::String(raw.to_string())
            }
            (Some(declared), Some(expected)) if declared != expected => {
                return Err(RateError::TypeMismatch {
                    name: name.to_string(),
                    declared,
                    expected,
                });
            }
            (Some(declared), Some(_)) => decode_value(name, raw, declared)?,
            (None, Some(expected)) => {
                return Err(RateError::UntypedRate {
                    name: name.to_string(),
                    expected,
                });
            }
            (None, None) => RateValue::String(raw.to_string()),
        };

        debug!(rate = %name, date = %month, value = %value, "Resolved rate value");

        Ok(RateLookup {
            name: name.to_string(),
            date: month,
            value,
            declared_type: series.type_tag(),
            valid_from: interval.valid_from(),
            valid_until: interval.valid_until(),
            warnings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DateMonth, IntervalRecord};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn test_rate(type_tag: Option<&str>) -> RateRecord {
        RateRecord::new(
            "Test Rate",
            type_tag,
            vec![
                IntervalRecord::new("1", "2020-01", Some("2020-12")),
                IntervalRecord::new("2", "2021-01", None),
            ],
        )
    }

    fn sample_rates() -> RateTable {
        RateTable::build(vec![
            RateRecord::new(
                "Decimal Rate",
                Some("Decimal"),
                vec![IntervalRecord::new("1.23", "2020-01", None)],
            ),
            RateRecord::new(
                "Boolean Rate",
                Some("bool"),
                vec![IntervalRecord::new("true", "2020-01", None)],
            ),
            RateRecord::new(
                "String Rate",
                Some("str"),
                vec![IntervalRecord::new("standard", "2020-01", None)],
            ),
            RateRecord::new(
                "Untyped Rate",
                None,
                vec![IntervalRecord::new("42", "2020-01", None)],
            ),
        ])
        .unwrap()
    }

    #[test]
    fn test_rates_get_value_at() {
        let table = RateTable::build(vec![test_rate(Some("str"))]).unwrap();
        let s = Some(ValueType::String);

        assert_eq!(table.get_value_at("Test Rate", "2020-01", s).unwrap().as_str(), Some("1"));
        assert_eq!(table.get_value_at("Test Rate", "2020-12", s).unwrap().as_str(), Some("1"));
        assert_eq!(table.get_value_at("Test Rate", "2021-01", s).unwrap().as_str(), Some("2"));
        assert!(matches!(
            table.get_value_at("Test Rate", "2019-01", s),
            Err(RateError::ValueNotFound { .. })
        ));
    }

    #[test]
    fn test_cpu_su_rate_scenario() {
        let table = RateTable::build(vec![RateRecord::new(
            "CPU SU Rate",
            None,
            vec![IntervalRecord::new("0.013", "2023-06", None)],
        )])
        .unwrap();

        let value = table.get_value_at("CPU SU Rate", "2023-06", None).unwrap();
        assert_eq!(value, RateValue::String("0.013".to_string()));

        match table.get_value_at("CPU SU Rate", "2022-12", None) {
            Err(err @ RateError::ValueNotFound { .. }) => {
                assert_eq!(
                    err.to_string(),
                    "No value for 'CPU SU Rate' found for date '2022-12'"
                );
            }
            other => panic!("Expected ValueNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_fail_with_duplicate_names() {
        let result = RateTable::build(vec![test_rate(Some("Decimal")), test_rate(Some("Decimal"))]);
        match result {
            Err(RateError::DuplicateName { name }) => assert_eq!(name, "Test Rate"),
            other => panic!("Expected DuplicateName, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_record_fails_whole_build() {
        let bad = RateRecord::new(
            "Bad Rate",
            None,
            vec![IntervalRecord::new("1", "2020-04", Some("2020-03"))],
        );
        let result = RateTable::build(vec![test_rate(None), bad]);
        assert!(matches!(result, Err(RateError::InvalidDateRange { .. })));
    }

    #[test]
    fn test_unknown_rate_name() {
        let table = sample_rates();
        match table.get_value_at("Missing Rate", "2020-01", None) {
            Err(err @ RateError::RateNotFound { .. }) => {
                assert_eq!(err.to_string(), "Rate 'Missing Rate' not found");
            }
            other => panic!("Expected RateNotFound, got {:?}", other),
        }
        assert!(table.get("Missing Rate").is_err());
    }

    #[test]
    fn test_malformed_query_date() {
        let table = sample_rates();
        assert!(matches!(
            table.get_value_at("Decimal Rate", "January 2020", None),
            Err(RateError::InvalidDate { .. })
        ));
    }

    #[test]
    fn test_typed_lookups_with_matching_type() {
        let table = sample_rates();
        assert_eq!(
            table
                .get_value_at("Decimal Rate", "2020-01", Some(ValueType::Decimal))
                .unwrap(),
            RateValue::Decimal(dec("1.23"))
        );
        assert_eq!(
            table
                .get_value_at("Boolean Rate", "2020-01", Some(ValueType::Boolean))
                .unwrap(),
            RateValue::Boolean(true)
        );
        assert_eq!(
            table
                .get_value_at("String Rate", "2020-01", Some(ValueType::String))
                .unwrap(),
            RateValue::String("standard".to_string())
        );
    }

    #[test]
    fn test_typed_series_without_expected_type_returns_raw_with_warning() {
        let table = sample_rates();

        let lookup = table.lookup("Decimal Rate", "2020-01", None).unwrap();
        assert_eq!(lookup.value, RateValue::String("1.23".to_string()));
        assert_eq!(lookup.warnings.len(), 1);
        assert_eq!(lookup.warnings[0].code, "UNCHECKED_TYPE");

        let value = table.get_value_at("Boolean Rate", "2020-01", None).unwrap();
        assert_eq!(value, RateValue::String("true".to_string()));
    }

    #[test]
    fn test_type_mismatch_both_directions_of_declared_types() {
        let table = sample_rates();
        match table.get_value_at("Decimal Rate", "2020-01", Some(ValueType::Boolean)) {
            Err(RateError::TypeMismatch {
                declared, expected, ..
            }) => {
                assert_eq!(declared, ValueType::Decimal);
                assert_eq!(expected, ValueType::Boolean);
            }
            other => panic!("Expected TypeMismatch, got {:?}", other),
        }
        assert!(matches!(
            table.get_value_at("Boolean Rate", "2020-01", Some(ValueType::Decimal)),
            Err(RateError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_untyped_series_rejects_expected_type() {
        let table = sample_rates();
        assert!(matches!(
            table.get_value_at("Untyped Rate", "2020-01", Some(ValueType::Decimal)),
            Err(RateError::UntypedRate { .. })
        ));

        let lookup = table.lookup("Untyped Rate", "2020-01", None).unwrap();
        assert_eq!(lookup.value, RateValue::String("42".to_string()));
        assert!(lookup.warnings.is_empty());
    }

    #[test]
    fn test_invalid_decimal_fails_at_lookup() {
        let table = RateTable::build(vec![RateRecord::new(
            "Invalid Decimal",
            Some("Decimal"),
            vec![IntervalRecord::new("not_a_decimal", "2023-01", None)],
        )])
        .unwrap();

        assert!(matches!(
            table.get_value_at("Invalid Decimal", "2023-01", Some(ValueType::Decimal)),
            Err(RateError::Decode { .. })
        ));
        // Raw access still works.
        assert!(table.get_value_at("Invalid Decimal", "2023-01", None).is_ok());
    }

    #[test]
    fn test_decimal_lookup_never_rounds() {
        let table = RateTable::build(vec![RateRecord::new(
            "Precise Rate",
            Some("Decimal"),
            vec![IntervalRecord::new("0.12345678901234567890123456789", "2020-01", None)],
        )])
        .unwrap();

        assert!(matches!(
            table.get_value_at("Precise Rate", "2020-06", Some(ValueType::Decimal)),
            Err(RateError::Decode { .. })
        ));
    }

    #[test]
    fn test_mixed_legacy_tags_fail_build() {
        let result = RateTable::build(vec![RateRecord::new(
            "Mixed",
            None,
            vec![
                IntervalRecord::new("yes", "2020-01", Some("2020-12")),
                IntervalRecord::new("1", "2021-01", None).with_type("bool"),
            ],
        )]);
        assert!(matches!(result, Err(RateError::InvalidRecord { .. })));
    }

    #[test]
    fn test_boolean_permissive_decode() {
        let table = RateTable::build(vec![RateRecord::new(
            "Invalid Bool",
            Some("bool"),
            vec![
                IntervalRecord::new("yes", "2023-01", Some("2023-06")),
                IntervalRecord::new("True", "2023-07", None),
            ],
        )])
        .unwrap();
        let b = Some(ValueType::Boolean);

        assert_eq!(table.get_value_at("Invalid Bool", "2023-01", b).unwrap(), RateValue::Boolean(false));
        assert_eq!(table.get_value_at("Invalid Bool", "2023-07", b).unwrap(), RateValue::Boolean(true));
    }

    #[test]
    fn test_lookup_accepts_dates() {
        let table = RateTable::build(vec![test_rate(None)]).unwrap();

        let mid_month = NaiveDate::from_ymd_opt(2020, 12, 31).unwrap();
        assert_eq!(
            table.get_value_at("Test Rate", mid_month, None).unwrap().as_str(),
            Some("1")
        );

        let month = DateMonth::parse("2021-02").unwrap();
        let lookup = table.lookup("Test Rate", month, None).unwrap();
        assert_eq!(lookup.valid_from, DateMonth::parse("2021-01").unwrap());
        assert_eq!(lookup.valid_until, None);
    }

    #[test]
    fn test_names_preserve_input_order() {
        let table = sample_rates();
        let names: Vec<&str> = table.names().collect();
        assert_eq!(
            names,
            vec!["Decimal Rate", "Boolean Rate", "String Rate", "Untyped Rate"]
        );
        assert_eq!(table.len(), 4);
        assert!(!table.is_empty());
        assert!(table.contains("String Rate"));
    }

    #[test]
    fn test_table_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RateTable>();
    }
}
