// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The tip record model and its string-field parser.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

/// Conventional weekday order of the `day` category in the tips dataset.
pub const DAY_ORDER: [&str; 4] = ["Thur", "Fri", "Sat", "Sun"];

/// One row of the tips dataset.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    /// Total bill amount.
    pub total_bill: f64,
    /// Tip amount.
    pub tip: f64,
    /// Party size.
    pub size: i32,
    /// Day category (for example `"Sun"`).
    pub day: String,
}

/// A field of [`Record`], used to report parse failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RecordField {
    /// `total_bill`
    TotalBill,
    /// `tip`
    Tip,
    /// `size`
    Size,
    /// `day`
    Day,
}

impl RecordField {
    /// Returns the column name used in the tabular source.
    pub fn name(self) -> &'static str {
        match self {
            Self::TotalBill => "total_bill",
            Self::Tip => "tip",
            Self::Size => "size",
            Self::Day => "day",
        }
    }
}

impl core::fmt::Display for RecordField {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// A numeric field of [`Record`], used to select values for scales, filters and reductions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NumericField {
    /// `total_bill`
    TotalBill,
    /// `tip`
    Tip,
    /// `size` (widened to `f64`)
    Size,
}

impl NumericField {
    /// Reads this field from a record.
    pub fn get(self, record: &Record) -> f64 {
        match self {
            Self::TotalBill => record.total_bill,
            Self::Tip => record.tip,
            Self::Size => f64::from(record.size),
        }
    }

    /// Returns the column name used in the tabular source.
    pub fn name(self) -> &'static str {
        match self {
            Self::TotalBill => "total_bill",
            Self::Tip => "tip",
            Self::Size => "size",
        }
    }
}

/// Errors produced while turning raw string fields into a [`Record`].
///
/// These are data errors: the row is rejected before it reaches aggregation, and the caller
/// decides whether to skip it or abort.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    /// A field does not parse as its declared type.
    #[error("invalid record: field `{field}` has value {value:?}")]
    InvalidRecord {
        /// The offending field.
        field: RecordField,
        /// The raw value as it appeared in the source.
        value: String,
    },
    /// The row does not carry a value for a field.
    #[error("invalid record: missing field `{0}`")]
    MissingField(RecordField),
}

impl Record {
    /// Parses a record from its four raw fields.
    ///
    /// Surrounding whitespace is ignored. Numeric fields must parse as finite numbers
    /// (`size` as an integer); `day` is taken as-is.
    pub fn parse(total_bill: &str, tip: &str, size: &str, day: &str) -> Result<Self, RecordError> {
        Ok(Self {
            total_bill: parse_finite(RecordField::TotalBill, total_bill)?,
            tip: parse_finite(RecordField::Tip, tip)?,
            size: size.trim().parse::<i32>().map_err(|_| invalid(RecordField::Size, size))?,
            day: String::from(day.trim()),
        })
    }

    /// Parses a record from a row of fields in `total_bill, tip, size, day` order.
    pub fn from_fields<S: AsRef<str>>(fields: &[S]) -> Result<Self, RecordError> {
        let field = |i: usize, f: RecordField| {
            fields
                .get(i)
                .map(AsRef::as_ref)
                .ok_or(RecordError::MissingField(f))
        };
        Self::parse(
            field(0, RecordField::TotalBill)?,
            field(1, RecordField::Tip)?,
            field(2, RecordField::Size)?,
            field(3, RecordField::Day)?,
        )
    }
}

fn invalid(field: RecordField, value: &str) -> RecordError {
    RecordError::InvalidRecord {
        field,
        value: value.to_string(),
    }
}

fn parse_finite(field: RecordField, value: &str) -> Result<f64, RecordError> {
    match value.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(invalid(field, value)),
    }
}

/// Outcome of parsing a batch of rows.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParsedRecords {
    /// Rows that parsed successfully, in input order.
    pub records: Vec<Record>,
    /// Rejected rows as `(row index, error)`, in input order.
    pub rejected: Vec<(usize, RecordError)>,
}

impl ParsedRecords {
    /// Returns the first rejection, if any.
    ///
    /// Callers with a fail-fast policy can propagate this with `?`.
    pub fn first_error(&self) -> Option<&(usize, RecordError)> {
        self.rejected.first()
    }
}

/// Parses rows of raw fields (`total_bill, tip, size, day`), keeping valid rows and reporting
/// invalid ones.
pub fn parse_records<I, R, S>(rows: I) -> ParsedRecords
where
    I: IntoIterator<Item = R>,
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    let mut out = ParsedRecords::default();
    for (index, row) in rows.into_iter().enumerate() {
        match Record::from_fields(row.as_ref()) {
            Ok(record) => out.records.push(record),
            Err(err) => {
                tracing::debug!(row = index, error = %err, "rejected record");
                out.rejected.push((index, err));
            }
        }
    }
    out
}

/// Returns `(min, max)` of a numeric field.
///
/// Non-finite values are ignored. Returns `None` if no finite values are present.
pub fn extent(records: &[Record], field: NumericField) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in records.iter().map(|r| field.get(r)) {
        if !v.is_finite() {
            continue;
        }
        min = min.min(v);
        max = max.max(v);
    }
    if min.is_finite() && max.is_finite() {
        Some((min, max))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    #[test]
    fn parse_trims_and_reads_all_fields() {
        let r = Record::parse(" 16.99", "1.01 ", "2", " Sun ").unwrap();
        assert_eq!(r.total_bill, 16.99);
        assert_eq!(r.tip, 1.01);
        assert_eq!(r.size, 2);
        assert_eq!(r.day, "Sun");
    }

    #[test]
    fn non_numeric_fields_are_rejected_with_the_field_name() {
        let err = Record::parse("abc", "1.0", "2", "Sun").unwrap_err();
        assert_eq!(
            err,
            RecordError::InvalidRecord {
                field: RecordField::TotalBill,
                value: "abc".into(),
            }
        );

        let err = Record::parse("1.0", "1.0", "2.5", "Sun").unwrap_err();
        assert!(
            matches!(err, RecordError::InvalidRecord { field: RecordField::Size, .. }),
            "fractional size must not parse as an integer: {err:?}"
        );

        let err = Record::parse("1.0", "NaN", "2", "Sun").unwrap_err();
        assert!(
            matches!(err, RecordError::InvalidRecord { field: RecordField::Tip, .. }),
            "NaN is not a valid tip: {err:?}"
        );
    }

    #[test]
    fn short_rows_report_the_missing_field() {
        let err = Record::from_fields(&["1.0", "2.0"]).unwrap_err();
        assert_eq!(err, RecordError::MissingField(RecordField::Size));
    }

    #[test]
    fn parse_records_keeps_valid_rows_and_reports_rejected_ones() {
        let rows = vec![
            vec!["10", "1", "2", "Sun"],
            vec!["oops", "1", "2", "Sun"],
            vec!["20", "3", "4", "Sat"],
        ];
        let parsed = parse_records(rows);
        assert_eq!(parsed.records.len(), 2);
        assert_eq!(parsed.rejected.len(), 1);
        assert_eq!(parsed.rejected[0].0, 1);
        assert_eq!(parsed.first_error().map(|(i, _)| *i), Some(1));
        assert_eq!(parsed.records[1].day, "Sat");
    }

    #[test]
    fn extent_ignores_non_finite_values_and_handles_empty_input() {
        let mut records = vec![
            Record::parse("3", "1", "2", "Sun").unwrap(),
            Record::parse("9", "1", "2", "Sun").unwrap(),
        ];
        records[0].tip = f64::NAN;
        assert_eq!(extent(&records, NumericField::TotalBill), Some((3.0, 9.0)));
        assert_eq!(extent(&records, NumericField::Tip), Some((1.0, 1.0)));
        assert_eq!(extent(&records, NumericField::Size), Some((2.0, 2.0)));
        assert_eq!(extent(&[], NumericField::Tip), None);
    }
}
