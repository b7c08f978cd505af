// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Numeric range filtering of records.

extern crate alloc;

use alloc::vec::Vec;

use crate::record::{NumericField, Record};

/// Keeps records whose `field` lies within `[min, max]` (inclusive).
///
/// This models the single user-adjustable range input of the charts. Applying the same filter
/// to the same records always produces the same subset, in input order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeFilter {
    /// Field to read.
    pub field: NumericField,
    /// Inclusive lower bound.
    pub min: f64,
    /// Inclusive upper bound.
    pub max: f64,
}

impl RangeFilter {
    /// Creates a filter. Bounds given in descending order are swapped.
    pub fn new(field: NumericField, min: f64, max: f64) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self { field, min, max }
    }

    /// Evaluates the filter for a single record.
    ///
    /// Non-finite field values never match.
    pub fn matches(&self, record: &Record) -> bool {
        let v = self.field.get(record);
        v.is_finite() && v >= self.min && v <= self.max
    }

    /// Returns the matching records, in input order.
    pub fn apply(&self, records: &[Record]) -> Vec<Record> {
        let out: Vec<Record> = records.iter().filter(|r| self.matches(r)).cloned().collect();
        tracing::debug!(
            field = self.field.name(),
            min = self.min,
            max = self.max,
            kept = out.len(),
            dropped = records.len() - out.len(),
            "range filter"
        );
        out
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    fn rec(total_bill: f64) -> Record {
        Record {
            total_bill,
            tip: 1.0,
            size: 2,
            day: "Sun".into(),
        }
    }

    #[test]
    fn bounds_are_inclusive_and_order_is_preserved() {
        let records = vec![rec(5.0), rec(10.0), rec(15.0), rec(20.0), rec(12.0)];
        let f = RangeFilter::new(NumericField::TotalBill, 10.0, 15.0);
        let kept: Vec<f64> = f.apply(&records).iter().map(|r| r.total_bill).collect();
        assert_eq!(kept, [10.0, 15.0, 12.0]);
    }

    #[test]
    fn swapped_bounds_are_normalized() {
        let f = RangeFilter::new(NumericField::Size, 4.0, 1.0);
        assert_eq!((f.min, f.max), (1.0, 4.0));
        assert!(f.matches(&rec(0.0)), "size 2 is within [1, 4]");
    }

    #[test]
    fn filtering_is_idempotent() {
        let records = vec![rec(5.0), rec(10.0), rec(15.0)];
        let f = RangeFilter::new(NumericField::TotalBill, 6.0, 30.0);
        let once = f.apply(&records);
        assert_eq!(f.apply(&once), once);
        assert_eq!(f.apply(&records), once);
    }
}
