// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Group-by-key reduction over records.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::record::{NumericField, Record};

/// One reduced value per distinct key.
#[derive(Clone, Debug, PartialEq)]
pub struct AggregatedEntry {
    /// Group key.
    pub key: String,
    /// Reduced value for the group.
    pub value: f64,
}

impl AggregatedEntry {
    /// Creates an entry.
    pub fn new(key: impl Into<String>, value: f64) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// Reduction applied to each group by [`rollup`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateOp {
    /// Count rows.
    Count,
    /// Sum values (skips non-finite).
    Sum,
    /// Minimum value (skips non-finite).
    Min,
    /// Maximum value (skips non-finite).
    Max,
    /// Mean value (skips non-finite).
    Mean,
}

impl AggregateOp {
    /// Reduces a sequence of values.
    ///
    /// `Count` counts every value. The other operations skip non-finite values and return
    /// `NaN` when no finite value remains.
    pub fn apply(self, values: impl IntoIterator<Item = f64>) -> f64 {
        let mut count = 0_usize;
        let mut finite = 0_usize;
        let mut sum = 0.0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for v in values {
            count += 1;
            if !v.is_finite() {
                continue;
            }
            finite += 1;
            sum += v;
            min = min.min(v);
            max = max.max(v);
        }
        match self {
            Self::Count => count as f64,
            _ if finite == 0 => f64::NAN,
            Self::Sum => sum,
            Self::Min => min,
            Self::Max => max,
            Self::Mean => sum / finite as f64,
        }
    }
}

/// Groups `records` by `key_fn` and reduces each group with `reduce_fn`.
///
/// The output holds exactly one entry per distinct key, ordered by the first occurrence of
/// the key in `records`. Each group is handed to `reduce_fn` in input order.
pub fn group_reduce<'a, R, K, F>(records: &'a [R], key_fn: K, reduce_fn: F) -> Vec<AggregatedEntry>
where
    K: Fn(&'a R) -> &'a str,
    F: Fn(&[&'a R]) -> f64,
{
    let mut slots: HashMap<&'a str, usize> = HashMap::new();
    let mut groups: Vec<(&'a str, Vec<&'a R>)> = Vec::new();
    for record in records {
        let key = key_fn(record);
        let slot = *slots.entry(key).or_insert_with(|| {
            groups.push((key, Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(record);
    }
    groups
        .into_iter()
        .map(|(key, rows)| AggregatedEntry::new(key, reduce_fn(&rows)))
        .collect()
}

/// Groups records by `day` and reduces `field` with `op`.
///
/// This is the common per-category summary used by bar, pie and stacked charts.
pub fn rollup(records: &[Record], field: NumericField, op: AggregateOp) -> Vec<AggregatedEntry> {
    let out = group_reduce(
        records,
        |r| r.day.as_str(),
        |rows| op.apply(rows.iter().map(|r| field.get(r))),
    );
    tracing::trace!(
        field = field.name(),
        records = records.len(),
        groups = out.len(),
        "rollup"
    );
    out
}

/// Reorders entries into an explicit category order.
///
/// Entries whose key appears in `order` come first, in `order`. Entries with keys absent from
/// `order` follow in their original relative order. Keys listed in `order` but missing from
/// `entries` are skipped.
pub fn reorder<S: AsRef<str>>(entries: &[AggregatedEntry], order: &[S]) -> Vec<AggregatedEntry> {
    let mut out: Vec<AggregatedEntry> = order
        .iter()
        .filter_map(|key| entries.iter().find(|e| e.key == key.as_ref()))
        .cloned()
        .collect();
    out.extend(
        entries
            .iter()
            .filter(|e| !order.iter().any(|key| key.as_ref() == e.key))
            .cloned(),
    );
    out
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;
    use crate::DAY_ORDER;

    fn rec(day: &str, total_bill: f64) -> Record {
        Record {
            total_bill,
            tip: 1.0,
            size: 2,
            day: day.into(),
        }
    }

    #[test]
    fn mean_rollup_preserves_first_seen_key_order() {
        let records = vec![rec("Sun", 10.0), rec("Sun", 20.0), rec("Mon", 5.0)];
        let out = rollup(&records, NumericField::TotalBill, AggregateOp::Mean);
        assert_eq!(
            out,
            vec![AggregatedEntry::new("Sun", 15.0), AggregatedEntry::new("Mon", 5.0)]
        );
    }

    #[test]
    fn group_reduce_hands_groups_over_in_input_order() {
        let records = vec![rec("a", 1.0), rec("b", 2.0), rec("a", 3.0)];
        // Encode the order as digits so a shuffled group would be visible.
        let out = group_reduce(
            &records,
            |r| r.day.as_str(),
            |rows| rows.iter().fold(0.0, |acc, r| acc * 10.0 + r.total_bill),
        );
        assert_eq!(out[0], AggregatedEntry::new("a", 13.0));
        assert_eq!(out[1], AggregatedEntry::new("b", 2.0));
    }

    #[test]
    fn empty_input_yields_no_entries() {
        let out = rollup(&[], NumericField::Tip, AggregateOp::Mean);
        assert!(out.is_empty(), "expected no groups");
    }

    #[test]
    fn ops_skip_non_finite_values() {
        let values = [1.0, f64::NAN, 3.0];
        assert_eq!(AggregateOp::Count.apply(values), 3.0);
        assert_eq!(AggregateOp::Sum.apply(values), 4.0);
        assert_eq!(AggregateOp::Mean.apply(values), 2.0);
        assert_eq!(AggregateOp::Min.apply(values), 1.0);
        assert_eq!(AggregateOp::Max.apply(values), 3.0);
        assert!(AggregateOp::Mean.apply([f64::NAN]).is_nan());
        assert_eq!(AggregateOp::Count.apply([]), 0.0);
    }

    #[test]
    fn reorder_follows_explicit_order_then_leftovers() {
        let entries = vec![
            AggregatedEntry::new("Sun", 1.0),
            AggregatedEntry::new("Holiday", 9.0),
            AggregatedEntry::new("Thur", 2.0),
            AggregatedEntry::new("Sat", 3.0),
        ];
        let out = reorder(&entries, &DAY_ORDER);
        let keys: Vec<&str> = out.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, ["Thur", "Sat", "Sun", "Holiday"]);
    }
}
