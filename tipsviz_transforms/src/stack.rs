// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stack layout: cumulative bands from several aggregated series.
//!
//! This is the "zero" stack offset in Vega terms: every category starts its stack at `0`, and
//! each series is layered on top of the ones before it in the requested key order.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::aggregate::AggregatedEntry;

/// One series' band within a single category.
#[derive(Clone, Debug, PartialEq)]
pub struct StackBand {
    /// Category the band belongs to (the position on the shared axis).
    pub category: String,
    /// Cumulative value below this band.
    pub baseline: f64,
    /// `baseline` plus this series' own value.
    pub top: f64,
}

impl StackBand {
    /// Returns the band's own value (`top - baseline`).
    pub fn value(&self) -> f64 {
        self.top - self.baseline
    }
}

/// The stacked bands of one series, covering every category.
#[derive(Clone, Debug, PartialEq)]
pub struct StackedSeries {
    /// Series key.
    pub key: String,
    /// One band per category, in category order.
    pub bands: Vec<StackBand>,
}

impl StackedSeries {
    /// Looks up the band for a category.
    pub fn band(&self, category: &str) -> Option<&StackBand> {
        self.bands.iter().find(|b| b.category == category)
    }
}

/// Stacks aggregated series.
///
/// Series are layered in `key_order`: within each category, series `i`'s baseline is the sum of
/// the values of series `0..i` and its top is that baseline plus its own value.
///
/// Categories are ordered by first appearance, walking the series in `key_order` and each
/// series' entries in aggregation order. A category missing from a series (or a key missing
/// from `aggregated_by_key` altogether) contributes `0`, so that band has zero height.
/// Non-finite values are also treated as `0`.
pub fn stack<S: AsRef<str>>(
    aggregated_by_key: &HashMap<String, Vec<AggregatedEntry>>,
    key_order: &[S],
) -> Vec<StackedSeries> {
    let mut categories: Vec<&str> = Vec::new();
    for key in key_order {
        let Some(entries) = aggregated_by_key.get(key.as_ref()) else {
            tracing::debug!(key = key.as_ref(), "stack key has no aggregated entries");
            continue;
        };
        for entry in entries {
            if !categories.contains(&entry.key.as_str()) {
                categories.push(entry.key.as_str());
            }
        }
    }

    let mut running: Vec<f64> = alloc::vec![0.0; categories.len()];
    key_order
        .iter()
        .map(|key| {
            let entries = aggregated_by_key.get(key.as_ref());
            let bands = categories
                .iter()
                .zip(running.iter_mut())
                .map(|(&category, sum)| {
                    let value = entries
                        .and_then(|es| es.iter().find(|e| e.key == category))
                        .map(|e| e.value)
                        .filter(|v| v.is_finite())
                        .unwrap_or(0.0);
                    let baseline = *sum;
                    *sum += value;
                    StackBand {
                        category: String::from(category),
                        baseline,
                        top: *sum,
                    }
                })
                .collect();
            StackedSeries {
                key: String::from(key.as_ref()),
                bands,
            }
        })
        .collect()
}

/// Returns `(min, max)` over every band's baseline and top.
///
/// Returns `None` when there are no bands.
pub fn stack_extent(series: &[StackedSeries]) -> Option<(f64, f64)> {
    series
        .iter()
        .flat_map(|s| s.bands.iter())
        .flat_map(|b| [b.baseline, b.top])
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((f64::min(lo, v), f64::max(hi, v))),
        })
}
