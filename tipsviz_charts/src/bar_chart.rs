// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bar charts: one bar per day, vertical or horizontal.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect};
use tipsviz_transforms::{AggregateOp, AggregatedEntry, NumericField, Record, reorder, rollup};

use crate::axis::CartesianAxes;
use crate::config::ChartConfig;
use crate::error::ChartError;
use crate::scale::{Scale, ScaleBand, ScaleLinear};

/// Direction the bars grow in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BarOrientation {
    /// Categories along x, bars grow upward.
    #[default]
    Vertical,
    /// Categories along y (first category at the bottom), bars grow rightward.
    Horizontal,
}

/// A bar chart of one reduced field per day.
#[derive(Clone, Debug, PartialEq)]
pub struct BarChartSpec {
    /// Field reduced per day.
    pub field: NumericField,
    /// Reduction applied per day.
    pub op: AggregateOp,
    /// Bar direction.
    pub orientation: BarOrientation,
    /// Optional explicit category order. `None` keeps first-seen order.
    pub category_order: Option<Vec<String>>,
}

impl Default for BarChartSpec {
    fn default() -> Self {
        Self {
            field: NumericField::TotalBill,
            op: AggregateOp::Mean,
            orientation: BarOrientation::Vertical,
            category_order: None,
        }
    }
}

/// One positioned bar.
#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    /// The category and its reduced value.
    pub entry: AggregatedEntry,
    /// Bar rectangle in scene coordinates.
    pub rect: Rect,
}

/// Output of [`BarChartSpec::render`].
#[derive(Clone, Debug)]
pub struct BarGeometry {
    /// Bars in category order.
    pub bars: Vec<Bar>,
    /// Category scale (along x for vertical bars, along y for horizontal ones).
    pub band: ScaleBand,
    /// Value scale, starting at zero.
    pub value_scale: ScaleLinear,
    /// Axis ticks.
    pub axes: CartesianAxes,
}

impl BarChartSpec {
    /// A horizontal bar chart with the default field and reduction.
    pub fn horizontal() -> Self {
        Self::default().with_orientation(BarOrientation::Horizontal)
    }

    /// Sets the bar direction.
    pub fn with_orientation(mut self, orientation: BarOrientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Sets the reduced field and reduction.
    pub fn with_field(mut self, field: NumericField, op: AggregateOp) -> Self {
        self.field = field;
        self.op = op;
        self
    }

    /// Puts categories into an explicit order.
    pub fn with_category_order<S: Into<String>>(
        mut self,
        order: impl IntoIterator<Item = S>,
    ) -> Self {
        self.category_order = Some(order.into_iter().map(Into::into).collect());
        self
    }

    /// Reduces the records per day and lays out the bars.
    pub fn render(&self, records: &[Record], config: &ChartConfig) -> Result<BarGeometry, ChartError> {
        let plot = config.plot_rect();
        let mut entries = rollup(records, self.field, self.op);
        if let Some(order) = &self.category_order {
            entries = reorder(&entries, order.as_slice());
        }
        let max = entries
            .iter()
            .map(|e| e.value)
            .filter(|v| v.is_finite())
            .reduce(f64::max);
        let keys = entries.iter().map(|e| e.key.as_str());

        let (band, value_scale) = match self.orientation {
            BarOrientation::Vertical => (
                ScaleBand::new(keys, (plot.x0, plot.x1))?,
                ScaleLinear::from_zero(max, (plot.y1, plot.y0)),
            ),
            BarOrientation::Horizontal => (
                ScaleBand::new(keys, (plot.y1, plot.y0))?,
                ScaleLinear::from_zero(max, (plot.x0, plot.x1)),
            ),
        };
        let band = band.with_padding(config.band_padding);
        let zero = value_scale.map(0.0);
        let bandwidth = band.bandwidth();

        let bars = entries
            .into_iter()
            .enumerate()
            .map(|(i, entry)| {
                let value = if entry.value.is_finite() { entry.value } else { 0.0 };
                let start = band.x(i);
                let end = value_scale.map(value);
                let rect = match self.orientation {
                    BarOrientation::Vertical => Rect::from_points(
                        Point::new(start, zero),
                        Point::new(start + bandwidth, end),
                    ),
                    BarOrientation::Horizontal => Rect::from_points(
                        Point::new(zero, start),
                        Point::new(end, start + bandwidth),
                    ),
                };
                Bar { entry, rect }
            })
            .collect::<Vec<_>>();
        tracing::debug!(bars = bars.len(), orientation = ?self.orientation, "rendered bar chart");

        let band_axis = Scale::from(band.clone());
        let value_axis = Scale::from(value_scale);
        let axes = match self.orientation {
            BarOrientation::Vertical => {
                CartesianAxes::new(plot, &band_axis, &value_axis, config.tick_count)
            }
            BarOrientation::Horizontal => {
                CartesianAxes::new(plot, &value_axis, &band_axis, config.tick_count)
            }
        };

        Ok(BarGeometry {
            bars,
            band,
            value_scale,
            axes,
        })
    }
}
