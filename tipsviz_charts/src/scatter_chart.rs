// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scatter plot: one circle per record.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Point;
use tipsviz_transforms::{NumericField, Record};

use crate::axis::CartesianAxes;
use crate::config::ChartConfig;
use crate::scale::{Scale, ScaleLinear};

/// A scatter plot of two numeric fields, optionally sizing points by a third.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScatterChartSpec {
    /// Field on the x axis.
    pub x: NumericField,
    /// Field on the y axis.
    pub y: NumericField,
    /// Field used as the point radius in pixels, or `None` for [`ScatterChartSpec::radius`].
    pub size: Option<NumericField>,
    /// Fixed radius used when `size` is `None`.
    pub radius: f64,
}

impl Default for ScatterChartSpec {
    fn default() -> Self {
        Self {
            x: NumericField::TotalBill,
            y: NumericField::Tip,
            size: Some(NumericField::Size),
            radius: 3.0,
        }
    }
}

/// A positioned scatter point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScatterPoint {
    /// Circle center.
    pub center: Point,
    /// Circle radius (never negative).
    pub radius: f64,
    /// Index of the source record.
    pub record: usize,
}

/// Output of [`ScatterChartSpec::render`].
#[derive(Clone, Debug)]
pub struct ScatterGeometry {
    /// One point per record, in record order.
    pub points: Vec<ScatterPoint>,
    /// Scale along x.
    pub x_scale: ScaleLinear,
    /// Scale along y.
    pub y_scale: ScaleLinear,
    /// Axis ticks.
    pub axes: CartesianAxes,
}

impl ScatterChartSpec {
    /// Sets the fields on the two axes.
    pub fn with_fields(mut self, x: NumericField, y: NumericField) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Sizes points by a field, or uses the fixed radius when `None`.
    pub fn with_size(mut self, size: Option<NumericField>) -> Self {
        self.size = size;
        self
    }

    /// Lays out the points.
    ///
    /// Both axes run from `0` to the largest observed value, so the origin sits at the bottom
    /// left corner of the plot.
    pub fn render(&self, records: &[Record], config: &ChartConfig) -> ScatterGeometry {
        let plot = config.plot_rect();
        let x_max = records.iter().map(|r| self.x.get(r)).reduce(f64::max);
        let y_max = records.iter().map(|r| self.y.get(r)).reduce(f64::max);
        let x_scale = ScaleLinear::from_zero(x_max, (plot.x0, plot.x1));
        let y_scale = ScaleLinear::from_zero(y_max, (plot.y1, plot.y0));

        let points = records
            .iter()
            .enumerate()
            .map(|(record, r)| ScatterPoint {
                center: Point::new(x_scale.map(self.x.get(r)), y_scale.map(self.y.get(r))),
                radius: self.size.map_or(self.radius, |f| f.get(r)).max(0.0),
                record,
            })
            .collect();
        tracing::debug!(records = records.len(), "rendered scatter chart");

        ScatterGeometry {
            points,
            x_scale,
            y_scale,
            axes: CartesianAxes::new(
                plot,
                &Scale::from(x_scale),
                &Scale::from(y_scale),
                config.tick_count,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::String;
    use alloc::vec;

    use super::*;

    fn record(total_bill: f64, tip: f64, size: i32) -> Record {
        Record {
            total_bill,
            tip,
            size,
            day: String::from("Sun"),
        }
    }

    #[test]
    fn points_span_the_plot_from_the_origin() {
        let config = ChartConfig::default();
        let plot = config.plot_rect();
        let records = vec![record(10.0, 1.0, 2), record(40.0, 4.0, 3)];
        let geom = ScatterChartSpec::default().render(&records, &config);

        assert_eq!(geom.x_scale.domain(), (0.0, 40.0));
        assert_eq!(geom.points[1].center, Point::new(plot.x1, plot.y0));
        assert_eq!(geom.points[0].center.x, plot.x0 + plot.width() / 4.0);
        assert_eq!(geom.points[0].radius, 2.0);
        assert_eq!(geom.points[1].record, 1);
    }

    #[test]
    fn fixed_radius_when_size_is_disabled() {
        let geom = ScatterChartSpec::default()
            .with_size(None)
            .render(&[record(1.0, 1.0, 6)], &ChartConfig::default());
        assert_eq!(geom.points[0].radius, 3.0);
    }

    #[test]
    fn empty_input_renders_nothing() {
        let geom = ScatterChartSpec::default().render(&[], &ChartConfig::default());
        assert!(geom.points.is_empty(), "no records, no points");
        assert!(geom.x_scale.is_degenerate(), "empty domain collapses to zero");
    }
}
