// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line chart: one path through every record, ordered along x.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{BezPath, Point};
use tipsviz_transforms::{NumericField, Record};

use crate::axis::CartesianAxes;
use crate::config::ChartConfig;
use crate::path::{LineGenerator, sort_by_x};
use crate::scale::{Scale, ScaleLinear};

/// A line relating two numeric fields.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineChartSpec {
    /// Field on the x axis.
    pub x: NumericField,
    /// Field on the y axis.
    pub y: NumericField,
}

impl Default for LineChartSpec {
    fn default() -> Self {
        Self {
            x: NumericField::TotalBill,
            y: NumericField::Tip,
        }
    }
}

/// Output of [`LineChartSpec::render`].
#[derive(Clone, Debug)]
pub struct LineGeometry {
    /// The line, drawn with the configured curve.
    pub path: BezPath,
    /// The vertices the path passes through, sorted by x.
    pub points: Vec<Point>,
    /// Scale along x.
    pub x_scale: ScaleLinear,
    /// Scale along y.
    pub y_scale: ScaleLinear,
    /// Axis ticks.
    pub axes: CartesianAxes,
}

impl LineChartSpec {
    /// Sets the fields on the two axes.
    pub fn with_fields(mut self, x: NumericField, y: NumericField) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Lays out the line.
    ///
    /// Both axes run from `0` to the largest observed value. Records are drawn in ascending x
    /// order; ties keep their input order.
    pub fn render(&self, records: &[Record], config: &ChartConfig) -> LineGeometry {
        let plot = config.plot_rect();
        let x_max = records.iter().map(|r| self.x.get(r)).reduce(f64::max);
        let y_max = records.iter().map(|r| self.y.get(r)).reduce(f64::max);
        let x_scale = ScaleLinear::from_zero(x_max, (plot.x0, plot.x1));
        let y_scale = ScaleLinear::from_zero(y_max, (plot.y1, plot.y0));

        let mut points: Vec<Point> = records
            .iter()
            .map(|r| Point::new(x_scale.map(self.x.get(r)), y_scale.map(self.y.get(r))))
            .collect();
        sort_by_x(&mut points);
        let path = LineGenerator::new(config.curve).path(&points);
        tracing::debug!(points = points.len(), "rendered line chart");

        LineGeometry {
            path,
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
