// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Area chart: the region between a series and its lowest value.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{BezPath, Point};
use tipsviz_transforms::{NumericField, Record, extent};

use crate::axis::CartesianAxes;
use crate::config::ChartConfig;
use crate::path::{AreaGenerator, LineGenerator, sort_by_x};
use crate::scale::{Scale, ScaleLinear};

/// A filled area relating two numeric fields.
///
/// Unlike the line chart, both scales cover the observed `[min, max]` extent, and the area is
/// closed against the y position of the smallest y value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AreaChartSpec {
    /// Field on the x axis.
    pub x: NumericField,
    /// Field on the y axis.
    pub y: NumericField,
}

impl Default for AreaChartSpec {
    fn default() -> Self {
        Self {
            x: NumericField::TotalBill,
            y: NumericField::Tip,
        }
    }
}

/// Output of [`AreaChartSpec::render`].
#[derive(Clone, Debug)]
pub struct AreaGeometry {
    /// Closed outline of the filled region.
    pub area: BezPath,
    /// The top edge alone, for stroking.
    pub top: BezPath,
    /// Pixel y of the baseline.
    pub baseline: f64,
    /// Scale along x.
    pub x_scale: ScaleLinear,
    /// Scale along y.
    pub y_scale: ScaleLinear,
    /// Axis ticks.
    pub axes: CartesianAxes,
}

impl AreaChartSpec {
    /// Sets the fields on the two axes.
    pub fn with_fields(mut self, x: NumericField, y: NumericField) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Lays out the area.
    pub fn render(&self, records: &[Record], config: &ChartConfig) -> AreaGeometry {
        let plot = config.plot_rect();
        let x_scale = ScaleLinear::from_extent(extent(records, self.x), (plot.x0, plot.x1));
        let y_scale = ScaleLinear::from_extent(extent(records, self.y), (plot.y1, plot.y0));
        let baseline = y_scale.map(y_scale.domain().0);

        let mut points: Vec<Point> = records
            .iter()
            .map(|r| Point::new(x_scale.map(self.x.get(r)), y_scale.map(self.y.get(r))))
            .collect();
        sort_by_x(&mut points);
        let area = AreaGenerator::new(config.curve).path(&points, baseline);
        let top = LineGenerator::new(config.curve).path(&points);
        tracing::debug!(points = points.len(), baseline, "rendered area chart");

        AreaGeometry {
            area,
            top,
            baseline,
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

    use kurbo::{PathEl, Shape};

    use super::*;
    use crate::path::Curve;

    fn record(total_bill: f64, tip: f64) -> Record {
        Record {
            total_bill,
            tip,
            size: 2,
            day: String::from("Thur"),
        }
    }

    #[test]
    fn baseline_is_the_bottom_of_the_plot() {
        let config = ChartConfig::default().with_curve(Curve::Linear);
        let records = [record(10.0, 2.0), record(20.0, 5.0), record(15.0, 3.0)];
        let geom = AreaChartSpec::default().render(&records, &config);
        assert_eq!(geom.baseline, config.plot_rect().y1);
        let bbox = geom.area.bounding_box();
        assert_eq!(bbox.x0, config.plot_rect().x0);
        assert_eq!(bbox.x1, config.plot_rect().x1);
        assert_eq!(bbox.y1, geom.baseline);
    }

    #[test]
    fn area_top_edge_is_the_line() {
        let records = [record(10.0, 2.0), record(20.0, 5.0), record(15.0, 3.0)];
        let geom = AreaChartSpec::default().render(&records, &ChartConfig::default());
        let n = geom.top.elements().len();
        assert_eq!(&geom.area.elements()[..n], geom.top.elements());
        assert_eq!(geom.area.elements().last(), Some(&PathEl::ClosePath));
    }

    #[test]
    fn single_record_collapses_to_the_plot_corner() {
        let config = ChartConfig::default();
        let geom = AreaChartSpec::default().render(&[record(12.0, 3.0)], &config);
        assert!(geom.x_scale.is_degenerate(), "single value domain");
        assert_eq!(geom.baseline, config.plot_rect().y1);
    }
}
