// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stacked area chart: per-day means of several fields, layered on top of each other.

extern crate alloc;

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::{BezPath, Point};
use peniko::Color;
use tipsviz_transforms::{
    AggregateOp, DAY_ORDER, NumericField, Record, StackedSeries, reorder, rollup, stack,
    stack_extent,
};

use crate::axis::CartesianAxes;
use crate::config::ChartConfig;
use crate::error::ChartError;
use crate::path::{AreaGenerator, Curve};
use crate::scale::{Scale, ScaleLinear, ScaleOrdinal};

/// A stacked area chart builder.
///
/// Each field is reduced per day with [`StackedAreaChartSpec::op`], the days are put into
/// `category_order`, and the fields are stacked in `fields` order (the first field sits on the
/// zero baseline). Categories are spread evenly along x by index.
#[derive(Clone, Debug, PartialEq)]
pub struct StackedAreaChartSpec {
    /// Fields to stack, bottom to top.
    pub fields: Vec<NumericField>,
    /// Reduction applied to each field per day.
    pub op: AggregateOp,
    /// Explicit category order; days not listed follow in first-seen order.
    pub category_order: Vec<String>,
    /// Interpolation of the band edges.
    pub curve: Curve,
}

impl Default for StackedAreaChartSpec {
    fn default() -> Self {
        Self {
            fields: vec![NumericField::TotalBill, NumericField::Tip],
            op: AggregateOp::Mean,
            category_order: DAY_ORDER.iter().map(|d| String::from(*d)).collect(),
            curve: Curve::Linear,
        }
    }
}

/// One filled band of the stack.
#[derive(Clone, Debug)]
pub struct StackedLayer {
    /// Series key (the field's column name).
    pub key: String,
    /// Fill color from [`ChartConfig::color_of`].
    pub fill: Color,
    /// Closed outline between the band's baseline and top.
    pub path: BezPath,
    /// The stacked values behind the outline.
    pub series: StackedSeries,
}

/// Output of [`StackedAreaChartSpec::render`].
#[derive(Clone, Debug)]
pub struct StackedAreaGeometry {
    /// Layers bottom to top.
    pub layers: Vec<StackedLayer>,
    /// Categories in x order.
    pub categories: Vec<String>,
    /// Scale from category index to x.
    pub x_scale: ScaleLinear,
    /// Scale along y.
    pub y_scale: ScaleLinear,
    /// Axis ticks; x ticks carry the category names.
    pub axes: CartesianAxes,
}

impl StackedAreaChartSpec {
    /// Sets the stacked fields, bottom to top.
    pub fn with_fields(mut self, fields: impl IntoIterator<Item = NumericField>) -> Self {
        self.fields = fields.into_iter().collect();
        self
    }

    /// Sets the per-day reduction.
    pub fn with_op(mut self, op: AggregateOp) -> Self {
        self.op = op;
        self
    }

    /// Sets the band edge interpolation.
    pub fn with_curve(mut self, curve: Curve) -> Self {
        self.curve = curve;
        self
    }

    /// Stacks the fields and lays out one band per field.
    ///
    /// Returns [`ChartError::UnknownCategory`] when `color_of` has no color for a field name.
    pub fn render(
        &self,
        records: &[Record],
        config: &ChartConfig,
    ) -> Result<StackedAreaGeometry, ChartError> {
        let plot = config.plot_rect();
        let keys: Vec<&str> = self.fields.iter().map(|f| f.name()).collect();
        let by_key: HashMap<String, _> = self
            .fields
            .iter()
            .map(|&field| {
                let entries = rollup(records, field, self.op);
                (String::from(field.name()), reorder(&entries, self.category_order.as_slice()))
            })
            .collect();
        let stacked = stack(&by_key, keys.as_slice());

        let categories: Vec<String> = stacked
            .first()
            .map(|s| s.bands.iter().map(|b| b.category.clone()).collect())
            .unwrap_or_default();
        let last_index = categories.len().saturating_sub(1) as f64;
        let x_scale = ScaleLinear::new((0.0, last_index), (plot.x0, plot.x1));
        let y_max = stack_extent(&stacked).map(|(_, hi)| hi);
        let y_scale = ScaleLinear::from_zero(y_max, (plot.y1, plot.y0));

        let generator = AreaGenerator::new(self.curve);
        let mut layers = Vec::with_capacity(stacked.len());
        for series in stacked {
            let fill = config.color(&series.key)?;
            let (top, bottom): (Vec<Point>, Vec<Point>) = series
                .bands
                .iter()
                .enumerate()
                .map(|(i, band)| {
                    let x = x_scale.map(i as f64);
                    (
                        Point::new(x, y_scale.map(band.top)),
                        Point::new(x, y_scale.map(band.baseline)),
                    )
                })
                .unzip();
            layers.push(StackedLayer {
                key: series.key.clone(),
                fill,
                path: generator.path_between(&top, &bottom),
                series,
            });
        }

        let positions: Vec<f64> = (0..categories.len())
            .map(|i| x_scale.map(i as f64))
            .collect();
        let x_axis = ScaleOrdinal::new(categories.iter().map(String::as_str), positions)?;
        tracing::debug!(
            layers = layers.len(),
            categories = categories.len(),
            "rendered stacked area chart"
        );

        Ok(StackedAreaGeometry {
            layers,
            axes: CartesianAxes::new(
                plot,
                &Scale::from(x_axis),
                &Scale::from(y_scale),
                config.tick_count,
            ),
            categories,
            x_scale,
            y_scale,
        })
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use peniko::color::palette::css;

    use super::*;

    fn record(day: &str, total_bill: f64, tip: f64) -> Record {
        Record {
            total_bill,
            tip,
            size: 2,
            day: String::from(day),
        }
    }

    fn sample() -> Vec<Record> {
        vec![
            record("Sun", 20.0, 4.0),
            record("Thur", 10.0, 2.0),
            record("Sun", 30.0, 6.0),
            record("Fri", 12.0, 1.0),
        ]
    }

    #[test]
    fn categories_follow_day_order() {
        let geom = StackedAreaChartSpec::default()
            .render(&sample(), &ChartConfig::default())
            .unwrap();
        assert_eq!(geom.categories, ["Thur", "Fri", "Sun"]);
        let labels: Vec<&str> = geom.axes.x.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, ["Thur", "Fri", "Sun"]);
    }

    #[test]
    fn second_field_sits_on_the_first() {
        let geom = StackedAreaChartSpec::default()
            .render(&sample(), &ChartConfig::default())
            .unwrap();
        let [bill, tip] = &geom.layers[..] else {
            panic!("expected two layers");
        };
        assert_eq!(bill.key, "total_bill");
        assert_eq!(tip.key, "tip");
        for (b, t) in bill.series.bands.iter().zip(&tip.series.bands) {
            assert_eq!(b.baseline, 0.0);
            assert_eq!(t.baseline, b.top);
        }
        // Sunday: mean bill 25, mean tip 5.
        assert_eq!(tip.series.bands[2].top, 30.0);
        assert_eq!(geom.y_scale.domain(), (0.0, 30.0));
        assert_eq!(bill.fill, css::BLUE);
        assert_eq!(tip.fill, css::GREEN);
    }

    #[test]
    fn categories_span_the_plot_width() {
        let config = ChartConfig::default();
        let geom = StackedAreaChartSpec::default()
            .render(&sample(), &config)
            .unwrap();
        let positions: Vec<f64> = geom.axes.x.iter().map(|t| t.position).collect();
        assert_eq!(positions.first(), Some(&config.plot_rect().x0));
        assert_eq!(positions.last(), Some(&config.plot_rect().x1));
    }

    #[test]
    fn missing_series_color_is_an_error() {
        let config = ChartConfig::default().with_color_of(|_| None);
        let err = StackedAreaChartSpec::default()
            .render(&sample(), &config)
            .unwrap_err();
        assert_eq!(
            err,
            ChartError::UnknownCategory {
                key: "total_bill".into()
            }
        );
    }

    #[test]
    fn empty_input_has_empty_layers() {
        let geom = StackedAreaChartSpec::default()
            .render(&[], &ChartConfig::default())
            .unwrap();
        assert!(geom.categories.is_empty(), "no records, no categories");
        assert!(
            geom.layers.iter().all(|l| l.path.elements().is_empty()),
            "no records, no outlines"
        );
    }
}
