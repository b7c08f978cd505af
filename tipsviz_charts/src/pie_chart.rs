// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pie (or donut) chart of one reduced field per day.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{BezPath, Point};
use peniko::Color;
use tipsviz_transforms::{AggregateOp, NumericField, Record, reorder, rollup};

use crate::config::ChartConfig;
use crate::error::ChartError;
use crate::pie::{ArcDescriptor, ArcGeometry, PieLayout};

/// A pie chart builder.
///
/// Radii come from [`ChartConfig::inner_radius`] and [`ChartConfig::outer_radius`]; an inner
/// radius above zero draws a donut.
#[derive(Clone, Debug, PartialEq)]
pub struct PieChartSpec {
    /// Field reduced per day.
    pub field: NumericField,
    /// Reduction applied per day.
    pub op: AggregateOp,
    /// Angular layout (start angle and padding).
    pub layout: PieLayout,
    /// Optional explicit slice order. `None` keeps first-seen order.
    pub category_order: Option<Vec<String>>,
}

impl Default for PieChartSpec {
    fn default() -> Self {
        Self {
            field: NumericField::TotalBill,
            op: AggregateOp::Mean,
            layout: PieLayout::default(),
            category_order: None,
        }
    }
}

/// One drawable slice.
#[derive(Clone, Debug)]
pub struct PieSlice {
    /// Angles and source entry.
    pub arc: ArcDescriptor,
    /// Closed slice outline.
    pub path: BezPath,
    /// Label anchor.
    pub centroid: Point,
    /// Fill color from [`ChartConfig::color_of`].
    pub fill: Color,
}

/// Output of [`PieChartSpec::render`].
#[derive(Clone, Debug)]
pub struct PieGeometry {
    /// Slices in layout order.
    pub slices: Vec<PieSlice>,
    /// The geometry the slices were built with.
    pub arc: ArcGeometry,
}

impl PieChartSpec {
    /// Sets the reduced field and reduction.
    pub fn with_field(mut self, field: NumericField, op: AggregateOp) -> Self {
        self.field = field;
        self.op = op;
        self
    }

    /// Sets the angular layout.
    pub fn with_layout(mut self, layout: PieLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Puts slices into an explicit category order.
    pub fn with_category_order<S: Into<String>>(
        mut self,
        order: impl IntoIterator<Item = S>,
    ) -> Self {
        self.category_order = Some(order.into_iter().map(Into::into).collect());
        self
    }

    /// Reduces the records per day and lays out one slice per day, centered in the output.
    ///
    /// Returns [`ChartError::UnknownCategory`] when `color_of` has no color for a day.
    pub fn render(&self, records: &[Record], config: &ChartConfig) -> Result<PieGeometry, ChartError> {
        let mut entries = rollup(records, self.field, self.op);
        if let Some(order) = &self.category_order {
            entries = reorder(&entries, order.as_slice());
        }
        let center = Point::new(config.output_width / 2.0, config.output_height / 2.0);
        let arc = ArcGeometry::new(center, config.inner_radius, config.outer_radius);

        let slices = self
            .layout
            .arcs(&entries)
            .into_iter()
            .map(|descriptor| {
                Ok(PieSlice {
                    fill: config.color(&descriptor.entry.key)?,
                    path: arc.outline(&descriptor),
                    centroid: arc.centroid(&descriptor),
                    arc: descriptor,
                })
            })
            .collect::<Result<Vec<_>, ChartError>>()?;
        tracing::debug!(slices = slices.len(), "rendered pie chart");

        Ok(PieGeometry { slices, arc })
    }
}
