// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout and scale engine for tipsviz charts.
//!
//! Every chart is a pure function from records and a [`ChartConfig`] to positioned geometry:
//! - **Scales** ([`ScaleLinear`], [`ScaleBand`], [`ScaleOrdinal`]) map data into pixels.
//! - **Generators** ([`LineGenerator`], [`AreaGenerator`], [`PieLayout`], [`layout`]) turn
//!   scaled data into paths, arcs and tree coordinates.
//! - **Axis ticks** ([`ticks`]) pick readable tick positions and labels.
//!
//! Nothing here draws. Hosts take the returned [`kurbo`] shapes and [`peniko`] colors and render
//! them however they like.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod area_chart;
mod axis;
mod bar_chart;
mod config;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod line_chart;
mod path;
mod pie;
mod pie_chart;
mod scale;
mod scatter_chart;
mod stacked_area_chart;
mod tree;
mod tree_chart;

pub use area_chart::{AreaChartSpec, AreaGeometry};
pub use axis::{CartesianAxes, Tick, ticks};
pub use bar_chart::{Bar, BarChartSpec, BarGeometry, BarOrientation};
pub use config::{ChartConfig, ColorFn, Margin, palette};
pub use error::ChartError;
pub use line_chart::{LineChartSpec, LineGeometry};
pub use path::{AreaGenerator, Baseline, Curve, LineGenerator, sort_by_x};
pub use pie::{ArcDescriptor, ArcGeometry, PieLayout};
pub use pie_chart::{PieChartSpec, PieGeometry, PieSlice};
pub use scale::{Scale, ScaleBand, ScaleLinear, ScaleOrdinal};
pub use scatter_chart::{ScatterChartSpec, ScatterGeometry, ScatterPoint};
pub use stacked_area_chart::{StackedAreaChartSpec, StackedAreaGeometry, StackedLayer};
pub use tree::{TreeLink, TreeNode, layout};
pub use tree_chart::{TreeChartSpec, TreeGeometry};

pub use tipsviz_transforms as transforms;
