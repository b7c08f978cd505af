// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis tick derivation.
//!
//! Axes are drawn by the host; this module only decides *where* ticks go and what they say.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Rect;

use crate::format::format_tick_with_step;
use crate::scale::Scale;

/// A single axis tick.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    /// Position along the axis, in pixels.
    pub position: f64,
    /// Human-readable label.
    pub label: String,
}

/// Ticks for a chart with an x axis along the bottom of the plot and a y axis along its left.
#[derive(Clone, Debug, PartialEq)]
pub struct CartesianAxes {
    /// The plot rectangle the axes frame.
    pub plot: Rect,
    /// Ticks along x (positions are x coordinates).
    pub x: Vec<Tick>,
    /// Ticks along y (positions are y coordinates).
    pub y: Vec<Tick>,
}

impl CartesianAxes {
    /// Derives both tick sets.
    pub fn new(plot: Rect, x: &Scale, y: &Scale, count_hint: usize) -> Self {
        Self {
            plot,
            x: ticks(x, count_hint),
            y: ticks(y, count_hint),
        }
    }
}

/// Derives a small set of representative ticks for a scale.
///
/// - Linear scales produce roughly `count_hint` ticks at a "nice" step (`{1, 2, 5} * 10^k`)
///   lying within the domain, labeled with the precision the step needs. A degenerate domain
///   produces a single tick.
/// - Band scales produce one tick per category, centered on its band.
/// - Ordinal scales produce one tick per category at its mapped position.
///
/// `count_hint` only affects linear scales; `0` yields no ticks for them.
pub fn ticks(scale: &Scale, count_hint: usize) -> Vec<Tick> {
    match scale {
        Scale::Linear(s) => {
            let values = s.ticks(count_hint);
            let step = tick_step(&values);
            values
                .into_iter()
                .map(|v| Tick {
                    position: s.map(v),
                    label: format_tick_with_step(v, step),
                })
                .collect()
        }
        Scale::Band(s) => {
            let half = s.bandwidth() / 2.0;
            s.domain()
                .iter()
                .enumerate()
                .map(|(i, key)| Tick {
                    position: s.x(i) + half,
                    label: key.clone(),
                })
                .collect()
        }
        Scale::Ordinal(s) => s
            .domain()
            .iter()
            .filter_map(|key| {
                let position = *s.map(key).ok()?;
                Some(Tick {
                    position,
                    label: key.clone(),
                })
            })
            .collect(),
    }
}

fn tick_step(ticks: &[f64]) -> f64 {
    match ticks {
        [a, b, ..] => (b - a).abs(),
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;
    use crate::scale::{ScaleBand, ScaleLinear, ScaleOrdinal};

    #[test]
    fn linear_ticks_map_to_pixels_with_readable_labels() {
        let scale = Scale::from(ScaleLinear::new((0.0, 10.0), (0.0, 100.0)));
        let out = ticks(&scale, 5);
        let labels: Vec<&str> = out.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, ["0", "2", "4", "6", "8", "10"]);
        assert_eq!(out[1].position, 20.0);
        assert_eq!(out[5].position, 100.0);
    }

    #[test]
    fn fractional_steps_get_decimals() {
        let scale = Scale::from(ScaleLinear::new((0.0, 1.0), (0.0, 1.0)));
        let out = ticks(&scale, 4);
        assert_eq!(out[1].label, "0.2");
    }

    #[test]
    fn degenerate_linear_scale_has_one_tick() {
        let scale = Scale::from(ScaleLinear::new((0.0, 0.0), (30.0, 500.0)));
        let out = ticks(&scale, 10);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].position, 30.0);
        assert_eq!(out[0].label, "0");
    }

    #[test]
    fn band_ticks_are_centered_on_bands() {
        let band = ScaleBand::new(["Thur", "Fri"], (0.0, 200.0))
            .unwrap()
            .with_padding(0.2);
        let out = ticks(&Scale::from(band), 10);
        assert_eq!(
            out,
            vec![
                Tick {
                    position: 50.0,
                    label: "Thur".into()
                },
                Tick {
                    position: 150.0,
                    label: "Fri".into()
                },
            ]
        );
    }

    #[test]
    fn ordinal_ticks_use_mapped_positions() {
        let ordinal = ScaleOrdinal::new(["a", "b", "c"], vec![10.0, 20.0, 30.0]).unwrap();
        let out = ticks(&Scale::from(ordinal), 0);
        let positions: Vec<f64> = out.iter().map(|t| t.position).collect();
        assert_eq!(positions, [10.0, 20.0, 30.0]);
    }

    #[test]
    fn cartesian_axes_tick_both_scales() {
        let plot = Rect::new(0.0, 0.0, 100.0, 50.0);
        let x = Scale::from(ScaleLinear::new((0.0, 10.0), (0.0, 100.0)));
        let y = Scale::from(ScaleLinear::new((0.0, 5.0), (50.0, 0.0)));
        let axes = CartesianAxes::new(plot, &x, &y, 5);
        assert_eq!(axes.x.len(), 6);
        assert_eq!(axes.y.first().map(|t| t.position), Some(50.0));
        assert_eq!(axes.plot, plot);
    }
}
