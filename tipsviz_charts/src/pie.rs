// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pie layout: angular partitioning of a value series.
//!
//! Angles are in radians, measured clockwise from 12 o'clock (the usual pie convention in
//! y-down screen space). [`ArcGeometry`] converts them into drawable outlines.

extern crate alloc;

use alloc::vec::Vec;

use core::f64::consts::{FRAC_PI_2, TAU};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use kurbo::{BezPath, Circle, Point, Shape};
use tipsviz_transforms::AggregatedEntry;

/// One pie slice.
#[derive(Clone, Debug, PartialEq)]
pub struct ArcDescriptor {
    /// Start angle in radians.
    pub start_angle: f64,
    /// End angle in radians.
    pub end_angle: f64,
    /// Angular gap that follows this slice.
    pub pad_angle: f64,
    /// Position of the entry in the input.
    pub index: usize,
    /// The entry this slice represents.
    pub entry: AggregatedEntry,
}

impl ArcDescriptor {
    /// Returns the angular span of the slice.
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// Returns the angle halfway through the slice.
    pub fn mid_angle(&self) -> f64 {
        (self.start_angle + self.end_angle) / 2.0
    }
}

/// Lays out slices around a circle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PieLayout {
    /// Angle at which the first slice starts.
    pub start_angle: f64,
    /// Gap between adjacent slices.
    pub pad_angle: f64,
}

impl Default for PieLayout {
    fn default() -> Self {
        Self {
            start_angle: 0.0,
            pad_angle: 0.0,
        }
    }
}

impl PieLayout {
    /// Creates a layout starting at `start_angle` with no padding.
    pub fn new(start_angle: f64) -> Self {
        Self {
            start_angle,
            pad_angle: 0.0,
        }
    }

    /// Sets the gap between adjacent slices.
    pub fn with_pad_angle(mut self, pad_angle: f64) -> Self {
        self.pad_angle = pad_angle;
        self
    }

    /// Partitions the circle among `entries`, in input order.
    ///
    /// Each slice spans `(2π - n * pad) * value / total`, followed by a `pad` gap, so the last
    /// slice (plus its gap) ends at `start_angle + 2π`. Negative and non-finite values count
    /// as `0`. The padding is capped so that the gaps alone never exceed the circle.
    ///
    /// When the total is `0` (including empty input) every slice is a zero-angle slice at
    /// `start_angle`.
    pub fn arcs(&self, entries: &[AggregatedEntry]) -> Vec<ArcDescriptor> {
        let weight = |e: &AggregatedEntry| {
            if e.value.is_finite() && e.value > 0.0 {
                e.value
            } else {
                0.0
            }
        };
        let total: f64 = entries.iter().map(weight).sum();
        if total == 0.0 {
            tracing::debug!(entries = entries.len(), "pie total is zero");
            return entries
                .iter()
                .enumerate()
                .map(|(index, entry)| ArcDescriptor {
                    start_angle: self.start_angle,
                    end_angle: self.start_angle,
                    pad_angle: 0.0,
                    index,
                    entry: entry.clone(),
                })
                .collect();
        }

        let n = entries.len() as f64;
        let pad = if self.pad_angle.is_finite() {
            self.pad_angle.clamp(0.0, TAU / n)
        } else {
            0.0
        };
        let k = (TAU - n * pad) / total;
        let mut angle = self.start_angle;
        entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let start = angle;
                let end = start + weight(entry) * k;
                angle = end + pad;
                ArcDescriptor {
                    start_angle: start,
                    end_angle: end,
                    pad_angle: pad,
                    index,
                    entry: entry.clone(),
                }
            })
            .collect()
    }
}

/// Turns arc descriptors into drawable geometry around a center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcGeometry {
    /// Pie center in scene coordinates.
    pub center: Point,
    /// Inner radius (`0` for a pie, positive for a donut).
    pub inner_radius: f64,
    /// Outer radius.
    pub outer_radius: f64,
    /// Curve flattening tolerance for [`ArcGeometry::outline`].
    pub tolerance: f64,
}

impl ArcGeometry {
    /// Creates arc geometry.
    pub fn new(center: Point, inner_radius: f64, outer_radius: f64) -> Self {
        Self {
            center,
            inner_radius,
            outer_radius,
            tolerance: 0.1,
        }
    }

    /// Returns the closed outline of a slice (an annular sector for donuts).
    pub fn outline(&self, arc: &ArcDescriptor) -> BezPath {
        let circle = Circle::new(self.center, self.outer_radius);
        let segment = circle.segment(
            self.inner_radius,
            arc.start_angle - FRAC_PI_2,
            arc.sweep(),
        );
        segment.path_elements(self.tolerance).collect()
    }

    /// Returns the label anchor of a slice: its mid-angle at the mid-radius.
    pub fn centroid(&self, arc: &ArcDescriptor) -> Point {
        let r = (self.inner_radius + self.outer_radius) / 2.0;
        let a = arc.mid_angle() - FRAC_PI_2;
        Point::new(self.center.x + r * a.cos(), self.center.y + r * a.sin())
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use core::f64::consts::PI;

    use super::*;

    fn entries(values: &[f64]) -> Vec<AggregatedEntry> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| AggregatedEntry::new(alloc::format!("k{i}"), *v))
            .collect()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn spans_are_proportional_and_cover_the_circle() {
        let arcs = PieLayout::default().arcs(&entries(&[1.0, 1.0, 2.0]));
        let spans: Vec<f64> = arcs.iter().map(ArcDescriptor::sweep).collect();
        assert!(close(spans[0], PI / 2.0));
        assert!(close(spans[1], PI / 2.0));
        assert!(close(spans[2], PI));
        assert!(close(spans.iter().sum::<f64>(), TAU));
        assert!(close(arcs[2].end_angle, TAU));
        assert_eq!(arcs[1].start_angle, arcs[0].end_angle);
    }

    #[test]
    fn start_angle_offsets_every_slice() {
        let arcs = PieLayout::new(1.0).arcs(&entries(&[3.0, 1.0]));
        assert_eq!(arcs[0].start_angle, 1.0);
        assert!(close(arcs[1].end_angle, 1.0 + TAU));
    }

    #[test]
    fn zero_total_degenerates_to_empty_slices_at_start() {
        let arcs = PieLayout::new(0.5).arcs(&entries(&[0.0, 0.0]));
        assert_eq!(arcs.len(), 2);
        assert!(arcs.iter().all(|a| a.start_angle == 0.5 && a.end_angle == 0.5));
        assert!(PieLayout::default().arcs(&[]).is_empty(), "no entries, no arcs");
    }

    #[test]
    fn padding_is_subtracted_from_the_circle() {
        let pad = 0.1;
        let arcs = PieLayout::default()
            .with_pad_angle(pad)
            .arcs(&entries(&[1.0, 1.0, 1.0, 1.0]));
        let covered: f64 = arcs.iter().map(ArcDescriptor::sweep).sum();
        assert!(close(covered, TAU - 4.0 * pad));
        assert!(close(arcs[1].start_angle - arcs[0].end_angle, pad));
    }

    #[test]
    fn negative_values_get_no_angle() {
        let arcs = PieLayout::default().arcs(&entries(&[-5.0, 2.0]));
        assert_eq!(arcs[0].sweep(), 0.0);
        assert!(close(arcs[1].sweep(), TAU));
    }

    #[test]
    fn centroid_sits_at_mid_angle_and_mid_radius() {
        let geom = ArcGeometry::new(Point::new(100.0, 100.0), 50.0, 150.0);
        // A quarter slice from 12 o'clock to 3 o'clock has its centroid up and to the right.
        let arc = &PieLayout::default().arcs(&entries(&[1.0, 3.0]))[0];
        let c = geom.centroid(arc);
        let d = 100.0 * (PI / 4.0).cos();
        assert!(close(c.x, 100.0 + d), "{c:?}");
        assert!(close(c.y, 100.0 - d), "{c:?}");
    }

    #[test]
    fn outline_stays_within_the_outer_radius() {
        let geom = ArcGeometry::new(Point::new(0.0, 0.0), 10.0, 20.0);
        let arcs = PieLayout::default().arcs(&entries(&[1.0, 1.0]));
        let bbox = geom.outline(&arcs[0]).bounding_box();
        // The first half runs clockwise from 12 o'clock to 6 o'clock: the right half-plane.
        assert!(bbox.x0 > -1e-6, "{bbox:?}");
        assert!(bbox.x1 <= 20.0 + 1e-6, "{bbox:?}");
        assert!(bbox.y0 >= -20.0 - 1e-6 && bbox.y1 <= 20.0 + 1e-6, "{bbox:?}");
    }
}
