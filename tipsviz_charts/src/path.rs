// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line and area path generators.
//!
//! Both generators take points that are already in pixel space and emit a [`BezPath`]: a
//! move-to followed by one line-to or curve-to per consecutive pair of points.
//!
//! Input order is drawing order. Function-style charts (line, simple area) must pass points
//! sorted by x; stacked bands pass them in category order. Unsorted input is not an error, it
//! just produces a self-intersecting path. [`sort_by_x`] is provided for callers that need it.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{BezPath, Point, Vec2};

/// Interpolation between consecutive points.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Curve {
    /// Straight segments.
    #[default]
    Linear,
    /// Cardinal spline through every point.
    ///
    /// Each interior point gets a tangent parallel to the chord between its neighbors, scaled
    /// by `(1 - tension) / 2`; endpoints use the one-sided chord to their only neighbor.
    /// `tension = 0` is the Catmull-Rom spline, `tension = 1` degenerates to straight lines.
    Cardinal {
        /// Tension in `[0, 1]`.
        tension: f64,
    },
}

impl Curve {
    /// Cardinal spline with the given tension.
    pub fn cardinal(tension: f64) -> Self {
        Self::Cardinal { tension }
    }

    /// Catmull-Rom spline (cardinal with zero tension).
    pub fn catmull_rom() -> Self {
        Self::Cardinal { tension: 0.0 }
    }
}

/// Sorts points by ascending x, keeping the relative order of equal x values.
pub fn sort_by_x(points: &mut [Point]) {
    points.sort_by(|a, b| a.x.total_cmp(&b.x));
}

/// Generates open line paths.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LineGenerator {
    /// Interpolation mode.
    pub curve: Curve,
}

impl LineGenerator {
    /// Creates a line generator.
    pub fn new(curve: Curve) -> Self {
        Self { curve }
    }

    /// Builds a path through `points`, in order.
    ///
    /// An empty slice yields an empty path; a single point yields a lone move-to.
    pub fn path(&self, points: &[Point]) -> BezPath {
        let mut p = BezPath::new();
        let Some(&first) = points.first() else {
            return p;
        };
        p.move_to(first);
        extend_curve(&mut p, points, self.curve);
        p
    }
}

/// The lower edge of an area, in pixel space.
///
/// Implemented for a constant (`f64`) and for closures `Fn(index, top_point) -> y0`, which
/// covers both "area above a fixed baseline" and per-point baselines.
pub trait Baseline {
    /// Returns the baseline y for the point at `index`.
    fn y0(&self, index: usize, point: Point) -> f64;
}

impl Baseline for f64 {
    fn y0(&self, _index: usize, _point: Point) -> f64 {
        *self
    }
}

impl<F> Baseline for F
where
    F: Fn(usize, Point) -> f64,
{
    fn y0(&self, index: usize, point: Point) -> f64 {
        self(index, point)
    }
}

/// Generates closed area outlines.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AreaGenerator {
    /// Interpolation mode, applied to both edges.
    pub curve: Curve,
}

impl AreaGenerator {
    /// Creates an area generator.
    pub fn new(curve: Curve) -> Self {
        Self { curve }
    }

    /// Builds the outline between the top points and a baseline.
    ///
    /// The outline runs forward along the top edge, drops to the baseline at the last point,
    /// runs backward along the baseline and closes.
    pub fn path(&self, points: &[Point], baseline: impl Baseline) -> BezPath {
        let bottom: Vec<Point> = points
            .iter()
            .enumerate()
            .map(|(i, &pt)| Point::new(pt.x, baseline.y0(i, pt)))
            .collect();
        self.path_between(points, &bottom)
    }

    /// Builds the outline between two edges given point by point.
    ///
    /// `top` and `bottom` are paired by index; extra points on the longer edge are ignored.
    pub fn path_between(&self, top: &[Point], bottom: &[Point]) -> BezPath {
        let n = top.len().min(bottom.len());
        let mut p = BezPath::new();
        if n == 0 {
            return p;
        }
        let top = &top[..n];
        let bottom: Vec<Point> = bottom[..n].iter().rev().copied().collect();

        p.move_to(top[0]);
        extend_curve(&mut p, top, self.curve);
        p.line_to(bottom[0]);
        extend_curve(&mut p, &bottom, self.curve);
        p.close_path();
        p
    }
}

/// Appends segments from `points[0]` (the current point) through the rest of `points`.
fn extend_curve(p: &mut BezPath, points: &[Point], curve: Curve) {
    match curve {
        Curve::Linear => {
            for &pt in points.iter().skip(1) {
                p.line_to(pt);
            }
        }
        Curve::Cardinal { tension } => {
            // Bezier handles are a third of the Hermite tangent.
            let k = (1.0 - tension) / 6.0;
            let n = points.len();
            for i in 0..n.saturating_sub(1) {
                let p0 = points[i.saturating_sub(1)];
                let p1 = points[i];
                let p2 = points[i + 1];
                let p3 = points[(i + 2).min(n - 1)];
                let c1 = p1 + k * chord(p0, p2);
                let c2 = p2 - k * chord(p1, p3);
                p.curve_to(c1, c2, p2);
            }
        }
    }
}

fn chord(from: Point, to: Point) -> Vec2 {
    to - from
}
