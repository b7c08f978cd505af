// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart configuration shared by every render.

extern crate alloc;

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use kurbo::Rect;
use peniko::Color;
use peniko::color::palette::css;

use crate::error::ChartError;
use crate::path::Curve;
use crate::scale::ScaleOrdinal;

/// Category-to-color lookup. Returns `None` for categories it does not know.
pub type ColorFn = dyn Fn(&str) -> Option<Color> + Send + Sync;

/// Space reserved around the plot area, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margin {
    /// Top margin (title space).
    pub top: f64,
    /// Bottom margin.
    pub bottom: f64,
    /// Left margin (y-axis space).
    pub left: f64,
    /// Right margin.
    pub right: f64,
}

impl Margin {
    /// Creates a margin.
    pub fn new(top: f64, bottom: f64, left: f64, right: f64) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    /// Same margin on all four sides.
    pub fn uniform(m: f64) -> Self {
        Self::new(m, m, m, m)
    }
}

impl Default for Margin {
    fn default() -> Self {
        Self::new(50.0, 10.0, 30.0, 30.0)
    }
}

/// Layout and styling inputs for chart renders.
///
/// All fields are public; the `with_*` setters are conveniences for builder-style code.
#[derive(Clone)]
pub struct ChartConfig {
    /// Space around the plot area.
    pub margin: Margin,
    /// Total output width in pixels.
    pub output_width: f64,
    /// Total output height in pixels.
    pub output_height: f64,
    /// Interpolation for line and area paths.
    pub curve: Curve,
    /// Fill color per category (day or series name).
    pub color_of: Arc<ColorFn>,
    /// Inner pie radius (`0` for a full pie).
    pub inner_radius: f64,
    /// Outer pie radius.
    pub outer_radius: f64,
    /// Band scale padding in `[0, 1)`.
    pub band_padding: f64,
    /// Target number of ticks on linear axes.
    pub tick_count: usize,
}

impl fmt::Debug for ChartConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChartConfig")
            .field("margin", &self.margin)
            .field("output_width", &self.output_width)
            .field("output_height", &self.output_height)
            .field("curve", &self.curve)
            .field("inner_radius", &self.inner_radius)
            .field("outer_radius", &self.outer_radius)
            .field("band_padding", &self.band_padding)
            .field("tick_count", &self.tick_count)
            .finish_non_exhaustive()
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            margin: Margin::default(),
            output_width: 800.0,
            output_height: 600.0,
            curve: Curve::catmull_rom(),
            color_of: Arc::new(tips_colors),
            inner_radius: 50.0,
            outer_radius: 200.0,
            band_padding: 0.2,
            tick_count: 10,
        }
    }
}

impl ChartConfig {
    /// Sets the margin.
    pub fn with_margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }

    /// Sets the output size.
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.output_width = width;
        self.output_height = height;
        self
    }

    /// Sets the line/area interpolation.
    pub fn with_curve(mut self, curve: Curve) -> Self {
        self.curve = curve;
        self
    }

    /// Sets the category color lookup.
    pub fn with_color_of<F>(mut self, color_of: F) -> Self
    where
        F: Fn(&str) -> Option<Color> + Send + Sync + 'static,
    {
        self.color_of = Arc::new(color_of);
        self
    }

    /// Sets the pie radii.
    pub fn with_radii(mut self, inner: f64, outer: f64) -> Self {
        self.inner_radius = inner;
        self.outer_radius = outer;
        self
    }

    /// Sets the band padding.
    pub fn with_band_padding(mut self, padding: f64) -> Self {
        self.band_padding = padding;
        self
    }

    /// Sets the target tick count for linear axes.
    pub fn with_tick_count(mut self, count: usize) -> Self {
        self.tick_count = count;
        self
    }

    /// Returns the plot rectangle: the output area inset by the margin.
    ///
    /// The rectangle never inverts; an oversized margin collapses it to zero width or height.
    pub fn plot_rect(&self) -> Rect {
        let x0 = self.margin.left;
        let y0 = self.margin.top;
        let x1 = (self.output_width - self.margin.right).max(x0);
        let y1 = (self.output_height - self.margin.bottom).max(y0);
        Rect::new(x0, y0, x1, y1)
    }

    /// Looks up the color of a category.
    pub fn color(&self, key: &str) -> Result<Color, ChartError> {
        (self.color_of)(key).ok_or_else(|| ChartError::unknown(key))
    }
}

/// Builds a color lookup from explicit `(category, color)` pairs.
///
/// Returns [`ChartError::DuplicateCategory`] if a category is listed twice.
pub fn palette(entries: &[(&str, Color)]) -> Result<Arc<ColorFn>, ChartError> {
    let colors: Vec<Color> = entries.iter().map(|(_, c)| *c).collect();
    let scale = ScaleOrdinal::new(entries.iter().map(|(k, _)| *k), colors)?;
    Ok(Arc::new(move |key: &str| scale.map(key).ok().copied()))
}

/// Default colors: one per day of the tips dataset, one per stacked series.
fn tips_colors(key: &str) -> Option<Color> {
    match key {
        "Thur" => Some(css::RED),
        "Fri" => Some(css::BLUE),
        "Sat" => Some(css::ORANGE),
        "Sun" => Some(css::PINK),
        "total_bill" => Some(css::BLUE),
        "tip" => Some(css::GREEN),
        "size" => Some(css::MEDIUM_SEA_GREEN),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn default_plot_rect_is_inset_by_the_margin() {
        let rect = ChartConfig::default().plot_rect();
        assert_eq!(rect, Rect::new(30.0, 50.0, 770.0, 590.0));
    }

    #[test]
    fn oversized_margins_collapse_the_plot_rect() {
        let config = ChartConfig::default()
            .with_size(40.0, 40.0)
            .with_margin(Margin::uniform(30.0));
        let rect = config.plot_rect();
        assert_eq!(rect.width(), 0.0);
        assert_eq!(rect.height(), 0.0);
    }

    #[test]
    fn unknown_colors_are_reported_with_their_key() {
        let config = ChartConfig::default();
        assert_eq!(config.color("Sat"), Ok(css::ORANGE));
        assert_eq!(
            config.color("Mon"),
            Err(ChartError::UnknownCategory { key: "Mon".into() })
        );
    }

    #[test]
    fn palette_maps_listed_keys_only() {
        let color_of = palette(&[("a", css::RED), ("b", css::BLUE)]).unwrap();
        assert_eq!(color_of("b"), Some(css::BLUE));
        assert_eq!(color_of("c"), None);
        let config = ChartConfig::default().with_color_of(move |k| color_of(k));
        assert_eq!(config.color("a"), Ok(css::RED));
    }

    #[test]
    fn palette_rejects_duplicates() {
        let err = palette(&[("a", css::RED), ("a", css::BLUE)]).err();
        assert_eq!(err, Some(ChartError::DuplicateCategory { key: "a".into() }));
    }
}
