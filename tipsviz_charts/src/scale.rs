// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scales: mappings from data values into pixel coordinates.
//!
//! - [`ScaleLinear`] maps a continuous domain onto a continuous range.
//! - [`ScaleBand`] splits a range into evenly spaced, padded bands, one per category.
//! - [`ScaleOrdinal`] maps categories 1:1 onto caller-supplied values (colors, positions).

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use hashbrown::HashMap;

use crate::error::ChartError;

/// Any of the scale kinds, for code that handles them uniformly (for example axis ticks).
#[derive(Clone, Debug)]
pub enum Scale {
    /// Continuous linear scale.
    Linear(ScaleLinear),
    /// Discrete band scale.
    Band(ScaleBand),
    /// Discrete ordinal scale onto positions.
    Ordinal(ScaleOrdinal<f64>),
}

impl From<ScaleLinear> for Scale {
    fn from(value: ScaleLinear) -> Self {
        Self::Linear(value)
    }
}

impl From<ScaleBand> for Scale {
    fn from(value: ScaleBand) -> Self {
        Self::Band(value)
    }
}

impl From<ScaleOrdinal<f64>> for Scale {
    fn from(value: ScaleOrdinal<f64>) -> Self {
        Self::Ordinal(value)
    }
}

/// A linear mapping from a continuous domain to a continuous range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLinear {
    domain: (f64, f64),
    range: (f64, f64),
}

impl ScaleLinear {
    /// Creates a new scale mapping `domain` values to `range` values.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Creates a scale whose domain is `(0, max)`, or `(0, 0)` when `max` is `None`.
    ///
    /// This is the usual value axis of the charts: anchored at zero, extending to the
    /// largest observed value.
    pub fn from_zero(max: Option<f64>, range: (f64, f64)) -> Self {
        Self::new((0.0, max.unwrap_or(0.0)), range)
    }

    /// Creates a scale over an observed `(min, max)` extent, or `(0, 0)` when it is `None`.
    pub fn from_extent(extent: Option<(f64, f64)>, range: (f64, f64)) -> Self {
        Self::new(extent.unwrap_or((0.0, 0.0)), range)
    }

    /// Returns the configured domain.
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Returns the configured range.
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Returns `true` when the domain is a single value (including an empty dataset).
    pub fn is_degenerate(&self) -> bool {
        self.domain.0 == self.domain.1
    }

    /// Maps a value from domain space into range space.
    ///
    /// A degenerate domain maps every input to the start of the range.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = d1 - d0;
        if denom == 0.0 {
            return r0;
        }
        let t = (x - d0) / denom;
        r0 + t * (r1 - r0)
    }

    /// Maps a range coordinate back into domain space.
    ///
    /// A degenerate domain or range inverts to the start of the domain.
    pub fn invert(&self, px: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = r1 - r0;
        if denom == 0.0 || d0 == d1 {
            return d0;
        }
        let t = (px - r0) / denom;
        d0 + t * (d1 - d0)
    }

    /// Returns evenly spaced "nice" tick values that lie within the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        tick_values(self.domain.0, self.domain.1, count)
    }

    /// Returns a copy whose domain is extended outward to whole multiples of the tick step.
    pub fn nice(&self, count: usize) -> Self {
        let (d0, d1) = self.domain;
        let step = nice_step(((d1 - d0).abs()) / count.max(1) as f64);
        if step == 0.0 {
            return *self;
        }
        let lo = (d0.min(d1) / step).floor() * step;
        let hi = (d0.max(d1) / step).ceil() * step;
        let domain = if d0 <= d1 { (lo, hi) } else { (hi, lo) };
        Self::new(domain, self.range)
    }
}

/// Returns a step of the form `{1, 2, 5} * 10^k` close to `step`.
pub(crate) fn nice_step(step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }
    #[allow(
        clippy::cast_possible_truncation,
        reason = "log10 of a finite positive f64 lies well within the i32 range"
    )]
    let power = step.log10().floor() as i32;
    let base = 10_f64.powi(power);
    let error = step / base;
    let nice = if error >= 7.5 {
        10.0
    } else if error >= 3.5 {
        5.0
    } else if error >= 1.5 {
        2.0
    } else {
        1.0
    };
    nice * base
}

/// Tick values within `[min, max]` at a nice step for roughly `count` ticks.
pub(crate) fn tick_values(mut min: f64, mut max: f64, count: usize) -> Vec<f64> {
    if count == 0 || !min.is_finite() || !max.is_finite() {
        return Vec::new();
    }
    if min == max {
        return alloc::vec![min];
    }
    if min > max {
        core::mem::swap(&mut min, &mut max);
    }
    let step = nice_step((max - min) / count as f64);
    if step == 0.0 {
        return alloc::vec![min, max];
    }

    // Index the ticks as integer multiples of `step` so values do not accumulate error.
    let first = (min / step).ceil();
    let last = (max / step).floor();
    let n_f = (last - first).round();
    let n = if n_f.is_finite() && n_f >= 0.0 {
        let n_f = n_f.min(10_000.0);
        #[allow(
            clippy::cast_possible_truncation,
            reason = "guarded by finite/non-negative checks and capped at 10k"
        )]
        {
            n_f as u64
        }
    } else {
        return Vec::new();
    };
    (0..=n).map(|i| (first + i as f64) * step).collect()
}

/// A discrete band scale for categorical charts.
///
/// The range is split into `n` equal steps, one per category. Within its step, each band is
/// shrunk symmetrically by `padding`:
/// - `step = |range| / n`
/// - `bandwidth = step * (1 - padding)`
/// - a band starts `step * padding / 2` into its step.
///
/// Bands therefore never overlap, and the bandwidths plus the gaps between and around them
/// add up to the full range width.
///
/// When the range is reversed (`range.1 < range.0`), the first category takes the step at the
/// `range.0` end, as in a vertical axis drawn from the bottom up.
#[derive(Clone, Debug)]
pub struct ScaleBand {
    domain: Vec<String>,
    index: HashMap<String, usize>,
    range: (f64, f64),
    padding: f64,
}

impl ScaleBand {
    /// Creates a band scale over `domain` (in order) with no padding.
    ///
    /// Returns [`ChartError::DuplicateCategory`] if a category repeats.
    pub fn new<I, S>(domain: I, range: (f64, f64)) -> Result<Self, ChartError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let (domain, index) = index_domain(domain)?;
        Ok(Self {
            domain,
            index,
            range,
            padding: 0.0,
        })
    }

    /// Sets the padding as a fraction of the step.
    ///
    /// The value is clamped into `[0, 1)`; non-finite values become `0`.
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = if padding.is_finite() {
            padding.clamp(0.0, 1.0 - f64::EPSILON)
        } else {
            0.0
        };
        self
    }

    /// Returns the categories, in order.
    pub fn domain(&self) -> &[String] {
        &self.domain
    }

    /// Returns the configured range.
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Returns the padding fraction.
    pub fn padding(&self) -> f64 {
        self.padding
    }

    /// Returns the number of bands.
    pub fn count(&self) -> usize {
        self.domain.len()
    }

    /// Returns the distance between the starts of adjacent bands.
    pub fn step(&self) -> f64 {
        let n = self.domain.len();
        if n == 0 {
            return 0.0;
        }
        (self.range.1 - self.range.0).abs() / n as f64
    }

    /// Returns the width of each band.
    pub fn bandwidth(&self) -> f64 {
        self.step() * (1.0 - self.padding)
    }

    /// Returns the start (lowest coordinate) of the band at `index`.
    pub fn x(&self, index: usize) -> f64 {
        let (r0, r1) = self.range;
        let step = self.step();
        let slot = if r1 >= r0 {
            index
        } else {
            self.count().saturating_sub(index + 1)
        };
        r0.min(r1) + step * slot as f64 + step * self.padding / 2.0
    }

    /// Returns the start (lowest coordinate) of a category's band.
    pub fn map(&self, category: &str) -> Result<f64, ChartError> {
        self.index_of(category).map(|i| self.x(i))
    }

    /// Returns the center of a category's band.
    pub fn center(&self, category: &str) -> Result<f64, ChartError> {
        Ok(self.map(category)? + self.bandwidth() / 2.0)
    }

    /// Returns the position of a category in the domain.
    pub fn index_of(&self, category: &str) -> Result<usize, ChartError> {
        self.index
            .get(category)
            .copied()
            .ok_or_else(|| ChartError::unknown(category))
    }

    /// Returns the category whose band contains `px`, if any.
    ///
    /// Coordinates in the padding between bands, or outside the range, invert to `None`.
    pub fn invert(&self, px: f64) -> Option<&str> {
        let bw = self.bandwidth();
        (0..self.count())
            .find(|&i| {
                let x0 = self.x(i);
                px >= x0 && px <= x0 + bw
            })
            .map(|i| self.domain[i].as_str())
    }
}

/// A 1:1 mapping from categories to caller-supplied values.
///
/// If fewer values than categories are supplied, values are reused cyclically.
#[derive(Clone, Debug)]
pub struct ScaleOrdinal<T> {
    domain: Vec<String>,
    index: HashMap<String, usize>,
    range: Vec<T>,
}

impl<T> ScaleOrdinal<T> {
    /// Creates an ordinal scale.
    ///
    /// Returns [`ChartError::DuplicateCategory`] for a repeated category and
    /// [`ChartError::EmptyRange`] when a non-empty domain has no values to map onto.
    pub fn new<I, S>(domain: I, range: Vec<T>) -> Result<Self, ChartError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let (domain, index) = index_domain(domain)?;
        if !domain.is_empty() && range.is_empty() {
            return Err(ChartError::EmptyRange);
        }
        Ok(Self {
            domain,
            index,
            range,
        })
    }

    /// Returns the categories, in order.
    pub fn domain(&self) -> &[String] {
        &self.domain
    }

    /// Returns the range values.
    pub fn range(&self) -> &[T] {
        &self.range
    }

    /// Maps a category onto its value.
    ///
    /// An unknown category is a configuration error and returns
    /// [`ChartError::UnknownCategory`] carrying the key.
    pub fn map(&self, category: &str) -> Result<&T, ChartError> {
        let i = self
            .index
            .get(category)
            .copied()
            .ok_or_else(|| ChartError::unknown(category))?;
        Ok(&self.range[i % self.range.len()])
    }
}

type IndexedDomain = (Vec<String>, HashMap<String, usize>);

fn index_domain<I, S>(domain: I) -> Result<IndexedDomain, ChartError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut keys = Vec::new();
    let mut index = HashMap::new();
    for key in domain {
        let key: String = key.into();
        if index.contains_key(&key) {
            return Err(ChartError::DuplicateCategory { key });
        }
        index.insert(key.clone(), keys.len());
        keys.push(key);
    }
    Ok((keys, index))
}
