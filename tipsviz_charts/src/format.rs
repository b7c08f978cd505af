// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick label formatting.

extern crate alloc;

use alloc::format;
use alloc::string::String;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Formats `v` with as many decimals as the tick `step` needs (and no more).
///
/// A `step` of `0` (or non-finite) falls back to trimming trailing zeros of a 6-decimal
/// rendering.
pub(crate) fn format_tick_with_step(v: f64, step: f64) -> String {
    if !v.is_finite() {
        return format!("{v}");
    }
    let s = if step.is_finite() && step > 0.0 {
        format!("{:.*}", decimals_for_step(step), v)
    } else {
        trim_zeros(format!("{v:.6}"))
    };
    // Avoid rendering "-0" for values that round to zero.
    if s.starts_with('-') && s[1..].chars().all(|c| c == '0' || c == '.') {
        String::from(&s[1..])
    } else {
        s
    }
}

fn decimals_for_step(step: f64) -> usize {
    if step >= 1.0 {
        return 0;
    }
    // Small epsilon so steps like 0.1 (= 10^-1 + rounding) land on 1 decimal.
    let d = (-(step.log10()) - 1e-9).ceil();
    if d.is_finite() && d > 0.0 {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "clamped to a small non-negative range"
        )]
        {
            d.min(12.0) as usize
        }
    } else {
        0
    }
}

fn trim_zeros(mut s: String) -> String {
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    s
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn decimals_follow_the_step() {
        assert_eq!(format_tick_with_step(10.0, 5.0), "10");
        assert_eq!(format_tick_with_step(0.2, 0.2), "0.2");
        assert_eq!(format_tick_with_step(0.30000000000000004, 0.1), "0.3");
        assert_eq!(format_tick_with_step(0.25, 0.05), "0.25");
    }

    #[test]
    fn negative_zero_is_rendered_as_zero() {
        assert_eq!(format_tick_with_step(-0.0001, 0.1), "0.0");
        assert_eq!(format_tick_with_step(-0.0, 1.0), "0");
    }

    #[test]
    fn zero_step_trims_trailing_zeros() {
        assert_eq!(format_tick_with_step(3.5, 0.0), "3.5");
        assert_eq!(format_tick_with_step(4.0, 0.0), "4");
    }
}
