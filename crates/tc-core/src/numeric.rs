//! Floating-point comparison and sweep helpers.

use crate::TcError;

/// Absolute and relative agreement tolerances for f64 comparisons.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: f64,
    pub rel: f64,
}

impl Tolerances {
    /// True when `a` and `b` agree within either tolerance.
    ///
    /// The absolute bound covers values near zero, where a relative bound
    /// alone would reject everything.
    pub fn admits(&self, a: f64, b: f64) -> bool {
        let diff = (a - b).abs();
        diff <= self.abs || diff <= self.rel * a.abs().max(b.abs())
    }
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

/// Free-function form of [`Tolerances::admits`].
pub fn nearly_equal(a: f64, b: f64, tol: Tolerances) -> bool {
    tol.admits(a, b)
}

/// Reject NaN and infinities, naming the offending quantity.
pub fn ensure_finite(value: f64, what: &'static str) -> Result<f64, TcError> {
    if value.is_nan() || value.is_infinite() {
        return Err(TcError::NonFinite { what, value });
    }
    Ok(value)
}

/// Uniformly spaced points from `start` to `end` inclusive.
///
/// A single point collapses to `start`; the final point is pinned to `end`
/// so sweep endpoints are exact.
pub fn linspace(start: f64, end: f64, num_points: usize) -> Vec<f64> {
    if num_points <= 1 {
        return vec![start];
    }

    let delta = (end - start) / (num_points - 1) as f64;
    let mut points: Vec<f64> = (0..num_points).map(|i| start + i as f64 * delta).collect();
    points[num_points - 1] = end;
    points
}
