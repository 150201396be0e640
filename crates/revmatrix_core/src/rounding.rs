//! Fixed-precision rounding shared by every metric comparison
//!
//! Two metric values are considered equal when they round to the same value
//! at the configured number of decimal places. There is no epsilon: the
//! tolerance is entirely defined by the rounding step.

use serde::{Deserialize, Serialize};

/// Largest supported precision. `f64` carries roughly 15-17 significant
/// decimal digits, so anything finer than this stops being meaningful for
/// values in `[0, 1]`.
pub const MAX_DECIMAL_PLACES: u32 = 15;

/// Rounding precision used for all metric comparisons in a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundingPolicy {
    pub decimal_places: u32,
}

impl Default for RoundingPolicy {
    fn default() -> Self {
        Self { decimal_places: 2 }
    }
}

impl RoundingPolicy {
    #[must_use]
    pub fn new(decimal_places: u32) -> Self {
        Self { decimal_places }
    }

    /// `10^decimal_places`, built by repeated multiplication so the result is
    /// exact for every supported precision.
    #[must_use]
    pub fn scale(&self) -> f64 {
        (0..self.decimal_places).fold(1.0, |acc, _| acc * 10.0)
    }

    /// Round `value` to the policy's precision, resolving ties away from zero
    #[must_use]
    pub fn round(&self, value: f64) -> f64 {
        round_dp(value, self.decimal_places)
    }

    /// Whether a (possibly undefined) metric value rounds to `target`.
    ///
    /// An undefined metric never matches anything.
    #[must_use]
    pub fn matches(&self, value: Option<f64>, target: f64) -> bool {
        match value {
            Some(v) if v.is_finite() => self.round(v) == target,
            _ => false,
        }
    }
}

/// Round to `decimal_places` using round-half-away-from-zero
#[must_use]
pub fn round_dp(value: f64, decimal_places: u32) -> f64 {
    let scale = RoundingPolicy::new(decimal_places).scale();
    (value * scale).round() / scale
}
