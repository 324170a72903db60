//! Easing curves for the submit button choreography
//!
//! The three interpolator shapes the animation uses: linear,
//! accelerate-decelerate (cosine ease-in-out) and decelerate (quadratic
//! ease-out). Inputs are clamped to [0, 1] so a late frame past a stage
//! boundary can never overshoot a parameter range.

use std::f32::consts::PI;

/// Easing curve applied to a stage's raw progress fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    /// Constant velocity.
    Linear,
    /// Slow start, fast middle, slow end: `cos((f + 1)π) / 2 + 0.5`.
    AccelerateDecelerate,
    /// Fast start, slow end: `1 − (1 − f)²`.
    Decelerate,
}

impl Easing {
    /// Map a raw progress fraction to an eased fraction.
    ///
    /// Both input and output are in [0, 1]; 0 maps to 0 and 1 maps to 1
    /// exactly for every curve.
    pub fn apply(self, fraction: f32) -> f32 {
        let f = fraction.clamp(0.0, 1.0);
        match self {
            Self::Linear => f,
            Self::AccelerateDecelerate => ((f + 1.0) * PI).cos() / 2.0 + 0.5,
            Self::Decelerate => 1.0 - (1.0 - f) * (1.0 - f),
        }
    }
}
