pub(crate) mod css;
pub(crate) mod parse;
pub(crate) mod standard;

use crate::easing::css::{CssLinear, CubicBezier, LinearStop, Steps};
use crate::easing::standard::{EaseFamily, EaseMode};

/// Which easing curve reshapes progress.
#[derive(Clone, Debug, PartialEq)]
pub enum EasingSpec {
    /// A named family in one of three modes.
    Standard {
        /// Curve family.
        family: EaseFamily,
        /// In, out or in-out.
        mode: EaseMode,
    },
    /// CSS `linear()` with resolved stops.
    Linear(CssLinear),
    /// CSS `cubic-bezier()`.
    CubicBezier(CubicBezier),
    /// CSS `steps()`.
    Steps(Steps),
}

impl EasingSpec {
    /// `linear()` from raw stops, resolving omitted positions.
    pub fn linear(stops: &[LinearStop]) -> Self {
        Self::Linear(CssLinear::resolve(stops))
    }
}

/// An easing curve bound to the solver tolerance of a transition of known duration.
#[derive(Clone, Debug, PartialEq)]
pub struct Easing {
    spec: EasingSpec,
    epsilon: f64,
}

impl Easing {
    /// Bind `spec` to a transition lasting `duration_secs`.
    ///
    /// The Bézier solver tolerance is `1 / (1000 * duration)`, finer than one output frame.
    pub fn new(spec: EasingSpec, duration_secs: f64) -> Self {
        let duration = if duration_secs.is_finite() && duration_secs > 0.0 {
            duration_secs
        } else {
            1.0
        };
        Self {
            spec,
            epsilon: 1.0 / (1000.0 * duration),
        }
    }

    /// The curve.
    pub fn spec(&self) -> &EasingSpec {
        &self.spec
    }

    /// Solver tolerance.
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Eased progress. Overshooting curves may leave `[0, 1]`.
    pub fn apply(&self, t: f64) -> f64 {
        match &self.spec {
            EasingSpec::Standard { family, mode } => family.apply(*mode, t),
            EasingSpec::Linear(l) => l.apply(t),
            EasingSpec::CubicBezier(b) => b.solve(t, self.epsilon),
            EasingSpec::Steps(s) => s.apply(t),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/easing/mod.rs"]
mod tests;
