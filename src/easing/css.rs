//! CSS Easing Level 2 functions: `linear()`, `cubic-bezier()` and `steps()`.

use smallvec::SmallVec;

use crate::foundation::error::{FxError, FxResult};

/// One `linear()` control point. `x` is `None` until resolved.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearStop {
    /// Input position, `None` when omitted.
    pub x: Option<f64>,
    /// Output value.
    pub y: f64,
}

/// Resolved `linear()` stops with defined, non-decreasing `x`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CssLinear {
    points: SmallVec<[(f64, f64); 8]>,
}

impl CssLinear {
    /// Resolve omitted positions: first defaults to 0, last to 1, interior gaps are spaced
    /// evenly between their defined neighbours. Positions are forced non-decreasing.
    pub fn resolve(stops: &[LinearStop]) -> Self {
        let n = stops.len();
        let mut floor = f64::NEG_INFINITY;
        let mut xs: SmallVec<[Option<f64>; 8]> = stops
            .iter()
            .map(|s| {
                s.x.map(|x| {
                    floor = floor.max(x);
                    floor
                })
            })
            .collect();
        if n >= 2 {
            xs[0] = xs[0].or(Some(0.0));
            xs[n - 1] = xs[n - 1].or(Some(1.0));
        }

        let mut last_defined = 0usize;
        for i in 1..n {
            if let Some(x) = xs[i] {
                let gap = i - last_defined;
                if gap > 1 {
                    let x0 = xs[last_defined].unwrap_or(0.0);
                    let d = (x - x0) / gap as f64;
                    for (k, slot) in xs[last_defined + 1..i].iter_mut().enumerate() {
                        *slot = Some(x0 + d * (k + 1) as f64);
                    }
                }
                last_defined = i;
            }
        }

        let mut floor = f64::NEG_INFINITY;
        let points = stops
            .iter()
            .zip(xs)
            .map(|(s, x)| {
                floor = floor.max(x.unwrap_or(0.0));
                (floor, s.y)
            })
            .collect();
        Self { points }
    }

    /// Resolved `(x, y)` points.
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Piecewise-linear interpolation; extrapolates from the end segments outside the stops.
    pub fn apply(&self, t: f64) -> f64 {
        let p = &self.points;
        match p.len() {
            0 => return t,
            1 => return 1.0 - p[0].1,
            _ => {}
        }
        let last = p.len() - 1;
        let i = (1..=last).rev().find(|&i| p[i].0 <= t).unwrap_or(0).min(last - 1);
        let ((x0, y0), (x1, y1)) = (p[i], p[i + 1]);
        if x1 - x0 < f64::EPSILON {
            return y1;
        }
        y0 + (t - x0) / (x1 - x0) * (y1 - y0)
    }
}

/// `cubic-bezier(x1, y1, x2, y2)` timing function.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CubicBezier {
    /// First control point x, in `[0, 1]`.
    pub x1: f64,
    /// First control point y.
    pub y1: f64,
    /// Second control point x, in `[0, 1]`.
    pub x2: f64,
    /// Second control point y.
    pub y2: f64,
}

const SPLINE_SAMPLES: usize = 11;
const MAX_NEWTON_ITERATIONS: usize = 4;
const MAX_BISECTIONS: usize = 64;
const BEZIER_EPSILON: f64 = 1e-7;

impl CubicBezier {
    /// CSS `ease`.
    pub const EASE: Self = Self::new(0.25, 0.1, 0.25, 1.0);
    /// CSS `ease-in`.
    pub const EASE_IN: Self = Self::new(0.42, 0.0, 1.0, 1.0);
    /// CSS `ease-out`.
    pub const EASE_OUT: Self = Self::new(0.0, 0.0, 0.58, 1.0);
    /// CSS `ease-in-out`.
    pub const EASE_IN_OUT: Self = Self::new(0.42, 0.0, 0.58, 1.0);

    /// Build from control points without validation.
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Reject control point x values outside `[0, 1]`.
    pub fn validate(&self) -> FxResult<()> {
        for x in [self.x1, self.x2] {
            if !(0.0..=1.0).contains(&x) {
                return Err(FxError::config(format!(
                    "cubic-bezier x control point {x} is outside [0, 1]"
                )));
            }
        }
        Ok(())
    }

    /// Solve x(t) = `x` to within `epsilon`, then return y(t).
    ///
    /// Inputs outside `[0, 1]` extrapolate along the tangent at the nearest endpoint.
    pub fn solve(&self, x: f64, epsilon: f64) -> f64 {
        let Self { x1, y1, x2, y2 } = *self;
        if x < 0.0 {
            let d = if x1 > 0.0 {
                y1 / x1
            } else if y1 == 0.0 && x2 > 0.0 {
                y2 / x2
            } else if y1 == 0.0 && y2 == 0.0 {
                1.0
            } else {
                0.0
            };
            return d * x;
        }
        if x > 1.0 {
            let d = if x2 < 1.0 {
                (y2 - 1.0) / (x2 - 1.0)
            } else if y2 == 1.0 && x1 < 1.0 {
                (y1 - 1.0) / (x1 - 1.0)
            } else if y2 == 1.0 && y1 == 1.0 {
                1.0
            } else {
                0.0
            };
            return 1.0 + d * (x - 1.0);
        }

        let cx = 3.0 * x1;
        let bx = 3.0 * (x2 - x1) - cx;
        let ax = 1.0 - cx - bx;
        let cy = 3.0 * y1;
        let by = 3.0 * (y2 - y1) - cy;
        let ay = 1.0 - cy - by;
        let sample_x = |t: f64| ax.mul_add(t, bx).mul_add(t, cx) * t;
        let sample_y = |t: f64| ay.mul_add(t, by).mul_add(t, cy) * t;
        let derivative_x = |t: f64| (ax * 3.0 * t + bx + bx).mul_add(t, cx);

        // initial guess from a linear interpolation of evenly spaced samples
        let dt = 1.0 / (SPLINE_SAMPLES - 1) as f64;
        let mut prev = 0.0;
        let mut hi = 1.0;
        let mut t = None;
        for i in 1..SPLINE_SAMPLES - 1 {
            let ti = i as f64 * dt;
            let s = sample_x(ti);
            if x <= s {
                hi = ti;
                let span = s - prev;
                t = Some(if span > 0.0 { ti - (s - x) / span * dt } else { ti });
                break;
            }
            prev = s;
        }
        let mut t = t.unwrap_or_else(|| 1.0 - (1.0 - x) / (1.0 - prev) * dt);
        let mut lo = hi - dt;

        let newton_epsilon = BEZIER_EPSILON.min(epsilon);
        for _ in 0..MAX_NEWTON_ITERATIONS {
            let s = sample_x(t) - x;
            if s.abs() < newton_epsilon {
                return sample_y(t);
            }
            let d = derivative_x(t);
            if d.abs() < BEZIER_EPSILON {
                break;
            }
            t -= s / d;
        }
        if (sample_x(t) - x).abs() < epsilon {
            return sample_y(t);
        }

        t = t.clamp(lo, hi);
        for _ in 0..MAX_BISECTIONS {
            if lo >= hi {
                break;
            }
            let s = sample_x(t);
            if (s - x).abs() < epsilon {
                break;
            }
            if x > s {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) / 2.0;
        }
        sample_y(t)
    }
}

/// Where the jumps of a `steps()` function fall.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JumpPolicy {
    /// First jump at `t = 0`.
    JumpStart,
    /// Last jump at `t = 1`.
    #[default]
    JumpEnd,
    /// No jump at either end.
    JumpNone,
    /// Jumps at both ends.
    JumpBoth,
}

impl JumpPolicy {
    /// Parse a position keyword (`start` and `end` are aliases).
    pub fn parse(s: &str) -> FxResult<Self> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "jump-start" | "start" => Self::JumpStart,
            "jump-end" | "end" => Self::JumpEnd,
            "jump-none" => Self::JumpNone,
            "jump-both" => Self::JumpBoth,
            _ => return Err(FxError::config(format!("bad steps position '{s}'"))),
        })
    }
}

/// `steps(count, policy)` timing function.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Steps {
    count: u32,
    policy: JumpPolicy,
}

impl Steps {
    /// Validated constructor: `count >= 1`, or `>= 2` for [`JumpPolicy::JumpNone`].
    pub fn new(count: u32, policy: JumpPolicy) -> FxResult<Self> {
        let min = if policy == JumpPolicy::JumpNone { 2 } else { 1 };
        if count < min {
            return Err(FxError::config(format!(
                "bad steps count {count} for {policy:?}, need at least {min}"
            )));
        }
        Ok(Self { count, policy })
    }

    /// Number of steps.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Jump placement.
    pub fn policy(&self) -> JumpPolicy {
        self.policy
    }

    /// Quantized progress.
    pub fn apply(&self, t: f64) -> f64 {
        let mut n = i64::from(self.count);
        let mut s = (t * n as f64).floor() as i64;
        if matches!(self.policy, JumpPolicy::JumpStart | JumpPolicy::JumpBoth) {
            s += 1;
        }
        if t >= 0.0 && s < 0 {
            s = 0;
        }
        match self.policy {
            JumpPolicy::JumpNone => n -= 1,
            JumpPolicy::JumpBoth => n += 1,
            _ => {}
        }
        if t <= 1.0 && s > n {
            s = n;
        }
        s as f64 / n as f64
    }
}

#[cfg(test)]
#[path = "../../tests/unit/easing/css.rs"]
mod tests;
