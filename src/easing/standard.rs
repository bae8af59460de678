//! Penner-style easing families plus square-root and cube-root curves.

use std::f64::consts::{FRAC_PI_2, PI};

/// Which half of the curve accelerates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EaseMode {
    /// Slow start.
    In,
    /// Slow end.
    Out,
    /// Slow start and end.
    #[default]
    InOut,
}

/// Named easing families.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EaseFamily {
    /// `t^2`.
    Quadratic,
    /// `t^3`.
    Cubic,
    /// `t^4`.
    Quartic,
    /// `t^5`.
    Quintic,
    /// Quarter cosine.
    Sinusoidal,
    /// `2^(10(t-1))`.
    Exponential,
    /// Quarter circle.
    Circular,
    /// Decaying oscillation, overshoots.
    Elastic,
    /// Pulls back ~10% before moving, overshoots.
    Back,
    /// Bouncing ball.
    Bounce,
    /// `sqrt(t)`.
    SquareRoot,
    /// `cbrt(t)`.
    CubeRoot,
}

impl EaseFamily {
    /// All families, in name-matching order.
    pub const ALL: [EaseFamily; 12] = [
        Self::Quadratic,
        Self::Cubic,
        Self::Quartic,
        Self::Quintic,
        Self::Sinusoidal,
        Self::Exponential,
        Self::Circular,
        Self::Elastic,
        Self::Back,
        Self::Bounce,
        Self::SquareRoot,
        Self::CubeRoot,
    ];

    /// Name prefix used in easing strings.
    pub fn name(self) -> &'static str {
        match self {
            Self::Quadratic => "quadratic",
            Self::Cubic => "cubic",
            Self::Quartic => "quartic",
            Self::Quintic => "quintic",
            Self::Sinusoidal => "sinusoidal",
            Self::Exponential => "exponential",
            Self::Circular => "circular",
            Self::Elastic => "elastic",
            Self::Back => "back",
            Self::Bounce => "bounce",
            Self::SquareRoot => "squareroot",
            Self::CubeRoot => "cuberoot",
        }
    }

    fn power(self) -> Option<Power> {
        Some(match self {
            Self::Quadratic => Power::Int(2),
            Self::Cubic => Power::Int(3),
            Self::Quartic => Power::Int(4),
            Self::Quintic => Power::Int(5),
            Self::SquareRoot => Power::Sqrt,
            Self::CubeRoot => Power::Cbrt,
            _ => return None,
        })
    }

    /// Eased value of `t` for `mode`. Back and elastic overshoot the unit interval.
    pub fn apply(self, mode: EaseMode, t: f64) -> f64 {
        if let Some(power) = self.power() {
            return power.apply(mode, t);
        }
        match self {
            Self::Sinusoidal => sinusoidal(mode, t),
            Self::Exponential => exponential(mode, t),
            Self::Circular => circular(mode, t),
            Self::Elastic => elastic(mode, t),
            Self::Back => back(mode, t),
            _ => bounce(mode, t),
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Power {
    Int(i32),
    Sqrt,
    Cbrt,
}

impl Power {
    fn ease_in(self, t: f64) -> f64 {
        match self {
            Self::Int(p) => t.powi(p),
            Self::Sqrt => t.sqrt(),
            Self::Cbrt => t.cbrt(),
        }
    }

    fn apply(self, mode: EaseMode, t: f64) -> f64 {
        match mode {
            EaseMode::In => self.ease_in(t),
            EaseMode::Out => 1.0 - self.ease_in(1.0 - t),
            EaseMode::InOut => {
                if t < 0.5 {
                    self.ease_in(2.0 * t) / 2.0
                } else {
                    1.0 - self.ease_in(2.0 - 2.0 * t) / 2.0
                }
            }
        }
    }
}

fn sinusoidal(mode: EaseMode, t: f64) -> f64 {
    match mode {
        EaseMode::In => 1.0 - (t * FRAC_PI_2).cos(),
        EaseMode::Out => (t * FRAC_PI_2).sin(),
        EaseMode::InOut => (1.0 - (t * PI).cos()) / 2.0,
    }
}

fn exponential(mode: EaseMode, t: f64) -> f64 {
    if t <= 0.0 || t >= 1.0 {
        return if t > 0.5 { 1.0 } else { 0.0 };
    }
    match mode {
        EaseMode::In => ((t - 1.0) * 10.0).exp2(),
        EaseMode::Out => 1.0 - (t * -10.0).exp2(),
        EaseMode::InOut => {
            if t < 0.5 {
                (20.0 * t - 11.0).exp2()
            } else {
                1.0 - (9.0 - 20.0 * t).exp2()
            }
        }
    }
}

fn circular(mode: EaseMode, t: f64) -> f64 {
    match mode {
        EaseMode::In => 1.0 - (1.0 - t * t).sqrt(),
        EaseMode::Out => ((2.0 - t) * t).sqrt(),
        EaseMode::InOut => {
            if t < 0.5 {
                (1.0 - (1.0 - 4.0 * t * t).sqrt()) / 2.0
            } else {
                let u = t - 1.0;
                (1.0 + (1.0 - 4.0 * u * u).sqrt()) / 2.0
            }
        }
    }
}

fn elastic(mode: EaseMode, t: f64) -> f64 {
    // the decaying tail never reaches the endpoints exactly, so pin them
    if t <= 0.0 || t >= 1.0 {
        return if t > 0.5 { 1.0 } else { 0.0 };
    }
    match mode {
        EaseMode::In => {
            let u = t - 1.0;
            (u * (PI * 20.0 / 3.0)).cos() * (10.0 * u).exp2()
        }
        EaseMode::Out => 1.0 - (t * (PI * 20.0 / 3.0)).cos() / (10.0 * t).exp2(),
        EaseMode::InOut => {
            let p = 2.0 * t - 1.0;
            let c = (p * (PI * 40.0 / 9.0)).cos() / 2.0;
            let e = (10.0 * p).exp2();
            if t < 0.5 { c * e } else { 1.0 - c / e }
        }
    }
}

fn back(mode: EaseMode, t: f64) -> f64 {
    const B: f64 = 1.70158;
    let r = 1.0 - t;
    match mode {
        EaseMode::In => t * t * (t * (B + 1.0) - B),
        EaseMode::Out => 1.0 - r * r * (r * (B + 1.0) - B),
        EaseMode::InOut => {
            let b = B * 1.525;
            if t < 0.5 {
                t * t * (t * (b + 1.0) * 2.0 - b) * 2.0
            } else {
                1.0 - r * r * (r * (b + 1.0) * 2.0 - b) * 2.0
            }
        }
    }
}

fn bounce(mode: EaseMode, t: f64) -> f64 {
    let s = if t < 0.5 { 1.0 } else { -1.0 };
    let t = match mode {
        EaseMode::In => 1.0 - t,
        EaseMode::Out => t,
        EaseMode::InOut => (1.0 - 2.0 * t) * s,
    };
    let (t, c) = if t < 4.0 / 11.0 {
        (t, 0.0)
    } else if t < 8.0 / 11.0 {
        (t - 6.0 / 11.0, 3.0 / 4.0)
    } else if t < 10.0 / 11.0 {
        (t - 9.0 / 11.0, 15.0 / 16.0)
    } else {
        (t - 21.0 / 22.0, 63.0 / 64.0)
    };
    let v = 121.0 / 16.0 * t * t + c;
    match mode {
        EaseMode::In => 1.0 - v,
        EaseMode::Out => v,
        EaseMode::InOut => (1.0 - v * s) / 2.0,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/easing/standard.rs"]
mod tests;
