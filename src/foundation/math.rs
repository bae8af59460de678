//! Scalar and vector helpers in normalized image space.

use std::ops::{Add, Div, Mul, Neg, Sub};

pub use kurbo::Vec2;

/// `x - floor(x)`, always in `[0, 1)` for finite input.
pub fn fract(x: f64) -> f64 {
    x - x.floor()
}

/// Floor-based modulo: negative inputs wrap into `[0, y)`.
pub fn glmod(x: f64, y: f64) -> f64 {
    x - y * (x / y).floor()
}

/// Linear interpolation from `a` (at `m = 0`) to `b` (at `m = 1`).
pub fn mix(a: f64, b: f64, m: f64) -> f64 {
    a + (b - a) * m
}

/// Hermite smoothstep with the interpolant clamped to the unit interval.
///
/// `edge1 < edge0` yields a falling edge. Coincident edges degrade to a hard step.
pub fn smoothstep(edge0: f64, edge1: f64, x: f64) -> f64 {
    if edge0 == edge1 {
        return if x < edge0 { 0.0 } else { 1.0 };
    }
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// `0.0` below `edge`, `1.0` otherwise.
pub fn step(edge: f64, x: f64) -> f64 {
    if x < edge { 0.0 } else { 1.0 }
}

/// Clamp to `[0, 1]`.
pub fn clamp_unit(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

/// Hashed pseudo-random scalar in `[0, 1)`.
///
/// Evaluation order is fixed: `sin(x*12.9898 + y*78.233) * 43758.5453`, then `fract`.
pub fn frand(x: f64, y: f64) -> f64 {
    fract((x * 12.9898 + y * 78.233).sin() * 43758.5453)
}

/// Componentwise helpers for [`Vec2`] in normalized image space.
pub trait Vec2Ext: Sized {
    /// Both components set to `v`.
    fn splat(v: f64) -> Self;
    /// Componentwise product.
    fn mul_elem(self, o: Self) -> Self;
    /// Componentwise quotient.
    fn div_elem(self, o: Self) -> Self;
    /// Add `v` to both components.
    fn add_scalar(self, v: f64) -> Self;
    /// Componentwise `floor`.
    fn floor_elem(self) -> Self;
    /// Componentwise [`fract`].
    fn fract_elem(self) -> Self;
    /// Componentwise absolute value.
    fn abs_elem(self) -> Self;
    /// Componentwise [`glmod`].
    fn glmod_elem(self, y: f64) -> Self;
    /// Componentwise clamp to `[0, 1]`.
    fn clamp_unit(self) -> Self;
    /// Rotate clockwise by `angle` radians (y grows upward in normalized space).
    fn rotate_cw(self, angle: f64) -> Self;
    /// `|x| + |y|`.
    fn manhattan(self) -> f64;
    /// [`frand`] of both components.
    fn frand(self) -> f64;
    /// `true` when both components lie in `[0, 1]`.
    fn in_unit_square(self) -> bool;
}

impl Vec2Ext for Vec2 {
    fn splat(v: f64) -> Self {
        Vec2::new(v, v)
    }

    fn mul_elem(self, o: Self) -> Self {
        Vec2::new(self.x * o.x, self.y * o.y)
    }

    fn div_elem(self, o: Self) -> Self {
        Vec2::new(self.x / o.x, self.y / o.y)
    }

    fn add_scalar(self, v: f64) -> Self {
        Vec2::new(self.x + v, self.y + v)
    }

    fn floor_elem(self) -> Self {
        Vec2::new(self.x.floor(), self.y.floor())
    }

    fn fract_elem(self) -> Self {
        Vec2::new(fract(self.x), fract(self.y))
    }

    fn abs_elem(self) -> Self {
        Vec2::new(self.x.abs(), self.y.abs())
    }

    fn glmod_elem(self, y: f64) -> Self {
        Vec2::new(glmod(self.x, y), glmod(self.y, y))
    }

    fn clamp_unit(self) -> Self {
        Vec2::new(clamp_unit(self.x), clamp_unit(self.y))
    }

    fn rotate_cw(self, angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Vec2::new(self.x * c + self.y * s, self.y * c - self.x * s)
    }

    fn manhattan(self) -> f64 {
        self.x.abs() + self.y.abs()
    }

    fn frand(self) -> f64 {
        frand(self.x, self.y)
    }

    fn in_unit_square(self) -> bool {
        (0.0..=1.0).contains(&self.x) && (0.0..=1.0).contains(&self.y)
    }
}

/// Four normalized plane values: three colour planes then alpha.
///
/// Plane order follows the frame's [`ColorModel`](crate::ColorModel): `r, g, b` for RGB and
/// `y, u, v` for luma/chroma.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Vec4(pub [f64; 4]);

impl Vec4 {
    /// Transparent black in RGB terms.
    pub const ZERO: Self = Self([0.0; 4]);

    /// Build from four plane values.
    pub const fn new(p0: f64, p1: f64, p2: f64, p3: f64) -> Self {
        Self([p0, p1, p2, p3])
    }

    /// All four planes set to `v`.
    pub const fn splat(v: f64) -> Self {
        Self([v; 4])
    }

    /// Alpha plane.
    pub fn alpha(self) -> f64 {
        self.0[3]
    }

    /// Replace the alpha plane.
    pub fn with_alpha(self, a: f64) -> Self {
        Self([self.0[0], self.0[1], self.0[2], a])
    }

    /// Linear interpolation of all four planes toward `o`.
    pub fn mix(self, o: Self, m: f64) -> Self {
        self.zip(o, |a, b| mix(a, b, m))
    }

    /// Apply `f` to every plane.
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self(self.0.map(f))
    }

    /// Apply `f` to the three colour planes, keeping alpha.
    pub fn map3(self, f: impl Fn(f64) -> f64) -> Self {
        Self([f(self.0[0]), f(self.0[1]), f(self.0[2]), self.0[3]])
    }

    /// Combine planes pairwise.
    pub fn zip(self, o: Self, f: impl Fn(f64, f64) -> f64) -> Self {
        Self([
            f(self.0[0], o.0[0]),
            f(self.0[1], o.0[1]),
            f(self.0[2], o.0[2]),
            f(self.0[3], o.0[3]),
        ])
    }

    /// Clamp every plane to `[0, 1]`.
    pub fn clamp_unit(self) -> Self {
        self.map(clamp_unit)
    }

    /// Dot product of the three colour planes.
    pub fn dot3(self, o: Self) -> f64 {
        self.0[0] * o.0[0] + self.0[1] * o.0[1] + self.0[2] * o.0[2]
    }

    /// Euclidean length of the three colour planes.
    pub fn length3(self) -> f64 {
        self.dot3(self).sqrt()
    }

    /// Colour planes scaled to unit length; alpha kept.
    pub fn normalize3(self) -> Self {
        let len = self.length3();
        if len > 0.0 { self.map3(|v| v / len) } else { self }
    }

    /// Smallest colour plane.
    pub fn min3(self) -> f64 {
        self.0[0].min(self.0[1]).min(self.0[2])
    }

    /// Largest colour plane.
    pub fn max3(self) -> f64 {
        self.0[0].max(self.0[1]).max(self.0[2])
    }
}

impl Add for Vec4 {
    type Output = Self;

    fn add(self, o: Self) -> Self {
        self.zip(o, |a, b| a + b)
    }
}

impl Sub for Vec4 {
    type Output = Self;

    fn sub(self, o: Self) -> Self {
        self.zip(o, |a, b| a - b)
    }
}

impl Mul for Vec4 {
    type Output = Self;

    fn mul(self, o: Self) -> Self {
        self.zip(o, |a, b| a * b)
    }
}

impl Mul<f64> for Vec4 {
    type Output = Self;

    fn mul(self, s: f64) -> Self {
        self.map(|v| v * s)
    }
}

impl Div<f64> for Vec4 {
    type Output = Self;

    fn div(self, s: f64) -> Self {
        self.map(|v| v / s)
    }
}

impl Neg for Vec4 {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(|v| -v)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
