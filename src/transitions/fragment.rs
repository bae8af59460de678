//! Per-pixel evaluation context and the transition traits.

use std::fmt;

use crate::color::blend::{BlendMode, blend};
use crate::color::convert::shade;
use crate::color::literal::ColorArg;
use crate::foundation::core::ColorModel;
use crate::foundation::error::FxResult;
use crate::foundation::math::{Vec2, Vec4};
use crate::params::table::Declarations;

/// Selects one of the two input frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Which {
    /// The outgoing frame, fully visible at progress 0.
    A,
    /// The incoming frame, fully visible at progress 1.
    B,
}

impl Which {
    /// The other frame.
    pub fn swap(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }
}

/// Random access to the two input frames.
///
/// Coordinates are normalized with `y = 0` at the bottom row. Implementations must clamp
/// out-of-range points to the nearest edge pixel and never fail.
pub trait PixelSource: Sync {
    /// Plane values of frame `which` at `p`.
    fn sample(&self, which: Which, p: Vec2) -> Vec4;
}

/// Everything one per-pixel evaluation may read.
#[derive(Clone, Copy)]
pub struct Fragment<'a> {
    /// Transition progress, 0 shows A and 1 shows B.
    pub progress: f64,
    /// Normalized coordinate of the output pixel.
    pub p: Vec2,
    /// Frame A at `p`.
    pub a: Vec4,
    /// Frame B at `p`.
    pub b: Vec4,
    /// Frame width over height.
    pub ratio: f64,
    /// Plane encoding of the frames.
    pub model: ColorModel,
    source: &'a dyn PixelSource,
}

impl fmt::Debug for Fragment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fragment")
            .field("progress", &self.progress)
            .field("p", &self.p)
            .field("a", &self.a)
            .field("b", &self.b)
            .field("ratio", &self.ratio)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

impl<'a> Fragment<'a> {
    /// Fragment at `p`, with `a`/`b` pre-sampled by the caller.
    pub fn new(
        progress: f64,
        p: Vec2,
        a: Vec4,
        b: Vec4,
        ratio: f64,
        model: ColorModel,
        source: &'a dyn PixelSource,
    ) -> Self {
        Self {
            progress,
            p,
            a,
            b,
            ratio,
            model,
            source,
        }
    }

    /// Frame A at an arbitrary point.
    pub fn from(&self, p: Vec2) -> Vec4 {
        self.source.sample(Which::A, p)
    }

    /// Frame B at an arbitrary point.
    pub fn to(&self, p: Vec2) -> Vec4 {
        self.source.sample(Which::B, p)
    }

    /// `true` when planes are RGB.
    pub fn is_rgb(&self) -> bool {
        self.model.is_rgb()
    }

    /// Colour argument evaluated at this pixel.
    pub fn color(&self, arg: &ColorArg) -> Vec4 {
        arg.resolve(self.p, self.progress, self.ratio, self.model)
    }

    /// Blend `f` over `b` with `mode`.
    pub fn blend(&self, b: Vec4, f: Vec4, mode: BlendMode) -> Vec4 {
        blend(b, f, mode, self.model)
    }

    /// Scale brightness by `factor` (luma only for YUV).
    pub fn shade(&self, c: Vec4, factor: f64) -> Vec4 {
        shade(c, factor, self.model)
    }
}

/// A primed, immutable per-pixel effect.
pub trait Transition: Send + Sync + fmt::Debug {
    /// Output plane values for one pixel. Never fails.
    fn evaluate(&self, frag: &Fragment<'_>) -> Vec4;
}

/// Construction of a transition from its parameter declarations.
pub(crate) trait Prime: Transition + Sized + 'static {
    /// Declare parameters in a fixed order and capture the resolved values.
    fn prime(decl: &mut Declarations<'_>) -> FxResult<Self>;
}

#[cfg(test)]
#[path = "../../tests/unit/transitions/fragment.rs"]
pub(crate) mod tests;
