//! Noise and dissolve transitions driven by the hashed pseudo-random field.

use std::f64::consts::PI;

use crate::color::convert::grey;
use crate::color::literal::ColorArg;
use crate::foundation::error::FxResult;
use crate::foundation::math::{Vec2, Vec2Ext, Vec4, frand, mix, smoothstep, step};
use crate::params::table::Declarations;
use crate::transitions::fragment::{Fragment, Prime, Transition};

#[derive(Debug)]
pub(crate) struct RandomNoiseX;

impl Prime for RandomNoiseX {
    fn prime(_: &mut Declarations<'_>) -> FxResult<Self> {
        Ok(Self)
    }
}

impl Transition for RandomNoiseX {
    fn evaluate(&self, f: &Fragment<'_>) -> Vec4 {
        f.a.mix(f.b, (f.p.frand() + f.progress).floor())
    }
}

#[derive(Debug)]
pub(crate) struct RandomSquares {
    size: Vec2,
    smoothness: f64,
}

impl Prime for RandomSquares {
    fn prime(decl: &mut Declarations<'_>) -> FxResult<Self> {
        let (x, y) = decl.ivec2("size", (10, 10))?;
        Ok(Self {
            size: Vec2::new(f64::from(x), f64::from(y)),
            smoothness: decl.number("smoothness", 0.5)?,
        })
    }
}

impl Transition for RandomSquares {
    fn evaluate(&self, f: &Fragment<'_>) -> Vec4 {
        let s = self.smoothness;
        let r = self.size.mul_elem(f.p).floor_elem().frand();
        let m = smoothstep(0.0, -s, r - f.progress * (1.0 + s));
        f.a.mix(f.b, m)
    }
}

#[derive(Debug)]
pub(crate) struct Perlin {
    scale: f64,
    smoothness: f64,
}

impl Prime for Perlin {
    fn prime(decl: &mut Declarations<'_>) -> FxResult<Self> {
        Ok(Self {
            scale: decl.number("scale", 4.0)?,
            smoothness: decl.number("smoothness", 0.01)?,
        })
    }
}

impl Perlin {
    /// Value noise: bilinear blend of cell-corner hashes with smoothstep weights.
    fn noise(p: Vec2) -> f64 {
        let i = p.floor_elem();
        let fr = p - i;
        let (ux, uy) = (smoothstep(0.0, 1.0, fr.x), smoothstep(0.0, 1.0, fr.y));
        let a = frand(i.x, i.y);
        let b = frand(i.x + 1.0, i.y);
        let c = frand(i.x, i.y + 1.0);
        let d = frand(i.x + 1.0, i.y + 1.0);
        mix(a, b, ux) + ((c - a) * (1.0 - ux) + (d - b) * ux) * uy
    }
}

impl Transition for Perlin {
    fn evaluate(&self, f: &Fragment<'_>) -> Vec4 {
        let s = self.smoothness;
        let n = Self::noise(f.p * self.scale);
        let edge = mix(-s, 1.0 + s, f.progress);
        let q = smoothstep(edge - s, edge + s, n);
        f.a.mix(f.b, 1.0 - q)
    }
}

#[derive(Debug)]
pub(crate) struct StaticWipe {
    up_to_down: bool,
    max_span: f64,
}

impl Prime for StaticWipe {
    fn prime(decl: &mut Declarations<'_>) -> FxResult<Self> {
        Ok(Self {
            up_to_down: decl.flag("upToDown", true)?,
            max_span: decl.number("maxSpan", 0.5)?,
        })
    }
}

impl Transition for StaticWipe {
    fn evaluate(&self, f: &Fragment<'_>) -> Vec4 {
        let t = f.progress;
        let span = self.max_span * (PI * t).sin().sqrt();
        let edge = if self.up_to_down { 1.0 - f.p.y } else { f.p.y };
        let envelope = smoothstep(t - span, t, edge) * (1.0 - smoothstep(t, t + span, edge));
        let base = if edge >= t { f.a } else { f.b };
        let d = (f.p * (1.0 + t)).frand();
        base.mix(grey(d, base.alpha(), f.model), envelope)
    }
}

#[derive(Debug)]
pub(crate) struct Crosshatch {
    center: Vec2,
    threshold: f64,
    fade_edge: f64,
}

impl Prime for Crosshatch {
    fn prime(decl: &mut Declarations<'_>) -> FxResult<Self> {
        Ok(Self {
            center: decl.vec2("center", (0.5, 0.5))?,
            threshold: decl.number("threshold", 3.0)?,
            fade_edge: decl.number("fadeEdge", 0.1)?,
        })
    }
}

impl Transition for Crosshatch {
    fn evaluate(&self, f: &Fragment<'_>) -> Vec4 {
        let dist = (self.center - f.p).hypot() / self.threshold;
        let r = f.progress - frand(f.p.y, 0.0).min(frand(0.0, f.p.x));
        let r = mix(step(dist, r), 1.0, smoothstep(1.0 - self.fade_edge, 1.0, f.progress));
        f.a.mix(f.b, mix(0.0, r, smoothstep(0.0, self.fade_edge, f.progress)))
    }
}

#[derive(Debug)]
pub(crate) struct GridFlip {
    size: Vec2,
    pause: f64,
    divider_width: f64,
    randomness: f64,
    background: ColorArg,
}

impl Prime for GridFlip {
    fn prime(decl: &mut Declarations<'_>) -> FxResult<Self> {
        let (x, y) = decl.ivec2("size", (4, 4))?;
        Ok(Self {
            size: Vec2::new(f64::from(x), f64::from(y)),
            pause: decl.number("pause", 0.1)?,
            divider_width: decl.number("dividerWidth", 0.05)?,
            randomness: decl.number("randomness", 0.1)?,
            background: decl.color("background", 0.0)?,
        })
    }
}

impl Transition for GridFlip {
    fn evaluate(&self, f: &Fragment<'_>) -> Vec4 {
        let t = f.progress;
        let cell = Vec2::new(1.0 / self.size.x, 1.0 / self.size.y);
        let pos = self.size.mul_elem(f.p).floor_elem();
        let (bottom, top) = (cell.y * pos.y, cell.y * (pos.y + 1.0));
        let (left, right) = (cell.x * pos.x, cell.x * (pos.x + 1.0));
        let min_y = (f.p.y - top).abs().min((f.p.y - bottom).abs());
        let min_x = (f.p.x - left).abs().min((f.p.x - right).abs());
        let on_divider = min_x.min(min_y) < cell.x.min(cell.y) * self.divider_width;

        let bg = f.color(&self.background);
        if t < self.pause {
            let m = if on_divider { 1.0 - t / self.pause } else { 1.0 };
            return bg.mix(f.a, m);
        }
        if 1.0 - t < self.pause {
            let m = if on_divider {
                1.0 - (1.0 - t) / self.pause
            } else {
                1.0
            };
            return bg.mix(f.b, m);
        }
        if on_divider {
            return bg;
        }

        let r = pos.frand() - self.randomness;
        let cp = smoothstep(0.0, 1.0 - r, (t - self.pause) / (1.0 - self.pause * 2.0));
        let half = (cp - 0.5).abs();
        let offset = cell.x / 2.0 + left;
        let q = Vec2::new((f.p.x - offset) / half / 2.0 + offset, f.p.y);
        let s = step((self.size.x * (f.p.x - left) - 0.5).abs(), half);
        let flipped = f.to(q).mix(f.from(q), step(cp, 0.5));
        bg.mix(flipped, s)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transitions/noise.rs"]
mod tests;
