//! Boundary-mask transitions.
//!
//! Each effect computes a scalar field over the unit square and shows B where the field has
//! been overtaken by progress, optionally with a linear band straddling the edge.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

use crate::color::literal::ColorArg;
use crate::foundation::error::FxResult;
use crate::foundation::math::{Vec2, Vec2Ext, Vec4, fract, frand, glmod, mix, smoothstep};
use crate::params::table::Declarations;
use crate::transitions::fragment::{Fragment, Prime, Transition};

pub(crate) const CENTER: Vec2 = Vec2::new(0.5, 0.5);

/// B inside the boundary (`d < 0`), A beyond `smoothness`, linear in between.
pub(crate) fn fade_band(b: Vec4, a: Vec4, d: f64, smoothness: f64) -> Vec4 {
    if d < 0.0 {
        b
    } else if d < smoothness {
        b.mix(a, d / smoothness)
    } else {
        a
    }
}

pub(crate) fn between(x: f64, lo: f64, hi: f64) -> bool {
    x >= lo && x <= hi
}

#[derive(Debug)]
pub(crate) struct Angular {
    offset: f64,
    clockwise: bool,
}

impl Prime for Angular {
    fn prime(decl: &mut Declarations<'_>) -> FxResult<Self> {
        let starting = decl.number("startingAngle", 90.0)?;
        let clockwise = decl.flag("clockwise", false)?;
        let offset = decl.derived("offset", starting.to_radians())?;
        Ok(Self { offset, clockwise })
    }
}

impl Transition for Angular {
    fn evaluate(&self, f: &Fragment<'_>) -> Vec4 {
        let angle = (f.p - CENTER).atan2() + self.offset;
        let mut n = angle / TAU + 0.5;
        if self.clockwise {
            n = -n;
        }
        if f.progress >= fract(n) { f.b } else { f.a }
    }
}

#[derive(Debug)]
pub(crate) struct Bars {
    vertical: bool,
}

impl Prime for Bars {
    fn prime(decl: &mut Declarations<'_>) -> FxResult<Self> {
        Ok(Self {
            vertical: decl.flag("vertical", false)?,
        })
    }
}

impl Transition for Bars {
    fn evaluate(&self, f: &Fragment<'_>) -> Vec4 {
        let r = frand(if self.vertical { f.p.x } else { f.p.y }, 0.0);
        if r > f.progress { f.a } else { f.b }
    }
}

/// Two triangles growing from opposite edges until their tips meet at the centre.
#[derive(Debug)]
pub(crate) struct BowTie {
    vertical: bool,
}

impl Prime for BowTie {
    fn prime(decl: &mut Declarations<'_>) -> FxResult<Self> {
        Ok(Self {
            vertical: decl.flag("vertical", false)?,
        })
    }
}

impl BowTie {
    /// `p` lies on the same side of all three edges of `abc`.
    fn in_triangle(p: Vec2, a: Vec2, b: Vec2, c: Vec2) -> bool {
        let b1 = (p - a).dot(Vec2::new(c.y - a.y, a.x - c.x)) < 0.0;
        let b2 = (p - b).dot(Vec2::new(a.y - b.y, b.x - a.x)) < 0.0;
        let b3 = (p - c).dot(Vec2::new(b.y - c.y, c.x - b.x)) < 0.0;
        b1 == b2 && b2 == b3
    }

    /// Distance from `p` to the line through `tip` and `base`.
    fn edge_distance(p: Vec2, tip: Vec2, base: Vec2) -> f64 {
        let dir = base - tip;
        Vec2::new(dir.y, -dir.x).normalize().dot(base - p).abs()
    }
}

impl Transition for BowTie {
    fn evaluate(&self, f: &Fragment<'_>) -> Vec4 {
        let t = f.progress;
        let (mut a, mut b, mut c) = (CENTER, CENTER, CENTER);
        if self.vertical {
            a.y = t;
            b.x -= t;
            c.x += t;
            b.y = 0.0;
            c.y = 0.0;
        } else {
            a.x = t;
            b.y -= t;
            c.y += t;
            b.x = 0.0;
            c.x = 0.0;
        }
        let coord = if self.vertical { f.p.y } else { f.p.x };
        for second in [false, true] {
            if Self::in_triangle(f.p, a, b, c) {
                if t < 0.1 {
                    return f.a;
                }
                if !second != (coord < 0.5) {
                    return if second { f.a } else { f.b };
                }
                // soften the slanted edges
                let d = Self::edge_distance(f.p, a, b).min(Self::edge_distance(f.p, a, c));
                let m = if d < 0.005 { d * 200.0 } else { 1.0 };
                return f.a.mix(f.b, m);
            }
            // mirror onto the opposite edge
            if self.vertical {
                a.y = 1.0 - a.y;
                b.y = 1.0;
                c.y = 1.0;
            } else {
                a.x = 1.0 - a.x;
                b.x = 1.0;
                c.x = 1.0;
            }
        }
        f.a
    }
}

#[derive(Debug)]
pub(crate) struct CannabisLeaf;

impl Prime for CannabisLeaf {
    fn prime(_: &mut Declarations<'_>) -> FxResult<Self> {
        Ok(Self)
    }
}

impl Transition for CannabisLeaf {
    fn evaluate(&self, f: &Fragment<'_>) -> Vec4 {
        if f.progress == 0.0 {
            return f.a;
        }
        let mut leaf = (f.p - CENTER) / (10.0 * f.progress.powf(3.5));
        leaf.y += 0.35;
        let o = leaf.atan2();
        let curve = (1.0 + o.sin())
            * (1.0 + 0.9 * (8.0 * o).cos())
            * (1.0 + 0.1 * (24.0 * o).cos())
            * (0.9 + 0.05 * (200.0 * o).cos());
        if leaf.hypot() >= 0.18 * curve { f.a } else { f.b }
    }
}

#[derive(Debug)]
pub(crate) struct Chessboard {
    grid: f64,
}

impl Prime for Chessboard {
    fn prime(decl: &mut Declarations<'_>) -> FxResult<Self> {
        Ok(Self {
            grid: f64::from(decl.int("grid", 8)?),
        })
    }
}

impl Transition for Chessboard {
    fn evaluate(&self, f: &Fragment<'_>) -> Vec4 {
        let st = f.p * self.grid;
        let idx = st.floor_elem();
        let g = st.x - idx.x;
        let checker = (idx.x + idx.y) as i64 % 2 != 0;
        let show_b = if f.progress < 0.5 {
            checker && f.progress * 2.0 >= g
        } else {
            checker || f.progress * 2.0 - 1.0 >= g
        };
        if show_b { f.b } else { f.a }
    }
}

#[derive(Debug)]
pub(crate) struct CornerVanish;

impl Prime for CornerVanish {
    fn prime(_: &mut Declarations<'_>) -> FxResult<Self> {
        Ok(Self)
    }
}

impl Transition for CornerVanish {
    fn evaluate(&self, f: &Fragment<'_>) -> Vec4 {
        let b1 = (1.0 - f.progress) / 2.0;
        let b2 = 1.0 - b1;
        if between(f.p.x, b1, b2) || between(f.p.y, b1, b2) {
            f.b
        } else {
            f.a
        }
    }
}

#[derive(Debug)]
pub(crate) struct CrossOut {
    smoothness: f64,
}

impl Prime for CrossOut {
    fn prime(decl: &mut Declarations<'_>) -> FxResult<Self> {
        Ok(Self {
            smoothness: decl.number("smoothness", 0.05)?,
        })
    }
}

impl Transition for CrossOut {
    fn evaluate(&self, f: &Fragment<'_>) -> Vec4 {
        let c = f.progress / 2.0;
        let q = f.p - CENTER;
        let (ds, dd) = (q.x + q.y, q.y - q.x);
        if between(ds, -c, c) || between(dd, -c, c) {
            return f.b;
        }
        let cs = c + self.smoothness;
        if !(between(ds, -cs, cs) || between(dd, -cs, cs)) {
            return f.a;
        }
        let d = (if (q.x >= 0.0) != (q.y >= 0.0) { ds } else { dd }).abs();
        f.b.mix(f.a, (d - c) / self.smoothness)
    }
}

#[derive(Debug)]
pub(crate) struct Diamond {
    smoothness: f64,
}

impl Prime for Diamond {
    fn prime(decl: &mut Declarations<'_>) -> FxResult<Self> {
        Ok(Self {
            smoothness: decl.number("smoothness", 0.05)?,
        })
    }
}

impl Transition for Diamond {
    fn evaluate(&self, f: &Fragment<'_>) -> Vec4 {
        let d = (f.p - CENTER).manhattan();
        fade_band(f.b, f.a, d - f.progress, self.smoothness)
    }
}

#[derive(Debug)]
pub(crate) struct DoubleDiamond {
    smoothness: f64,
}

impl Prime for DoubleDiamond {
    fn prime(decl: &mut Declarations<'_>) -> FxResult<Self> {
        Ok(Self {
            smoothness: decl.number("smoothness", 0.05)?,
        })
    }
}

impl Transition for DoubleDiamond {
    fn evaluate(&self, f: &Fragment<'_>) -> Vec4 {
        let b1 = (1.0 - f.progress) / 2.0;
        let b2 = 1.0 - b1;
        let d = (f.p - CENTER).manhattan();
        if !between(d, b1, b2) {
            return f.a;
        }
        if between(d, b1 + self.smoothness, b2 - self.smoothness) {
            f.b
        } else {
            f.a.mix(f.b, (d - b1).min(b2 - d) / self.smoothness)
        }
    }
}

/// Pivot layout of the fan wipes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Fan {
    /// Two fans closing in from top and bottom.
    In,
    /// Two fans opening from left and right.
    Out,
    /// One fan rising from the bottom centre.
    Up,
}

#[derive(Debug)]
pub(crate) struct FanWipe {
    fan: Fan,
    smoothness: f64,
}

impl FanWipe {
    pub(crate) fn prime(fan: Fan, decl: &mut Declarations<'_>) -> FxResult<Self> {
        Ok(Self {
            fan,
            smoothness: decl.number("smoothness", 0.05)?,
        })
    }
}

impl Transition for FanWipe {
    fn evaluate(&self, f: &Fragment<'_>) -> Vec4 {
        let Vec2 { x, y } = f.p;
        let d = match self.fan {
            Fan::In => {
                let dy = if y < 0.5 { 0.25 - y } else { y - 0.75 };
                (x - 0.5).abs().atan2(dy) - PI * f.progress
            }
            Fan::Out => {
                let dx = if x < 0.5 { 0.25 - x } else { x - 0.75 };
                PI + (0.5 - y).atan2(dx) - TAU * f.progress
            }
            Fan::Up => (x - 0.5).abs().atan2(1.0 - y) - FRAC_PI_2 * f.progress,
        };
        fade_band(f.b, f.a, d, self.smoothness)
    }
}

#[derive(Debug)]
pub(crate) struct Flower {
    smoothness: f64,
    rotation: f64,
    ang: f64,
    fang: f64,
}

impl Prime for Flower {
    fn prime(decl: &mut Declarations<'_>) -> FxResult<Self> {
        let smoothness = decl.number("smoothness", 0.05)?;
        let rotation = decl.number("rotation", 360.0)?;
        // inner radius ratio of a five-pointed star
        let tip = |deg: f64| {
            let v = Vec2::from_angle(deg.to_radians()) - Vec2::new(0.0, 1.0);
            v.dot(v)
        };
        let h = tip(162.0) - tip(234.0) / 4.0;
        let ang = decl.derived("ang", 36f64.to_radians())?;
        let fang = decl.derived("fang", (1.0 - h.sqrt()) / ang.cos())?;
        Ok(Self {
            smoothness,
            rotation,
            ang,
            fang,
        })
    }
}

impl Transition for Flower {
    fn evaluate(&self, f: &Fragment<'_>) -> Vec4 {
        let v = Vec2::new((f.p.x - 0.5) * f.ratio, 0.5 - f.p.y);
        let theta1 = v.x.atan2(v.y) + (f.progress * self.rotation).to_radians();
        let theta2 = glmod(theta1.abs(), self.ang);
        let ro = f.ratio / 0.731 * f.progress;
        let ri = ro * self.fang;
        let r = if glmod((theta1 / self.ang).trunc(), 2.0) == 0.0 {
            theta2 / self.ang * (ro - ri) + ri
        } else {
            (1.0 - theta2 / self.ang) * (ro - ri) + ri
        };
        fade_band(f.b, f.a, v.hypot() - r, self.smoothness)
    }
}

#[derive(Debug)]
pub(crate) struct Heart;

impl Prime for Heart {
    fn prime(_: &mut Declarations<'_>) -> FxResult<Self> {
        Ok(Self)
    }
}

impl Transition for Heart {
    fn evaluate(&self, f: &Fragment<'_>) -> Vec4 {
        if f.progress == 0.0 {
            return f.a;
        }
        let o = (f.p - Vec2::new(0.5, 0.4)) / (1.6 * f.progress);
        let a = o.x * o.x + o.y * o.y - 0.3;
        if o.x * o.x * o.y.powi(3) >= a.powi(3) {
            f.b
        } else {
            f.a
        }
    }
}

#[derive(Debug)]
pub(crate) struct Pinwheel {
    speed: f64,
}

impl Prime for Pinwheel {
    fn prime(decl: &mut Declarations<'_>) -> FxResult<Self> {
        Ok(Self {
            speed: decl.number("speed", 1.0)?,
        })
    }
}

impl Transition for Pinwheel {
    fn evaluate(&self, f: &Fragment<'_>) -> Vec4 {
        let circ = (f.p - CENTER).atan2() + f.progress * self.speed;
        if f.progress <= glmod(circ, FRAC_PI_4) {
            f.a
        } else {
            f.b
        }
    }
}

#[derive(Debug)]
pub(crate) struct PolarFunction {
    segments: f64,
}

impl Prime for PolarFunction {
    fn prime(decl: &mut Declarations<'_>) -> FxResult<Self> {
        Ok(Self {
            segments: f64::from(decl.int("segments", 5)?),
        })
    }
}

impl Transition for PolarFunction {
    fn evaluate(&self, f: &Fragment<'_>) -> Vec4 {
        let d = f.p - CENTER;
        let angle = d.atan2() - FRAC_PI_2;
        let radius = (self.segments * angle).cos() / 4.0 + 1.0;
        if d.hypot() > radius * f.progress {
            f.a
        } else {
            f.b
        }
    }
}

#[derive(Debug)]
pub(crate) struct PolkaDotsCurtain {
    dots: f64,
    center: Vec2,
}

impl Prime for PolkaDotsCurtain {
    fn prime(decl: &mut Declarations<'_>) -> FxResult<Self> {
        Ok(Self {
            dots: decl.number("dots", 20.0)?,
            center: decl.vec2("center", (0.0, 0.0))?,
        })
    }
}

impl Transition for PolkaDotsCurtain {
    fn evaluate(&self, f: &Fragment<'_>) -> Vec4 {
        let cell = (f.p * self.dots).fract_elem();
        if (cell - CENTER).hypot() < f.progress / (f.p - self.center).hypot() {
            f.b
        } else {
            f.a
        }
    }
}

#[derive(Debug)]
pub(crate) struct SquaresWire {
    squares: Vec2,
    smoothness: f64,
    v: Vec2,
    d: f64,
}

impl Prime for SquaresWire {
    fn prime(decl: &mut Declarations<'_>) -> FxResult<Self> {
        let (sx, sy) = decl.ivec2("squares", (10, 10))?;
        let direction = decl.vec2("direction", (1.0, -0.5))?;
        let smoothness = decl.number("smoothness", 1.6)?;
        let u = direction.normalize();
        let v = decl.derived_vec2("v", u / u.manhattan())?;
        let d = decl.derived("d", (v.x + v.y) / 2.0)?;
        Ok(Self {
            squares: Vec2::new(f64::from(sx), f64::from(sy)),
            smoothness,
            v,
            d,
        })
    }
}

impl Transition for SquaresWire {
    fn evaluate(&self, f: &Fragment<'_>) -> Vec4 {
        let m = f.p.dot(self.v) - (self.d - 0.5 + f.progress * (1.0 + self.smoothness));
        let pr = smoothstep(-self.smoothness, 0.0, m);
        let sq = f.p.mul_elem(self.squares).fract_elem();
        let (lo, hi) = (pr / 2.0, 1.0 - pr / 2.0);
        if sq.x.min(sq.y) >= lo && sq.x.max(sq.y) <= hi {
            f.b
        } else {
            f.a
        }
    }
}

#[derive(Debug)]
pub(crate) struct StarWipe {
    border_thickness: f64,
    star_rotation: f64,
    border_color: ColorArg,
    star_angle: f64,
}

impl Prime for StarWipe {
    fn prime(decl: &mut Declarations<'_>) -> FxResult<Self> {
        Ok(Self {
            border_thickness: decl.number("borderThickness", 0.01)?,
            star_rotation: decl.number("starRotation", 0.75)?,
            border_color: decl.color("borderColor", 1.0)?,
            star_angle: decl.derived("starAngle", TAU / 5.0)?,
        })
    }
}

impl Transition for StarWipe {
    fn evaluate(&self, f: &Fragment<'_>) -> Vec4 {
        const SLOPE: f64 = 0.3;
        let r = (f.p - CENTER).rotate_cw(-self.star_rotation * self.star_angle);
        let theta = r.atan2() + PI;
        let mut r = r.rotate_cw(self.star_angle * ((theta / self.star_angle).floor() + 0.5));
        r.x *= SLOPE;
        let bt = self.border_thickness;
        let radius = (bt * 2.0 + 1.0) * f.progress + r.x - bt;
        if radius > r.y && -radius < r.y {
            return f.b;
        }
        let radius = radius + bt;
        if radius > r.y && -radius < r.y {
            return f.color(&self.border_color);
        }
        f.a
    }
}

#[derive(Debug)]
pub(crate) struct WindowBlinds;

impl Prime for WindowBlinds {
    fn prime(_: &mut Declarations<'_>) -> FxResult<Self> {
        Ok(Self)
    }
}

impl Transition for WindowBlinds {
    fn evaluate(&self, f: &Fragment<'_>) -> Vec4 {
        let t = if glmod((f.p.y * 100.0 * f.progress).floor(), 2.0) != 0.0 {
            f.progress * 1.5
        } else {
            f.progress
        };
        let m = mix(t, f.progress, smoothstep(0.8, 1.0, f.progress));
        f.a.mix(f.b, m.clamp(0.0, 1.0))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transitions/mask.rs"]
mod tests;
