//! Perspective transitions: frames projected onto moving planes, with optional floor reflection.

use std::f64::consts::{FRAC_PI_2, PI};

use crate::color::blend::BlendMode;
use crate::color::literal::ColorArg;
use crate::foundation::error::FxResult;
use crate::foundation::math::{Vec2, Vec2Ext, Vec4, mix, smoothstep};
use crate::params::table::Declarations;
use crate::transitions::fragment::{Fragment, Prime, Transition};
use crate::transitions::mask::CENTER;

/// Mirror a projected point below the frame for the floor reflection.
fn reflect(p: Vec2, floating: f64) -> Vec2 {
    Vec2::new(p.x, p.y * -1.2 - floating)
}

#[derive(Debug)]
pub(crate) struct Cube {
    persp: f64,
    unzoom: f64,
    reflection: f64,
    floating: f64,
    background: ColorArg,
}

impl Prime for Cube {
    fn prime(decl: &mut Declarations<'_>) -> FxResult<Self> {
        Ok(Self {
            persp: decl.number("persp", 0.7)?,
            unzoom: decl.number("unzoom", 0.3)?,
            reflection: decl.number("reflection", 0.4)?,
            floating: decl.number("floating", 3.0)?,
            background: decl.color("background", 0.0)?,
        })
    }
}

impl Transition for Cube {
    fn evaluate(&self, f: &Fragment<'_>) -> Vec4 {
        let t = f.progress;
        let uz = self.unzoom * (0.5 - (0.5 - t).abs()) * 2.0;
        let p = (f.p * (1.0 + uz)).add_scalar(-uz / 2.0);

        let persp = t * (1.0 - self.persp);
        let fx = (p.x - t) / (1.0 - t);
        let from_p = Vec2::new(fx, (p.y - persp * fx / 2.0) / (1.0 - persp * fx));
        if from_p.in_unit_square() {
            return f.from(from_p);
        }

        let persp = 1.0 - mix(t * t, 1.0, self.persp);
        let tx = p.x / t;
        let to_p = Vec2::new(tx, (p.y - persp * (1.0 - tx) / 2.0) / (1.0 - persp * (1.0 - tx)));
        if to_p.in_unit_square() {
            return f.to(to_p);
        }

        let bg = f.color(&self.background);
        let mut c = bg;
        let from_r = reflect(from_p, self.floating * 0.01);
        if from_r.in_unit_square() {
            c = bg.mix(f.from(from_r), self.reflection * (1.0 - from_r.y));
        }
        let to_r = reflect(to_p, self.floating * 0.01);
        if to_r.in_unit_square() {
            c = bg.mix(f.to(to_r), self.reflection * (1.0 - to_r.y));
        }
        c
    }
}

#[derive(Debug)]
pub(crate) struct Doorway {
    reflection: f64,
    perspective: f64,
    depth: f64,
    background: ColorArg,
}

impl Prime for Doorway {
    fn prime(decl: &mut Declarations<'_>) -> FxResult<Self> {
        Ok(Self {
            reflection: decl.number("reflection", 0.4)?,
            perspective: decl.number("perspective", 0.4)?,
            depth: decl.number("depth", 3.0)?,
            background: decl.color("background", 0.0)?,
        })
    }
}

impl Transition for Doorway {
    fn evaluate(&self, f: &Fragment<'_>) -> Vec4 {
        let t = f.progress;
        let slit = (f.p.x - 0.5).abs() * 2.0 - t;
        if slit > 0.0 {
            let d = 1.0 / (1.0 + self.perspective * t * (1.0 - slit));
            let shift = if f.p.x > 0.5 { -0.5 } else { 0.5 };
            let pfr = Vec2::new(f.p.x + shift * t, (f.p.y + (1.0 - d) / 2.0) * d);
            if pfr.in_unit_square() {
                return f.from(pfr);
            }
        }
        let size = mix(1.0, self.depth, 1.0 - t);
        let pto = (f.p - CENTER) * size + CENTER;
        if pto.in_unit_square() {
            return f.to(pto);
        }
        let c = f.color(&self.background);
        let pto = reflect(pto, 0.02);
        if pto.in_unit_square() {
            c.mix(f.to(pto), self.reflection * (1.0 - pto.y))
        } else {
            c
        }
    }
}

#[derive(Debug)]
pub(crate) struct Swap {
    reflection: f64,
    perspective: f64,
    depth: f64,
    background: ColorArg,
}

impl Prime for Swap {
    fn prime(decl: &mut Declarations<'_>) -> FxResult<Self> {
        Ok(Self {
            reflection: decl.number("reflection", 0.4)?,
            perspective: decl.number("perspective", 0.2)?,
            depth: decl.number("depth", 3.0)?,
            background: decl.color("background", 0.0)?,
        })
    }
}

impl Transition for Swap {
    fn evaluate(&self, f: &Fragment<'_>) -> Vec4 {
        let t = f.progress;
        let Vec2 { x, y } = f.p;

        let size = mix(1.0, self.depth, t);
        let persp = self.perspective * t;
        let pfr = Vec2::new(
            x * size / (1.0 - persp),
            (y - 0.5) * size / (1.0 - size * persp * x) + 0.5,
        );

        let size = mix(1.0, self.depth, 1.0 - t);
        let persp = self.perspective - persp;
        let pto = Vec2::new(
            (x - 1.0) * size / (1.0 - persp) + 1.0,
            (y - 0.5) * size / (1.0 - size * persp * (0.5 - x)) + 0.5,
        );

        // the receding frame stays in front until the midpoint
        if t < 0.5 && pfr.in_unit_square() {
            return f.from(pfr);
        }
        if pto.in_unit_square() {
            return f.to(pto);
        }
        if pfr.in_unit_square() {
            return f.from(pfr);
        }

        let c = f.color(&self.background);
        let pfr = reflect(pfr, 0.02);
        if pfr.in_unit_square() {
            return c.mix(f.from(pfr), self.reflection * (1.0 - pfr.y));
        }
        let pto = reflect(pto, 0.02);
        if pto.in_unit_square() {
            return c.mix(f.to(pto), self.reflection * (1.0 - pto.y));
        }
        c
    }
}

#[derive(Debug)]
pub(crate) struct BookFlip;

impl Prime for BookFlip {
    fn prime(_: &mut Declarations<'_>) -> FxResult<Self> {
        Ok(Self)
    }
}

impl Transition for BookFlip {
    fn evaluate(&self, f: &Fragment<'_>) -> Vec4 {
        let p = 0.5 - f.progress;
        let c = f.p - CENTER;
        let past_fold = c.x >= p;
        let colour = if c.x < 0.0 {
            if !past_fold {
                return f.a;
            }
            f.to(Vec2::new(
                (1.0 - c.x / p) * 0.5,
                (c.y / (0.5 - (p + p + 1.0) * c.x) + 1.0) * 0.5,
            ))
        } else {
            if past_fold {
                return f.b;
            }
            f.from(Vec2::new(
                (1.0 + c.x / p) * 0.5,
                (c.y / (0.5 - (p + p - 1.0) * c.x) + 1.0) * 0.5,
            ))
        };
        f.shade(colour, (p.abs() * 2.0).max(0.7))
    }
}

#[derive(Debug)]
pub(crate) struct Bounce {
    shadow_alpha: f64,
    shadow_height: f64,
    bounces: f64,
    direction: i32,
    shadow_color: ColorArg,
}

impl Prime for Bounce {
    fn prime(decl: &mut Declarations<'_>) -> FxResult<Self> {
        Ok(Self {
            shadow_alpha: decl.number("shadowAlpha", 0.6)?,
            shadow_height: decl.number("shadowHeight", 0.075)?,
            bounces: decl.number("bounces", 3.0)?,
            // 0 south, 1 west, 2 north, 3 east
            direction: decl.int("direction", 0)?,
            shadow_color: decl.color("shadowColor", 0.0)?,
        })
    }
}

impl Transition for Bounce {
    fn evaluate(&self, f: &Fragment<'_>) -> Vec4 {
        let horizontal = self.direction & 1 != 0;
        let phase = f.progress * PI * self.bounces;
        let mut edge = phase.cos().abs() * (1.0 - (f.progress * FRAC_PI_2).sin());
        if self.direction & 2 != 0 {
            edge = 1.0 - edge;
        }
        let mut v = f.p;
        let d = (if horizontal { v.x } else { v.y }) - edge;
        if d <= 0.0 {
            if horizontal {
                v.x = 1.0 + d;
            } else {
                v.y = 1.0 + d;
            }
            return f.from(v);
        }
        if d > self.shadow_height {
            return f.b;
        }
        let m = mix(
            d / self.shadow_height * self.shadow_alpha + (1.0 - self.shadow_alpha),
            1.0,
            smoothstep(0.95, 1.0, f.progress),
        );
        f.b.mix(f.color(&self.shadow_color), 1.0 - m)
    }
}

/// `c`, relative to the centre, lies inside the unit frame with corners rounded by `r`.
fn in_rounded_mask(c: Vec2, r: Vec2) -> bool {
    let c = (c.abs_elem() + r.add_scalar(-0.5)).div_elem(r);
    (c.x < 0.0 && c.y < 1.0) || (c.y < 0.0 && c.x < 1.0) || c.dot(c) < 1.0
}

/// Colour that yields `c` when screened with itself.
fn unscreen(c: Vec4) -> Vec4 {
    c.map3(|v| 1.0 - (1.0 - v).sqrt())
}

/// Toy slide viewer: the frame shrinks into a rounded slide, splits in two, swings out and back.
#[derive(Debug)]
pub(crate) struct StereoViewer {
    zoom: f64,
    radius: f64,
    flip: bool,
    background: ColorArg,
    track_matte: bool,
}

impl Prime for StereoViewer {
    fn prime(decl: &mut Declarations<'_>) -> FxResult<Self> {
        Ok(Self {
            zoom: decl.number("zoom", 0.9)?,
            radius: decl.number("radius", 0.25)?,
            flip: decl.flag("flip", false)?,
            background: decl.color("background", 0.0)?,
            track_matte: decl.flag("trkMat", false)?,
        })
    }
}

impl Transition for StereoViewer {
    fn evaluate(&self, f: &Fragment<'_>) -> Vec4 {
        let t = f.progress;
        let c = f.p - CENTER;
        let r = Vec2::new(self.radius / f.ratio, self.radius);
        let bg = f.color(&self.background);
        let opaque = |img: Vec4| img.alpha() >= bg.alpha();

        if !(0.1..0.9).contains(&t) {
            // shrink and round the corners, or grow and square them at the end
            let amount = (0.5 - (0.5 - t).abs()) * 10.0;
            let z = c / (1.0 + amount * (self.zoom - 1.0));
            if in_rounded_mask(z, r * amount) {
                let q = z + CENTER;
                let img = if t < 0.5 { f.from(q) } else { f.to(q) };
                if !self.track_matte || opaque(img) {
                    return img;
                }
            }
            return bg;
        }
        if (0.48..0.52).contains(&t) {
            return bg;
        }

        let z = c / self.zoom;
        if t > 0.5 && !in_rounded_mask(z, r) {
            return bg;
        }
        let mut angle = 1.0 - ((0.5 - t).abs() - 0.02) / 0.38;
        angle *= angle;
        angle /= mix(1.23, self.zoom, -1.6);
        if self.flip {
            angle = -angle;
        }
        // each half swings about a pivot well off screen
        let halves = [2.0, -2.0].map(|pivot| {
            let q = Vec2::new(c.x * f.ratio + pivot, c.y).rotate_cw(-angle);
            Vec2::new((q.x - pivot) / f.ratio, q.y) / self.zoom
        });
        let mut inside = halves.map(|q| in_rounded_mask(q, r));
        if !inside[0] && !inside[1] {
            return bg;
        }

        if t < 0.5 {
            let imgs = halves.map(|q| f.from(q + CENTER));
            if self.track_matte {
                for (m, img) in inside.iter_mut().zip(&imgs) {
                    *m = *m && opaque(*img) && img.alpha() != 0.0;
                }
                if !inside[0] && !inside[1] {
                    return bg;
                }
            }
            if inside[0] && inside[1] {
                return f.blend(unscreen(imgs[0]), unscreen(imgs[1]), BlendMode::Screen);
            }
            let img = if inside[0] { imgs[0] } else { imgs[1] };
            return bg.mix(img, 0.8);
        }

        let img = f.to(z + CENTER);
        if self.track_matte && !opaque(img) {
            return bg;
        }
        if inside[0] && inside[1] {
            return img;
        }
        bg.mix(img, 0.8)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transitions/perspective.rs"]
mod tests;
