//! Cylindrical page curls.
//!
//! A fold axis sweeps across the frame. Points are classified as lying on the flat page, on
//! the front or back of the virtual cylinder, or on the exposed frame beneath, and each
//! branch samples a different frame with shadowing near the fold.

use std::f64::consts::{FRAC_PI_2, PI, SQRT_2, TAU};

use crate::color::convert::{brighten, grey};
use crate::easing::standard::{EaseFamily, EaseMode};
use crate::foundation::core::ColorModel;
use crate::foundation::error::FxResult;
use crate::foundation::math::{Vec2, Vec2Ext, Vec4, glmod};
use crate::params::table::Declarations;
use crate::transitions::fragment::{Fragment, Prime, Transition};
use crate::transitions::mask::{CENTER, between};

const FLIP_X: Vec2 = Vec2::new(-1.0, 1.0);

/// Quadrant corner (`±0.5, ±0.5`) a unit direction points toward.
fn quadrant_corner(dir: Vec2) -> Vec2 {
    Vec2::new(
        if dir.x >= 0.0 { 0.5 } else { -0.5 },
        if dir.y >= 0.0 { 0.5 } else { -0.5 },
    )
}

/// Curl direction for a fold angle in degrees, corrected for the frame aspect.
fn curl_direction(angle_deg: f64, ratio: f64) -> Vec2 {
    let v = Vec2::from_angle(angle_deg.to_radians() - FRAC_PI_2);
    Vec2::new(v.x * ratio, v.y).normalize()
}

/// Pull colour planes toward white: all planes for RGB, luma only for YUV.
fn lighten(c: Vec4, amount: f64, model: ColorModel) -> Vec4 {
    match model {
        ColorModel::Rgb => c.map3(|v| v + amount * (1.0 - v)),
        ColorModel::Yuv => Vec4::new(c.0[0] + amount * (1.0 - c.0[0]), c.0[1], c.0[2], c.0[3]),
    }
}

#[derive(Debug)]
pub(crate) struct InvertedPageCurl {
    angle: i32,
    radius: f64,
    reverse_effect: bool,
}

impl Prime for InvertedPageCurl {
    fn prime(decl: &mut Declarations<'_>) -> FxResult<Self> {
        let requested = decl.int("angle", 100)?;
        let radius = decl.number("radius", 1.0 / TAU)?;
        let reverse_effect = decl.flag("reverseEffect", false)?;
        let angle = if matches!(requested, 30 | 100) {
            requested
        } else {
            tracing::warn!(angle = requested, "InvertedPageCurl supports angles 30 and 100, using 100");
            100
        };
        decl.derived("ang", f64::from(angle))?;
        Ok(Self {
            angle,
            radius,
            reverse_effect,
        })
    }
}

impl InvertedPageCurl {
    const MIN_AMOUNT: f64 = -0.16;
    const MAX_AMOUNT: f64 = 1.5;

    /// Distance from `p` to the nearest frame edge, measured outside the frame as well.
    fn distance_to_edge(p: Vec2) -> f64 {
        let d = |v: f64| {
            if v < 0.0 {
                -v
            } else if v > 1.0 {
                v - 1.0
            } else if v > 0.5 {
                1.0 - v
            } else {
                v
            }
        };
        let (dx, dy) = (d(p.x), d(p.y));
        if between(p.x, 0.0, 1.0) || between(p.y, 0.0, 1.0) {
            dx.min(dy)
        } else {
            dx.hypot(dy)
        }
    }
}

impl Transition for InvertedPageCurl {
    fn evaluate(&self, f: &Fragment<'_>) -> Vec4 {
        let rev = self.reverse_effect;
        let t = if rev { 1.0 - f.progress } else { f.progress };
        let amount = t * (Self::MAX_AMOUNT - Self::MIN_AMOUNT) + Self::MIN_AMOUNT;
        let cylinder_angle = TAU * amount;
        let r = self.radius;
        let ang = f64::from(self.angle).to_radians();
        let (o1, o2) = if self.angle == 30 {
            (Vec2::new(0.12, 0.258), Vec2::new(0.15, -0.5))
        } else {
            (Vec2::new(-0.801, 0.89), Vec2::new(0.985, 0.985))
        };
        let unrotate = |x: f64, hit: f64| Vec2::new(x, hit / TAU).rotate_cw(-ang) + o2;

        let point = f.p.rotate_cw(ang) + o1;
        let yc = point.y - amount;
        let (near, far) = if rev { (f.b, f.a) } else { (f.a, f.b) };
        if yc > r {
            return near;
        }

        if yc < -r {
            // behind the cylinder
            let yc = -r - r - yc;
            let hit = (yc / r).acos() + cylinder_angle - PI;
            let q = unrotate(point.x, hit);
            if yc < 0.0 && q.in_unit_square() && (hit < PI || amount > 0.5) {
                let shadow = (1.0 - (q - CENTER).hypot() * SQRT_2) * (-yc / r).powi(3) / 2.0;
                return brighten(far, -shadow, f.model);
            }
            return far;
        }

        // see-through part of the turning page
        let mut colour = near;
        let hit = PI - (yc / r).acos() + cylinder_angle;
        if yc < 0.0 {
            let q = unrotate(point.x, hit);
            colour = match (q.in_unit_square(), rev) {
                (true, false) => f.from(q),
                (true, true) => f.to(q),
                (false, false) => f.b,
                (false, true) => f.a,
            };
        }

        let hit = cylinder_angle + cylinder_angle - hit;
        let hit_mod = glmod(hit, TAU);
        if (hit_mod > PI && amount < 0.5) || (hit_mod > FRAC_PI_2 && amount < 0.0) {
            return colour;
        }
        let back = unrotate(point.x, hit);
        let shadow = (1.0 - Self::distance_to_edge(back) * 30.0) / 3.0;
        if shadow > 0.0 {
            colour = brighten(colour, -shadow * amount, f.model);
        }
        if !back.in_unit_square() {
            return colour;
        }

        // back of the page, washed out toward grey
        let c = if rev { f.to(back) } else { f.from(back) };
        let g = if f.is_rgb() {
            (c.0[0] + c.0[1] + c.0[2]) / 3.0
        } else {
            c.0[0]
        };
        let g = g * 0.2 + 0.8 * ((1.0 - (yc / r).abs()).powf(0.2) / 2.0 + 0.5);
        grey(g, c.alpha(), f.model)
    }
}

#[derive(Debug)]
pub(crate) struct SimplePageCurl {
    radius: f64,
    roll: bool,
    reverse_effect: bool,
    grey_back: bool,
    opacity: f64,
    shadow: f64,
    dir: Vec2,
    start: Vec2,
    path: Vec2,
}

impl Prime for SimplePageCurl {
    fn prime(decl: &mut Declarations<'_>) -> FxResult<Self> {
        let angle = decl.int("angle", 80)?;
        let radius = decl.number("radius", 0.15)?;
        let roll = decl.flag("roll", false)?;
        let reverse_effect = decl.flag("reverseEffect", false)?;
        let grey_back = decl.flag("greyBack", false)?;
        let opacity = decl.number("opacity", 0.8)?;
        let shadow = decl.number("shadow", 0.2)?;

        let dir = curl_direction(f64::from(angle), decl.context().ratio);
        let corner = quadrant_corner(dir);
        let dir = decl.derived_vec2("dir", dir)?;
        // curl axis starts on the corner and ends just out of view, shadow included
        let start = decl.derived_vec2("i", dir * corner.dot(dir))?;
        let end = dir * (-2.0 * radius) - start;
        let path = decl.derived_vec2("m", end - start)?;
        Ok(Self {
            radius,
            roll,
            reverse_effect,
            grey_back,
            opacity,
            shadow,
            dir,
            start,
            path,
        })
    }
}

impl Transition for SimplePageCurl {
    fn evaluate(&self, f: &Fragment<'_>) -> Vec4 {
        let rev = self.reverse_effect;
        let r = self.radius;
        let dir = self.dir;
        let t = if rev { 1.0 - f.progress } else { f.progress };
        let axis = self.start + self.path * t;
        let q = f.p - CENTER;
        let dist = (q - axis).dot(dir);
        let mut p = q - dir * dist;

        let mut c = if rev { f.a } else { f.b };
        let (mut on_page, mut backside, mut shadowed) = (false, false, false);
        if dist < 0.0 {
            if !self.roll {
                p = p + dir * (PI * r - dist) + CENTER;
                on_page = true;
            } else if -dist < r {
                let phi = (-dist / r).asin();
                p = p + dir * ((PI + phi) * r) + CENTER;
                on_page = true;
                shadowed = true;
            }
            if on_page && p.in_unit_square() {
                backside = true;
            } else {
                c = if rev { f.b } else { f.a };
                on_page = false;
            }
        } else if r > 0.0 {
            let phi = (dist / r).asin();
            let p2 = p + dir * ((PI - phi) * r) + CENTER;
            let p1 = p + dir * (phi * r) + CENTER;
            if p2.in_unit_square() {
                p = p2;
                on_page = true;
                backside = true;
                shadowed = true;
            } else if p1.in_unit_square() {
                p = p1;
                on_page = true;
            } else {
                shadowed = true;
            }
        }

        if on_page {
            c = if rev { f.to(p) } else { f.from(p) };
        }
        if backside {
            if self.grey_back {
                let g = if f.is_rgb() {
                    (c.0[0] + c.0[1] + c.0[2]) / 3.0
                } else {
                    c.0[0]
                };
                c = grey(g, c.alpha(), f.model);
            }
            c = lighten(c, self.opacity, f.model);
        }
        if shadowed && r > 0.0 {
            let d = dist + if on_page { r } else { -r };
            c = f.shade(c, (d.abs() / r).clamp(0.0, 1.0).powf(self.shadow));
        }
        c
    }
}

#[derive(Debug)]
pub(crate) struct SimpleBookCurl {
    radius: f64,
    shadow: f64,
    corner: Vec2,
    k: f64,
    m1: f64,
    m2: f64,
}

impl Prime for SimpleBookCurl {
    fn prime(decl: &mut Declarations<'_>) -> FxResult<Self> {
        let angle = decl.int("angle", 150)?;
        let radius = decl.number("radius", 0.1)?;
        let shadow = decl.number("shadow", 0.2)?;

        let dir = curl_direction(f64::from(angle), decl.context().ratio);
        let corner = decl.derived_vec2("q", quadrant_corner(dir))?;
        let abs = dir.abs_elem();
        let k = decl.derived("k", if abs.x == 0.0 { FRAC_PI_2 } else { abs.atan2() })?;
        let m1 = decl.derived("m1", (dir * corner.dot(dir)).hypot())?;
        let m2 = decl.derived("m2", PI * radius)?;
        Ok(Self {
            radius,
            shadow,
            corner,
            k,
            m1,
            m2,
        })
    }
}

impl Transition for SimpleBookCurl {
    fn evaluate(&self, f: &Fragment<'_>) -> Vec4 {
        let mut rad = self.radius;
        let m = (self.m1 + self.m2) * f.progress;
        let (dir, axis) = if m < self.m1 {
            // page swings round the spine while the fold angle eases to vertical
            let phi = self.k * (1.0 - EaseFamily::Sinusoidal.apply(EaseMode::InOut, m / self.m1));
            let dir = Vec2::from_angle(phi).mul_elem(self.corner).normalize();
            (dir, dir * (self.m1 - m))
        } else {
            // then the curl straightens out
            if self.m2 > 0.0 {
                rad *= 1.0 - EaseFamily::Quadratic.apply(EaseMode::Out, (m - self.m1) / self.m2);
            }
            (Vec2::new(self.corner.x * 2.0, 0.0), Vec2::ZERO)
        };

        let q = f.p - CENTER;
        let dist = (q - axis).dot(dir);
        let p = q - dir * dist;

        let mut c = f.b;
        let mut shadowed = false;
        if dist < 0.0 {
            c = f.a;
            let back = (p + dir * (PI * rad - dist)).mul_elem(FLIP_X) + CENTER;
            if back.in_unit_square() {
                c = f.to(back);
            }
        } else if rad > 0.0 {
            let phi = (dist / rad).asin();
            let p2 = (p + dir * ((PI - phi) * rad)).mul_elem(FLIP_X) + CENTER;
            let p1 = p + dir * (phi * rad) + CENTER;
            if p2.in_unit_square() {
                c = f.to(p2);
                shadowed = true;
            } else if p1.in_unit_square() {
                c = f.from(p1);
            } else {
                shadowed = true;
            }
        }
        if shadowed {
            let d = ((dist - rad).abs() / rad).clamp(0.0, 1.0).powf(self.shadow);
            c = f.shade(c, d);
        }
        c
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transitions/curl.rs"]
mod tests;
