//! Coordinate-warp transitions: remap the sampling point, then sample one or both frames.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::color::literal::ColorArg;
use crate::easing::standard::{EaseFamily, EaseMode};
use crate::foundation::error::FxResult;
use crate::foundation::math::{Vec2, Vec2Ext, Vec4, clamp_unit, fract, mix, smoothstep};
use crate::params::table::Declarations;
use crate::transitions::fragment::{Fragment, Prime, Transition};
use crate::transitions::mask::{CENTER, between};

/// Sign with zero mapped to zero.
fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

#[derive(Debug)]
pub(crate) struct CrossWarp;

impl Prime for CrossWarp {
    fn prime(_: &mut Declarations<'_>) -> FxResult<Self> {
        Ok(Self)
    }
}

impl Transition for CrossWarp {
    fn evaluate(&self, f: &Fragment<'_>) -> Vec4 {
        let x = smoothstep(0.0, 1.0, f.progress * 2.0 + f.p.x - 1.0);
        let c = f.p - CENTER;
        let a = f.from(c * (1.0 - x) + CENTER);
        let b = f.to(c * x + CENTER);
        a.mix(b, x)
    }
}

#[derive(Debug)]
pub(crate) struct DirectionalWarp {
    smoothness: f64,
    v: Vec2,
    d: f64,
}

impl Prime for DirectionalWarp {
    fn prime(decl: &mut Declarations<'_>) -> FxResult<Self> {
        let smoothness = decl.number("smoothness", 0.1)?;
        let direction = decl.vec2("direction", (-1.0, 1.0))?;
        let v = direction.normalize();
        let v = v / v.manhattan();
        Ok(Self {
            smoothness,
            v,
            d: (v.x + v.y) / 2.0,
        })
    }
}

impl Transition for DirectionalWarp {
    fn evaluate(&self, f: &Fragment<'_>) -> Vec4 {
        let s = self.smoothness;
        let m = f.p.dot(self.v) - (self.d - 0.5 + f.progress * (1.0 + s));
        let m = 1.0 - smoothstep(-s, 0.0, m);
        let c = f.p - CENTER;
        let a = f.from(c * (1.0 - m) + CENTER);
        let b = f.to(c * m + CENTER);
        a.mix(b, m)
    }
}

#[derive(Debug)]
pub(crate) struct Dreamy;

impl Prime for Dreamy {
    fn prime(_: &mut Declarations<'_>) -> FxResult<Self> {
        Ok(Self)
    }
}

impl Transition for Dreamy {
    fn evaluate(&self, f: &Fragment<'_>) -> Vec4 {
        let shift = |t: f64| 0.03 * t * (10.0 * (t + f.p.x)).cos();
        let a = f.from(Vec2::new(f.p.x, f.p.y + shift(f.progress)));
        let b = f.to(Vec2::new(f.p.x, f.p.y + shift(1.0 - f.progress)));
        a.mix(b, f.progress)
    }
}

#[derive(Debug)]
pub(crate) struct Ripple {
    amplitude: f64,
    speed: f64,
}

impl Prime for Ripple {
    fn prime(decl: &mut Declarations<'_>) -> FxResult<Self> {
        Ok(Self {
            amplitude: decl.number("amplitude", 100.0)?,
            speed: decl.number("speed", 50.0)?,
        })
    }
}

impl Transition for Ripple {
    fn evaluate(&self, f: &Fragment<'_>) -> Vec4 {
        let dir = f.p - CENTER;
        let dist = dir.hypot();
        let s = ((f.progress * (dist * self.amplitude - self.speed)).sin() + 0.5) / 30.0;
        f.from(f.p + dir * s).mix(f.b, smoothstep(0.2, 1.0, f.progress))
    }
}

#[derive(Debug)]
pub(crate) struct WaterDrop {
    amplitude: f64,
    speed: f64,
}

impl Prime for WaterDrop {
    fn prime(decl: &mut Declarations<'_>) -> FxResult<Self> {
        Ok(Self {
            amplitude: decl.number("amplitude", 30.0)?,
            speed: decl.number("speed", 30.0)?,
        })
    }
}

impl Transition for WaterDrop {
    fn evaluate(&self, f: &Fragment<'_>) -> Vec4 {
        let dir = f.p - CENTER;
        let dist = dir.hypot();
        if dist > f.progress {
            return f.a.mix(f.b, f.progress);
        }
        let off = (dist * self.amplitude - f.progress * self.speed).sin();
        f.from(f.p + dir * off).mix(f.b, f.progress)
    }
}

#[derive(Debug)]
pub(crate) struct Swirl {
    radius: f64,
}

impl Prime for Swirl {
    fn prime(decl: &mut Declarations<'_>) -> FxResult<Self> {
        Ok(Self {
            radius: decl.number("radius", 1.0)?,
        })
    }
}

impl Transition for Swirl {
    fn evaluate(&self, f: &Fragment<'_>) -> Vec4 {
        let t = f.progress;
        let mut uv = f.p - CENTER;
        let dist = uv.hypot();
        if dist < self.radius {
            let percent = 1.0 - dist / self.radius;
            let a = (if t <= 0.5 { t } else { 1.0 - t }) * 2.0;
            uv = uv.rotate_cw(-(percent * percent * a * 8.0 * PI));
        }
        let uv = uv + CENTER;
        f.from(uv).mix(f.to(uv), t)
    }
}

#[derive(Debug)]
pub(crate) struct RotateTransition;

impl Prime for RotateTransition {
    fn prime(_: &mut Declarations<'_>) -> FxResult<Self> {
        Ok(Self)
    }
}

impl Transition for RotateTransition {
    fn evaluate(&self, f: &Fragment<'_>) -> Vec4 {
        let q = (f.p - CENTER).rotate_cw(f.progress * TAU) + CENTER;
        f.from(q).mix(f.to(q), f.progress)
    }
}

#[derive(Debug)]
pub(crate) struct RotateScaleFade {
    center: Vec2,
    rotations: f64,
    scale: f64,
    background: ColorArg,
}

impl Prime for RotateScaleFade {
    fn prime(decl: &mut Declarations<'_>) -> FxResult<Self> {
        Ok(Self {
            center: decl.vec2("center", (0.5, 0.5))?,
            rotations: decl.number("rotations", 1.0)?,
            scale: decl.number("scale", 8.0)?,
            background: decl.color("background", 0.15)?,
        })
    }
}

impl Transition for RotateScaleFade {
    fn evaluate(&self, f: &Fragment<'_>) -> Vec4 {
        let diff = f.p - self.center;
        let dist = diff.hypot();
        let dir = (diff / dist).rotate_cw(-TAU * self.rotations * f.progress);
        let scale = mix(self.scale, 1.0, (f.progress - 0.5).abs() * 2.0);
        let uv = self.center + dir * (dist / scale);
        if uv.in_unit_square() {
            f.from(uv).mix(f.to(uv), f.progress)
        } else {
            f.color(&self.background)
        }
    }
}

#[derive(Debug)]
pub(crate) struct RotateScaleVanish {
    fade_in_second: bool,
    reverse_effect: bool,
    reverse_rotation: bool,
    background: ColorArg,
    track_matte: bool,
}

impl Prime for RotateScaleVanish {
    fn prime(decl: &mut Declarations<'_>) -> FxResult<Self> {
        Ok(Self {
            fade_in_second: decl.flag("fadeInSecond", true)?,
            reverse_effect: decl.flag("reverseEffect", false)?,
            reverse_rotation: decl.flag("reverseRotation", false)?,
            background: decl.color("background", 0.0)?,
            track_matte: decl.flag("trkMat", false)?,
        })
    }
}

impl Transition for RotateScaleVanish {
    fn evaluate(&self, f: &Fragment<'_>) -> Vec4 {
        let mut t = if self.reverse_effect {
            1.0 - f.progress
        } else {
            f.progress
        };
        let theta = (if self.reverse_rotation { -t } else { t }) * TAU;
        let c2 = Vec2::new((f.p.x - 0.5) * f.ratio, f.p.y - 0.5).rotate_cw(theta);
        let rad = (1.0 - t).max(0.00001);
        let uv = Vec2::new((c2.x / rad + f.ratio / 2.0) / f.ratio, c2.y / rad + 0.5);
        let target = if self.reverse_effect { f.a } else { f.b };
        let col = if uv.in_unit_square() {
            if self.reverse_effect {
                f.to(uv)
            } else {
                f.from(uv)
            }
        } else if self.fade_in_second {
            f.color(&self.background)
        } else {
            target
        };
        if self.track_matte {
            t = 1.0 - col.alpha();
        }
        col.mix(target, t)
    }
}

#[derive(Debug)]
pub(crate) struct DirectionalScaled {
    direction: Vec2,
    scale: f64,
    background: ColorArg,
}

impl Prime for DirectionalScaled {
    fn prime(decl: &mut Declarations<'_>) -> FxResult<Self> {
        Ok(Self {
            direction: decl.vec2("direction", (0.0, 1.0))?,
            scale: decl.number("scale", 0.7)?,
            background: decl.color("background", 0.0)?,
        })
    }
}

impl Transition for DirectionalScaled {
    fn evaluate(&self, f: &Fragment<'_>) -> Vec4 {
        let eased = (f.progress * FRAC_PI_2).sin().powi(3);
        let dir = Vec2::new(sign(self.direction.x), sign(self.direction.y));
        let p = f.p + dir * eased;
        let s = 1.0 - (1.0 - 1.0 / self.scale) * (f.progress * PI).sin();
        let q = (p.fract_elem() - CENTER) * s + CENTER;
        if !q.in_unit_square() {
            f.color(&self.background)
        } else if p.in_unit_square() {
            f.from(q)
        } else {
            f.to(q)
        }
    }
}

#[derive(Debug)]
pub(crate) struct Kaleidoscope {
    speed: f64,
    angle: f64,
    power: f64,
}

impl Prime for Kaleidoscope {
    fn prime(decl: &mut Declarations<'_>) -> FxResult<Self> {
        Ok(Self {
            speed: decl.number("speed", 1.0)?,
            angle: decl.number("angle", 1.0)?,
            power: decl.number("power", 1.5)?,
        })
    }
}

impl Transition for Kaleidoscope {
    fn evaluate(&self, f: &Fragment<'_>) -> Vec4 {
        let mut t = f.progress.powf(self.power) * self.speed;
        let mut q = f.p - CENTER;
        for _ in 0..7 {
            q = (q.rotate_cw(FRAC_PI_2 - t).glmod_elem(2.0) - Vec2::splat(1.0)).abs_elem();
            t += self.angle;
        }
        let m = f.a.mix(f.b, f.progress);
        let n = f.from(q).mix(f.to(q), f.progress);
        m.mix(n, 1.0 - (f.progress - 0.5).abs() * 2.0)
    }
}

#[derive(Debug)]
pub(crate) struct Morph {
    strength: f64,
}

impl Prime for Morph {
    fn prime(decl: &mut Declarations<'_>) -> FxResult<Self> {
        Ok(Self {
            strength: decl.number("strength", 0.1)?,
        })
    }
}

impl Morph {
    /// Displacement vector read from a colour: `(r, g) + b - 1` in RGB, `(v, y) + u - 1` in YUV.
    fn offset(c: Vec4, rgb: bool) -> Vec2 {
        let [p0, p1, p2, _] = c.0;
        let (x, y, z) = if rgb { (p0, p1, p2) } else { (p2, p0, p1) };
        Vec2::new(x + z - 1.0, y + z - 1.0)
    }
}

impl Transition for Morph {
    fn evaluate(&self, f: &Fragment<'_>) -> Vec4 {
        let rgb = f.is_rgb();
        let oc = (Self::offset(f.a, rgb) + Self::offset(f.b, rgb)) * 0.5;
        let pf = f.p + oc * (self.strength * f.progress);
        let pt = f.p - oc * (self.strength * (1.0 - f.progress));
        f.from(pf).mix(f.to(pt), f.progress)
    }
}

#[derive(Debug)]
pub(crate) struct CrossZoom {
    strength: f64,
    center_from: Vec2,
    center_to: Vec2,
}

impl Prime for CrossZoom {
    fn prime(decl: &mut Declarations<'_>) -> FxResult<Self> {
        Ok(Self {
            strength: decl.number("strength", 0.4)?,
            center_from: decl.vec2("centerFrom", (0.25, 0.5))?,
            center_to: decl.vec2("centerTo", (0.75, 0.5))?,
        })
    }
}

impl Transition for CrossZoom {
    fn evaluate(&self, f: &Fragment<'_>) -> Vec4 {
        let center = self.center_from.lerp(self.center_to, f.progress);
        let dissolve = EaseFamily::Exponential.apply(EaseMode::InOut, f.progress);
        // rises to full strength at the midpoint, then falls back
        let strength =
            self.strength * EaseFamily::Sinusoidal.apply(EaseMode::InOut, f.progress * 2.0);
        let to_center = center - f.p;
        // jitter the lookups to hide the fixed sample count
        let offset = f.p.frand();
        let mut color = Vec4::ZERO;
        let mut total = 0.0;
        for t in 0..=40 {
            let percent = (f64::from(t) + offset) * 0.025;
            let weight = (percent - percent * percent) * 4.0;
            let q = f.p + to_center * (percent * strength);
            color = color + f.from(q).mix(f.to(q), dissolve) * weight;
            total += weight;
        }
        (color / total).with_alpha(mix(f.a.alpha(), f.b.alpha(), dissolve))
    }
}

#[derive(Debug)]
pub(crate) struct Hexagonalize {
    steps: i32,
    horizontal_hexagons: f64,
}

impl Prime for Hexagonalize {
    fn prime(decl: &mut Declarations<'_>) -> FxResult<Self> {
        Ok(Self {
            steps: decl.int("steps", 50)?,
            horizontal_hexagons: decl.number("horizontalHexagons", 20.0)?,
        })
    }
}

impl Transition for Hexagonalize {
    fn evaluate(&self, f: &Fragment<'_>) -> Vec4 {
        let mut dist = f.progress.min(1.0 - f.progress) * 2.0;
        if self.steps > 0 {
            let steps = f64::from(self.steps);
            dist = (dist * steps).ceil() / steps;
        }
        if dist <= 0.0 {
            return f.a.mix(f.b, f.progress);
        }
        let sqrt3 = 3f64.sqrt();
        let size = sqrt3 / 3.0 * dist / self.horizontal_hexagons;
        let point = Vec2::new((f.p.x - 0.5) / size, (f.p.y / f.ratio - 0.5) / size);
        // axial coordinates, rounded to the nearest cell
        let q = (sqrt3 * point.x - point.y) / 3.0;
        let r = 2.0 / 3.0 * point.y;
        let s = -q - r;
        let (mut rq, mut rr, rs) = ((q + 0.5).floor(), (r + 0.5).floor(), (s + 0.5).floor());
        let (dq, dr, ds) = ((rq - q).abs(), (rr - r).abs(), (rs - s).abs());
        if dq > dr && dq > ds {
            rq = -rr - rs;
        } else if dr > ds {
            rr = -rq - rs;
        }
        let center = Vec2::new(
            (sqrt3 * rq + sqrt3 / 2.0 * rr) * size + 0.5,
            (1.5 * rr * size + 0.5) * f.ratio,
        );
        f.from(center).mix(f.to(center), f.progress)
    }
}

#[derive(Debug)]
pub(crate) struct Mosaic {
    end: Vec2,
}

impl Prime for Mosaic {
    fn prime(decl: &mut Declarations<'_>) -> FxResult<Self> {
        let x = decl.int("endx", 2)?;
        let y = decl.int("endy", -1)?;
        Ok(Self {
            end: Vec2::new(f64::from(x), f64::from(y)),
        })
    }
}

impl Transition for Mosaic {
    fn evaluate(&self, f: &Fragment<'_>) -> Vec4 {
        let rpr = f.progress * 2.0 - 1.0;
        let az = (3.0 - rpr * rpr * 2.0).abs();
        let ci = 0.5 - (f.progress * PI).cos() / 2.0;
        let ci2 = ci * ci;
        let ps = Vec2::new(
            (f.p.x - 0.5) * az + mix(0.5, self.end.x + 0.5, ci2),
            (f.p.y - 0.5) * az + mix(0.5, self.end.y + 0.5, ci2),
        );
        let cell = ps.floor_elem();
        let mut local = ps - cell;
        let r = cell.frand();
        let on_end = cell == self.end;
        if !on_end {
            let ang = (r * 4.0).trunc() * FRAC_PI_2;
            local = (local - CENTER).rotate_cw(ang) + CENTER;
        }
        if on_end || r > 0.5 {
            f.to(local)
        } else {
            f.from(local)
        }
    }
}

#[derive(Debug)]
pub(crate) struct Rolls {
    kind: i32,
    rot_down: bool,
}

impl Prime for Rolls {
    fn prime(decl: &mut Declarations<'_>) -> FxResult<Self> {
        Ok(Self {
            kind: decl.int("type", 0)?,
            rot_down: decl.flag("RotDown", false)?,
        })
    }
}

impl Transition for Rolls {
    fn evaluate(&self, f: &Fragment<'_>) -> Vec4 {
        let flip_x = !matches!(self.kind, 1 | 2);
        let flip_y = self.kind >= 2;
        let mut theta = FRAC_PI_2 * f.progress;
        if flip_y == !self.rot_down {
            theta = -theta;
        }
        let mut uv = f.p;
        if flip_x {
            uv.x = 1.0 - uv.x;
        }
        if flip_y {
            uv.y = 1.0 - uv.y;
        }
        uv.x *= f.ratio;
        let mut uv = uv.rotate_cw(theta);
        uv.x /= f.ratio;
        if !uv.in_unit_square() {
            return f.b;
        }
        if flip_x {
            uv.x = 1.0 - uv.x;
        }
        if flip_y {
            uv.y = 1.0 - uv.y;
        }
        f.from(uv)
    }
}

#[derive(Debug)]
pub(crate) struct Slides {
    kind: i32,
    slide_in: bool,
}

impl Prime for Slides {
    fn prime(decl: &mut Declarations<'_>) -> FxResult<Self> {
        Ok(Self {
            kind: decl.int("type", 0)?,
            slide_in: decl.flag("slideIn", false)?,
        })
    }
}

impl Transition for Slides {
    fn evaluate(&self, f: &Fragment<'_>) -> Vec4 {
        let rad = if self.slide_in {
            f.progress
        } else {
            1.0 - f.progress
        };
        let rrad = 1.0 - rad;
        let half = rrad * 0.5;
        // top-left corner of the sliding frame, raster orientation
        let (xc, yc) = match self.kind {
            0 => (half, 0.0),
            1 => (rrad, half),
            2 => (half, rrad),
            3 => (0.0, half),
            4 => (rrad, 0.0),
            5 => (rrad, rrad),
            6 => (0.0, rrad),
            7 => (0.0, 0.0),
            _ => (half, half),
        };
        let uv = Vec2::new(f.p.x, 1.0 - f.p.y);
        if between(uv.x, xc, xc + rad) && between(uv.y, yc, yc + rad) {
            let q = Vec2::new((uv.x - xc) / rad, 1.0 - (uv.y - yc) / rad);
            return if self.slide_in { f.to(q) } else { f.from(q) };
        }
        if self.slide_in { f.a } else { f.b }
    }
}

#[derive(Debug)]
pub(crate) struct ButterflyWaveScrawler {
    amplitude: f64,
    waves: f64,
    color_separation: f64,
}

impl Prime for ButterflyWaveScrawler {
    fn prime(decl: &mut Declarations<'_>) -> FxResult<Self> {
        Ok(Self {
            amplitude: decl.number("amplitude", 1.0)?,
            waves: decl.number("waves", 30.0)?,
            color_separation: decl.number("colorSeparation", 0.3)?,
        })
    }
}

impl ButterflyWaveScrawler {
    /// Butterfly polar curve used as the displacement field.
    fn displacement(&self, p: Vec2, t: f64) -> f64 {
        let o = p * (t * self.amplitude).sin() - CENTER;
        let theta = o.x.clamp(-1.0, 1.0).acos() * self.waves;
        (theta.cos().exp() - (theta * 4.0).cos() * 2.0 + ((theta * 2.0 - PI) / 24.0).sin().powi(5))
            * 0.1
    }
}

impl Transition for ButterflyWaveScrawler {
    fn evaluate(&self, f: &Fragment<'_>) -> Vec4 {
        let t = f.progress;
        let disp = self.displacement(f.p, t);
        let dp = disp * t;
        let to = f.to(f.p.add_scalar(disp - dp));
        let mut from = f.from(f.p.add_scalar(dp));
        let wide = f.from(f.p.add_scalar(dp * (1.0 + self.color_separation)));
        let narrow = f.from(f.p.add_scalar(dp * (1.0 - self.color_separation)));
        // blue and red drift apart in RGB, the two chroma planes in YUV
        let (w, n) = if f.is_rgb() { (2, 0) } else { (1, 2) };
        from.0[w] = wide.0[w];
        from.0[n] = narrow.0[n];
        from.mix(to, t)
    }
}

#[derive(Debug)]
pub(crate) struct CrazyParametricFun {
    a: f64,
    b: f64,
    amplitude: f64,
    smoothness: f64,
}

impl Prime for CrazyParametricFun {
    fn prime(decl: &mut Declarations<'_>) -> FxResult<Self> {
        Ok(Self {
            a: decl.number("a", 4.0)?,
            b: decl.number("b", 1.0)?,
            amplitude: decl.number("amplitude", 120.0)?,
            smoothness: decl.number("smoothness", 0.1)?,
        })
    }
}

impl Transition for CrazyParametricFun {
    fn evaluate(&self, f: &Fragment<'_>) -> Vec4 {
        let t = f.progress;
        let (s, c) = t.sin_cos();
        let (s2, c2) = (t * (self.a / self.b - 1.0)).sin_cos();
        // epitrochoid point for this instant
        let q = Vec2::new(c, s) * (self.a - self.b) + Vec2::new(c2, -s2) * self.b;
        let o = f.p - CENTER;
        let q = q * (t * o.hypot() * self.amplitude);
        let q = Vec2::new(q.x.sin(), q.y.sin()) / self.smoothness;
        f.from(f.p + o.mul_elem(q)).mix(f.b, smoothstep(0.2, 1.0, f.progress))
    }
}

#[derive(Debug)]
pub(crate) struct EdgeTransition {
    thickness: f64,
    brightness: f64,
}

impl Prime for EdgeTransition {
    fn prime(decl: &mut Declarations<'_>) -> FxResult<Self> {
        Ok(Self {
            thickness: decl.number("edgeThickness", 0.001)?,
            brightness: decl.number("edgeBrightness", 8.0)?,
        })
    }
}

impl EdgeTransition {
    /// Centre sample and its Sobel edge strength, scaled by the brightness.
    fn edges(&self, p: Vec2, sample: impl Fn(Vec2) -> Vec4) -> (Vec4, f64) {
        // column-major 3x3 neighbourhood, c[4] at p
        let c: [Vec4; 9] = std::array::from_fn(|i| {
            let j = Vec2::new((i / 3) as f64 - 1.0, (i % 3) as f64 - 1.0);
            sample(p + j * self.thickness)
        });
        let abs = |v: Vec4| v.map3(f64::abs);
        let dx = abs((c[7] - c[1]) * 2.0) + abs(c[2] - c[6]) + abs(c[8] - c[0]);
        let dy = abs((c[3] - c[5]) * 2.0) + abs(c[6] - c[8]) + abs(c[0] - c[2]);
        let delta = ((dx + dy) * 0.125).length3();
        (c[4], clamp_unit(self.brightness * delta))
    }
}

impl Transition for EdgeTransition {
    fn evaluate(&self, f: &Fragment<'_>) -> Vec4 {
        let t = f.progress;
        let (ca, ka) = self.edges(f.p, |q| f.from(q));
        let (cb, kb) = self.edges(f.p, |q| f.to(q));
        let glow_a = f.shade(ca, ka).with_alpha(f.a.alpha());
        let glow_b = f.shade(cb, kb).with_alpha(f.b.alpha());
        let start = f.a.mix(glow_a, clamp_unit(t * 2.0));
        let end = glow_b.mix(f.b, clamp_unit(t * 2.0 - 1.0));
        start.mix(end, t)
    }
}

#[derive(Debug)]
pub(crate) struct ExponentialSwish {
    zoom: f64,
    offset: Vec2,
    exponent: i32,
    wrap: (i32, i32),
    blur: f64,
    background: ColorArg,
    frames: f64,
    deg: f64,
    ratio2: f64,
}

impl Prime for ExponentialSwish {
    fn prime(decl: &mut Declarations<'_>) -> FxResult<Self> {
        let zoom = decl.number("zoom", 0.8)?;
        let angle = decl.number("angle", 0.0)?;
        let offset = decl.vec2("offset", (0.0, 0.0))?;
        let exponent = decl.int("exponent", 4)?;
        let wrap = decl.ivec2("wrap", (2, 2))?;
        let blur = decl.number("blur", 0.0)?;
        let background = decl.color("background", 0.0)?;
        let ctx = *decl.context();
        Ok(Self {
            zoom,
            offset,
            exponent,
            wrap,
            blur,
            background,
            frames: decl.derived("frames", ctx.duration_secs * ctx.fps)?,
            deg: decl.derived("deg", angle.to_radians())?,
            ratio2: decl.derived("ratio2", (ctx.ratio - 1.0) / 2.0)?,
        })
    }
}

impl ExponentialSwish {
    const ITERS: i32 = 50;

    /// 0 leaves the coordinate alone, 1 repeats, 2 mirrors.
    fn fold(mode: i32, v: f64) -> f64 {
        match mode {
            2 => (PI * v).cos().acos() / PI,
            1 => fract(v),
            _ => v,
        }
    }

    /// Rotate about the centre in aspect-corrected space.
    fn turn(&self, q: Vec2, angle: f64, ratio: f64) -> Vec2 {
        let q = Vec2::new(q.x * ratio - self.ratio2, q.y);
        let q = (q - CENTER).rotate_cw(angle) + CENTER;
        Vec2::new((q.x + self.ratio2) / ratio, q.y)
    }

    /// One temporal sample: A zooms away before the midpoint, B zooms in after it.
    fn frame_at(&self, f: &Fragment<'_>, uv: Vec2, p: f64) -> Vec4 {
        let z = self.zoom;
        let pa0 = (p * 2.0).powi(self.exponent);
        let pa1 = ((1.0 - p) * 2.0).powi(self.exponent);
        let px0 = 1.0 - pa0 * z.abs();
        let px1 = 1.0 - pa1 * z.abs();
        let px2 = 1.0 - pa0 * (-z).max(0.0);
        let px3 = 1.0 - pa1 * z.max(0.0);
        let (uv0, uv1) = if z > 0.0 {
            (uv * px0, uv / px1)
        } else if z < 0.0 {
            (uv / px0, uv * px1)
        } else {
            (uv, uv)
        };
        let uv0 = self.turn(uv0 + CENTER - self.offset * (pa0 / px2), -self.deg * pa0, f.ratio);
        let uv1 = self.turn(uv1 + CENTER + self.offset * (pa1 / px3), self.deg * pa1, f.ratio);
        let first = p < 0.5;
        let q = if first { uv0 } else { uv1 };
        let q = Vec2::new(Self::fold(self.wrap.0, q.x), Self::fold(self.wrap.1, q.y));
        let outside = (self.wrap.0 == 0 && !between(q.x, 0.0, 1.0))
            || (self.wrap.1 == 0 && !between(q.y, 0.0, 1.0));
        if outside {
            f.color(&self.background)
        } else if first {
            f.from(q)
        } else {
            f.to(q)
        }
    }
}

impl Transition for ExponentialSwish {
    fn evaluate(&self, f: &Fragment<'_>) -> Vec4 {
        let uv = f.p - CENTER;
        if self.blur == 0.0 {
            return self.frame_at(f, uv, f.progress);
        }
        let iters = f64::from(Self::ITERS);
        let step = if self.frames > 0.0 {
            self.blur / self.frames / iters
        } else {
            0.0
        };
        let rgb = f.is_rgb();
        let mut comp = Vec4::ZERO;
        for i in 0..Self::ITERS {
            let c = self.frame_at(f, uv, clamp_unit(f.progress + f64::from(i) * step));
            comp.0[0] += c.0[0] / iters;
            // chroma is not averaged
            if rgb {
                comp.0[1] += c.0[1] / iters;
                comp.0[2] += c.0[2] / iters;
            } else {
                comp.0[1] = c.0[1];
                comp.0[2] = c.0[2];
            }
            comp.0[3] = c.0[3];
        }
        comp
    }
}

#[derive(Debug)]
pub(crate) struct LissajousTiles {
    grid: (i32, i32),
    speed: f64,
    offset: f64,
    fade: f64,
    background: ColorArg,
    tiles: i32,
    r: Vec2,
    freq: Vec2,
    z: f64,
}

impl Prime for LissajousTiles {
    fn prime(decl: &mut Declarations<'_>) -> FxResult<Self> {
        let grid = decl.ivec2("grid", (10, 10))?;
        let speed = decl.number("speed", 0.5)?;
        let freq = decl.vec2("freq", (2.0, 3.0))?;
        let offset = decl.number("offset", 2.0)?;
        let zoom = decl.number("zoom", 0.8)?;
        let fade = decl.number("fade", 3.0)?;
        let background = decl.color("background", 0.0)?;
        let (gx, gy) = grid;
        let tiles = if gx > 0 && gy > 0 { gx.saturating_mul(gy) } else { 0 };
        decl.derived("n", f64::from(tiles))?;
        let r = decl.derived_vec2("r", Vec2::new(1.0 / f64::from(gx), 1.0 / f64::from(gy)))?;
        let freq = decl.derived_vec2("f", freq * TAU)?;
        let z = decl.derived("z", zoom / 2.0)?;
        Ok(Self {
            grid,
            speed,
            offset,
            fade,
            background,
            tiles,
            r,
            freq,
            z,
        })
    }
}

impl Transition for LissajousTiles {
    fn evaluate(&self, f: &Fragment<'_>) -> Vec4 {
        let t = f.progress;
        let k = 1.0 - (1.0 - t * 2.0).abs().powi(3);
        let l = t * t * (self.fade + 1.0) * 2.0 - self.fade;
        let phase = t * self.speed * 6.0;
        let phase = Vec2::new(phase, (self.offset + 1.0) * phase);
        let mut c = f.color(&self.background);
        let gx = self.grid.0;
        for h in 0..self.tiles {
            let tile = Vec2::new(f64::from(h % gx), f64::from(h / gx)).mul_elem(self.r);
            let a = tile.x * self.r.y + tile.y;
            let w = self.freq * a + phase;
            let orbit = Vec2::new(w.x.cos(), w.y.sin());
            let q = f.p + tile + self.r * 0.5 + orbit * self.z - CENTER;
            let q = q * k + f.p * (1.0 - k);
            // later tiles draw over earlier ones
            if between(q.x, tile.x, tile.x + self.r.x) && between(q.y, tile.y, tile.y + self.r.y) {
                c = f.from(q).mix(f.to(q), clamp_unit(a * self.fade + l));
            }
        }
        c
    }
}

#[derive(Debug)]
pub(crate) struct PowerKaleido {
    z: f64,
    speed: f64,
    dist: f64,
    mirrors: Vec<Vec2>,
}

impl Prime for PowerKaleido {
    fn prime(decl: &mut Declarations<'_>) -> FxResult<Self> {
        let scale = decl.number("scale", 2.0)?;
        let z = decl.number("z", 1.5)?;
        let speed = decl.number("speed", 5.0)?;
        let rad = decl.derived("rad", 120f64.to_radians())?;
        let dist = decl.derived("dist", scale / 10.0)?;
        let mirrors = (0..)
            .map(|k: i32| f64::from(k) * rad)
            .take_while(|&i| i < TAU - 1e-9)
            .map(|i| Vec2::new(i.cos(), i.sin()))
            .collect();
        Ok(Self {
            z,
            speed,
            dist,
            mirrors,
        })
    }
}

impl Transition for PowerKaleido {
    fn evaluate(&self, f: &Fragment<'_>) -> Vec4 {
        let t = f.progress;
        let angle = t * self.speed;
        let d = self.dist;
        let mut uv = ((f.p - CENTER) * (f.ratio * self.z)).rotate_cw(angle);
        for _ in 0..10 {
            for &v in &self.mirrors {
                let upper = v.x > 0.0;
                let beyond = uv.y - v.x * d > v.y / v.x * (uv.x + v.y * d);
                if upper == beyond {
                    let q = Vec2::new(uv.x + v.y * d * 2.0, uv.y - v.x * d * 2.0);
                    uv = v * (q.dot(v) * 2.0) - q;
                }
            }
        }
        let mut uv = uv.rotate_cw(-angle);
        uv.x /= f.ratio;
        let uv = (uv + CENTER) / 2.0;
        let uv = (uv - (uv + CENTER).floor_elem()).abs_elem() * 2.0;
        let uv = uv.lerp(f.p, ((t * TAU).cos() + 1.0) * 0.5);
        let m = (((t - 1.0) * PI).cos() + 1.0) * 0.5;
        f.from(uv).mix(f.to(uv), m)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transitions/warp.rs"]
mod tests;
