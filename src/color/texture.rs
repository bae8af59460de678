//! Procedural background textures selectable through negative colour arguments.
//!
//! Every texture returns an opaque canonical RGB colour clamped to the unit cube.

use std::f64::consts::TAU;

use crate::foundation::math::{Vec2, Vec2Ext, Vec4, fract, glmod};

/// Built-in textures, keyed by their even negative selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Texture {
    /// `-2`: pulsing radial falloff.
    #[default]
    NaturalVignetting,
    /// `-4`: domain-warped marbling on black.
    GlowingMarbling,
    /// `-6`: black and white log spiral.
    MonochromeHyperbola,
    /// `-8`: stepped skyline silhouettes.
    Skyline,
    /// `-10`: horizontally scrolling rainbow.
    Rainbow,
    /// `-12`: sine plasma.
    Plasma,
    /// `-14`: interference diamonds.
    DiamondPattern,
    /// `-16`: rotating glow.
    GlowingThing,
    /// `-18`: spiral tunnel.
    CineTunnel,
    /// `-20`: Kali-set fractal.
    SpringTime,
    /// `-22`: layered sine skyline.
    Skyline4,
    /// `-24`: caustic ripples.
    WaterRipple,
}

impl Texture {
    /// Texture for an even selector `<= -2`; unknown selectors give the vignette.
    pub fn from_selector(selector: i64) -> Self {
        match selector {
            -4 => Self::GlowingMarbling,
            -6 => Self::MonochromeHyperbola,
            -8 => Self::Skyline,
            -10 => Self::Rainbow,
            -12 => Self::Plasma,
            -14 => Self::DiamondPattern,
            -16 => Self::GlowingThing,
            -18 => Self::CineTunnel,
            -20 => Self::SpringTime,
            -22 => Self::Skyline4,
            -24 => Self::WaterRipple,
            _ => Self::NaturalVignetting,
        }
    }

    /// Opaque RGB colour at `p` for transition `progress` on a frame of aspect `ratio`.
    pub fn sample(self, p: Vec2, progress: f64, ratio: f64) -> Vec4 {
        let c = match self {
            Self::NaturalVignetting => natural_vignetting(p, progress, ratio),
            Self::GlowingMarbling => glowing_marbling(p, progress),
            Self::MonochromeHyperbola => monochrome_hyperbola(p, progress),
            Self::Skyline => skyline(p, progress),
            Self::Rainbow => rainbow(p, progress),
            Self::Plasma => plasma(p, progress),
            Self::DiamondPattern => diamond_pattern(p, progress),
            Self::GlowingThing => glowing_thing(p, progress),
            Self::CineTunnel => cine_tunnel(p, progress),
            Self::SpringTime => spring_time(p, progress),
            Self::Skyline4 => skyline4(p, progress),
            Self::WaterRipple => water_ripple(p, progress),
        };
        c.with_alpha(1.0).clamp_unit()
    }
}

fn rgb(r: f64, g: f64, b: f64) -> Vec4 {
    Vec4::new(r, g, b, 1.0)
}

fn grey(v: f64) -> Vec4 {
    rgb(v, v, v)
}

fn natural_vignetting(p: Vec2, progress: f64, ratio: f64) -> Vec4 {
    let t = (progress * TAU).cos() / 2.0 + 1.0;
    let v = (p - Vec2::splat(0.5)) * (ratio * 2.0);
    let r = v.dot(v) * t * t + 1.0;
    grey(1.0 / (r * r))
}

fn glowing_marbling(p: Vec2, progress: f64) -> Vec4 {
    let mut p = p;
    let a = progress * 2.0 + 10.0;
    for i in 1..10 {
        let i = f64::from(i);
        p.x += 0.6 / i * (i * 2.5 * p.y + a).cos();
        p.y += 0.6 / i * (i * 1.5 * p.x + a).cos();
    }
    grey(0.1 / (a - p.y - p.x).sin().abs())
}

fn monochrome_hyperbola(p: Vec2, progress: f64) -> Vec4 {
    let p = p * 2.0 - Vec2::splat(1.0);
    let m = fract(p.atan2() + progress - 250.0 * p.hypot().ln());
    grey(if m > 0.5 { 1.0 } else { 0.0 })
}

fn skyline(p: Vec2, progress: f64) -> Vec4 {
    let t = progress * 5.0;
    let mut c = grey(0.0);
    for i in 1..20 {
        let i = f64::from(i);
        if p.y < (200.0 * p.x / i + i * i + t).ceil().sin() - i * 0.04 {
            c = grey(i * 0.05);
        }
    }
    c
}

fn rainbow(p: Vec2, progress: f64) -> Vec4 {
    let x = glmod(p.x + progress, 1.0);
    let wave = |o: f64| ((x + o) * TAU).sin() * 0.5 + 0.5;
    rgb(wave(0.0), wave(2.0 / 3.0), wave(1.0 / 3.0))
}

fn plasma(p: Vec2, progress: f64) -> Vec4 {
    let t = progress;
    let p = p * 2.0 - Vec2::splat(1.0);
    let mov0 = p.x + p.y + ((t.sin()) * 2.0).cos() * 100.0 + (p.x * 0.01).sin() * 1000.0;
    let mov1 = p.y / 0.9 + t;
    let mov2 = p.x / 0.2;
    let r = ((mov1 + t).sin() / 2.0 + mov2 / 2.0 - mov1 - mov2 + t).abs();
    let g = (r
        + (mov0 / 1440.0 + t).sin()
        + (p.y * 0.025 + t).sin()
        + ((p.x + p.y) * 0.01).sin() * 3.0)
        .sin()
        .abs();
    let b = (g + (mov1 + mov2 + g).cos() + mov2.cos() + (p.x * 0.001).sin())
        .sin()
        .abs();
    rgb(r, g, b)
}

fn diamond_pattern(p: Vec2, progress: f64) -> Vec4 {
    let p = (p - Vec2::splat(0.5)).abs_elem() * 800.0 + Vec2::splat(50.0);
    let q = p + p;
    let s = progress * 400.0;
    let band = |t: f64| (t / 2.0 - s % t).abs();
    rgb(band(p.x + p.y), band(q.x - p.y), band(q.y - p.x)).normalize3()
}

fn glowing_thing(p: Vec2, progress: f64) -> Vec4 {
    let (dx, dy) = (0.5 - p.x, 0.5 - p.y);
    let t = progress * 5.0;
    let z = dy.atan2(dx) * 3.0;
    let v = (z + (t * 0.1).sin()).cos() + 0.5 + (p.x * 10.0 + t * 1.3).sin() * 0.4;
    let r = 1.2 + (z - t * 0.2).cos() + (p.y * 10.0 + t * 1.5).sin() * 0.5;
    let g = (v * 4.0).sin() * 0.25 + r * 0.5;
    let b = (v * 2.0).sin() * 0.3 + r * 0.5;
    rgb(r, g, b)
}

fn cine_tunnel(p: Vec2, progress: f64) -> Vec4 {
    let v = p - Vec2::splat(0.5);
    let d = v.hypot();
    let a = -v.atan2() * 6.0;
    let s = progress * 6.0;
    let arm = |o: f64| ((a + o + 4.0 / d + s).sin() * 0.5 + 0.5) * d * 2.0;
    let (r, g, b) = (arm(TAU * 2.0 / 3.0), arm(TAU / 3.0), arm(0.0));
    let w = ((a * 4.0 + TAU / 3.0 + 3.0 / d + s).sin() * 0.5 + 0.5) * (a * 7.0).sin();
    let w = if w > 0.6 { 3.0 } else { 0.0 } * d;
    rgb(w + r, w + g, w + b)
}

fn spring_time(p: Vec2, progress: f64) -> Vec4 {
    let t = progress * 0.75;
    let mut c = p * (0.2 + 0.05 * (t * 1.1).sin())
        + Vec2::new(2.2 + t.sin(), 0.4 * (1.0 + (t * 0.9).cos())) * 0.2;
    for _ in 0..11 {
        c = c.abs_elem() / c.dot(c) - Vec2::splat(0.81 - 0.1 * c.y);
    }
    rgb(c.x * c.x, c.y * c.y, c.y - c.x)
}

fn skyline4(p: Vec2, progress: f64) -> Vec4 {
    let x200 = p.x * 200.0;
    let p5 = progress * 5.0;
    let mut c = grey(0.0);
    for b in 1..22 {
        let b = f64::from(b);
        let (g, d) = (b * 0.03, b * b * 0.0001);
        let s = |k: f64| d * (k * x200 / b + 9.0 * b + p5 / k).sin();
        if p.y < 0.7 - g + s(1.0) * 2.0 + s(2.0) + s(5.0) / 2.0 {
            c = rgb(0.0, g, 1.0);
        } else {
            c = c.map3(|v| v + 0.05);
        }
    }
    c
}

fn water_ripple(p: Vec2, progress: f64) -> Vec4 {
    let t = progress * 2.0;
    let s = t.sin();
    let m = [
        Vec4::new(-2.0, -1.0, 2.0, 0.0),
        Vec4::new(3.0, -2.0, 1.0, 0.0),
        Vec4::new(1.0, 2.0, 2.0, 0.0),
    ];
    let mut c = Vec4::new(p.x * 7.0 + s, p.y * 7.0 + s, t, 0.0);
    let mut a: f64 = 1.0;
    for _ in 0..3 {
        c = Vec4::new(c.dot3(m[0]), c.dot3(m[1]), c.dot3(m[2]), 0.0) * 0.3;
        a = a.min(c.map3(|v| fract(v) - 0.5).length3());
    }
    let k = a.powi(7) * 25.0;
    rgb(k, 0.35 + k, 0.5 + k)
}

#[cfg(test)]
#[path = "../../tests/unit/color/texture.rs"]
mod tests;
