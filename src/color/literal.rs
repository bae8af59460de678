//! Colour literals and the numeric colour-argument convention.
//!
//! A colour argument travels as a single `f64`:
//!
//! - `> 1`: packed `0xRRGGBBAA` (literals add `2^32` so the magnitude is always above 1)
//! - `0..=1`: opaque grey
//! - `(-2, 0]` including `-0.0`: transparent grey of intensity `-value`
//! - `<= -2`: procedural background texture selector

use crate::color::convert::{from_canonical_rgb, grey};
use crate::color::texture::Texture;
use crate::foundation::core::ColorModel;
use crate::foundation::error::{FxError, FxResult};
use crate::foundation::math::{Vec2, Vec4, clamp_unit};

/// Marker bit that keeps every encoded literal above 1.
pub const COLOR_FLAG: u64 = 1 << 32;

const NAMED: &[(&str, u32)] = &[
    ("black", 0x000000),
    ("white", 0xFFFFFF),
    ("red", 0xFF0000),
    ("green", 0x008000),
    ("lime", 0x00FF00),
    ("blue", 0x0000FF),
    ("yellow", 0xFFFF00),
    ("cyan", 0x00FFFF),
    ("aqua", 0x00FFFF),
    ("magenta", 0xFF00FF),
    ("fuchsia", 0xFF00FF),
    ("gray", 0x808080),
    ("grey", 0x808080),
    ("silver", 0xC0C0C0),
    ("maroon", 0x800000),
    ("olive", 0x808000),
    ("navy", 0x000080),
    ("purple", 0x800080),
    ("teal", 0x008080),
    ("orange", 0xFFA500),
    ("gold", 0xFFD700),
    ("pink", 0xFFC0CB),
    ("hotpink", 0xFF69B4),
    ("brown", 0xA52A2A),
    ("chocolate", 0xD2691E),
    ("coral", 0xFF7F50),
    ("crimson", 0xDC143C),
    ("indigo", 0x4B0082),
    ("violet", 0xEE82EE),
    ("skyblue", 0x87CEEB),
    ("steelblue", 0x4682B4),
    ("darkgray", 0xA9A9A9),
    ("lightgray", 0xD3D3D3),
    ("tomato", 0xFF6347),
    ("turquoise", 0x40E0D0),
    ("beige", 0xF5F5DC),
];

/// Parse `#RRGGBB[AA]`, `0xRRGGBB[AA]` or a named colour, each with an optional `@alpha`
/// suffix, into packed `0xRRGGBBAA`.
pub fn parse_color(s: &str) -> FxResult<u32> {
    let s = s.trim();
    let (body, alpha) = match s.split_once('@') {
        Some((body, alpha)) => (body.trim(), Some(parse_alpha(alpha.trim())?)),
        None => (s, None),
    };

    let hex = body
        .strip_prefix('#')
        .or_else(|| body.strip_prefix("0x"))
        .or_else(|| body.strip_prefix("0X"));
    let rgba = match hex {
        Some(hex) => parse_hex(hex)?,
        None => {
            let key = body.to_ascii_lowercase();
            let rgb = NAMED
                .iter()
                .find(|(name, _)| *name == key)
                .map(|&(_, rgb)| rgb)
                .ok_or_else(|| FxError::config(format!("unknown colour '{body}'")))?;
            rgb << 8 | 0xFF
        }
    };

    Ok(match alpha {
        Some(a) => (rgba & 0xFFFF_FF00) | u32::from(a),
        None => rgba,
    })
}

fn parse_hex(hex: &str) -> FxResult<u32> {
    let bad = || FxError::config(format!("invalid hex colour '{hex}', expected RRGGBB or RRGGBBAA"));
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(bad());
    }
    let v = u32::from_str_radix(hex, 16).map_err(|_| bad())?;
    match hex.len() {
        6 => Ok(v << 8 | 0xFF),
        8 => Ok(v),
        _ => Err(bad()),
    }
}

fn parse_alpha(s: &str) -> FxResult<u8> {
    let bad = || FxError::config(format!("invalid colour alpha '{s}'"));
    if let Some(hex) = s.strip_prefix("0x") {
        return u8::from_str_radix(hex, 16).map_err(|_| bad());
    }
    let a: f64 = s.parse().map_err(|_| bad())?;
    if !(0.0..=1.0).contains(&a) {
        return Err(bad());
    }
    Ok((a * 255.0).round() as u8)
}

/// Packed RGBA as a flagged colour-argument value.
pub fn encode_rgba(rgba: u32) -> f64 {
    (u64::from(rgba) | COLOR_FLAG) as f64
}

/// `true` when a literal token should be read as a colour rather than a number.
pub fn looks_like_color(token: &str) -> bool {
    token.starts_with('#')
        || token.starts_with("0x")
        || token.starts_with(|c: char| c.is_ascii_alphabetic())
        || token.contains('@')
}

/// A colour argument decoded from its numeric form at priming time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ColorArg {
    /// A fixed colour already in the frame's native encoding.
    Solid(Vec4),
    /// A procedural texture evaluated per pixel.
    Texture {
        /// Which texture to draw.
        texture: Texture,
        /// `false` renders the texture frozen at progress 0.5.
        animated: bool,
    },
}

impl ColorArg {
    /// Decode the numeric convention for frames encoded in `model`.
    pub fn decode(value: f64, model: ColorModel) -> Self {
        if value > 1.0 {
            // truncation drops the flag bit
            let rgba = value as u64 as u32;
            let [r, g, b, a] = rgba.to_be_bytes().map(|v| f64::from(v) / 255.0);
            Self::Solid(from_canonical_rgb(Vec4::new(r, g, b, a), model))
        } else if value <= -2.0 {
            let selector = value as i64;
            let (selector, animated) = if selector % 2 != 0 {
                (selector + 1, false)
            } else {
                (selector, true)
            };
            Self::Texture {
                texture: Texture::from_selector(selector),
                animated,
            }
        } else if value.is_sign_negative() {
            Self::Solid(grey(clamp_unit(-value), 0.0, model))
        } else {
            Self::Solid(grey(value, 1.0, model))
        }
    }

    /// Colour at normalized point `p`, transition `progress` and frame aspect `ratio`.
    pub fn resolve(&self, p: Vec2, progress: f64, ratio: f64, model: ColorModel) -> Vec4 {
        match *self {
            Self::Solid(c) => c,
            Self::Texture { texture, animated } => {
                let t = if animated { progress } else { 0.5 };
                from_canonical_rgb(texture.sample(p, t, ratio), model)
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/literal.rs"]
mod tests;
