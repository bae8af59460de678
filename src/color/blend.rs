//! Separable and non-separable blend modes plus alpha compositing.
//!
//! All math runs in canonical RGB; [`blend`] converts in and out of the frame's native model.

use crate::color::convert::{from_canonical_rgb, to_canonical_rgb};
use crate::foundation::core::ColorModel;
use crate::foundation::error::{FxError, FxResult};
use crate::foundation::math::{Vec4, clamp_unit};

/// The sixteen standard blend modes, in their conventional numeric order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlendMode {
    /// Foreground replaces background.
    #[default]
    Normal,
    /// `b * f`.
    Multiply,
    /// `b + f - b * f`.
    Screen,
    /// Hard light with the operands swapped.
    Overlay,
    /// `min(b, f)`.
    Darken,
    /// `max(b, f)`.
    Lighten,
    /// Brightens the background toward the foreground.
    ColorDodge,
    /// Darkens the background toward the foreground.
    ColorBurn,
    /// Multiply or screen depending on the foreground.
    HardLight,
    /// Soft version of hard light.
    SoftLight,
    /// `|b - f|`.
    Difference,
    /// `b + f - 2 * b * f`.
    Exclusion,
    /// Foreground hue with background saturation and luminosity.
    Hue,
    /// Foreground saturation with background hue and luminosity.
    Saturation,
    /// Foreground hue and saturation with background luminosity.
    Color,
    /// Foreground luminosity with background hue and saturation.
    Luminosity,
}

impl BlendMode {
    /// All modes in numeric order.
    pub const ALL: [BlendMode; 16] = [
        Self::Normal,
        Self::Multiply,
        Self::Screen,
        Self::Overlay,
        Self::Darken,
        Self::Lighten,
        Self::ColorDodge,
        Self::ColorBurn,
        Self::HardLight,
        Self::SoftLight,
        Self::Difference,
        Self::Exclusion,
        Self::Hue,
        Self::Saturation,
        Self::Color,
        Self::Luminosity,
    ];

    /// Mode for a numeric argument; out-of-range values fall back to [`BlendMode::Normal`].
    pub fn from_index(i: i64) -> Self {
        usize::try_from(i)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .unwrap_or_default()
    }

    /// Parse a mode name (`"color_dodge"`, `"colordodge"` and `"color-dodge"` are equivalent).
    pub fn parse(name: &str) -> FxResult<Self> {
        let key: String = name
            .trim()
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        Ok(match key.as_str() {
            "normal" => Self::Normal,
            "multiply" => Self::Multiply,
            "screen" => Self::Screen,
            "overlay" => Self::Overlay,
            "darken" => Self::Darken,
            "lighten" => Self::Lighten,
            "colordodge" => Self::ColorDodge,
            "colorburn" => Self::ColorBurn,
            "hardlight" => Self::HardLight,
            "softlight" => Self::SoftLight,
            "difference" => Self::Difference,
            "exclusion" => Self::Exclusion,
            "hue" => Self::Hue,
            "saturation" => Self::Saturation,
            "color" => Self::Color,
            "luminosity" => Self::Luminosity,
            _ => return Err(FxError::config(format!("unknown blend mode '{name}'"))),
        })
    }

    /// Blend two canonical RGB colours without compositing. Alpha of the result is unspecified.
    pub fn apply(self, b: Vec4, f: Vec4) -> Vec4 {
        let sep = |op: fn(f64, f64) -> f64| b.zip(f, op);
        match self {
            Self::Normal => f,
            Self::Multiply => sep(multiply),
            Self::Screen => sep(screen),
            Self::Overlay => sep(|b, f| hard_light(f, b)),
            Self::Darken => sep(f64::min),
            Self::Lighten => sep(f64::max),
            Self::ColorDodge => sep(color_dodge),
            Self::ColorBurn => sep(color_burn),
            Self::HardLight => sep(hard_light),
            Self::SoftLight => sep(soft_light),
            Self::Difference => sep(|b, f| (b - f).abs()),
            Self::Exclusion => sep(|b, f| b + f - 2.0 * b * f),
            Self::Hue => set_lum(set_sat(f, sat(b)), lum(b)),
            Self::Saturation => set_lum(set_sat(b, sat(f)), lum(b)),
            Self::Color => set_lum(f, lum(b)),
            Self::Luminosity => set_lum(b, lum(f)),
        }
    }
}

fn multiply(b: f64, f: f64) -> f64 {
    b * f
}

fn screen(b: f64, f: f64) -> f64 {
    b + f - b * f
}

fn color_dodge(b: f64, f: f64) -> f64 {
    if b <= 0.0 {
        0.0
    } else if f >= 1.0 {
        1.0
    } else {
        (b / (1.0 - f)).min(1.0)
    }
}

fn color_burn(b: f64, f: f64) -> f64 {
    if b >= 1.0 {
        1.0
    } else if f <= 0.0 {
        0.0
    } else {
        1.0 - ((1.0 - b) / f).min(1.0)
    }
}

fn hard_light(b: f64, f: f64) -> f64 {
    if f <= 0.5 {
        multiply(b, 2.0 * f)
    } else {
        screen(b, 2.0 * f - 1.0)
    }
}

fn soft_light(b: f64, f: f64) -> f64 {
    let low = f <= 0.5;
    let m = if low { b } else { 1.0 };
    let d = if low {
        1.0
    } else if b <= 0.25 {
        ((16.0 * b - 12.0) * b + 4.0) * b
    } else {
        b.sqrt()
    };
    b + (2.0 * f - 1.0) * m * (d - b)
}

/// Rec. 601 luminance of an RGB colour.
pub fn lum(c: Vec4) -> f64 {
    c.dot3(Vec4::new(0.299, 0.587, 0.114, 0.0))
}

/// Saturation as the spread between the largest and smallest channel.
pub fn sat(c: Vec4) -> f64 {
    c.max3() - c.min3()
}

/// Shift `c` to luminance `l`, scaling around `l` to pull out-of-range channels back into `[0, 1]`.
pub fn set_lum(c: Vec4, l: f64) -> Vec4 {
    let d = l - lum(c);
    let mut c = c.map3(|v| v + d);
    let l = lum(c);
    let (n, x) = (c.min3(), c.max3());
    if n < 0.0 {
        let s = l / (l - n);
        c = c.map3(|v| (v - l) * s + l);
    }
    if x > 1.0 {
        let s = (1.0 - l) / (x - l);
        c = c.map3(|v| (v - l) * s + l);
    }
    c
}

/// Rescale the channels of `c` so that `max - min == s`, keeping their order.
pub fn set_sat(c: Vec4, s: f64) -> Vec4 {
    let mut p = c.0;
    let mut idx = [0usize, 1, 2];
    idx.sort_by(|&i, &j| p[i].total_cmp(&p[j]));
    let [lo, mid, hi] = idx;
    if p[hi] > p[lo] {
        p[mid] = (p[mid] - p[lo]) * s / (p[hi] - p[lo]);
        p[hi] = s;
    } else {
        p[mid] = 0.0;
        p[hi] = 0.0;
    }
    p[lo] = 0.0;
    Vec4(p)
}

/// Composite `blended` over background `b` with foreground `f` alpha.
///
/// Resulting alpha is `fa + ba - fa * ba`; colour moves from `b` toward the blended colour by
/// the foreground's share of that alpha.
pub fn composite(b: Vec4, f: Vec4, blended: Vec4) -> Vec4 {
    let (fa, ba) = (f.alpha(), b.alpha());
    let a = fa + ba - fa * ba;
    if a <= 0.0 {
        return b.with_alpha(0.0);
    }
    let r = fa / a;
    let ch = |i: usize| ((blended.0[i] - f.0[i]) * ba + (f.0[i] - b.0[i])) * r + b.0[i];
    Vec4::new(ch(0), ch(1), ch(2), a)
}

/// Blend foreground `f` over background `b` in the frame's native encoding.
pub fn blend(b: Vec4, f: Vec4, mode: BlendMode, model: ColorModel) -> Vec4 {
    let b = to_canonical_rgb(b, model).map3(clamp_unit);
    let f = to_canonical_rgb(f, model).map3(clamp_unit);
    let c = composite(b, f, mode.apply(b, f)).clamp_unit();
    from_canonical_rgb(c, model)
}

#[cfg(test)]
#[path = "../../tests/unit/color/blend.rs"]
mod tests;
