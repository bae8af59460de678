//! BT.601 limited-range conversion between the native plane encoding and canonical RGB.

use crate::foundation::core::ColorModel;
use crate::foundation::math::Vec4;

// Normalized offsets of the limited-range planes.
const OFFSET_Y: f64 = 16.0 / 255.0;
const OFFSET_C: f64 = 128.0 / 255.0;

const RV: f64 = 255.0 / 224.0 * 1.402;
const BU: f64 = 255.0 / 224.0 * 1.772;
const GU: f64 = -0.114 / 0.587 * BU;
const GV: f64 = -0.299 / 0.587 * RV;
const Y_SCALE: f64 = 255.0 / 219.0;

/// Convert normalized `r, g, b, a` into `y, u, v, a`.
pub fn rgb_to_yuv(c: Vec4) -> Vec4 {
    let [r, g, b, a] = c.0;
    Vec4::new(
        (65.481 * r + 128.553 * g + 24.966 * b) / 255.0 + OFFSET_Y,
        (-37.797 * r - 74.203 * g + 112.0 * b) / 255.0 + OFFSET_C,
        (112.0 * r - 93.786 * g - 18.214 * b) / 255.0 + OFFSET_C,
        a,
    )
}

/// Convert normalized `y, u, v, a` into `r, g, b, a`.
pub fn yuv_to_rgb(c: Vec4) -> Vec4 {
    let [y, u, v, a] = c.0;
    let (y, u, v) = ((y - OFFSET_Y) * Y_SCALE, u - OFFSET_C, v - OFFSET_C);
    Vec4::new(y + v * RV, y + u * GU + v * GV, y + u * BU, a)
}

/// Native encoding to canonical RGB; identity for RGB frames.
pub fn to_canonical_rgb(c: Vec4, model: ColorModel) -> Vec4 {
    match model {
        ColorModel::Rgb => c,
        ColorModel::Yuv => yuv_to_rgb(c),
    }
}

/// Canonical RGB to the native encoding; identity for RGB frames.
pub fn from_canonical_rgb(c: Vec4, model: ColorModel) -> Vec4 {
    match model {
        ColorModel::Rgb => c,
        ColorModel::Yuv => rgb_to_yuv(c),
    }
}

/// Neutral chroma grey of intensity `v` in the given model.
pub fn grey(v: f64, alpha: f64, model: ColorModel) -> Vec4 {
    match model {
        ColorModel::Rgb => Vec4::new(v, v, v, alpha),
        ColorModel::Yuv => Vec4::new(v, 0.5, 0.5, alpha),
    }
}

/// Scale the visible intensity: all colour planes for RGB, luma only for YUV.
pub fn shade(c: Vec4, factor: f64, model: ColorModel) -> Vec4 {
    match model {
        ColorModel::Rgb => c.map3(|v| v * factor),
        ColorModel::Yuv => Vec4::new(c.0[0] * factor, c.0[1], c.0[2], c.0[3]),
    }
}

/// Add `delta` to the visible intensity: all colour planes for RGB, luma only for YUV.
pub fn brighten(c: Vec4, delta: f64, model: ColorModel) -> Vec4 {
    match model {
        ColorModel::Rgb => c.map3(|v| v + delta),
        ColorModel::Yuv => Vec4::new(c.0[0] + delta, c.0[1], c.0[2], c.0[3]),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/convert.rs"]
mod tests;
