//! Frame format, colour model and frame-rate types.

use crate::foundation::error::{FxError, FxResult};

/// Native encoding of the colour planes of a frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorModel {
    /// Planes are `r, g, b[, a]`.
    #[default]
    Rgb,
    /// Planes are BT.601 limited-range `y, u, v[, a]` (or luma only).
    Yuv,
}

impl ColorModel {
    /// `true` for [`ColorModel::Rgb`].
    pub fn is_rgb(self) -> bool {
        matches!(self, Self::Rgb)
    }
}

/// Frame rate as a rational number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator.
    pub num: u32,
    /// Denominator, must be > 0.
    pub den: u32,
}

impl Fps {
    /// Validated constructor.
    pub fn new(num: u32, den: u32) -> FxResult<Self> {
        if den == 0 {
            return Err(FxError::config("fps den must be > 0"));
        }
        if num == 0 {
            return Err(FxError::config("fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Frames per second.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Seconds covered by one frame.
    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }
}

impl Default for Fps {
    fn default() -> Self {
        Self { num: 25, den: 1 }
    }
}

/// Geometry and sample encoding shared by both input frames and the output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameFormat {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Number of stored planes: 1 (luma), 3 (colour) or 4 (colour + alpha).
    pub planes: u8,
    /// Bits per sample, 8..=16.
    pub bit_depth: u8,
    /// Colour encoding of the planes.
    pub model: ColorModel,
}

impl FrameFormat {
    /// 8-bit RGBA frame of the given size.
    pub fn rgba8(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            planes: 4,
            bit_depth: 8,
            model: ColorModel::Rgb,
        }
    }

    /// Check the invariants every frame buffer relies on.
    pub fn validate(&self) -> FxResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(FxError::config(format!(
                "frame size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if !matches!(self.planes, 1 | 3 | 4) {
            return Err(FxError::config(format!(
                "plane count must be 1, 3 or 4, got {}",
                self.planes
            )));
        }
        if !(8..=16).contains(&self.bit_depth) {
            return Err(FxError::config(format!(
                "bit depth must be in 8..=16, got {}",
                self.bit_depth
            )));
        }
        if self.planes == 1 && self.model.is_rgb() {
            return Err(FxError::config("single-plane frames must use the yuv model"));
        }
        Ok(())
    }

    /// Width over height.
    pub fn ratio(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }

    /// Largest sample value for the bit depth.
    pub fn max_value(&self) -> u16 {
        ((1u32 << self.bit_depth) - 1) as u16
    }

    /// Largest column index, never below 1 so normalized coordinates stay finite.
    pub fn max_x(&self) -> f64 {
        f64::from(self.width.saturating_sub(1).max(1))
    }

    /// Largest row index, never below 1.
    pub fn max_y(&self) -> f64 {
        f64::from(self.height.saturating_sub(1).max(1))
    }

    /// Samples per frame across all planes.
    pub fn sample_count(&self) -> usize {
        self.width as usize * self.height as usize * usize::from(self.planes)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
