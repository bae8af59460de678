//! Packed sample buffers and the nearest-neighbour [`PixelSource`] over a pair of them.

use crate::color::convert::{from_canonical_rgb, to_canonical_rgb};
use crate::foundation::core::{ColorModel, FrameFormat};
use crate::foundation::error::{FxError, FxResult};
use crate::foundation::math::{Vec2, Vec4};
use crate::transitions::fragment::{PixelSource, Which};

/// Plane values used when a frame stores fewer than four planes.
const DEFAULT_PLANES: [f64; 4] = [0.0, 0.5, 0.5, 1.0];

/// Scale a normalized value to an integer sample, rounding half up and clipping to `max`.
pub(crate) fn quantize(v: f64, max: u16) -> u16 {
    let max_f = f64::from(max);
    let s = v * max_f + 0.5;
    if s.is_nan() {
        0
    } else {
        s.clamp(0.0, max_f) as u16
    }
}

/// Index of the pixel nearest to normalized coordinate `v` along an axis of `len` pixels.
fn nearest(v: f64, max: f64, len: u32) -> u32 {
    let i = v * max + 0.5;
    if i.is_nan() {
        return 0;
    }
    (i.clamp(0.0, max) as u32).min(len - 1)
}

/// One image: interleaved `u16` samples, rows top to bottom.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlaneFrame {
    format: FrameFormat,
    samples: Vec<u16>,
}

impl PlaneFrame {
    /// All-zero frame.
    pub fn new(format: FrameFormat) -> FxResult<Self> {
        format.validate()?;
        Ok(Self {
            format,
            samples: vec![0; format.sample_count()],
        })
    }

    /// Wrap existing samples; the length must match the format.
    pub fn from_samples(format: FrameFormat, samples: Vec<u16>) -> FxResult<Self> {
        format.validate()?;
        if samples.len() != format.sample_count() {
            return Err(FxError::evaluation(format!(
                "frame {}x{} with {} planes needs {} samples, got {}",
                format.width,
                format.height,
                format.planes,
                format.sample_count(),
                samples.len()
            )));
        }
        let max = format.max_value();
        if let Some(s) = samples.iter().find(|&&s| s > max) {
            return Err(FxError::evaluation(format!(
                "sample {s} exceeds {max} for bit depth {}",
                format.bit_depth
            )));
        }
        Ok(Self { format, samples })
    }

    /// Geometry and encoding.
    pub fn format(&self) -> &FrameFormat {
        &self.format
    }

    /// Raw interleaved samples.
    pub fn samples(&self) -> &[u16] {
        &self.samples
    }

    /// Normalized plane values at column `x`, row `y` (0 is the top row).
    ///
    /// Missing planes read as `0, 0.5, 0.5, 1` for their position.
    pub fn pixel(&self, x: u32, y: u32) -> Vec4 {
        let planes = usize::from(self.format.planes);
        let start = (y as usize * self.format.width as usize + x as usize) * planes;
        let max = f64::from(self.format.max_value());
        let mut out = DEFAULT_PLANES;
        for (o, s) in out.iter_mut().zip(&self.samples[start..start + planes]) {
            *o = f64::from(*s) / max;
        }
        Vec4(out)
    }

    /// 8-bit RGBA frame from an `image` buffer.
    pub fn from_rgba8(img: &image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            format: FrameFormat::rgba8(width, height),
            samples: img.as_raw().iter().map(|&s| u16::from(s)).collect(),
        }
    }

    /// Convert to an 8-bit RGBA `image` buffer, through canonical RGB for YUV frames.
    pub fn to_rgba8(&self) -> FxResult<image::RgbaImage> {
        let FrameFormat { width, height, .. } = self.format;
        let mut raw = Vec::with_capacity(width as usize * height as usize * 4);
        for y in 0..height {
            for x in 0..width {
                let c = to_canonical_rgb(self.pixel(x, y), self.format.model);
                raw.extend(c.0.iter().map(|&v| quantize(v, 255) as u8));
            }
        }
        image::RgbaImage::from_raw(width, height, raw)
            .ok_or_else(|| FxError::evaluation("rgba buffer does not match frame size"))
    }

    /// The same image encoded in `model`, keeping size and bit depth.
    ///
    /// Single-plane frames become three-plane frames when converted to RGB.
    pub fn to_model(&self, model: ColorModel) -> FxResult<Self> {
        if model == self.format.model {
            return Ok(self.clone());
        }
        let mut format = self.format;
        format.model = model;
        if format.planes == 1 && model.is_rgb() {
            format.planes = 3;
        }
        let planes = usize::from(format.planes);
        let max = format.max_value();
        let mut samples = Vec::with_capacity(format.sample_count());
        for y in 0..format.height {
            for x in 0..format.width {
                let rgb = to_canonical_rgb(self.pixel(x, y), self.format.model);
                let c = from_canonical_rgb(rgb, model);
                samples.extend(c.0[..planes].iter().map(|&v| quantize(v, max)));
            }
        }
        Self::from_samples(format, samples)
    }
}

/// The two input frames of a transition, sampled nearest-neighbour with clamping.
#[derive(Clone, Copy, Debug)]
pub struct FramePair<'a> {
    a: &'a PlaneFrame,
    b: &'a PlaneFrame,
}

impl<'a> FramePair<'a> {
    /// Pair two frames of identical format.
    pub fn new(a: &'a PlaneFrame, b: &'a PlaneFrame) -> FxResult<Self> {
        if a.format != b.format {
            return Err(FxError::evaluation(format!(
                "input frames differ in format: {:?} vs {:?}",
                a.format, b.format
            )));
        }
        Ok(Self { a, b })
    }

    /// Format shared by both frames.
    pub fn format(&self) -> &FrameFormat {
        &self.a.format
    }

    fn frame(&self, which: Which) -> &'a PlaneFrame {
        match which {
            Which::A => self.a,
            Which::B => self.b,
        }
    }
}

impl PixelSource for FramePair<'_> {
    fn sample(&self, which: Which, p: Vec2) -> Vec4 {
        let frame = self.frame(which);
        let f = &frame.format;
        let x = nearest(p.x, f.max_x(), f.width);
        let y = nearest(1.0 - p.y, f.max_y(), f.height);
        frame.pixel(x, y)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;
