//! Blend-driven crossfades and colour-argument effects.

use std::f64::consts::FRAC_PI_2;

use crate::color::blend::BlendMode;
use crate::color::literal::ColorArg;
use crate::foundation::core::ColorModel;
use crate::foundation::error::FxResult;
use crate::foundation::math::{Vec2Ext, Vec4, clamp_unit, fract, mix};
use crate::params::table::Declarations;
use crate::transitions::fragment::{Fragment, Prime, Transition};
use crate::transitions::mask::CENTER;

fn declare_mode(decl: &mut Declarations<'_>, name: &str) -> FxResult<BlendMode> {
    let index = decl.int(name, 0)?;
    let mode = BlendMode::from_index(i64::from(index));
    if !usize::try_from(index).is_ok_and(|i| i < BlendMode::ALL.len()) {
        tracing::warn!(param = name, index, "unknown blend mode, using normal");
    }
    Ok(mode)
}

/// Crossfade through the blended image: A, then `blend(A, B)` at the midpoint, then B.
#[derive(Debug)]
pub(crate) struct Blend {
    mode: BlendMode,
}

impl Prime for Blend {
    fn prime(decl: &mut Declarations<'_>) -> FxResult<Self> {
        Ok(Self {
            mode: declare_mode(decl, "mode")?,
        })
    }
}

impl Transition for Blend {
    fn evaluate(&self, f: &Fragment<'_>) -> Vec4 {
        let blended = f.blend(f.a, f.b, self.mode);
        if f.progress < 0.5 {
            f.a.mix(blended, f.progress * 2.0)
        } else {
            blended.mix(f.b, f.progress * 2.0 - 1.0)
        }
    }
}

/// Shows B blended over A for the first half, then A blended over B.
#[derive(Debug)]
pub(crate) struct TestBlend {
    mode: BlendMode,
}

impl Prime for TestBlend {
    fn prime(decl: &mut Declarations<'_>) -> FxResult<Self> {
        Ok(Self {
            mode: declare_mode(decl, "blendMode")?,
        })
    }
}

impl Transition for TestBlend {
    fn evaluate(&self, f: &Fragment<'_>) -> Vec4 {
        if f.progress < 0.5 {
            f.blend(f.b, f.a, self.mode)
        } else {
            f.blend(f.a, f.b, self.mode)
        }
    }
}

/// Renders its colour argument, which makes procedural textures visible.
#[derive(Debug)]
pub(crate) struct TestTexture {
    background: ColorArg,
}

impl Prime for TestTexture {
    fn prime(decl: &mut Declarations<'_>) -> FxResult<Self> {
        Ok(Self {
            background: decl.color("background", 0.0)?,
        })
    }
}

impl Transition for TestTexture {
    fn evaluate(&self, f: &Fragment<'_>) -> Vec4 {
        f.color(&self.background)
    }
}

#[derive(Debug)]
pub(crate) struct StripeWipe {
    layers: i32,
    layer_spread: f64,
    color1: ColorArg,
    color2: ColorArg,
    shadow_intensity: f64,
    shadow_spread: f64,
    rad: f64,
    offset: f64,
}

impl Prime for StripeWipe {
    fn prime(decl: &mut Declarations<'_>) -> FxResult<Self> {
        let layers = decl.int("nlayers", 3)?;
        let layer_spread = decl.number("layerSpread", 0.5)?;
        let color1 = decl.color("color1", f64::from(0x3319_CCFF_u32))?;
        let color2 = decl.color("color2", f64::from(0x66CC_FFFF_u32))?;
        let shadow_intensity = decl.number("shadowIntensity", 0.7)?;
        let shadow_spread = decl.number("shadowSpread", 0.0)?;
        let angle = decl.number("angle", 0.0)?;
        let rad = decl.derived("rad", angle.to_radians())?;
        let ratio = decl.context().ratio;
        let offset = decl.derived("offset", rad.sin().abs() + (rad.cos() * ratio).abs())?;
        Ok(Self {
            layers,
            layer_spread,
            color1,
            color2,
            shadow_intensity,
            shadow_spread,
            rad,
            offset,
        })
    }
}

impl StripeWipe {
    /// Tint toward the stripe shadow; red falls off fastest. Luma only for YUV.
    fn bend(c: Vec4, shade: [f64; 3], model: ColorModel) -> Vec4 {
        let [r, g, b, a] = c.0;
        match model {
            ColorModel::Rgb => Vec4::new(r * shade[2], g * shade[0], b * shade[1], a),
            ColorModel::Yuv => Vec4::new(r * shade[0], g, b, a),
        }
    }
}

impl Transition for StripeWipe {
    fn evaluate(&self, f: &Fragment<'_>) -> Vec4 {
        let n = f64::from(self.layers);
        let mut p = f.p;
        p.x = p.x * f.ratio - (f.ratio - 1.0) / 2.0;
        let p = ((p - CENTER) / self.offset).rotate_cw(-self.rad) + CENTER;
        let px = (1.0 - p.x).cbrt();
        let spread = (px + ((1.0 + self.layer_spread) * f.progress - 1.0)) * n / self.layer_spread;
        let color_mix = if self.layers == 1 {
            spread.floor() * 2.0
        } else {
            spread.floor() / (n - 1.0)
        };
        let mut shade = 1.0 - clamp_unit(fract(spread) * self.shadow_intensity + self.shadow_spread);
        // the top stripe and everything beyond the stripes stay unshaded
        if color_mix >= 1.0 || color_mix < -2.0 / n || self.layers == 1 {
            shade = 1.0;
        }
        let comp = [
            (shade * FRAC_PI_2).sin(),
            (clamp_unit(shade * 1.05) * FRAC_PI_2).sin(),
            (clamp_unit(shade * 1.3) * FRAC_PI_2).sin(),
        ];

        if (0.0..=1.0).contains(&color_mix) {
            let stripe = f.color(&self.color1).mix(f.color(&self.color2), color_mix);
            return Self::bend(stripe, comp, f.model);
        }
        let base = if f.progress > color_mix { f.a } else { f.b };
        if color_mix < 0.0 {
            let m = clamp_unit(f.progress * 10.0);
            return Self::bend(base, comp.map(|s| mix(1.0, s, m)), f.model);
        }
        base
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transitions/blend.rs"]
mod tests;
