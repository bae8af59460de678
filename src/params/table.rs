//! Prime-once parameter resolution.
//!
//! A transition declares its parameters against a [`Declarations`] builder exactly once. Each
//! declaration claims the next slot, resolves its value (named argument, else positional
//! argument at that slot, else default) and returns it so the transition can capture it. The
//! builder then freezes into a read-only [`ParamTable`].

use crate::color::literal::ColorArg;
use crate::foundation::core::ColorModel;
use crate::foundation::error::{FxError, FxResult};
use crate::foundation::math::Vec2;
use crate::params::args::ArgList;

/// Capacity of a parameter table.
pub const MAX_SLOTS: usize = 20;

/// A resolved parameter value, tagged by its declared kind.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParamValue {
    /// Scalar, integer or vector component.
    Number(f64),
    /// Boolean switch.
    Flag(bool),
    /// Colour, grey level or texture.
    Color(ColorArg),
    /// Constant computed from other parameters, never read from user input.
    Derived(f64),
}

/// One named slot.
#[derive(Clone, Debug, PartialEq)]
pub struct ParamSlot {
    /// Declared name (`param.x` / `param.y` for vector components).
    pub name: String,
    /// Resolved value.
    pub value: ParamValue,
}

/// Frozen parameters of one primed transition.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParamTable {
    slots: Vec<ParamSlot>,
}

impl ParamTable {
    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// `true` for transitions without parameters.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Slot at `index`.
    pub fn slot(&self, index: usize) -> Option<&ParamSlot> {
        self.slots.get(index)
    }

    /// Value of the slot declared as `name` (case-insensitive).
    pub fn get(&self, name: &str) -> Option<ParamValue> {
        self.slots
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
            .map(|s| s.value)
    }

    /// Numeric view of a number, flag or derived slot.
    pub fn number(&self, name: &str) -> Option<f64> {
        match self.get(name)? {
            ParamValue::Number(v) | ParamValue::Derived(v) => Some(v),
            ParamValue::Flag(b) => Some(if b { 1.0 } else { 0.0 }),
            ParamValue::Color(_) => None,
        }
    }

    /// All slots in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &ParamSlot> {
        self.slots.iter()
    }
}

/// Frame facts available while priming.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PrimingContext {
    /// Colour encoding of the frames.
    pub model: ColorModel,
    /// Width over height.
    pub ratio: f64,
    /// Transition length in seconds.
    pub duration_secs: f64,
    /// Output frames per second.
    pub fps: f64,
}

impl Default for PrimingContext {
    fn default() -> Self {
        Self {
            model: ColorModel::Rgb,
            ratio: 1.0,
            duration_secs: 1.0,
            fps: 25.0,
        }
    }
}

/// Write-only builder used during priming.
#[derive(Debug)]
pub struct Declarations<'a> {
    args: &'a ArgList,
    ctx: PrimingContext,
    slots: Vec<ParamSlot>,
}

impl<'a> Declarations<'a> {
    /// Start priming against `args`.
    pub fn new(args: &'a ArgList, ctx: PrimingContext) -> Self {
        Self {
            args,
            ctx,
            slots: Vec::with_capacity(MAX_SLOTS),
        }
    }

    /// Frame facts for derived constants.
    pub fn context(&self) -> &PrimingContext {
        &self.ctx
    }

    fn resolve(&self, name: &str, default: f64) -> f64 {
        self.args
            .named(name)
            .or_else(|| self.args.positional(self.slots.len()))
            .unwrap_or(default)
    }

    fn push(&mut self, name: String, value: ParamValue) -> FxResult<()> {
        if self.slots.len() >= MAX_SLOTS {
            return Err(FxError::config(format!(
                "parameter '{name}' exceeds the {MAX_SLOTS}-slot table"
            )));
        }
        tracing::debug!(slot = self.slots.len(), param = %name, ?value, "param");
        self.slots.push(ParamSlot { name, value });
        Ok(())
    }

    /// Scalar parameter.
    pub fn number(&mut self, name: &str, default: f64) -> FxResult<f64> {
        let v = self.resolve(name, default);
        self.push(name.to_owned(), ParamValue::Number(v))?;
        Ok(v)
    }

    /// Integer parameter; fractional input truncates toward zero.
    pub fn int(&mut self, name: &str, default: i32) -> FxResult<i32> {
        let v = self.resolve(name, f64::from(default)).trunc();
        self.push(name.to_owned(), ParamValue::Number(v))?;
        Ok(v as i32)
    }

    /// Boolean parameter; any non-zero value is `true`.
    pub fn flag(&mut self, name: &str, default: bool) -> FxResult<bool> {
        let v = self.resolve(name, if default { 1.0 } else { 0.0 }) != 0.0;
        self.push(name.to_owned(), ParamValue::Flag(v))?;
        Ok(v)
    }

    /// 2-vector parameter occupying two slots, `name.x` then `name.y`.
    pub fn vec2(&mut self, name: &str, default: (f64, f64)) -> FxResult<Vec2> {
        let x = self.number(&format!("{name}.x"), default.0)?;
        let y = self.number(&format!("{name}.y"), default.1)?;
        Ok(Vec2::new(x, y))
    }

    /// Integer 2-vector parameter occupying two slots.
    pub fn ivec2(&mut self, name: &str, default: (i32, i32)) -> FxResult<(i32, i32)> {
        let x = self.int(&format!("{name}.x"), default.0)?;
        let y = self.int(&format!("{name}.y"), default.1)?;
        Ok((x, y))
    }

    /// Colour parameter, decoded for the frame's model.
    pub fn color(&mut self, name: &str, default: f64) -> FxResult<ColorArg> {
        let c = ColorArg::decode(self.resolve(name, default), self.ctx.model);
        self.push(name.to_owned(), ParamValue::Color(c))?;
        Ok(c)
    }

    /// Constant computed once from earlier parameters.
    pub fn derived(&mut self, name: &str, value: f64) -> FxResult<f64> {
        self.push(name.to_owned(), ParamValue::Derived(value))?;
        Ok(value)
    }

    /// Derived 2-vector occupying two slots.
    pub fn derived_vec2(&mut self, name: &str, value: Vec2) -> FxResult<Vec2> {
        self.derived(&format!("{name}.x"), value.x)?;
        self.derived(&format!("{name}.y"), value.y)?;
        Ok(value)
    }

    /// Freeze the declared slots, warning about arguments nothing consumed.
    pub fn finish(self) -> ParamTable {
        for arg in self.args.0.iter() {
            if let Some(name) = &arg.name
                && !self.slots.iter().any(|s| s.name.eq_ignore_ascii_case(name))
            {
                tracing::warn!(param = %name, "named argument matches no parameter");
            }
        }
        let surplus = (self.slots.len()..self.args.len())
            .filter(|&i| self.args.positional(i).is_some())
            .count();
        if surplus > 0 {
            tracing::warn!(surplus, "ignoring surplus positional arguments");
        }
        ParamTable { slots: self.slots }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/params/table.rs"]
mod tests;
