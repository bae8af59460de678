use std::str::FromStr;

use crate::easing::EasingSpec;
use crate::easing::css::{CubicBezier, JumpPolicy, LinearStop, Steps};
use crate::easing::standard::{EaseFamily, EaseMode};
use crate::foundation::error::{FxError, FxResult};
use crate::params::args::split_call;

/// Parse an easing string such as `cubic-in-out`, `ease`, `steps(4, jump-end)` or
/// `linear(0, 0.25 75%, 1)`.
///
/// A bare `linear` yields `Ok(None)`: progress passes through uneased.
pub fn parse_easing(s: &str) -> FxResult<Option<EasingSpec>> {
    let (name, args) = split_call(s)?;
    let key = name.to_ascii_lowercase();

    let spec = match key.as_str() {
        "linear" => match args {
            None => return Ok(None),
            Some(args) => parse_linear(args)?,
        },
        "cubic-bezier" => EasingSpec::CubicBezier(parse_bezier(args)?),
        "ease" => EasingSpec::CubicBezier(CubicBezier::EASE),
        "ease-in" => EasingSpec::CubicBezier(CubicBezier::EASE_IN),
        "ease-out" => EasingSpec::CubicBezier(CubicBezier::EASE_OUT),
        "ease-in-out" => EasingSpec::CubicBezier(CubicBezier::EASE_IN_OUT),
        "steps" => EasingSpec::Steps(parse_steps(args)?),
        "step-start" => EasingSpec::Steps(Steps::new(1, JumpPolicy::JumpStart)?),
        "step-end" => EasingSpec::Steps(Steps::new(1, JumpPolicy::JumpEnd)?),
        _ => {
            let spec = parse_standard(&key)
                .ok_or_else(|| FxError::config(format!("unknown easing function '{name}'")))?;
            if let Some(args) = args {
                tracing::warn!(easing = name, args, "ignoring extraneous easing arguments");
            }
            spec
        }
    };
    Ok(Some(spec))
}

fn parse_standard(key: &str) -> Option<EasingSpec> {
    EaseFamily::ALL.iter().find_map(|&family| {
        let rest = key.strip_prefix(family.name())?;
        let mode = match rest {
            "" | "-in-out" => EaseMode::InOut,
            "-in" => EaseMode::In,
            "-out" => EaseMode::Out,
            _ => return None,
        };
        Some(EasingSpec::Standard { family, mode })
    })
}

fn number(token: &str) -> FxResult<f64> {
    let token = token.trim();
    if token.is_empty() {
        return Err(FxError::config("expected number in easing option"));
    }
    f64::from_str(token).map_err(|_| FxError::config(format!("bad number '{token}' in easing option")))
}

fn parse_linear(args: &str) -> FxResult<EasingSpec> {
    let mut stops = Vec::new();
    for arg in args.split(',') {
        let mut parts = arg.split_whitespace();
        let y = number(parts.next().unwrap_or(""))?;
        let mut positions = 0;
        for part in parts {
            positions += 1;
            if positions > 2 {
                return Err(FxError::config(format!(
                    "too many positions in linear stop '{}'",
                    arg.trim()
                )));
            }
            let pct = part
                .strip_suffix('%')
                .ok_or_else(|| FxError::config(format!("bad number '{part}' in easing option")))?;
            let x = number(pct)? * 0.01;
            stops.push(LinearStop { x: Some(x), y });
        }
        if positions == 0 {
            stops.push(LinearStop { x: None, y });
        }
    }
    if stops.len() < 2 {
        return Err(FxError::config(format!(
            "expected at least 2 easing arguments, got {}",
            stops.len()
        )));
    }
    Ok(EasingSpec::linear(&stops))
}

fn parse_bezier(args: Option<&str>) -> FxResult<CubicBezier> {
    let values = args
        .map(|a| a.split(',').map(number).collect::<FxResult<Vec<_>>>())
        .transpose()?
        .unwrap_or_default();
    let [x1, y1, x2, y2] = values[..] else {
        return Err(FxError::config(format!(
            "expected 4 easing arguments, got {}",
            values.len()
        )));
    };
    let b = CubicBezier::new(x1, y1, x2, y2);
    b.validate()?;
    Ok(b)
}

fn parse_steps(args: Option<&str>) -> FxResult<Steps> {
    let args = args.ok_or_else(|| FxError::config("expected 1 or 2 steps arguments"))?;
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    let (count, position) = match parts[..] {
        [count] => (count, None),
        [count, position] => (count, Some(position)),
        _ => {
            return Err(FxError::config(format!(
                "expected 1 or 2 steps arguments, got {}",
                parts.len()
            )));
        }
    };
    let count: u32 = count
        .parse()
        .map_err(|_| FxError::config(format!("bad number '{count}' in easing option")))?;
    let policy = position.map(JumpPolicy::parse).transpose()?.unwrap_or_default();
    Steps::new(count, policy)
}

impl FromStr for EasingSpec {
    type Err = FxError;

    /// Like [`parse_easing`], with a bare `linear` mapped to an identity `linear()` curve.
    fn from_str(s: &str) -> FxResult<Self> {
        Ok(parse_easing(s)?.unwrap_or_else(|| EasingSpec::linear(&[])))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/easing/parse.rs"]
mod tests;
