//! User-supplied transition arguments: `name(value, param=value, , #ff0000)`.

use smallvec::SmallVec;

use crate::color::literal::{encode_rgba, looks_like_color, parse_color};
use crate::foundation::error::{FxError, FxResult};

/// One argument as written by the user.
#[derive(Clone, Debug, PartialEq)]
pub struct RawArg {
    /// Parameter name for `name=value` arguments.
    pub name: Option<String>,
    /// Numeric value. `NaN` marks an empty positional slot (use the default).
    pub value: f64,
}

impl RawArg {
    /// Positional argument.
    pub fn positional(value: f64) -> Self {
        Self { name: None, value }
    }

    /// Named argument.
    pub fn named(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: Some(name.into()),
            value,
        }
    }

    /// Placeholder that falls back to the declared default.
    pub fn unspecified() -> Self {
        Self::positional(f64::NAN)
    }
}

/// Ordered argument list for one configured transition.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ArgList(pub SmallVec<[RawArg; 8]>);

impl ArgList {
    /// Empty list: every parameter takes its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the comma separated body between the parentheses.
    pub fn parse(body: &str) -> FxResult<Self> {
        let mut out = SmallVec::new();
        for token in body.split(',') {
            let token = token.trim();
            if token.is_empty() {
                out.push(RawArg::unspecified());
                continue;
            }
            let arg = match token.split_once('=') {
                Some((name, value)) => {
                    let name = name.trim();
                    if name.is_empty() {
                        return Err(FxError::config(format!(
                            "missing parameter name in argument '{token}'"
                        )));
                    }
                    RawArg::named(name, parse_value(value.trim())?)
                }
                None => RawArg::positional(parse_value(token)?),
            };
            out.push(arg);
        }
        Ok(Self(out))
    }

    /// Named value matching `param` case-insensitively.
    pub fn named(&self, param: &str) -> Option<f64> {
        self.0
            .iter()
            .find(|a| a.name.as_deref().is_some_and(|n| n.eq_ignore_ascii_case(param)))
            .map(|a| a.value)
    }

    /// Unnamed, non-NaN value at position `index`.
    pub fn positional(&self, index: usize) -> Option<f64> {
        self.0
            .get(index)
            .filter(|a| a.name.is_none() && !a.value.is_nan())
            .map(|a| a.value)
    }

    /// Number of arguments, including empty slots.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` when no arguments were supplied.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<RawArg> for ArgList {
    fn from_iter<I: IntoIterator<Item = RawArg>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A number, or a colour literal encoded as flagged packed RGBA.
pub fn parse_value(token: &str) -> FxResult<f64> {
    if looks_like_color(token) {
        return parse_color(token).map(encode_rgba);
    }
    token
        .parse::<f64>()
        .map_err(|_| FxError::config(format!("invalid value '{token}' in transition option")))
}

/// Split `name(args)` into the trimmed name and the optional argument body.
pub(crate) fn split_call(s: &str) -> FxResult<(&str, Option<&str>)> {
    let s = s.trim();
    let Some((name, rest)) = s.split_once('(') else {
        if s.is_empty() {
            return Err(FxError::config("missing function name"));
        }
        return Ok((s, None));
    };
    let Some(body) = rest.trim_end().strip_suffix(')') else {
        return Err(FxError::config(format!("missing ')' in option '{s}'")));
    };
    let name = name.trim();
    if name.is_empty() {
        return Err(FxError::config(format!("missing function name in option '{s}'")));
    }
    if body.contains(['(', ')']) {
        return Err(FxError::config(format!("unbalanced parentheses in option '{s}'")));
    }
    Ok((name, Some(body)))
}

#[cfg(test)]
#[path = "../../tests/unit/params/args.rs"]
mod tests;
