//! Serializable engine configuration.

use serde::{Deserialize, Serialize};

use crate::foundation::core::Fps;
use crate::foundation::error::{FxError, FxResult};

/// Which directions of play are reversed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Reverse {
    /// Play the effect backwards with A and B exchanged.
    pub transition: bool,
    /// Apply the easing as `1 - ease(1 - t)`.
    pub easing: bool,
}

impl Reverse {
    /// Decode the packed option value: bit 0 reverses the transition, bit 1 the easing.
    pub fn from_bits(bits: u8) -> Self {
        Self {
            transition: bits & 1 != 0,
            easing: bits & 2 != 0,
        }
    }
}

/// Serializable configuration of one transition.
///
/// ```json
/// { "transition": "gl_Diamond(smoothness=0.1)", "easing": "cubic-in-out", "duration_secs": 2 }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineConfig {
    /// Transition call string, `name` or `name(args)`.
    pub transition: String,
    /// Easing call string; absent means progress is used as is.
    #[serde(default)]
    pub easing: Option<String>,
    /// Reversal flags.
    #[serde(default)]
    pub reverse: Reverse,
    /// Length of the transition in seconds.
    #[serde(default = "default_duration_secs")]
    pub duration_secs: f64,
    /// Output frame rate.
    #[serde(default)]
    pub fps: Fps,
}

fn default_duration_secs() -> f64 {
    1.0
}

impl EngineConfig {
    /// Configuration with defaults for everything but the transition.
    pub fn new(transition: impl Into<String>) -> Self {
        Self {
            transition: transition.into(),
            easing: None,
            reverse: Reverse::default(),
            duration_secs: default_duration_secs(),
            fps: Fps::default(),
        }
    }

    /// Parse and validate a JSON document.
    pub fn from_json_str(s: &str) -> FxResult<Self> {
        let config: Self = serde_json::from_str(s).map_err(|e| FxError::serde(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Pretty JSON rendering.
    pub fn to_json_string(&self) -> FxResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| FxError::serde(e.to_string()))
    }

    /// Check duration and frame rate.
    pub fn validate(&self) -> FxResult<()> {
        if !(self.duration_secs.is_finite() && self.duration_secs > 0.0) {
            return Err(FxError::config(format!(
                "duration_secs must be finite and > 0, got {}",
                self.duration_secs
            )));
        }
        Fps::new(self.fps.num, self.fps.den)?;
        Ok(())
    }

    /// Number of frame intervals covered by the transition, at least 1.
    pub fn frame_count(&self) -> u32 {
        let n = (self.duration_secs * self.fps.as_f64()).round();
        if n >= 1.0 { n.min(f64::from(u32::MAX)) as u32 } else { 1 }
    }

    /// Completed fraction at output frame `index`, clamped to `[0, 1]`.
    pub fn frame_progress(&self, index: u32) -> f64 {
        let t = f64::from(index) * self.fps.frame_duration_secs() / self.duration_secs;
        t.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/config.rs"]
mod tests;
