/// Convenience result type used across blendfx.
pub type FxResult<T> = Result<T, FxError>;

/// Top-level error taxonomy.
///
/// Every variant is produced at configuration or priming time. Per-pixel evaluation never
/// returns an error.
#[derive(thiserror::Error, Debug)]
pub enum FxError {
    /// Unknown easing/transition name, malformed argument syntax, wrong argument count or an
    /// invalid enumerated value. The message names the offending token.
    #[error("configuration error: {0}")]
    Config(String),

    /// Errors while rendering a frame outside the per-pixel path (mismatched frames, pools).
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FxError {
    /// Build a [`FxError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`FxError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`FxError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
