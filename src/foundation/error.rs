/// Convenience result type used across cinegrid.
pub type CinegridResult<T> = Result<T, CinegridError>;

/// Top-level error taxonomy for planning APIs.
///
/// Only caller-input problems surface through these variants. Failures of
/// external collaborators (speech synthesis, AI style payloads, unknown
/// effect names) degrade to documented fallbacks instead of erroring, so a
/// generation run that starts with valid durations always completes.
#[derive(thiserror::Error, Debug)]
pub enum CinegridError {
    /// A caller-provided duration is non-positive or non-finite.
    #[error("invalid duration: {0}")]
    InvalidDuration(String),

    /// Invalid user-provided brief or timeline data.
    #[error("validation error: {0}")]
    Validation(String),

    /// AI-provided style data could not be interpreted at all.
    #[error("style intent error: {0}")]
    StyleIntent(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CinegridError {
    /// Build a [`CinegridError::InvalidDuration`] value.
    pub fn invalid_duration(msg: impl Into<String>) -> Self {
        Self::InvalidDuration(msg.into())
    }

    /// Build a [`CinegridError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CinegridError::StyleIntent`] value.
    pub fn style_intent(msg: impl Into<String>) -> Self {
        Self::StyleIntent(msg.into())
    }

    /// Build a [`CinegridError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
