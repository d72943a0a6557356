/// Convenience result type used across the crate.
pub type ScrollResult<T> = Result<T, ScrollError>;

/// Error taxonomy for animator, session and counter APIs.
#[derive(thiserror::Error, Debug)]
pub enum ScrollError {
    /// Invalid geometry, trigger or counter configuration, rejected at construction.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A render target was required but none is attached.
    #[error("render target unavailable")]
    TargetUnavailable,

    /// Rejected input or call that is not a configuration problem, such as an
    /// unknown ease name or a call on a disposed session.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ScrollError {
    /// Build a [`ScrollError::Configuration`] value.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Build a [`ScrollError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ScrollError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// True for [`ScrollError::Configuration`].
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}

impl From<serde_json::Error> for ScrollError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
