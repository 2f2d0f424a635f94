/// Convenience result type used across keepsake.
pub type KeepsakeResult<T> = Result<T, KeepsakeError>;

/// Top-level error taxonomy.
///
/// Scene composition and view transitions never fail; errors only come from loading or
/// validating a [`crate::StageConfig`] and from parsing user input in the CLI.
#[derive(thiserror::Error, Debug)]
pub enum KeepsakeError {
    /// Invalid user-provided values (ranges, counts, viewport sizes).
    #[error("validation error: {0}")]
    Validation(String),

    /// Configuration that parses but cannot be used.
    #[error("configuration error: {0}")]
    Config(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl KeepsakeError {
    /// Build a [`KeepsakeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`KeepsakeError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`KeepsakeError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
