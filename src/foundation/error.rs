/// Convenience result type used across Gridlens.
pub type GridlensResult<T> = Result<T, GridlensError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum GridlensError {
    /// Invalid caller-provided geometry, indices, or configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Frame source is unready, detached, or delivered malformed pixels.
    #[error("source error: {0}")]
    Source(String),

    /// Errors while extracting or encoding a captured region.
    #[error("capture error: {0}")]
    Capture(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GridlensError {
    /// Build a [`GridlensError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`GridlensError::Source`] value.
    pub fn source(msg: impl Into<String>) -> Self {
        Self::Source(msg.into())
    }

    /// Build a [`GridlensError::Capture`] value.
    pub fn capture(msg: impl Into<String>) -> Self {
        Self::Capture(msg.into())
    }

    /// Build a [`GridlensError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
