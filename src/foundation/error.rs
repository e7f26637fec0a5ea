/// Convenience result type used across clampkit.
pub type ClampResult<T> = Result<T, ClampError>;

/// Top-level error taxonomy used by the checked entry points.
///
/// The unchecked operations ([`crate::clamp`], [`crate::clamp_range`], ...) never return
/// errors; they debug-assert their preconditions instead.
#[derive(thiserror::Error, Debug)]
pub enum ClampError {
    /// `hi` orders strictly before `lo` under the active comparator.
    #[error("malformed range: {0}")]
    MalformedRange(String),

    /// Output buffer cannot hold one result per input element.
    #[error("output too short: need {needed} slots, have {available}")]
    OutputTooShort {
        /// Number of input elements.
        needed: usize,
        /// Length of the supplied output buffer.
        available: usize,
    },

    /// Invalid user-provided configuration data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ClampError {
    /// Build a [`ClampError::MalformedRange`] value.
    pub fn malformed_range(msg: impl Into<String>) -> Self {
        Self::MalformedRange(msg.into())
    }

    /// Build a [`ClampError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ClampError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
