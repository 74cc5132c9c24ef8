/// Convenience alias for results produced by this crate's entry points.
pub type RenderResult<T> = Result<T, RenderError>;

/// Recoverable errors surfaced to callers.
///
/// A `Fail` node reaching a renderer is deliberately absent from this enum: it is a defect in
/// the stream producer and aborts through [`crate::invariant_violation`] instead.
#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    /// Invalid caller-supplied configuration (e.g. a zero page width).
    #[error("validation error: {0}")]
    Validation(String),

    /// Malformed token fixture or configuration document.
    #[error("serialization error: {0}")]
    Serde(String),

    /// The sink failed; the underlying error is passed through untouched.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Any other failure.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RenderError {
    /// Build a [`RenderError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`RenderError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for RenderError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
