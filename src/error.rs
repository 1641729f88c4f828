use thiserror::Error;

/// The main error type for easybox operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BboxError {
    /// Malformed call-site input (wrong sequence length, bad factor, etc.).
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// The coordinates would not satisfy `left <= right` and `top <= bottom`.
    #[error(
        "Invalid bbox geometry (left={left}, top={top}, right={right}, bottom={bottom}): \
         negative width or height"
    )]
    InvalidGeometry {
        left: f64,
        top: f64,
        right: f64,
        bottom: f64,
    },
}

impl BboxError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}
