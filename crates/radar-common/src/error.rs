//! Error types for the radar sweep pipeline.

use thiserror::Error;

/// Result type alias using RadarError.
pub type RadarResult<T> = Result<T, RadarError>;

/// Primary error type for decoding, gridding and navigating radar sweeps.
#[derive(Debug, Error)]
pub enum RadarError {
    // === Decode Errors ===
    /// A numeric header field, azimuth or timestamp could not be parsed.
    ///
    /// The decoder recovers from these locally; they only surface through
    /// its diagnostics sink or from the standalone parsing helpers.
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    // === Grid Errors ===
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    #[error("Invalid parameter value for '{param}': {message}")]
    InvalidParameter { param: String, message: String },

    // === Transform Errors ===
    #[error("Invalid dimension: expected {expected} components, got {actual}")]
    InvalidDimension { expected: usize, actual: usize },

    #[error("Component length mismatch: component {component} has {actual} values, expected {expected}")]
    RaggedComponents {
        component: usize,
        expected: usize,
        actual: usize,
    },
}

impl RadarError {
    /// Create a Parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create an InsufficientData error.
    pub fn insufficient_data(msg: impl Into<String>) -> Self {
        Self::InsufficientData(msg.into())
    }

    /// Create an InvalidParameter error.
    pub fn invalid_parameter(param: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            param: param.into(),
            message: message.into(),
        }
    }

    /// True for errors a caller passed in a wrongly shaped coordinate array.
    pub fn is_dimension_error(&self) -> bool {
        matches!(
            self,
            RadarError::InvalidDimension { .. } | RadarError::RaggedComponents { .. }
        )
    }
}
