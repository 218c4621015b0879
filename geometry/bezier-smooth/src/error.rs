//! Error types for smoothing operations.

use thiserror::Error;

/// Errors that can occur while building splines or smoothing geometries.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SmoothError {
    /// Insufficient points to define a spline.
    #[error("insufficient points: need at least {required}, got {actual}")]
    InsufficientPoints {
        /// Minimum required points.
        required: usize,
        /// Actual number of points provided.
        actual: usize,
    },

    /// A tuning parameter is outside its valid domain.
    #[error("invalid parameter {name} = {value}: expected {expected}")]
    InvalidParameter {
        /// Name of the parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
        /// Description of the accepted domain.
        expected: &'static str,
    },

    /// A position has too few components to be a coordinate.
    #[error("invalid position at index {index}: {len} components (need at least 2)")]
    InvalidPosition {
        /// Index of the position within its coordinate sequence.
        index: usize,
        /// Number of components the position carried.
        len: usize,
    },

    /// The geometry variant cannot be smoothed.
    #[error("unsupported geometry: {0}")]
    UnsupportedGeometry(&'static str),
}

impl SmoothError {
    /// Create an insufficient points error.
    #[must_use]
    pub fn insufficient_points(required: usize, actual: usize) -> Self {
        Self::InsufficientPoints { required, actual }
    }

    /// Create an invalid parameter error.
    #[must_use]
    pub fn invalid_parameter(name: &'static str, value: f64, expected: &'static str) -> Self {
        Self::InvalidParameter {
            name,
            value,
            expected,
        }
    }

    /// Check if this is an insufficient points error.
    #[must_use]
    pub fn is_insufficient_points(&self) -> bool {
        matches!(self, Self::InsufficientPoints { .. })
    }

    /// Check if this is an invalid parameter error.
    #[must_use]
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. })
    }

    /// Check if this is an unsupported geometry error.
    #[must_use]
    pub fn is_unsupported_geometry(&self) -> bool {
        matches!(self, Self::UnsupportedGeometry(_))
    }
}

/// Result type for smoothing operations.
pub type Result<T> = std::result::Result<T, SmoothError>;
