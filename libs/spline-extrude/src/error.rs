//! # Extrusion Errors
//!
//! Error types for profile construction and mesh building.

use bezier_spline::SplineError;
use thiserror::Error;

/// Errors that can occur while building profiles or extruding meshes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExtrudeError {
    /// Error from the spline layer
    #[error("Spline error: {0}")]
    Spline(#[from] SplineError),

    /// Malformed cross-section profile
    #[error("Invalid profile: {message}")]
    InvalidProfile { message: String },

    /// Build parameter outside its accepted range
    #[error("Invalid parameter: {message}")]
    InvalidParameter { message: String },
}

impl ExtrudeError {
    /// Creates an invalid profile error.
    pub fn invalid_profile(message: impl Into<String>) -> Self {
        Self::InvalidProfile {
            message: message.into(),
        }
    }

    /// Creates an invalid parameter error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }
}

/// Result type alias for extrusion operations.
pub type Result<T> = std::result::Result<T, ExtrudeError>;
