//! # Spline Errors
//!
//! Error types for spline queries and edits. Every variant is a caller
//! precondition violation; refused structural edits are reported through
//! return values instead.

use thiserror::Error;

/// Errors that can occur while querying or editing a spline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SplineError {
    /// Point index outside `[0, point_count)`.
    #[error("Point index {index} out of range (point count {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// Segment index outside `[0, segment_count)`.
    #[error("Segment index {segment} out of range (segment count {count})")]
    SegmentOutOfRange { segment: usize, count: usize },

    /// An operation that needs an anchor received a handle index.
    #[error("Point {index} is not an anchor")]
    NotAnAnchor { index: usize },

    /// Externally supplied buffers violate the spline layout.
    #[error("Invalid spline layout: {message}")]
    InvalidLayout { message: String },
}

impl SplineError {
    /// Creates an invalid layout error.
    pub fn invalid_layout(message: impl Into<String>) -> Self {
        Self::InvalidLayout {
            message: message.into(),
        }
    }
}

/// Result type alias for spline operations.
pub type Result<T> = std::result::Result<T, SplineError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SplineError::IndexOutOfRange { index: 9, len: 4 };
        assert!(err.to_string().contains("out of range"));
        assert!(err.to_string().contains('9'));

        let err = SplineError::invalid_layout("5 points");
        assert!(err.to_string().contains("5 points"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SplineError>();
    }
}
