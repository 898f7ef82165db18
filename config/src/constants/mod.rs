//! Centralized configuration values shared across the spline pipeline.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Length below which a tangent, velocity or direction vector is treated as
/// degenerate and is not normalized.
///
/// # Examples
/// ```
/// use config::constants::EPSILON_TOLERANCE;
/// assert!(EPSILON_TOLERANCE < 1.0e-6);
/// ```
pub const EPSILON_TOLERANCE: f64 = 1.0e-9;

/// Absolute value of the dot product between a ring's forward axis and the
/// world up axis above which the up axis is swapped for a fallback.
///
/// # Examples
/// ```
/// use config::constants::UP_PARALLEL_THRESHOLD;
/// assert!(UP_PARALLEL_THRESHOLD < 1.0);
/// ```
pub const UP_PARALLEL_THRESHOLD: f64 = 0.999;

// =============================================================================
// SAMPLING CONSTANTS
// =============================================================================

/// Default number of cross-section rings emitted per spline segment.
///
/// # Examples
/// ```
/// use config::constants::{DEFAULT_RINGS_PER_SEGMENT, MIN_RINGS_PER_SEGMENT};
/// assert!(DEFAULT_RINGS_PER_SEGMENT >= MIN_RINGS_PER_SEGMENT);
/// ```
pub const DEFAULT_RINGS_PER_SEGMENT: u32 = 8;

/// Smallest ring density accepted by the extrusion builder. Fewer than two
/// rings cannot span a segment.
pub const MIN_RINGS_PER_SEGMENT: u32 = 2;

/// Largest ring density accepted by the extrusion builder.
pub const MAX_RINGS_PER_SEGMENT: u32 = 32;

/// Default number of samples used when estimating spline arclength.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_LENGTH_PRECISION;
/// assert!(DEFAULT_LENGTH_PRECISION >= 2);
/// ```
pub const DEFAULT_LENGTH_PRECISION: usize = 8;

// =============================================================================
// EDITING CONSTANTS
// =============================================================================

/// Offset along +X between consecutive points when a segment is appended
/// without an explicit anchor position.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_SEGMENT_STEP;
/// // The new anchor lands three steps past the previous one.
/// assert_eq!(DEFAULT_SEGMENT_STEP * 3.0, 3.0);
/// ```
pub const DEFAULT_SEGMENT_STEP: f64 = 1.0;

/// Minimum number of segments an open spline keeps when deleting.
pub const MIN_OPEN_SEGMENTS: usize = 1;

/// Minimum number of segments a looped spline keeps when deleting.
pub const MIN_LOOP_SEGMENTS: usize = 2;

// =============================================================================
// RUNTIME CONFIGURATION
// =============================================================================

/// Immutable snapshot of extrusion settings that can be shared between
/// crates.
///
/// # Examples
/// ```
/// use config::constants::ExtrusionConfig;
/// let config = ExtrusionConfig::default();
/// assert!(config.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtrusionConfig {
    /// Degenerate-vector tolerance forwarded to frame construction.
    pub tolerance: f64,
    /// Rings emitted per spline segment.
    pub rings_per_segment: u32,
    /// Sample count for the arclength estimate driving the V coordinate.
    pub length_precision: usize,
}

impl ExtrusionConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// values.
    ///
    /// # Examples
    /// ```
    /// use config::constants::ExtrusionConfig;
    /// let cfg = ExtrusionConfig::new(1.0e-6, 12, 16).expect("valid config");
    /// assert_eq!(cfg.rings_per_segment, 12);
    /// ```
    pub fn new(
        tolerance: f64,
        rings_per_segment: u32,
        length_precision: usize,
    ) -> Result<Self, ConfigError> {
        if tolerance.is_nan() || tolerance <= 0.0 {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        if !(MIN_RINGS_PER_SEGMENT..=MAX_RINGS_PER_SEGMENT).contains(&rings_per_segment) {
            return Err(ConfigError::InvalidRings(rings_per_segment));
        }
        if length_precision < 2 {
            return Err(ConfigError::InvalidPrecision(length_precision));
        }
        Ok(Self {
            tolerance,
            rings_per_segment,
            length_precision,
        })
    }

    /// Returns a copy with a different ring density, validated the same way
    /// as [`ExtrusionConfig::new`].
    pub fn with_rings_per_segment(self, rings_per_segment: u32) -> Result<Self, ConfigError> {
        Self::new(self.tolerance, rings_per_segment, self.length_precision)
    }
}

impl Default for ExtrusionConfig {
    fn default() -> Self {
        Self {
            tolerance: EPSILON_TOLERANCE,
            rings_per_segment: DEFAULT_RINGS_PER_SEGMENT,
            length_precision: DEFAULT_LENGTH_PRECISION,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when tolerance is zero, negative or NaN.
    InvalidTolerance(f64),
    /// Raised when the ring density is outside the accepted range.
    InvalidRings(u32),
    /// Raised when the arclength sample count cannot form a single chord.
    InvalidPrecision(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive: {value}")
            }
            ConfigError::InvalidRings(value) => write!(
                f,
                "rings_per_segment must be in {MIN_RINGS_PER_SEGMENT}..={MAX_RINGS_PER_SEGMENT}: {value}"
            ),
            ConfigError::InvalidPrecision(value) => {
                write!(f, "length_precision must be >= 2: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
