//! # Config Crate
//!
//! Centralized configuration constants for the spline editing and extrusion
//! pipeline. Tolerances, sampling densities and editing defaults are defined
//! here so the spline model and the mesh builder agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_RINGS_PER_SEGMENT, EPSILON_TOLERANCE};
//!
//! let tangent_length: f64 = 1.0e-12;
//! assert!(tangent_length < EPSILON_TOLERANCE);
//!
//! let segments = 3;
//! let rings = DEFAULT_RINGS_PER_SEGMENT * segments;
//! assert_eq!(rings, 24);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Dependencies**: Pure values, usable from every crate
//! - **Validated Snapshots**: Runtime overrides go through [`constants::ExtrusionConfig::new`]

pub mod constants;
