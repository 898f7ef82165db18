//! # Bezier Spline
//!
//! Editable piecewise-cubic Bezier spline used as the path of extruded
//! geometry.
//!
//! ## Architecture
//!
//! ```text
//! bezier (segment math) → spline (point buffer, modes, edits) → spline-extrude
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use bezier_spline::{BezierSpline, ControlPointMode};
//! use glam::DVec3;
//!
//! let mut spline = BezierSpline::default();
//! spline.add_segment_to(DVec3::new(7.0, 3.0, 0.0));
//! spline.set_control_point_mode(3, ControlPointMode::Aligned)?;
//! spline.set_loop(true);
//!
//! assert_eq!(spline.segment_count(), 3);
//! assert!(spline.point(1.0).abs_diff_eq(spline.point(0.0), 1e-12));
//! # Ok::<(), bezier_spline::SplineError>(())
//! ```

pub mod bezier;
pub mod error;
pub mod mode;
pub mod spline;

pub use error::SplineError;
pub use mode::ControlPointMode;
pub use spline::BezierSpline;
