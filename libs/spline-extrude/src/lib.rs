//! # Spline Extrude
//!
//! Sweeps 2D cross-section profiles along Bezier splines into triangle
//! meshes.
//!
//! ## Architecture
//!
//! ```text
//! bezier-spline (BezierSpline) + CrossSectionProfile → spline-extrude (MeshBuffers)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use bezier_spline::BezierSpline;
//! use glam::DVec3;
//! use spline_extrude::{CrossSectionProfile, ExtrusionMeshBuilder};
//!
//! let mut spline = BezierSpline::default();
//! spline.add_segment_to(DVec3::new(7.0, 0.0, 2.0));
//!
//! let profile = CrossSectionProfile::rectangle(2.0, 0.2)?;
//! let mut builder = ExtrusionMeshBuilder::default();
//! let mesh = builder.rebuild(&spline, &profile)?;
//! assert!(mesh.validate());
//! # Ok::<(), spline_extrude::ExtrudeError>(())
//! ```

pub mod error;
pub mod extrude;
pub mod frame;
pub mod mesh;
pub mod profile;

pub use error::ExtrudeError;
pub use extrude::{build, ExtrusionMeshBuilder};
pub use frame::OrientedPoint;
pub use mesh::MeshBuffers;
pub use profile::{CrossSectionProfile, ProfileVertex};
