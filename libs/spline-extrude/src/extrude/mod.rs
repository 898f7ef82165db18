//! # Spline Extrusion
//!
//! Sweeps a [`CrossSectionProfile`] along a [`BezierSpline`] into
//! [`MeshBuffers`].
//!
//! ## Layout
//!
//! ```text
//! ring r:     r*k + 0 ── r*k + 1 ── ... ── r*k + (k-1)     k = profile vertex count
//!                │  ╲        │
//! ring r+1:   n + 0 ──── n + 1 ── ...                      n = (r+1)*k
//! ```
//!
//! `rings_per_segment * segment_count` rings are placed at evenly spaced
//! global `t` from 0 to 1 inclusive, each oriented along the spline
//! direction. Every profile edge `(a, b)` contributes two triangles between
//! consecutive rings. V runs along the spline in units of the profile
//! perimeter so textures keep their aspect ratio.
//!
//! Every call rebuilds from scratch.

#[cfg(test)]
mod tests;

use crate::error::{ExtrudeError, Result};
use crate::frame::OrientedPoint;
use crate::mesh::MeshBuffers;
use crate::profile::CrossSectionProfile;
use bezier_spline::BezierSpline;
use config::constants::{ExtrusionConfig, EPSILON_TOLERANCE};
use glam::{DVec2, DVec3};
use log::{debug, warn};

/// Extrudes `profile` along `spline` with `rings_per_segment` rings per
/// segment and default settings otherwise.
///
/// # Errors
///
/// [`ExtrudeError::InvalidParameter`] when `rings_per_segment` is outside
/// the accepted range.
///
/// # Example
///
/// ```rust
/// use bezier_spline::BezierSpline;
/// use spline_extrude::{extrude, CrossSectionProfile};
///
/// let spline = BezierSpline::default();
/// let profile = CrossSectionProfile::rectangle(2.0, 0.5)?;
/// let mesh = extrude::build(&spline, &profile, 4)?;
///
/// assert_eq!(mesh.vertex_count(), 4 * profile.vertex_count());
/// assert_eq!(mesh.triangle_count(), 3 * profile.edge_count() * 2);
/// # Ok::<(), spline_extrude::ExtrudeError>(())
/// ```
pub fn build(
    spline: &BezierSpline,
    profile: &CrossSectionProfile,
    rings_per_segment: u32,
) -> Result<MeshBuffers> {
    let config = ExtrusionConfig::default()
        .with_rings_per_segment(rings_per_segment)
        .map_err(|err| ExtrudeError::invalid_parameter(err.to_string()))?;
    build_with_config(spline, profile, &config)
}

/// Extrudes `profile` along `spline` using every setting from `config`.
///
/// The configuration is re-validated, so a hand-assembled
/// [`ExtrusionConfig`] with out-of-range fields is rejected here.
pub fn build_with_config(
    spline: &BezierSpline,
    profile: &CrossSectionProfile,
    config: &ExtrusionConfig,
) -> Result<MeshBuffers> {
    let config = ExtrusionConfig::new(
        config.tolerance,
        config.rings_per_segment,
        config.length_precision,
    )
    .map_err(|err| ExtrudeError::invalid_parameter(err.to_string()))?;

    let steps = config.rings_per_segment as usize * spline.segment_count();
    let ring_size = profile.vertex_count();
    let vertex_count = steps * ring_size;
    if u32::try_from(vertex_count).is_err() {
        return Err(ExtrudeError::invalid_parameter(format!(
            "{vertex_count} vertices exceed the u32 index range"
        )));
    }
    let triangle_count = (steps - 1) * profile.edge_count() * 2;

    let length = spline.approx_length(config.length_precision);
    let perimeter = profile.perimeter();
    let v_scale = if perimeter > config.tolerance {
        length / perimeter
    } else {
        warn!("profile perimeter is {perimeter}, V falls back to spline length");
        length
    };

    let mut mesh = MeshBuffers::with_capacity(vertex_count, triangle_count);
    let last = (steps - 1) as f64;
    for ring in 0..steps {
        let t = ring as f64 / last;
        let frame = ring_frame(spline, t, config.tolerance);
        let v = t * v_scale;
        for vertex in profile.vertices() {
            mesh.push_vertex(
                frame.local_to_world_pos(vertex.point),
                frame.local_to_world_vec(vertex.normal),
                DVec2::new(vertex.u, v),
            );
        }
    }

    let ring_size = ring_size as u32;
    for ring in 0..steps as u32 - 1 {
        let current = ring * ring_size;
        let next = current + ring_size;
        for (a, b) in profile.edges() {
            let (a, b) = (a as u32, b as u32);
            mesh.push_triangle(current + a, next + a, next + b);
            mesh.push_triangle(current + a, next + b, current + b);
        }
    }

    debug!(
        "extruded {} rings x {} profile vertices: {} vertices, {} triangles",
        steps,
        ring_size,
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    Ok(mesh)
}

/// World-space outline of `profile` stamped at global `t`, one segment per
/// profile edge.
///
/// # Example
///
/// ```rust
/// use bezier_spline::BezierSpline;
/// use spline_extrude::{extrude, CrossSectionProfile};
///
/// let spline = BezierSpline::default();
/// let profile = CrossSectionProfile::rectangle(1.0, 1.0)?;
/// let outline = extrude::profile_outline_at(&spline, &profile, 0.5);
/// assert_eq!(outline.len(), 4);
/// # Ok::<(), spline_extrude::ExtrudeError>(())
/// ```
pub fn profile_outline_at(
    spline: &BezierSpline,
    profile: &CrossSectionProfile,
    t: f64,
) -> Vec<(DVec3, DVec3)> {
    let frame = ring_frame(spline, t, EPSILON_TOLERANCE);
    let vertices = profile.vertices();
    profile
        .edges()
        .map(|(a, b)| {
            (
                frame.local_to_world_pos(vertices[a].point),
                frame.local_to_world_pos(vertices[b].point),
            )
        })
        .collect()
}

fn ring_frame(spline: &BezierSpline, t: f64, tolerance: f64) -> OrientedPoint {
    OrientedPoint::looking_along(spline.point(t), spline.direction(t), tolerance)
}

// =============================================================================
// STATEFUL BUILDER
// =============================================================================

/// Owns the most recent mesh for a spline/profile pair.
///
/// [`rebuild`](Self::rebuild) builds into fresh buffers and swaps them in
/// only on success, so readers never observe a half-built mesh and a failed
/// rebuild keeps the previous result.
#[derive(Debug, Clone, Default)]
pub struct ExtrusionMeshBuilder {
    config: ExtrusionConfig,
    buffers: MeshBuffers,
}

impl ExtrusionMeshBuilder {
    /// Creates a builder with empty buffers.
    pub fn new(config: ExtrusionConfig) -> Self {
        Self {
            config,
            buffers: MeshBuffers::new(),
        }
    }

    pub fn config(&self) -> &ExtrusionConfig {
        &self.config
    }

    /// Replaces the settings used by the next rebuild. Current buffers are
    /// kept.
    pub fn set_config(&mut self, config: ExtrusionConfig) {
        self.config = config;
    }

    /// Regenerates the mesh and returns the new buffers.
    pub fn rebuild(
        &mut self,
        spline: &BezierSpline,
        profile: &CrossSectionProfile,
    ) -> Result<&MeshBuffers> {
        let buffers = build_with_config(spline, profile, &self.config)?;
        self.buffers = buffers;
        Ok(&self.buffers)
    }

    /// Last successfully built buffers.
    #[inline]
    pub fn buffers(&self) -> &MeshBuffers {
        &self.buffers
    }

    /// Owned copy of the last buffers for hand-off to a renderer.
    pub fn snapshot(&self) -> MeshBuffers {
        self.buffers.clone()
    }
}
