//! # Cross-Section Profiles
//!
//! A profile is the 2D outline swept along a spline: vertices with their
//! outward normals and U texture coordinate, plus line indices read in pairs
//! as edges. Profiles are validated on construction and immutable after.
//!
//! Hard corners are expressed by duplicating a vertex with different
//! normals, the way [`CrossSectionProfile::rectangle`] does.

#[cfg(test)]
mod tests;

use crate::error::{ExtrudeError, Result};
use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// One vertex of a cross-section outline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileVertex {
    /// Position in profile space (x right, y up)
    pub point: DVec2,
    /// Outward normal in profile space
    pub normal: DVec2,
    /// Texture U coordinate
    pub u: f64,
}

impl ProfileVertex {
    /// Creates a vertex.
    pub fn new(point: DVec2, normal: DVec2, u: f64) -> Self {
        Self { point, normal, u }
    }
}

/// Immutable 2D cross-section swept by the extrusion builder.
///
/// # Example
///
/// ```rust
/// use spline_extrude::profile::{CrossSectionProfile, ProfileVertex};
/// use glam::DVec2;
///
/// let flat = CrossSectionProfile::new(
///     vec![
///         ProfileVertex::new(DVec2::new(-1.0, 0.0), DVec2::Y, 0.0),
///         ProfileVertex::new(DVec2::new(1.0, 0.0), DVec2::Y, 1.0),
///     ],
///     vec![0, 1],
/// )?;
/// assert_eq!(flat.perimeter(), 2.0);
/// # Ok::<(), spline_extrude::ExtrudeError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawProfile")]
pub struct CrossSectionProfile {
    vertices: Vec<ProfileVertex>,
    line_indices: Vec<usize>,
}

/// Unvalidated wire form; deserialization goes through
/// [`CrossSectionProfile::new`].
#[derive(Deserialize)]
struct RawProfile {
    vertices: Vec<ProfileVertex>,
    line_indices: Vec<usize>,
}

impl TryFrom<RawProfile> for CrossSectionProfile {
    type Error = ExtrudeError;

    fn try_from(raw: RawProfile) -> Result<Self> {
        Self::new(raw.vertices, raw.line_indices)
    }
}

impl CrossSectionProfile {
    /// Creates a profile from vertices and edge index pairs.
    ///
    /// # Errors
    ///
    /// Returns [`ExtrudeError::InvalidProfile`] when `line_indices` has an
    /// odd length or references a vertex that does not exist.
    pub fn new(vertices: Vec<ProfileVertex>, line_indices: Vec<usize>) -> Result<Self> {
        if line_indices.len() % 2 != 0 {
            return Err(ExtrudeError::invalid_profile(format!(
                "line index count {} is not a whole number of edges",
                line_indices.len()
            )));
        }
        if let Some(&index) = line_indices.iter().find(|&&i| i >= vertices.len()) {
            return Err(ExtrudeError::invalid_profile(format!(
                "line index {index} out of range ({} vertices)",
                vertices.len()
            )));
        }
        Ok(Self {
            vertices,
            line_indices,
        })
    }

    /// Axis-aligned rectangle centered on the profile origin.
    ///
    /// Each side carries its own pair of vertices so normals stay flat;
    /// U runs 0..1 counter-clockwise from the bottom-left corner.
    pub fn rectangle(width: f64, height: f64) -> Result<Self> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(ExtrudeError::invalid_profile(format!(
                "rectangle needs positive size, got {width} x {height}"
            )));
        }
        let (hw, hh) = (width / 2.0, height / 2.0);
        let corners = [
            DVec2::new(-hw, -hh),
            DVec2::new(hw, -hh),
            DVec2::new(hw, hh),
            DVec2::new(-hw, hh),
        ];
        let normals = [DVec2::NEG_Y, DVec2::X, DVec2::Y, DVec2::NEG_X];
        let perimeter = 2.0 * (width + height);

        let mut vertices = Vec::with_capacity(8);
        let mut travelled = 0.0;
        for side in 0..4 {
            let start = corners[side];
            let end = corners[(side + 1) % 4];
            vertices.push(ProfileVertex::new(start, normals[side], travelled / perimeter));
            travelled += start.distance(end);
            vertices.push(ProfileVertex::new(end, normals[side], travelled / perimeter));
        }
        Self::new(vertices, (0..8).collect())
    }

    /// Circle of `radius` approximated by `segments` edges.
    ///
    /// The seam vertex is duplicated so U reaches exactly 1.
    pub fn circle(radius: f64, segments: u32) -> Result<Self> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(ExtrudeError::invalid_profile(format!(
                "circle radius must be positive, got {radius}"
            )));
        }
        if segments < 3 {
            return Err(ExtrudeError::invalid_profile(format!(
                "circle needs at least 3 segments, got {segments}"
            )));
        }

        let vertices = (0..=segments)
            .map(|i| {
                let u = i as f64 / segments as f64;
                let (sin, cos) = (u * TAU).sin_cos();
                let normal = DVec2::new(cos, sin);
                ProfileVertex::new(normal * radius, normal, u)
            })
            .collect();
        let line_indices = (0..segments as usize).flat_map(|i| [i, i + 1]).collect();
        Self::new(vertices, line_indices)
    }

    /// Profile vertices.
    #[inline]
    pub fn vertices(&self) -> &[ProfileVertex] {
        &self.vertices
    }

    /// Flat edge index list.
    #[inline]
    pub fn line_indices(&self) -> &[usize] {
        &self.line_indices
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.line_indices.len() / 2
    }

    /// Edges as `(a, b)` vertex index pairs.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.line_indices
            .chunks_exact(2)
            .map(|pair| (pair[0], pair[1]))
    }

    /// Sum of edge lengths. Scales the V texture coordinate of the extruded
    /// mesh.
    pub fn perimeter(&self) -> f64 {
        self.edges()
            .map(|(a, b)| self.vertices[a].point.distance(self.vertices[b].point))
            .sum()
    }
}
