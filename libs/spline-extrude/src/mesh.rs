//! # Mesh Buffers
//!
//! Flat triangle-mesh buffers produced by the extrusion builder.

use glam::{DVec2, DVec3};
use serde::Serialize;

/// Per-vertex positions, normals and UVs plus triangle indices.
///
/// The three attribute vectors always have the same length. Geometry stays
/// f64; the `*_f32` exports are for GPU upload.
///
/// # Example
///
/// ```rust
/// use spline_extrude::MeshBuffers;
/// use glam::{DVec2, DVec3};
///
/// let mut mesh = MeshBuffers::new();
/// mesh.push_vertex(DVec3::ZERO, DVec3::Z, DVec2::ZERO);
/// mesh.push_vertex(DVec3::X, DVec3::Z, DVec2::X);
/// mesh.push_vertex(DVec3::Y, DVec3::Z, DVec2::Y);
/// mesh.push_triangle(0, 1, 2);
/// assert!(mesh.validate());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MeshBuffers {
    positions: Vec<DVec3>,
    normals: Vec<DVec3>,
    uvs: Vec<DVec2>,
    triangles: Vec<[u32; 3]>,
}

impl MeshBuffers {
    /// Creates empty buffers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates buffers with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertex_count),
            normals: Vec::with_capacity(vertex_count),
            uvs: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn push_vertex(&mut self, position: DVec3, normal: DVec3, uv: DVec2) -> u32 {
        let index = self.positions.len() as u32;
        self.positions.push(position);
        self.normals.push(normal);
        self.uvs.push(uv);
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn push_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    #[inline]
    pub fn positions(&self) -> &[DVec3] {
        &self.positions
    }

    #[inline]
    pub fn normals(&self) -> &[DVec3] {
        &self.normals
    }

    #[inline]
    pub fn uvs(&self) -> &[DVec2] {
        &self.uvs
    }

    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners, both zero for empty buffers.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some((first, rest)) = self.positions.split_first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };
        rest.iter()
            .fold((*first, *first), |(min, max), p| (min.min(*p), max.max(*p)))
    }

    /// Checks that attribute lengths agree and every triangle references
    /// three distinct, existing vertices.
    pub fn validate(&self) -> bool {
        let vertex_count = self.positions.len();
        if self.normals.len() != vertex_count || self.uvs.len() != vertex_count {
            return false;
        }
        self.triangles.iter().all(|tri| {
            tri.iter().all(|&i| (i as usize) < vertex_count)
                && tri[0] != tri[1]
                && tri[1] != tri[2]
                && tri[0] != tri[2]
        })
    }

    /// Flattened [x, y, z, ...] positions.
    pub fn positions_f32(&self) -> Vec<f32> {
        flatten3(&self.positions)
    }

    /// Flattened [x, y, z, ...] normals.
    pub fn normals_f32(&self) -> Vec<f32> {
        flatten3(&self.normals)
    }

    /// Flattened [u, v, ...] texture coordinates.
    pub fn uvs_f32(&self) -> Vec<f32> {
        self.uvs
            .iter()
            .flat_map(|uv| [uv.x as f32, uv.y as f32])
            .collect()
    }

    /// Flattened [i0, i1, i2, ...] triangle indices.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }
}

fn flatten3(values: &[DVec3]) -> Vec<f32> {
    values
        .iter()
        .flat_map(|v| [v.x as f32, v.y as f32, v.z as f32])
        .collect()
}
