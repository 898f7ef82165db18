//! # Oriented Frames
//!
//! Position plus rotation of one extrusion ring. The rotation maps profile
//! space (x right, y up, z forward) onto the spline tangent.

use config::constants::UP_PARALLEL_THRESHOLD;
use glam::{DMat3, DQuat, DVec2, DVec3};
use log::debug;

/// A point on the spline with the rotation of its ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientedPoint {
    pub position: DVec3,
    pub rotation: DQuat,
}

impl OrientedPoint {
    pub fn new(position: DVec3, rotation: DQuat) -> Self {
        Self { position, rotation }
    }

    /// Frame at `position` looking along `forward`.
    pub fn looking_along(position: DVec3, forward: DVec3, tolerance: f64) -> Self {
        Self::new(position, look_rotation(forward, tolerance))
    }

    /// Profile-space point to world space.
    #[inline]
    pub fn local_to_world_pos(&self, local: DVec2) -> DVec3 {
        self.position + self.local_to_world_vec(local)
    }

    /// Profile-space direction to world space.
    #[inline]
    pub fn local_to_world_vec(&self, local: DVec2) -> DVec3 {
        self.rotation * local.extend(0.0)
    }
}

/// Rotation whose local +Z is `forward` and whose local +Y leans towards
/// world up.
///
/// World up is +Y, replaced by +Z when `forward` is within
/// [`UP_PARALLEL_THRESHOLD`] of it. A `forward` shorter than `tolerance`
/// yields the identity.
///
/// # Example
///
/// ```rust
/// use spline_extrude::frame::look_rotation;
/// use glam::DVec3;
///
/// let rotation = look_rotation(DVec3::X, 1e-9);
/// assert!((rotation * DVec3::Z).abs_diff_eq(DVec3::X, 1e-12));
/// assert!((rotation * DVec3::Y).abs_diff_eq(DVec3::Y, 1e-12));
/// ```
pub fn look_rotation(forward: DVec3, tolerance: f64) -> DQuat {
    let length = forward.length();
    if !length.is_finite() || length <= tolerance {
        debug!("zero forward vector, using identity rotation");
        return DQuat::IDENTITY;
    }
    let forward = forward / length;
    let up = if forward.dot(DVec3::Y).abs() > UP_PARALLEL_THRESHOLD {
        DVec3::Z
    } else {
        DVec3::Y
    };
    let right = up.cross(forward).normalize();
    let up = forward.cross(right);
    DQuat::from_mat3(&DMat3::from_cols(right, up, forward))
}
