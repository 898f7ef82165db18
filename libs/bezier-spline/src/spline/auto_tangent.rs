//! Automatic handle placement from neighbouring anchors.
//!
//! Each anchor's handles lie on the line through the anchor whose direction
//! bisects the directions to the previous and next anchors (Catmull-Rom
//! style). Each handle sits half-way to its respective neighbour.

use super::{normalize_or_none, BezierSpline};
use crate::error::Result;
use glam::DVec3;
use log::debug;

impl BezierSpline {
    /// Places both handles of the anchor at `anchor_index`.
    pub fn auto_set_anchor_control_points(&mut self, anchor_index: usize) -> Result<()> {
        self.check_anchor(anchor_index)?;
        self.auto_set_anchor(anchor_index);
        Ok(())
    }

    /// Places every handle, then fixes the open-spline end handles.
    pub fn auto_set_all_control_points(&mut self) {
        for anchor_index in (0..self.points.len()).step_by(3) {
            self.auto_set_anchor(anchor_index);
        }
        self.auto_set_start_and_end_controls();
    }

    /// On an open spline, moves the first and last handles to the midpoint
    /// between their end anchor and the neighbouring handle. No-op on a loop.
    pub fn auto_set_start_and_end_controls(&mut self) {
        if self.looped {
            return;
        }
        let n = self.points.len();
        self.points[1] = (self.points[0] + self.points[2]) * 0.5;
        self.points[n - 2] = (self.points[n - 1] + self.points[n - 3]) * 0.5;
    }

    /// Re-places the handles of `anchor_index` and its two neighbouring
    /// anchors.
    pub(crate) fn auto_set_affected(&mut self, anchor_index: usize) {
        let anchor_index = anchor_index as isize;
        for neighbour in [anchor_index - 3, anchor_index, anchor_index + 3] {
            if let Some(i) = self.wrap(neighbour) {
                self.auto_set_anchor(i);
            }
        }
        self.auto_set_start_and_end_controls();
    }

    pub(crate) fn auto_set_anchor(&mut self, anchor_index: usize) {
        let anchor = self.points[anchor_index];
        let signed = anchor_index as isize;
        let mut direction = DVec3::ZERO;
        let mut distances = [0.0; 2];

        if let Some(previous) = self.wrap(signed - 3) {
            let offset = self.points[previous] - anchor;
            direction += offset.normalize_or_zero();
            distances[0] = offset.length();
        }
        if let Some(next) = self.wrap(signed + 3) {
            let offset = self.points[next] - anchor;
            direction -= offset.normalize_or_zero();
            distances[1] = -offset.length();
        }

        let Some(direction) = normalize_or_none(direction) else {
            debug!("no tangent direction at anchor {anchor_index}, handles left in place");
            return;
        };

        for (slot, handle) in [signed - 1, signed + 1].into_iter().enumerate() {
            if let Some(i) = self.wrap(handle) {
                self.points[i] = anchor + direction * distances[slot] * 0.5;
            }
        }
    }
}
