//! Per-anchor mode storage and enforcement.

use super::{normalize_or_none, BezierSpline};
use crate::error::Result;
use crate::mode::ControlPointMode;
use log::debug;

impl BezierSpline {
    /// Mode of the anchor owning point `index`.
    pub fn control_point_mode(&self, index: usize) -> Result<ControlPointMode> {
        self.check_index(index)?;
        Ok(self.modes[self.anchor_of(index)])
    }

    /// Sets the mode of the anchor owning point `index`, then enforces it
    /// treating `index` as the edited point.
    ///
    /// On a loop the first and last anchors are the same stored anchor, so
    /// the value is shared by construction.
    pub fn set_control_point_mode(&mut self, index: usize, mode: ControlPointMode) -> Result<()> {
        self.check_index(index)?;
        let anchor = self.anchor_of(index);
        self.modes[anchor] = mode;
        self.enforce_at(index);
        Ok(())
    }

    /// Re-establishes the constraint of the anchor owning point `index`.
    ///
    /// The handle at `index` is kept fixed and the opposite handle is
    /// recomputed. When `index` is the anchor itself the previous handle is
    /// the fixed one. Free anchors and open-spline end anchors are left
    /// untouched.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bezier_spline::{BezierSpline, ControlPointMode};
    /// use glam::DVec3;
    ///
    /// let mut spline = BezierSpline::default();
    /// spline.add_segment_to(DVec3::new(7.0, 0.0, 0.0));
    /// spline.set_control_point_mode(3, ControlPointMode::Free).unwrap();
    /// spline.set_control_point(2, DVec3::new(3.0, 1.0, 0.0)).unwrap();
    ///
    /// spline.set_control_point_mode(3, ControlPointMode::Mirrored).unwrap();
    /// spline.enforce_mode(2).unwrap();
    /// assert!(spline.points()[4].abs_diff_eq(DVec3::new(5.0, -1.0, 0.0), 1e-12));
    /// ```
    pub fn enforce_mode(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        self.enforce_at(index);
        Ok(())
    }

    pub(crate) fn enforce_at(&mut self, index: usize) {
        let anchor = self.anchor_of(index);
        let mode = self.modes[anchor];
        if !mode.is_constrained() || self.is_boundary_anchor(anchor) {
            return;
        }

        let anchor_index = anchor * 3;
        let previous = self.loop_index(anchor_index as isize - 1);
        let next = self.loop_index(anchor_index as isize + 1);
        let (fixed, enforced) = if index == anchor_index || index == previous {
            (previous, next)
        } else {
            (next, previous)
        };

        let middle = self.points[anchor_index];
        let mut tangent = middle - self.points[fixed];
        if mode == ControlPointMode::Aligned {
            let distance = middle.distance(self.points[enforced]);
            match normalize_or_none(tangent) {
                Some(direction) => tangent = direction * distance,
                None => {
                    debug!("aligned handle at {fixed} sits on its anchor, leaving {enforced}");
                    return;
                }
            }
        }
        self.points[enforced] = middle + tangent;
    }
}
