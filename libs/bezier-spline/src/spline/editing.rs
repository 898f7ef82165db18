//! Structural edits: loop toggling, appending, splitting, deleting and the
//! auto-tangent aware move path.

use super::{normalize_or_none, BezierSpline};
use crate::error::{Result, SplineError};
use config::constants::{DEFAULT_SEGMENT_STEP, MIN_LOOP_SEGMENTS, MIN_OPEN_SEGMENTS};
use glam::DVec3;
use log::debug;

impl BezierSpline {
    /// Opens or closes the spline.
    ///
    /// Closing appends two handles (reflections of the last in-handle and the
    /// first out-handle) so the closing segment runs from the last anchor back
    /// to anchor 0. Opening removes them again.
    pub fn set_loop(&mut self, looped: bool) {
        if self.looped == looped {
            return;
        }
        if looped {
            let n = self.points.len();
            let last_anchor = n - 1;
            let closing_out = 2.0 * self.points[last_anchor] - self.points[last_anchor - 1];
            let closing_in = 2.0 * self.points[0] - self.points[1];
            self.points.push(closing_out);
            self.points.push(closing_in);
            self.looped = true;

            self.enforce_at(last_anchor);
            self.enforce_at(0);
            if self.auto_set_control_points {
                self.auto_set_anchor(0);
                self.auto_set_anchor(last_anchor);
            }
        } else {
            self.points.truncate(self.points.len() - 2);
            self.looped = false;
            if self.auto_set_control_points {
                self.auto_set_start_and_end_controls();
            }
        }
        debug!(
            "spline {} with {} segments",
            if looped { "closed" } else { "opened" },
            self.segment_count()
        );
    }

    /// Enables or disables automatic handle placement. Enabling recomputes
    /// every handle.
    pub fn set_auto_set_control_points(&mut self, enabled: bool) {
        if self.auto_set_control_points == enabled {
            return;
        }
        self.auto_set_control_points = enabled;
        if enabled {
            self.auto_set_all_control_points();
        }
    }

    /// Appends a segment stepping along +X from the current last anchor.
    ///
    /// The out-handle, in-handle and anchor are placed one, two and three
    /// default steps past the last anchor; enforcing the last anchor's mode
    /// then re-places the out-handle. The in-handle keeps its step position.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bezier_spline::BezierSpline;
    /// use glam::DVec3;
    ///
    /// let mut spline = BezierSpline::default();
    /// spline.set_control_point(2, DVec3::new(3.0, 1.0, 0.0))?;
    /// spline.add_segment();
    ///
    /// // Mirrored through anchor 3, in-handle left on the step.
    /// assert_eq!(spline.points()[4], DVec3::new(5.0, -1.0, 0.0));
    /// assert_eq!(spline.points()[5], DVec3::new(6.0, 0.0, 0.0));
    /// # Ok::<(), bezier_spline::SplineError>(())
    /// ```
    pub fn add_segment(&mut self) {
        let origin = self.points[self.last_anchor_index()];
        let step = DVec3::X * DEFAULT_SEGMENT_STEP;
        self.append_segment(origin + step, origin + step * 2.0, origin + step * 3.0);
    }

    /// Appends a segment ending at `anchor`.
    ///
    /// The new out-handle reflects the previous in-handle through the last
    /// anchor, the new in-handle is the midpoint between that out-handle and
    /// `anchor`, and the new anchor inherits the previous anchor's mode. On a
    /// loop the segment is inserted ahead of the closing segment so the ring
    /// still ends on anchor 0.
    pub fn add_segment_to(&mut self, anchor: DVec3) {
        let last_anchor = self.last_anchor_index();
        let out_handle = if self.looped {
            self.points[last_anchor + 1]
        } else {
            2.0 * self.points[last_anchor] - self.points[last_anchor - 1]
        };
        let in_handle = (out_handle + anchor) * 0.5;
        self.append_segment(out_handle, in_handle, anchor);
    }

    /// Inserts one segment after the last anchor. On a loop the existing
    /// out-handle of the last anchor is kept and `out_handle` is unused.
    fn append_segment(&mut self, out_handle: DVec3, in_handle: DVec3, anchor: DVec3) {
        let last_anchor = self.last_anchor_index();
        let mode = self.modes[last_anchor / 3];
        let new_anchor;

        if self.looped {
            let n = self.points.len();
            let next_out = 2.0 * anchor - in_handle;
            self.points
                .splice(n - 1..n - 1, [in_handle, anchor, next_out]);
            new_anchor = n;
            self.modes.push(mode);
            self.enforce_at(new_anchor);
            self.enforce_at(0);
        } else {
            self.points.extend([out_handle, in_handle, anchor]);
            new_anchor = self.points.len() - 1;
            self.modes.push(mode);
            self.enforce_at(last_anchor);
        }

        if self.auto_set_control_points {
            self.auto_set_affected(new_anchor);
        }
        debug!("appended segment, {} segments", self.segment_count());
    }

    /// Inserts a new anchor at `anchor` inside segment `segment_index`,
    /// turning it into two segments.
    ///
    /// The new handles start on the anchor and are then placed by the
    /// auto-tangent rule. The new anchor takes the mode of the segment's
    /// start anchor.
    pub fn split_segment(&mut self, anchor: DVec3, segment_index: usize) -> Result<()> {
        let count = self.segment_count();
        if segment_index >= count {
            return Err(SplineError::SegmentOutOfRange {
                segment: segment_index,
                count,
            });
        }

        let insert_at = segment_index * 3 + 2;
        self.points
            .splice(insert_at..insert_at, [anchor, anchor, anchor]);
        let mode = self.modes[segment_index];
        self.modes.insert(segment_index + 1, mode);

        let new_anchor = insert_at + 1;
        if self.auto_set_control_points {
            self.auto_set_affected(new_anchor);
        } else {
            self.auto_set_anchor(new_anchor);
            self.enforce_at(new_anchor);
        }
        debug!("split segment {segment_index}, {} segments", self.segment_count());
        Ok(())
    }

    /// Removes the anchor at `anchor_index` together with its two handles.
    ///
    /// Returns `Ok(false)` without touching the buffers when the spline is
    /// already at its minimum size (one segment open, two looped).
    pub fn delete_segment(&mut self, anchor_index: usize) -> Result<bool> {
        self.check_anchor(anchor_index)?;
        let floor = if self.looped {
            MIN_LOOP_SEGMENTS
        } else {
            MIN_OPEN_SEGMENTS
        };
        if self.segment_count() <= floor {
            debug!(
                "refusing to delete anchor {anchor_index}: {} segments is the minimum",
                self.segment_count()
            );
            return Ok(false);
        }

        let n = self.points.len();
        if anchor_index == 0 {
            if self.looped {
                // Drop the closing in-handle and the first joint, then rotate
                // the next anchor's in-handle round to close the ring.
                self.points.truncate(n - 1);
                self.points.drain(0..2);
                self.points.rotate_left(1);
            } else {
                self.points.drain(0..3);
            }
        } else if !self.looped && anchor_index == n - 1 {
            self.points.drain(n - 3..n);
        } else {
            self.points.drain(anchor_index - 1..=anchor_index + 1);
        }
        self.modes.remove(anchor_index / 3);

        if self.auto_set_control_points {
            self.auto_set_all_control_points();
        }
        debug!("deleted anchor {anchor_index}, {} segments", self.segment_count());
        Ok(true)
    }

    /// Moves a point using the auto-tangent aware rules.
    ///
    /// Anchors drag their handles along, or trigger an auto-tangent
    /// recompute when automatic placement is on. Handles are locked while
    /// automatic placement is on; otherwise the opposite handle keeps its
    /// distance from the shared anchor and points away from the new handle
    /// position.
    pub fn move_point(&mut self, index: usize, position: DVec3) -> Result<()> {
        self.check_index(index)?;
        let is_anchor = index % 3 == 0;
        if !is_anchor && self.auto_set_control_points {
            debug!("handle {index} is driven by auto tangents, ignoring move");
            return Ok(());
        }

        let delta = position - self.points[index];
        self.points[index] = position;

        if self.auto_set_control_points {
            self.auto_set_affected(index);
        } else if is_anchor {
            for neighbour in [index as isize + 1, index as isize - 1] {
                if let Some(i) = self.wrap(neighbour) {
                    self.points[i] += delta;
                }
            }
        } else {
            let next_is_anchor = (index + 1) % 3 == 0;
            let (anchor, opposite) = if next_is_anchor {
                (index as isize + 1, index as isize + 2)
            } else {
                (index as isize - 1, index as isize - 2)
            };
            if let (Some(anchor), Some(opposite)) = (self.wrap(anchor), self.wrap(opposite)) {
                let middle = self.points[anchor];
                let distance = middle.distance(self.points[opposite]);
                if let Some(direction) = normalize_or_none(middle - position) {
                    self.points[opposite] = middle + direction * distance;
                }
            }
        }
        Ok(())
    }

    fn last_anchor_index(&self) -> usize {
        if self.looped {
            self.points.len() - 3
        } else {
            self.points.len() - 1
        }
    }
}
