//! # Bezier Spline Model
//!
//! Ordered control-point buffer with per-anchor constraint modes and an
//! optional closing loop.
//!
//! ## Layout
//!
//! ```text
//! open:   A h h A h h A          point_count = 3 * segments + 1
//! looped: A h h A h h A h h      point_count = 3 * segments
//!                          └─ the closing segment ends on anchor 0
//! ```
//!
//! Anchors sit at multiples of 3. Every buffer access that may cross the ends
//! goes through [`BezierSpline::loop_index`] or the internal `wrap` helper, so
//! open and looped behavior differ in one place only.
//!
//! Edits are split into two phases: the write itself, then
//! [`BezierSpline::enforce_mode`] for the affected anchor. The setters run
//! both phases; `enforce_mode` is public so the cascade can be driven and
//! tested on its own.

mod auto_tangent;
mod constraints;
mod editing;


use crate::bezier;
use crate::error::{Result, SplineError};
use crate::mode::ControlPointMode;
use config::constants::{DEFAULT_LENGTH_PRECISION, EPSILON_TOLERANCE};
use glam::{DAffine3, DVec3};
use log::warn;

/// Editable piecewise-cubic Bezier spline.
///
/// # Example
///
/// ```rust
/// use bezier_spline::BezierSpline;
/// use glam::DVec3;
///
/// let mut spline = BezierSpline::default();
/// assert_eq!(spline.segment_count(), 1);
///
/// spline.add_segment_to(DVec3::new(7.0, 2.0, 0.0));
/// assert_eq!(spline.segment_count(), 2);
/// assert!(spline.point(1.0).abs_diff_eq(DVec3::new(7.0, 2.0, 0.0), 1e-12));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BezierSpline {
    /// Anchors and handles, anchors at multiples of 3
    points: Vec<DVec3>,
    /// One mode per anchor
    modes: Vec<ControlPointMode>,
    looped: bool,
    auto_set_control_points: bool,
    /// Local-to-world transform applied by the evaluation queries
    transform: DAffine3,
}

impl Default for BezierSpline {
    /// A single straight segment from `(1,0,0)` to `(4,0,0)` with both
    /// anchors mirrored.
    fn default() -> Self {
        Self {
            points: vec![
                DVec3::new(1.0, 0.0, 0.0),
                DVec3::new(2.0, 0.0, 0.0),
                DVec3::new(3.0, 0.0, 0.0),
                DVec3::new(4.0, 0.0, 0.0),
            ],
            modes: vec![ControlPointMode::Mirrored; 2],
            looped: false,
            auto_set_control_points: false,
            transform: DAffine3::IDENTITY,
        }
    }
}

impl BezierSpline {
    /// Creates the default single-segment spline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a spline from externally persisted buffers.
    ///
    /// # Errors
    ///
    /// Returns [`SplineError::InvalidLayout`] when the point count does not
    /// match the loop flag, the spline is below its minimum size, or the mode
    /// count is not one per anchor.
    pub fn from_parts(
        points: Vec<DVec3>,
        modes: Vec<ControlPointMode>,
        looped: bool,
    ) -> Result<Self> {
        let n = points.len();
        let (remainder, min_points) = if looped { (0, 6) } else { (1, 4) };
        if n % 3 != remainder || n < min_points {
            return Err(SplineError::invalid_layout(format!(
                "{n} points cannot form {} spline",
                if looped { "a looped" } else { "an open" }
            )));
        }
        let anchors = if looped { n / 3 } else { n / 3 + 1 };
        if modes.len() != anchors {
            return Err(SplineError::invalid_layout(format!(
                "expected {anchors} modes, got {}",
                modes.len()
            )));
        }
        Ok(Self {
            points,
            modes,
            looped,
            auto_set_control_points: false,
            transform: DAffine3::IDENTITY,
        })
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    /// Number of stored control points.
    #[inline]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Number of cubic segments.
    #[inline]
    pub fn segment_count(&self) -> usize {
        if self.looped {
            self.points.len() / 3
        } else {
            (self.points.len() - 1) / 3
        }
    }

    /// Number of anchors, equal to the number of stored modes.
    #[inline]
    pub fn anchor_count(&self) -> usize {
        self.modes.len()
    }

    /// True when the last segment closes back onto anchor 0.
    #[inline]
    pub fn is_loop(&self) -> bool {
        self.looped
    }

    /// True when handle positions are derived from neighbouring anchors.
    #[inline]
    pub fn auto_set_control_points(&self) -> bool {
        self.auto_set_control_points
    }

    /// Raw control points in local space.
    #[inline]
    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    /// Per-anchor modes.
    #[inline]
    pub fn modes(&self) -> &[ControlPointMode] {
        &self.modes
    }

    /// Local-to-world transform used by [`point`](Self::point) and
    /// [`velocity`](Self::velocity).
    #[inline]
    pub fn transform(&self) -> DAffine3 {
        self.transform
    }

    /// Replaces the local-to-world transform.
    pub fn set_transform(&mut self, transform: DAffine3) {
        self.transform = transform;
    }

    /// Returns the control point at `index`.
    pub fn control_point(&self, index: usize) -> Result<DVec3> {
        self.check_index(index)?;
        Ok(self.points[index])
    }

    /// Writes a control point.
    ///
    /// Writing an anchor drags both of its handles by the same delta.
    /// Writing a handle moves only that handle. Either way the owning
    /// anchor's mode is then enforced on the opposite handle.
    pub fn set_control_point(&mut self, index: usize, point: DVec3) -> Result<()> {
        self.check_index(index)?;
        if index % 3 == 0 {
            let delta = point - self.points[index];
            for neighbour in [index as isize - 1, index as isize + 1] {
                if let Some(i) = self.wrap(neighbour) {
                    self.points[i] += delta;
                }
            }
        }
        self.points[index] = point;
        self.enforce_at(index);
        Ok(())
    }

    /// The four control points of segment `segment`, in local space.
    pub fn points_in_segment(&self, segment: usize) -> Result<[DVec3; 4]> {
        let count = self.segment_count();
        if segment >= count {
            return Err(SplineError::SegmentOutOfRange { segment, count });
        }
        Ok(self.segment_points(segment))
    }

    // =========================================================================
    // INDEXING
    // =========================================================================

    /// Wraps any integer into `[0, point_count)`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bezier_spline::BezierSpline;
    ///
    /// let spline = BezierSpline::default();
    /// assert_eq!(spline.loop_index(-1), 3);
    /// assert_eq!(spline.loop_index(9), 1);
    /// ```
    #[inline]
    pub fn loop_index(&self, index: isize) -> usize {
        index.rem_euclid(self.points.len() as isize) as usize
    }

    /// Maps a point index to the anchor number owning its mode.
    ///
    /// Handles belong to the nearest anchor; on a loop the handle before the
    /// end wraps to anchor 0.
    #[inline]
    pub fn anchor_of(&self, index: usize) -> usize {
        if self.looped {
            self.loop_index(index as isize + 1) / 3
        } else {
            (index + 1) / 3
        }
    }

    /// Resolves a possibly out-of-range index: wrapped on a loop, `None`
    /// past either end of an open spline.
    #[inline]
    pub(crate) fn wrap(&self, index: isize) -> Option<usize> {
        if self.looped {
            Some(self.loop_index(index))
        } else if index >= 0 && (index as usize) < self.points.len() {
            Some(index as usize)
        } else {
            None
        }
    }

    /// Open-spline end anchors have a single handle and are never enforced.
    #[inline]
    pub(crate) fn is_boundary_anchor(&self, anchor: usize) -> bool {
        !self.looped && (anchor == 0 || anchor + 1 == self.modes.len())
    }

    pub(crate) fn check_index(&self, index: usize) -> Result<()> {
        if index < self.points.len() {
            Ok(())
        } else {
            Err(SplineError::IndexOutOfRange {
                index,
                len: self.points.len(),
            })
        }
    }

    pub(crate) fn check_anchor(&self, index: usize) -> Result<()> {
        self.check_index(index)?;
        if index % 3 == 0 {
            Ok(())
        } else {
            Err(SplineError::NotAnAnchor { index })
        }
    }

    fn segment_points(&self, segment: usize) -> [DVec3; 4] {
        let i = segment * 3;
        [
            self.points[i],
            self.points[i + 1],
            self.points[i + 2],
            self.points[self.loop_index(i as isize + 3)],
        ]
    }

    // =========================================================================
    // EVALUATION
    // =========================================================================

    /// Maps global `t` to `(segment, local_t)`. `t >= 1` lands on the end of
    /// the last segment; NaN is treated as 0.
    pub fn segment_at(&self, t: f64) -> (usize, f64) {
        let count = self.segment_count();
        if t >= 1.0 {
            return (count - 1, 1.0);
        }
        let t = if t.is_nan() { 0.0 } else { t.max(0.0) };
        let scaled = t * count as f64;
        let segment = (scaled.floor() as usize).min(count - 1);
        (segment, scaled - segment as f64)
    }

    /// World-space position at global parameter `t` in `[0, 1]`.
    pub fn point(&self, t: f64) -> DVec3 {
        let (segment, local) = self.segment_at(t);
        let [p0, p1, p2, p3] = self.segment_points(segment);
        self.transform
            .transform_point3(bezier::evaluate(p0, p1, p2, p3, local))
    }

    /// World-space first derivative at global parameter `t`. May be zero
    /// where handles coincide with their anchors.
    pub fn velocity(&self, t: f64) -> DVec3 {
        let (segment, local) = self.segment_at(t);
        let [p0, p1, p2, p3] = self.segment_points(segment);
        self.transform
            .transform_vector3(bezier::first_derivative(p0, p1, p2, p3, local))
    }

    /// Unit tangent at `t`.
    ///
    /// When the velocity is degenerate the direction of the segment chord
    /// (end anchor minus start anchor) is returned instead; when that is
    /// degenerate too the result is `DVec3::ZERO`. Never NaN.
    pub fn direction(&self, t: f64) -> DVec3 {
        if let Some(direction) = normalize_or_none(self.velocity(t)) {
            return direction;
        }
        let (segment, _) = self.segment_at(t);
        let [p0, _, _, p3] = self.segment_points(segment);
        match normalize_or_none(self.transform.transform_vector3(p3 - p0)) {
            Some(chord) => chord,
            None => {
                warn!("spline direction degenerate at t={t} (segment {segment}), using zero");
                DVec3::ZERO
            }
        }
    }

    /// Piecewise-linear arclength estimate from `precision` evenly spaced
    /// samples. Underestimates the true length; returns 0 when fewer than
    /// two samples are requested.
    pub fn approx_length(&self, precision: usize) -> f64 {
        if precision < 2 {
            return 0.0;
        }
        let step = 1.0 / (precision - 1) as f64;
        let mut previous = self.point(0.0);
        let mut length = 0.0;
        for i in 1..precision {
            let current = self.point(i as f64 * step);
            length += previous.distance(current);
            previous = current;
        }
        length
    }

    /// [`approx_length`](Self::approx_length) at
    /// [`DEFAULT_LENGTH_PRECISION`] samples.
    #[inline]
    pub fn approx_length_default(&self) -> f64 {
        self.approx_length(DEFAULT_LENGTH_PRECISION)
    }
}

/// Normalizes `v` unless its length is below [`EPSILON_TOLERANCE`].
#[inline]
pub(crate) fn normalize_or_none(v: DVec3) -> Option<DVec3> {
    let length = v.length();
    if length.is_finite() && length > EPSILON_TOLERANCE {
        Some(v / length)
    } else {
        None
    }
}
