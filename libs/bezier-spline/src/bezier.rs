//! # Bezier Segment Math
//!
//! Bernstein-basis evaluation of single Bezier segments. Pure functions, no
//! allocation and no failure modes.

use glam::DVec3;

/// Evaluates the cubic Bezier `p0..p3` at `t`, clamped to `[0, 1]`.
///
/// # Example
///
/// ```rust
/// use bezier_spline::bezier::evaluate;
/// use glam::DVec3;
///
/// let p = evaluate(DVec3::ZERO, DVec3::X, DVec3::X * 2.0, DVec3::X * 3.0, 0.5);
/// assert!((p.x - 1.5).abs() < 1e-12);
/// ```
#[inline]
pub fn evaluate(p0: DVec3, p1: DVec3, p2: DVec3, p3: DVec3, t: f64) -> DVec3 {
    let t = t.clamp(0.0, 1.0);
    let one_minus_t = 1.0 - t;
    one_minus_t * one_minus_t * one_minus_t * p0
        + 3.0 * one_minus_t * one_minus_t * t * p1
        + 3.0 * one_minus_t * t * t * p2
        + t * t * t * p3
}

/// First derivative of the cubic Bezier `p0..p3` at `t`.
///
/// The result is not normalized and `t` is not clamped; callers normalize
/// when they need a direction.
#[inline]
pub fn first_derivative(p0: DVec3, p1: DVec3, p2: DVec3, p3: DVec3, t: f64) -> DVec3 {
    let one_minus_t = 1.0 - t;
    3.0 * one_minus_t * one_minus_t * (p1 - p0)
        + 6.0 * one_minus_t * t * (p2 - p1)
        + 3.0 * t * t * (p3 - p2)
}

/// Evaluates the quadratic Bezier `p0..p2` at `t`, clamped to `[0, 1]`.
#[inline]
pub fn evaluate_quadratic(p0: DVec3, p1: DVec3, p2: DVec3, t: f64) -> DVec3 {
    let t = t.clamp(0.0, 1.0);
    let one_minus_t = 1.0 - t;
    one_minus_t * one_minus_t * p0 + 2.0 * one_minus_t * t * p1 + t * t * p2
}

/// First derivative of the quadratic Bezier `p0..p2` at `t`.
#[inline]
pub fn quadratic_first_derivative(p0: DVec3, p1: DVec3, p2: DVec3, t: f64) -> DVec3 {
    2.0 * (1.0 - t) * (p1 - p0) + 2.0 * t * (p2 - p1)
}
