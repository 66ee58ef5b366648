//! 2D point definitions for the fractal generator.
//!
//! Provides the `Point` alias for `glam::DVec2` and the handful of vector
//! helpers the subdivision needs.

pub use glam::DVec2 as Point;

/// Ordered polyline; adjacent points are joined by straight segments.
pub type PointSequence = Vec<Point>;

/// Midpoint of the segment `a`–`b`.
///
/// # Examples
/// ```
/// use koch_snowflake::point::{midpoint, Point};
///
/// let m = midpoint(Point::new(0.0, 0.0), Point::new(3.0, 1.0));
/// assert_eq!(m, Point::new(1.5, 0.5));
/// ```
pub fn midpoint(a: Point, b: Point) -> Point {
    0.5 * (a + b)
}

/// Unit vector rotated 90° counter-clockwise from `v`, given its length.
///
/// `length` must be non-zero; callers reject degenerate edges first.
pub fn unit_normal(v: Point, length: f64) -> Point {
    v.perp() / length
}

/// Mirrors `p` across the infinite line through `a` and `b`.
#[cfg(test)]
pub(crate) fn reflect_across(p: Point, a: Point, b: Point) -> Point {
    let axis = (b - a).normalize();
    let rel = p - a;
    let along = axis * rel.dot(axis);
    a + 2.0 * along - rel
}
