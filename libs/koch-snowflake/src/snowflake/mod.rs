//! # Snowflake Assembly
//!
//! Builds the equilateral base triangle and joins one Koch curve per edge
//! into a closed outline. Edges are traversed origin → apex →
//! `(size, 0)` → origin, so [`Orientation::Positive`] bulges outward.
//!
//! Shared corners are not deduplicated: each edge contributes its full
//! `4^depth + 1` points, giving `3 * (4^depth + 1)` points in total.

use config::constants::{MAX_PREALLOCATED_POINTS, PARALLEL_EDGE_DEPTH};
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::curve::{checked_depth, curve_at_depth, CurveStrategy, Orientation};
use crate::error::{SnowflakeError, SnowflakeResult};
use crate::point::{Point, PointSequence};

/// Height of an equilateral triangle with side `size`.
///
/// # Examples
/// ```
/// use koch_snowflake::triangle_height;
///
/// assert!((triangle_height(2.0) - 3f64.sqrt()).abs() < 1e-12);
/// ```
pub fn triangle_height(size: f64) -> f64 {
    (3.0 / 4.0 * size.powi(2)).sqrt()
}

/// Equilateral base triangle resting on the x axis with a corner at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// Top corner `(size / 2, height)`.
    pub apex: Point,
    /// Corner at `(size, 0)`.
    pub bottom_right: Point,
    /// Corner at the origin.
    pub bottom_left: Point,
}

impl Triangle {
    /// Builds the base triangle for a snowflake of side `size`.
    ///
    /// # Errors
    ///
    /// [`SnowflakeError::InvalidArgument`] when `size` is not a positive,
    /// finite number or its square overflows.
    pub fn equilateral(size: f64) -> SnowflakeResult<Self> {
        validate_size(size)?;
        Ok(Self {
            apex: Point::new(size / 2.0, triangle_height(size)),
            bottom_right: Point::new(size, 0.0),
            bottom_left: Point::ZERO,
        })
    }

    /// Vertical distance from the base to the apex.
    pub fn height(&self) -> f64 {
        self.apex.y - self.bottom_left.y
    }

    /// The three edges in traversal order.
    pub fn edges(&self) -> [(Point, Point); 3] {
        [
            (self.bottom_left, self.apex),
            (self.apex, self.bottom_right),
            (self.bottom_right, self.bottom_left),
        ]
    }
}

pub(crate) fn validate_size(size: f64) -> SnowflakeResult<()> {
    if !size.is_finite() || size <= 0.0 {
        return Err(SnowflakeError::invalid_argument(
            "size",
            format!("must be positive and finite, got {size}"),
        ));
    }
    // Edge lengths and the triangle height are computed from `size^2`.
    if !size.powi(2).is_finite() {
        return Err(SnowflakeError::invalid_argument(
            "size",
            format!("{size} is too large: its square overflows"),
        ));
    }
    Ok(())
}

/// Generates the closed Koch snowflake outline.
///
/// # Examples
/// ```
/// use koch_snowflake::generate_snowflake;
///
/// let outline = generate_snowflake(100.0, 0).unwrap();
/// assert_eq!(outline.len(), 6);
/// assert_eq!(outline.first(), outline.last());
/// ```
pub fn generate_snowflake(size: f64, depth: i32) -> SnowflakeResult<PointSequence> {
    generate_snowflake_with(size, depth, Orientation::Positive, CurveStrategy::Recursive)
}

/// Generates the snowflake outline with explicit orientation and strategy.
///
/// Edges run on the rayon pool from [`PARALLEL_EDGE_DEPTH`] upward; the
/// output order is the same either way.
pub fn generate_snowflake_with(
    size: f64,
    depth: i32,
    orientation: Orientation,
    strategy: CurveStrategy,
) -> SnowflakeResult<PointSequence> {
    let triangle = Triangle::equilateral(size)?;
    let (levels, per_edge) = checked_depth(depth)?;
    let edges = triangle.edges();

    let edge_curve = |&(start, end): &(Point, Point)| {
        trace!(?start, ?end, depth, "generating snowflake edge");
        curve_at_depth(strategy, start, end, levels, per_edge, orientation)
    };
    let curves: Vec<PointSequence> = if levels >= PARALLEL_EDGE_DEPTH {
        edges[..].par_iter().map(edge_curve).collect::<SnowflakeResult<_>>()?
    } else {
        edges.iter().map(edge_curve).collect::<SnowflakeResult<_>>()?
    };

    // The first curve becomes the output buffer; the others are dropped as
    // soon as they are copied in.
    let mut curves = curves.into_iter();
    let mut outline = curves.next().unwrap_or_default();
    outline.reserve(per_edge.saturating_mul(2).min(MAX_PREALLOCATED_POINTS));
    for curve in curves {
        outline.extend(curve);
    }
    debug!(size, depth, points = outline.len(), "assembled snowflake outline");
    Ok(outline)
}

#[cfg(test)]
mod tests;
