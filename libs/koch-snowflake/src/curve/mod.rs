//! # Koch Curve Generation
//!
//! Recursively replaces a segment with four segments of a third of its
//! length, the middle two forming an equilateral bump. A curve at depth `n`
//! has `4^n + 1` points and always starts and ends at the given endpoints.
//!
//! Two strategies produce identical output:
//!
//! - [`CurveStrategy::Recursive`]: depth-first recursion, guarded by
//!   `stacker` so deep curves grow the stack instead of overflowing it
//! - [`CurveStrategy::WorkStack`]: explicit task stack on the heap

use config::constants::{
    MAX_ITERATIONS, MAX_PREALLOCATED_POINTS, STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES,
};
use serde::{Deserialize, Serialize};
use stacker::maybe_grow;
use tracing::warn;

use crate::error::{SnowflakeError, SnowflakeResult};
use crate::point::{midpoint, unit_normal, Point, PointSequence};

mod work_stack;

/// Which side of an edge the bump is drawn on.
///
/// `Positive` bulges towards the counter-clockwise normal of the edge
/// direction, which is outward for the clockwise winding the snowflake
/// assembler uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Orientation {
    /// Bump on the left of the travel direction (`+1`).
    #[default]
    Positive,
    /// Bump on the right of the travel direction (`-1`).
    Negative,
}

impl Orientation {
    /// Numeric sign applied to the edge normal.
    pub fn sign(self) -> f64 {
        match self {
            Orientation::Positive => 1.0,
            Orientation::Negative => -1.0,
        }
    }
}

impl TryFrom<i32> for Orientation {
    type Error = SnowflakeError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Orientation::Positive),
            -1 => Ok(Orientation::Negative),
            other => Err(SnowflakeError::invalid_argument(
                "orientation",
                format!("must be +1 or -1, got {other}"),
            )),
        }
    }
}

/// How the subdivision is driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CurveStrategy {
    /// Depth-first recursion on the call stack.
    #[default]
    Recursive,
    /// Iterative subdivision with an explicit heap-allocated task stack.
    WorkStack,
}

/// Generates the Koch curve from `start` to `end` by recursion.
///
/// # Errors
///
/// - [`SnowflakeError::InvalidArgument`] for a negative depth, a depth whose
///   point count does not fit in memory addressing, or non-finite endpoints
/// - [`SnowflakeError::DegenerateInput`] when `start == end`
///
/// # Examples
/// ```
/// use koch_snowflake::{generate_curve, Orientation, Point};
///
/// let end = Point::new(3.0, 0.0);
/// let points = generate_curve(Point::ZERO, end, 1, Orientation::Positive).unwrap();
/// assert_eq!(points.len(), 5);
/// assert_eq!(points[1], Point::new(1.0, 0.0));
/// assert!((points[2].y - 0.75f64.sqrt()).abs() < 1e-12);
/// ```
pub fn generate_curve(
    start: Point,
    end: Point,
    depth: i32,
    orientation: Orientation,
) -> SnowflakeResult<PointSequence> {
    generate_curve_with(CurveStrategy::Recursive, start, end, depth, orientation)
}

/// Generates the Koch curve with an explicit work stack instead of recursion.
///
/// Output is identical to [`generate_curve`].
pub fn generate_curve_iterative(
    start: Point,
    end: Point,
    depth: i32,
    orientation: Orientation,
) -> SnowflakeResult<PointSequence> {
    generate_curve_with(CurveStrategy::WorkStack, start, end, depth, orientation)
}

/// Generates the Koch curve using the given strategy.
pub fn generate_curve_with(
    strategy: CurveStrategy,
    start: Point,
    end: Point,
    depth: i32,
    orientation: Orientation,
) -> SnowflakeResult<PointSequence> {
    let (depth, count) = checked_depth(depth)?;
    curve_at_depth(strategy, start, end, depth, count, orientation)
}

/// Generates one curve for a depth already run through [`checked_depth`].
pub(crate) fn curve_at_depth(
    strategy: CurveStrategy,
    start: Point,
    end: Point,
    depth: u32,
    count: usize,
    orientation: Orientation,
) -> SnowflakeResult<PointSequence> {
    validate_edge(start, end)?;

    let mut points = Vec::with_capacity(count.min(MAX_PREALLOCATED_POINTS));
    points.push(start);
    let sign = orientation.sign();
    match strategy {
        CurveStrategy::Recursive => subdivide(start, end, depth, sign, &mut points),
        CurveStrategy::WorkStack => work_stack::subdivide(start, end, depth, sign, &mut points),
    }
    Ok(points)
}

/// Number of points in a single curve of the given depth: `4^depth + 1`.
///
/// # Examples
/// ```
/// use koch_snowflake::curve_point_count;
///
/// assert_eq!(curve_point_count(0).unwrap(), 2);
/// assert_eq!(curve_point_count(3).unwrap(), 65);
/// assert!(curve_point_count(-1).is_err());
/// ```
pub fn curve_point_count(depth: i32) -> SnowflakeResult<usize> {
    checked_depth(depth).map(|(_, count)| count)
}

/// Validates a depth and returns it unsigned alongside its point count.
pub(crate) fn checked_depth(depth: i32) -> SnowflakeResult<(u32, usize)> {
    let unsigned = u32::try_from(depth).map_err(|_| {
        SnowflakeError::invalid_argument("depth", format!("must be non-negative, got {depth}"))
    })?;
    let count = 4usize
        .checked_pow(unsigned)
        .and_then(|n| n.checked_add(1))
        .ok_or_else(|| {
            SnowflakeError::invalid_argument(
                "depth",
                format!("{depth} yields more points than can be addressed"),
            )
        })?;
    if unsigned > MAX_ITERATIONS {
        warn!(depth, count, "curve depth exceeds the practical iteration limit");
    }
    Ok((unsigned, count))
}

fn validate_edge(start: Point, end: Point) -> SnowflakeResult<()> {
    if !start.is_finite() || !end.is_finite() {
        return Err(SnowflakeError::invalid_argument(
            "endpoints",
            format!("coordinates must be finite, got {start} -> {end}"),
        ));
    }
    let length = (end - start).length();
    if length == 0.0 {
        return Err(SnowflakeError::DegenerateInput { start, end });
    }
    // Every curve point lies within `length` of the midpoint, and the
    // midpoint sums both endpoints, so this bound keeps all arithmetic finite.
    let reach = start.abs().max(end.abs()).max_element() + length;
    if !(2.0 * reach).is_finite() {
        return Err(SnowflakeError::invalid_argument(
            "endpoints",
            format!("edge {start} -> {end} is too large to subdivide without overflow"),
        ));
    }
    Ok(())
}

/// Splits one segment into the five points of a Koch bump.
///
/// The apex sits at the height of an equilateral triangle with side
/// `length / 3`, i.e. `length / sqrt(12)` from the midpoint.
pub(crate) fn bump(start: Point, end: Point, sign: f64) -> [Point; 5] {
    let v = end - start;
    let length = v.length();
    let normal = sign * unit_normal(v, length);

    let p2 = start + (1.0 / 3.0) * v;
    let p3 = midpoint(start, end) + normal * (length / 12f64.sqrt());
    let p4 = start + (2.0 / 3.0) * v;
    [start, p2, p3, p4, end]
}

/// Appends every point after `start` of the curve `start`–`end`.
fn subdivide(start: Point, end: Point, depth: u32, sign: f64, out: &mut Vec<Point>) {
    if depth == 0 {
        out.push(end);
        return;
    }
    maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || {
        let points = bump(start, end, sign);
        for pair in points.windows(2) {
            subdivide(pair[0], pair[1], depth - 1, sign, out);
        }
    });
}
