//! # Hanging Hole Placement
//!
//! Positions the hanging hole on the symmetry axis below the apex. By the
//! intercept theorem the half-width of the triangle at depth `d` below the
//! apex is `d * (size / 2) / height`; the hole centre is placed where that
//! half-width equals `hole_radius + hole_clearance`.
//!
//! Only the 2D placement is computed here. Cutting the hole is left to the
//! modeling collaborator.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{SnowflakeError, SnowflakeResult};
use crate::point::Point;
use crate::snowflake::Triangle;

/// Centre and radius of the hanging hole in snowflake coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HolePlacement {
    /// Hole centre on the vertical symmetry axis.
    pub center: Point,
    /// Hole radius.
    pub radius: f64,
}

/// Computes where the hanging hole goes for a snowflake of side `size`.
///
/// # Errors
///
/// [`SnowflakeError::InvalidArgument`] when a length is not finite, when
/// `size` or `hole_radius` is not positive, when `hole_clearance` is
/// negative, or when the hole would not fit above the base.
///
/// # Examples
/// ```
/// use koch_snowflake::hole_placement;
///
/// let hole = hole_placement(100.0, 1.0, 1.2).unwrap();
/// assert_eq!(hole.center.x, 50.0);
/// assert!((hole.center.y - 82.792).abs() < 1e-3);
/// ```
pub fn hole_placement(
    size: f64,
    hole_radius: f64,
    hole_clearance: f64,
) -> SnowflakeResult<HolePlacement> {
    let triangle = Triangle::equilateral(size)?;
    validate_hole_dimensions(hole_radius, hole_clearance)?;
    let reach = hole_radius + hole_clearance;
    let half = size / 2.0;
    if reach >= half {
        return Err(SnowflakeError::invalid_argument(
            "hole_radius",
            format!("radius plus clearance ({reach}) must be below half the size ({half})"),
        ));
    }

    let height = triangle.height();
    let distance_from_top = height * (reach / (0.5 * size));
    let placement = HolePlacement {
        center: Point::new(size / 2.0, height - distance_from_top),
        radius: hole_radius,
    };
    debug!(size, hole_radius, hole_clearance, distance_from_top, "placed hanging hole");
    Ok(placement)
}

/// Checks the hole radius and clearance on their own, without a size.
pub(crate) fn validate_hole_dimensions(
    hole_radius: f64,
    hole_clearance: f64,
) -> SnowflakeResult<()> {
    if !hole_radius.is_finite() || hole_radius <= 0.0 {
        return Err(SnowflakeError::invalid_argument(
            "hole_radius",
            format!("must be positive and finite, got {hole_radius}"),
        ));
    }
    if !hole_clearance.is_finite() || hole_clearance < 0.0 {
        return Err(SnowflakeError::invalid_argument(
            "hole_clearance",
            format!("must be non-negative and finite, got {hole_clearance}"),
        ));
    }
    Ok(())
}
