//! # Snowflake Parameters
//!
//! The full parameter set the modeling wrapper accepts, validated in one
//! place. The outline and hole placement derived from it are everything the
//! collaborator needs besides `thickness`, which it forwards to extrusion.

use config::constants::{
    GlobalConfig, DEFAULT_HOLE_CLEARANCE, DEFAULT_HOLE_RADIUS, DEFAULT_ITERATIONS, DEFAULT_SIZE,
    DEFAULT_THICKNESS, DEFAULT_WITH_HOLE,
};
use serde::{Deserialize, Serialize};

use crate::error::{SnowflakeError, SnowflakeResult};
use crate::hole::{hole_placement, validate_hole_dimensions, HolePlacement};
use crate::point::PointSequence;
use crate::snowflake::{generate_snowflake, validate_size};

/// Parameters describing one snowflake ornament, lengths in millimetres.
///
/// # Examples
/// ```
/// use koch_snowflake::SnowflakeParams;
///
/// let params = SnowflakeParams { iterations: 2, ..SnowflakeParams::default() };
/// let outline = params.outline().unwrap();
/// assert_eq!(outline.len(), 3 * 17);
/// assert!(params.hole().unwrap().is_some());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnowflakeParams {
    /// Side length of the base triangle.
    pub size: f64,
    /// Number of fractal iterations, at most [`GlobalConfig::max_iterations`].
    pub iterations: u32,
    /// Extrusion thickness, passed through to the modeler.
    pub thickness: f64,
    /// Whether a hanging hole is cut near the apex.
    pub with_hole: bool,
    /// Radius of the hanging hole.
    pub hole_radius: f64,
    /// Clearance between the hole and the outer perimeter.
    pub hole_clearance: f64,
}

impl Default for SnowflakeParams {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            iterations: DEFAULT_ITERATIONS,
            thickness: DEFAULT_THICKNESS,
            with_hole: DEFAULT_WITH_HOLE,
            hole_radius: DEFAULT_HOLE_RADIUS,
            hole_clearance: DEFAULT_HOLE_CLEARANCE,
        }
    }
}

impl SnowflakeParams {
    /// Checks every field against the default [`GlobalConfig`].
    pub fn validate(&self) -> SnowflakeResult<()> {
        self.validate_with(&GlobalConfig::default())
    }

    /// Checks every field, naming the first one that is out of range.
    ///
    /// Hole radius and clearance are always checked; whether the hole fits
    /// the triangle only matters when `with_hole` is set.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// use koch_snowflake::SnowflakeParams;
    ///
    /// let strict = GlobalConfig::new(3).unwrap();
    /// let params = SnowflakeParams { iterations: 4, ..SnowflakeParams::default() };
    /// assert!(params.validate().is_ok());
    /// assert!(params.validate_with(&strict).is_err());
    /// ```
    pub fn validate_with(&self, config: &GlobalConfig) -> SnowflakeResult<()> {
        validate_size(self.size)?;
        if self.iterations > config.max_iterations {
            return Err(SnowflakeError::invalid_argument(
                "iterations",
                format!("must be in 0..={}, got {}", config.max_iterations, self.iterations),
            ));
        }
        if !self.thickness.is_finite() || self.thickness <= 0.0 {
            return Err(SnowflakeError::invalid_argument(
                "thickness",
                format!("must be positive and finite, got {}", self.thickness),
            ));
        }
        validate_hole_dimensions(self.hole_radius, self.hole_clearance)?;
        if self.with_hole {
            hole_placement(self.size, self.hole_radius, self.hole_clearance)?;
        }
        Ok(())
    }

    /// Validates and generates the closed outline.
    pub fn outline(&self) -> SnowflakeResult<PointSequence> {
        self.validate()?;
        let depth = i32::try_from(self.iterations).map_err(|_| {
            SnowflakeError::invalid_argument("iterations", "does not fit a recursion depth")
        })?;
        generate_snowflake(self.size, depth)
    }

    /// Validates and places the hanging hole, if one is requested.
    pub fn hole(&self) -> SnowflakeResult<Option<HolePlacement>> {
        self.validate()?;
        if !self.with_hole {
            return Ok(None);
        }
        hole_placement(self.size, self.hole_radius, self.hole_clearance).map(Some)
    }
}
