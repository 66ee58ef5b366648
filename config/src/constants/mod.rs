//! # Configuration Constants
//!
//! Centralized constants for snowflake generation. Defaults mirror the
//! command-line surface of the modeling wrapper; limits bound the
//! exponential growth of the fractal.
//!
//! ## Categories
//!
//! - **Defaults**: Size, iteration and hanging-hole defaults (millimetres)
//! - **Limits**: Recursion, stack and allocation bounds

use std::fmt;

// =============================================================================
// DEFAULT PARAMETERS
// =============================================================================

/// Default side length of the base triangle in millimetres.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_SIZE;
/// assert_eq!(DEFAULT_SIZE, 100.0);
/// ```
pub const DEFAULT_SIZE: f64 = 100.0;

/// Default number of fractal iterations.
pub const DEFAULT_ITERATIONS: u32 = 5;

/// Default extrusion thickness in millimetres, forwarded to the modeler.
pub const DEFAULT_THICKNESS: f64 = 1.0;

/// Whether a hanging hole is requested by default.
pub const DEFAULT_WITH_HOLE: bool = true;

/// Default radius of the hanging hole in millimetres.
pub const DEFAULT_HOLE_RADIUS: f64 = 1.0;

/// Default clearance between the hanging hole and the outer perimeter.
pub const DEFAULT_HOLE_CLEARANCE: f64 = 1.2;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Highest iteration count accepted by validated parameters.
///
/// One edge at this depth already holds `4^20 + 1` points, so anything
/// beyond it is intractable.
///
/// # Examples
/// ```
/// use config::constants::MAX_ITERATIONS;
/// assert_eq!(MAX_ITERATIONS, 20);
/// ```
pub const MAX_ITERATIONS: u32 = 20;

/// Remaining stack (bytes) below which recursion grows a new stack segment.
pub const STACKER_RED_ZONE_BYTES: usize = 64 * 1024;

/// Bytes of stack allocated each time the `stacker` crate grows the stack.
///
/// # Examples
/// ```
/// use config::constants::{STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
/// assert!(STACKER_STACK_SIZE_BYTES > STACKER_RED_ZONE_BYTES);
/// ```
pub const STACKER_STACK_SIZE_BYTES: usize = 8 * 1024 * 1024;

/// Depth from which the three triangle edges are generated in parallel.
pub const PARALLEL_EDGE_DEPTH: u32 = 6;

/// Upper bound on points reserved up front for one output buffer.
///
/// Larger outputs still grow on demand; this only caps the initial
/// allocation so an absurd depth fails lazily instead of aborting.
pub const MAX_PREALLOCATED_POINTS: usize = 1 << 22;

// =============================================================================
// GLOBAL CONFIG
// =============================================================================

/// Immutable snapshot of global configuration settings that can be shared
/// between crates.
///
/// # Examples
/// ```
/// use config::constants::{GlobalConfig, MAX_ITERATIONS};
/// let config = GlobalConfig::default();
/// assert_eq!(config.max_iterations, MAX_ITERATIONS);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlobalConfig {
    /// Highest iteration count callers may request.
    pub max_iterations: u32,
}

impl GlobalConfig {
    /// Builds a configuration with a lower iteration ceiling.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(8).expect("valid config");
    /// assert_eq!(cfg.max_iterations, 8);
    /// assert!(GlobalConfig::new(21).is_err());
    /// ```
    pub fn new(max_iterations: u32) -> Result<Self, ConfigError> {
        if max_iterations > MAX_ITERATIONS {
            return Err(ConfigError::InvalidMaxIterations(max_iterations));
        }
        Ok(Self { max_iterations })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            max_iterations: MAX_ITERATIONS,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the iteration ceiling exceeds [`MAX_ITERATIONS`].
    InvalidMaxIterations(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidMaxIterations(value) => {
                write!(f, "max_iterations must be <= {MAX_ITERATIONS}: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
