//! Koch snowflake outline generation.
//!
//! Computes the ordered 2D boundary of a Koch snowflake from a base triangle
//! size and a recursion depth. The result is a closed polygon outline that
//! a modeling layer can extrude and export; this crate does no 3D work.
//!
//! ```
//! use koch_snowflake::generate_snowflake;
//!
//! let outline = generate_snowflake(100.0, 3).unwrap();
//! assert_eq!(outline.len(), 3 * (4usize.pow(3) + 1));
//! ```

pub mod curve;
pub mod error;
pub mod hole;
pub mod params;
pub mod point;
pub mod snowflake;

pub use curve::{
    curve_point_count, generate_curve, generate_curve_iterative, generate_curve_with,
    CurveStrategy, Orientation,
};
pub use error::{SnowflakeError, SnowflakeResult};
pub use hole::{hole_placement, HolePlacement};
pub use params::SnowflakeParams;
pub use point::{Point, PointSequence};
pub use snowflake::{generate_snowflake, generate_snowflake_with, triangle_height, Triangle};
