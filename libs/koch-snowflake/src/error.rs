//! # Error Types
//!
//! Error types for snowflake generation. All errors are explicit and carry
//! enough context to point at the offending input.
//!
//! ## Error Policy
//!
//! - NO fallback mechanisms when inputs are invalid
//! - Invalid inputs are rejected before any recursion starts
//! - Degenerate edges never produce NaN or infinite coordinates

use thiserror::Error;

use crate::point::Point;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while generating Koch curves and snowflakes.
///
/// ## Example
///
/// ```rust
/// use koch_snowflake::{generate_snowflake, SnowflakeError};
///
/// match generate_snowflake(-1.0, 5) {
///     Err(SnowflakeError::InvalidArgument { parameter, .. }) => assert_eq!(parameter, "size"),
///     other => panic!("unexpected result: {other:?}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SnowflakeError {
    /// A parameter is outside its valid domain.
    #[error("Invalid argument '{parameter}': {message}")]
    InvalidArgument {
        /// Name of the rejected parameter
        parameter: &'static str,
        /// Why the value was rejected
        message: String,
    },

    /// An edge has zero length, so no perpendicular direction exists.
    #[error("Degenerate edge: start {start} and end {end} coincide")]
    DegenerateInput {
        /// Start point of the rejected edge
        start: Point,
        /// End point of the rejected edge
        end: Point,
    },
}

impl SnowflakeError {
    /// Creates an invalid argument error for the named parameter.
    pub fn invalid_argument(parameter: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            parameter,
            message: message.into(),
        }
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for snowflake operations.
pub type SnowflakeResult<T> = Result<T, SnowflakeError>;

// =============================================================================
// TESTS
// =============================================================================
