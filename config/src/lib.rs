//! # Config Crate
//!
//! Centralized configuration constants for the Koch snowflake workspace.
//! All magic numbers and tunable parameters are defined here so the
//! geometry crate and its downstream consumers agree on defaults and limits.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{GlobalConfig, DEFAULT_ITERATIONS};
//!
//! let requested: Option<u32> = None;
//! let iterations = requested.unwrap_or(DEFAULT_ITERATIONS);
//! assert!(iterations <= GlobalConfig::default().max_iterations);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Millimetre Units**: Lengths match the downstream CAD collaborator
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;
