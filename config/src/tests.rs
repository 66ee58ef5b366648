//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants.

use crate::constants::*;

// =============================================================================
// DEFAULT TESTS
// =============================================================================

#[test]
fn test_defaults_match_wrapper_cli() {
    assert_eq!(DEFAULT_SIZE, 100.0);
    assert_eq!(DEFAULT_ITERATIONS, 5);
    assert_eq!(DEFAULT_THICKNESS, 1.0);
    assert!(DEFAULT_WITH_HOLE);
    assert_eq!(DEFAULT_HOLE_RADIUS, 1.0);
    assert_eq!(DEFAULT_HOLE_CLEARANCE, 1.2);
}

#[test]
fn test_default_iterations_within_limit() {
    assert!(DEFAULT_ITERATIONS <= MAX_ITERATIONS);
}

#[test]
fn test_default_hole_fits_default_triangle() {
    assert!(DEFAULT_HOLE_RADIUS + DEFAULT_HOLE_CLEARANCE < DEFAULT_SIZE / 2.0);
}

// =============================================================================
// LIMIT TESTS
// =============================================================================

#[test]
fn test_stacker_sizes_are_ordered() {
    assert!(STACKER_RED_ZONE_BYTES > 0);
    assert!(STACKER_STACK_SIZE_BYTES > STACKER_RED_ZONE_BYTES);
}

#[test]
fn test_parallel_depth_is_reachable() {
    assert!(PARALLEL_EDGE_DEPTH <= MAX_ITERATIONS);
}

#[test]
fn test_preallocation_cap_covers_default_depth() {
    let per_edge = 4usize.pow(DEFAULT_ITERATIONS) + 1;
    assert!(per_edge * 3 <= MAX_PREALLOCATED_POINTS);
}
