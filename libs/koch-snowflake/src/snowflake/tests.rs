use super::*;
use crate::curve::curve_point_count;
use approx::{assert_abs_diff_eq, assert_relative_eq};

// =============================================================================
// TRIANGLE
// =============================================================================

#[test]
fn test_triangle_corners() {
    let t = Triangle::equilateral(100.0).unwrap();
    assert_eq!(t.bottom_left, Point::ZERO);
    assert_eq!(t.bottom_right, Point::new(100.0, 0.0));
    assert_eq!(t.apex.x, 50.0);
    assert_abs_diff_eq!(t.apex.y, 86.602_540_378_443_86, epsilon = 1e-9);
    assert_abs_diff_eq!(t.height(), 100.0 * 3f64.sqrt() / 2.0, epsilon = 1e-9);
}

#[test]
fn test_triangle_is_equilateral() {
    let t = Triangle::equilateral(7.5).unwrap();
    for (start, end) in t.edges() {
        assert_abs_diff_eq!((end - start).length(), 7.5, epsilon = 1e-12);
    }
}

#[test]
fn test_triangle_edges_are_chained() {
    let edges = Triangle::equilateral(10.0).unwrap().edges();
    for i in 0..3 {
        assert_eq!(edges[i].1, edges[(i + 1) % 3].0);
    }
}

#[test]
fn test_triangle_rejects_invalid_size() {
    for size in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        assert!(Triangle::equilateral(size).is_err(), "size {size}");
    }
}

// =============================================================================
// ASSEMBLY
// =============================================================================

#[test]
fn test_depth_zero_is_base_triangle_with_repeated_joins() {
    let outline = generate_snowflake(100.0, 0).unwrap();
    let apex = Point::new(50.0, triangle_height(100.0));
    let right = Point::new(100.0, 0.0);
    assert_eq!(outline, vec![Point::ZERO, apex, apex, right, right, Point::ZERO]);
    assert_abs_diff_eq!(apex.y, 86.602_540_378, epsilon = 1e-6);
}

#[test]
fn test_point_count_is_three_curves() {
    for depth in 0..=5 {
        let outline = generate_snowflake(10.0, depth).unwrap();
        assert_eq!(outline.len(), 3 * curve_point_count(depth).unwrap());
    }
}

#[test]
fn test_outline_is_closed() {
    for depth in 0..=5 {
        let outline = generate_snowflake(42.0, depth).unwrap();
        assert_eq!(outline.first(), outline.last());
    }
}

#[test]
fn test_joins_repeat_corner_points() {
    let depth = 3;
    let per_edge = curve_point_count(depth).unwrap();
    let outline = generate_snowflake(30.0, depth).unwrap();
    let t = Triangle::equilateral(30.0).unwrap();
    assert_eq!(outline[per_edge - 1], t.apex);
    assert_eq!(outline[per_edge], t.apex);
    assert_eq!(outline[2 * per_edge - 1], t.bottom_right);
    assert_eq!(outline[2 * per_edge], t.bottom_right);
}

#[test]
fn test_first_bump_points_outward() {
    // The first edge climbs to the apex; outward is up and to the left.
    let outline = generate_snowflake(90.0, 1).unwrap();
    let t = Triangle::equilateral(90.0).unwrap();
    let bump = outline[2];
    let mid = 0.5 * (t.bottom_left + t.apex);
    let inward = Point::new(45.0, t.height() / 3.0) - mid;
    assert!((bump - mid).dot(inward) < 0.0);
}

#[test]
fn test_scale_invariance() {
    for depth in 0..=4 {
        let base = generate_snowflake(10.0, depth).unwrap();
        let scaled = generate_snowflake(35.0, depth).unwrap();
        assert_eq!(base.len(), scaled.len());
        for (p, q) in base.iter().zip(scaled.iter()) {
            assert_relative_eq!(p.x * 3.5, q.x, epsilon = 1e-9, max_relative = 1e-9);
            assert_relative_eq!(p.y * 3.5, q.y, epsilon = 1e-9, max_relative = 1e-9);
        }
    }
}

#[test]
fn test_parallel_path_matches_sequential_strategy() {
    let depth = PARALLEL_EDGE_DEPTH as i32;
    let parallel = generate_snowflake(5.0, depth).unwrap();
    let iterative =
        generate_snowflake_with(5.0, depth, Orientation::Positive, CurveStrategy::WorkStack)
            .unwrap();
    assert_eq!(parallel, iterative);
}

#[test]
fn test_negative_orientation_bulges_inward() {
    let outward = generate_snowflake(9.0, 1).unwrap();
    let inward =
        generate_snowflake_with(9.0, 1, Orientation::Negative, CurveStrategy::Recursive).unwrap();
    // The apex bump of the base edge (third curve) flips below the x axis.
    let base_bump = 2 * curve_point_count(1).unwrap() + 2;
    assert!(outward[base_bump].y < 0.0);
    assert!(inward[base_bump].y > 0.0);
}

// =============================================================================
// ERRORS
// =============================================================================

#[test]
fn test_invalid_size_is_rejected() {
    assert!(matches!(
        generate_snowflake(-1.0, 5),
        Err(SnowflakeError::InvalidArgument { parameter: "size", .. })
    ));
    assert!(generate_snowflake(0.0, 1).is_err());
}

#[test]
fn test_oversized_size_is_reported_as_size() {
    for size in [1e155, 1e200, f64::MAX] {
        assert!(matches!(
            generate_snowflake(size, 0),
            Err(SnowflakeError::InvalidArgument { parameter: "size", .. })
        ));
    }
}

#[test]
fn test_large_finite_size_stays_finite() {
    let outline = generate_snowflake(1e150, 2).unwrap();
    assert!(outline.iter().all(|p| p.is_finite()));
}

#[test]
fn test_negative_depth_is_rejected() {
    assert!(matches!(
        generate_snowflake(100.0, -1),
        Err(SnowflakeError::InvalidArgument { parameter: "depth", .. })
    ));
}
