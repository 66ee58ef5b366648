//! Iterative subdivision with an explicit task stack.
//!
//! Tasks are `(start, end, depth)` triples. Sub-tasks are pushed in reverse
//! so they pop in curve order, which keeps the output ordering identical to
//! the recursive strategy while the call stack stays flat.

use super::bump;
use crate::point::Point;

/// Appends every point after `start` of the curve `start`–`end`.
pub(super) fn subdivide(start: Point, end: Point, depth: u32, sign: f64, out: &mut Vec<Point>) {
    // At most three pending siblings per level plus the one being expanded.
    let mut tasks = Vec::with_capacity(3 * depth as usize + 1);
    tasks.push((start, end, depth));

    while let Some((a, b, level)) = tasks.pop() {
        if level == 0 {
            out.push(b);
            continue;
        }
        let points = bump(a, b, sign);
        for pair in points.windows(2).rev() {
            tasks.push((pair[0], pair[1], level - 1));
        }
    }
}
