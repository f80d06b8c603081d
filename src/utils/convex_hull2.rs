use crate::math::Real;
use na::Point2;

/// Computes the convex hull of a set of 2D points, returning the indices of the hull vertices.
///
/// The hull is given in counter-clockwise order, starting from the point with the smallest
/// coordinates (lexicographically). Points lying on a hull edge, or closer than `epsilon` to
/// being collinear with one, are not part of the result. Duplicate points are only reported
/// once.
///
/// If all the points are collinear (within `epsilon`), only the two extreme points are returned.
/// If there is only one distinct point, a single index is returned.
pub fn convex_hull2_idx(points: &[Point2<Real>], epsilon: Real) -> Vec<usize> {
    if points.len() < 2 {
        return (0..points.len()).collect();
    }

    let mut sorted: Vec<usize> = (0..points.len()).collect();
    // Ties are broken by index so the output is deterministic.
    sorted.sort_by(|&i, &j| {
        points[i]
            .x
            .total_cmp(&points[j].x)
            .then(points[i].y.total_cmp(&points[j].y))
            .then(i.cmp(&j))
    });
    sorted.dedup_by(|curr, prev| (points[*curr] - points[*prev]).norm() <= epsilon);

    if sorted.len() < 3 {
        return sorted;
    }

    // Andrew's monotone chain.
    let turns_left = |hull: &[usize], k: usize| {
        let o = points[hull[hull.len() - 2]];
        let a = points[hull[hull.len() - 1]];
        let b = points[k];
        let ab = b - a;
        let oa = a - o;
        let cross = oa.perp(&ab);
        cross > epsilon * oa.norm().max(ab.norm())
    };

    let mut lower: Vec<usize> = Vec::with_capacity(points.len());
    for &k in &sorted {
        while lower.len() >= 2 && !turns_left(&lower, k) {
            let _ = lower.pop();
        }
        lower.push(k);
    }

    let mut upper: Vec<usize> = Vec::with_capacity(points.len());
    for &k in sorted.iter().rev() {
        while upper.len() >= 2 && !turns_left(&upper, k) {
            let _ = upper.pop();
        }
        upper.push(k);
    }

    // The last point of each chain is the first point of the other one.
    let _ = lower.pop();
    let _ = upper.pop();
    lower.extend(upper);
    lower
}
