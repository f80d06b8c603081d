use crate::math::{Point, Real, Vector};

/// Cuts a polygon with the given half-space.
///
/// Given the half-space `center` and outward unit `normal`, this computes the intersection
/// between the half-space and the polygon. A point `pt` is considered as inside of the
/// half-space if `normal.dot(&(pt - center)) <= epsilon`.
pub fn clip_halfspace_polygon(
    center: &Point<Real>,
    normal: &Vector<Real>,
    epsilon: Real,
    polygon: &[Point<Real>],
    result: &mut Vec<Point<Real>>,
) {
    result.clear();

    let Some(last_pt) = polygon.last() else {
        return;
    };

    let dist = |pt: &Point<Real>| (pt - center).dot(normal);
    let mut last_pt = last_pt;
    let mut last_dist = dist(last_pt);

    for pt in polygon {
        let pt_dist = dist(pt);
        let keep = pt_dist <= epsilon;
        let last_keep = last_dist <= epsilon;

        if keep != last_keep {
            // The edge crosses the boundary plane.
            let denom = last_dist - pt_dist;
            if denom != 0.0 {
                let t = na::clamp(last_dist / denom, 0.0, 1.0);
                result.push(last_pt + (pt - last_pt) * t);
            }
        }

        if keep {
            result.push(*pt);
        }

        last_pt = pt;
        last_dist = pt_dist;
    }
}
