use super::clip_halfspace_polygon;
use crate::math::{Isometry, Point, Real, UnitVector};
use crate::shape::Triangle;
use arrayvec::ArrayVec;

/// Tolerances used by [`triangle_triangle_intersection`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct TriangleTriangleTolerances {
    /// Distance tolerance, relative to the longest edge of the two triangles.
    ///
    /// Vertices closer than this to the other triangle plane are considered on the plane, and
    /// intersection segments shorter than this are considered as mere touching points.
    pub relative_epsilon: Real,
    /// Two triangles whose unit normals have a cross product with a norm smaller than this are
    /// considered parallel.
    pub angular_epsilon: Real,
}

impl Default for TriangleTriangleTolerances {
    fn default() -> Self {
        Self {
            relative_epsilon: 1.0e-7,
            angular_epsilon: 1.0e-7,
        }
    }
}

/// The intersection between two triangles.
#[derive(Clone, Debug, PartialEq)]
pub enum TriangleTriangleIntersection {
    /// The triangles are not coplanar and intersect along a segment.
    Segment {
        /// The first endpoint of the intersection segment.
        a: Point<Real>,
        /// The second endpoint of the intersection segment.
        b: Point<Real>,
    },
    /// The triangles are coplanar and their intersection is this convex polygon.
    ///
    /// The polygon may be reduced to a single point or to a segment.
    Polygon(Vec<Point<Real>>),
}

/// Computes the intersection between two triangles expressed in the same frame.
///
/// Returns `None` if the triangles are disjoint, if they only touch at a single point, or if
/// one of them is degenerate.
pub fn triangle_triangle_intersection(
    tri1: &Triangle,
    tri2: &Triangle,
    tolerances: &TriangleTriangleTolerances,
) -> Option<TriangleTriangleIntersection> {
    let normal1 = tri1.normal()?;
    let normal2 = tri2.normal()?;
    let scale = tri1.longest_edge_length().max(tri2.longest_edge_length());
    let eps = tolerances.relative_epsilon * scale;

    // Signed distances of each triangle vertices to the other triangle plane.
    let dists1 = tri1.vertices().map(|pt| normal2.dot(&(pt - tri2.a)));
    if all_on_one_side(&dists1, eps) {
        return None;
    }

    let dists2 = tri2.vertices().map(|pt| normal1.dot(&(pt - tri1.a)));
    if all_on_one_side(&dists2, eps) {
        return None;
    }

    let line_dir = normal1.cross(&*normal2);

    if line_dir.norm() <= tolerances.angular_epsilon {
        return coplanar_intersection(tri1, tri2, &normal2, eps);
    }

    let hits1 = plane_crossings(tri1, &dists1, eps);
    let hits2 = plane_crossings(tri2, &dists2, eps);
    let line_dir = UnitVector::new_normalize(line_dir);
    let (min1, max1) = interval_on_line(&hits1, &line_dir)?;
    let (min2, max2) = interval_on_line(&hits2, &line_dir)?;

    let lo = if min1.0 >= min2.0 { min1 } else { min2 };
    let hi = if max1.0 <= max2.0 { max1 } else { max2 };

    if hi.0 - lo.0 <= eps {
        // Disjoint intervals, or a single touching point.
        return None;
    }

    Some(TriangleTriangleIntersection::Segment { a: lo.1, b: hi.1 })
}

/// Computes the intersection between two triangles, each expressed in its own local frame and
/// placed at `pos1` and `pos2` respectively.
///
/// The resulting points are expressed in the frame where `pos1` and `pos2` are defined.
#[inline]
pub fn triangle_triangle_intersection_with_isometries(
    pos1: &Isometry<Real>,
    tri1: &Triangle,
    pos2: &Isometry<Real>,
    tri2: &Triangle,
    tolerances: &TriangleTriangleTolerances,
) -> Option<TriangleTriangleIntersection> {
    triangle_triangle_intersection(&tri1.transformed(pos1), &tri2.transformed(pos2), tolerances)
}

fn all_on_one_side(dists: &[Real; 3], eps: Real) -> bool {
    dists.iter().all(|d| *d > eps) || dists.iter().all(|d| *d < -eps)
}

// The points where a triangle touches or crosses the plane of the other triangle.
fn plane_crossings(tri: &Triangle, dists: &[Real; 3], eps: Real) -> ArrayVec<Point<Real>, 6> {
    let pts = tri.vertices();
    let mut result = ArrayVec::new();

    for i in 0..3 {
        if dists[i].abs() <= eps {
            result.push(pts[i]);
        }
    }

    for i in 0..3 {
        let j = (i + 1) % 3;
        let (di, dj) = (dists[i], dists[j]);

        if (di > eps && dj < -eps) || (di < -eps && dj > eps) {
            let t = di / (di - dj);
            result.push(pts[i] + (pts[j] - pts[i]) * t);
        }
    }

    result
}

fn interval_on_line(
    pts: &[Point<Real>],
    dir: &UnitVector<Real>,
) -> Option<((Real, Point<Real>), (Real, Point<Real>))> {
    let mut iter = pts.iter().map(|pt| (dir.dot(&pt.coords), *pt));
    let first = iter.next()?;

    Some(iter.fold((first, first), |(min, max), proj| {
        (
            if proj.0 < min.0 { proj } else { min },
            if proj.0 > max.0 { proj } else { max },
        )
    }))
}

fn coplanar_intersection(
    tri1: &Triangle,
    tri2: &Triangle,
    normal2: &UnitVector<Real>,
    eps: Real,
) -> Option<TriangleTriangleIntersection> {
    let mut polygon = tri1.vertices().to_vec();
    let mut clipped = Vec::with_capacity(6);

    for edge in tri2.edges() {
        let outward = (edge.b - edge.a).cross(&normal2.into_inner());
        let Some(outward) = outward.try_normalize(0.0) else {
            continue;
        };

        clip_halfspace_polygon(&edge.a, &outward, eps, &polygon, &mut clipped);
        core::mem::swap(&mut polygon, &mut clipped);

        if polygon.is_empty() {
            return None;
        }
    }

    let eps2 = eps * eps;
    polygon.dedup_by(|a, b| na::distance_squared(a, b) <= eps2);

    if let [first, .., last] = polygon.as_slice() {
        if na::distance_squared(first, last) <= eps2 {
            let _ = polygon.pop();
        }
    }

    Some(TriangleTriangleIntersection::Polygon(polygon))
}
