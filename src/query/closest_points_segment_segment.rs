use crate::math::{Point, Real};
use crate::shape::{Segment, SegmentPointLocation};

/// Computes the pair of closest points between two segments.
#[inline]
pub fn closest_points_segment_segment(
    seg1: &Segment,
    seg2: &Segment,
) -> (Point<Real>, Point<Real>) {
    let (loc1, loc2) = closest_points_segment_segment_with_locations(seg1, seg2);
    (seg1.point_at(&loc1), seg2.point_at(&loc2))
}

/// The squared distance between two segments.
#[inline]
pub fn distance_squared_segment_segment(seg1: &Segment, seg2: &Segment) -> Real {
    let (pt1, pt2) = closest_points_segment_segment(seg1, seg2);
    na::distance_squared(&pt1, &pt2)
}

/// Segment-segment closest points computation, returning the location of the closest points on
/// each segment.
pub fn closest_points_segment_segment_with_locations(
    seg1: &Segment,
    seg2: &Segment,
) -> (SegmentPointLocation, SegmentPointLocation) {
    // Inspired by Real-Time Collision Detection by Christer Ericson.
    let d1 = seg1.scaled_direction();
    let d2 = seg2.scaled_direction();
    let r = seg1.a - seg2.a;

    let a = d1.norm_squared();
    let e = d2.norm_squared();
    let f = d2.dot(&r);

    let mut s;
    let mut t;

    // Relative to the longest segment so tiny segments are not mistaken for points.
    let eps = crate::math::DEFAULT_EPSILON * a.max(e);
    if a <= eps && e <= eps {
        s = 0.0;
        t = 0.0;
    } else if a <= eps {
        s = 0.0;
        t = na::clamp(f / e, 0.0, 1.0);
    } else {
        let c = d1.dot(&r);
        if e <= eps {
            t = 0.0;
            s = na::clamp(-c / a, 0.0, 1.0);
        } else {
            let b = d1.dot(&d2);
            let ae = a * e;
            let bb = b * b;
            let denom = ae - bb;

            // Parallel segments: any `s` works, pick the first endpoint.
            if denom > crate::math::DEFAULT_EPSILON * ae {
                s = na::clamp((b * f - c * e) / denom, 0.0, 1.0);
            } else {
                s = 0.0;
            }

            t = (b * s + f) / e;

            if t < 0.0 {
                t = 0.0;
                s = na::clamp(-c / a, 0.0, 1.0);
            } else if t > 1.0 {
                t = 1.0;
                s = na::clamp((b - c) / a, 0.0, 1.0);
            }
        }
    }

    (location_from_parameter(s), location_from_parameter(t))
}

fn location_from_parameter(s: Real) -> SegmentPointLocation {
    if s == 0.0 {
        SegmentPointLocation::OnVertex(0)
    } else if s == 1.0 {
        SegmentPointLocation::OnVertex(1)
    } else {
        SegmentPointLocation::OnEdge([1.0 - s, s])
    }
}
