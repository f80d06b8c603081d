//! Definition of the segment shape.

use crate::math::{Isometry, Point, Real, Vector};

/// A segment shape.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Segment {
    /// The segment first point.
    pub a: Point<Real>,
    /// The segment second point.
    pub b: Point<Real>,
}

/// Logical description of the location of a point on a segment.
#[derive(PartialEq, Debug, Clone, Copy)]
pub enum SegmentPointLocation {
    /// The point lies on a vertex.
    OnVertex(u32),
    /// The point lies on the segment interior.
    OnEdge([Real; 2]),
}

impl Segment {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>) -> Segment {
        Segment { a, b }
    }

    /// The direction of this segment scaled by its length.
    ///
    /// Points from `self.a` toward `self.b`.
    #[inline]
    pub fn scaled_direction(&self) -> Vector<Real> {
        self.b - self.a
    }

    /// The length of this segment.
    #[inline]
    pub fn length(&self) -> Real {
        self.scaled_direction().norm()
    }

    /// The largest absolute coordinate of the endpoints of this segment.
    #[inline]
    pub fn max_abs_coordinate(&self) -> Real {
        self.a.coords.amax().max(self.b.coords.amax())
    }

    /// The middle point of this segment.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        na::center(&self.a, &self.b)
    }

    /// Applies the isometry `m` to the vertices of this segment and returns the resulting segment.
    #[inline]
    pub fn transformed(&self, m: &Isometry<Real>) -> Self {
        Segment::new(m * self.a, m * self.b)
    }

    /// Computes the point at the given location.
    pub fn point_at(&self, location: &SegmentPointLocation) -> Point<Real> {
        match *location {
            SegmentPointLocation::OnVertex(0) => self.a,
            SegmentPointLocation::OnVertex(_) => self.b,
            SegmentPointLocation::OnEdge(bcoords) => {
                self.a * bcoords[0] + self.b.coords * bcoords[1]
            }
        }
    }

    /// The squared distance between this segment and the point `pt`.
    pub fn distance_squared_to_point(&self, pt: &Point<Real>) -> Real {
        let ab = self.b - self.a;
        let ap = pt - self.a;
        let sqnab = ab.norm_squared();

        if sqnab == 0.0 {
            return ap.norm_squared();
        }

        let t = na::clamp(ab.dot(&ap) / sqnab, 0.0, 1.0);
        (ap - ab * t).norm_squared()
    }
}
