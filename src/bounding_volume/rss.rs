//! Swept-sphere bounding volume.

use crate::bounding_volume::{BoundingVolume, BoundingVolumeKind, OVERLAP_RELATIVE_MARGIN};
use crate::math::{Isometry, Point, Real, UnitVector, Vector};
use crate::query::distance_squared_segment_segment;
use crate::shape::Segment;
use na::Unit;

/// A swept-sphere bounding volume: the set of points within `radius` of a segment.
///
/// The segment runs along the principal axis of the bounded points, through their centroid, and
/// spans the range of their projections on that axis. Two such volumes overlap if the distance
/// between their segments does not exceed the sum of their radii.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Rss {
    /// The segment swept by the sphere, in the local frame of the mesh.
    pub segment: Segment,
    /// The radius of the swept sphere.
    pub radius: Real,
}

impl Rss {
    /// Creates a new swept-sphere volume.
    #[inline]
    pub fn new(segment: Segment, radius: Real) -> Self {
        Self { segment, radius }
    }

    /// A volume that contains no point and intersects nothing.
    #[inline]
    pub fn new_invalid() -> Self {
        Self::new(Segment::new(Point::origin(), Point::origin()), -Real::MAX)
    }

    /// Fits the segment along `axis`, through `origin`, spanning the projections of `pts`, and
    /// the smallest radius enclosing them.
    fn fit_along_axis(pts: &[Point<Real>], origin: &Point<Real>, axis: &Vector<Real>) -> Segment {
        let mut min = Real::MAX;
        let mut max = -Real::MAX;

        for pt in pts {
            let t = (pt - origin).dot(axis);
            min = min.min(t);
            max = max.max(t);
        }

        Segment::new(origin + axis * min, origin + axis * max)
    }

    /// The distance between the axis segments of `self` and `other`, where `pos12` is the
    /// position of `other` relative to `self`.
    #[inline]
    pub fn segment_distance(&self, pos12: &Isometry<Real>, other: &Rss) -> Real {
        let seg2 = other.segment.transformed(pos12);
        distance_squared_segment_segment(&self.segment, &seg2).sqrt()
    }
}

impl BoundingVolume for Rss {
    const KIND: BoundingVolumeKind = BoundingVolumeKind::Rss;

    fn from_points(pts: &[Point<Real>]) -> Self {
        if pts.is_empty() {
            return Rss::new_invalid();
        }

        let principal = crate::utils::principal_frame(pts);
        let axis = principal.axes.column(0).into_owned();
        let segment = Rss::fit_along_axis(pts, &principal.center, &axis);
        let radius = pts
            .iter()
            .map(|pt| segment.distance_squared_to_point(pt))
            .fold(0.0, Real::max)
            .sqrt();

        Rss::new(segment, radius)
    }

    #[inline]
    fn center(&self) -> Point<Real> {
        self.segment.center()
    }

    #[inline]
    fn intersects(&self, pos12: &Isometry<Real>, other: &Rss) -> bool {
        let dist = self.segment_distance(pos12, other);
        let scale = dist
            .max(self.radius)
            .max(other.radius)
            .max(self.segment.max_abs_coordinate())
            .max(other.segment.max_abs_coordinate())
            .max(pos12.translation.vector.amax());
        dist <= self.radius + other.radius + OVERLAP_RELATIVE_MARGIN * scale
    }

    /// Fits a new segment through the four endpoints and inflates the radius so both volumes
    /// are enclosed.
    fn merged(&self, other: &Rss) -> Rss {
        if self.radius < 0.0 {
            return *other;
        }
        if other.radius < 0.0 {
            return *self;
        }

        let endpoints = [
            (self.segment.a, self.radius),
            (self.segment.b, self.radius),
            (other.segment.a, other.radius),
            (other.segment.b, other.radius),
        ];
        let pts = endpoints.map(|(pt, _)| pt);
        let principal = crate::utils::principal_frame(&pts);
        let axis = principal.axes.column(0).into_owned();
        let segment = Rss::fit_along_axis(&pts, &principal.center, &axis);
        let radius = endpoints
            .iter()
            .map(|(pt, r)| segment.distance_squared_to_point(pt).sqrt() + r)
            .fold(0.0, Real::max);

        Rss::new(segment, radius)
    }

    #[inline]
    fn loosened(&self, amount: Real) -> Rss {
        assert!(amount >= 0.0, "The loosening margin must be positive.");
        Rss::new(self.segment, self.radius + amount)
    }

    #[inline]
    fn contains_local_point(&self, point: &Point<Real>) -> bool {
        self.radius >= 0.0
            && self.segment.distance_squared_to_point(point) <= self.radius * self.radius
    }

    #[inline]
    fn split_axis(&self) -> UnitVector<Real> {
        Unit::try_new(self.segment.scaled_direction(), 0.0)
            .unwrap_or_else(Vector::x_axis)
    }
}
