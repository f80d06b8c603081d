//! Axis Aligned Bounding Box.

use crate::bounding_volume::{BoundingVolume, BoundingVolumeKind, OVERLAP_RELATIVE_MARGIN};
use crate::math::{Isometry, Point, Real, UnitVector, Vector, DIM};

/// An Axis-Aligned Bounding Box (AABB).
///
/// The box is aligned with the axes of the local frame of the mesh it bounds. When tested against
/// a box from a mesh with a different orientation, the other box is re-bounded by an axis-aligned
/// box of this frame first, which is sound but increasingly loose as the relative rotation grows.
///
/// # Example
///
/// ```
/// use meshcollide3d::bounding_volume::{Aabb, BoundingVolume};
/// use meshcollide3d::math::{Isometry, Point};
///
/// let pts = [
///     Point::new(1.0, 2.0, 3.0),
///     Point::new(-1.0, 4.0, 2.0),
///     Point::new(0.0, 0.0, 5.0),
/// ];
/// let aabb = Aabb::from_points(&pts);
///
/// assert_eq!(aabb.mins, Point::new(-1.0, 0.0, 2.0));
/// assert_eq!(aabb.maxs, Point::new(1.0, 4.0, 5.0));
/// assert!(aabb.intersects(&Isometry::translation(1.5, 0.0, 0.0), &aabb));
/// assert!(!aabb.intersects(&Isometry::translation(2.5, 0.0, 0.0), &aabb));
/// ```
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Aabb {
    /// The point with minimum coordinates.
    pub mins: Point<Real>,
    /// The point with maximum coordinates.
    pub maxs: Point<Real>,
}

impl Aabb {
    /// Creates a new Aabb.
    ///
    /// # Arguments:
    ///   * `mins` - position of the point with the smallest coordinates.
    ///   * `maxs` - position of the point with the highest coordinates. Each component of `mins`
    ///     must be smaller than the related components of `maxs`.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates an invalid `Aabb` with `mins` components set to `Real::max_values` and `maxs`
    /// components set to `-Real::max_values`.
    ///
    /// This is often used as the initial values of some `Aabb` merging algorithms.
    #[inline]
    pub fn new_invalid() -> Self {
        Self::new(Vector::repeat(Real::MAX).into(), Vector::repeat(-Real::MAX).into())
    }

    /// Creates a new `Aabb` from its center and its half-extents.
    #[inline]
    pub fn from_half_extents(center: Point<Real>, half_extents: Vector<Real>) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    /// The center of this `Aabb`.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        na::center(&self.mins, &self.maxs)
    }

    /// The half extents of this `Aabb`.
    #[inline]
    pub fn half_extents(&self) -> Vector<Real> {
        (self.maxs - self.mins) * 0.5
    }

    /// The extents of this `Aabb`.
    #[inline]
    pub fn extents(&self) -> Vector<Real> {
        self.maxs - self.mins
    }

    /// Enlarges this `Aabb` so it also contains the point `pt`.
    #[inline]
    pub fn take_point(&mut self, pt: Point<Real>) {
        self.mins = self.mins.coords.inf(&pt.coords).into();
        self.maxs = self.maxs.coords.sup(&pt.coords).into();
    }

    /// Computes the `Aabb` bounding `self` transformed by `m`.
    #[inline]
    pub fn transform_by(&self, m: &Isometry<Real>) -> Self {
        let center = m * self.center();
        let abs_rot = m.rotation.to_rotation_matrix().into_inner().abs();
        let ws_half_extents = abs_rot * self.half_extents();

        Aabb::from_half_extents(center, ws_half_extents)
    }

    /// The 8 corners of this `Aabb`.
    #[inline]
    pub fn vertices(&self) -> [Point<Real>; 8] {
        [
            Point::new(self.mins.x, self.mins.y, self.mins.z),
            Point::new(self.maxs.x, self.mins.y, self.mins.z),
            Point::new(self.maxs.x, self.maxs.y, self.mins.z),
            Point::new(self.mins.x, self.maxs.y, self.mins.z),
            Point::new(self.mins.x, self.mins.y, self.maxs.z),
            Point::new(self.maxs.x, self.mins.y, self.maxs.z),
            Point::new(self.maxs.x, self.maxs.y, self.maxs.z),
            Point::new(self.mins.x, self.maxs.y, self.maxs.z),
        ]
    }

    /// The largest absolute coordinate of the corners of this `Aabb`.
    #[inline]
    pub fn max_abs_coordinate(&self) -> Real {
        self.mins.coords.amax().max(self.maxs.coords.amax())
    }

    /// Checks whether two boxes expressed in the same frame overlap.
    #[inline]
    pub fn intersects_local(&self, other: &Aabb) -> bool {
        na::partial_le(&self.mins, &other.maxs) && na::partial_ge(&self.maxs, &other.mins)
    }
}

impl BoundingVolume for Aabb {
    const KIND: BoundingVolumeKind = BoundingVolumeKind::Aabb;

    fn from_points(pts: &[Point<Real>]) -> Self {
        let mut result = Aabb::new_invalid();

        for pt in pts {
            result.take_point(*pt);
        }

        result
    }

    #[inline]
    fn center(&self) -> Point<Real> {
        self.center()
    }

    #[inline]
    fn intersects(&self, pos12: &Isometry<Real>, other: &Aabb) -> bool {
        let scale = self
            .max_abs_coordinate()
            .max(other.max_abs_coordinate())
            .max(pos12.translation.vector.amax());
        let other = other
            .transform_by(pos12)
            .loosened(OVERLAP_RELATIVE_MARGIN * scale);
        self.intersects_local(&other)
    }

    #[inline]
    fn merged(&self, other: &Aabb) -> Aabb {
        Aabb {
            mins: self.mins.inf(&other.mins),
            maxs: self.maxs.sup(&other.maxs),
        }
    }

    #[inline]
    fn loosened(&self, amount: Real) -> Aabb {
        assert!(amount >= 0.0, "The loosening margin must be positive.");
        Aabb {
            mins: self.mins + Vector::repeat(-amount),
            maxs: self.maxs + Vector::repeat(amount),
        }
    }

    #[inline]
    fn contains_local_point(&self, point: &Point<Real>) -> bool {
        for i in 0..DIM {
            if point[i] < self.mins[i] || point[i] > self.maxs[i] {
                return false;
            }
        }

        true
    }

    #[inline]
    fn split_axis(&self) -> UnitVector<Real> {
        let extents = self.extents();
        Vector::ith_axis(extents.imax())
    }
}
