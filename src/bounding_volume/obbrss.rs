use crate::bounding_volume::{BoundingVolume, BoundingVolumeKind, Obb, Rss};
use crate::math::{Isometry, Point, Real, UnitVector};

/// A hybrid bounding volume made of an oriented box and a swept sphere fitted on the same points.
///
/// Two such volumes overlap only if both their boxes and their swept spheres overlap, making it
/// the tightest of the supported bounding volumes.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Obbrss {
    /// The oriented box part.
    pub obb: Obb,
    /// The swept-sphere part.
    pub rss: Rss,
}

impl Obbrss {
    /// Combines an oriented box and a swept sphere bounding the same set of points.
    #[inline]
    pub fn new(obb: Obb, rss: Rss) -> Self {
        Self { obb, rss }
    }
}

impl BoundingVolume for Obbrss {
    const KIND: BoundingVolumeKind = BoundingVolumeKind::Obbrss;

    fn from_points(pts: &[Point<Real>]) -> Self {
        Obbrss::new(Obb::from_points(pts), Rss::from_points(pts))
    }

    #[inline]
    fn center(&self) -> Point<Real> {
        self.obb.center()
    }

    #[inline]
    fn intersects(&self, pos12: &Isometry<Real>, other: &Obbrss) -> bool {
        self.obb.intersects(pos12, &other.obb) && self.rss.intersects(pos12, &other.rss)
    }

    #[inline]
    fn merged(&self, other: &Obbrss) -> Obbrss {
        Obbrss::new(self.obb.merged(&other.obb), self.rss.merged(&other.rss))
    }

    #[inline]
    fn loosened(&self, amount: Real) -> Obbrss {
        Obbrss::new(self.obb.loosened(amount), self.rss.loosened(amount))
    }

    #[inline]
    fn contains_local_point(&self, point: &Point<Real>) -> bool {
        self.obb.contains_local_point(point) && self.rss.contains_local_point(point)
    }

    #[inline]
    fn split_axis(&self) -> UnitVector<Real> {
        self.obb.split_axis()
    }
}
