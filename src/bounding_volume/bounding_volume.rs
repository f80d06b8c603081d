use crate::bounding_volume::BoundingVolumeKind;
use crate::math::{Isometry, Point, Real, UnitVector};
use core::fmt::Debug;

/// Slack added by the overlap tests, relative to the magnitude of the coordinates they compare.
///
/// Moving a volume into the frame of another one introduces rounding errors that must not make
/// exactly touching volumes look separated.
pub(crate) const OVERLAP_RELATIVE_MARGIN: Real = 1.0e-10;

/// Trait of bounding volumes.
///
/// Bounding volumes are coarse approximations of a set of triangles, expressed in the local
/// frame of the mesh they belong to. They have constant time overlap tests and two bounding
/// volumes of the same kind can be merged into a bigger one.
///
/// Overlap tests must be conservative: two volumes that actually overlap are never reported as
/// disjoint.
pub trait BoundingVolume: Copy + Debug + PartialEq + Send + Sync + 'static {
    /// The runtime tag of this bounding volume type.
    const KIND: BoundingVolumeKind;

    /// Fits a bounding volume enclosing all the given points.
    fn from_points(pts: &[Point<Real>]) -> Self;

    /// Returns a point inside of this bounding volume. This is ideally its center.
    fn center(&self) -> Point<Real>;

    /// Checks if this bounding volume intersects `other`, where `pos12` is the position of the
    /// local frame of `other` relative to the local frame of `self`.
    fn intersects(&self, pos12: &Isometry<Real>, other: &Self) -> bool;

    /// Checks if this bounding volume, placed at `pos1`, intersects `other` placed at `pos2`.
    #[inline]
    fn overlaps(&self, pos1: &Isometry<Real>, other: &Self, pos2: &Isometry<Real>) -> bool {
        self.intersects(&pos1.inv_mul(pos2), other)
    }

    /// Merges this bounding volume with another one.
    fn merged(&self, other: &Self) -> Self;

    /// Creates a new, enlarged version, of this bounding volume.
    fn loosened(&self, amount: Real) -> Self;

    /// Does this bounding volume contain a point expressed in its local frame?
    fn contains_local_point(&self, point: &Point<Real>) -> bool;

    /// The direction along which this volume is the most elongated.
    ///
    /// This is used to split the set of triangles of a hierarchy node in two.
    fn split_axis(&self) -> UnitVector<Real>;
}
