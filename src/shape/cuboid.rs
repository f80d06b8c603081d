use crate::math::{Real, Vector};
use crate::shape::InvalidShapeError;

/// Shape of a box.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Cuboid {
    /// The half-extents of the cuboid.
    pub half_extents: Vector<Real>,
}

impl Cuboid {
    /// Creates a new box from its half-extents. Half-extents are the box half-width along each
    /// axis. Each half-extent must be positive.
    #[inline]
    pub fn new(half_extents: Vector<Real>) -> Cuboid {
        Cuboid { half_extents }
    }

    /// Creates a new box from its full side lengths along each axis.
    #[inline]
    pub fn from_side_lengths(lx: Real, ly: Real, lz: Real) -> Cuboid {
        Cuboid::new(Vector::new(lx, ly, lz) / 2.0)
    }

    /// Checks that every half-extent is finite and strictly positive.
    pub fn validate(&self) -> Result<(), InvalidShapeError> {
        InvalidShapeError::check_positive("half_extents.x", self.half_extents.x)?;
        InvalidShapeError::check_positive("half_extents.y", self.half_extents.y)?;
        InvalidShapeError::check_positive("half_extents.z", self.half_extents.z)
    }
}
