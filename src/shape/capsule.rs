use crate::math::Real;
use crate::shape::InvalidShapeError;

/// A capsule shape defined as a round segment aligned with the `y` axis.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Capsule {
    /// The half-length of the capsule's axis segment, excluding the caps.
    pub half_height: Real,
    /// The radius of the capsule.
    pub radius: Real,
}

impl Capsule {
    /// Creates a new capsule aligned with the `y` axis.
    pub fn new(half_height: Real, radius: Real) -> Capsule {
        Capsule {
            half_height,
            radius,
        }
    }

    /// Checks that both dimensions are finite and strictly positive.
    pub fn validate(&self) -> Result<(), InvalidShapeError> {
        InvalidShapeError::check_positive("half_height", self.half_height)?;
        InvalidShapeError::check_positive("radius", self.radius)
    }
}
