use crate::math::Real;
use crate::shape::InvalidShapeError;

/// Cylinder shape with its principal axis aligned with the `y` axis.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Cylinder {
    /// The half-height of the cylinder.
    pub half_height: Real,
    /// The radius of the cylinder.
    pub radius: Real,
}

impl Cylinder {
    /// Creates a new cylinder.
    ///
    /// # Arguments:
    /// * `half_height` - the half length of the cylinder along the `y` axis.
    /// * `radius` - the length of the cylinder along all other axis.
    pub fn new(half_height: Real, radius: Real) -> Cylinder {
        Cylinder {
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
