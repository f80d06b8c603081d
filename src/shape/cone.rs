use crate::math::Real;
use crate::shape::InvalidShapeError;

/// Cone shape with its principal axis aligned with the `y` axis.
///
/// The base of the cone lies at `y = -half_height` and its apex at `y = half_height`.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Cone {
    /// The half-height of the cone.
    pub half_height: Real,
    /// The base radius of the cone.
    pub radius: Real,
}

impl Cone {
    /// Creates a new cone.
    ///
    /// # Arguments:
    /// * `half_height` - the half length of the cone along the `y` axis.
    /// * `radius` - the length of the cone along all other axis.
    pub fn new(half_height: Real, radius: Real) -> Cone {
        Cone {
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
