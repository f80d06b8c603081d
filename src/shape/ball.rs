use crate::math::Real;
use crate::shape::InvalidShapeError;

/// A Ball shape.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Ball {
    /// The radius of the ball.
    pub radius: Real,
}

impl Ball {
    /// Creates a new ball from its radius and center.
    #[inline]
    pub fn new(radius: Real) -> Ball {
        Ball { radius }
    }

    /// Checks that the radius is finite and strictly positive.
    pub fn validate(&self) -> Result<(), InvalidShapeError> {
        InvalidShapeError::check_positive("radius", self.radius)
    }
}
