use crate::math::Real;

/// Errors raised when the parameters of an analytic shape cannot describe a valid solid.
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq)]
pub enum InvalidShapeError {
    /// A dimension of the shape is zero or negative.
    #[error("the shape parameter `{parameter}` must be strictly positive (got {value})")]
    NonPositive {
        /// The name of the offending parameter.
        parameter: &'static str,
        /// Its value.
        value: Real,
    },
    /// A dimension of the shape is NaN or infinite.
    #[error("the shape parameter `{parameter}` must be finite")]
    NonFinite {
        /// The name of the offending parameter.
        parameter: &'static str,
    },
    /// A tessellation parameter is too small to produce a closed mesh.
    #[error("the tessellation parameter `{parameter}` must be at least {min} (got {value})")]
    TooFewSubdivisions {
        /// The name of the offending parameter.
        parameter: &'static str,
        /// Its value.
        value: u32,
        /// The smallest accepted value.
        min: u32,
    },
}

impl InvalidShapeError {
    /// Checks that `value` is finite and strictly positive.
    pub(crate) fn check_positive(parameter: &'static str, value: Real) -> Result<(), Self> {
        if !value.is_finite() {
            Err(Self::NonFinite { parameter })
        } else if value <= 0.0 {
            Err(Self::NonPositive { parameter, value })
        } else {
            Ok(())
        }
    }

    /// Checks that a subdivision count is at least `min`.
    pub(crate) fn check_subdivisions(
        parameter: &'static str,
        value: u32,
        min: u32,
    ) -> Result<(), Self> {
        if value < min {
            Err(Self::TooFewSubdivisions {
                parameter,
                value,
                min,
            })
        } else {
            Ok(())
        }
    }
}
