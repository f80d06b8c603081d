use crate::math::{Isometry, Matrix, Real, Rotation, Translation, Vector};
use na::Rotation3;

/// Tolerance on the deviation of a rotation from orthonormality.
const ORTHONORMALITY_EPSILON: Real = 1.0e-6;

/// Errors raised when a rigid transform is not well-formed.
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq)]
pub enum InvalidTransformError {
    /// The transform contains a NaN or infinite component.
    #[error("the rigid transform contains non-finite components")]
    NonFinite,
    /// The rotation part is not a unit quaternion.
    #[error("the rotation quaternion is not normalized (norm = {norm})")]
    NonUnitRotation {
        /// The norm of the offending quaternion.
        norm: Real,
    },
    /// The rotation matrix is not orthonormal, or is a reflection.
    #[error(
        "the rotation matrix is not orthonormal (RᵀR deviates by {deviation}, determinant = {determinant})"
    )]
    NonOrthonormalRotation {
        /// The largest absolute entry of `RᵀR - I`.
        deviation: Real,
        /// The determinant of the matrix.
        determinant: Real,
    },
}

/// Checks that `pos` is a well-formed rigid transform.
///
/// Its rotation must be a unit quaternion (up to a small tolerance) and every component must be
/// finite.
pub fn validate_isometry(pos: &Isometry<Real>) -> Result<(), InvalidTransformError> {
    let coords = &pos.rotation.quaternion().coords;

    if !coords.iter().all(|e| e.is_finite())
        || !pos.translation.vector.iter().all(|e| e.is_finite())
    {
        return Err(InvalidTransformError::NonFinite);
    }

    let norm = coords.norm();
    if (norm - 1.0).abs() > ORTHONORMALITY_EPSILON {
        return Err(InvalidTransformError::NonUnitRotation { norm });
    }

    Ok(())
}

/// Builds a rigid transform from a 3x3 rotation matrix and a translation vector.
///
/// The matrix must be orthonormal with a positive determinant, up to a small tolerance.
///
/// ```
/// use meshcollide3d::math::{Matrix, Vector};
/// use meshcollide3d::utils::isometry_from_parts;
///
/// let pos = isometry_from_parts(&Matrix::identity(), &Vector::new(0.0, 0.75, 0.0)).unwrap();
/// assert_eq!(pos.translation.vector.y, 0.75);
///
/// let skewed = Matrix::new(1.0, 0.5, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0);
/// assert!(isometry_from_parts(&skewed, &Vector::zeros()).is_err());
/// ```
pub fn isometry_from_parts(
    rotation: &Matrix<Real>,
    translation: &Vector<Real>,
) -> Result<Isometry<Real>, InvalidTransformError> {
    if !rotation.iter().chain(translation.iter()).all(|e| e.is_finite()) {
        return Err(InvalidTransformError::NonFinite);
    }

    let deviation = (rotation.transpose() * rotation - Matrix::identity()).amax();
    let determinant = rotation.determinant();

    if deviation > ORTHONORMALITY_EPSILON || determinant <= 0.0 {
        return Err(InvalidTransformError::NonOrthonormalRotation {
            deviation,
            determinant,
        });
    }

    let rot = Rotation::from_rotation_matrix(&Rotation3::from_matrix_unchecked(*rotation));
    Ok(Isometry::from_parts(Translation::from(*translation), rot))
}
