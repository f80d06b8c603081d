use crate::bounding_volume::BoundingVolumeKind;
use crate::shape::{DegenerateMeshError, InvalidShapeError};
use crate::utils::InvalidTransformError;

/// Errors raised while preparing or running a collision query.
///
/// Numerical edge cases met while testing triangles are never reported as errors.
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq)]
pub enum CollisionError {
    /// The parameters of an analytic shape are invalid.
    #[error(transparent)]
    InvalidShape(#[from] InvalidShapeError),
    /// A rigid transform is not well-formed.
    #[error(transparent)]
    InvalidTransform(#[from] InvalidTransformError),
    /// A triangle mesh is degenerate.
    #[error(transparent)]
    DegenerateMesh(#[from] DegenerateMeshError),
    /// The two hierarchies do not use the same bounding volume type.
    #[error("cannot collide a hierarchy of {kind1} with a hierarchy of {kind2}")]
    MismatchedVolumeKinds {
        /// The bounding volume type of the first hierarchy.
        kind1: BoundingVolumeKind,
        /// The bounding volume type of the second hierarchy.
        kind2: BoundingVolumeKind,
    },
}
