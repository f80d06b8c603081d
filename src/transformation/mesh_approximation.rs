use crate::bounding_volume::BoundingVolumeKind;
use crate::math::{Isometry, Real};
use crate::partitioning::{AnyBvhModel, BvhBuildParams};
use crate::query::CollisionError;
use crate::shape::{InvalidShapeError, PrimitiveShape, TriMesh};
use crate::transformation::utils;
use crate::utils::validate_isometry;

/// Controls how finely analytic shapes are tessellated.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct TessellationParams {
    /// Number of subdivisions along each edge of a cuboid face. Must be at least 1.
    pub cuboid_subdivisions: u32,
    /// Number of sectors around the axis of a curved shape. Must be at least 3.
    pub angular_subdivisions: u32,
    /// Number of latitude bands of a ball or of the two caps of a capsule. Must be at least 2.
    pub polar_subdivisions: u32,
}

impl Default for TessellationParams {
    fn default() -> Self {
        Self {
            cuboid_subdivisions: 1,
            angular_subdivisions: 16,
            polar_subdivisions: 8,
        }
    }
}

impl TessellationParams {
    /// Checks that every subdivision count is large enough to produce a closed mesh.
    pub fn validate(&self) -> Result<(), InvalidShapeError> {
        InvalidShapeError::check_subdivisions("cuboid_subdivisions", self.cuboid_subdivisions, 1)?;
        InvalidShapeError::check_subdivisions(
            "angular_subdivisions",
            self.angular_subdivisions,
            3,
        )?;
        InvalidShapeError::check_subdivisions("polar_subdivisions", self.polar_subdivisions, 2)
    }
}

/// Approximates `shape`, placed at `pos`, by a triangle mesh.
///
/// The placement is baked into the vertices of the returned mesh, so the mesh is typically
/// queried later with the identity transform (or with a transform relative to `pos`).
///
/// # Errors
///
/// * [`CollisionError::InvalidShape`] if a dimension of `shape` isn't finite and strictly positive,
///   or if `params` has too few subdivisions.
/// * [`CollisionError::InvalidTransform`] if `pos` isn't a well-formed rigid transform.
pub fn approximate_mesh(
    shape: &PrimitiveShape,
    pos: &Isometry<Real>,
    params: &TessellationParams,
) -> Result<TriMesh, CollisionError> {
    shape.validate()?;
    params.validate()?;
    validate_isometry(pos)?;

    let (mut vertices, indices) = match shape {
        PrimitiveShape::Cuboid(s) => s.to_trimesh(params.cuboid_subdivisions),
        PrimitiveShape::Ball(s) => {
            s.to_trimesh(params.angular_subdivisions, params.polar_subdivisions)
        }
        PrimitiveShape::Cylinder(s) => s.to_trimesh(params.angular_subdivisions),
        PrimitiveShape::Cone(s) => s.to_trimesh(params.angular_subdivisions),
        PrimitiveShape::Capsule(s) => {
            s.to_trimesh(params.angular_subdivisions, params.polar_subdivisions)
        }
    };

    utils::transform(&mut vertices, pos);
    Ok(TriMesh::new(vertices, indices)?)
}

/// Approximates `shape`, placed at `pos`, by a triangle mesh and organizes it into a hierarchy of
/// bounding volumes of the given `kind`.
pub fn build_approximate_mesh(
    shape: &PrimitiveShape,
    pos: &Isometry<Real>,
    kind: BoundingVolumeKind,
    params: &TessellationParams,
) -> Result<AnyBvhModel, CollisionError> {
    let mesh = approximate_mesh(shape, pos, params)?;
    log::debug!(
        "Approximated {:?} by {} triangles.",
        shape,
        mesh.num_triangles()
    );
    Ok(AnyBvhModel::new(mesh, kind, BvhBuildParams::default()))
}
