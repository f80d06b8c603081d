use super::{BvhBuildParams, BvhModel};
use crate::bounding_volume::{Aabb, BoundingVolumeKind, Obb, Obbrss, Rss};
use crate::math::{Isometry, Real};
use crate::query::{self, CollisionError, CollisionRequest, CollisionResult};
use crate::shape::TriMesh;

/// A [`BvhModel`] whose bounding volume type is selected at runtime.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum AnyBvhModel {
    /// A hierarchy of axis-aligned bounding boxes.
    Aabb(BvhModel<Aabb>),
    /// A hierarchy of oriented bounding boxes.
    Obb(BvhModel<Obb>),
    /// A hierarchy of swept-sphere volumes.
    Rss(BvhModel<Rss>),
    /// A hierarchy of combined oriented boxes and swept-sphere volumes.
    Obbrss(BvhModel<Obbrss>),
}

macro_rules! dispatch(
    ($self: expr, $model: ident => $body: expr) => {
        match $self {
            AnyBvhModel::Aabb($model) => $body,
            AnyBvhModel::Obb($model) => $body,
            AnyBvhModel::Rss($model) => $body,
            AnyBvhModel::Obbrss($model) => $body,
        }
    }
);

impl AnyBvhModel {
    /// Builds a hierarchy of bounding volumes of the given kind over `mesh`.
    pub fn new(mesh: TriMesh, kind: BoundingVolumeKind, params: BvhBuildParams) -> Self {
        match kind {
            BoundingVolumeKind::Aabb => Self::Aabb(BvhModel::with_params(mesh, params)),
            BoundingVolumeKind::Obb => Self::Obb(BvhModel::with_params(mesh, params)),
            BoundingVolumeKind::Rss => Self::Rss(BvhModel::with_params(mesh, params)),
            BoundingVolumeKind::Obbrss => Self::Obbrss(BvhModel::with_params(mesh, params)),
        }
    }

    /// The bounding volume type of this hierarchy.
    pub fn kind(&self) -> BoundingVolumeKind {
        dispatch!(self, model => model.kind())
    }

    /// The mesh bounded by this hierarchy.
    pub fn mesh(&self) -> &TriMesh {
        dispatch!(self, model => model.mesh())
    }

    /// Panics if the hierarchy isn’t well-formed.
    pub fn assert_well_formed(&self) {
        dispatch!(self, model => model.assert_well_formed())
    }

    /// Collides this hierarchy placed at `pos1` with `other` placed at `pos2`.
    ///
    /// Both hierarchies must use the same bounding volume type.
    pub fn collide(
        &self,
        pos1: &Isometry<Real>,
        other: &AnyBvhModel,
        pos2: &Isometry<Real>,
        request: &CollisionRequest,
    ) -> Result<CollisionResult, CollisionError> {
        match (self, other) {
            (Self::Aabb(m1), Self::Aabb(m2)) => Ok(query::collide(m1, pos1, m2, pos2, request)),
            (Self::Obb(m1), Self::Obb(m2)) => Ok(query::collide(m1, pos1, m2, pos2, request)),
            (Self::Rss(m1), Self::Rss(m2)) => Ok(query::collide(m1, pos1, m2, pos2, request)),
            (Self::Obbrss(m1), Self::Obbrss(m2)) => {
                Ok(query::collide(m1, pos1, m2, pos2, request))
            }
            _ => Err(CollisionError::MismatchedVolumeKinds {
                kind1: self.kind(),
                kind2: other.kind(),
            }),
        }
    }
}

macro_rules! impl_from_bvh_model(
    ($($variant: ident),*) => {$(
        impl From<BvhModel<$variant>> for AnyBvhModel {
            fn from(model: BvhModel<$variant>) -> Self {
                Self::$variant(model)
            }
        }
    )*}
);

impl_from_bvh_model!(Aabb, Obb, Rss, Obbrss);
