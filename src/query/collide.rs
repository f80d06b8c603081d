use crate::bounding_volume::{BoundingVolume, BoundingVolumeKind};
use crate::math::{Isometry, Real};
use crate::partitioning::BvhModel;
use crate::query::{CollisionError, CollisionRequest, CollisionResult, ContactAccumulator};
use crate::shape::PrimitiveShape;
use crate::transformation::{build_approximate_mesh, TessellationParams};

/// Tests if two triangle meshes, placed at `pos1` and `pos2`, intersect, and computes their
/// contacts as configured by `request`.
pub fn collide<BV: BoundingVolume>(
    model1: &BvhModel<BV>,
    pos1: &Isometry<Real>,
    model2: &BvhModel<BV>,
    pos2: &Isometry<Real>,
    request: &CollisionRequest,
) -> CollisionResult {
    let mut result = CollisionResult::new();
    collide_into(model1, pos1, model2, pos2, request, &mut result);
    result
}

/// Same as [`collide`] but writes into an existing result, which is cleared first.
pub fn collide_into<BV: BoundingVolume>(
    model1: &BvhModel<BV>,
    pos1: &Isometry<Real>,
    model2: &BvhModel<BV>,
    pos2: &Isometry<Real>,
    request: &CollisionRequest,
    result: &mut CollisionResult,
) {
    let mut leaf_pairs = model1.leaf_pairs(pos1, model2, pos2);
    let mut accumulator = ContactAccumulator::new(request, result);

    'traversal: for (leaf1, leaf2) in leaf_pairs.by_ref() {
        for tri_id1 in model1.node_triangles(leaf1) {
            let tri1 = model1.mesh().triangle(*tri_id1).transformed(pos1);

            for tri_id2 in model2.node_triangles(leaf2) {
                let tri2 = model2.mesh().triangle(*tri_id2).transformed(pos2);

                if accumulator
                    .add_triangle_pair(*tri_id1, &tri1, *tri_id2, &tri2)
                    .is_break()
                {
                    break 'traversal;
                }
            }
        }
    }

    accumulator.finish(leaf_pairs.stats());
}

/// Approximates two analytic shapes by triangle meshes and collides them.
///
/// Both meshes are tessellated with `params` and organized into hierarchies of bounding volumes
/// of the given `kind`. Building the hierarchies dominates the cost of this function: prefer
/// [`build_approximate_mesh`] and [`collide`] to query the same shapes repeatedly.
pub fn collide_shapes(
    shape1: &PrimitiveShape,
    pos1: &Isometry<Real>,
    shape2: &PrimitiveShape,
    pos2: &Isometry<Real>,
    kind: BoundingVolumeKind,
    params: &TessellationParams,
    request: &CollisionRequest,
) -> Result<CollisionResult, CollisionError> {
    let model1 = build_approximate_mesh(shape1, pos1, kind, params)?;
    let model2 = build_approximate_mesh(shape2, pos2, kind, params)?;
    model1.collide(&Isometry::identity(), &model2, &Isometry::identity(), request)
}
