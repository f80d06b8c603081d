use super::{BvhBuildParams, BvhModel, BvhNode};
use crate::bounding_volume::BoundingVolume;
use crate::math::{Point, Real};
use crate::shape::TriMesh;
use ordered_float::OrderedFloat;

struct BuildContext<'a> {
    mesh: &'a TriMesh,
    centroids: Vec<Point<Real>>,
    max_leaf_size: usize,
    // Scratch buffer reused by every volume fit.
    points: Vec<Point<Real>>,
}

impl BuildContext<'_> {
    fn fit<BV: BoundingVolume>(&mut self, primitives: &[u32]) -> BV {
        self.points.clear();
        for tri in primitives {
            let idx = self.mesh.indices()[*tri as usize];
            let vertices = self.mesh.vertices();
            self.points.extend(idx.iter().map(|i| vertices[*i as usize]));
        }

        BV::from_points(&self.points)
    }
}

impl<BV: BoundingVolume> BvhModel<BV> {
    /// Builds the hierarchy top-down.
    ///
    /// Every range with more than `max_leaf_size` triangles is split at the median of the
    /// projections of the triangle centroids on the split axis of its bounding volume. Ties are
    /// broken by triangle index so the result is fully deterministic.
    pub(super) fn build(mesh: TriMesh, params: BvhBuildParams) -> Self {
        let num_triangles = mesh.num_triangles();
        let mut primitive_indices: Vec<u32> = (0..num_triangles as u32).collect();
        let mut nodes = Vec::with_capacity(2 * num_triangles);

        if num_triangles > 0 {
            let mut ctxt = BuildContext {
                mesh: &mesh,
                centroids: mesh.triangles().map(|tri| tri.center()).collect(),
                max_leaf_size: params.max_leaf_size.max(1) as usize,
                points: Vec::new(),
            };

            let root_bv = ctxt.fit(&primitive_indices);
            nodes.push(BvhNode::leaf(root_bv, 0, num_triangles as u32));
            Self::build_recursive(&mut ctxt, &mut nodes, &mut primitive_indices, 0);
        }

        let result = Self {
            nodes,
            primitive_indices,
            params,
            mesh,
        };

        log::debug!(
            "Built {} hierarchy over {} triangles: {} nodes, {} leaves, depth {}.",
            BV::KIND,
            num_triangles,
            result.nodes.len(),
            result.leaf_count(),
            result.subtree_depth(0)
        );

        result
    }

    fn build_recursive(
        ctxt: &mut BuildContext<'_>,
        nodes: &mut Vec<BvhNode<BV>>,
        primitive_indices: &mut [u32],
        node_id: usize,
    ) {
        let node = nodes[node_id];
        let start = node.leaf_start as usize;
        let count = node.leaf_count as usize;

        if count <= ctxt.max_leaf_size {
            return;
        }

        let range = &mut primitive_indices[start..start + count];
        let axis = node.bv.split_axis().into_inner();
        let key = |tri: &u32| {
            let proj = ctxt.centroids[*tri as usize].coords.dot(&axis);
            (OrderedFloat(proj), *tri)
        };
        let mid = count / 2;
        let _ = range.select_nth_unstable_by_key(mid, key);

        let left_bv = ctxt.fit(&range[..mid]);
        let right_bv = ctxt.fit(&range[mid..]);
        let left_id = nodes.len();
        nodes.push(BvhNode::leaf(left_bv, start as u32, mid as u32));
        nodes.push(BvhNode::leaf(right_bv, (start + mid) as u32, (count - mid) as u32));
        nodes[node_id].children = left_id as u32;

        Self::build_recursive(ctxt, nodes, primitive_indices, left_id);
        Self::build_recursive(ctxt, nodes, primitive_indices, left_id + 1);
    }
}
