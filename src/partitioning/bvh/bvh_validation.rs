use super::BvhModel;
use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::math::Real;

/// Relative tolerance used when checking that node volumes contain their vertices.
const CONTAINMENT_TOLERANCE: Real = 1.0e-9;

impl<BV: BoundingVolume> BvhModel<BV> {
    /// Panics if the hierarchy isn’t well-formed.
    ///
    /// The hierarchy is well-formed if it is topologically correct (child indices are valid,
    /// children ranges partition their parent range, every triangle is reachable from exactly one
    /// leaf) and geometrically correct (every node volume contains the vertices of all the
    /// triangles of its subtree).
    pub fn assert_well_formed(&self) {
        if self.mesh.is_empty() {
            assert!(self.nodes.is_empty());
            assert!(self.primitive_indices.is_empty());
            return;
        }

        let num_triangles = self.mesh.num_triangles();
        assert_eq!(self.primitive_indices.len(), num_triangles);

        let mut seen = vec![false; num_triangles];
        for tri in &self.primitive_indices {
            assert!(
                !std::mem::replace(&mut seen[*tri as usize], true),
                "Triangle {} referenced twice.",
                tri
            );
        }

        let root = &self.nodes[0];
        assert_eq!(root.leaf_start, 0);
        assert_eq!(root.leaf_count as usize, num_triangles);

        let scale = Aabb::from_points(self.mesh.vertices())
            .half_extents()
            .amax()
            .max(1.0);
        let tolerance = CONTAINMENT_TOLERANCE * scale;
        let mut visited = vec![false; self.nodes.len()];
        let leaves = self.assert_well_formed_recurse(0, tolerance, &mut visited);

        assert_eq!(leaves, num_triangles);
        assert!(visited.iter().all(|v| *v), "Found unreachable nodes.");
    }

    // Returns the number of triangles reached from the leaves of this subtree.
    fn assert_well_formed_recurse(
        &self,
        node_id: u32,
        tolerance: Real,
        visited: &mut [bool],
    ) -> usize {
        assert!(
            !std::mem::replace(&mut visited[node_id as usize], true),
            "Detected loop. Node {} visited twice.",
            node_id
        );

        let node = &self.nodes[node_id as usize];
        let loosened = node.bv.loosened(tolerance);

        for tri in self.node_triangles(node_id) {
            let idx = self.mesh.indices()[*tri as usize];
            for vid in idx {
                let pt = self.mesh.vertices()[vid as usize];
                assert!(
                    loosened.contains_local_point(&pt),
                    "The volume of node {} does not contain the vertex {} of triangle {}.",
                    node_id,
                    vid,
                    tri
                );
            }
        }

        if node.is_leaf() {
            assert!(node.leaf_count >= 1);
            assert!(node.leaf_count <= self.params.max_leaf_size.max(1));
            node.leaf_count as usize
        } else {
            let left = &self.nodes[node.children as usize];
            let right = &self.nodes[node.children as usize + 1];
            assert_eq!(left.leaf_start, node.leaf_start);
            assert_eq!(right.leaf_start, left.leaf_start + left.leaf_count);
            assert_eq!(left.leaf_count + right.leaf_count, node.leaf_count);

            self.assert_well_formed_recurse(node.children, tolerance, visited)
                + self.assert_well_formed_recurse(node.children + 1, tolerance, visited)
        }
    }
}
