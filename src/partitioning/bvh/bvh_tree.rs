use crate::bounding_volume::{BoundingVolume, BoundingVolumeKind};
use crate::shape::{DegenerateMeshError, TriMesh};

/// Parameters controlling the construction of a [`BvhModel`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct BvhBuildParams {
    /// The maximum number of triangles stored in a single leaf.
    ///
    /// Values smaller than 1 are treated as 1.
    pub max_leaf_size: u32,
}

impl Default for BvhBuildParams {
    fn default() -> Self {
        Self { max_leaf_size: 1 }
    }
}

/// A node of a [`BvhModel`].
///
/// Each node covers a contiguous range of the model primitive-index permutation. Internal nodes
/// have exactly two children stored next to each other in the node arena: the left child is at
/// index `children` and the right child at `children + 1`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct BvhNode<BV> {
    /// The bounding volume enclosing every triangle of this subtree.
    pub bv: BV,
    /// Index of the left child, or [`BvhNode::NO_CHILDREN`] for a leaf.
    pub children: u32,
    /// Index of the first triangle of this subtree in the model primitive-index permutation.
    pub leaf_start: u32,
    /// The number of triangles of this subtree.
    pub leaf_count: u32,
}

impl<BV> BvhNode<BV> {
    /// Sentinel value of [`BvhNode::children`] for leaves.
    pub const NO_CHILDREN: u32 = u32::MAX;

    /// Creates a leaf covering `leaf_count` triangles starting at `leaf_start`.
    #[inline]
    pub fn leaf(bv: BV, leaf_start: u32, leaf_count: u32) -> Self {
        Self {
            bv,
            children: Self::NO_CHILDREN,
            leaf_start,
            leaf_count,
        }
    }

    /// Is this node a leaf?
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children == Self::NO_CHILDREN
    }

    /// The index of the left child of this node, if it is internal.
    #[inline]
    pub fn left_child(&self) -> Option<u32> {
        (!self.is_leaf()).then_some(self.children)
    }

    /// The index of the right child of this node, if it is internal.
    #[inline]
    pub fn right_child(&self) -> Option<u32> {
        (!self.is_leaf()).then_some(self.children + 1)
    }
}

/// A bounding-volume hierarchy over the triangles of a mesh.
///
/// The model owns its mesh. It is immutable once built and can be shared (e.g. behind an `Arc`)
/// between any number of concurrent queries.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct BvhModel<BV> {
    pub(super) mesh: TriMesh,
    pub(super) nodes: Vec<BvhNode<BV>>,
    pub(super) primitive_indices: Vec<u32>,
    pub(super) params: BvhBuildParams,
}

impl<BV: BoundingVolume> BvhModel<BV> {
    /// Builds a hierarchy over `mesh` with the default parameters.
    ///
    /// An empty mesh yields a model without any node, which never collides with anything.
    pub fn new(mesh: TriMesh) -> Self {
        Self::with_params(mesh, BvhBuildParams::default())
    }

    /// Builds a hierarchy over `mesh` with the given parameters.
    pub fn with_params(mesh: TriMesh, params: BvhBuildParams) -> Self {
        Self::build(mesh, params)
    }

    /// Builds a hierarchy over `mesh`, failing if it contains no triangle.
    pub fn new_non_empty(mesh: TriMesh) -> Result<Self, DegenerateMeshError> {
        if mesh.is_empty() {
            Err(DegenerateMeshError::Empty)
        } else {
            Ok(Self::new(mesh))
        }
    }

    /// The runtime tag of the bounding volume type of this model.
    #[inline]
    pub fn kind(&self) -> BoundingVolumeKind {
        BV::KIND
    }

    /// The root node, if the model is not empty.
    #[inline]
    pub fn root(&self) -> Option<&BvhNode<BV>> {
        self.nodes.first()
    }
}

impl<BV> BvhModel<BV> {
    /// The mesh bounded by this hierarchy.
    #[inline]
    pub fn mesh(&self) -> &TriMesh {
        &self.mesh
    }

    /// The node arena. The root is at index 0.
    #[inline]
    pub fn nodes(&self) -> &[BvhNode<BV>] {
        &self.nodes
    }

    /// The parameters used to build this hierarchy.
    #[inline]
    pub fn params(&self) -> &BvhBuildParams {
        &self.params
    }

    /// The permutation of the mesh triangle indices ordered by the hierarchy leaves.
    #[inline]
    pub fn primitive_indices(&self) -> &[u32] {
        &self.primitive_indices
    }

    /// Does this hierarchy contain no node?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The indices of the mesh triangles covered by the subtree of the node `node_id`.
    #[inline]
    pub fn node_triangles(&self, node_id: u32) -> &[u32] {
        let node = &self.nodes[node_id as usize];
        let start = node.leaf_start as usize;
        &self.primitive_indices[start..start + node.leaf_count as usize]
    }

    /// The number of leaves of this hierarchy.
    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_leaf()).count()
    }

    /// The depth of the subtree rooted at `node_id`. A single leaf has a depth of 1.
    pub fn subtree_depth(&self, node_id: u32) -> u32 {
        match self.nodes.get(node_id as usize) {
            None => 0,
            Some(node) if node.is_leaf() => 1,
            Some(node) => {
                1 + self
                    .subtree_depth(node.children)
                    .max(self.subtree_depth(node.children + 1))
            }
        }
    }
}
