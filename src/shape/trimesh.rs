use crate::math::{Isometry, Point, Real, DEFAULT_EPSILON};
use crate::shape::Triangle;
use core::fmt;

/// Indicates an inconsistency while building a triangle mesh.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum DegenerateMeshError {
    /// The mesh contains no triangle.
    #[error("the triangle mesh must contain at least one triangle")]
    Empty,
    /// A triangle references a vertex that does not exist.
    #[error("the triangle {triangle} references the vertex {index} which is out of bounds")]
    IndexOutOfBounds {
        /// The offending triangle.
        triangle: u32,
        /// The out-of-bounds vertex index.
        index: u32,
    },
    /// A triangle has a zero (or numerically negligible) area.
    #[error("the triangle {triangle} has a zero area")]
    ZeroArea {
        /// The offending triangle.
        triangle: u32,
    },
}

/// A triangle mesh, expressed in the local frame of the shape it approximates.
///
/// Every index is in bounds and no triangle has a zero area.
#[derive(Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct TriMesh {
    vertices: Vec<Point<Real>>,
    indices: Vec<[u32; 3]>,
}

impl fmt::Debug for TriMesh {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TriMesh {{ num_vertices: {}, num_triangles: {} }}",
            self.vertices.len(),
            self.indices.len()
        )
    }
}

impl TriMesh {
    /// Creates a new triangle mesh from a vertex buffer and an index buffer.
    ///
    /// An empty index buffer is accepted and yields an empty mesh.
    pub fn new(
        vertices: Vec<Point<Real>>,
        indices: Vec<[u32; 3]>,
    ) -> Result<Self, DegenerateMeshError> {
        for (tid, idx) in indices.iter().enumerate() {
            let triangle = tid as u32;

            if let Some(index) = idx.iter().find(|i| **i as usize >= vertices.len()) {
                return Err(DegenerateMeshError::IndexOutOfBounds {
                    triangle,
                    index: *index,
                });
            }

            let tri = Triangle::new(
                vertices[idx[0] as usize],
                vertices[idx[1] as usize],
                vertices[idx[2] as usize],
            );

            if tri.is_degenerate(DEFAULT_EPSILON) {
                return Err(DegenerateMeshError::ZeroArea { triangle });
            }
        }

        Ok(Self { vertices, indices })
    }

    /// A mesh without any vertex or triangle.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Does this mesh contain no triangle?
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// The number of triangles forming this mesh.
    pub fn num_triangles(&self) -> usize {
        self.indices.len()
    }

    /// The vertex buffer of this mesh.
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The index buffer of this mesh.
    pub fn indices(&self) -> &[[u32; 3]] {
        &self.indices
    }

    /// Get the `i`-th triangle of this mesh.
    pub fn triangle(&self, i: u32) -> Triangle {
        let idx = self.indices[i as usize];
        Triangle::new(
            self.vertices[idx[0] as usize],
            self.vertices[idx[1] as usize],
            self.vertices[idx[2] as usize],
        )
    }

    /// An iterator through all the triangles of this mesh.
    pub fn triangles(&self) -> impl ExactSizeIterator<Item = Triangle> + '_ {
        self.indices.iter().map(move |ids| {
            Triangle::new(
                self.vertices[ids[0] as usize],
                self.vertices[ids[1] as usize],
                self.vertices[ids[2] as usize],
            )
        })
    }

    /// Transforms in-place the vertices of this triangle mesh.
    ///
    /// Rigid motions preserve the triangle areas so the mesh stays valid.
    pub fn transform_vertices(&mut self, transform: &Isometry<Real>) {
        self.vertices
            .iter_mut()
            .for_each(|pt| *pt = transform * *pt);
    }

    /// Appends a second triangle mesh to this triangle mesh.
    pub fn append(&mut self, rhs: &TriMesh) {
        let base_id = self.vertices.len() as u32;
        self.vertices.extend_from_slice(rhs.vertices());
        self.indices.extend(
            rhs.indices()
                .iter()
                .map(|idx| [idx[0] + base_id, idx[1] + base_id, idx[2] + base_id]),
        );
    }
}
