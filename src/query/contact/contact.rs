use crate::math::{Point, Real, UnitVector};

/// Geometric description of a contact between two triangle meshes.
#[derive(Debug, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Contact {
    /// Position of the contact, in world-space.
    pub position: Point<Real>,

    /// Contact normal, in world-space.
    ///
    /// This is the outward normal of the triangle of the first mesh, i.e., it points towards the
    /// exterior of the first shape.
    pub normal: UnitVector<Real>,

    /// How deep the triangle of the second mesh sinks below the triangle plane of the first
    /// mesh. Always non-negative, and zero for coplanar contacts.
    pub penetration_depth: Real,

    /// Index of the triangle of the first mesh.
    pub triangle1: u32,

    /// Index of the triangle of the second mesh.
    pub triangle2: u32,
}

impl Contact {
    /// Creates a new contact.
    #[inline]
    pub fn new(
        position: Point<Real>,
        normal: UnitVector<Real>,
        penetration_depth: Real,
        triangle1: u32,
        triangle2: u32,
    ) -> Self {
        Contact {
            position,
            normal,
            penetration_depth,
            triangle1,
            triangle2,
        }
    }
}
