//! Shapes supported by meshcollide3d.
//!
//! Analytic primitives ([`Cuboid`], [`Ball`], [`Cylinder`], [`Cone`], [`Capsule`]) are only used
//! as inputs of the mesh approximation (see [`crate::transformation::approximate_mesh`]). All the
//! collision queries operate on [`TriMesh`] through their bounding-volume hierarchies.

pub use self::ball::Ball;
pub use self::capsule::Capsule;
pub use self::cone::Cone;
pub use self::cuboid::Cuboid;
pub use self::cylinder::Cylinder;
pub use self::primitive_shape::PrimitiveShape;
pub use self::segment::{Segment, SegmentPointLocation};
pub use self::shape_error::InvalidShapeError;
pub use self::triangle::Triangle;
pub use self::trimesh::{DegenerateMeshError, TriMesh};

mod ball;
mod capsule;
mod cone;
mod cuboid;
mod cylinder;
mod primitive_shape;
mod segment;
mod shape_error;
mod triangle;
mod trimesh;
