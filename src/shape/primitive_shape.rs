use crate::shape::{Ball, Capsule, Cone, Cuboid, Cylinder, InvalidShapeError};

/// An analytic shape that can be approximated by a triangle mesh.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub enum PrimitiveShape {
    /// A box.
    Cuboid(Cuboid),
    /// A sphere.
    Ball(Ball),
    /// A cylinder aligned with the `y` axis.
    Cylinder(Cylinder),
    /// A cone aligned with the `y` axis.
    Cone(Cone),
    /// A capsule aligned with the `y` axis.
    Capsule(Capsule),
}

impl PrimitiveShape {
    /// Checks that the shape parameters describe a valid solid.
    pub fn validate(&self) -> Result<(), InvalidShapeError> {
        match self {
            Self::Cuboid(s) => s.validate(),
            Self::Ball(s) => s.validate(),
            Self::Cylinder(s) => s.validate(),
            Self::Cone(s) => s.validate(),
            Self::Capsule(s) => s.validate(),
        }
    }
}

macro_rules! impl_from_primitive(
    ($($variant: ident),*) => {$(
        impl From<$variant> for PrimitiveShape {
            fn from(shape: $variant) -> Self {
                Self::$variant(shape)
            }
        }
    )*}
);

impl_from_primitive!(Cuboid, Ball, Cylinder, Cone, Capsule);
