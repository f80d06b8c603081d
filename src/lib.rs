/*!
meshcollide3d
=============

**meshcollide3d** is a narrow-phase collision-detection library for rigid shapes
approximated by triangle meshes, written with the rust programming language.

Each shape is tessellated once into a [`shape::TriMesh`], organized into a
[`partitioning::BvhModel`] over one of the supported bounding volumes
([`bounding_volume::Aabb`], [`bounding_volume::Obb`], [`bounding_volume::Rss`],
[`bounding_volume::Obbrss`]), and then queried any number of times against
other hierarchies placed with arbitrary rigid transforms with [`query::collide`].

```
use meshcollide3d::bounding_volume::Obbrss;
use meshcollide3d::math::{Isometry, Vector};
use meshcollide3d::partitioning::BvhModel;
use meshcollide3d::query::{self, CollisionRequest};
use meshcollide3d::shape::Cuboid;
use meshcollide3d::transformation::{approximate_mesh, TessellationParams};

let params = TessellationParams::default();
let big = Cuboid::new(Vector::new(0.5, 0.5, 0.5));
let small = Cuboid::new(Vector::new(0.25, 0.25, 0.25));
let mesh1 = approximate_mesh(&big.into(), &Isometry::identity(), &params).unwrap();
let mesh2 = approximate_mesh(&small.into(), &Isometry::identity(), &params).unwrap();
let model1 = BvhModel::<Obbrss>::new(mesh1);
let model2 = BvhModel::<Obbrss>::new(mesh2);

let pos2 = Isometry::translation(0.0, 0.75, 0.0);
let request = CollisionRequest::default().with_filtered_contacts(true);
let result = query::collide(&model1, &Isometry::identity(), &model2, &pos2, &request);
assert!(result.intersects());
assert_eq!(result.contact_count(), 4);
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![warn(unused_qualifications)]

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod partitioning;
pub mod query;
pub mod shape;
pub mod transformation;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    pub use f64 as Real;
}

/// Aliases for the mathematical types used by this crate.
pub mod math {
    pub use super::real::*;
    pub use na::{Isometry3, Matrix3, Point3, Translation3, UnitVector3, Vector3};
    use na::UnitQuaternion;

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The unit vector type.
    pub use UnitVector3 as UnitVector;

    /// The matrix type.
    pub use Matrix3 as Matrix;

    /// The transformation matrix type.
    pub use Isometry3 as Isometry;

    /// The rotation type.
    pub type Rotation<N> = UnitQuaternion<N>;

    /// The translation type.
    pub use Translation3 as Translation;
}
