//! Collision queries between bounding-volume hierarchies of triangle meshes.
//!
//! The main entry points are:
//!
//! * [`collide`] to test two [`crate::partitioning::BvhModel`] sharing the same bounding volume
//!   type, and [`collide_into`] to reuse an existing [`CollisionResult`].
//! * [`crate::partitioning::AnyBvhModel::collide`] when the bounding volume type is only known at
//!   runtime.
//! * [`collide_shapes`] to tessellate and collide two analytic shapes in a single call.

pub use self::closest_points_segment_segment::{
    closest_points_segment_segment, closest_points_segment_segment_with_locations,
    distance_squared_segment_segment,
};
pub use self::collide::{collide, collide_into, collide_shapes};
pub use self::contact::{
    filter_redundant_contacts, CollisionRequest, CollisionResult, Contact, ContactAccumulator,
    SegmentContacts,
};
pub use self::error::CollisionError;
pub use self::triangle_triangle::{
    clip_halfspace_polygon, triangle_triangle_intersection,
    triangle_triangle_intersection_with_isometries, TriangleTriangleIntersection,
    TriangleTriangleTolerances,
};

mod closest_points_segment_segment;
mod collide;
pub mod contact;
mod error;
pub mod triangle_triangle;
