//! Intersection between two triangles.

pub use self::clip_halfspace_polygon::clip_halfspace_polygon;
pub use self::triangle_triangle_intersection::{
    triangle_triangle_intersection, triangle_triangle_intersection_with_isometries,
    TriangleTriangleIntersection, TriangleTriangleTolerances,
};

mod clip_halfspace_polygon;
mod triangle_triangle_intersection;
