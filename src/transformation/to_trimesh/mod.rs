//! Triangle mesh generation from the analytic primitives.
//!
//! Each primitive exposes a `to_trimesh` method returning the pair
//! `(Vec<Point<Real>>, Vec<[u32; 3]>)` of a closed mesh expressed in the primitive's local frame.
//! Triangles are wound counter-clockwise when seen from outside the solid. Curved surfaces are
//! inscribed: every vertex lies on the analytic boundary.

mod ball_to_trimesh;
mod capsule_to_trimesh;
mod cone_to_trimesh;
mod cuboid_to_trimesh;
mod cylinder_to_trimesh;
