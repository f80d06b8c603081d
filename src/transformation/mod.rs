//! Conversion of analytic shapes into triangle meshes.

pub use self::mesh_approximation::{approximate_mesh, build_approximate_mesh, TessellationParams};

mod mesh_approximation;
mod to_trimesh;
pub mod utils;
