pub use any_bvh_model::AnyBvhModel;
pub use bvh_traverse::{LeafPairs, TraversalStats};
pub use bvh_tree::{BvhBuildParams, BvhModel, BvhNode};

mod any_bvh_model;
mod bvh_build;
mod bvh_traverse;
mod bvh_tree;
mod bvh_validation;
