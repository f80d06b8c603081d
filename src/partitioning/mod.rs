//! Spatial partitioning tools.

pub use self::bvh::{
    AnyBvhModel, BvhBuildParams, BvhModel, BvhNode, LeafPairs, TraversalStats,
};

mod bvh;
