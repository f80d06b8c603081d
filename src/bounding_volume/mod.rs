//! Bounding volumes enclosing the triangles of a hierarchy node.
//!
//! All the volumes implement [`BoundingVolume`] and are listed, from the cheapest to test to the
//! tightest, by [`BoundingVolumeKind::ALL`].

pub use self::aabb::Aabb;
pub use self::bounding_volume::BoundingVolume;
pub(crate) use self::bounding_volume::OVERLAP_RELATIVE_MARGIN;
pub use self::bounding_volume_kind::BoundingVolumeKind;
pub use self::obb::{obb_obb_separated, Obb};
pub use self::obbrss::Obbrss;
pub use self::rss::Rss;

mod aabb;
mod bounding_volume;
mod bounding_volume_kind;
mod obb;
mod obbrss;
mod rss;
