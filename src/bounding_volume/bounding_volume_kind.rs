use core::fmt;

/// Runtime tag identifying a bounding volume type.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BoundingVolumeKind {
    /// Axis-aligned bounding box, see [`crate::bounding_volume::Aabb`].
    Aabb,
    /// Oriented bounding box, see [`crate::bounding_volume::Obb`].
    Obb,
    /// Swept-sphere volume, see [`crate::bounding_volume::Rss`].
    Rss,
    /// Oriented box combined with a swept sphere, see [`crate::bounding_volume::Obbrss`].
    Obbrss,
}

impl BoundingVolumeKind {
    /// All the bounding volume kinds, from the cheapest to the tightest.
    pub const ALL: [BoundingVolumeKind; 4] = [Self::Aabb, Self::Obb, Self::Rss, Self::Obbrss];
}

impl fmt::Display for BoundingVolumeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Aabb => "AABB",
            Self::Obb => "OBB",
            Self::Rss => "RSS",
            Self::Obbrss => "OBBRSS",
        };
        f.write_str(name)
    }
}
