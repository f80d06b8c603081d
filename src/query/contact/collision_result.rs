use crate::partitioning::TraversalStats;
use crate::query::Contact;

/// The result of a collision query.
///
/// A result can be reused across queries with [`crate::query::collide_into`], which clears it
/// first.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct CollisionResult {
    pub(crate) contacts: Vec<Contact>,
    pub(crate) intersects: bool,
    pub(crate) stats: TraversalStats,
}

impl CollisionResult {
    /// An empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Do the two meshes intersect?
    #[inline]
    pub fn intersects(&self) -> bool {
        self.intersects
    }

    /// The number of contacts reported.
    #[inline]
    pub fn contact_count(&self) -> usize {
        self.contacts.len()
    }

    /// The `i`-th contact, if it exists.
    #[inline]
    pub fn contact(&self, i: usize) -> Option<&Contact> {
        self.contacts.get(i)
    }

    /// All the contacts reported, in the order they were found (or in convex-hull order if they
    /// were filtered).
    #[inline]
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Counters gathered during the query.
    #[inline]
    pub fn stats(&self) -> &TraversalStats {
        &self.stats
    }

    /// Resets this result so it can be reused.
    pub fn clear(&mut self) {
        self.contacts.clear();
        self.intersects = false;
        self.stats = TraversalStats::default();
    }
}
