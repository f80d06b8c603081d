use crate::math::Real;
use crate::query::TriangleTriangleTolerances;

/// Which points are reported for a pair of triangles intersecting along a segment.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum SegmentContacts {
    /// Both endpoints of the intersection segment.
    #[default]
    Endpoints,
    /// The middle of the intersection segment.
    Midpoint,
}

/// Parameters of a collision query.
///
/// ```
/// use meshcollide3d::query::CollisionRequest;
///
/// let request = CollisionRequest::default()
///     .with_max_contacts(8)
///     .with_filtered_contacts(true);
/// assert_eq!(request.max_contacts, 8);
/// assert!(request.enable_contact);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct CollisionRequest {
    /// The maximum number of contacts reported.
    ///
    /// Zero turns the query into a boolean test that stops at the first intersecting pair.
    pub max_contacts: usize,
    /// If `false`, only the `intersects` flag of the result is computed.
    pub enable_contact: bool,
    /// If `true`, redundant contacts are removed with [`crate::query::filter_redundant_contacts`].
    ///
    /// This requires the exhaustive set of contacts so the query never stops early.
    pub filter_contact_points: bool,
    /// The contacts reported for triangles intersecting along a segment.
    pub segment_contacts: SegmentContacts,
    /// Tolerances of the triangle-triangle intersection test.
    pub tolerances: TriangleTriangleTolerances,
    /// Distance below which two contacts are considered duplicates by the filter.
    pub filter_tolerance: Real,
}

impl Default for CollisionRequest {
    fn default() -> Self {
        Self::new(1000, true)
    }
}

impl CollisionRequest {
    /// Creates a request for at most `max_contacts` contacts.
    pub fn new(max_contacts: usize, enable_contact: bool) -> Self {
        Self {
            max_contacts,
            enable_contact,
            filter_contact_points: false,
            segment_contacts: SegmentContacts::default(),
            tolerances: TriangleTriangleTolerances::default(),
            filter_tolerance: 1.0e-6,
        }
    }

    /// A request that only computes whether the meshes intersect.
    pub fn boolean() -> Self {
        Self::new(0, false)
    }

    /// Does this request only need the `intersects` flag?
    #[inline]
    pub fn is_boolean(&self) -> bool {
        !self.enable_contact || self.max_contacts == 0
    }

    /// Sets the maximum number of contacts reported.
    #[must_use]
    pub fn with_max_contacts(mut self, max_contacts: usize) -> Self {
        self.max_contacts = max_contacts;
        self
    }

    /// Enables or disables the computation of contacts.
    #[must_use]
    pub fn with_contacts_enabled(mut self, enabled: bool) -> Self {
        self.enable_contact = enabled;
        self
    }

    /// Enables or disables the removal of redundant contacts.
    #[must_use]
    pub fn with_filtered_contacts(mut self, filter: bool) -> Self {
        self.filter_contact_points = filter;
        self
    }

    /// Sets the contacts reported for triangles intersecting along a segment.
    #[must_use]
    pub fn with_segment_contacts(mut self, segment_contacts: SegmentContacts) -> Self {
        self.segment_contacts = segment_contacts;
        self
    }

    /// Sets the tolerances of the triangle-triangle intersection test.
    #[must_use]
    pub fn with_tolerances(mut self, tolerances: TriangleTriangleTolerances) -> Self {
        self.tolerances = tolerances;
        self
    }
}
