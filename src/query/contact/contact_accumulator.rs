use crate::math::Real;
use crate::partitioning::TraversalStats;
use crate::query::{
    filter_redundant_contacts, triangle_triangle_intersection, CollisionRequest,
    CollisionResult, Contact, SegmentContacts, TriangleTriangleIntersection,
};
use crate::shape::Triangle;
use core::ops::ControlFlow;

/// Collects the contacts between the triangle pairs reached by a hierarchy traversal.
///
/// The accumulator decides when the traversal can stop: at the first intersecting pair for a
/// boolean request, or once `max_contacts` contacts are stored if they are not filtered.
pub struct ContactAccumulator<'a> {
    request: &'a CollisionRequest,
    result: &'a mut CollisionResult,
}

impl<'a> ContactAccumulator<'a> {
    /// Starts accumulating into `result`, after clearing it.
    pub fn new(request: &'a CollisionRequest, result: &'a mut CollisionResult) -> Self {
        result.clear();
        Self { request, result }
    }

    /// Tests a pair of world-space triangles, identified by their index in their mesh.
    ///
    /// Returns [`ControlFlow::Break`] once the query result is complete.
    pub fn add_triangle_pair(
        &mut self,
        triangle1: u32,
        tri1: &Triangle,
        triangle2: u32,
        tri2: &Triangle,
    ) -> ControlFlow<()> {
        self.result.stats.triangle_tests += 1;

        let Some(intersection) =
            triangle_triangle_intersection(tri1, tri2, &self.request.tolerances)
        else {
            return ControlFlow::Continue(());
        };

        self.result.intersects = true;

        if self.request.is_boolean() {
            return ControlFlow::Break(());
        }

        // The intersection test already rejects degenerate triangles.
        let Some(normal) = tri1.normal() else {
            return ControlFlow::Continue(());
        };

        let mut push = |position, penetration_depth| {
            self.result.contacts.push(Contact::new(
                position,
                normal,
                penetration_depth,
                triangle1,
                triangle2,
            ))
        };

        match &intersection {
            TriangleTriangleIntersection::Segment { a, b } => {
                let depth = tri2
                    .vertices()
                    .iter()
                    .map(|pt| -normal.dot(&(pt - tri1.a)))
                    .fold(0.0, Real::max);

                match self.request.segment_contacts {
                    SegmentContacts::Endpoints => {
                        push(*a, depth);
                        push(*b, depth);
                    }
                    SegmentContacts::Midpoint => push(na::center(a, b), depth),
                }
            }
            TriangleTriangleIntersection::Polygon(points) => {
                for pt in points {
                    push(*pt, 0.0);
                }
            }
        }

        if !self.request.filter_contact_points
            && self.result.contacts.len() >= self.request.max_contacts
        {
            self.result.contacts.truncate(self.request.max_contacts);
            log::debug!(
                "Contact limit of {} reached, stopping the traversal early.",
                self.request.max_contacts
            );
            return ControlFlow::Break(());
        }

        ControlFlow::Continue(())
    }

    /// Completes the query result: filters the contacts if requested and enforces
    /// `max_contacts`.
    pub fn finish(self, traversal: TraversalStats) {
        self.result.stats.bv_tests = traversal.bv_tests;
        self.result.stats.leaf_pairs = traversal.leaf_pairs;

        if self.request.filter_contact_points && !self.result.contacts.is_empty() {
            let num_candidates = self.result.contacts.len();
            filter_redundant_contacts(&mut self.result.contacts, self.request.filter_tolerance);
            log::debug!(
                "Filtered {} candidate contacts down to {}.",
                num_candidates,
                self.result.contacts.len()
            );
        }

        self.result.contacts.truncate(self.request.max_contacts);

        log::trace!(
            "Collision query: intersects = {}, {} contacts, {:?}.",
            self.result.intersects,
            self.result.contacts.len(),
            self.result.stats
        );
    }
}
