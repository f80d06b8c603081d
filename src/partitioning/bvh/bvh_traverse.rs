use super::{BvhModel, BvhNode};
use crate::bounding_volume::BoundingVolume;
use crate::math::{Isometry, Real};
use smallvec::SmallVec;

const TRAVERSAL_STACK_SIZE: usize = 32;

/// Counters gathered while traversing a pair of hierarchies.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct TraversalStats {
    /// The number of bounding volume overlap tests performed.
    pub bv_tests: usize,
    /// The number of leaf pairs whose bounding volumes overlap.
    pub leaf_pairs: usize,
    /// The number of triangle pairs tested for intersection.
    pub triangle_tests: usize,
}

impl<BV: BoundingVolume> BvhModel<BV> {
    /// Performs a simultaneous traversal of the hierarchies `self` and `other`, placed at `pos1`
    /// and `pos2`, and yields the pairs of leaves with overlapping bounding volumes.
    ///
    /// The traversal is lazy: dropping the iterator stops it.
    pub fn leaf_pairs<'a>(
        &'a self,
        pos1: &Isometry<Real>,
        other: &'a BvhModel<BV>,
        pos2: &Isometry<Real>,
    ) -> LeafPairs<'a, BV> {
        let mut result = LeafPairs {
            model1: self,
            model2: other,
            pos12: pos1.inv_mul(pos2),
            stack: SmallVec::new(),
            stats: TraversalStats::default(),
        };

        if !self.is_empty() && !other.is_empty() && result.check(0, 0) {
            result.stack.push((0, 0));
        }

        result
    }
}

/// Iterator through the pairs of overlapping leaves of two hierarchies.
///
/// Yields pairs of node indices `(leaf1, leaf2)`, the first one from the first hierarchy and the
/// second one from the second hierarchy.
pub struct LeafPairs<'a, BV> {
    model1: &'a BvhModel<BV>,
    model2: &'a BvhModel<BV>,
    pos12: Isometry<Real>,
    stack: SmallVec<[(u32, u32); TRAVERSAL_STACK_SIZE]>,
    stats: TraversalStats,
}

impl<BV: BoundingVolume> LeafPairs<'_, BV> {
    /// The counters gathered so far.
    ///
    /// `triangle_tests` is left to zero as this iterator never tests triangles.
    #[inline]
    pub fn stats(&self) -> TraversalStats {
        self.stats
    }

    /// The position of the second hierarchy relative to the first one.
    #[inline]
    pub fn pos12(&self) -> &Isometry<Real> {
        &self.pos12
    }

    fn node1(&self, id: u32) -> &BvhNode<BV> {
        &self.model1.nodes[id as usize]
    }

    fn node2(&self, id: u32) -> &BvhNode<BV> {
        &self.model2.nodes[id as usize]
    }

    fn check(&mut self, id1: u32, id2: u32) -> bool {
        self.stats.bv_tests += 1;
        let bv1 = &self.model1.nodes[id1 as usize].bv;
        let bv2 = &self.model2.nodes[id2 as usize].bv;
        bv1.intersects(&self.pos12, bv2)
    }

    fn push_if_overlapping(&mut self, id1: u32, id2: u32) {
        if self.check(id1, id2) {
            self.stack.push((id1, id2));
        }
    }
}

impl<BV: BoundingVolume> Iterator for LeafPairs<'_, BV> {
    type Item = (u32, u32);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (id1, id2) = self.stack.pop()?;
            let node1 = *self.node1(id1);
            let node2 = *self.node2(id2);

            match (node1.is_leaf(), node2.is_leaf()) {
                (true, true) => {
                    self.stats.leaf_pairs += 1;
                    return Some((id1, id2));
                }
                (true, false) => {
                    self.push_if_overlapping(id1, node2.children + 1);
                    self.push_if_overlapping(id1, node2.children);
                }
                (false, true) => {
                    self.push_if_overlapping(node1.children + 1, id2);
                    self.push_if_overlapping(node1.children, id2);
                }
                (false, false) => {
                    let mut candidates: SmallVec<[(u32, u32, u32); 4]> = SmallVec::new();

                    for child1 in [node1.children, node1.children + 1] {
                        for child2 in [node2.children, node2.children + 1] {
                            if self.check(child1, child2) {
                                let weight =
                                    self.node1(child1).leaf_count + self.node2(child2).leaf_count;
                                candidates.push((weight, child1, child2));
                            }
                        }
                    }

                    // The heaviest pair is pushed last so it is popped first.
                    candidates.sort_by_key(|(weight, _, _)| *weight);
                    self.stack
                        .extend(candidates.into_iter().map(|(_, id1, id2)| (id1, id2)));
                }
            }
        }
    }
}
