// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Per-vertex label container: the dominance bucket.
//!
//! A bucket holds every non-dominated label ever materialised at one vertex,
//! split into two stores:
//!
//! * `processed` — an append-only vector of finalised labels. Positions are
//!   stable, so back-pointers of labels at other vertices may reference them
//!   by index forever. Processed labels are never mutated by a merge.
//! * `unprocessed` — a min-heap of frontier labels ordered by the label key.
//!   Labels here can still lose against a newcomer; losers are invalidated
//!   in place and physically removed only when they surface at the top
//!   (lazy invalidation).
//!
//! A label's life inside a bucket:
//! `fresh -> unprocessed(valid) -> invalidated -> dropped at next top-peek`
//! or `unprocessed(valid) -> popped -> processed` (terminal).
//!
//! After every mutating operation the top of the unprocessed heap is a
//! valid label or the heap is empty.

use crate::labels::Label;
use crate::queues::binary_heap::BinaryHeap;
use crate::queues::domination::DominationCriterion;

#[derive(Debug, Clone)]
pub struct Bucket<L: Label> {
    processed: Vec<L>,
    unprocessed: BinaryHeap<L>,
    valid_unprocessed: usize,
}

impl<L: Label> Default for Bucket<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Label> Bucket<L> {
    pub fn new() -> Self {
        Self {
            processed: Vec::new(),
            unprocessed: BinaryHeap::new(L::cmp_keys),
            valid_unprocessed: 0,
        }
    }

    /// Merge `label` into the bucket under the domination criterion `D`.
    ///
    /// Walks the existing elements (processed first, then unprocessed). If
    /// any existing label dominates the newcomer the bucket is left
    /// unchanged and `false` is returned. Otherwise every *unprocessed*
    /// label dominated by the newcomer is invalidated, the newcomer enters
    /// the unprocessed heap, and `true` is returned.
    pub fn merge<D: DominationCriterion>(&mut self, mut label: L) -> bool {
        label.set_valid(true);

        let mut rejected = self
            .processed
            .iter()
            .any(|existing| D::dominates(existing, &label));
        if rejected {
            self.pop_invalid_unprocessed();
            return false;
        }

        let mut invalidated = 0usize;
        for existing in self.unprocessed.iter_mut() {
            if !existing.is_valid() {
                continue;
            }
            if D::dominates(existing, &label) {
                rejected = true;
                break;
            }
            if D::dominates(&label, existing) {
                existing.set_valid(false);
                invalidated += 1;
            }
        }
        self.valid_unprocessed -= invalidated;

        if rejected {
            self.pop_invalid_unprocessed();
            return false;
        }

        self.unprocessed.push(label);
        self.valid_unprocessed += 1;
        self.pop_invalid_unprocessed();
        true
    }

    /// The smallest valid unprocessed label. Panics when the queue is empty.
    pub fn top(&self) -> &L {
        let top = self.unprocessed.peek().expect("top of empty bucket queue");
        debug_assert!(top.is_valid());
        top
    }

    /// Finalise the smallest unprocessed label: remove it from the heap,
    /// append it to the processed sequence, and return its new index.
    /// Panics when the queue is empty.
    pub fn pop(&mut self) -> usize {
        let element = self
            .unprocessed
            .pop()
            .expect("pop of empty bucket queue");
        debug_assert!(element.is_valid());
        self.valid_unprocessed -= 1;
        self.pop_invalid_unprocessed();
        self.move_to_processed(element)
    }

    /// [`Bucket::pop`] returning the finalised label together with its index.
    pub fn delete_top(&mut self) -> (L, usize) {
        let index = self.pop();
        (self.processed[index].clone(), index)
    }

    /// Whether a processed label exists at `index`.
    pub fn has_element_at(&self, index: usize) -> bool {
        index < self.processed.len()
    }

    /// The processed label at `index`. Panics when out of range.
    pub fn element_at(&self, index: usize) -> &L {
        &self.processed[index]
    }

    /// Whether any element of the bucket key-equals `label`.
    pub fn has_element(&self, label: &L) -> bool {
        let mut found = false;
        self.for_all_elements_while(|existing| {
            if existing.key_eq(label) {
                found = true;
                return false;
            }
            true
        });
        found
    }

    /// Every valid label whose `value()` equals the bucket minimum.
    ///
    /// The bucket is left untouched; optima are returned by clone. An empty
    /// bucket yields an empty vector.
    pub fn optima(&self) -> Vec<L> {
        let mut minimum: Option<f64> = None;
        self.for_all_elements(|element| {
            let value = element.value();
            if minimum.map_or(true, |current| value < current) {
                minimum = Some(value);
            }
        });
        let Some(minimum) = minimum else {
            return Vec::new();
        };

        let mut optima = Vec::new();
        self.for_all_elements(|element| {
            if element.value() == minimum {
                optima.push(element.clone());
            }
        });
        optima
    }

    /// True when there is no unprocessed label left.
    pub fn empty_queue(&self) -> bool {
        self.unprocessed.is_empty()
    }

    /// True when the bucket holds no label at all.
    pub fn is_empty(&self) -> bool {
        self.processed.is_empty() && self.unprocessed.is_empty()
    }

    /// Processed plus valid unprocessed labels.
    pub fn size(&self) -> usize {
        self.number_of_processed_elements() + self.number_of_unprocessed_elements()
    }

    pub fn number_of_processed_elements(&self) -> usize {
        self.processed.len()
    }

    /// Valid unprocessed labels; invalidated ones no longer count.
    pub fn number_of_unprocessed_elements(&self) -> usize {
        self.valid_unprocessed
    }

    pub fn clear(&mut self) {
        self.processed.clear();
        self.unprocessed.clear();
        self.valid_unprocessed = 0;
    }

    /// Compare two buckets by their unprocessed tops. Panics when either
    /// queue is empty.
    pub fn cmp_tops(&self, other: &Self) -> std::cmp::Ordering {
        self.top().cmp_keys(other.top())
    }

    /// Walk all elements: processed in index order, then valid unprocessed.
    pub fn for_all_elements(&self, mut f: impl FnMut(&L)) {
        for element in &self.processed {
            f(element);
        }
        for element in self.unprocessed.iter() {
            if element.is_valid() {
                f(element);
            }
        }
    }

    /// Breakable walk over all elements; returning `false` stops the walk.
    pub fn for_all_elements_while(&self, mut f: impl FnMut(&L) -> bool) {
        for element in &self.processed {
            if !f(element) {
                return;
            }
        }
        for element in self.unprocessed.iter() {
            if element.is_valid() && !f(element) {
                return;
            }
        }
    }

    /// Walk processed elements in index order.
    pub fn for_all_processed_elements(&self, mut f: impl FnMut(&L)) {
        for element in &self.processed {
            f(element);
        }
    }

    /// Walk valid unprocessed elements in heap-storage order.
    pub fn for_all_unprocessed_elements(&self, mut f: impl FnMut(&L)) {
        for element in self.unprocessed.iter() {
            if element.is_valid() {
                f(element);
            }
        }
    }

    fn move_to_processed(&mut self, mut element: L) -> usize {
        let index = self.processed.len();
        element.set_index(Some(index));
        self.processed.push(element);
        index
    }

    fn pop_invalid_unprocessed(&mut self) {
        while let Some(top) = self.unprocessed.peek() {
            if top.is_valid() {
                break;
            }
            self.unprocessed.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::electrical::{Carrier, ElectricalEdge};
    use crate::graph::StaticGraph;
    use crate::labels::{Label, VoltageAngleDifferenceLabel};
    use crate::queues::domination::{NoDomination, Strict, Weak};

    type Vad = VoltageAngleDifferenceLabel;

    /// A star of parallel edges from vertex 0: label i walks edge i and
    /// lands at vertex 1 with key (reactance_i, cap_i) -> (1/|b|, cap).
    fn label(reactance: f64, cap: f64) -> Vad {
        let mut graph: StaticGraph<(), ElectricalEdge> = StaticGraph::new("g");
        graph.add_vertex(());
        graph.add_vertex(());
        graph.add_edge(0, 1, ElectricalEdge::lossless(reactance, cap));
        let (label, inserted) = Vad::source(0).extended_by(graph.edge(0), Carrier::Dc);
        assert!(inserted);
        label
    }

    #[test]
    fn test_merge_into_empty_bucket() {
        let mut bucket = Bucket::new();
        assert!(bucket.merge::<Strict>(label(1.0, 5.0)));
        assert_eq!(bucket.size(), 1);
        assert_eq!(bucket.number_of_unprocessed_elements(), 1);
        assert!(!bucket.empty_queue());
    }

    #[test]
    fn test_merge_rejects_dominated_label() {
        let mut bucket = Bucket::new();
        assert!(bucket.merge::<Strict>(label(1.0, 1.0)));
        // worse in both components
        assert!(!bucket.merge::<Strict>(label(0.5, 2.0)));
        assert_eq!(bucket.size(), 1);
    }

    #[test]
    fn test_merge_invalidates_dominated_unprocessed() {
        let mut bucket = Bucket::new();
        assert!(bucket.merge::<Strict>(label(0.5, 2.0))); // (2, 2)
        assert!(bucket.merge::<Strict>(label(1.0, 1.0))); // (1, 1) dominates
        assert_eq!(bucket.number_of_unprocessed_elements(), 1);
        assert!((bucket.top().susceptance_norm() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_incomparable_labels_coexist() {
        let mut bucket = Bucket::new();
        assert!(bucket.merge::<Strict>(label(1.0, 5.0))); // (1, 5)
        assert!(bucket.merge::<Strict>(label(0.5, 1.0))); // (2, 1)
        assert_eq!(bucket.number_of_unprocessed_elements(), 2);
    }

    #[test]
    fn test_strict_keeps_equal_keys_weak_rejects_them() {
        let mut strict_bucket = Bucket::new();
        assert!(strict_bucket.merge::<Strict>(label(1.0, 1.0)));
        assert!(strict_bucket.merge::<Strict>(label(1.0, 1.0)));
        assert_eq!(strict_bucket.number_of_unprocessed_elements(), 2);

        let mut weak_bucket = Bucket::new();
        assert!(weak_bucket.merge::<Weak>(label(1.0, 1.0)));
        assert!(!weak_bucket.merge::<Weak>(label(1.0, 1.0)));
        assert_eq!(weak_bucket.number_of_unprocessed_elements(), 1);
    }

    #[test]
    fn test_no_domination_keeps_everything() {
        let mut bucket = Bucket::new();
        assert!(bucket.merge::<NoDomination>(label(1.0, 1.0)));
        assert!(bucket.merge::<NoDomination>(label(0.5, 2.0)));
        assert!(bucket.merge::<NoDomination>(label(1.0, 1.0)));
        assert_eq!(bucket.number_of_unprocessed_elements(), 3);
    }

    #[test]
    fn test_pop_moves_to_processed_and_assigns_index() {
        let mut bucket = Bucket::new();
        bucket.merge::<Strict>(label(1.0, 5.0));
        bucket.merge::<Strict>(label(0.5, 1.0));
        let first = bucket.pop();
        assert_eq!(first, 0);
        assert!(bucket.has_element_at(0));
        assert!(!bucket.has_element_at(1));
        assert_eq!(bucket.element_at(0).index(), Some(0));
        let (element, second) = bucket.delete_top();
        assert_eq!(second, 1);
        assert_eq!(element.index(), Some(1));
        assert!(bucket.empty_queue());
        assert_eq!(bucket.number_of_processed_elements(), 2);
    }

    #[test]
    fn test_pop_order_follows_key_order() {
        let mut bucket = Bucket::new();
        bucket.merge::<Strict>(label(0.25, 1.0)); // (4, 1)
        bucket.merge::<Strict>(label(1.0, 8.0)); // (1, 8)
        bucket.merge::<Strict>(label(0.5, 4.0)); // (2, 4)
        let (a, _) = bucket.delete_top();
        let (b, _) = bucket.delete_top();
        let (c, _) = bucket.delete_top();
        assert!(a.susceptance_norm() < b.susceptance_norm());
        assert!(b.susceptance_norm() < c.susceptance_norm());
    }

    #[test]
    fn test_top_skips_lazily_invalidated_labels() {
        let mut bucket = Bucket::new();
        bucket.merge::<Strict>(label(0.5, 2.0)); // (2, 2), becomes top's victim
        bucket.merge::<Strict>(label(0.25, 0.5)); // (4, 0.5)
        bucket.merge::<Strict>(label(1.0, 1.0)); // (1, 1) dominates (2, 2)
        // top must be valid after the merge returns
        assert!(bucket.top().is_valid());
        assert!((bucket.top().susceptance_norm() - 1.0).abs() < 1e-12);
        assert_eq!(bucket.number_of_unprocessed_elements(), 2);
    }

    #[test]
    fn test_optima_collects_minimum_value_labels() {
        let mut bucket = Bucket::new();
        bucket.merge::<Strict>(label(1.0, 1.0)); // (1, 1), value 1
        bucket.merge::<Strict>(label(0.5, 0.5)); // (2, 0.5), value 1
        bucket.merge::<Strict>(label(0.25, 0.4)); // (4, 0.4), value 1.6
        let optima = bucket.optima();
        assert_eq!(optima.len(), 2);
        assert!(optima.iter().all(|l| (l.value() - 1.0).abs() < 1e-12));
    }

    #[test]
    fn test_optima_spans_processed_and_unprocessed() {
        let mut bucket = Bucket::new();
        bucket.merge::<Strict>(label(1.0, 1.0)); // value 1
        bucket.merge::<Strict>(label(0.5, 0.5)); // value 1
        bucket.pop();
        let optima = bucket.optima();
        assert_eq!(optima.len(), 2);
    }

    #[test]
    fn test_optima_of_empty_bucket() {
        let bucket: Bucket<Vad> = Bucket::new();
        assert!(bucket.optima().is_empty());
    }

    #[test]
    fn test_has_element() {
        let mut bucket = Bucket::new();
        bucket.merge::<Strict>(label(1.0, 1.0));
        assert!(bucket.has_element(&label(1.0, 1.0)));
        assert!(!bucket.has_element(&label(0.5, 1.0)));
    }

    #[test]
    fn test_cmp_tops() {
        let mut a = Bucket::new();
        let mut b = Bucket::new();
        a.merge::<Strict>(label(1.0, 1.0));
        b.merge::<Strict>(label(0.5, 1.0));
        assert_eq!(a.cmp_tops(&b), std::cmp::Ordering::Less);
    }

    #[test]
    fn test_clear() {
        let mut bucket = Bucket::new();
        bucket.merge::<Strict>(label(1.0, 1.0));
        bucket.pop();
        bucket.merge::<Strict>(label(0.5, 1.0));
        bucket.clear();
        assert!(bucket.is_empty());
        assert_eq!(bucket.size(), 0);
    }

    #[test]
    #[should_panic]
    fn test_pop_of_empty_queue_panics() {
        let mut bucket: Bucket<Vad> = Bucket::new();
        bucket.pop();
    }
}
