// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Compile-time domination criteria.
//!
//! The criterion is a marker type, not a runtime flag, so the dominance
//! comparison inlines into the bucket's merge loop. `Strict` requires a
//! genuine Pareto improvement, `Weak` also lets equal keys dominate, and
//! `NoDomination` disables pruning entirely (every merged label survives).

use crate::labels::Label;

/// Decides whether one label's key supersedes another during a bucket merge.
pub trait DominationCriterion {
    fn dominates<L: Label>(lhs: &L, rhs: &L) -> bool;
}

/// `lhs` dominates iff it is componentwise `<=` and not (epsilon-)equal.
pub struct Strict;

/// `lhs` dominates iff it is componentwise `<=`, equality included.
pub struct Weak;

/// Nothing dominates; the bucket keeps every non-cycle label.
pub struct NoDomination;

impl DominationCriterion for Strict {
    fn dominates<L: Label>(lhs: &L, rhs: &L) -> bool {
        lhs.dominates_weakly(rhs) && !lhs.key_eq(rhs)
    }
}

impl DominationCriterion for Weak {
    fn dominates<L: Label>(lhs: &L, rhs: &L) -> bool {
        lhs.dominates_weakly(rhs) || lhs.key_eq(rhs)
    }
}

impl DominationCriterion for NoDomination {
    fn dominates<L: Label>(_lhs: &L, _rhs: &L) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::electrical::{Carrier, ElectricalEdge};
    use crate::graph::StaticGraph;
    use crate::labels::{SusceptanceNormLabel, VoltageAngleDifferenceLabel};

    fn norm_labels(a: f64, b: f64) -> (SusceptanceNormLabel, SusceptanceNormLabel) {
        // Build labels with distinct norms by walking edges of reactance a, b.
        let mut graph: StaticGraph<(), ElectricalEdge> = StaticGraph::new("g");
        for _ in 0..3 {
            graph.add_vertex(());
        }
        graph.add_edge(0, 1, ElectricalEdge::lossless(a, 1.0));
        graph.add_edge(0, 2, ElectricalEdge::lossless(b, 1.0));
        let source = SusceptanceNormLabel::source(0);
        let (first, _) = source.extended_by(graph.edge(0), Carrier::Dc);
        let (second, _) = source.extended_by(graph.edge(1), Carrier::Dc);
        (first, second)
    }

    #[test]
    fn test_strict_requires_improvement() {
        let (better, worse) = norm_labels(1.0, 2.0);
        assert!(Strict::dominates(&better, &worse));
        assert!(!Strict::dominates(&worse, &better));

        let (a, b) = norm_labels(1.0, 1.0);
        assert!(!Strict::dominates(&a, &b));
        assert!(!Strict::dominates(&b, &a));
    }

    #[test]
    fn test_weak_lets_ties_dominate() {
        let (a, b) = norm_labels(1.0, 1.0);
        assert!(Weak::dominates(&a, &b));
        assert!(Weak::dominates(&b, &a));
    }

    #[test]
    fn test_none_never_dominates() {
        let (better, worse) = norm_labels(1.0, 2.0);
        assert!(!NoDomination::dominates(&better, &worse));
        assert!(!NoDomination::dominates(&worse, &better));
    }

    #[test]
    fn test_incomparable_two_criterion_keys() {
        // low-impedance / high-capacity vs high-impedance / low-capacity
        let mut graph: StaticGraph<(), ElectricalEdge> = StaticGraph::new("g");
        for _ in 0..3 {
            graph.add_vertex(());
        }
        graph.add_edge(0, 1, ElectricalEdge::lossless(1.0, 9.0));
        graph.add_edge(0, 2, ElectricalEdge::lossless(2.0, 1.0));
        let source = VoltageAngleDifferenceLabel::source(0);
        let (low_norm, _) = source.extended_by(graph.edge(0), Carrier::Dc);
        let (low_cap, _) = source.extended_by(graph.edge(1), Carrier::Dc);
        assert!(!Strict::dominates(&low_norm, &low_cap));
        assert!(!Strict::dominates(&low_cap, &low_norm));
    }
}
