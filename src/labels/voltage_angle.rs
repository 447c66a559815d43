// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Two-criterion label: susceptance norm and minimum capacity.
//!
//! The key is the pair `(bnorm, min_cap)` with
//! `bnorm = sum of 1/abs(b(e))` and `min_cap = min of cap(e)` along the
//! path. The scalar objective is the voltage angle difference
//! `bnorm * min_cap`; dominance is componentwise `<=` on the pair, so a
//! path that is both lower-impedance and lower-capacity supersedes its
//! competitor. Queue ordering breaks `bnorm` ties by *larger* capacity
//! first, which keeps the order strict and total without touching the
//! dominance semantics.
//!
//! The source label carries `min_cap = f64::MAX`, which every real branch
//! capacity replaces through `min`, and which keeps the source objective at
//! exactly `0.0`.

use std::cmp::Ordering;

use crate::config::consts::approx_eq;
use crate::graph::electrical::{BranchProperties, Carrier};
use crate::graph::static_graph::{Edge, VertexId};
use crate::labels::{Label, LabelCore};

/// Capacity of the empty path.
pub const UNBOUNDED_CAPACITY: f64 = f64::MAX;

#[derive(Debug, Clone)]
pub struct VoltageAngleDifferenceLabel {
    core: LabelCore,
    susceptance_norm: f64,
    minimum_capacity: f64,
}

impl VoltageAngleDifferenceLabel {
    pub fn susceptance_norm(&self) -> f64 {
        self.susceptance_norm
    }

    pub fn minimum_capacity(&self) -> f64 {
        self.minimum_capacity
    }
}

impl Label for VoltageAngleDifferenceLabel {
    fn source(vertex: VertexId) -> Self {
        Self {
            core: LabelCore::source(vertex),
            susceptance_norm: 0.0,
            minimum_capacity: UNBOUNDED_CAPACITY,
        }
    }

    fn extended_by<E: BranchProperties>(&self, edge: &Edge<E>, carrier: Carrier) -> (Self, bool) {
        let susceptance = edge.properties().susceptance(carrier);
        assert!(
            susceptance != 0.0,
            "zero susceptance on edge {}",
            edge.id()
        );
        let (core, inserted) = self.core.step_to(edge.other(self.core().vertex));
        (
            Self {
                core,
                susceptance_norm: self.susceptance_norm + (1.0 / susceptance).abs(),
                minimum_capacity: self.minimum_capacity.min(edge.properties().thermal_limit()),
            },
            inserted,
        )
    }

    fn cmp_keys(&self, other: &Self) -> Ordering {
        self.susceptance_norm
            .total_cmp(&other.susceptance_norm)
            .then_with(|| other.minimum_capacity.total_cmp(&self.minimum_capacity))
    }

    fn dominates_weakly(&self, other: &Self) -> bool {
        self.susceptance_norm <= other.susceptance_norm
            && self.minimum_capacity <= other.minimum_capacity
    }

    fn key_eq(&self, other: &Self) -> bool {
        approx_eq(self.susceptance_norm, other.susceptance_norm)
            && approx_eq(self.minimum_capacity, other.minimum_capacity)
    }

    fn value(&self) -> f64 {
        self.susceptance_norm * self.minimum_capacity
    }

    fn core(&self) -> &LabelCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut LabelCore {
        &mut self.core
    }
}
