// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Single-criterion label: the susceptance norm.
//!
//! The susceptance norm of a path is `sum over edges of 1/abs(b(e))`. With
//! this label the engine degenerates to a cycle-avoiding Dijkstra whose
//! buckets hold at most a handful of equal-norm representatives.

use std::cmp::Ordering;

use crate::config::consts::approx_eq;
use crate::graph::electrical::{BranchProperties, Carrier};
use crate::graph::static_graph::{Edge, VertexId};
use crate::labels::{Label, LabelCore};

#[derive(Debug, Clone)]
pub struct SusceptanceNormLabel {
    core: LabelCore,
    susceptance_norm: f64,
}

impl SusceptanceNormLabel {
    pub fn susceptance_norm(&self) -> f64 {
        self.susceptance_norm
    }
}

impl Label for SusceptanceNormLabel {
    fn source(vertex: VertexId) -> Self {
        Self {
            core: LabelCore::source(vertex),
            susceptance_norm: 0.0,
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
            },
            inserted,
        )
    }

    fn cmp_keys(&self, other: &Self) -> Ordering {
        self.susceptance_norm.total_cmp(&other.susceptance_norm)
    }

    fn dominates_weakly(&self, other: &Self) -> bool {
        self.susceptance_norm <= other.susceptance_norm
    }

    fn key_eq(&self, other: &Self) -> bool {
        approx_eq(self.susceptance_norm, other.susceptance_norm)
    }

    fn value(&self) -> f64 {
        self.susceptance_norm
    }

    fn core(&self) -> &LabelCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut LabelCore {
        &mut self.core
    }
}
