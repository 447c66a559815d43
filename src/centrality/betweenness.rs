// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Full betweenness centrality over all ordered vertex pairs.
//!
//! For every source vertex the DTP engine runs to completion and every
//! reachable vertex acts as a target; each target's Pareto-optimal paths
//! contribute one integer count per traversed entity and a `1/|optima|`
//! share to the relative count. The relative counters are normalised by
//! `m_B = |V| * (|V| - 1)`.

use std::marker::PhantomData;

use crate::centrality::{normalise, run_sources, CentralityCounter};
use crate::execution::{ExecutionPolicy, Sequential};
use crate::graph::electrical::{BranchProperties, Carrier};
use crate::graph::static_graph::{StaticGraph, VertexId};
use crate::labels::Label;
use crate::observability::messages::{CentralityCompleted, CentralityStarted, StructuredLog};
use crate::queues::domination::{DominationCriterion, Strict};
use crate::statistics::DtpRuntimeCollection;

/// Betweenness centrality driver.
///
/// Generic over the label `L`, the domination criterion `D`, and the
/// execution policy `P` of the outer source loop.
///
/// # Example
///
/// ```
/// use gridline::centrality::{BetweennessCentrality, CentralityCounter};
/// use gridline::execution::Sequential;
/// use gridline::graph::{Carrier, ElectricalEdge, ElectricalVertex, StaticGraph};
/// use gridline::labels::VoltageAngleDifferenceLabel;
/// use gridline::queues::Strict;
///
/// let mut graph = StaticGraph::new("pair");
/// let a = graph.add_vertex(ElectricalVertex::load("a"));
/// let b = graph.add_vertex(ElectricalVertex::load("b"));
/// graph.add_edge(a, b, ElectricalEdge::lossless(1.0, 10.0));
///
/// let mut centrality: BetweennessCentrality<
///     _,
///     _,
///     VoltageAngleDifferenceLabel,
///     Strict,
///     Sequential,
/// > = BetweennessCentrality::new(&graph, Carrier::Dc, CentralityCounter::Edges);
/// centrality.run();
///
/// assert_eq!(centrality.total_number_of_paths(), &[2]);
/// assert_eq!(centrality.total_relative_number_of_paths(), &[1.0]);
/// ```
pub struct BetweennessCentrality<'a, V, E, L, D = Strict, P = Sequential>
where
    E: BranchProperties,
    L: Label,
    D: DominationCriterion,
    P: ExecutionPolicy,
{
    graph: &'a StaticGraph<V, E>,
    carrier: Carrier,
    counter: CentralityCounter,
    counter_size: usize,
    total_number_of_paths: Vec<usize>,
    total_relative_number_of_paths: Vec<f64>,
    collection: DtpRuntimeCollection,
    _marker: PhantomData<fn() -> (L, D, P)>,
}

impl<'a, V, E, L, D, P> BetweennessCentrality<'a, V, E, L, D, P>
where
    V: Sync,
    E: BranchProperties + Sync,
    L: Label,
    D: DominationCriterion,
    P: ExecutionPolicy,
{
    pub fn new(graph: &'a StaticGraph<V, E>, carrier: Carrier, counter: CentralityCounter) -> Self {
        Self {
            graph,
            carrier,
            counter,
            counter_size: 0,
            total_number_of_paths: Vec::new(),
            total_relative_number_of_paths: Vec::new(),
            collection: DtpRuntimeCollection::default(),
            _marker: PhantomData,
        }
    }

    /// Resize the counters to the scored entity and zero all state.
    pub fn clear(&mut self) {
        self.counter_size = self.counter.size_for(self.graph);
        self.total_number_of_paths = vec![0; self.counter_size];
        self.total_relative_number_of_paths = vec![0.0; self.counter_size];
        self.collection.clear();
    }

    /// Run the full centrality: every vertex is a source once.
    pub fn run(&mut self) {
        self.clear();
        let sources: Vec<VertexId> = (0..self.graph.number_of_vertices()).collect();

        let started = CentralityStarted {
            algorithm: "BetweennessCentrality",
            number_of_sources: sources.len(),
            workers: P::worker_count(),
        };
        started.log();
        let span = started.span("run");
        let _guard = span.enter();

        let reduced = run_sources::<V, E, L, D, P>(
            self.graph,
            self.carrier,
            self.counter,
            &sources,
            |_row| {},
        );
        self.total_number_of_paths = reduced.counts;
        self.total_relative_number_of_paths = reduced.relative;
        self.collection = reduced.collection;

        let vertices = self.graph.number_of_vertices();
        normalise(
            &mut self.total_relative_number_of_paths,
            vertices * vertices.saturating_sub(1),
        );

        CentralityCompleted {
            algorithm: "BetweennessCentrality",
            number_of_sources: sources.len(),
            counter_size: self.counter_size,
        }
        .log();
    }

    /// Integer path counts per scored entity.
    pub fn total_number_of_paths(&self) -> &[usize] {
        &self.total_number_of_paths
    }

    /// Normalised relative path counts per scored entity; each element lies
    /// in `[0, 1]` after a full run.
    pub fn total_relative_number_of_paths(&self) -> &[f64] {
        &self.total_relative_number_of_paths
    }

    /// Statistics rows of all per-source runs. Row order is unspecified
    /// under the parallel policy.
    pub fn collection(&self) -> &DtpRuntimeCollection {
        &self.collection
    }
}
