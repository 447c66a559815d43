// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The Dominating-Theta-Path engine: a generalised multi-label Dijkstra.
//!
//! Instead of one tentative distance per vertex, every vertex owns a
//! [`Bucket`] of mutually non-dominated labels. The global frontier is a
//! [`MappingBinaryHeap`] holding, per vertex, that vertex's best unprocessed
//! label. The main loop pops the globally best label, finalises it in its
//! bucket (fixing the index that back-pointers of later labels reference),
//! refills the frontier from the same bucket, and relaxes every incident
//! edge, treating the graph as undirected.
//!
//! Cycle avoidance is per path: each label carries the set of vertices on
//! its path, and an extension into that set is discarded before any bucket
//! is touched. The engine is strictly sequential within one source; the
//! centrality drivers run one engine instance per worker to parallelise
//! across sources.
//!
//! # Example
//!
//! ```
//! use gridline::engine::DominatingThetaPath;
//! use gridline::graph::{Carrier, ElectricalEdge, ElectricalVertex, StaticGraph};
//! use gridline::labels::VoltageAngleDifferenceLabel;
//! use gridline::queues::Strict;
//!
//! let mut graph = StaticGraph::new("pair");
//! let a = graph.add_vertex(ElectricalVertex::load("a"));
//! let b = graph.add_vertex(ElectricalVertex::load("b"));
//! graph.add_edge(a, b, ElectricalEdge::lossless(1.0, 10.0));
//!
//! let mut engine: DominatingThetaPath<_, _, VoltageAngleDifferenceLabel, Strict> =
//!     DominatingThetaPath::new(&graph, Carrier::Dc);
//! engine.set_source(a);
//! engine.run();
//!
//! let (subgraph, value) = engine.result(b);
//! assert_eq!(subgraph.vertices().len(), 2);
//! assert_eq!(subgraph.edges().len(), 1);
//! assert!((value - 10.0).abs() < 1e-9);
//! ```

use std::marker::PhantomData;
use std::time::Instant;

use crate::graph::electrical::{BranchProperties, Carrier};
use crate::graph::static_graph::{StaticGraph, VertexId};
use crate::graph::subgraph::Subgraph;
use crate::labels::Label;
use crate::observability::messages::{DtpRunCompleted, StructuredLog};
use crate::queues::domination::{DominationCriterion, Strict};
use crate::queues::bucket::Bucket;
use crate::queues::mapping_heap::MappingBinaryHeap;
use crate::statistics::DtpRuntimeRow;

/// Multi-label path engine over a borrowed graph.
///
/// Generic over the label (one- or two-criterion) and the domination
/// criterion applied during bucket merges; both are compile-time choices
/// that inline into the inner loop.
pub struct DominatingThetaPath<'a, V, E, L, D = Strict>
where
    E: BranchProperties,
    L: Label,
    D: DominationCriterion,
{
    graph: &'a StaticGraph<V, E>,
    carrier: Carrier,
    label_sets: Vec<Bucket<L>>,
    queue: MappingBinaryHeap<VertexId, L>,
    runtime_row: DtpRuntimeRow,
    _domination: PhantomData<fn() -> D>,
}

impl<'a, V, E, L, D> DominatingThetaPath<'a, V, E, L, D>
where
    E: BranchProperties,
    L: Label,
    D: DominationCriterion,
{
    pub fn new(graph: &'a StaticGraph<V, E>, carrier: Carrier) -> Self {
        Self {
            graph,
            carrier,
            label_sets: (0..graph.number_of_vertices())
                .map(|_| Bucket::new())
                .collect(),
            queue: MappingBinaryHeap::new(L::cmp_keys),
            runtime_row: DtpRuntimeRow::default(),
            _domination: PhantomData,
        }
    }

    pub fn graph(&self) -> &'a StaticGraph<V, E> {
        self.graph
    }

    pub fn carrier(&self) -> Carrier {
        self.carrier
    }

    /// Drop all labels and statistics; buckets stay sized to the graph.
    pub fn clear(&mut self) {
        for bucket in &mut self.label_sets {
            bucket.clear();
        }
        self.queue.clear();
        self.runtime_row.clear();
    }

    /// Reset the engine onto `source`: clears, merges the source label
    /// (always accepted — its bucket is empty), and seeds the frontier.
    pub fn set_source(&mut self, source: VertexId) {
        assert!(
            source < self.label_sets.len(),
            "unknown source vertex {source}"
        );
        self.clear();
        self.runtime_row.source_id = source;
        let label = L::source(source);
        self.label_sets[source].merge::<D>(label.clone());
        self.queue.insert(source, label);
    }

    /// Run the engine to completion from the current source.
    pub fn run(&mut self) {
        let graph = self.graph;
        self.runtime_row.name = graph.name().to_string();
        self.runtime_row.number_of_vertices = graph.number_of_vertices();
        self.runtime_row.number_of_edges = graph.number_of_edges();
        let started = Instant::now();

        while !self.queue.is_empty() {
            let (u, _queue_key) = self.queue.delete_top();
            // Finalising through the bucket keeps the relaxed label and its
            // processed index consistent even if the queue key went stale.
            let (label, index) = self.label_sets[u].delete_top();
            debug_assert_eq!(label.index(), Some(index));

            if !self.label_sets[u].empty_queue() {
                self.queue.insert(u, self.label_sets[u].top().clone());
            }

            for edge_id in graph.edges_at(u) {
                let edge = graph.edge(edge_id);
                self.runtime_row.number_of_scanned_edges += 1;

                let (mut new_label, inserted) = label.extended_by(edge, self.carrier);
                if !inserted {
                    continue; // extending would close a cycle
                }
                new_label.set_predecessor(Some((u, index)));
                self.runtime_row.number_of_edges_producing_no_cycle += 1;

                let v = new_label.vertex();
                if self.label_sets[v].merge::<D>(new_label.clone()) {
                    self.runtime_row.number_of_relaxed_edges += 1;
                    if !self.queue.has_key_of(v) {
                        self.queue.insert(v, new_label);
                    } else if new_label.cmp_keys(self.queue.key_of(v)).is_lt() {
                        self.queue.change_key(v, new_label);
                    }
                }
            }

            self.runtime_row.global_elapsed_milliseconds =
                started.elapsed().as_secs_f64() * 1e3;
            self.runtime_row.number_of_labels = self.number_of_labels();
        }

        DtpRunCompleted {
            source: self.runtime_row.source_id,
            number_of_labels: self.runtime_row.number_of_labels,
            number_of_relaxed_edges: self.runtime_row.number_of_relaxed_edges,
            elapsed_milliseconds: self.runtime_row.global_elapsed_milliseconds,
        }
        .log();
    }

    /// Labels currently alive: processed plus valid unprocessed, over all
    /// buckets.
    pub fn number_of_labels(&self) -> usize {
        self.label_sets.iter().map(Bucket::size).sum()
    }

    pub fn statistic(&self) -> &DtpRuntimeRow {
        &self.runtime_row
    }

    pub fn statistic_mut(&mut self) -> &mut DtpRuntimeRow {
        &mut self.runtime_row
    }

    /// The subgraph formed by all optimal paths from the source to
    /// `target`, together with the scalar optimum. An unreachable target
    /// yields an empty subgraph and `f64::MAX`.
    pub fn result(&self, target: VertexId) -> (Subgraph<'a, V, E>, f64) {
        assert!(self.graph.vertex_exists(target), "unknown target {target}");

        let optima = self.label_sets[target].optima();
        let value = optima.first().map(Label::value).unwrap_or(f64::MAX);

        let mut vertex_in_subgraph = vec![false; self.graph.number_of_vertices()];
        let mut edge_in_subgraph = vec![false; self.graph.number_of_edges()];
        let mut vertices = Vec::new();
        let mut edges = Vec::new();

        for optimum in &optima {
            self.walk_back(target, optimum, |vertex, label| {
                if !vertex_in_subgraph[vertex] {
                    vertex_in_subgraph[vertex] = true;
                    vertices.push(vertex);
                }
                if let Some((previous, _)) = label.predecessor() {
                    let edge = self
                        .graph
                        .undirected_edge_id(vertex, previous)
                        .expect("no edge between consecutive path vertices");
                    if !edge_in_subgraph[edge] {
                        edge_in_subgraph[edge] = true;
                        edges.push(edge);
                    }
                }
            });
        }

        (Subgraph::new(self.graph, vertices, edges), value)
    }

    /// One source-to-target vertex sequence per optimal path at `target`,
    /// together with the scalar optimum.
    pub fn result_paths(&self, target: VertexId) -> (Vec<Vec<VertexId>>, f64) {
        assert!(self.graph.vertex_exists(target), "unknown target {target}");

        let optima = self.label_sets[target].optima();
        let value = optima.first().map(Label::value).unwrap_or(f64::MAX);

        let paths = optima
            .iter()
            .map(|optimum| {
                let mut path = Vec::new();
                self.collect_path(optimum, &mut path);
                path
            })
            .collect();
        (paths, value)
    }

    /// Count the optimal paths towards `target` through every vertex they
    /// visit: `counts` receives 1 per optimum per vertex, `relative`
    /// receives `1/|optima(target)|`. The target itself is counted once per
    /// optimum. Both vectors are grown to |V| on demand.
    pub fn number_of_paths_through_vertex(
        &self,
        target: VertexId,
        counts: &mut Vec<usize>,
        relative: &mut Vec<f64>,
    ) {
        assert!(self.graph.vertex_exists(target), "unknown target {target}");
        counts.resize(self.graph.number_of_vertices(), 0);
        relative.resize(self.graph.number_of_vertices(), 0.0);

        let optima = self.label_sets[target].optima();
        if optima.is_empty() {
            return;
        }
        let weight = 1.0 / optima.len() as f64;

        for optimum in &optima {
            self.walk_back(target, optimum, |vertex, _label| {
                counts[vertex] += 1;
                relative[vertex] += weight;
            });
        }
    }

    /// Count the optimal paths towards `target` through every edge they
    /// traverse. Edge ids resolve via `(previous, current)` with a fallback
    /// to `(current, previous)`; failing both is a graph inconsistency and
    /// panics. Both vectors are grown to |E| on demand.
    pub fn number_of_paths_through_edge(
        &self,
        target: VertexId,
        counts: &mut Vec<usize>,
        relative: &mut Vec<f64>,
    ) {
        assert!(self.graph.vertex_exists(target), "unknown target {target}");
        counts.resize(self.graph.number_of_edges(), 0);
        relative.resize(self.graph.number_of_edges(), 0.0);

        let optima = self.label_sets[target].optima();
        if optima.is_empty() {
            return;
        }
        let weight = 1.0 / optima.len() as f64;

        for optimum in &optima {
            self.walk_back(target, optimum, |vertex, label| {
                if let Some((previous, _)) = label.predecessor() {
                    let edge = self
                        .graph
                        .undirected_edge_id(previous, vertex)
                        .expect("no edge between consecutive path vertices");
                    counts[edge] += 1;
                    relative[edge] += weight;
                }
            });
        }
    }

    /// Accumulate [`Self::number_of_paths_through_vertex`] over every vertex
    /// as target.
    pub fn total_number_of_paths_through_vertex(
        &self,
        counts: &mut Vec<usize>,
        relative: &mut Vec<f64>,
    ) {
        for target in 0..self.graph.number_of_vertices() {
            self.number_of_paths_through_vertex(target, counts, relative);
        }
    }

    /// Accumulate [`Self::number_of_paths_through_edge`] over every vertex
    /// as target.
    pub fn total_number_of_paths_through_edge(
        &self,
        counts: &mut Vec<usize>,
        relative: &mut Vec<f64>,
    ) {
        for target in 0..self.graph.number_of_vertices() {
            self.number_of_paths_through_edge(target, counts, relative);
        }
    }

    /// Walk the back-pointer chain of `optimum` from `target` to the
    /// source, invoking `f` with each vertex and its chain label.
    fn walk_back(&self, target: VertexId, optimum: &L, mut f: impl FnMut(VertexId, &L)) {
        let mut vertex = target;
        let mut index = optimum
            .index()
            .expect("optimum label is not processed");
        loop {
            let label = self.label_sets[vertex].element_at(index);
            f(vertex, label);
            match label.predecessor() {
                Some((previous_vertex, previous_index)) => {
                    vertex = previous_vertex;
                    index = previous_index;
                }
                None => break,
            }
        }
    }

    /// Recursive source-first path reconstruction.
    fn collect_path(&self, label: &L, path: &mut Vec<VertexId>) {
        if let Some((previous_vertex, previous_index)) = label.predecessor() {
            self.collect_path(
                self.label_sets[previous_vertex].element_at(previous_index),
                path,
            );
        }
        path.push(label.vertex());
    }
}
