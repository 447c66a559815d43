// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centrality drivers built on the DTP engine.
//!
//! Both drivers repeat the same per-source recipe — clear a worker's
//! engine, run it from the source, fold the per-target path counts into
//! that worker's counter pair, append the statistics row — and differ only
//! in the source set and the normalisation constant. The shared loop lives
//! here; [`betweenness::BetweennessCentrality`] iterates every vertex with
//! `m_B = |V| * (|V| - 1)`, and
//! [`generator_based::GeneratorBasedBetweennessCentrality`] iterates the
//! generator set with `m_B = |generators| * |loads|`.
//!
//! Worker state is the unit of ownership: each worker slot holds its own
//! engine and counter pair behind an uncontended mutex, the statistics
//! collection is appended under a short critical section, and the
//! per-worker counters are reduced element-wise after the join. Integer
//! counters are therefore identical between sequential and parallel runs.

pub mod betweenness;
pub mod generator_based;

pub use betweenness::BetweennessCentrality;
pub use generator_based::GeneratorBasedBetweennessCentrality;

use std::sync::Mutex;

use serde::Deserialize;

use crate::engine::DominatingThetaPath;
use crate::execution::ExecutionPolicy;
use crate::graph::electrical::{BranchProperties, Carrier};
use crate::graph::static_graph::{StaticGraph, VertexId};
use crate::labels::Label;
use crate::queues::domination::DominationCriterion;
use crate::statistics::{DtpRuntimeCollection, DtpRuntimeRow};

/// Which entity the driver scores: edges or vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CentralityCounter {
    Edges,
    Vertices,
}

impl CentralityCounter {
    /// Length of the counter vectors for `graph`.
    pub(crate) fn size_for<V, E>(self, graph: &StaticGraph<V, E>) -> usize {
        match self {
            CentralityCounter::Edges => graph.number_of_edges(),
            CentralityCounter::Vertices => graph.number_of_vertices(),
        }
    }
}

/// Per-worker state: one engine plus the worker's counter pair.
struct Worker<'a, V, E, L, D>
where
    E: BranchProperties,
    L: Label,
    D: DominationCriterion,
{
    algorithm: DominatingThetaPath<'a, V, E, L, D>,
    counts: Vec<usize>,
    relative: Vec<f64>,
}

/// Counters and statistics after the reduction over all workers.
pub(crate) struct ReducedCounters {
    pub counts: Vec<usize>,
    pub relative: Vec<f64>,
    pub collection: DtpRuntimeCollection,
}

/// The shared source loop: dispatch `sources` across workers under `P`,
/// run one engine per worker, and reduce the per-worker counter pairs.
///
/// `decorate_row` runs on each statistics row before it enters the shared
/// collection (the generator-based driver records the generator and load
/// counts there).
pub(crate) fn run_sources<V, E, L, D, P>(
    graph: &StaticGraph<V, E>,
    carrier: Carrier,
    counter: CentralityCounter,
    sources: &[VertexId],
    decorate_row: impl Fn(&mut DtpRuntimeRow) + Send + Sync,
) -> ReducedCounters
where
    V: Sync,
    E: BranchProperties + Sync,
    L: Label,
    D: DominationCriterion,
    P: ExecutionPolicy,
{
    let counter_size = counter.size_for(graph);
    let worker_count = P::worker_count();
    let workers: Vec<Mutex<Worker<'_, V, E, L, D>>> = (0..worker_count)
        .map(|_| {
            Mutex::new(Worker {
                algorithm: DominatingThetaPath::new(graph, carrier),
                counts: vec![0; counter_size],
                relative: vec![0.0; counter_size],
            })
        })
        .collect();
    let collection = Mutex::new(DtpRuntimeCollection::default());

    P::for_each_index(sources.len(), |index| {
        let source = sources[index];
        let slot = P::worker_index().min(worker_count - 1);
        let mut guard = workers[slot].lock().expect("worker mutex poisoned");
        let worker = &mut *guard;

        worker.algorithm.clear();
        worker.algorithm.set_source(source);
        worker.algorithm.run();
        match counter {
            CentralityCounter::Edges => worker
                .algorithm
                .total_number_of_paths_through_edge(&mut worker.counts, &mut worker.relative),
            CentralityCounter::Vertices => worker
                .algorithm
                .total_number_of_paths_through_vertex(&mut worker.counts, &mut worker.relative),
        }

        let mut row = worker.algorithm.statistic().clone();
        decorate_row(&mut row);
        *collection.lock().expect("statistics mutex poisoned") += row;
    });

    let mut counts = vec![0usize; counter_size];
    let mut relative = vec![0.0f64; counter_size];
    for worker in workers {
        let worker = worker.into_inner().expect("worker mutex poisoned");
        for (total, part) in counts.iter_mut().zip(worker.counts) {
            *total += part;
        }
        for (total, part) in relative.iter_mut().zip(worker.relative) {
            *total += part;
        }
    }

    ReducedCounters {
        counts,
        relative,
        collection: collection.into_inner().expect("statistics mutex poisoned"),
    }
}

/// Scale the relative counters by `1 / m_b`, skipping degenerate runs
/// (`m_b == 0`) so empty source or sink sets yield all-zero output.
pub(crate) fn normalise(relative: &mut [f64], m_b: usize) {
    if m_b == 0 {
        return;
    }
    let normalisation = 1.0 / m_b as f64;
    for value in relative.iter_mut() {
        *value *= normalisation;
    }
}
