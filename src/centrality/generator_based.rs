// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Generator-based betweenness centrality.
//!
//! The source loop runs over the network's generator vertices only, and
//! the relative counters are normalised by `m_B = |generators| * |loads|`.
//! Statistics rows additionally record both set sizes. An empty generator
//! or load set yields all-zero counters without dividing.

use std::marker::PhantomData;

use crate::centrality::{normalise, run_sources, CentralityCounter};
use crate::execution::{ExecutionPolicy, Sequential};
use crate::graph::electrical::{BranchProperties, Carrier};
use crate::graph::network::PowerNetwork;
use crate::labels::Label;
use crate::observability::messages::{CentralityCompleted, CentralityStarted, StructuredLog};
use crate::queues::domination::{DominationCriterion, Strict};
use crate::statistics::DtpRuntimeCollection;

/// Generator-based betweenness driver over a [`PowerNetwork`].
pub struct GeneratorBasedBetweennessCentrality<'a, V, E, L, D = Strict, P = Sequential>
where
    E: BranchProperties,
    L: Label,
    D: DominationCriterion,
    P: ExecutionPolicy,
{
    network: &'a PowerNetwork<V, E>,
    carrier: Carrier,
    counter: CentralityCounter,
    counter_size: usize,
    total_number_of_paths: Vec<usize>,
    total_relative_number_of_paths: Vec<f64>,
    collection: DtpRuntimeCollection,
    _marker: PhantomData<fn() -> (L, D, P)>,
}

impl<'a, V, E, L, D, P> GeneratorBasedBetweennessCentrality<'a, V, E, L, D, P>
where
    V: Sync,
    E: BranchProperties + Sync,
    L: Label,
    D: DominationCriterion,
    P: ExecutionPolicy,
{
    pub fn new(
        network: &'a PowerNetwork<V, E>,
        carrier: Carrier,
        counter: CentralityCounter,
    ) -> Self {
        Self {
            network,
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
        self.counter_size = self.counter.size_for(self.network.graph());
        self.total_number_of_paths = vec![0; self.counter_size];
        self.total_relative_number_of_paths = vec![0.0; self.counter_size];
        self.collection.clear();
    }

    /// Run the centrality with every generator as a source once.
    pub fn run(&mut self) {
        self.clear();
        let sources = self.network.generators().to_vec();
        let generators = self.network.number_of_generators();
        let loads = self.network.number_of_loads();

        let started = CentralityStarted {
            algorithm: "GeneratorBasedBetweennessCentrality",
            number_of_sources: sources.len(),
            workers: P::worker_count(),
        };
        started.log();
        let span = started.span("run");
        let _guard = span.enter();

        let reduced = run_sources::<V, E, L, D, P>(
            self.network.graph(),
            self.carrier,
            self.counter,
            &sources,
            |row| {
                row.number_of_generators = generators;
                row.number_of_loads = loads;
            },
        );
        self.total_number_of_paths = reduced.counts;
        self.total_relative_number_of_paths = reduced.relative;
        self.collection = reduced.collection;

        normalise(&mut self.total_relative_number_of_paths, generators * loads);

        CentralityCompleted {
            algorithm: "GeneratorBasedBetweennessCentrality",
            number_of_sources: sources.len(),
            counter_size: self.counter_size,
        }
        .log();
    }

    /// Integer path counts per scored entity.
    pub fn total_number_of_paths(&self) -> &[usize] {
        &self.total_number_of_paths
    }

    /// Normalised relative path counts per scored entity.
    pub fn total_relative_number_of_paths(&self) -> &[f64] {
        &self.total_relative_number_of_paths
    }

    /// Statistics rows of all per-source runs.
    pub fn collection(&self) -> &DtpRuntimeCollection {
        &self.collection
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::electrical::ElectricalVertex;
    use crate::graph::ElectricalEdge;
    use crate::labels::{SusceptanceNormLabel, VoltageAngleDifferenceLabel};
    use crate::test_support::{acm_figure4a, assert_all_close};

    /// Figure 4a with one generator at vertex 0 and loads everywhere.
    fn figure4a_network() -> PowerNetwork<ElectricalVertex, ElectricalEdge> {
        let mut network = PowerNetwork::new(acm_figure4a());
        network.add_generator_at(0);
        for vertex in 0..4 {
            network.add_load_at(vertex);
        }
        network
    }

    #[test]
    fn test_figure4a_generator_based_two_criterion_edge_counters() {
        let network = figure4a_network();
        let mut centrality: GeneratorBasedBetweennessCentrality<
            _,
            _,
            VoltageAngleDifferenceLabel,
        > = GeneratorBasedBetweennessCentrality::new(
            &network,
            Carrier::Dc,
            CentralityCounter::Edges,
        );
        centrality.run();

        assert_eq!(centrality.total_number_of_paths(), &[2, 1, 1, 1, 2]);
        assert_all_close(
            centrality.total_relative_number_of_paths(),
            &[0.375, 0.25, 0.125, 0.125, 0.375],
        );

        let rows = centrality.collection().rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].source_id, 0);
        assert_eq!(rows[0].number_of_generators, 1);
        assert_eq!(rows[0].number_of_loads, 4);
        assert_eq!(rows[0].number_of_scanned_edges, 18);
        assert_eq!(rows[0].number_of_edges_producing_no_cycle, 9);
        assert_eq!(rows[0].number_of_relaxed_edges, 6);
        assert_eq!(rows[0].number_of_labels, 7);
    }

    #[test]
    fn test_figure4a_generator_based_two_criterion_vertex_counters() {
        let network = figure4a_network();
        let mut centrality: GeneratorBasedBetweennessCentrality<
            _,
            _,
            VoltageAngleDifferenceLabel,
        > = GeneratorBasedBetweennessCentrality::new(
            &network,
            Carrier::Dc,
            CentralityCounter::Vertices,
        );
        centrality.run();

        assert_eq!(centrality.total_number_of_paths(), &[5, 2, 3, 2]);
        assert_all_close(
            centrality.total_relative_number_of_paths(),
            &[1.0, 0.375, 0.5, 0.375],
        );
    }

    #[test]
    fn test_figure4a_generator_based_susceptance_norm() {
        let network = figure4a_network();
        let mut centrality: GeneratorBasedBetweennessCentrality<_, _, SusceptanceNormLabel> =
            GeneratorBasedBetweennessCentrality::new(
                &network,
                Carrier::Dc,
                CentralityCounter::Edges,
            );
        centrality.run();

        assert_eq!(centrality.total_number_of_paths(), &[1, 1, 1, 0, 0]);
        assert_all_close(
            centrality.total_relative_number_of_paths(),
            &[0.25, 0.25, 0.25, 0.0, 0.0],
        );
    }

    #[test]
    fn test_empty_generator_set_yields_zeroes() {
        let mut network = PowerNetwork::new(acm_figure4a());
        for vertex in 0..4 {
            network.add_load_at(vertex);
        }
        let mut centrality: GeneratorBasedBetweennessCentrality<
            _,
            _,
            VoltageAngleDifferenceLabel,
        > = GeneratorBasedBetweennessCentrality::new(
            &network,
            Carrier::Dc,
            CentralityCounter::Edges,
        );
        centrality.run();

        assert!(centrality.total_number_of_paths().iter().all(|&c| c == 0));
        assert!(centrality
            .total_relative_number_of_paths()
            .iter()
            .all(|&x| x == 0.0));
        assert!(centrality.collection().is_empty());
    }
}
