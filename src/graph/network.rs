// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Power network wrapper: a graph plus generator and load bookkeeping.
//!
//! The generator-based centrality driver iterates sources over the
//! generator set and normalises by |generators| * |loads|; this wrapper owns
//! exactly that bookkeeping and nothing else. Parsers that know bus roles
//! register them here after building the graph, either explicitly or via
//! [`PowerNetwork::from_bus_types`].

use crate::execution::ExecutionPolicy;
use crate::graph::electrical::ElectricalVertex;
use crate::graph::static_graph::{StaticGraph, VertexId};

/// An owning network: graph plus source/sink annotations.
#[derive(Debug, Clone)]
pub struct PowerNetwork<V, E> {
    graph: StaticGraph<V, E>,
    generators: Vec<VertexId>,
    loads: Vec<VertexId>,
}

impl<V, E> PowerNetwork<V, E> {
    pub fn new(graph: StaticGraph<V, E>) -> Self {
        Self {
            graph,
            generators: Vec::new(),
            loads: Vec::new(),
        }
    }

    pub fn graph(&self) -> &StaticGraph<V, E> {
        &self.graph
    }

    /// Register a generator at `vertex`. Panics on unknown vertices.
    pub fn add_generator_at(&mut self, vertex: VertexId) {
        assert!(self.graph.vertex_exists(vertex), "unknown vertex {vertex}");
        self.generators.push(vertex);
    }

    /// Register a load at `vertex`. Panics on unknown vertices.
    pub fn add_load_at(&mut self, vertex: VertexId) {
        assert!(self.graph.vertex_exists(vertex), "unknown vertex {vertex}");
        self.loads.push(vertex);
    }

    pub fn generators(&self) -> &[VertexId] {
        &self.generators
    }

    pub fn loads(&self) -> &[VertexId] {
        &self.loads
    }

    pub fn number_of_generators(&self) -> usize {
        self.generators.len()
    }

    pub fn number_of_loads(&self) -> usize {
        self.loads.len()
    }

    /// Run `f` once per generator vertex id under the execution policy `P`.
    pub fn for_all_generator_identifiers<P: ExecutionPolicy>(
        &self,
        f: impl Fn(VertexId) + Send + Sync,
    ) {
        let generators = &self.generators;
        P::for_each_index(generators.len(), |index| f(generators[index]));
    }
}

impl<E> PowerNetwork<ElectricalVertex, E> {
    /// Build a network whose generator and load sets follow the bus types
    /// recorded on the vertices.
    pub fn from_bus_types(graph: StaticGraph<ElectricalVertex, E>) -> Self {
        let mut network = Self::new(graph);
        for vertex in 0..network.graph.number_of_vertices() {
            if network.graph.vertex(vertex).properties().is_generator() {
                network.generators.push(vertex);
            } else if network.graph.vertex(vertex).properties().is_load() {
                network.loads.push(vertex);
            }
        }
        network
    }
}
