// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Borrowed subgraph views.

use crate::graph::static_graph::{EdgeId, StaticGraph, VertexId};

/// A subset of a borrowed graph's vertices and edges.
///
/// Produced by the path engine as the union of all optimal paths from the
/// source to one target. The view stores ids only; attribute access goes
/// through the underlying graph.
#[derive(Debug, Clone)]
pub struct Subgraph<'a, V, E> {
    graph: &'a StaticGraph<V, E>,
    vertices: Vec<VertexId>,
    edges: Vec<EdgeId>,
}

impl<'a, V, E> Subgraph<'a, V, E> {
    pub fn new(graph: &'a StaticGraph<V, E>, vertices: Vec<VertexId>, edges: Vec<EdgeId>) -> Self {
        debug_assert!(vertices.iter().all(|&v| v < graph.number_of_vertices()));
        debug_assert!(edges.iter().all(|&e| e < graph.number_of_edges()));
        Self {
            graph,
            vertices,
            edges,
        }
    }

    pub fn graph(&self) -> &'a StaticGraph<V, E> {
        self.graph
    }

    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    pub fn number_of_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn number_of_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn contains_vertex(&self, vertex: VertexId) -> bool {
        self.vertices.contains(&vertex)
    }

    pub fn contains_edge(&self, edge: EdgeId) -> bool {
        self.edges.contains(&edge)
    }
}
