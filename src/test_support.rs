// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Shared fixtures for unit and scenario tests.
//!
//! The two four-bus networks mirror Figures 4a and 4b of the ACM eEnergy
//! MTSF example grid: a star from bus 0 to every other bus plus the chords
//! 1-2 and 2-3, unit susceptance on every branch, and thermal limits that
//! differ between the two figures. Bus 0 plays the generator in the
//! generator-based scenarios.

use crate::graph::electrical::{BusType, ElectricalEdge, ElectricalVertex};
use crate::graph::static_graph::StaticGraph;

pub(crate) type TestGraph = StaticGraph<ElectricalVertex, ElectricalEdge>;

fn four_bus(name: &str, thermal_limits: [f64; 5]) -> TestGraph {
    let mut graph = StaticGraph::new(name);
    graph.add_vertex(ElectricalVertex::new("bus0", BusType::Generation));
    graph.add_vertex(ElectricalVertex::load("bus1"));
    graph.add_vertex(ElectricalVertex::load("bus2"));
    graph.add_vertex(ElectricalVertex::load("bus3"));

    let endpoints = [(0, 1), (0, 2), (0, 3), (1, 2), (2, 3)];
    for ((source, target), limit) in endpoints.into_iter().zip(thermal_limits) {
        graph.add_edge(source, target, ElectricalEdge::lossless(1.0, limit));
    }
    graph
}

/// Figure 4a: thermal limits (1, 3, 3, 1, 1).
pub(crate) fn acm_figure4a() -> TestGraph {
    four_bus("Acm2018MtsfFigure4a", [1.0, 3.0, 3.0, 1.0, 1.0])
}

/// Figure 4b: thermal limits (1, 1, 2, 1, 1).
pub(crate) fn acm_figure4b() -> TestGraph {
    four_bus("Acm2018MtsfFigure4b", [1.0, 1.0, 2.0, 1.0, 1.0])
}

/// A single isolated bus.
pub(crate) fn single_bus() -> TestGraph {
    let mut graph = StaticGraph::new("SingleBus");
    graph.add_vertex(ElectricalVertex::load("bus0"));
    graph
}

/// Two buses joined by one branch of susceptance 1 and capacity 10.
pub(crate) fn two_bus() -> TestGraph {
    let mut graph = StaticGraph::new("TwoBus");
    graph.add_vertex(ElectricalVertex::load("bus0"));
    graph.add_vertex(ElectricalVertex::load("bus1"));
    graph.add_edge(0, 1, ElectricalEdge::lossless(1.0, 10.0));
    graph
}

/// Componentwise comparison with the tolerance the published expectations
/// are quoted at.
pub(crate) fn assert_all_close(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len(), "length mismatch");
    for (index, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!(
            (a - e).abs() <= 1e-4,
            "element {index}: {a} differs from expected {e}"
        );
    }
}
