// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod electrical;
pub mod network;
pub mod static_graph;
pub mod subgraph;

pub use electrical::{BranchProperties, BusType, Carrier, ElectricalEdge, ElectricalVertex};
pub use network::PowerNetwork;
pub use static_graph::{Edge, EdgeId, StaticGraph, Vertex, VertexId};
pub use subgraph::Subgraph;
