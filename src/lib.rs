// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod centrality;     // betweenness drivers
pub mod config;         // config + shared constants
pub mod engine;         // DTP path engine
pub mod errors;         // error handling
pub mod execution;      // execution-policy dispatch
pub mod graph;          // static graph + electrical attributes
pub mod labels;         // Pareto path labels
pub mod observability;
pub mod queues;         // heaps + dominance bucket
pub mod statistics;     // runtime rows + CSV output

#[cfg(test)]
pub(crate) mod test_support;
