// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message catalogue for diagnostic events.

use std::fmt::{Display, Formatter};

use tracing::Span;

use crate::graph::static_graph::VertexId;

/// A loggable event with structured fields.
pub trait StructuredLog {
    /// Emit the event at its designated level.
    fn log(&self);

    /// A span carrying the event's fields, for wrapping longer work.
    fn span(&self, name: &str) -> Span;
}

/// One engine run from a single source finished.
pub struct DtpRunCompleted {
    pub source: VertexId,
    pub number_of_labels: usize,
    pub number_of_relaxed_edges: usize,
    pub elapsed_milliseconds: f64,
}

impl Display for DtpRunCompleted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "DTP run from source {} finished: {} labels, {} relaxed edges, {:.3} ms",
            self.source, self.number_of_labels, self.number_of_relaxed_edges,
            self.elapsed_milliseconds
        )
    }
}

impl StructuredLog for DtpRunCompleted {
    fn log(&self) {
        tracing::debug!(
            source = self.source,
            number_of_labels = self.number_of_labels,
            number_of_relaxed_edges = self.number_of_relaxed_edges,
            elapsed_milliseconds = self.elapsed_milliseconds,
            "{}",
            self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("dtp_run", span_name = name, source = self.source)
    }
}

/// A centrality computation is starting.
pub struct CentralityStarted<'a> {
    pub algorithm: &'a str,
    pub number_of_sources: usize,
    pub workers: usize,
}

impl Display for CentralityStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Starting {} over {} sources on {} workers",
            self.algorithm, self.number_of_sources, self.workers
        )
    }
}

impl StructuredLog for CentralityStarted<'_> {
    fn log(&self) {
        tracing::info!(
            algorithm = self.algorithm,
            number_of_sources = self.number_of_sources,
            workers = self.workers,
            "{}",
            self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "centrality",
            span_name = name,
            algorithm = self.algorithm,
            number_of_sources = self.number_of_sources,
            workers = self.workers,
        )
    }
}

/// A centrality computation finished and its counters are final.
pub struct CentralityCompleted<'a> {
    pub algorithm: &'a str,
    pub number_of_sources: usize,
    pub counter_size: usize,
}

impl Display for CentralityCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} finished: {} sources reduced into {} counters",
            self.algorithm, self.number_of_sources, self.counter_size
        )
    }
}

impl StructuredLog for CentralityCompleted<'_> {
    fn log(&self) {
        tracing::info!(
            algorithm = self.algorithm,
            number_of_sources = self.number_of_sources,
            counter_size = self.counter_size,
            "{}",
            self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "centrality",
            span_name = name,
            algorithm = self.algorithm,
            number_of_sources = self.number_of_sources,
        )
    }
}
