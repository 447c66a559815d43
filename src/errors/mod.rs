// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Recoverable error types.
//!
//! Only the outer surfaces of the crate return `Result`: loading and
//! validating a run configuration, and writing statistics output. Everything
//! inside the path engine treats invalid input as a programmer error and
//! panics (invalid vertex or edge ids, popping an empty queue, zero
//! susceptance on a consumed edge); there is no recovery path for those.

use thiserror::Error;

/// Errors raised while loading or validating a [`crate::config::CentralityConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read configuration file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid YAML for the expected schema.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// The configuration parsed but describes an unusable run.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Errors raised while writing statistics rows to disk.
///
/// The computation that produced the rows is unaffected by these; callers
/// decide whether a missing CSV is fatal.
#[derive(Debug, Error)]
pub enum StatisticsError {
    /// The output file could not be opened or inspected.
    #[error("failed to open statistics file '{path}': {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A header or row failed to write.
    #[error("failed to write statistics output: {0}")]
    Write(#[from] std::io::Error),
}
