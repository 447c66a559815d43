// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! YAML run configuration for the centrality drivers.
//!
//! A configuration describes *how* a centrality run executes — which label
//! variant, which scored entity, which susceptance carrier, how many worker
//! threads, and where statistics go — not the network itself. Graphs arrive
//! through the [`crate::graph`] contract.
//!
//! # Example
//!
//! ```yaml
//! label: voltage-angle-difference
//! counter: edges
//! carrier: dc
//! workers: 4
//! statistics_file: results/dtp_runtime.csv
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::centrality::CentralityCounter;
use crate::errors::ConfigError;
use crate::graph::electrical::Carrier;

/// Which path label the engine is instantiated with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LabelKind {
    /// Single criterion: susceptance norm only.
    SusceptanceNorm,
    /// Two criteria: (susceptance norm, minimum capacity).
    VoltageAngleDifference,
}

/// Options of one centrality run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CentralityConfig {
    /// Label variant; defaults to the two-criterion label.
    #[serde(default = "default_label")]
    pub label: LabelKind,

    /// Scored entity; defaults to edges.
    #[serde(default = "default_counter")]
    pub counter: CentralityCounter,

    /// Susceptance carrier, fixed per engine instance; defaults to DC.
    #[serde(default = "default_carrier")]
    pub carrier: Carrier,

    /// Worker threads for the parallel driver. Zero is rejected by
    /// [`CentralityConfig::validate`]; defaults to the machine parallelism.
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Optional CSV file the statistics collection is appended to.
    #[serde(default)]
    pub statistics_file: Option<PathBuf>,
}

fn default_label() -> LabelKind {
    LabelKind::VoltageAngleDifference
}

fn default_counter() -> CentralityCounter {
    CentralityCounter::Edges
}

fn default_carrier() -> Carrier {
    Carrier::Dc
}

fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4)
}

impl Default for CentralityConfig {
    fn default() -> Self {
        Self {
            label: default_label(),
            counter: default_counter(),
            carrier: default_carrier(),
            workers: default_workers(),
            statistics_file: None,
        }
    }
}

impl CentralityConfig {
    /// Parse a configuration from a YAML string and validate it.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: CentralityConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field consistency.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.workers == 0 {
            return Err(ConfigError::Invalid(
                "workers must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Run `f` inside a rayon pool sized to `self.workers`.
    ///
    /// Drivers instantiated with the parallel policy pick up the pool of the
    /// calling context, so wrapping a run in this method is how the
    /// configured worker count takes effect.
    pub fn install<R>(&self, f: impl FnOnce() -> R + Send) -> R
    where
        R: Send,
    {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.workers)
            .build()
            .expect("failed to build worker pool");
        pool.install(f)
    }
}

/// Load and validate a configuration file.
pub fn load_config(path: impl AsRef<Path>) -> Result<CentralityConfig, ConfigError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    CentralityConfig::from_yaml_str(&contents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_document() {
        let config = CentralityConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config.label, LabelKind::VoltageAngleDifference);
        assert_eq!(config.counter, CentralityCounter::Edges);
        assert_eq!(config.carrier, Carrier::Dc);
        assert!(config.workers >= 1);
        assert!(config.statistics_file.is_none());
    }

    #[test]
    fn test_full_document() {
        let yaml = "label: susceptance-norm\n\
                    counter: vertices\n\
                    carrier: ac\n\
                    workers: 2\n\
                    statistics_file: out.csv\n";
        let config = CentralityConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.label, LabelKind::SusceptanceNorm);
        assert_eq!(config.counter, CentralityCounter::Vertices);
        assert_eq!(config.carrier, Carrier::Ac);
        assert_eq!(config.workers, 2);
        assert_eq!(config.statistics_file, Some(PathBuf::from("out.csv")));
    }

    #[test]
    fn test_zero_workers_rejected() {
        let result = CentralityConfig::from_yaml_str("workers: 0");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_unparsable_document_rejected() {
        let result = CentralityConfig::from_yaml_str("label: [not, a, label]");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file_reported() {
        let result = load_config("/nonexistent/gridline.yaml");
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_install_uses_configured_workers() {
        let config = CentralityConfig {
            workers: 2,
            ..CentralityConfig::default()
        };
        let threads = config.install(rayon::current_num_threads);
        assert_eq!(threads, 2);
    }
}
