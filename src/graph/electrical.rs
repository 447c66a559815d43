// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Electrical attributes of buses and branches.
//!
//! The path engine only ever asks a branch for two scalars: a nonzero
//! susceptance (through a fixed [`Carrier`]) and a positive thermal limit.
//! Everything else here is opaque to the engine and consulted by the
//! centrality drivers when selecting source sets.

use serde::Deserialize;

/// IEEE-style bus classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BusType {
    /// Reference bus.
    Slack,
    /// Generation bus.
    Generation,
    /// Load bus.
    Load,
    #[default]
    Unknown,
}

/// Bus attributes attached to a vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct ElectricalVertex {
    pub name: String,
    pub bus_type: BusType,
}

impl ElectricalVertex {
    pub fn new(name: impl Into<String>, bus_type: BusType) -> Self {
        Self {
            name: name.into(),
            bus_type,
        }
    }

    /// Anonymous load bus, the common fixture shape.
    pub fn load(name: impl Into<String>) -> Self {
        Self::new(name, BusType::Load)
    }

    pub fn is_generator(&self) -> bool {
        matches!(self.bus_type, BusType::Generation | BusType::Slack)
    }

    pub fn is_load(&self) -> bool {
        self.bus_type == BusType::Load
    }
}

/// Carrier model under which a branch susceptance is read.
///
/// The choice is fixed per engine instance; mixing carriers within one run
/// would make the susceptance norm meaningless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Carrier {
    Ac,
    Dc,
}

/// The branch scalars the path engine consumes.
///
/// Implementations must guarantee a nonzero susceptance for every carrier
/// they support; the engine asserts this on every consumed edge.
pub trait BranchProperties {
    fn susceptance(&self, carrier: Carrier) -> f64;
    fn thermal_limit(&self) -> f64;
}

/// Branch attributes attached to an edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElectricalEdge {
    /// Series resistance r.
    pub resistance: f64,
    /// Series reactance x; must be nonzero.
    pub reactance: f64,
    /// Thermal limit (maximum apparent power flow).
    pub thermal_limit: f64,
}

impl ElectricalEdge {
    pub fn new(resistance: f64, reactance: f64, thermal_limit: f64) -> Self {
        Self {
            resistance,
            reactance,
            thermal_limit,
        }
    }

    /// Lossless branch described by reactance and thermal limit only.
    pub fn lossless(reactance: f64, thermal_limit: f64) -> Self {
        Self::new(0.0, reactance, thermal_limit)
    }
}

impl BranchProperties for ElectricalEdge {
    fn susceptance(&self, carrier: Carrier) -> f64 {
        match carrier {
            // b = -x / (r^2 + x^2)
            Carrier::Ac => {
                -self.reactance
                    / (self.resistance * self.resistance + self.reactance * self.reactance)
            }
            // b = -1 / x
            Carrier::Dc => -1.0 / self.reactance,
        }
    }

    fn thermal_limit(&self) -> f64 {
        self.thermal_limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dc_susceptance() {
        let edge = ElectricalEdge::lossless(0.5, 10.0);
        assert_eq!(edge.susceptance(Carrier::Dc), -2.0);
    }

    #[test]
    fn test_ac_susceptance() {
        let edge = ElectricalEdge::new(3.0, 4.0, 10.0);
        // -4 / (9 + 16)
        assert!((edge.susceptance(Carrier::Ac) + 0.16).abs() < 1e-12);
    }

    #[test]
    fn test_bus_roles() {
        assert!(ElectricalVertex::new("g", BusType::Generation).is_generator());
        assert!(ElectricalVertex::new("s", BusType::Slack).is_generator());
        assert!(ElectricalVertex::load("l").is_load());
        assert!(!ElectricalVertex::load("l").is_generator());
    }
}
