// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Shared numeric constants.

/// Tolerance for equality comparisons between path-key components.
///
/// Two keys whose components differ by no more than this are treated as
/// equal by the dominance criteria, so neither strictly dominates the other.
pub const EPSILON: f64 = 1e-9;

/// Epsilon equality on reals, the single comparison used by all label kinds.
pub fn approx_eq(lhs: f64, rhs: f64) -> bool {
    (lhs - rhs).abs() <= EPSILON
}
