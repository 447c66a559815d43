// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Structured logging for engine and driver lifecycle events.
//!
//! Diagnostic output goes through typed message structs rather than ad-hoc
//! format strings: each event is a struct with a `Display` impl plus a
//! [`messages::StructuredLog`] impl choosing the level and the structured
//! fields. Call sites stay free of magic strings, and the message catalogue
//! documents every event the crate can emit.

pub mod messages;

/// Install a fmt subscriber honouring `RUST_LOG`.
///
/// Intended for binaries and tests; returns `false` when a global
/// subscriber is already set.
pub fn init_tracing() -> bool {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
        .is_ok()
}
