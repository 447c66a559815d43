// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Execution-policy dispatch for container and driver loops.
//!
//! The policy is a type-level switch: code generic over [`ExecutionPolicy`]
//! monomorphises into a plain loop for [`Sequential`] and into a rayon
//! dispatch for [`Parallel`], with no runtime flag in between. Breakable
//! traversals are not a separate policy here; containers expose them as
//! walks whose callback returns `bool` (`false` breaks), which is the native
//! Rust shape of the same idea.
//!
//! Callers that mutate state from a [`Parallel`] loop must write to
//! per-worker locations (see the centrality drivers) or serialise access
//! themselves; reads of shared containers are safe.

use rayon::prelude::*;

/// Compile-time traversal policy.
///
/// `for_each_index` runs a callback once per index in `0..len`. The
/// [`Sequential`] implementation guarantees ascending index order; the
/// [`Parallel`] implementation guarantees nothing about ordering.
///
/// `worker_count`/`worker_index` describe the worker slots a driver may
/// allocate per-thread state for: a single slot under [`Sequential`], one
/// slot per pool thread under [`Parallel`].
pub trait ExecutionPolicy: Send + Sync + 'static {
    fn for_each_index<F>(len: usize, f: F)
    where
        F: Fn(usize) + Send + Sync;

    /// Number of worker slots a loop under this policy can occupy.
    fn worker_count() -> usize;

    /// Slot of the calling worker; only meaningful inside `for_each_index`.
    fn worker_index() -> usize;
}

/// One-by-one traversal in container order.
pub struct Sequential;

/// Elements dispatched across the rayon worker pool.
pub struct Parallel;

impl ExecutionPolicy for Sequential {
    fn for_each_index<F>(len: usize, f: F)
    where
        F: Fn(usize) + Send + Sync,
    {
        for index in 0..len {
            f(index);
        }
    }

    fn worker_count() -> usize {
        1
    }

    fn worker_index() -> usize {
        0
    }
}

impl ExecutionPolicy for Parallel {
    fn for_each_index<F>(len: usize, f: F)
    where
        F: Fn(usize) + Send + Sync,
    {
        (0..len).into_par_iter().for_each(|index| f(index));
    }

    fn worker_count() -> usize {
        rayon::current_num_threads()
    }

    fn worker_index() -> usize {
        // None outside a pool, e.g. when a parallel-typed driver is called
        // from a plain thread and rayon falls back to the caller.
        rayon::current_thread_index().unwrap_or(0)
    }
}
