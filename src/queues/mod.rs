// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod binary_heap;
pub mod bucket;
pub mod domination;
pub mod mapping_heap;

pub use binary_heap::BinaryHeap;
pub use bucket::Bucket;
pub use domination::{DominationCriterion, NoDomination, Strict, Weak};
pub use mapping_heap::MappingBinaryHeap;
