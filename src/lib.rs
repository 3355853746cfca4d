// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Enumeration of 4-dimensional partitions.
//!
//! A 4-dimensional partition of size n is an order ideal of N^5 with n
//! points: a finite set containing the origin, closed under stepping down
//! along any coordinate. This crate counts them for every size up to a given
//! maximum by exhaustive backtracking.
//!
//! # Architecture
//!
//! Leaves first:
//!
//! - **lattice**: points packed as five 6-bit fields of a `u32`
//! - **membership**: the shape as a characteristic function over all keys,
//!   with the feasibility test (all predecessors present)
//! - **frontier**: the points addable to the current shape, as a stack of
//!   generations
//! - **context**: SearchContext, owning all mutable state of a run
//! - **engine**: the Enumerator, an explicit-stack backtracking search
//! - **driver**: configuration, entry points, reporting
//!
//! # Search Algorithm
//!
//! The search is Bratley–McKay style canonical augmentation. Each node of the
//! search tree is a shape together with a usable range of the frontier.
//! Children take candidates from that range in order; a child may only pick
//! from candidates after its own, plus those its own admission unlocked. Two
//! different choice sequences never produce the same shape, so counting nodes
//! by size counts distinct partitions without any seen-set.
//!
//! # Memory Model
//!
//! The dense membership table is a 128 MiB bitset over all 2^30 keys, giving
//! constant-time lookups with no hashing. The sparse backend trades that for a
//! hash set sized by the shape. The frontier is bounded by five candidates
//! per admitted point.
//!
//! # References
//!
//! - Bratley, P. and McKay, J. K. S. (1967). "Algorithm 313: Multi-dimensional
//!   partition generator." Communications of the ACM 10(10), 666.

pub mod context;
pub mod driver;
pub mod engine;
pub mod error;
pub mod frontier;
pub mod lattice;
pub mod membership;
pub mod state;

// Re-export commonly used types
pub use context::SearchContext;
pub use driver::{enumerate, enumerate_with_visitor, Enumeration, EnumerationConfig};
pub use engine::{Enumerator, ShapeVisitor};
pub use error::{EnumerationError, Result};
pub use lattice::LatticeKey;
pub use membership::{Membership, StorageKind};
pub use state::Histogram;
