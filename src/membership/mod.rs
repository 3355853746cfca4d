// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Membership of lattice points in the shape under construction.
//!
//! The shape is a characteristic function over the key space. Two backends
//! implement it:
//!
//! - [`DenseMembership`]: one bit per key over all 2^30 keys (128 MiB),
//!   guaranteed O(1) with no hashing on the hot path
//! - [`SparseMembership`]: a hash set of member keys, O(1) expected, sized
//!   by the shape rather than by the key space
//!
//! Both answer the feasibility test [`Membership::is_possible`], which is the
//! downward-closure invariant restricted to a single point.

pub mod dense;
pub mod sparse;

pub use dense::DenseMembership;
pub use sparse::SparseMembership;

use crate::lattice::{LatticeKey, DIMENSIONS};
use std::fmt::Debug;
use strum_macros::{Display, EnumString};

/// Storage for the characteristic function of a partition shape.
pub trait Membership: Debug {
    /// True iff `key` is in the shape.
    fn is_member(&self, key: LatticeKey) -> bool;

    /// Add `key` to, or remove it from, the shape.
    fn set_member(&mut self, key: LatticeKey, member: bool);

    /// Number of points currently in the shape.
    fn len(&self) -> usize;

    /// True iff the shape is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True iff `key` could be added without breaking downward closure.
    ///
    /// Every nonzero coordinate of `key` must have its predecessor in the
    /// shape. The rest of the shape is assumed closed already.
    #[inline]
    fn is_possible(&self, key: LatticeKey) -> bool {
        (0..DIMENSIONS)
            .all(|j| !key.has_component(j) || self.is_member(key.predecessor(j)))
    }
}

/// Which membership backend to allocate for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum StorageKind {
    /// Bitset over the full key space.
    #[default]
    Dense,
    /// Hash set of member keys.
    Sparse,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn key(coords: [u32; DIMENSIONS]) -> LatticeKey {
        LatticeKey::pack(coords).unwrap()
    }

    fn check_is_possible(shape: &mut dyn Membership) {
        // Origin is addable to the empty shape: it has no predecessors.
        assert!(shape.is_possible(LatticeKey::ORIGIN));
        assert!(!shape.is_possible(key([1, 0, 0, 0, 0])));

        shape.set_member(LatticeKey::ORIGIN, true);
        for j in 0..DIMENSIONS {
            assert!(shape.is_possible(LatticeKey::ORIGIN.successor(j)));
        }
        // (1,1,0,0,0) needs both (0,1,0,0,0) and (1,0,0,0,0).
        assert!(!shape.is_possible(key([1, 1, 0, 0, 0])));
        shape.set_member(key([1, 0, 0, 0, 0]), true);
        assert!(!shape.is_possible(key([1, 1, 0, 0, 0])));
        shape.set_member(key([0, 1, 0, 0, 0]), true);
        assert!(shape.is_possible(key([1, 1, 0, 0, 0])));
        assert_eq!(shape.len(), 3);

        shape.set_member(key([0, 1, 0, 0, 0]), false);
        assert!(!shape.is_possible(key([1, 1, 0, 0, 0])));
        assert_eq!(shape.len(), 2);
    }

    #[test]
    fn test_is_possible_dense() {
        let mut shape = DenseMembership::new();
        check_is_possible(&mut shape);
    }

    #[test]
    fn test_is_possible_sparse() {
        let mut shape = SparseMembership::with_capacity(8);
        check_is_possible(&mut shape);
    }

    #[test]
    fn test_storage_kind_parse_and_display() {
        assert_eq!(StorageKind::from_str("dense").unwrap(), StorageKind::Dense);
        assert_eq!(StorageKind::from_str("sparse").unwrap(), StorageKind::Sparse);
        assert!(StorageKind::from_str("tree").is_err());
        assert_eq!(StorageKind::Sparse.to_string(), "sparse");
        assert_eq!(StorageKind::default(), StorageKind::Dense);
    }
}
