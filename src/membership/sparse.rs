// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Sparse membership: a hash set of member keys.

use super::Membership;
use crate::lattice::LatticeKey;
use std::collections::HashSet;

/// Hash set of the points in the shape.
///
/// Memory is proportional to the shape size, at the cost of hashing on every
/// lookup.
#[derive(Debug, Default)]
pub struct SparseMembership {
    members: HashSet<u32>,
}

impl SparseMembership {
    /// Create an empty shape with room for `capacity` points.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            members: HashSet::with_capacity(capacity),
        }
    }
}

impl Membership for SparseMembership {
    #[inline]
    fn is_member(&self, key: LatticeKey) -> bool {
        self.members.contains(&key.bits())
    }

    #[inline]
    fn set_member(&mut self, key: LatticeKey, member: bool) {
        if member {
            self.members.insert(key.bits());
        } else {
            self.members.remove(&key.bits());
        }
    }

    fn len(&self) -> usize {
        self.members.len()
    }
}
