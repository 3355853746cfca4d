// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The frontier: points addable to the current shape.
//!
//! The frontier is a stack of generations. Admitting a point appends the
//! candidates it unlocked at the tail; undoing the admission truncates the
//! same number from the tail. This gives O(1) backtracking with no copying.
//!
//! The order of candidates within a generation (ascending dimension) is what
//! makes the search canonical, so it must never change.

use crate::lattice::{LatticeKey, DIMENSIONS};
use crate::membership::Membership;
use std::ops::Index;

/// The zero to five candidates unlocked by admitting a single point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidates {
    keys: [LatticeKey; DIMENSIONS],
    len: usize,
}

impl Candidates {
    const fn empty() -> Self {
        Self {
            keys: [LatticeKey::ORIGIN; DIMENSIONS],
            len: 0,
        }
    }

    fn push(&mut self, key: LatticeKey) {
        self.keys[self.len] = key;
        self.len += 1;
    }

    /// The candidates in discovery order.
    pub fn as_slice(&self) -> &[LatticeKey] {
        &self.keys[..self.len]
    }

    /// Number of candidates.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True iff nothing was unlocked.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Find the upper neighbours of `added` that have become addable.
///
/// Dimensions are tried in ascending order and survivors keep that order.
/// `added` must already be a member of `shape`.
pub fn discover_new_candidates<M>(shape: &M, added: LatticeKey) -> Candidates
where
    M: Membership + ?Sized,
{
    let mut found = Candidates::empty();
    for j in 0..DIMENSIONS {
        let neighbour = added.successor(j);
        if shape.is_possible(neighbour) {
            found.push(neighbour);
        }
    }
    found
}

/// Candidate list for the search.
///
/// # Memory Model
///
/// Every admitted point contributes at most `DIMENSIONS` candidates, so a run
/// up to size `n` never holds more than `DIMENSIONS * n` live entries. The
/// backing vector is reserved to that bound up front and only grows if the
/// bound is wrong.
#[derive(Debug)]
pub struct Frontier {
    /// Live candidates, oldest generation first.
    keys: Vec<LatticeKey>,
    /// Proven upper bound on simultaneous live candidates.
    bound: usize,
    /// Largest length seen so far.
    high_water: usize,
}

impl Frontier {
    /// Create an empty frontier for shapes up to `max_size` points.
    pub fn for_max_size(max_size: usize) -> Self {
        let bound = DIMENSIONS * max_size.max(1);
        Self {
            keys: Vec::with_capacity(bound),
            bound,
            high_water: 0,
        }
    }

    /// Append a generation at the tail.
    ///
    /// Returns the number of keys appended, which the caller must later hand
    /// to [`Frontier::truncate`].
    pub fn append(&mut self, candidates: &Candidates) -> usize {
        self.keys.extend_from_slice(candidates.as_slice());
        debug_assert!(
            self.keys.len() <= self.bound,
            "Frontier exceeded its bound: {} > {}",
            self.keys.len(),
            self.bound
        );
        self.high_water = self.high_water.max(self.keys.len());
        candidates.len()
    }

    /// Drop the newest `count` keys.
    pub fn truncate(&mut self, count: usize) {
        debug_assert!(count <= self.keys.len());
        self.keys.truncate(self.keys.len() - count);
    }

    /// Number of live candidates.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// True iff there are no live candidates.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Largest number of simultaneously live candidates seen.
    pub fn high_water(&self) -> usize {
        self.high_water
    }

    /// The live candidates, oldest generation first.
    pub fn as_slice(&self) -> &[LatticeKey] {
        &self.keys
    }
}

impl Index<usize> for Frontier {
    type Output = LatticeKey;

    fn index(&self, index: usize) -> &LatticeKey {
        &self.keys[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::membership::SparseMembership;

    fn key(coords: [u32; DIMENSIONS]) -> LatticeKey {
        LatticeKey::pack(coords).unwrap()
    }

    #[test]
    fn test_origin_unlocks_every_dimension_in_order() {
        let mut shape = SparseMembership::with_capacity(4);
        shape.set_member(LatticeKey::ORIGIN, true);

        let found = discover_new_candidates(&shape, LatticeKey::ORIGIN);
        assert_eq!(found.len(), DIMENSIONS);
        let expected: Vec<_> = (0..DIMENSIONS)
            .map(|j| LatticeKey::ORIGIN.successor(j))
            .collect();
        assert_eq!(found.as_slice(), expected.as_slice());
    }

    #[test]
    fn test_discovery_waits_for_all_predecessors() {
        let mut shape = SparseMembership::with_capacity(4);
        shape.set_member(LatticeKey::ORIGIN, true);
        shape.set_member(key([1, 0, 0, 0, 0]), true);

        // Only (2,0,0,0,0): every mixed neighbour lacks its other predecessor.
        let found = discover_new_candidates(&shape, key([1, 0, 0, 0, 0]));
        assert_eq!(found.as_slice(), &[key([2, 0, 0, 0, 0])]);

        shape.set_member(key([0, 0, 1, 0, 0]), true);
        let found = discover_new_candidates(&shape, key([0, 0, 1, 0, 0]));
        // (1,0,1,0,0) and (0,0,2,0,0), ascending by dimension.
        assert_eq!(
            found.as_slice(),
            &[key([1, 0, 1, 0, 0]), key([0, 0, 2, 0, 0])]
        );
    }

    #[test]
    fn test_append_truncate_restores_prior_state() {
        let mut shape = SparseMembership::with_capacity(4);
        shape.set_member(LatticeKey::ORIGIN, true);
        let mut frontier = Frontier::for_max_size(3);
        assert!(frontier.is_empty());

        let seed = discover_new_candidates(&shape, LatticeKey::ORIGIN);
        assert_eq!(frontier.append(&seed), 5);
        let before: Vec<_> = frontier.as_slice().to_vec();

        shape.set_member(frontier[0], true);
        let next = discover_new_candidates(&shape, frontier[0]);
        let k = frontier.append(&next);
        assert_eq!(k, 1);
        assert_eq!(frontier.len(), 6);
        assert_eq!(frontier[5], key([2, 0, 0, 0, 0]));

        frontier.truncate(k);
        assert_eq!(frontier.as_slice(), before.as_slice());
        assert_eq!(frontier.high_water(), 6);
    }

    #[test]
    fn test_empty_generation() {
        let mut frontier = Frontier::for_max_size(0);
        assert_eq!(frontier.append(&Candidates::empty()), 0);
        frontier.truncate(0);
        assert!(frontier.is_empty());
    }
}
