// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Dense membership: one bit per lattice key.

use super::Membership;
use crate::lattice::{LatticeKey, KEY_SPACE};

const WORD_BITS: usize = u64::BITS as usize;

/// Bitset covering the whole key space.
///
/// The table is allocated zeroed in one block, so untouched pages are never
/// committed. Membership is a shift and a mask, with no hashing.
pub struct DenseMembership {
    words: Vec<u64>,
    count: usize,
}

impl DenseMembership {
    /// Allocate an empty shape over all `KEY_SPACE` keys.
    pub fn new() -> Self {
        Self {
            words: vec![0; KEY_SPACE / WORD_BITS],
            count: 0,
        }
    }
}

impl Default for DenseMembership {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DenseMembership {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DenseMembership")
            .field("words", &self.words.len())
            .field("count", &self.count)
            .finish()
    }
}

impl Membership for DenseMembership {
    #[inline]
    fn is_member(&self, key: LatticeKey) -> bool {
        let index = key.index();
        (self.words[index / WORD_BITS] >> (index % WORD_BITS)) & 1 != 0
    }

    #[inline]
    fn set_member(&mut self, key: LatticeKey, member: bool) {
        let index = key.index();
        let word = &mut self.words[index / WORD_BITS];
        let bit = 1u64 << (index % WORD_BITS);
        let was_member = *word & bit != 0;
        if member {
            *word |= bit;
        } else {
            *word &= !bit;
        }
        match (was_member, member) {
            (false, true) => self.count += 1,
            (true, false) => self.count -= 1,
            _ => {}
        }
    }

    fn len(&self) -> usize {
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_clear() {
        let mut shape = DenseMembership::new();
        let far = LatticeKey::pack([63, 63, 63, 63, 63]).unwrap();
        assert!(!shape.is_member(far));

        shape.set_member(far, true);
        shape.set_member(far, true);
        assert!(shape.is_member(far));
        assert_eq!(shape.len(), 1);

        shape.set_member(far, false);
        assert!(!shape.is_member(far));
        assert!(shape.is_empty());
    }

    #[test]
    fn test_adjacent_bits_independent() {
        let mut shape = DenseMembership::new();
        let a = LatticeKey::pack([0, 0, 0, 0, 63]).unwrap();
        let b = LatticeKey::pack([0, 0, 0, 1, 0]).unwrap();
        assert_eq!(a.index() + 1, b.index());

        shape.set_member(a, true);
        assert!(!shape.is_member(b));
        shape.set_member(b, true);
        shape.set_member(a, false);
        assert!(shape.is_member(b));
    }
}
