// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! LatticeKey: a point of N^5 packed into a single `u32`.
//!
//! # Examples
//!
//! ```
//! use partition_search::lattice::LatticeKey;
//!
//! let key = LatticeKey::pack([1, 0, 2, 0, 3]).unwrap();
//! assert_eq!(key.unpack(), [1, 0, 2, 0, 3]);
//!
//! assert!(key.has_component(0));
//! assert!(!key.has_component(1));
//! assert_eq!(key.predecessor(2).unpack(), [1, 0, 1, 0, 3]);
//! assert_eq!(format!("{}", key), "(1,0,2,0,3)");
//! ```

use crate::error::{EnumerationError, Result};
use crate::lattice::constants::{
    DIMENSIONS, FIELD_MASK, FIELD_OP, FIELD_SHIFT, MAX_COORDINATE,
};
use std::fmt;

/// A lattice point, encoded as five 6-bit coordinate fields.
///
/// Keys are immutable values; neighbours are produced by composition
/// (`predecessor`, `successor`) and never by mutating a key in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LatticeKey(u32);

impl LatticeKey {
    /// The origin, the unique minimal element of the poset.
    pub const ORIGIN: Self = Self(0);

    /// Pack five coordinates into a key.
    ///
    /// # Errors
    ///
    /// Returns [`EnumerationError::CoordinateOutOfRange`] if any coordinate
    /// exceeds [`MAX_COORDINATE`]. Out-of-range values are never wrapped into
    /// the adjacent field.
    pub fn pack(coords: [u32; DIMENSIONS]) -> Result<Self> {
        let mut bits = 0;
        for (dimension, &value) in coords.iter().enumerate() {
            if value > MAX_COORDINATE {
                return Err(EnumerationError::CoordinateOutOfRange {
                    dimension,
                    value,
                    max: MAX_COORDINATE,
                });
            }
            bits |= value << FIELD_SHIFT[dimension];
        }
        Ok(Self(bits))
    }

    /// Get the raw packed value.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// The key as an index into a table covering the whole key space.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Unpack into the five coordinates.
    pub fn unpack(self) -> [u32; DIMENSIONS] {
        std::array::from_fn(|j| self.coordinate(j))
    }

    /// Get coordinate `j`.
    #[inline]
    pub fn coordinate(self, j: usize) -> u32 {
        (self.0 & FIELD_MASK[j]) >> FIELD_SHIFT[j]
    }

    /// True iff coordinate `j` is nonzero.
    #[inline]
    pub fn has_component(self, j: usize) -> bool {
        self.0 & FIELD_MASK[j] != 0
    }

    /// The point one step below along dimension `j`.
    ///
    /// Only meaningful when `has_component(j)`; otherwise the subtraction
    /// would borrow from the neighbouring field.
    #[inline]
    pub fn predecessor(self, j: usize) -> Self {
        debug_assert!(self.has_component(j), "{} has no component {}", self, j);
        Self(self.0 - FIELD_OP[j])
    }

    /// The point one step above along dimension `j`.
    ///
    /// The caller guarantees coordinate `j` is below [`MAX_COORDINATE`].
    #[inline]
    pub fn successor(self, j: usize) -> Self {
        debug_assert!(self.coordinate(j) < MAX_COORDINATE, "{} overflows field {}", self, j);
        Self(self.0 + FIELD_OP[j])
    }
}

impl fmt::Display for LatticeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [c0, c1, c2, c3, c4] = self.unpack();
        write!(f, "({},{},{},{},{})", c0, c1, c2, c3, c4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin() {
        assert_eq!(LatticeKey::ORIGIN.unpack(), [0; DIMENSIONS]);
        assert_eq!(LatticeKey::ORIGIN.index(), 0);
        for j in 0..DIMENSIONS {
            assert!(!LatticeKey::ORIGIN.has_component(j));
        }
    }

    #[test]
    fn test_pack_places_coordinate_zero_highest() {
        let key = LatticeKey::pack([1, 0, 0, 0, 0]).unwrap();
        assert_eq!(key.bits(), 1 << 24);
        let key = LatticeKey::pack([0, 0, 0, 0, 1]).unwrap();
        assert_eq!(key.bits(), 1);
    }

    #[test]
    fn test_pack_unpack_round_trip() {
        for c0 in [0, 1, 31, 63] {
            for c2 in [0, 7, 62] {
                for c4 in [0, 5, 63] {
                    let coords = [c0, 63 - c0, c2, 17, c4];
                    let key = LatticeKey::pack(coords).unwrap();
                    assert_eq!(key.unpack(), coords);
                }
            }
        }
    }

    #[test]
    fn test_pack_rejects_out_of_range() {
        let err = LatticeKey::pack([0, 0, 64, 0, 0]).unwrap_err();
        assert_eq!(
            err,
            EnumerationError::CoordinateOutOfRange {
                dimension: 2,
                value: 64,
                max: 63
            }
        );
    }

    #[test]
    fn test_neighbours_match_coordinate_arithmetic() {
        const VALUES: [u32; 5] = [0, 1, 31, 62, 63];
        let mut checked = 0;
        for a in VALUES {
            for b in VALUES {
                for c in VALUES {
                    for d in VALUES {
                        for e in VALUES {
                            let coords = [a, b, c, d, e];
                            let key = LatticeKey::pack(coords).unwrap();
                            assert_eq!(key.unpack(), coords);
                            for j in 0..DIMENSIONS {
                                assert_eq!(key.coordinate(j), coords[j]);
                                assert_eq!(key.has_component(j), coords[j] != 0);

                                if coords[j] < MAX_COORDINATE {
                                    let mut up = coords;
                                    up[j] += 1;
                                    assert_eq!(key.successor(j).unpack(), up);
                                }
                                if key.has_component(j) {
                                    let mut down = coords;
                                    down[j] -= 1;
                                    assert_eq!(key.predecessor(j).unpack(), down);
                                    assert_eq!(key.predecessor(j).successor(j), key);
                                }
                            }
                            checked += 1;
                        }
                    }
                }
            }
        }
        assert_eq!(checked, VALUES.len().pow(DIMENSIONS as u32));
    }

    #[test]
    fn test_display() {
        let key = LatticeKey::pack([2, 0, 1, 0, 4]).unwrap();
        assert_eq!(key.to_string(), "(2,0,1,0,4)");
    }
}
