// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Compile-time constants for the packed lattice encoding.
//!
//! A lattice point is five coordinates, each stored in its own 6-bit field of
//! a `u32`. Coordinate 0 occupies the highest field (bits 24..30), coordinate
//! 4 the lowest (bits 0..6). The top two bits are always zero.
//!
//! ```text
//!  31 30 | 29 ....... 24 | 23 ... 18 | 17 ... 12 | 11 .... 6 | 5 ..... 0
//!   0  0 |      c0       |    c1     |    c2     |    c3     |    c4
//! ```

/// Number of coordinates of a lattice point.
pub const DIMENSIONS: usize = 5;

/// Width of each coordinate field in bits.
pub const FIELD_BITS: u32 = 6;

/// Largest value a single coordinate can hold.
pub const MAX_COORDINATE: u32 = (1 << FIELD_BITS) - 1;

/// Amount a coordinate changes when stepping to a neighbouring point.
pub const FIELD_STEP: u32 = 1;

/// Number of addressable keys (every packed value below this is a valid key).
pub const KEY_SPACE: usize = 1 << (FIELD_BITS as usize * DIMENSIONS);

/// Largest shape size that can be enumerated without field overflow.
///
/// A shape of size `n` holds points with coordinates up to `n - 1`, and
/// candidate discovery looks one step further. So `n` coordinates must fit.
pub const MAX_SIZE: usize = MAX_COORDINATE as usize;

/// Bit offset of each coordinate field.
pub const FIELD_SHIFT: [u32; DIMENSIONS] = [24, 18, 12, 6, 0];

/// Mask selecting each coordinate field.
pub const FIELD_MASK: [u32; DIMENSIONS] = [
    MAX_COORDINATE << FIELD_SHIFT[0],
    MAX_COORDINATE << FIELD_SHIFT[1],
    MAX_COORDINATE << FIELD_SHIFT[2],
    MAX_COORDINATE << FIELD_SHIFT[3],
    MAX_COORDINATE << FIELD_SHIFT[4],
];

/// Packed delta for one step along each dimension.
pub const FIELD_OP: [u32; DIMENSIONS] = [
    FIELD_STEP << FIELD_SHIFT[0],
    FIELD_STEP << FIELD_SHIFT[1],
    FIELD_STEP << FIELD_SHIFT[2],
    FIELD_STEP << FIELD_SHIFT[3],
    FIELD_STEP << FIELD_SHIFT[4],
];
