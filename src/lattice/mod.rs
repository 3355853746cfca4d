// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The lattice N^5, truncated to coordinates 0..=63.
//!
//! - LatticeKey: packed point, with predecessor/successor along each dimension
//! - constants: field layout of the packed encoding

pub mod constants;
pub mod key;

pub use constants::*;
pub use key::LatticeKey;
