// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Results accumulated during a search.
//!
//! - Histogram: number of distinct shapes of each size
//! - Statistics: work counters for the search tree

pub mod histogram;
pub mod statistics;

pub use histogram::Histogram;
pub use statistics::{Counters, Statistics};
