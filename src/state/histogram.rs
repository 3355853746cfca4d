// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Per-size shape counts.

use serde::Serialize;
use std::fmt;

/// Counts of distinct shapes by size.
///
/// Entry `i` counts shapes of size `i + 1`. A histogram for `n = 0` is empty
/// and is never written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Histogram {
    counts: Vec<u64>,
}

impl Histogram {
    /// Create a zeroed histogram for sizes `1..=max_size`.
    pub fn new(max_size: usize) -> Self {
        Self {
            counts: vec![0; max_size],
        }
    }

    /// Record one shape of `size` points.
    ///
    /// # Panics
    ///
    /// Panics if `size` is 0 or exceeds the histogram length.
    #[inline]
    pub fn record(&mut self, size: usize) {
        self.counts[size - 1] += 1;
    }

    /// Number of shapes of exactly `size` points, or `None` outside `1..=len`.
    pub fn count(&self, size: usize) -> Option<u64> {
        size.checked_sub(1).and_then(|i| self.counts.get(i).copied())
    }

    /// The largest size covered.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total shapes recorded across all sizes.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.counts
    }
}

/// One `size \t count` row per size.
impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, count) in self.counts.iter().enumerate() {
            writeln!(f, "{} \t {}", i + 1, count)?;
        }
        Ok(())
    }
}
