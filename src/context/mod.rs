// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context holding all mutable state of one enumeration run.
//!
//! The SearchContext owns:
//! - the shape under construction (a [`Membership`] backend)
//! - the frontier of addable points
//! - the insertion path, whose length is the current shape size
//! - the histogram and statistics being accumulated
//!
//! All mutation goes through [`SearchContext::admit`] and
//! [`SearchContext::retract`], which must be called in strict LIFO pairs.
//! After a completed run the context is back in its seeded state.

use crate::frontier::{discover_new_candidates, Frontier};
use crate::lattice::{LatticeKey, DIMENSIONS};
use crate::membership::Membership;
use crate::state::{Counters, Histogram, Statistics};

/// Search context for one run up to a fixed maximum size.
///
/// # Memory Model
///
/// ```text
/// SearchContext {
///     shape: M,               // characteristic function, one lookup per predecessor
///     frontier: Frontier,     // generations of candidates, <= 5 * max_size
///     path: Vec<LatticeKey>,  // insertion order, origin first, <= max_size
///     histogram: Histogram,   // max_size counters
///     statistics: Statistics,
/// }
/// ```
#[derive(Debug)]
pub struct SearchContext<M: Membership> {
    shape: M,
    frontier: Frontier,
    path: Vec<LatticeKey>,
    max_size: usize,
    /// Shapes counted by size.
    pub histogram: Histogram,
    /// Work counters.
    pub statistics: Statistics,
}

impl<M: Membership> SearchContext<M> {
    /// Create a context over an empty `shape`, sized for `max_size` points.
    pub fn new(shape: M, max_size: usize) -> Self {
        debug_assert!(shape.is_empty());
        Self {
            shape,
            frontier: Frontier::for_max_size(max_size),
            path: Vec::with_capacity(max_size),
            max_size,
            histogram: Histogram::new(max_size),
            statistics: Statistics::new(),
        }
    }

    /// Plant the origin and push its candidates as the first generation.
    ///
    /// Returns the number of initial candidates (five, one per dimension).
    pub fn seed(&mut self) -> usize {
        debug_assert!(self.path.is_empty(), "context already seeded");
        self.admit(LatticeKey::ORIGIN)
    }

    /// Add `key` to the shape and append the candidates it unlocks.
    ///
    /// Returns the number of candidates appended.
    #[inline]
    pub fn admit(&mut self, key: LatticeKey) -> usize {
        debug_assert!(self.shape.is_possible(key), "{} is not addable", key);
        self.shape.set_member(key, true);
        self.path.push(key);

        let found = discover_new_candidates(&self.shape, key);
        let appended = self.frontier.append(&found);

        self.statistics.increment_counter(Counters::Admissions);
        self.statistics
            .add(Counters::FeasibilityChecks, DIMENSIONS as u64);
        self.statistics
            .add(Counters::CandidatesDiscovered, appended as u64);
        appended
    }

    /// Undo the most recent [`SearchContext::admit`] of `key`.
    #[inline]
    pub fn retract(&mut self, key: LatticeKey, appended: usize) {
        let last = self.path.pop();
        debug_assert_eq!(last, Some(key), "retract out of LIFO order");
        self.shape.set_member(key, false);
        self.frontier.truncate(appended);
    }

    /// Count the current shape in the histogram.
    #[inline]
    pub fn record(&mut self) {
        let size = self.size();
        self.histogram.record(size);
        self.statistics.increment_counter(Counters::NodesVisited);
        if size == self.max_size {
            self.statistics.increment_counter(Counters::Leaves);
        }
    }

    /// Number of points in the current shape.
    #[inline]
    pub fn size(&self) -> usize {
        self.path.len()
    }

    /// Largest shape size this context counts.
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Points of the current shape in insertion order, origin first.
    pub fn path(&self) -> &[LatticeKey] {
        &self.path
    }

    /// The shape under construction.
    pub fn shape(&self) -> &M {
        &self.shape
    }

    /// The frontier of addable points.
    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    /// Finish the run, returning the histogram and statistics.
    pub fn into_results(mut self) -> (Histogram, Statistics) {
        self.statistics.raise_to(
            Counters::FrontierHighWater,
            self.frontier.high_water() as u64,
        );
        (self.histogram, self.statistics)
    }
}
