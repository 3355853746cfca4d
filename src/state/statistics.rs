// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Statistics are stored in the context, and are incremented by the context
//! as points are admitted and nodes are recorded.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{EnumCount as EnumCountMacro, EnumIter, IntoStaticStr};

#[derive(Debug, EnumCountMacro, EnumIter, IntoStaticStr, Copy, Clone, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum Counters {
    /// Search tree nodes, i.e. shapes constructed.
    NodesVisited,
    /// Nodes at the maximum size, where the search stops branching.
    Leaves,
    /// Points added to the shape.
    Admissions,
    /// Candidates appended to the frontier.
    CandidatesDiscovered,
    /// Upper neighbours tested for feasibility.
    FeasibilityChecks,
    /// Most candidates live on the frontier at once.
    FrontierHighWater,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    #[inline]
    pub(crate) fn increment_counter(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Increment the specified counter by `amount`.
    #[inline]
    pub(crate) fn add(&mut self, counter: Counters, amount: u64) {
        self.stats[counter as usize] += amount;
    }

    /// Raise the specified counter to `value` if it is currently lower.
    pub(crate) fn raise_to(&mut self, counter: Counters, value: u64) {
        let slot = &mut self.stats[counter as usize];
        *slot = (*slot).max(value);
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// Iterate over every counter with its value.
    pub fn iter(&self) -> impl Iterator<Item = (Counters, u64)> + '_ {
        Counters::iter().map(move |counter| (counter, self.get(counter)))
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (counter, value) in self.iter() {
            let name: &'static str = counter.into();
            writeln!(f, "{:<24}{}", name, value)?;
        }
        Ok(())
    }
}

impl Serialize for Statistics {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Counters::COUNT))?;
        for (counter, value) in self.iter() {
            let name: &'static str = counter.into();
            map.serialize_entry(name, &value)?;
        }
        map.end()
    }
}
