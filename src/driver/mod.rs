// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Entry points that set up, run and summarise one enumeration.
//!
//! # Example
//!
//! ```
//! use partition_search::driver::{enumerate, EnumerationConfig};
//! use partition_search::membership::StorageKind;
//!
//! let config = EnumerationConfig::new(3).with_storage(StorageKind::Sparse);
//! let result = enumerate(&config).unwrap();
//! assert!(result.complete);
//! assert_eq!(result.histogram.as_slice(), &[1, 5, 15]);
//! ```

pub mod report;

pub use report::{OutputFormat, Report};

use crate::context::SearchContext;
use crate::engine::{Enumerator, NoVisitor, ShapeVisitor, StopCheck};
use crate::error::{EnumerationError, Result};
use crate::lattice::MAX_SIZE;
use crate::membership::{DenseMembership, Membership, SparseMembership, StorageKind};
use crate::state::{Histogram, Statistics};
use std::time::{Duration, Instant};
use tracing::info;

/// Parameters of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumerationConfig {
    /// Largest shape size to count.
    pub max_size: usize,
    /// Membership backend.
    pub storage: StorageKind,
    /// Stop cooperatively after this long and report a partial histogram.
    pub time_limit: Option<Duration>,
}

impl EnumerationConfig {
    pub fn new(max_size: usize) -> Self {
        Self {
            max_size,
            storage: StorageKind::default(),
            time_limit: None,
        }
    }

    pub fn with_storage(mut self, storage: StorageKind) -> Self {
        self.storage = storage;
        self
    }

    pub fn with_time_limit(mut self, time_limit: Option<Duration>) -> Self {
        self.time_limit = time_limit;
        self
    }

    /// Check the preconditions the packed encoding depends on.
    ///
    /// # Errors
    ///
    /// [`EnumerationError::StructuralLimitExceeded`] if `max_size` is larger
    /// than [`MAX_SIZE`]. Zero is valid and yields an empty histogram.
    pub fn validate(&self) -> Result<()> {
        if self.max_size > MAX_SIZE {
            return Err(EnumerationError::StructuralLimitExceeded {
                requested: self.max_size,
                max: MAX_SIZE,
            });
        }
        Ok(())
    }
}

/// Outcome of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enumeration {
    /// Distinct shapes by size.
    pub histogram: Histogram,
    /// Work counters.
    pub statistics: Statistics,
    /// False if the time limit cut the search short; counts are then lower
    /// bounds.
    pub complete: bool,
}

/// Count all shapes up to `config.max_size`.
///
/// # Errors
///
/// Fails only if the configuration does not validate.
pub fn enumerate(config: &EnumerationConfig) -> Result<Enumeration> {
    enumerate_with_visitor(config, &mut NoVisitor)
}

/// Like [`enumerate`], passing every constructed shape to `visitor`.
///
/// # Errors
///
/// Fails only if the configuration does not validate.
pub fn enumerate_with_visitor<V>(config: &EnumerationConfig, visitor: &mut V) -> Result<Enumeration>
where
    V: ShapeVisitor + ?Sized,
{
    config.validate()?;
    info!(
        max_size = config.max_size,
        storage = %config.storage,
        "starting enumeration"
    );
    let start = Instant::now();
    // A deadline past the end of the clock is no deadline at all.
    let stop = match config.time_limit.and_then(|limit| start.checked_add(limit)) {
        Some(deadline) => StopCheck::at(deadline),
        None => StopCheck::never(),
    };

    let enumeration = match config.storage {
        StorageKind::Dense => run(DenseMembership::new(), config.max_size, stop, visitor),
        StorageKind::Sparse => run(
            SparseMembership::with_capacity(config.max_size),
            config.max_size,
            stop,
            visitor,
        ),
    };

    info!(
        elapsed = ?start.elapsed(),
        shapes = enumeration.histogram.total(),
        complete = enumeration.complete,
        "enumeration finished"
    );
    Ok(enumeration)
}

fn run<M, V>(shape: M, max_size: usize, stop: StopCheck, visitor: &mut V) -> Enumeration
where
    M: Membership,
    V: ShapeVisitor + ?Sized,
{
    let mut ctx = SearchContext::new(shape, max_size);
    let complete = Enumerator::with_stop(max_size, stop).search(&mut ctx, visitor);
    let (histogram, statistics) = ctx.into_results();
    Enumeration {
        histogram,
        statistics,
        complete,
    }
}
