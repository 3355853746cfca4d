// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for the enumeration core.

use thiserror::Error;

/// Errors raised before or while setting up an enumeration run.
///
/// The search itself cannot fail once started: every precondition that could
/// corrupt the packed encoding is checked up front.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnumerationError {
    /// The requested maximum size would push a coordinate past its 6-bit field.
    #[error("maximum size {requested} exceeds the structural limit of {max}")]
    StructuralLimitExceeded { requested: usize, max: usize },

    /// A coordinate handed to the codec does not fit in its field.
    #[error("coordinate {value} in dimension {dimension} is outside 0..={max}")]
    CoordinateOutOfRange {
        dimension: usize,
        value: u32,
        max: u32,
    },
}

pub type Result<T> = std::result::Result<T, EnumerationError>;
