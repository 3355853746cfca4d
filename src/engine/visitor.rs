// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Observation hook for the shapes a search constructs.
//!
//! # Example
//!
//! ```
//! use partition_search::engine::ShapeVisitor;
//! use partition_search::lattice::LatticeKey;
//!
//! /// Remembers the deepest insertion path seen.
//! #[derive(Default)]
//! struct Deepest(Vec<LatticeKey>);
//!
//! impl ShapeVisitor for Deepest {
//!     fn visit(&mut self, path: &[LatticeKey]) {
//!         if path.len() > self.0.len() {
//!             self.0 = path.to_vec();
//!         }
//!     }
//! }
//! ```

use crate::lattice::LatticeKey;

/// Called once for every shape the search constructs.
///
/// `path` lists the points of the shape in the order they were admitted,
/// starting with the origin. The slice is only valid for the duration of the
/// call: the search mutates it as soon as the visitor returns.
pub trait ShapeVisitor {
    fn visit(&mut self, path: &[LatticeKey]);
}

/// Visitor that ignores every shape.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoVisitor;

impl ShapeVisitor for NoVisitor {
    #[inline(always)]
    fn visit(&mut self, _path: &[LatticeKey]) {}
}

impl<F: FnMut(&[LatticeKey])> ShapeVisitor for F {
    fn visit(&mut self, path: &[LatticeKey]) {
        self(path)
    }
}
