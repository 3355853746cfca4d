// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Canonical-augmentation backtracking search.
//!
//! The enumerator grows a shape one point at a time, choosing each new point
//! from a usable range `[init, end)` of the frontier. Siblings are tried in
//! frontier order; a child may use the siblings after it plus the candidates
//! its own admission unlocked. Every shape is therefore reached by exactly
//! one sequence of choices, and each node of the search tree is one distinct
//! shape.
//!
//! # Architecture
//!
//! The search is iterative. The engine keeps a stack of frames, one per level
//! of the current path. Each frame tracks:
//! - The next frontier index to try
//! - The end of its usable range
//! - The point it admitted for the child currently being explored, and how
//!   many candidates that admission appended
//!
//! The loop follows the recursive formulation exactly:
//! 1. Undo the child admitted by the top frame, if any
//! 2. If the range is exhausted, pop the frame
//! 3. Otherwise admit the next candidate, record the child shape, and push a
//!    frame for it unless it is already at the maximum size
//!
//! Undo happens in strict LIFO order, so the context returns to its seeded
//! state when the stack empties.
//!
//! # Example
//!
//! ```
//! use partition_search::context::SearchContext;
//! use partition_search::engine::{Enumerator, NoVisitor};
//! use partition_search::membership::SparseMembership;
//!
//! let mut ctx = SearchContext::new(SparseMembership::with_capacity(3), 3);
//! let complete = Enumerator::new(3).search(&mut ctx, &mut NoVisitor);
//! assert!(complete);
//! assert_eq!(ctx.histogram.as_slice(), &[1, 5, 15]);
//! ```

pub mod stop;
pub mod visitor;

pub use stop::StopCheck;
pub use visitor::{NoVisitor, ShapeVisitor};

use crate::context::SearchContext;
use crate::lattice::LatticeKey;
use crate::membership::Membership;
use tracing::debug;

/// Stack entry for one node on the current search path.
#[derive(Debug, Clone, Copy)]
struct Frame {
    /// Frontier index of the next sibling to try.
    next: usize,

    /// One past the last usable frontier index.
    end: usize,

    /// Child currently admitted from this frame, with its appended count.
    admitted: Option<(LatticeKey, usize)>,
}

impl Frame {
    fn new(init: usize, end: usize) -> Self {
        Self {
            next: init,
            end,
            admitted: None,
        }
    }
}

/// Backtracking enumerator for shapes up to a fixed size.
#[derive(Debug)]
pub struct Enumerator {
    max_size: usize,
    stack: Vec<Frame>,
    stop: StopCheck,
}

impl Enumerator {
    /// Create an enumerator that never stops early.
    pub fn new(max_size: usize) -> Self {
        Self::with_stop(max_size, StopCheck::never())
    }

    /// Create an enumerator that consults `stop` between siblings.
    pub fn with_stop(max_size: usize, stop: StopCheck) -> Self {
        Self {
            max_size,
            stack: Vec::with_capacity(max_size),
            stop,
        }
    }

    /// Run the full search over a freshly created context.
    ///
    /// Seeds the origin, then explores every shape of size `1..=max_size`,
    /// recording each in `ctx.histogram` and passing it to `visitor`.
    ///
    /// Returns `true` if the search ran to completion, `false` if the stop
    /// check fired. Either way the context is left in its seeded state.
    /// With `max_size == 0` nothing is seeded or recorded.
    pub fn search<M, V>(&mut self, ctx: &mut SearchContext<M>, visitor: &mut V) -> bool
    where
        M: Membership,
        V: ShapeVisitor + ?Sized,
    {
        debug_assert_eq!(ctx.max_size(), self.max_size);
        if self.max_size == 0 {
            return true;
        }

        let initial = ctx.seed();
        debug!(candidates = initial, "seeded origin");
        self.stack.clear();
        self.enter(ctx, visitor, 0, initial);

        while let Some(frame) = self.stack.last_mut() {
            if let Some((key, appended)) = frame.admitted.take() {
                ctx.retract(key, appended);
            }
            if frame.next >= frame.end {
                self.stack.pop();
                continue;
            }
            if self.stop.should_stop() {
                debug!(depth = self.stack.len(), "stop requested, unwinding");
                self.unwind(ctx);
                return false;
            }

            let j = frame.next;
            frame.next += 1;
            let key = ctx.frontier()[j];
            let appended = ctx.admit(key);
            frame.admitted = Some((key, appended));
            let end = frame.end + appended;

            self.enter(ctx, visitor, j + 1, end);
        }
        true
    }

    /// Record the current shape and open a frame for it if it can grow.
    #[inline]
    fn enter<M, V>(&mut self, ctx: &mut SearchContext<M>, visitor: &mut V, init: usize, end: usize)
    where
        M: Membership,
        V: ShapeVisitor + ?Sized,
    {
        ctx.record();
        visitor.visit(ctx.path());
        if ctx.size() < self.max_size {
            self.stack.push(Frame::new(init, end));
        }
    }

    /// Undo every admission on the current path, innermost first.
    fn unwind<M: Membership>(&mut self, ctx: &mut SearchContext<M>) {
        while let Some(mut frame) = self.stack.pop() {
            if let Some((key, appended)) = frame.admitted.take() {
                ctx.retract(key, appended);
            }
        }
    }

    /// True if the last search was cut short by the stop check.
    pub fn stopped(&self) -> bool {
        self.stop.stopped()
    }
}
