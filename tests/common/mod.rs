// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use partition_search::engine::ShapeVisitor;
use partition_search::lattice::{LatticeKey, DIMENSIONS};
use std::collections::{BTreeSet, HashSet};

/// Known counts of 4-dimensional partitions of sizes 1..=7.
///
/// Checked against [`brute_force_counts`], which builds shapes by closure
/// rather than by canonical augmentation.
pub const KNOWN_COUNTS: [u64; 7] = [1, 5, 15, 45, 120, 326, 835];

/// A shape as an ordered set, comparable regardless of insertion order.
pub type Shape = BTreeSet<LatticeKey>;

/// True iff every nonzero-coordinate predecessor of every point is present.
pub fn is_downward_closed(shape: &Shape) -> bool {
    shape.iter().all(|&p| {
        (0..DIMENSIONS).all(|j| !p.has_component(j) || shape.contains(&p.predecessor(j)))
    })
}

/// Count order ideals of each size by growing every shape by every
/// addable point and deduplicating with a set.
pub fn brute_force_counts(max_size: usize) -> Vec<u64> {
    let mut counts = Vec::with_capacity(max_size);
    if max_size == 0 {
        return counts;
    }
    let mut level: HashSet<Shape> = HashSet::new();
    level.insert(Shape::from([LatticeKey::ORIGIN]));
    counts.push(1);

    for _ in 1..max_size {
        let mut next = HashSet::new();
        for shape in &level {
            for &p in shape {
                for j in 0..DIMENSIONS {
                    let q = p.successor(j);
                    if shape.contains(&q) {
                        continue;
                    }
                    let mut grown = shape.clone();
                    grown.insert(q);
                    if is_downward_closed(&grown) {
                        next.insert(grown);
                    }
                }
            }
        }
        counts.push(next.len() as u64);
        level = next;
    }
    counts
}

/// Visitor that keeps every visited shape.
#[derive(Debug, Default)]
pub struct CollectingVisitor {
    pub paths: Vec<Vec<LatticeKey>>,
}

impl CollectingVisitor {
    pub fn shapes(&self) -> impl Iterator<Item = Shape> + '_ {
        self.paths.iter().map(|path| path.iter().copied().collect())
    }
}

impl ShapeVisitor for CollectingVisitor {
    fn visit(&mut self, path: &[LatticeKey]) {
        self.paths.push(path.to_vec());
    }
}
