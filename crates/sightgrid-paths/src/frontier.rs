use std::cmp::Ordering;
use std::collections::BinaryHeap;

use sightgrid_core::Point;

use crate::path::Path;

/// A frontier path keyed by `cost + distance(last, goal)`.
struct Entry {
    estimate: f64,
    seq: u64,
    path: Path,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so BinaryHeap (max-heap) pops the smallest estimate first;
        // equal estimates pop in insertion order.
        other
            .estimate
            .total_cmp(&self.estimate)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Priority queue of partial paths towards a fixed goal.
pub(crate) struct Frontier {
    goal: Point,
    heap: BinaryHeap<Entry>,
    next_seq: u64,
}

impl Frontier {
    pub(crate) fn new(goal: Point) -> Self {
        Self {
            goal,
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Queue `path`. Empty paths have no position to estimate from.
    pub(crate) fn push(&mut self, path: Path) {
        let estimate = path.cost() + path.last().distance(self.goal);
        self.heap.push(Entry {
            estimate,
            seq: self.next_seq,
            path,
        });
        self.next_seq += 1;
    }

    pub(crate) fn pop(&mut self) -> Option<Path> {
        self.heap.pop().map(|e| e.path)
    }

    /// Number of paths pushed so far.
    pub(crate) fn pushed(&self) -> u64 {
        self.next_seq
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}
