use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::graph::Vertex;

/// A vertex waiting in the frontier, keyed by `distance + estimate`.
///
/// Ties on priority fall back to the vertex id, so two distinct vertices
/// never compare equal.
#[derive(Debug, Clone, Copy)]
pub struct FrontierEntry {
    pub vertex: Vertex,
    /// Distance at the time the entry was pushed
    pub distance: f64,
    pub priority: f64,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then_with(|| self.vertex.cmp(&other.vertex))
            .then_with(|| self.distance.total_cmp(&other.distance))
    }
}

/// Min-priority queue of frontier entries.
///
/// Re-keying a vertex pushes a fresh entry; the superseded one stays in the
/// heap and is recognised as stale when popped.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<Reverse<FrontierEntry>>,
}

impl Frontier {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, vertex: Vertex, distance: f64, priority: f64) {
        self.heap.push(Reverse(FrontierEntry {
            vertex,
            distance,
            priority,
        }));
    }

    pub fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop().map(|Reverse(entry)| entry)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
