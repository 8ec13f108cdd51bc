//! One-pass snapshot sequences over graph contents
//!
//! Every view the graph hands out (vertices, successors, predecessors,
//! edges) is an [`Iteration`]. Items are copied out when the sequence is
//! created, so mutating the graph afterwards never changes what an
//! existing sequence yields.

use std::iter::FusedIterator;

/// A single-use, snapshot sequence of items.
#[derive(Debug, Clone)]
pub struct Iteration<T> {
    items: std::vec::IntoIter<T>,
}

impl<T> Iteration<T> {
    /// Snapshot the given items.
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items: items.into_iter(),
        }
    }

    /// A sequence with nothing in it.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// True while at least one item remains.
    pub fn has_next(&self) -> bool {
        !self.items.as_slice().is_empty()
    }
}

impl<T> Default for Iteration<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Iterator for Iteration<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.items.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}

impl<T> ExactSizeIterator for Iteration<T> {}

impl<T> FusedIterator for Iteration<T> {}

impl<T> FromIterator<T> for Iteration<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
