//! Single-source shortest paths
//!
//! - `engine`: the search itself (Dijkstra, or A* with a heuristic)
//! - `frontier`: min-priority queue with lazy discarding of stale entries
//! - `simple`: default map-backed storage
//! - `weights`: edge weight sources, including an edge-id keyed map

pub mod engine;
pub mod frontier;
pub mod simple;
pub mod weights;

pub use engine::{Heuristic, SearchStats, ShortestPaths};
pub use simple::{SimpleShortestPaths, SimpleStorage};
pub use weights::{EdgeWeights, WeightMap};

use crate::graph::Vertex;

/// Where a search keeps its per-vertex results, and how it weighs edges.
pub trait PathStorage {
    /// Current distance to `v`; infinity if unknown.
    fn distance(&self, v: Vertex) -> f64;

    fn set_distance(&mut self, v: Vertex, distance: f64);

    /// Current predecessor of `v`, if any.
    fn predecessor(&self, v: Vertex) -> Option<Vertex>;

    fn set_predecessor(&mut self, v: Vertex, predecessor: Option<Vertex>);

    /// Weight of the edge `(u, v)`; infinity if there is no such edge.
    fn edge_weight(&self, u: Vertex, v: Vertex) -> f64;
}

#[cfg(test)]
mod tests;
