use std::collections::BTreeMap;

use crate::graph::{Graph, Vertex};
use crate::paths::engine::ShortestPaths;
use crate::paths::weights::EdgeWeights;
use crate::paths::PathStorage;

/// Map-backed distances and predecessors plus a weight source.
///
/// Absent distances read as infinity, absent predecessors as `None`.
#[derive(Debug, Clone, Default)]
pub struct SimpleStorage<W> {
    distances: BTreeMap<Vertex, f64>,
    predecessors: BTreeMap<Vertex, Vertex>,
    weights: W,
}

impl<W> SimpleStorage<W> {
    pub fn new(weights: W) -> Self {
        Self {
            distances: BTreeMap::new(),
            predecessors: BTreeMap::new(),
            weights,
        }
    }

    pub fn weights(&self) -> &W {
        &self.weights
    }

    /// Recorded distances, ascending by vertex.
    pub fn distances(&self) -> impl Iterator<Item = (Vertex, f64)> + '_ {
        self.distances.iter().map(|(&v, &d)| (v, d))
    }
}

impl<W: EdgeWeights> PathStorage for SimpleStorage<W> {
    fn distance(&self, v: Vertex) -> f64 {
        self.distances.get(&v).copied().unwrap_or(f64::INFINITY)
    }

    fn set_distance(&mut self, v: Vertex, distance: f64) {
        self.distances.insert(v, distance);
    }

    fn predecessor(&self, v: Vertex) -> Option<Vertex> {
        self.predecessors.get(&v).copied()
    }

    fn set_predecessor(&mut self, v: Vertex, predecessor: Option<Vertex>) {
        match predecessor {
            Some(u) => {
                self.predecessors.insert(v, u);
            }
            None => {
                self.predecessors.remove(&v);
            }
        }
    }

    fn edge_weight(&self, u: Vertex, v: Vertex) -> f64 {
        self.weights.weight(u, v)
    }
}

/// Shortest paths with map-backed storage; the client supplies only weights.
pub type SimpleShortestPaths<'g, G, W> = ShortestPaths<'g, G, SimpleStorage<W>>;

impl<'g, G, W> ShortestPaths<'g, G, SimpleStorage<W>>
where
    G: Graph + ?Sized,
    W: EdgeWeights,
{
    /// Shortest paths in `graph` from `source` using `weights`.
    pub fn simple(graph: &'g G, source: Vertex, weights: W) -> Self {
        Self::new(graph, source, SimpleStorage::new(weights))
    }
}
