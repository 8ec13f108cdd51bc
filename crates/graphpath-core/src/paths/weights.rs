use std::collections::HashMap;

use crate::graph::{edge_id, EdgeId, Graph, Vertex};

/// Source of edge weights for a search.
///
/// Returns `f64::INFINITY` for edges that have no weight.
pub trait EdgeWeights {
    fn weight(&self, u: Vertex, v: Vertex) -> f64;
}

impl<F> EdgeWeights for F
where
    F: Fn(Vertex, Vertex) -> f64,
{
    fn weight(&self, u: Vertex, v: Vertex) -> f64 {
        self(u, v)
    }
}

/// Edge weights keyed by edge id.
///
/// Uses the same pairing as the graph it was created for, so an undirected
/// weight set as `(2, 1)` is found again as `(1, 2)`.
#[derive(Debug, Clone, Default)]
pub struct WeightMap {
    directed: bool,
    weights: HashMap<EdgeId, f64>,
}

impl WeightMap {
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            weights: HashMap::new(),
        }
    }

    /// An empty map using `graph`'s edge ids.
    pub fn for_graph<G: Graph + ?Sized>(graph: &G) -> Self {
        Self::new(graph.is_directed())
    }

    /// Set the weight of `(u, v)`, returning the previous weight if any.
    pub fn set(&mut self, u: Vertex, v: Vertex, weight: f64) -> Option<f64> {
        self.weights.insert(edge_id(u, v, self.directed), weight)
    }

    pub fn get(&self, u: Vertex, v: Vertex) -> Option<f64> {
        self.weights.get(&edge_id(u, v, self.directed)).copied()
    }

    pub fn remove(&mut self, u: Vertex, v: Vertex) -> Option<f64> {
        self.weights.remove(&edge_id(u, v, self.directed))
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

impl EdgeWeights for WeightMap {
    fn weight(&self, u: Vertex, v: Vertex) -> f64 {
        self.get(u, v).unwrap_or(f64::INFINITY)
    }
}
