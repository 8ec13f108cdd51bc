use crate::error::Result;
use crate::graph::store::GraphStore;
use crate::graph::types::{EdgeId, Vertex};
use crate::graph::Graph;
use crate::iteration::Iteration;

/// An undirected graph. May contain self-edges.
///
/// Adjacency is kept symmetric, so in-degree and predecessors are the same
/// as out-degree and successors.
#[derive(Debug, Clone)]
pub struct UndirectedGraph {
    store: GraphStore,
}

impl UndirectedGraph {
    pub fn new() -> Self {
        Self {
            store: GraphStore::new(false),
        }
    }

    /// Pre-allocate for a known vertex count.
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            store: GraphStore::with_capacity(false, vertices),
        }
    }
}

impl Default for UndirectedGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph for UndirectedGraph {
    fn vertex_size(&self) -> usize {
        self.store.vertex_count()
    }

    fn edge_size(&self) -> usize {
        self.store.edge_count()
    }

    fn max_vertex(&self) -> Vertex {
        self.store.max_vertex()
    }

    fn is_directed(&self) -> bool {
        false
    }

    fn contains(&self, v: Vertex) -> bool {
        self.store.contains(v)
    }

    fn contains_edge(&self, u: Vertex, v: Vertex) -> bool {
        self.store.contains_arc(u, v)
    }

    fn out_degree(&self, v: Vertex) -> usize {
        self.store.neighbors(v).len()
    }

    fn in_degree(&self, v: Vertex) -> usize {
        self.out_degree(v)
    }

    fn add(&mut self) -> Vertex {
        self.store.insert_vertex()
    }

    fn add_edge(&mut self, u: Vertex, v: Vertex) -> Result<Option<EdgeId>> {
        self.store.insert_edge(u, v)
    }

    fn remove(&mut self, v: Vertex) {
        self.store.remove_vertex(v);
    }

    fn remove_edge(&mut self, u: Vertex, v: Vertex) -> Result<()> {
        self.store.remove_edge(u, v).map(|_| ())
    }

    fn vertices(&self) -> Iteration<Vertex> {
        self.store.vertices().collect()
    }

    fn successors(&self, v: Vertex) -> Iteration<Vertex> {
        Iteration::new(self.store.neighbors(v).to_vec())
    }

    fn predecessors(&self, v: Vertex) -> Iteration<Vertex> {
        self.successors(v)
    }

    /// Each edge once, as `(min, max)`.
    fn edges(&self) -> Iteration<(Vertex, Vertex)> {
        self.store.arcs().filter(|&(u, v)| u <= v).collect()
    }

    fn edge_id(&self, u: Vertex, v: Vertex) -> EdgeId {
        self.store.edge_id(u, v)
    }

    fn check_vertex(&self, v: Vertex) -> Result<()> {
        self.store.check_vertex(v)
    }
}
