use crate::error::Result;
use crate::graph::store::GraphStore;
use crate::graph::types::{EdgeId, Vertex};
use crate::graph::Graph;
use crate::iteration::Iteration;

/// A directed graph. May contain self-edges.
#[derive(Debug, Clone)]
pub struct DirectedGraph {
    store: GraphStore,
}

impl DirectedGraph {
    pub fn new() -> Self {
        Self {
            store: GraphStore::new(true),
        }
    }

    /// Pre-allocate for a known vertex count.
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            store: GraphStore::with_capacity(true, vertices),
        }
    }
}

impl Default for DirectedGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph for DirectedGraph {
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
        true
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
        self.store.arc_sources(v).len()
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
        Iteration::new(self.store.arc_sources(v))
    }

    fn edges(&self) -> Iteration<(Vertex, Vertex)> {
        self.store.arcs().collect()
    }

    fn edge_id(&self, u: Vertex, v: Vertex) -> EdgeId {
        self.store.edge_id(u, v)
    }

    fn check_vertex(&self, v: Vertex) -> Result<()> {
        self.store.check_vertex(v)
    }
}
