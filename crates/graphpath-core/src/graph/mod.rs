//! Label-free graphs over positive integer vertex ids
//!
//! Provides the graph abstraction used by the shortest-path engine:
//! - `Graph`: the object-safe contract for vertex/edge stores
//! - `DirectedGraph` / `UndirectedGraph`: the two concrete flavours
//! - `GraphStore`: the shared slot arena both flavours are built on
//!
//! Edges carry no payload. Data is attached to an edge externally, keyed by
//! [`Graph::edge_id`].

pub mod directed;
pub mod store;
pub mod types;
pub mod undirected;

pub use directed::DirectedGraph;
pub use store::GraphStore;
pub use types::{edge_id, EdgeId, GraphKind, Vertex, NO_VERTEX};
pub use undirected::UndirectedGraph;

use crate::error::Result;
use crate::iteration::Iteration;

/// A mutable store of vertices and edges.
///
/// Vertex ids are recycled: removing a vertex frees its id and the next
/// [`add`](Graph::add) reuses the lowest free id. Parallel edges are not
/// supported; self-edges are.
pub trait Graph {
    /// Number of live vertices.
    fn vertex_size(&self) -> usize;

    /// Number of edges. An undirected edge counts once.
    fn edge_size(&self) -> usize;

    /// Greatest live vertex id, or [`NO_VERTEX`] when empty.
    fn max_vertex(&self) -> Vertex;

    fn is_directed(&self) -> bool;

    fn contains(&self, v: Vertex) -> bool;

    fn contains_edge(&self, u: Vertex, v: Vertex) -> bool;

    /// Number of edges leaving `v`; 0 for absent vertices.
    fn out_degree(&self, v: Vertex) -> usize;

    /// Number of edges entering `v`, self-edges included; 0 for absent vertices.
    fn in_degree(&self, v: Vertex) -> usize;

    /// Insert a new vertex and return its id.
    fn add(&mut self) -> Vertex;

    /// Insert the edge `(u, v)` and return its id, or `None` if the edge
    /// already exists. Fails with `InvalidArgument` if either endpoint is absent.
    fn add_edge(&mut self, u: Vertex, v: Vertex) -> Result<Option<EdgeId>>;

    /// Remove `v` and every edge touching it. Absent vertices are ignored.
    fn remove(&mut self, v: Vertex);

    /// Remove the edge `(u, v)` if present. Fails with `InvalidArgument` if
    /// either endpoint is absent.
    fn remove_edge(&mut self, u: Vertex, v: Vertex) -> Result<()>;

    /// Live vertex ids, ascending.
    fn vertices(&self) -> Iteration<Vertex>;

    /// Targets of edges leaving `v`, in insertion order.
    fn successors(&self, v: Vertex) -> Iteration<Vertex>;

    /// Sources of edges entering `v`.
    fn predecessors(&self, v: Vertex) -> Iteration<Vertex>;

    /// Every edge once, as `(u, v)`.
    fn edges(&self) -> Iteration<(Vertex, Vertex)>;

    /// Pure, unique id for the edge `(u, v)`. Symmetric for undirected graphs.
    fn edge_id(&self, u: Vertex, v: Vertex) -> EdgeId;

    /// Fail with `InvalidArgument` unless `v` is a live vertex.
    fn check_vertex(&self, v: Vertex) -> Result<()>;
}

impl GraphKind {
    /// Build an empty graph of this kind.
    pub fn build(self) -> Box<dyn Graph> {
        match self {
            GraphKind::Directed => Box::new(DirectedGraph::new()),
            GraphKind::Undirected => Box::new(UndirectedGraph::new()),
        }
    }

    /// Build an empty graph of this kind with room for `capacity` vertices.
    pub fn build_with_capacity(self, capacity: usize) -> Box<dyn Graph> {
        match self {
            GraphKind::Directed => Box::new(DirectedGraph::with_capacity(capacity)),
            GraphKind::Undirected => Box::new(UndirectedGraph::with_capacity(capacity)),
        }
    }
}
