//! Graphpath Core Library
//!
//! Label-free directed and undirected graphs over recyclable integer vertex
//! ids, and a single-source shortest-path engine (Dijkstra, or A* when given
//! a heuristic) with pluggable result storage and edge weights.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod iteration;
pub mod logging;
pub mod paths;

pub use error::{GraphError, Result};
pub use graph::{DirectedGraph, Graph, GraphKind, UndirectedGraph, Vertex};
pub use iteration::Iteration;
pub use paths::{ShortestPaths, SimpleShortestPaths, WeightMap};
