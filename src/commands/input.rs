//! Turning `--vertices` / `--edge` flags into a graph and its weights

use graphpath_core::config::GraphPathConfig;
use graphpath_core::error::Result;
use graphpath_core::graph::{Graph, Vertex};
use graphpath_core::paths::WeightMap;
use tracing::debug;

use crate::cli::GraphArgs;

/// A graph built from command-line flags, with weights keyed by edge id
pub struct LoadedGraph {
    pub graph: Box<dyn Graph>,
    pub weights: WeightMap,
}

impl LoadedGraph {
    pub fn build(args: &GraphArgs, config: &GraphPathConfig) -> Result<Self> {
        let kind = args.kind().unwrap_or(config.graph.kind);
        let mut graph = kind.build_with_capacity(config.graph.capacity.max(args.vertices));

        for _ in 0..args.vertices {
            graph.add();
        }

        let mut weights = WeightMap::for_graph(graph.as_ref());
        for spec in &args.edges {
            if graph.add_edge(spec.from, spec.to)?.is_none() {
                debug!(from = spec.from, to = spec.to, "duplicate edge, weight replaced");
            }
            weights.set(spec.from, spec.to, spec.weight);
        }

        debug!(
            %kind,
            vertices = graph.vertex_size(),
            edges = graph.edge_size(),
            "graph_loaded"
        );

        Ok(LoadedGraph { graph, weights })
    }

    /// Weight attached to `(u, v)`, if the edge was given one
    pub fn weight(&self, u: Vertex, v: Vertex) -> Option<f64> {
        self.weights.get(u, v)
    }
}
