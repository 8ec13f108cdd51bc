use std::time::Instant;

use crate::error::{GraphError, Result};
use crate::graph::{Graph, Vertex, NO_VERTEX};
use crate::paths::frontier::Frontier;
use crate::paths::PathStorage;
use crate::{bail_invalid, log_search_stats, trace_time};

/// Estimate of the remaining distance from a vertex to the destination.
pub type Heuristic<'g> = Box<dyn Fn(Vertex) -> f64 + 'g>;

/// Counters collected while running a search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Vertices popped from the frontier and expanded
    pub settled: usize,
    /// Successful distance improvements
    pub relaxations: usize,
    /// Superseded frontier entries discarded on pop
    pub stale_skipped: usize,
    pub reached_destination: bool,
}

/// Single-source shortest paths over a graph, with an optional destination
/// and an optional heuristic.
///
/// With no heuristic this is Dijkstra's algorithm; with an admissible
/// heuristic it is A*. Distances and predecessors live in the supplied
/// [`PathStorage`]. Edge weights must be non-negative; negative weights are
/// not rejected but the results are then not guaranteed to be shortest.
///
/// The search runs once, in [`set_paths`](ShortestPaths::set_paths). All
/// queries fail with `NotInitialized` before that.
pub struct ShortestPaths<'g, G: ?Sized, S> {
    graph: &'g G,
    source: Vertex,
    destination: Option<Vertex>,
    heuristic: Option<Heuristic<'g>>,
    storage: S,
    stats: Option<SearchStats>,
}

impl<'g, G, S> ShortestPaths<'g, G, S>
where
    G: Graph + ?Sized,
    S: PathStorage,
{
    /// Shortest paths in `graph` from `source` to every reachable vertex.
    pub fn new(graph: &'g G, source: Vertex, storage: S) -> Self {
        Self {
            graph,
            source,
            destination: None,
            heuristic: None,
            storage,
            stats: None,
        }
    }

    /// Stop the search as soon as `destination` is settled.
    #[must_use]
    pub fn with_destination(mut self, destination: Vertex) -> Self {
        self.destination = Some(destination);
        self
    }

    /// Order the frontier by `distance + heuristic(v)`.
    ///
    /// The estimate must never exceed the true remaining distance to the
    /// destination.
    #[must_use]
    pub fn with_heuristic(mut self, heuristic: impl Fn(Vertex) -> f64 + 'g) -> Self {
        self.heuristic = Some(Box::new(heuristic));
        self
    }

    pub fn source(&self) -> Vertex {
        self.source
    }

    pub fn destination(&self) -> Option<Vertex> {
        self.destination
    }

    pub fn graph(&self) -> &'g G {
        self.graph
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Consume the search, handing back its storage.
    pub fn into_storage(self) -> S {
        self.storage
    }

    pub fn is_initialized(&self) -> bool {
        self.stats.is_some()
    }

    /// Counters from the completed search, if it has run.
    pub fn stats(&self) -> Option<SearchStats> {
        self.stats
    }

    fn estimate(&self, v: Vertex) -> f64 {
        self.heuristic.as_ref().map_or(0.0, |h| h(v))
    }

    fn ensure_initialized(&self) -> Result<()> {
        if self.stats.is_none() {
            return Err(GraphError::NotInitialized);
        }
        Ok(())
    }

    /// Run the search. May only be called once.
    ///
    /// Fails with `InvalidArgument` if the source or destination is not a
    /// vertex of the graph.
    #[tracing::instrument(skip(self), fields(source = self.source, destination = ?self.destination))]
    pub fn set_paths(&mut self) -> Result<()> {
        if self.stats.is_some() {
            return Err(GraphError::AlreadyInitialized);
        }
        self.graph.check_vertex(self.source)?;
        if let Some(destination) = self.destination {
            self.graph.check_vertex(destination)?;
        }

        let start = Instant::now();
        let mut stats = SearchStats::default();
        let mut frontier = Frontier::with_capacity(self.graph.vertex_size());

        for v in self.graph.vertices() {
            self.storage.set_distance(v, f64::INFINITY);
            self.storage.set_predecessor(v, None);
            frontier.push(v, f64::INFINITY, f64::INFINITY);
        }
        self.storage.set_distance(self.source, 0.0);
        self.storage.set_predecessor(self.source, None);
        frontier.push(self.source, 0.0, self.estimate(self.source));

        let mut warned_negative = false;
        while let Some(entry) = frontier.pop() {
            let current = entry.vertex;
            let distance = self.storage.distance(current);
            if entry.distance > distance {
                stats.stale_skipped += 1;
                continue;
            }
            // Everything left is unreachable
            if distance == f64::INFINITY {
                break;
            }

            stats.settled += 1;
            if Some(current) == self.destination {
                stats.reached_destination = true;
                break;
            }

            for next in self.graph.successors(current) {
                let weight = self.storage.edge_weight(current, next);
                if weight < 0.0 && !warned_negative {
                    tracing::warn!(from = current, to = next, weight, "negative edge weight");
                    warned_negative = true;
                }

                let candidate = distance + weight;
                if candidate < self.storage.distance(next) {
                    self.storage.set_distance(next, candidate);
                    self.storage.set_predecessor(next, Some(current));
                    frontier.push(next, candidate, candidate + self.estimate(next));
                    stats.relaxations += 1;
                    tracing::trace!(from = current, to = next, distance = candidate, "relax");
                }
            }
        }

        log_search_stats!(stats, "set_paths");
        trace_time!(start, "set_paths", frontier_left = frontier.len());
        self.stats = Some(stats);
        Ok(())
    }

    /// Best known distance from the source to `v`; infinite if unreached
    /// or not in the graph.
    pub fn distance(&self, v: Vertex) -> Result<f64> {
        self.ensure_initialized()?;
        Ok(self.storage.distance(v))
    }

    /// Vertex preceding `v` on its best known path, if any.
    pub fn predecessor(&self, v: Vertex) -> Result<Option<Vertex>> {
        self.ensure_initialized()?;
        Ok(self.storage.predecessor(v))
    }

    /// Vertices from the source to `target` along the best known path.
    ///
    /// When the search stopped early at a destination, only the path to that
    /// destination is guaranteed to be shortest. Fails with `NotFound` if the
    /// predecessor chain from `target` does not reach the source.
    pub fn path_to(&self, target: Vertex) -> Result<Vec<Vertex>> {
        self.ensure_initialized()?;

        let bound = self.graph.vertex_size();
        let mut path = vec![target];
        let mut current = target;
        while current != self.source {
            if path.len() >= bound {
                return Err(GraphError::no_path(self.source, target));
            }
            match self.storage.predecessor(current) {
                Some(previous) => {
                    path.push(previous);
                    current = previous;
                }
                None => return Err(GraphError::no_path(self.source, target)),
            }
        }

        path.reverse();
        Ok(path)
    }

    /// Path from the source to the configured destination.
    pub fn path(&self) -> Result<Vec<Vertex>> {
        match self.destination {
            Some(destination) => self.path_to(destination),
            None => bail_invalid!(NO_VERTEX, "no destination configured"),
        }
    }
}
