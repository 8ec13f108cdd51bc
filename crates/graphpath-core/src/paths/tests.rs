use super::*;
use crate::error::GraphError;
use crate::graph::{DirectedGraph, Graph, UndirectedGraph, NO_VERTEX};

/// Build a directed graph on `n` vertices with weighted edges.
fn weighted_directed(n: usize, edges: &[(Vertex, Vertex, f64)]) -> (DirectedGraph, WeightMap) {
    let mut graph = DirectedGraph::new();
    for _ in 0..n {
        graph.add();
    }
    let mut weights = WeightMap::for_graph(&graph);
    for &(u, v, w) in edges {
        graph.add_edge(u, v).unwrap();
        weights.set(u, v, w);
    }
    (graph, weights)
}

const SEVEN_EDGES: &[(Vertex, Vertex, f64)] = &[
    (1, 2, 2.0),
    (1, 3, 1.0),
    (2, 3, 5.0),
    (2, 5, 3.0),
    (5, 3, 1.0),
    (3, 6, 15.0),
    (5, 6, 4.0),
    (2, 4, 11.0),
    (4, 5, 2.0),
    (5, 7, 5.0),
    (7, 4, 1.0),
    (7, 6, 1.0),
];

#[test]
fn test_simple_path() {
    let (graph, weights) = weighted_directed(3, &[(1, 2, 1.0), (2, 3, 10.0)]);
    let mut paths = ShortestPaths::simple(&graph, 1, weights).with_destination(3);
    paths.set_paths().unwrap();

    assert_eq!(paths.path().unwrap(), vec![1, 2, 3]);
    assert_eq!(paths.distance(3).unwrap(), 11.0);
    assert_eq!(paths.predecessor(3).unwrap(), Some(2));
    assert_eq!(paths.predecessor(1).unwrap(), None);
}

#[test]
fn test_seven_vertex_relaxation() {
    let (graph, weights) = weighted_directed(7, SEVEN_EDGES);
    let mut to_seven = ShortestPaths::simple(&graph, 1, weights.clone()).with_destination(7);
    to_seven.set_paths().unwrap();
    assert_eq!(to_seven.path().unwrap(), vec![1, 2, 5, 7]);
    assert_eq!(to_seven.distance(7).unwrap(), 10.0);

    // 4 is first reached via 2 (cost 13), then improved via 7 (cost 11)
    let mut to_four = ShortestPaths::simple(&graph, 1, weights).with_destination(4);
    to_four.set_paths().unwrap();
    assert_eq!(to_four.path().unwrap(), vec![1, 2, 5, 7, 4]);
    assert_eq!(to_four.distance(4).unwrap(), 11.0);
}

#[test]
fn test_cycle_is_not_revisited() {
    let (graph, weights) = weighted_directed(
        5,
        &[
            (1, 2, 1.0),
            (2, 3, 1.0),
            (3, 1, 1.0),
            (3, 4, 18.0),
            (4, 5, 20.0),
        ],
    );
    let mut paths = ShortestPaths::simple(&graph, 1, weights).with_destination(5);
    paths.set_paths().unwrap();

    assert_eq!(paths.path().unwrap(), vec![1, 2, 3, 4, 5]);
    assert_eq!(paths.distance(5).unwrap(), 40.0);
    assert_eq!(paths.distance(1).unwrap(), 0.0);
    assert_eq!(paths.predecessor(1).unwrap(), None);
    assert_eq!(paths.stats().unwrap().settled, 5);
}

#[test]
fn test_all_destinations_without_target() {
    let (graph, weights) = weighted_directed(7, SEVEN_EDGES);
    let mut paths = ShortestPaths::simple(&graph, 1, weights);
    paths.set_paths().unwrap();

    let expected = [0.0, 2.0, 1.0, 11.0, 5.0, 9.0, 10.0];
    for (i, want) in expected.iter().enumerate() {
        assert_eq!(paths.distance(i + 1).unwrap(), *want, "vertex {}", i + 1);
    }
    assert_eq!(paths.path_to(6).unwrap(), vec![1, 2, 5, 6]);
    assert_eq!(paths.path_to(3).unwrap(), vec![1, 3]);
    assert_eq!(paths.path_to(1).unwrap(), vec![1]);
    assert!(!paths.stats().unwrap().reached_destination);
}

#[test]
fn test_equal_priorities_both_expanded() {
    // 2 and 3 sit at the same distance; neither may be dropped
    let (graph, weights) = weighted_directed(4, &[(1, 2, 1.0), (1, 3, 1.0), (3, 4, 1.0)]);
    let mut paths = ShortestPaths::simple(&graph, 1, weights).with_destination(4);
    paths.set_paths().unwrap();

    assert_eq!(paths.path().unwrap(), vec![1, 3, 4]);
    assert_eq!(paths.distance(4).unwrap(), 2.0);
}

#[test]
fn test_unreachable_vertex() {
    let (graph, weights) = weighted_directed(3, &[(1, 2, 1.0), (3, 1, 1.0)]);
    let mut paths = ShortestPaths::simple(&graph, 1, weights);
    paths.set_paths().unwrap();

    assert_eq!(paths.distance(3).unwrap(), f64::INFINITY);
    assert_eq!(paths.predecessor(3).unwrap(), None);
    assert!(matches!(
        paths.path_to(3),
        Err(GraphError::NotFound { .. })
    ));
    // Not a vertex at all
    assert_eq!(paths.distance(40).unwrap(), f64::INFINITY);
    assert!(paths.path_to(40).is_err());
}

#[test]
fn test_unreachable_destination() {
    let (graph, weights) = weighted_directed(3, &[(1, 2, 1.0)]);
    let mut paths = ShortestPaths::simple(&graph, 1, weights).with_destination(3);
    paths.set_paths().unwrap();

    assert!(!paths.stats().unwrap().reached_destination);
    let err = paths.path().unwrap_err();
    assert_eq!(err.to_string(), "path not found: 1 -> 3");
}

#[test]
fn test_missing_weight_is_infinite() {
    // Edge exists in the graph but no weight was ever set
    let (mut graph, weights) = weighted_directed(3, &[(1, 2, 1.0)]);
    graph.add_edge(2, 3).unwrap();
    let mut paths = ShortestPaths::simple(&graph, 1, weights);
    paths.set_paths().unwrap();
    assert_eq!(paths.distance(3).unwrap(), f64::INFINITY);
    assert!(paths.path_to(3).is_err());
}

#[test]
fn test_set_paths_twice_fails() {
    let (graph, weights) = weighted_directed(2, &[(1, 2, 1.0)]);
    let mut paths = ShortestPaths::simple(&graph, 1, weights);
    assert!(!paths.is_initialized());
    paths.set_paths().unwrap();
    assert!(paths.is_initialized());
    assert!(matches!(
        paths.set_paths(),
        Err(GraphError::AlreadyInitialized)
    ));
    // First results are untouched
    assert_eq!(paths.distance(2).unwrap(), 1.0);
}

#[test]
fn test_queries_before_set_paths_fail() {
    let (graph, weights) = weighted_directed(2, &[(1, 2, 1.0)]);
    let paths = ShortestPaths::simple(&graph, 1, weights).with_destination(2);
    assert!(matches!(paths.distance(2), Err(GraphError::NotInitialized)));
    assert!(matches!(paths.predecessor(2), Err(GraphError::NotInitialized)));
    assert!(matches!(paths.path_to(2), Err(GraphError::NotInitialized)));
    assert!(matches!(paths.path(), Err(GraphError::NotInitialized)));
    assert!(paths.stats().is_none());
}

#[test]
fn test_path_without_destination() {
    let (graph, weights) = weighted_directed(2, &[(1, 2, 1.0)]);
    let mut paths = ShortestPaths::simple(&graph, 1, weights);
    paths.set_paths().unwrap();
    assert_eq!(paths.destination(), None);
    assert!(matches!(
        paths.path(),
        Err(GraphError::InvalidArgument {
            vertex: NO_VERTEX,
            ..
        })
    ));
}

#[test]
fn test_absent_source_or_destination() {
    let (graph, weights) = weighted_directed(2, &[(1, 2, 1.0)]);
    let mut paths = ShortestPaths::simple(&graph, 9, weights.clone());
    assert!(matches!(
        paths.set_paths(),
        Err(GraphError::InvalidArgument { vertex: 9, .. })
    ));
    assert!(!paths.is_initialized());

    let mut paths = ShortestPaths::simple(&graph, 1, weights).with_destination(5);
    assert!(matches!(
        paths.set_paths(),
        Err(GraphError::InvalidArgument { vertex: 5, .. })
    ));
}

#[test]
fn test_undirected_search() {
    let mut graph = UndirectedGraph::new();
    for _ in 0..4 {
        graph.add();
    }
    let mut weights = WeightMap::for_graph(&graph);
    for (u, v, w) in [(2, 1, 1.0), (3, 2, 1.0), (1, 4, 5.0), (4, 3, 1.0)] {
        graph.add_edge(u, v).unwrap();
        weights.set(u, v, w);
    }

    let mut paths = ShortestPaths::simple(&graph, 4, weights).with_destination(1);
    paths.set_paths().unwrap();
    assert_eq!(paths.path().unwrap(), vec![4, 3, 2, 1]);
    assert_eq!(paths.distance(1).unwrap(), 3.0);
}

#[test]
fn test_closure_weights() {
    let (graph, _) = weighted_directed(4, &[(1, 2, 0.0), (2, 3, 0.0), (1, 3, 0.0), (3, 4, 0.0)]);
    // Unit weights: fewest hops wins
    let mut paths = ShortestPaths::simple(&graph, 1, |_: Vertex, _: Vertex| 1.0);
    paths.set_paths().unwrap();
    assert_eq!(paths.path_to(4).unwrap(), vec![1, 3, 4]);
    assert_eq!(paths.distance(4).unwrap(), 2.0);
}

#[test]
fn test_zero_weight_edges() {
    let (graph, weights) = weighted_directed(3, &[(1, 2, 0.0), (2, 3, 0.0), (1, 3, 1.0)]);
    let mut paths = ShortestPaths::simple(&graph, 1, weights).with_destination(3);
    paths.set_paths().unwrap();
    assert_eq!(paths.path().unwrap(), vec![1, 2, 3]);
    assert_eq!(paths.distance(3).unwrap(), 0.0);
}

#[test]
fn test_source_is_destination() {
    let (graph, weights) = weighted_directed(2, &[(1, 2, 4.0)]);
    let mut paths = ShortestPaths::simple(&graph, 2, weights).with_destination(2);
    paths.set_paths().unwrap();
    assert_eq!(paths.path().unwrap(), vec![2]);
    assert_eq!(paths.distance(2).unwrap(), 0.0);
    assert!(paths.stats().unwrap().reached_destination);
}

#[test]
fn test_recycled_vertex_ids() {
    let (mut graph, mut weights) = weighted_directed(4, &[(1, 2, 1.0), (2, 4, 1.0)]);
    graph.remove(3);
    graph.remove(2);
    // 2 comes back as a fresh vertex with no edges
    assert_eq!(graph.add(), 2);
    graph.add_edge(1, 2).unwrap();
    weights.set(1, 2, 7.0);

    let mut paths = ShortestPaths::simple(&graph, 1, weights);
    paths.set_paths().unwrap();
    assert_eq!(paths.distance(2).unwrap(), 7.0);
    assert!(paths.path_to(4).is_err());
}

/// A line 1..=10 (x = v) with a decoy branch 11..=19 hanging off vertex 1
/// in the opposite direction (x = 11 - v). Every edge has weight 1.
fn line_with_decoy() -> (UndirectedGraph, WeightMap) {
    let mut graph = UndirectedGraph::new();
    for _ in 0..19 {
        graph.add();
    }
    let mut weights = WeightMap::for_graph(&graph);
    let mut connect = |g: &mut UndirectedGraph, u: Vertex, v: Vertex| {
        g.add_edge(u, v).unwrap();
        weights.set(u, v, 1.0);
    };
    for v in 1..10 {
        connect(&mut graph, v, v + 1);
    }
    connect(&mut graph, 1, 11);
    for v in 11..19 {
        connect(&mut graph, v, v + 1);
    }
    (graph, weights)
}

fn line_position(v: Vertex) -> f64 {
    if v <= 10 {
        v as f64
    } else {
        11.0 - v as f64
    }
}

#[test]
fn test_astar_matches_dijkstra_and_settles_less() {
    let (graph, weights) = line_with_decoy();

    let mut dijkstra = ShortestPaths::simple(&graph, 1, weights.clone()).with_destination(10);
    dijkstra.set_paths().unwrap();

    let mut astar = ShortestPaths::simple(&graph, 1, weights)
        .with_destination(10)
        .with_heuristic(|v| (10.0 - line_position(v)).abs());
    astar.set_paths().unwrap();

    let expected: Vec<Vertex> = (1..=10).collect();
    assert_eq!(dijkstra.path().unwrap(), expected);
    assert_eq!(astar.path().unwrap(), expected);
    assert_eq!(dijkstra.distance(10).unwrap(), 9.0);
    assert_eq!(astar.distance(10).unwrap(), 9.0);

    let dijkstra_stats = dijkstra.stats().unwrap();
    let astar_stats = astar.stats().unwrap();
    assert_eq!(astar_stats.settled, 10);
    assert!(astar_stats.settled < dijkstra_stats.settled);
    // The decoy branch is never entered past its first vertex
    assert_eq!(astar.distance(12).unwrap(), f64::INFINITY);
}

#[test]
fn test_zero_heuristic_is_dijkstra() {
    let (graph, weights) = weighted_directed(7, SEVEN_EDGES);
    let mut paths = ShortestPaths::simple(&graph, 1, weights)
        .with_destination(4)
        .with_heuristic(|_| 0.0);
    paths.set_paths().unwrap();
    assert_eq!(paths.path().unwrap(), vec![1, 2, 5, 7, 4]);
}

#[test]
fn test_negative_weight_is_not_an_error() {
    let (graph, weights) = weighted_directed(3, &[(1, 2, 5.0), (1, 3, 2.0), (3, 2, -4.0)]);
    let mut paths = ShortestPaths::simple(&graph, 1, weights);
    assert!(paths.set_paths().is_ok());
    assert_eq!(paths.distance(2).unwrap(), -2.0);
}

#[test]
fn test_stats_count_stale_entries() {
    let (graph, weights) = weighted_directed(7, SEVEN_EDGES);
    let mut paths = ShortestPaths::simple(&graph, 1, weights);
    paths.set_paths().unwrap();
    let stats = paths.stats().unwrap();
    assert_eq!(stats.settled, 7);
    // Every relaxation after the first for a vertex leaves one stale entry,
    // plus the source's initial infinite entry
    assert!(stats.stale_skipped >= 1);
    assert!(stats.relaxations >= 6);
}

#[test]
fn test_search_over_dyn_graph() {
    let mut graph = crate::graph::GraphKind::Directed.build();
    let a = graph.add();
    let b = graph.add();
    graph.add_edge(a, b).unwrap();
    let mut paths = ShortestPaths::simple(graph.as_ref(), a, |_: Vertex, _: Vertex| 2.5);
    paths.set_paths().unwrap();
    assert_eq!(paths.distance(b).unwrap(), 2.5);
}

/// Dense vector-backed storage, to exercise the storage seam
struct VecStorage {
    distances: Vec<f64>,
    predecessors: Vec<Option<Vertex>>,
    weights: WeightMap,
}

impl PathStorage for VecStorage {
    fn distance(&self, v: Vertex) -> f64 {
        self.distances.get(v).copied().unwrap_or(f64::INFINITY)
    }

    fn set_distance(&mut self, v: Vertex, distance: f64) {
        if v >= self.distances.len() {
            self.distances.resize(v + 1, f64::INFINITY);
        }
        self.distances[v] = distance;
    }

    fn predecessor(&self, v: Vertex) -> Option<Vertex> {
        self.predecessors.get(v).copied().flatten()
    }

    fn set_predecessor(&mut self, v: Vertex, predecessor: Option<Vertex>) {
        if v >= self.predecessors.len() {
            self.predecessors.resize(v + 1, None);
        }
        self.predecessors[v] = predecessor;
    }

    fn edge_weight(&self, u: Vertex, v: Vertex) -> f64 {
        self.weights.weight(u, v)
    }
}

#[test]
fn test_custom_storage() {
    let (graph, weights) = weighted_directed(7, SEVEN_EDGES);
    let storage = VecStorage {
        distances: Vec::new(),
        predecessors: Vec::new(),
        weights,
    };
    let mut paths = ShortestPaths::new(&graph, 1, storage).with_destination(7);
    paths.set_paths().unwrap();
    assert_eq!(paths.path().unwrap(), vec![1, 2, 5, 7]);

    let storage = paths.into_storage();
    assert_eq!(storage.distance(7), 10.0);
    assert_eq!(storage.predecessor(7), Some(5));
}

#[test]
fn test_simple_storage_defaults() {
    let mut storage = SimpleStorage::new(WeightMap::new(true));
    assert_eq!(storage.distance(3), f64::INFINITY);
    assert_eq!(storage.predecessor(3), None);
    storage.set_distance(3, 4.0);
    storage.set_predecessor(3, Some(1));
    assert_eq!(storage.distance(3), 4.0);
    assert_eq!(storage.predecessor(3), Some(1));
    storage.set_predecessor(3, None);
    assert_eq!(storage.predecessor(3), None);
    assert_eq!(storage.distances().collect::<Vec<_>>(), vec![(3, 4.0)]);
    assert_eq!(storage.edge_weight(1, 2), f64::INFINITY);
    assert!(storage.weights().is_empty());
}
