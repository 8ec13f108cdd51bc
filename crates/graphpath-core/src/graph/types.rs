use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GraphError;

/// Vertex identifier. Live vertices are always positive.
pub type Vertex = usize;

/// Identifier derived from an edge's endpoints by [`edge_id`].
pub type EdgeId = u64;

/// Reserved id meaning "no vertex".
pub const NO_VERTEX: Vertex = 0;

/// Triangular number T(n) = n(n+1)/2.
fn triangular(n: u64) -> u64 {
    n * (n + 1) / 2
}

/// Pair two vertex ids into a single edge id.
///
/// Directed graphs use the Cantor pairing `T(u+v) + v`, which is distinct
/// for `(u, v)` and `(v, u)` whenever `u != v`. Undirected graphs add the
/// larger endpoint instead, so the id is symmetric in its arguments.
/// Ids are unique for vertex ids below 2^31.
pub fn edge_id(u: Vertex, v: Vertex, directed: bool) -> EdgeId {
    let (u, v) = (u as u64, v as u64);
    let second = if directed { v } else { u.max(v) };
    triangular(u + v) + second
}

/// Which flavour of graph to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphKind {
    #[default]
    Directed,
    Undirected,
}

impl GraphKind {
    pub fn is_directed(self) -> bool {
        self == GraphKind::Directed
    }
}

impl FromStr for GraphKind {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "directed" => Ok(GraphKind::Directed),
            "undirected" => Ok(GraphKind::Undirected),
            other => Err(GraphError::UnknownGraphKind(other.to_string())),
        }
    }
}

impl fmt::Display for GraphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphKind::Directed => write!(f, "directed"),
            GraphKind::Undirected => write!(f, "undirected"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_id_directed_is_asymmetric() {
        for u in 1..20 {
            for v in 1..20 {
                if u != v {
                    assert_ne!(edge_id(u, v, true), edge_id(v, u, true), "({u}, {v})");
                }
            }
        }
    }

    #[test]
    fn test_edge_id_undirected_is_symmetric() {
        for u in 1..20 {
            for v in 1..20 {
                assert_eq!(edge_id(u, v, false), edge_id(v, u, false));
            }
        }
    }

    #[test]
    fn test_edge_id_unique_per_edge() {
        let mut directed = std::collections::HashSet::new();
        let mut undirected = std::collections::HashSet::new();
        for u in 1..40 {
            for v in 1..40 {
                assert!(directed.insert(edge_id(u, v, true)));
                if u <= v {
                    assert!(undirected.insert(edge_id(u, v, false)));
                }
            }
        }
    }

    #[test]
    fn test_edge_id_known_values() {
        // T(3) + 2
        assert_eq!(edge_id(1, 2, true), 8);
        // T(3) + 1
        assert_eq!(edge_id(2, 1, true), 7);
        assert_eq!(edge_id(2, 1, false), 8);
    }

    #[test]
    fn test_graph_kind_parse() {
        assert_eq!("directed".parse::<GraphKind>().unwrap(), GraphKind::Directed);
        assert_eq!(
            "Undirected".parse::<GraphKind>().unwrap(),
            GraphKind::Undirected
        );
        assert!(matches!(
            "dag".parse::<GraphKind>(),
            Err(GraphError::UnknownGraphKind(_))
        ));
        assert_eq!(GraphKind::Undirected.to_string(), "undirected");
        assert!(GraphKind::default().is_directed());
    }
}
