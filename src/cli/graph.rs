//! Graph input flags shared by every subcommand

use std::str::FromStr;

use clap::Args;

use graphpath_core::error::GraphError;
use graphpath_core::graph::{GraphKind, Vertex};

use super::parse::parse_edge_spec;

/// One `--edge U-V[:W]` argument
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeSpec {
    pub from: Vertex,
    pub to: Vertex,
    pub weight: f64,
}

impl FromStr for EdgeSpec {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GraphError::UsageError(format!("invalid edge '{}' (expected U-V[:W])", s));

        let (endpoints, weight) = match s.split_once(':') {
            Some((endpoints, weight)) => {
                let weight = weight.trim().parse::<f64>().map_err(|_| invalid())?;
                if weight.is_nan() {
                    return Err(invalid());
                }
                (endpoints, weight)
            }
            None => (s, 1.0),
        };

        let (from, to) = endpoints.split_once('-').ok_or_else(invalid)?;
        let from = from.trim().parse::<Vertex>().map_err(|_| invalid())?;
        let to = to.trim().parse::<Vertex>().map_err(|_| invalid())?;

        Ok(EdgeSpec { from, to, weight })
    }
}

#[derive(Args, Debug, Clone)]
pub struct GraphArgs {
    /// Create vertices 1..=N
    #[arg(long, short = 'n', default_value_t = 0)]
    pub vertices: usize,

    /// Add an edge U-V with optional weight W (default 1); repeatable
    #[arg(long = "edge", short = 'e', value_parser = parse_edge_spec, action = clap::ArgAction::Append)]
    pub edges: Vec<EdgeSpec>,

    /// Build a directed graph (overrides the configured kind)
    #[arg(long, conflicts_with = "undirected")]
    pub directed: bool,

    /// Build an undirected graph (overrides the configured kind)
    #[arg(long)]
    pub undirected: bool,
}

impl GraphArgs {
    /// Graph kind requested on the command line, if any
    pub fn kind(&self) -> Option<GraphKind> {
        if self.undirected {
            Some(GraphKind::Undirected)
        } else if self.directed {
            Some(GraphKind::Directed)
        } else {
            None
        }
    }
}
