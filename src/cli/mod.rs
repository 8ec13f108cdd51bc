//! CLI argument parsing for graphpath
//!
//! Global flags: --config, --format, --quiet, --verbose, --log-level, --log-json

pub mod graph;
pub mod parse;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub use graph::{EdgeSpec, GraphArgs};
use graphpath_core::format::OutputFormat;
use graphpath_core::graph::Vertex;
use parse::parse_output_format;

/// Graphpath - shortest paths over small integer-labelled graphs
#[derive(Parser, Debug)]
#[command(name = "graphpath")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file (defaults to $GRAPHPATH_CONFIG_DIR/config.toml)
    #[arg(long, global = true, env = "GRAPHPATH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format: human or json (overrides the configured format)
    #[arg(long, global = true, value_parser = parse_output_format)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging and phase timing
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directives (e.g. "debug", "graphpath_core=trace")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit log lines as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find shortest paths from a source vertex
    Path(PathArgs),

    /// Show vertex and edge counts and per-vertex degrees
    Stats(StatsArgs),

    /// List edges with their edge ids
    Edges(EdgesArgs),
}

#[derive(Args, Debug, Clone)]
pub struct PathArgs {
    #[command(flatten)]
    pub graph: GraphArgs,

    /// Source vertex
    #[arg(long)]
    pub from: Vertex,

    /// Destination vertex; without it every vertex's distance is reported
    #[arg(long)]
    pub to: Option<Vertex>,
}

#[derive(Args, Debug, Clone)]
pub struct StatsArgs {
    #[command(flatten)]
    pub graph: GraphArgs,
}

#[derive(Args, Debug, Clone)]
pub struct EdgesArgs {
    #[command(flatten)]
    pub graph: GraphArgs,
}
