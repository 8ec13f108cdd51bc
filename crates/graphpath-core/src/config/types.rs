//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::format::OutputFormat;
use crate::graph::GraphKind;

/// Top-level configuration, usually read from `config.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphPathConfig {
    /// Graph construction defaults
    #[serde(default)]
    pub graph: GraphConfig,

    /// Output defaults
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging defaults
    #[serde(default)]
    pub log: LogConfig,
}

/// Configuration for building graphs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Directed or undirected
    #[serde(default)]
    pub kind: GraphKind,

    /// Vertex slots to reserve up front
    #[serde(default)]
    pub capacity: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Level or filter directives, e.g. "debug" or "graphpath_core=trace"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,

    /// Emit JSON log lines
    #[serde(default)]
    pub json: bool,
}
