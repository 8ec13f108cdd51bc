//! CLI commands for graphpath

pub mod dispatch;
pub mod edges;
pub mod input;
pub mod path;
pub mod stats;
