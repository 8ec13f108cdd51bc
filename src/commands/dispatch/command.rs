//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::{Cli, GraphArgs};
use crate::commands::input::LoadedGraph;
use graphpath_core::config::GraphPathConfig;
use graphpath_core::error::Result;
use graphpath_core::format::OutputFormat;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: &'a GraphPathConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: &'a GraphPathConfig, start: Instant) -> Self {
        Self { cli, config, start }
    }

    /// Output format: the flag wins over the config file
    pub fn format(&self) -> OutputFormat {
        self.cli.format.unwrap_or(self.config.output.format)
    }

    /// Build the graph described by the command's graph flags
    pub fn load_graph(&self, args: &GraphArgs) -> Result<LoadedGraph> {
        LoadedGraph::build(args, self.config)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("graphpath {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Shortest paths over small integer-labelled graphs.");
        println!();
        println!("Run `graphpath --help` for usage information.");
        Ok(())
    }
}
