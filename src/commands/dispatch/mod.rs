//! Command dispatch logic for graphpath

use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use graphpath_core::config::GraphPathConfig;
use graphpath_core::error::Result;
use tracing::debug;

mod command;

pub use command::{Command, CommandContext, NoCommand};

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Path(args) => commands::path::execute(ctx, args),
            Commands::Stats(args) => commands::stats::execute(ctx, args),
            Commands::Edges(args) => commands::edges::execute(ctx, args),
        }
    }
}

pub fn run(cli: &Cli, config: &GraphPathConfig, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, config, start);

    debug!(format = %ctx.format(), kind = %config.graph.kind, "dispatch");

    let result = match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    };

    debug!(elapsed = ?start.elapsed(), ok = result.is_ok(), "command_done");
    result
}
