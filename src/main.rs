//! Graphpath - shortest paths over small integer-labelled graphs
//!
//! Builds a directed or undirected graph from command-line flags and runs
//! shortest-path searches, edge listings and degree statistics over it.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::Cli;
use graphpath_core::config::GraphPathConfig;
use graphpath_core::error::{ExitCode as GraphExitCode, GraphError};
use graphpath_core::format::OutputFormat;
use graphpath_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let argv_format_json = argv_requests_json();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // clap fails before `Cli.format` exists; honour a raw `--format json`
            if argv_format_json {
                let graph_error = match err.kind() {
                    // Help and version are informational, not errors - let clap handle them
                    clap::error::ErrorKind::DisplayHelp
                    | clap::error::ErrorKind::DisplayVersion => err.exit(),
                    clap::error::ErrorKind::ValueValidation
                    | clap::error::ErrorKind::InvalidValue
                    | clap::error::ErrorKind::InvalidSubcommand
                    | clap::error::ErrorKind::UnknownArgument
                    | clap::error::ErrorKind::ArgumentConflict
                    | clap::error::ErrorKind::MissingRequiredArgument => {
                        GraphError::UsageError(err.to_string())
                    }
                    _ => GraphError::Other(err.to_string()),
                };

                eprintln!("{}", graph_error.to_json());
                return ExitCode::from(graph_error.exit_code() as u8);
            }

            err.exit();
        }
    };

    let config = GraphPathConfig::discover(cli.config.as_deref());

    // Flags win over the config file
    let (format, log_level, log_json) = match &config {
        Ok(config) => (
            cli.format.unwrap_or(config.output.format),
            cli.log_level.clone().or_else(|| config.log.level.clone()),
            cli.log_json || config.log.json,
        ),
        Err(_) => (cli.format.unwrap_or_default(), cli.log_level.clone(), cli.log_json),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, log_level.as_deref(), log_json) {
        // If tracing initialization fails, fall back to stderr
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    let result = config.and_then(|config| commands::dispatch::run(&cli, &config, start));

    match result {
        Ok(()) => ExitCode::from(GraphExitCode::Success as u8),
        Err(e) => {
            let exit_code = e.exit_code();

            if format == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {}", e);
            }

            ExitCode::from(exit_code as u8)
        }
    }
}

fn argv_requests_json() -> bool {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--format" {
            if args.next().is_some_and(|v| v == "json") {
                return true;
            }
        } else if arg == "--format=json" {
            return true;
        }
    }
    false
}
