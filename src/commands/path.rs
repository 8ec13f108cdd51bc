//! `graphpath path` command

use graphpath_core::error::Result;
use graphpath_core::format::OutputFormat;
use graphpath_core::graph::{Graph, Vertex};
use graphpath_core::paths::{PathStorage, ShortestPaths};
use serde_json::json;
use tracing::debug;

use crate::cli::PathArgs;
use crate::commands::dispatch::CommandContext;
use crate::commands::input::LoadedGraph;

pub fn execute(ctx: &CommandContext, args: &PathArgs) -> Result<()> {
    let LoadedGraph { graph, weights } = ctx.load_graph(&args.graph)?;

    let mut paths = ShortestPaths::simple(graph.as_ref(), args.from, weights);
    if let Some(to) = args.to {
        paths = paths.with_destination(to);
    }
    paths.set_paths()?;

    debug!(elapsed = ?ctx.start.elapsed(), stats = ?paths.stats(), "search");

    match args.to {
        Some(to) => {
            let path = paths.path()?;
            let distance = paths.distance(to)?;
            print_path(ctx, &path, distance)
        }
        None => print_all(ctx, graph.as_ref(), args.from, &paths),
    }
}

fn print_path(ctx: &CommandContext, path: &[Vertex], distance: f64) -> Result<()> {
    match ctx.format() {
        OutputFormat::Json => {
            let output = json!({
                "source": path.first(),
                "destination": path.last(),
                "path": path,
                "distance": distance,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            let joined = path
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(" -> ");
            println!("{}", joined);
            if !ctx.cli.quiet {
                println!("distance: {}", distance);
            }
        }
    }
    Ok(())
}

fn print_all<S: PathStorage>(
    ctx: &CommandContext,
    graph: &dyn Graph,
    source: Vertex,
    paths: &ShortestPaths<'_, dyn Graph, S>,
) -> Result<()> {
    let mut rows = Vec::with_capacity(graph.vertex_size());
    for v in graph.vertices() {
        rows.push((v, paths.distance(v)?, paths.predecessor(v)?));
    }

    match ctx.format() {
        OutputFormat::Json => {
            let vertices: Vec<_> = rows
                .iter()
                .map(|(v, distance, predecessor)| {
                    json!({
                        "vertex": v,
                        "distance": distance,
                        "predecessor": predecessor,
                    })
                })
                .collect();
            let output = json!({ "source": source, "vertices": vertices });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                println!("vertex\tdistance\tpredecessor");
            }
            for (v, distance, predecessor) in rows {
                let predecessor = predecessor.map_or_else(|| "-".to_string(), |p| p.to_string());
                println!("{}\t{}\t{}", v, distance, predecessor);
            }
        }
    }
    Ok(())
}
