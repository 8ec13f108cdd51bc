//! `graphpath stats` command

use graphpath_core::error::Result;
use graphpath_core::format::OutputFormat;
use serde_json::json;

use crate::cli::StatsArgs;
use crate::commands::dispatch::CommandContext;

pub fn execute(ctx: &CommandContext, args: &StatsArgs) -> Result<()> {
    let loaded = ctx.load_graph(&args.graph)?;
    let graph = loaded.graph.as_ref();

    let degrees: Vec<_> = graph
        .vertices()
        .map(|v| (v, graph.in_degree(v), graph.out_degree(v)))
        .collect();

    match ctx.format() {
        OutputFormat::Json => {
            let degrees: Vec<_> = degrees
                .iter()
                .map(|(v, in_degree, out_degree)| {
                    json!({ "vertex": v, "in": in_degree, "out": out_degree })
                })
                .collect();
            let output = json!({
                "directed": graph.is_directed(),
                "vertices": graph.vertex_size(),
                "edges": graph.edge_size(),
                "max_vertex": graph.max_vertex(),
                "degrees": degrees,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            let kind = if graph.is_directed() {
                "directed"
            } else {
                "undirected"
            };
            println!("kind: {}", kind);
            println!("vertices: {}", graph.vertex_size());
            println!("edges: {}", graph.edge_size());
            println!("max vertex: {}", graph.max_vertex());
            if !ctx.cli.quiet && !degrees.is_empty() {
                println!();
                println!("vertex\tin\tout");
                for (v, in_degree, out_degree) in degrees {
                    println!("{}\t{}\t{}", v, in_degree, out_degree);
                }
            }
        }
    }
    Ok(())
}
