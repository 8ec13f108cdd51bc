//! `graphpath edges` command

use graphpath_core::error::Result;
use graphpath_core::format::OutputFormat;
use serde_json::json;

use crate::cli::EdgesArgs;
use crate::commands::dispatch::CommandContext;

pub fn execute(ctx: &CommandContext, args: &EdgesArgs) -> Result<()> {
    let loaded = ctx.load_graph(&args.graph)?;
    let graph = loaded.graph.as_ref();

    let edges: Vec<_> = graph
        .edges()
        .map(|(u, v)| (u, v, graph.edge_id(u, v), loaded.weight(u, v)))
        .collect();

    match ctx.format() {
        OutputFormat::Json => {
            let edges: Vec<_> = edges
                .iter()
                .map(|(u, v, id, weight)| {
                    json!({ "from": u, "to": v, "id": id, "weight": weight })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&json!({ "edges": edges }))?);
        }
        OutputFormat::Human => {
            let arrow = if graph.is_directed() { "->" } else { "--" };
            for (u, v, id, weight) in edges {
                match weight {
                    Some(weight) => println!("{} {} {}\tid={}\tweight={}", u, arrow, v, id, weight),
                    None => println!("{} {} {}\tid={}", u, arrow, v, id),
                }
            }
        }
    }
    Ok(())
}
