//! Command implementations for all routegraph commands

use routegraph_core::error::Result;
use tracing::debug;

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{inventory, matrix, path, rank, spanning, tour};

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let graph = ctx.load_graph()?;
        let format = ctx.format;
        let quiet = ctx.cli.quiet;

        let result = match self {
            Commands::Dijkstra(args) => {
                path::execute_dijkstra(format, &graph, &args.from, &args.to)
            }
            Commands::Bfs(args) => {
                path::execute_search(format, &graph, path::Search::Bfs, &args.from, &args.to)
            }
            Commands::Dfs(args) => {
                path::execute_search(format, &graph, path::Search::Dfs, &args.from, &args.to)
            }
            Commands::Kruskal => spanning::execute(format, quiet, &graph, spanning::Method::Kruskal),
            Commands::Prim(args) => spanning::execute(
                format,
                quiet,
                &graph,
                spanning::Method::Prim(args.start.as_deref()),
            ),
            Commands::Greedy(args) => tour::execute(format, quiet, &graph, args.start.as_deref()),
            Commands::Floyd => matrix::execute(format, &graph),
            Commands::Rank => rank::execute(format, &graph),
            Commands::Edges => inventory::execute_edges(format, quiet, &graph),
            Commands::Nodes => inventory::execute_nodes(format, quiet, &graph),
        };

        debug!(elapsed = ?ctx.start.elapsed(), "execute_command");
        result
    }
}
