//! CLI argument parsing for routegraph
//!
//! Supports global flags: --edges, --config, --format, --quiet, --verbose,
//! --log-level, --log-json

pub mod args;
pub mod parse;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use args::{RouteArgs, StartArgs};
use parse::parse_output_format;
pub use routegraph_core::format::OutputFormat;

/// Routegraph - weighted network analysis from edge lists
#[derive(Parser, Debug)]
#[command(name = "routegraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Edge list to analyse (JSON or YAML)
    #[arg(long, short, global = true, env = "ROUTEGRAPH_EDGES")]
    pub edges: Option<PathBuf>,

    /// Config file (defaults to ./routegraph.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format: human, json or records (defaults to the configured
    /// format, then human)
    #[arg(long, global = true, value_parser = parse_output_format)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (overrides --verbose)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Cheapest path between two nodes
    Dijkstra(RouteArgs),

    /// Fewest-hop path between two nodes (breadth-first)
    Bfs(RouteArgs),

    /// First path found by depth-first search
    Dfs(RouteArgs),

    /// Minimum spanning forest over every component
    Kruskal,

    /// Minimum spanning tree of one component
    Prim(StartArgs),

    /// Nearest-neighbour tour
    Greedy(StartArgs),

    /// All-pairs shortest distances
    Floyd,

    /// Nodes ranked by number of connections
    Rank,

    /// List the loaded connections
    Edges,

    /// List the nodes with their degree
    Nodes,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_route_command() {
        let cli = Cli::try_parse_from([
            "routegraph",
            "--edges",
            "net.json",
            "dijkstra",
            "Depot",
            "Port",
            "--format",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert_eq!(cli.edges, Some(PathBuf::from("net.json")));
        match cli.command {
            Some(Commands::Dijkstra(args)) => {
                assert_eq!(args.from, "Depot");
                assert_eq!(args.to, "Port");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_start_flag() {
        let cli = Cli::try_parse_from(["routegraph", "prim", "--start", "Yard"]).unwrap();
        match cli.command {
            Some(Commands::Prim(args)) => assert_eq!(args.start.as_deref(), Some("Yard")),
            other => panic!("unexpected command: {other:?}"),
        }
        assert_eq!(cli.format, None);
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(Cli::try_parse_from(["routegraph", "--format", "xml", "rank"]).is_err());
    }
}
