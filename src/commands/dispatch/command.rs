//! Command trait and context for dispatching commands

use std::env;
use std::time::Instant;

use routegraph_core::bail_usage;
use routegraph_core::config::RouteGraphConfig;
use routegraph_core::error::Result;
use routegraph_core::format::OutputFormat;
use routegraph_core::graph::Graph;
use routegraph_core::source::{load_graph, EdgeFile};
use tracing::debug;

use crate::cli::Cli;

/// Load the explicit config file, or `routegraph.toml` from the working
/// directory when there is one
pub fn resolve_config(cli: &Cli) -> Result<RouteGraphConfig> {
    match &cli.config {
        Some(path) => RouteGraphConfig::load(path),
        None => RouteGraphConfig::discover(&env::current_dir()?),
    }
}

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: RouteGraphConfig,
    /// `--format`, else the configured format, else human
    pub format: OutputFormat,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Result<Self> {
        let config = resolve_config(cli)?;
        let format = cli.format.or(config.output.format).unwrap_or_default();
        Ok(Self {
            cli,
            config,
            format,
            start,
        })
    }

    /// Read the `--edges` file and build the graph
    pub fn load_graph(&self) -> Result<Graph> {
        let Some(path) = &self.cli.edges else {
            bail_usage!("no edge list given; pass --edges <FILE> or set ROUTEGRAPH_EDGES");
        };

        let graph = load_graph(&EdgeFile::new(path), &self.config.ingest)?;
        debug!(
            elapsed = ?self.start.elapsed(),
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "load_graph"
        );
        Ok(graph)
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
        println!("routegraph {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Weighted network analysis over edge lists.");
        println!();
        println!("Run `routegraph --help` for usage information.");
        Ok(())
    }
}
