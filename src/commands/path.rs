//! `dijkstra`, `bfs` and `dfs` commands

use routegraph_core::error::Result;
use routegraph_core::format::{format_cost, OutputFormat};
use routegraph_core::graph::Graph;
use routegraph_core::records::{escape_quotes, header_line, path_line};
use routegraph_core::report::{PathReport, SearchReport};

/// Unweighted search strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Search {
    Bfs,
    Dfs,
}

impl Search {
    fn name(self) -> &'static str {
        match self {
            Search::Bfs => "bfs",
            Search::Dfs => "dfs",
        }
    }
}

/// Execute the dijkstra command
pub fn execute_dijkstra(format: OutputFormat, graph: &Graph, from: &str, to: &str) -> Result<()> {
    let report = PathReport::from_path(graph.dijkstra(from, to));

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Human => {
            print_human(from, to, &report.path, report.total_cost);
        }
        OutputFormat::Records => {
            print_records(
                "dijkstra",
                from,
                to,
                report.is_found(),
                &report.path,
                report.total_cost,
            );
        }
    }
    Ok(())
}

/// Execute the bfs or dfs command
pub fn execute_search(
    format: OutputFormat,
    graph: &Graph,
    search: Search,
    from: &str,
    to: &str,
) -> Result<()> {
    let found = match search {
        Search::Bfs => graph.bfs_path(from, to),
        Search::Dfs => graph.dfs_path(from, to),
    };
    let report = SearchReport::new(graph, from, to, found);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Human => {
            print_human(from, to, &report.path, report.total_cost);
        }
        OutputFormat::Records => {
            print_records(
                search.name(),
                from,
                to,
                report.found,
                &report.path,
                report.total_cost,
            );
        }
    }
    Ok(())
}

fn print_human(from: &str, to: &str, path: &[String], cost: f64) {
    if path.is_empty() {
        println!("No path from {} to {}", from, to);
        return;
    }
    println!("{}", path.join(" -> "));
    println!("cost: {}  hops: {}", format_cost(cost), path.len() - 1);
}

fn print_records(command: &str, from: &str, to: &str, found: bool, path: &[String], cost: f64) {
    println!(
        "{}",
        header_line(
            command,
            &[
                ("from", format!("\"{}\"", escape_quotes(from))),
                ("to", format!("\"{}\"", escape_quotes(to))),
                ("found", found.to_string()),
                ("cost", format_cost(cost)),
            ],
        )
    );
    for (index, node) in path.iter().enumerate() {
        println!("{}", path_line(index, node));
    }
}
