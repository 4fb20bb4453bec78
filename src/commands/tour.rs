//! `greedy` command

use routegraph_core::error::Result;
use routegraph_core::format::{format_cost, OutputFormat};
use routegraph_core::graph::Graph;
use routegraph_core::records::{header_line, path_line};
use routegraph_core::report::TourReport;

/// Execute the greedy command
pub fn execute(format: OutputFormat, quiet: bool, graph: &Graph, start: Option<&str>) -> Result<()> {
    let report = TourReport::new(graph, graph.nearest_neighbor_tour(start));

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Human => {
            if report.path.is_empty() {
                if !quiet {
                    println!("No nodes");
                }
                return Ok(());
            }
            println!("{}", report.path.join(" -> "));
            if !quiet {
                println!(
                    "cost: {}  visited: {}/{}",
                    format_cost(report.total_cost),
                    report.path.len(),
                    graph.node_count()
                );
                if !report.all_nodes_visited {
                    println!("tour stopped early: no direct connection to the remaining nodes");
                }
            }
        }
        OutputFormat::Records => {
            println!(
                "{}",
                header_line(
                    "greedy",
                    &[
                        ("visited", report.path.len().to_string()),
                        ("nodes", graph.node_count().to_string()),
                        ("complete", report.all_nodes_visited.to_string()),
                        ("cost", format_cost(report.total_cost)),
                    ],
                )
            );
            for (index, node) in report.path.iter().enumerate() {
                println!("{}", path_line(index, node));
            }
        }
    }
    Ok(())
}
