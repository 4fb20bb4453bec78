//! `kruskal` and `prim` commands

use routegraph_core::error::Result;
use routegraph_core::format::{format_cost, OutputFormat};
use routegraph_core::graph::Graph;
use routegraph_core::records::{edge_line, header_line};
use routegraph_core::report::SpanningReport;

/// Spanning algorithm to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method<'a> {
    Kruskal,
    Prim(Option<&'a str>),
}

impl Method<'_> {
    fn name(self) -> &'static str {
        match self {
            Method::Kruskal => "kruskal",
            Method::Prim(_) => "prim",
        }
    }
}

/// Execute the kruskal or prim command
pub fn execute(format: OutputFormat, quiet: bool, graph: &Graph, method: Method) -> Result<()> {
    let edges = match method {
        Method::Kruskal => graph.kruskal_mst(),
        Method::Prim(start) => graph.prim_mst(start),
    };
    let report = SpanningReport::new(edges);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Human => {
            if report.edges.is_empty() && !quiet {
                println!("No edges");
            }
            let width = report
                .edges
                .iter()
                .map(|e| e.from.len() + e.to.len() + 4)
                .max()
                .unwrap_or(0);
            for edge in &report.edges {
                let pair = format!("{} -- {}", edge.from, edge.to);
                println!("{:<width$}  {}", pair, format_cost(edge.cost), width = width);
            }
            if !quiet {
                println!();
                println!(
                    "total cost: {}  edges: {}  nodes: {}  components: {}",
                    format_cost(report.total_cost),
                    report.edges_count,
                    report.nodes_covered.len(),
                    report.components
                );
            }
        }
        OutputFormat::Records => {
            println!(
                "{}",
                header_line(
                    method.name(),
                    &[
                        ("edges", report.edges_count.to_string()),
                        ("nodes", report.nodes_covered.len().to_string()),
                        ("components", report.components.to_string()),
                        ("cost", format_cost(report.total_cost)),
                    ],
                )
            );
            for edge in &report.edges {
                println!("{}", edge_line(&edge.from, &edge.to, edge.cost));
            }
        }
    }
    Ok(())
}
