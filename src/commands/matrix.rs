//! `floyd` command

use routegraph_core::error::Result;
use routegraph_core::format::{format_cost, OutputFormat};
use routegraph_core::graph::Graph;
use routegraph_core::records::{distance_line, header_line};
use routegraph_core::report::MatrixReport;

/// Execute the floyd command
pub fn execute(format: OutputFormat, graph: &Graph) -> Result<()> {
    let matrix = graph.floyd_warshall();

    match format {
        OutputFormat::Json => {
            let report = MatrixReport::from(&matrix);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Human => {
            let nodes = matrix.nodes();
            let cells: Vec<Vec<String>> = nodes
                .iter()
                .map(|a| {
                    nodes
                        .iter()
                        .map(|b| format_cost(matrix.distance(a, b).unwrap_or(f64::INFINITY)))
                        .collect()
                })
                .collect();
            let width = nodes
                .iter()
                .map(String::len)
                .chain(cells.iter().flatten().map(String::len))
                .max()
                .unwrap_or(0);

            let mut header = format!("{:<width$}", "", width = width);
            for node in nodes {
                header.push_str(&format!("  {:>width$}", node, width = width));
            }
            println!("{}", header.trim_end());
            for (node, row) in nodes.iter().zip(&cells) {
                let mut line = format!("{:<width$}", node, width = width);
                for cell in row {
                    line.push_str(&format!("  {:>width$}", cell, width = width));
                }
                println!("{}", line);
            }
        }
        OutputFormat::Records => {
            println!(
                "{}",
                header_line("floyd", &[("nodes", matrix.len().to_string())])
            );
            for (from, row) in matrix.to_map() {
                for (to, cost) in row {
                    println!("{}", distance_line(&from, &to, cost));
                }
            }
        }
    }
    Ok(())
}
