//! `rank` command

use routegraph_core::error::Result;
use routegraph_core::format::OutputFormat;
use routegraph_core::graph::Graph;
use routegraph_core::records::{header_line, node_line};

/// Execute the rank command
pub fn execute(format: OutputFormat, graph: &Graph) -> Result<()> {
    let ranking = graph.sort_nodes_by_degree();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&ranking)?);
        }
        OutputFormat::Human => {
            let width = ranking
                .first()
                .map(|top| top.degree.to_string().len())
                .unwrap_or(1);
            for entry in &ranking {
                println!("{:>width$}  {}", entry.degree, entry.node, width = width);
            }
        }
        OutputFormat::Records => {
            println!(
                "{}",
                header_line("rank", &[("nodes", ranking.len().to_string())])
            );
            for entry in &ranking {
                println!("{}", node_line(&entry.node, "degree", entry.degree));
            }
        }
    }
    Ok(())
}
