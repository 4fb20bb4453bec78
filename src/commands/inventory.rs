//! `edges` and `nodes` commands

use serde::Serialize;

use routegraph_core::error::Result;
use routegraph_core::format::{format_cost, OutputFormat};
use routegraph_core::graph::{Graph, NodeDegree};
use routegraph_core::records::{edge_line, header_line, node_line};

#[derive(Debug, Serialize)]
struct NodeInventory {
    count: usize,
    components: usize,
    nodes: Vec<NodeDegree>,
}

/// Execute the edges command
pub fn execute_edges(format: OutputFormat, quiet: bool, graph: &Graph) -> Result<()> {
    let edges = graph.edges();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(edges)?);
        }
        OutputFormat::Human => {
            if edges.is_empty() && !quiet {
                println!("No edges");
            }
            for edge in edges {
                println!("{} -- {}  {}", edge.from, edge.to, format_cost(edge.cost));
            }
        }
        OutputFormat::Records => {
            println!(
                "{}",
                header_line("edges", &[("edges", edges.len().to_string())])
            );
            for edge in edges {
                println!("{}", edge_line(&edge.from, &edge.to, edge.cost));
            }
        }
    }
    Ok(())
}

/// Execute the nodes command
pub fn execute_nodes(format: OutputFormat, quiet: bool, graph: &Graph) -> Result<()> {
    let inventory = NodeInventory {
        count: graph.node_count(),
        components: graph.component_count(),
        nodes: graph
            .nodes()
            .iter()
            .map(|node| NodeDegree::new(node.as_str(), graph.degree(node)))
            .collect(),
    };

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&inventory)?);
        }
        OutputFormat::Human => {
            for entry in &inventory.nodes {
                println!("{} ({})", entry.node, entry.degree);
            }
            if !quiet {
                println!();
                println!(
                    "{} nodes in {} components",
                    inventory.count, inventory.components
                );
            }
        }
        OutputFormat::Records => {
            println!(
                "{}",
                header_line(
                    "nodes",
                    &[
                        ("nodes", inventory.count.to_string()),
                        ("components", inventory.components.to_string()),
                    ],
                )
            );
            for entry in &inventory.nodes {
                println!("{}", node_line(&entry.node, "degree", entry.degree));
            }
        }
    }
    Ok(())
}
