//! Utilities for records output format
//!
//! Every records document starts with an `H` header line; the remaining
//! lines are prefixed by a single-letter kind:
//! - `P` a node on a path, in order
//! - `E` an edge (`from`, `to`, `cost`)
//! - `N` a node with an attribute (degree, matrix row)
//! - `D` a distance cell

use crate::format::format_cost;

/// Escape double quotes in a string for records format.
/// Replaces `"` with `\"` to allow safe embedding in quoted fields.
pub fn escape_quotes(s: &str) -> String {
    s.replace('\"', r#"\""#)
}

/// Format the header line for a records document
pub fn header_line(command: &str, fields: &[(&str, String)]) -> String {
    let mut line = format!("H routegraph=1 records=1 command={}", command);
    for (key, value) in fields {
        line.push_str(&format!(" {}={}", key, value));
    }
    line
}

/// Format a path node line
pub fn path_line(index: usize, node: &str) -> String {
    format!("P {} \"{}\"", index, escape_quotes(node))
}

/// Format an edge line
pub fn edge_line(from: &str, to: &str, cost: f64) -> String {
    format!(
        "E \"{}\" \"{}\" cost={}",
        escape_quotes(from),
        escape_quotes(to),
        format_cost(cost)
    )
}

/// Format a node attribute line
pub fn node_line(node: &str, key: &str, value: impl std::fmt::Display) -> String {
    format!("N \"{}\" {}={}", escape_quotes(node), key, value)
}

/// Format a distance cell line
pub fn distance_line(from: &str, to: &str, cost: f64) -> String {
    format!(
        "D \"{}\" \"{}\" cost={}",
        escape_quotes(from),
        escape_quotes(to),
        format_cost(cost)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_quotes() {
        assert_eq!(escape_quotes(r#"Depot "North""#), r#"Depot \"North\""#);
    }

    #[test]
    fn test_header_line() {
        let line = header_line("dijkstra", &[("from", "A".to_string()), ("found", "true".to_string())]);
        assert_eq!(line, "H routegraph=1 records=1 command=dijkstra from=A found=true");
    }

    #[test]
    fn test_edge_and_distance_lines() {
        assert_eq!(edge_line("A", "B", 1.5), "E \"A\" \"B\" cost=1.5");
        assert_eq!(distance_line("A", "C", f64::INFINITY), "D \"A\" \"C\" cost=inf");
        assert_eq!(path_line(0, "A"), "P 0 \"A\"");
        assert_eq!(node_line("Hub", "degree", 4), "N \"Hub\" degree=4");
    }
}
