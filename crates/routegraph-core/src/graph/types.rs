use std::collections::{BTreeMap, BTreeSet};

use crate::graph::edge::Edge;
use crate::graph::union_find::UnionFind;

/// Immutable snapshot of a weighted undirected graph.
///
/// Nodes are kept in a sorted set, so every enumeration of the node set is
/// lexicographic and reproducible. Each connection appears in both endpoints'
/// adjacency lists; adjacency lists keep insertion order.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    pub(crate) nodes: BTreeSet<String>,
    pub(crate) adjacency: BTreeMap<String, Vec<Edge>>,
    pub(crate) connections: Vec<Edge>,
}

impl Graph {
    /// All node names, sorted
    pub fn nodes(&self) -> &BTreeSet<String> {
        &self.nodes
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of inserted connections (parallel connections counted separately)
    pub fn edge_count(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, node: &str) -> bool {
        self.nodes.contains(node)
    }

    /// Connections as they were inserted, one record per connection
    pub fn edges(&self) -> &[Edge] {
        &self.connections
    }

    /// Outgoing adjacency records of `node`; empty for unknown nodes
    pub fn neighbors(&self, node: &str) -> &[Edge] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of adjacency records held by `node`
    pub fn degree(&self, node: &str) -> usize {
        self.neighbors(node).len()
    }

    /// Lexicographically smallest node
    pub fn first_node(&self) -> Option<&str> {
        self.nodes.first().map(String::as_str)
    }

    /// `start` when it names a node of this graph, otherwise the first node
    pub fn resolve_start<'a>(&'a self, start: Option<&'a str>) -> Option<&'a str> {
        match start {
            Some(node) if self.contains(node) => Some(node),
            _ => self.first_node(),
        }
    }

    /// Cheapest direct connection from `a` to `b`, or infinity when there is none
    pub fn weight_between(&self, a: &str, b: &str) -> f64 {
        self.neighbors(a)
            .iter()
            .filter(|edge| edge.to == b)
            .map(|edge| edge.cost)
            .fold(f64::INFINITY, f64::min)
    }

    /// Sum of direct connection costs along `path`.
    ///
    /// Paths of fewer than two nodes cost nothing. Returns infinity as soon as
    /// two consecutive nodes are not directly connected.
    pub fn path_cost<S: AsRef<str>>(&self, path: &[S]) -> f64 {
        let mut total = 0.0;
        for pair in path.windows(2) {
            let weight = self.weight_between(pair[0].as_ref(), pair[1].as_ref());
            if weight.is_infinite() {
                return f64::INFINITY;
            }
            total += weight;
        }
        total
    }

    /// Number of connected components
    pub fn component_count(&self) -> usize {
        let mut sets = UnionFind::new(self.nodes.iter().map(String::as_str));
        for edge in &self.connections {
            sets.union(&edge.from, &edge.to);
        }
        sets.component_count()
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::GraphBuilder;

    fn triangle() -> super::Graph {
        GraphBuilder::new()
            .with_edge("A", "B", 1.0)
            .with_edge("B", "C", 2.0)
            .with_edge("A", "C", 10.0)
            .build()
    }

    #[test]
    fn test_nodes_are_union_of_endpoints() {
        let graph = triangle();
        let nodes: Vec<&str> = graph.nodes().iter().map(String::as_str).collect();
        assert_eq!(nodes, vec!["A", "B", "C"]);
        assert_eq!(graph.edge_count(), 3);
        assert!(graph.neighbors("A").iter().all(|e| graph.contains(&e.to)));
    }

    #[test]
    fn test_adjacency_is_symmetric() {
        let graph = triangle();
        assert_eq!(graph.weight_between("A", "B"), 1.0);
        assert_eq!(graph.weight_between("B", "A"), 1.0);
        assert_eq!(graph.degree("A"), 2);
        assert_eq!(graph.neighbors("C")[0].from, "C");
    }

    #[test]
    fn test_weight_between_uses_cheapest_parallel_edge() {
        let graph = GraphBuilder::new()
            .with_edge("A", "B", 4.0)
            .with_edge("A", "B", 2.0)
            .build();
        assert_eq!(graph.weight_between("A", "B"), 2.0);
        assert_eq!(graph.weight_between("B", "A"), 2.0);
        assert_eq!(graph.degree("A"), 2);
    }

    #[test]
    fn test_weight_between_unconnected() {
        let graph = triangle();
        assert!(graph.weight_between("A", "Z").is_infinite());
        assert!(graph.weight_between("Z", "A").is_infinite());
    }

    #[test]
    fn test_path_cost() {
        let graph = triangle();
        assert_eq!(graph.path_cost(&["A", "B", "C"]), 3.0);
        assert_eq!(graph.path_cost(&["A"]), 0.0);
        assert_eq!(graph.path_cost::<&str>(&[]), 0.0);
    }

    #[test]
    fn test_path_cost_broken_path_is_infinite() {
        let graph = GraphBuilder::new()
            .with_edge("A", "B", 1.0)
            .with_edge("C", "D", 1.0)
            .build();
        assert!(graph.path_cost(&["A", "B", "C", "D"]).is_infinite());
    }

    #[test]
    fn test_resolve_start() {
        let graph = triangle();
        assert_eq!(graph.resolve_start(Some("B")), Some("B"));
        assert_eq!(graph.resolve_start(Some("Nowhere")), Some("A"));
        assert_eq!(graph.resolve_start(None), Some("A"));
        assert_eq!(GraphBuilder::new().build().resolve_start(None), None);
    }

    #[test]
    fn test_component_count() {
        let graph = GraphBuilder::new()
            .with_edge("A", "B", 5.0)
            .with_edge("C", "D", 3.0)
            .build();
        assert_eq!(graph.component_count(), 2);
        assert_eq!(triangle().component_count(), 1);
        assert_eq!(GraphBuilder::new().build().component_count(), 0);
    }
}
