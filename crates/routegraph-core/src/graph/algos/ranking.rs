use serde::Serialize;

use crate::graph::Graph;

/// A node paired with the length of its adjacency list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeDegree {
    pub node: String,
    pub degree: usize,
}

impl NodeDegree {
    pub fn new(node: impl Into<String>, degree: usize) -> Self {
        Self {
            node: node.into(),
            degree,
        }
    }
}

impl Graph {
    /// Every node with its degree, highest degree first.
    ///
    /// Nodes of equal degree keep their sorted name order.
    #[tracing::instrument(skip(self), fields(nodes = self.node_count()))]
    pub fn sort_nodes_by_degree(&self) -> Vec<NodeDegree> {
        let degrees = self
            .nodes
            .iter()
            .map(|node| NodeDegree::new(node.as_str(), self.degree(node)))
            .collect();
        merge_sort_by_degree(degrees)
    }
}

/// Stable top-down merge sort, descending by degree.
///
/// On equal degree the entry from the left half is taken first.
pub fn merge_sort_by_degree(mut entries: Vec<NodeDegree>) -> Vec<NodeDegree> {
    if entries.len() <= 1 {
        return entries;
    }

    let right = entries.split_off(entries.len() / 2);
    let left = merge_sort_by_degree(entries);
    let right = merge_sort_by_degree(right);

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => l.degree >= r.degree,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };
        let next = if take_left { left.next() } else { right.next() };
        merged.extend(next);
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;

    fn degrees(entries: &[NodeDegree]) -> Vec<usize> {
        entries.iter().map(|e| e.degree).collect()
    }

    #[test]
    fn test_star_ranks_hub_first() {
        let graph = GraphBuilder::new()
            .with_edge("Hub", "A", 1.0)
            .with_edge("Hub", "B", 1.0)
            .with_edge("Hub", "C", 1.0)
            .with_edge("A", "B", 1.0)
            .build();
        let ranking = graph.sort_nodes_by_degree();

        assert_eq!(ranking[0], NodeDegree::new("Hub", 3));
        assert_eq!(degrees(&ranking), vec![3, 2, 2, 1]);
        let names: Vec<&str> = ranking.iter().map(|e| e.node.as_str()).collect();
        assert_eq!(names, vec!["Hub", "A", "B", "C"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let input = vec![
            NodeDegree::new("w", 1),
            NodeDegree::new("x", 2),
            NodeDegree::new("y", 1),
            NodeDegree::new("z", 2),
            NodeDegree::new("v", 1),
        ];
        let sorted = merge_sort_by_degree(input);
        let names: Vec<&str> = sorted.iter().map(|e| e.node.as_str()).collect();
        assert_eq!(names, vec!["x", "z", "w", "y", "v"]);
    }

    #[test]
    fn test_sort_is_idempotent_and_preserves_entries() {
        let input: Vec<NodeDegree> = (0..37)
            .map(|i| NodeDegree::new(format!("n{i}"), (i * 13) % 7))
            .collect();
        let once = merge_sort_by_degree(input.clone());
        let twice = merge_sort_by_degree(once.clone());

        assert_eq!(once, twice);
        assert!(once.windows(2).all(|w| w[0].degree >= w[1].degree));

        let mut before: Vec<_> = input.iter().map(|e| (&e.node, e.degree)).collect();
        let mut after: Vec<_> = once.iter().map(|e| (&e.node, e.degree)).collect();
        before.sort();
        after.sort();
        assert_eq!(before, after);
    }

    #[test]
    fn test_parallel_edges_and_self_loops_count_per_record() {
        let graph = GraphBuilder::new()
            .with_edge("A", "B", 1.0)
            .with_edge("A", "B", 2.0)
            .with_edge("C", "C", 1.0)
            .build();
        let ranking = graph.sort_nodes_by_degree();
        assert_eq!(
            ranking,
            vec![
                NodeDegree::new("A", 2),
                NodeDegree::new("B", 2),
                NodeDegree::new("C", 2),
            ]
        );
    }

    #[test]
    fn test_empty_inputs() {
        assert!(merge_sort_by_degree(Vec::new()).is_empty());
        assert!(GraphBuilder::new().build().sort_nodes_by_degree().is_empty());
    }
}
