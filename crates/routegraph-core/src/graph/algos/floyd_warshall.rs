use std::collections::BTreeMap;

use crate::graph::Graph;

/// All-pairs shortest distances over a fixed node enumeration.
///
/// Rows and columns follow the graph's sorted node order. Unreachable pairs
/// hold `f64::INFINITY`.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    nodes: Vec<String>,
    cells: Vec<f64>,
}

impl DistanceMatrix {
    fn new(nodes: Vec<String>) -> Self {
        let n = nodes.len();
        Self {
            nodes,
            cells: vec![f64::INFINITY; n * n],
        }
    }

    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn index_of(&self, node: &str) -> Option<usize> {
        self.nodes
            .binary_search_by(|probe| probe.as_str().cmp(node))
            .ok()
    }

    fn at(&self, i: usize, j: usize) -> f64 {
        self.cells[i * self.nodes.len() + j]
    }

    fn set(&mut self, i: usize, j: usize, value: f64) {
        let n = self.nodes.len();
        self.cells[i * n + j] = value;
    }

    /// Shortest distance from `a` to `b`; `None` when either node is unknown
    pub fn distance(&self, a: &str, b: &str) -> Option<f64> {
        Some(self.at(self.index_of(a)?, self.index_of(b)?))
    }

    /// Row by row view keyed by node name on both axes
    pub fn to_map(&self) -> BTreeMap<String, BTreeMap<String, f64>> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, from)| {
                let row = self
                    .nodes
                    .iter()
                    .enumerate()
                    .map(|(j, to)| (to.clone(), self.at(i, j)))
                    .collect();
                (from.clone(), row)
            })
            .collect()
    }
}

impl Graph {
    /// All-pairs shortest distances by Floyd-Warshall.
    ///
    /// Cells start at zero on the diagonal and at the cheapest direct
    /// connection elsewhere, then every node is tried as an intermediate.
    #[tracing::instrument(skip(self), fields(nodes = self.node_count()))]
    pub fn floyd_warshall(&self) -> DistanceMatrix {
        let mut matrix = DistanceMatrix::new(self.nodes.iter().cloned().collect());
        let n = matrix.len();

        for i in 0..n {
            for j in 0..n {
                let initial = if i == j {
                    0.0
                } else {
                    self.weight_between(&matrix.nodes[i], &matrix.nodes[j])
                };
                matrix.set(i, j, initial);
            }
        }

        for k in 0..n {
            for i in 0..n {
                let through = matrix.at(i, k);
                if through == f64::INFINITY {
                    continue;
                }
                for j in 0..n {
                    let candidate = through + matrix.at(k, j);
                    if candidate < matrix.at(i, j) {
                        matrix.set(i, j, candidate);
                    }
                }
            }
        }

        tracing::debug!(cells = n * n, "distance matrix computed");
        matrix
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::GraphBuilder;

    #[test]
    fn test_triangle_distances() {
        let graph = GraphBuilder::new()
            .with_edge("A", "B", 1.0)
            .with_edge("B", "C", 2.0)
            .with_edge("A", "C", 10.0)
            .build();
        let matrix = graph.floyd_warshall();

        assert_eq!(matrix.len(), 3);
        assert_eq!(matrix.distance("A", "C"), Some(3.0));
        assert_eq!(matrix.distance("C", "A"), Some(3.0));
        assert_eq!(matrix.distance("B", "B"), Some(0.0));
        assert_eq!(matrix.distance("A", "Z"), None);
    }

    #[test]
    fn test_unreachable_pairs_stay_infinite() {
        let graph = GraphBuilder::new()
            .with_edge("A", "B", 5.0)
            .with_edge("C", "D", 3.0)
            .build();
        let matrix = graph.floyd_warshall();

        assert!(matrix.distance("A", "D").is_some_and(f64::is_infinite));
        assert_eq!(matrix.distance("D", "C"), Some(3.0));

        let map = matrix.to_map();
        assert_eq!(map.len(), 4);
        assert!(map.values().all(|row| row.len() == 4));
        assert!(map["B"]["C"].is_infinite());
    }

    #[test]
    fn test_matches_dijkstra() {
        let graph = GraphBuilder::new()
            .with_edge("Depot", "North", 4.0)
            .with_edge("Depot", "South", 1.0)
            .with_edge("South", "North", 2.0)
            .with_edge("North", "Port", 1.5)
            .with_edge("Port", "Yard", 3.0)
            .build();
        let matrix = graph.floyd_warshall();

        for a in graph.nodes() {
            for b in graph.nodes() {
                let expected = graph.dijkstra(a, b).map(|p| p.cost).unwrap_or(f64::INFINITY);
                assert_eq!(matrix.distance(a, b), Some(expected), "{a} -> {b}");
            }
        }
    }

    #[test]
    fn test_empty_graph() {
        let matrix = GraphBuilder::new().build().floyd_warshall();
        assert!(matrix.is_empty());
        assert!(matrix.to_map().is_empty());
    }
}
