//! Result shapes handed to callers
//!
//! Each report wraps one algorithm's output in the shape consumers expect:
//! camelCase keys, a `totalCost` on every path and tree, and the string
//! `"Infinity"` wherever a cost is unbounded.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Serialize, Serializer};

use crate::graph::{DistanceMatrix, Edge, Graph, WeightedPath};

/// Serialize a cost, writing non-finite values as strings.
///
/// JSON has no literal for infinity, so unreachable costs become
/// `"Infinity"` / `"-Infinity"` instead of failing or turning into `null`.
pub fn serialize_cost<S>(cost: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if cost.is_finite() {
        serializer.serialize_f64(*cost)
    } else if cost.is_nan() {
        serializer.serialize_str("NaN")
    } else if *cost > 0.0 {
        serializer.serialize_str("Infinity")
    } else {
        serializer.serialize_str("-Infinity")
    }
}

/// A cost that serializes through [`serialize_cost`]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Cost(#[serde(serialize_with = "serialize_cost")] pub f64);

/// Weighted shortest path result
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathReport {
    pub path: Vec<String>,
    #[serde(serialize_with = "serialize_cost")]
    pub total_cost: f64,
}

impl PathReport {
    /// An empty path with infinite cost stands for "no path"
    pub fn from_path(found: Option<WeightedPath>) -> Self {
        match found {
            Some(WeightedPath { nodes, cost }) => Self {
                path: nodes,
                total_cost: cost,
            },
            None => Self {
                path: Vec::new(),
                total_cost: f64::INFINITY,
            },
        }
    }

    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }
}

/// Unweighted search result, echoing the query endpoints
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchReport {
    pub from: String,
    pub to: String,
    pub path: Vec<String>,
    #[serde(serialize_with = "serialize_cost")]
    pub total_cost: f64,
    pub found: bool,
}

impl SearchReport {
    /// The cost of a found path is recomputed from the graph's weights.
    pub fn new(graph: &Graph, from: &str, to: &str, found: Option<Vec<String>>) -> Self {
        let (path, total_cost, found) = match found {
            Some(path) => {
                let cost = graph.path_cost(&path);
                (path, cost, true)
            }
            None => (Vec::new(), f64::INFINITY, false),
        };
        Self {
            from: from.to_string(),
            to: to.to_string(),
            path,
            total_cost,
            found,
        }
    }
}

/// Spanning tree or forest result
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpanningReport {
    pub edges: Vec<Edge>,
    #[serde(serialize_with = "serialize_cost")]
    pub total_cost: f64,
    pub nodes_covered: BTreeSet<String>,
    pub edges_count: usize,
    /// Trees in the result; more than one means a forest
    pub components: usize,
}

impl SpanningReport {
    pub fn new(edges: Vec<Edge>) -> Self {
        let total_cost = edges.iter().map(|edge| edge.cost).sum();
        let nodes_covered: BTreeSet<String> = edges
            .iter()
            .flat_map(|edge| [edge.from.clone(), edge.to.clone()])
            .collect();
        let components = nodes_covered.len().saturating_sub(edges.len());
        Self {
            edges_count: edges.len(),
            edges,
            total_cost,
            nodes_covered,
            components,
        }
    }
}

/// Nearest-neighbour tour result
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TourReport {
    pub path: Vec<String>,
    #[serde(serialize_with = "serialize_cost")]
    pub total_cost: f64,
    pub all_nodes_visited: bool,
}

impl TourReport {
    pub fn new(graph: &Graph, path: Vec<String>) -> Self {
        Self {
            total_cost: graph.path_cost(&path),
            all_nodes_visited: path.len() == graph.node_count(),
            path,
        }
    }
}

/// All-pairs distance result keyed by node name on both axes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatrixReport {
    pub distances: BTreeMap<String, BTreeMap<String, Cost>>,
}

impl From<&DistanceMatrix> for MatrixReport {
    fn from(matrix: &DistanceMatrix) -> Self {
        let distances = matrix
            .to_map()
            .into_iter()
            .map(|(from, row)| {
                let row = row.into_iter().map(|(to, d)| (to, Cost(d))).collect();
                (from, row)
            })
            .collect();
        Self { distances }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;
    use serde_json::json;

    fn two_islands() -> Graph {
        GraphBuilder::new()
            .with_edge("A", "B", 5.0)
            .with_edge("C", "D", 3.0)
            .build()
    }

    #[test]
    fn test_cost_serializes_infinity_as_string() {
        assert_eq!(serde_json::to_value(Cost(2.5)).unwrap(), json!(2.5));
        assert_eq!(
            serde_json::to_value(Cost(f64::INFINITY)).unwrap(),
            json!("Infinity")
        );
        assert_eq!(
            serde_json::to_value(Cost(f64::NEG_INFINITY)).unwrap(),
            json!("-Infinity")
        );
    }

    #[test]
    fn test_path_report_not_found() {
        let report = PathReport::from_path(two_islands().dijkstra("A", "D"));
        assert!(!report.is_found());
        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            json!({"path": [], "totalCost": "Infinity"})
        );
    }

    #[test]
    fn test_path_report_found() {
        let report = PathReport::from_path(two_islands().dijkstra("B", "A"));
        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            json!({"path": ["B", "A"], "totalCost": 5.0})
        );
    }

    #[test]
    fn test_search_report_echoes_endpoints() {
        let graph = two_islands();
        let found = SearchReport::new(&graph, "C", "D", graph.bfs_path("C", "D"));
        assert!(found.found);
        assert_eq!(found.total_cost, 3.0);

        let missing = SearchReport::new(&graph, "A", "Z", graph.dfs_path("A", "Z"));
        assert_eq!(
            serde_json::to_value(&missing).unwrap(),
            json!({
                "from": "A",
                "to": "Z",
                "path": [],
                "totalCost": "Infinity",
                "found": false
            })
        );
    }

    #[test]
    fn test_spanning_report_counts_forest_components() {
        let graph = two_islands();

        let forest = SpanningReport::new(graph.kruskal_mst());
        assert_eq!(forest.total_cost, 8.0);
        assert_eq!(forest.edges_count, 2);
        assert_eq!(forest.components, 2);
        assert_eq!(forest.nodes_covered.len(), 4);

        let tree = SpanningReport::new(graph.prim_mst(Some("A")));
        assert_eq!(tree.total_cost, 5.0);
        assert_eq!(tree.components, 1);

        let value = serde_json::to_value(&tree).unwrap();
        assert_eq!(value["nodesCovered"], json!(["A", "B"]));
        assert_eq!(value["edgesCount"], json!(1));
        assert_eq!(value["edges"][0], json!({"from": "A", "to": "B", "cost": 5.0}));
    }

    #[test]
    fn test_tour_report() {
        let graph = two_islands();
        let report = TourReport::new(&graph, graph.nearest_neighbor_tour(Some("A")));
        assert_eq!(report.path, vec!["A", "B"]);
        assert_eq!(report.total_cost, 5.0);
        assert!(!report.all_nodes_visited);
        assert_eq!(
            serde_json::to_value(&report).unwrap()["allNodesVisited"],
            json!(false)
        );
    }

    #[test]
    fn test_matrix_report_shape() {
        let report = MatrixReport::from(&two_islands().floyd_warshall());
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["distances"]["A"]["B"], json!(5.0));
        assert_eq!(value["distances"]["A"]["A"], json!(0.0));
        assert_eq!(value["distances"]["A"]["C"], json!("Infinity"));
    }

    #[test]
    fn test_empty_reports() {
        let graph = GraphBuilder::new().build();
        let spanning = SpanningReport::new(graph.kruskal_mst());
        assert_eq!(spanning.components, 0);
        assert_eq!(spanning.total_cost, 0.0);
        assert!(TourReport::new(&graph, Vec::new()).all_nodes_visited);
        assert!(MatrixReport::from(&graph.floyd_warshall()).distances.is_empty());
    }
}
