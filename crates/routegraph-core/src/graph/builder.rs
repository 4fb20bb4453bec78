use serde_json::Value;

use crate::config::IngestConfig;
use crate::graph::edge::Edge;
use crate::graph::types::Graph;
use crate::source::RawEdge;

/// Weight given to a connection whose cost is missing or unparseable
pub const DEFAULT_COST: f64 = 1.0;

/// Accumulates connections and produces an immutable [`Graph`].
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    graph: Graph,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register both endpoints and store the connection in both directions.
    ///
    /// The weight is taken as given; no sign check is made.
    pub fn add_edge(
        &mut self,
        a: impl Into<String>,
        b: impl Into<String>,
        weight: f64,
    ) -> &mut Self {
        let edge = Edge::new(a, b, weight);
        let graph = &mut self.graph;

        graph.nodes.insert(edge.from.clone());
        graph.nodes.insert(edge.to.clone());
        graph
            .adjacency
            .entry(edge.from.clone())
            .or_default()
            .push(edge.clone());
        graph
            .adjacency
            .entry(edge.to.clone())
            .or_default()
            .push(edge.reversed());
        graph.connections.push(edge);
        self
    }

    /// Owned variant of [`add_edge`](Self::add_edge) for chaining
    pub fn with_edge(
        mut self,
        a: impl Into<String>,
        b: impl Into<String>,
        weight: f64,
    ) -> Self {
        self.add_edge(a, b, weight);
        self
    }

    /// Add every usable record, using the default field names and cost
    pub fn add_records(&mut self, records: &[RawEdge]) -> &mut Self {
        self.add_records_with(records, &IngestConfig::default())
    }

    /// Add every usable record.
    ///
    /// Records without an origin or destination are skipped. A cost that is
    /// absent, not a number, or not finite becomes `config.default_cost`.
    #[tracing::instrument(skip_all, fields(records = records.len()))]
    pub fn add_records_with(
        &mut self,
        records: &[RawEdge],
        config: &IngestConfig,
    ) -> &mut Self {
        let mut skipped = 0usize;
        let mut defaulted = 0usize;

        for (index, record) in records.iter().enumerate() {
            let from = record.get(&config.from_field).and_then(node_name);
            let to = record.get(&config.to_field).and_then(node_name);
            let (Some(from), Some(to)) = (from, to) else {
                tracing::trace!(index, "skipping record without endpoints");
                skipped += 1;
                continue;
            };

            let cost = match record.get(&config.cost_field).and_then(parse_cost) {
                Some(cost) => cost,
                None => {
                    tracing::trace!(
                        index,
                        from = %from,
                        to = %to,
                        "cost missing or invalid, using default"
                    );
                    defaulted += 1;
                    config.default_cost
                }
            };

            self.add_edge(from, to, cost);
        }

        tracing::debug!(skipped, defaulted, "ingested edge records");
        self
    }

    pub fn build(self) -> Graph {
        tracing::debug!(
            nodes = self.graph.node_count(),
            edges = self.graph.edge_count(),
            "built graph"
        );
        self.graph
    }

    /// Build a graph straight from raw records with default ingestion settings
    pub fn from_records(records: &[RawEdge]) -> Graph {
        let mut builder = Self::new();
        builder.add_records(records);
        builder.build()
    }
}

/// Render a record value as a node name; null means absent
fn node_name(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(name) => Some(name.clone()),
        other => Some(other.to_string()),
    }
}

/// Read a cost from a number or numeric text, rejecting non-finite values
fn parse_cost(value: &Value) -> Option<f64> {
    let cost = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    cost.is_finite().then_some(cost)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_add_edge_registers_both_directions() {
        let graph = GraphBuilder::new().with_edge("A", "B", 3.0).build();
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.neighbors("A"), &[Edge::new("A", "B", 3.0)]);
        assert_eq!(graph.neighbors("B"), &[Edge::new("B", "A", 3.0)]);
        assert_eq!(graph.edges(), &[Edge::new("A", "B", 3.0)]);
    }

    #[test]
    fn test_add_edge_accepts_any_sign() {
        let graph = GraphBuilder::new().with_edge("A", "B", -2.0).build();
        assert_eq!(graph.weight_between("A", "B"), -2.0);
    }

    #[test]
    fn test_records_with_numeric_and_text_costs() {
        let records = vec![
            RawEdge::new("A", "B", Some(json!(2.5))),
            RawEdge::new("B", "C", Some(json!(" 4 "))),
        ];
        let graph = GraphBuilder::from_records(&records);
        assert_eq!(graph.weight_between("A", "B"), 2.5);
        assert_eq!(graph.weight_between("B", "C"), 4.0);
    }

    #[test]
    fn test_records_fall_back_to_default_cost() {
        let records = vec![
            RawEdge::new("A", "B", None),
            RawEdge::new("B", "C", Some(json!("cheap"))),
            RawEdge::new("C", "D", Some(json!(null))),
            RawEdge::new("D", "E", Some(json!("NaN"))),
            RawEdge::new("E", "F", Some(json!(true))),
        ];
        let graph = GraphBuilder::from_records(&records);
        for (a, b) in [("A", "B"), ("B", "C"), ("C", "D"), ("D", "E"), ("E", "F")] {
            assert_eq!(graph.weight_between(a, b), DEFAULT_COST, "{a}-{b}");
        }
    }

    #[test]
    fn test_records_missing_endpoints_are_skipped() {
        let records = vec![
            RawEdge::default().with_field("from", json!("A")),
            RawEdge::default().with_field("to", json!("B")),
            RawEdge::new("A", json!(null), Some(json!(1))),
            RawEdge::new("C", "D", Some(json!(7))),
        ];
        let graph = GraphBuilder::from_records(&records);
        assert_eq!(graph.node_count(), 2);
        assert!(graph.contains("C"));
        assert!(!graph.contains("A"));
    }

    #[test]
    fn test_records_with_scalar_node_names() {
        let records = vec![RawEdge::new(json!(101), json!(202), Some(json!(3)))];
        let graph = GraphBuilder::from_records(&records);
        assert!(graph.contains("101"));
        assert_eq!(graph.weight_between("101", "202"), 3.0);
    }

    #[test]
    fn test_records_with_custom_fields() {
        let config = IngestConfig {
            default_cost: 9.0,
            from_field: "origin".to_string(),
            to_field: "destination".to_string(),
            cost_field: "km".to_string(),
        };
        let records = vec![
            RawEdge::default()
                .with_field("origin", json!("Salta"))
                .with_field("destination", json!("Jujuy"))
                .with_field("km", json!(90)),
            RawEdge::default()
                .with_field("origin", json!("Salta"))
                .with_field("destination", json!("Tucuman")),
        ];

        let mut builder = GraphBuilder::new();
        builder.add_records_with(&records, &config);
        let graph = builder.build();
        assert_eq!(graph.weight_between("Salta", "Jujuy"), 90.0);
        assert_eq!(graph.weight_between("Salta", "Tucuman"), 9.0);
    }

    #[test]
    fn test_empty_records() {
        let graph = GraphBuilder::from_records(&[]);
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
    }
}
