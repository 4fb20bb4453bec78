use serde::Serialize;

/// A weighted connection between two named nodes.
///
/// Inside a [`Graph`](super::Graph) every connection is held twice, once per
/// direction, so `from` is always the node whose adjacency list holds the
/// record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge {
    pub from: String,
    pub to: String,
    #[serde(serialize_with = "crate::report::serialize_cost")]
    pub cost: f64,
}

impl Edge {
    pub fn new(from: impl Into<String>, to: impl Into<String>, cost: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            cost,
        }
    }

    /// The same connection seen from the other endpoint
    pub fn reversed(&self) -> Self {
        Self {
            from: self.to.clone(),
            to: self.from.clone(),
            cost: self.cost,
        }
    }

    /// Endpoints ordered lexicographically; identical for both directions
    pub fn canonical_key(&self) -> (&str, &str) {
        if self.from <= self.to {
            (&self.from, &self.to)
        } else {
            (&self.to, &self.from)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_key_is_direction_independent() {
        let edge = Edge::new("Rosario", "Cordoba", 4.0);
        assert_eq!(edge.canonical_key(), ("Cordoba", "Rosario"));
        assert_eq!(edge.reversed().canonical_key(), ("Cordoba", "Rosario"));
    }

    #[test]
    fn test_reversed_keeps_cost() {
        let edge = Edge::new("A", "B", 2.5);
        let back = edge.reversed();
        assert_eq!(back.from, "B");
        assert_eq!(back.to, "A");
        assert_eq!(back.cost, 2.5);
    }

    #[test]
    fn test_serialize_shape() {
        let json = serde_json::to_value(Edge::new("A", "B", 3.0)).unwrap();
        assert_eq!(json, serde_json::json!({"from": "A", "to": "B", "cost": 3.0}));
    }
}
