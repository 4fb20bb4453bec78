use std::collections::HashSet;

use crate::graph::Graph;

impl Graph {
    /// Greedy tour that always moves to the cheapest directly connected
    /// unvisited node.
    ///
    /// The tour starts at `start`, or at the smallest node when `start` is
    /// absent or unknown. It stops once every node is visited or the current
    /// node has no direct connection to any unvisited node. Among equally
    /// cheap candidates the first in node order wins.
    #[tracing::instrument(skip(self), fields(nodes = self.node_count()))]
    pub fn nearest_neighbor_tour(&self, start: Option<&str>) -> Vec<String> {
        let Some(start) = self.resolve_start(start) else {
            return Vec::new();
        };

        let mut visited: HashSet<&str> = HashSet::from([start]);
        let mut tour = vec![start.to_string()];
        let mut current = start;

        while visited.len() < self.node_count() {
            let mut nearest: Option<(&str, f64)> = None;
            for candidate in self.nodes.iter().map(String::as_str) {
                if visited.contains(candidate) {
                    continue;
                }
                let weight = self.weight_between(current, candidate);
                if weight.is_finite() && nearest.is_none_or(|(_, best)| weight < best) {
                    nearest = Some((candidate, weight));
                }
            }

            let Some((next, _)) = nearest else {
                tracing::debug!(at = current, "no unvisited neighbour reachable");
                break;
            };
            visited.insert(next);
            tour.push(next.to_string());
            current = next;
        }

        tour
    }
}
