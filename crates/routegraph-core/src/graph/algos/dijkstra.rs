use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use serde::Serialize;

use crate::graph::algos::shared::HeapEntry;
use crate::graph::Graph;

/// A path together with the cost the search computed for it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightedPath {
    pub nodes: Vec<String>,
    #[serde(serialize_with = "crate::report::serialize_cost")]
    pub cost: f64,
}

/// State tracked during a Dijkstra search
struct DijkstraState<'g> {
    distances: HashMap<&'g str, f64>,
    previous: HashMap<&'g str, &'g str>,
    settled: HashSet<&'g str>,
    heap: BinaryHeap<Reverse<HeapEntry<&'g str>>>,
}

impl<'g> DijkstraState<'g> {
    fn new(source: &'g str) -> Self {
        let mut state = Self {
            distances: HashMap::new(),
            previous: HashMap::new(),
            settled: HashSet::new(),
            heap: BinaryHeap::new(),
        };
        state.distances.insert(source, 0.0);
        state.heap.push(Reverse(HeapEntry::new(0.0, source)));
        state
    }

    fn best(&self, node: &str) -> f64 {
        self.distances.get(node).copied().unwrap_or(f64::INFINITY)
    }

    /// Walk predecessor links back from `destination` and reverse
    fn reconstruct(&self, destination: &'g str) -> Vec<String> {
        let mut path = vec![destination.to_string()];
        let mut current = destination;
        while let Some(&prev) = self.previous.get(current) {
            path.push(prev.to_string());
            current = prev;
        }
        path.reverse();
        path
    }
}

impl Graph {
    /// Cheapest path from `source` to `destination`.
    ///
    /// Returns `None` when either node is unknown or the destination cannot be
    /// reached. A node's path to itself is the single-node path with cost 0.
    ///
    /// Outdated heap entries are left in place and skipped when popped, which
    /// stands in for a decrease-key operation.
    #[tracing::instrument(skip(self), fields(nodes = self.node_count()))]
    pub fn dijkstra(&self, source: &str, destination: &str) -> Option<WeightedPath> {
        let (Some(source), Some(destination)) =
            (self.nodes.get(source), self.nodes.get(destination))
        else {
            tracing::debug!("endpoint not in graph");
            return None;
        };
        let (source, destination) = (source.as_str(), destination.as_str());

        let mut state = DijkstraState::new(source);

        while let Some(Reverse(HeapEntry { cost, item: current })) = state.heap.pop() {
            if cost > state.best(current) || !state.settled.insert(current) {
                continue;
            }
            if current == destination {
                break;
            }

            for edge in self.neighbors(current) {
                let neighbor = edge.to.as_str();
                if state.settled.contains(neighbor) {
                    continue;
                }
                let candidate = cost + edge.cost;
                if candidate < state.best(neighbor) {
                    state.distances.insert(neighbor, candidate);
                    state.previous.insert(neighbor, current);
                    state.heap.push(Reverse(HeapEntry::new(candidate, neighbor)));
                }
            }
        }

        if source != destination && !state.previous.contains_key(destination) {
            tracing::debug!("destination unreachable");
            return None;
        }

        let path = WeightedPath {
            nodes: state.reconstruct(destination),
            cost: state.best(destination),
        };
        tracing::debug!(hops = path.nodes.len() - 1, cost = path.cost, "shortest path found");
        Some(path)
    }
}
