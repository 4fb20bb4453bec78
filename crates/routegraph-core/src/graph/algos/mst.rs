//! Minimum spanning structures
//!
//! Kruskal covers every component and so returns a forest on a disconnected
//! graph. Prim grows a single tree from its start node and only ever covers
//! that node's component.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::graph::algos::shared::HeapEntry;
use crate::graph::{Edge, Graph, UnionFind};

impl Graph {
    /// One record per connected node pair, keeping the cheapest parallel
    /// connection. The first record seen for a pair fixes its orientation.
    fn distinct_connections(&self) -> Vec<&Edge> {
        let mut positions: HashMap<(&str, &str), usize> = HashMap::new();
        let mut distinct: Vec<&Edge> = Vec::new();

        for edge in self.adjacency.values().flatten() {
            match positions.get(&edge.canonical_key()) {
                Some(&position) => {
                    if edge.cost < distinct[position].cost {
                        distinct[position] = edge;
                    }
                }
                None => {
                    positions.insert(edge.canonical_key(), distinct.len());
                    distinct.push(edge);
                }
            }
        }

        distinct
    }

    /// Minimum spanning forest by Kruskal's algorithm.
    ///
    /// Connections are taken cheapest first and kept whenever they join two
    /// different components.
    #[tracing::instrument(skip(self), fields(nodes = self.node_count()))]
    pub fn kruskal_mst(&self) -> Vec<Edge> {
        let mut candidates = self.distinct_connections();
        candidates.sort_by(|a, b| a.cost.total_cmp(&b.cost));

        let mut components = UnionFind::new(self.nodes.iter().map(String::as_str));
        let forest: Vec<Edge> = candidates
            .into_iter()
            .filter(|edge| components.union(&edge.from, &edge.to).merged())
            .cloned()
            .collect();

        tracing::debug!(
            edges = forest.len(),
            trees = components.component_count(),
            "kruskal forest built"
        );
        forest
    }

    /// Minimum spanning tree of `start`'s component by Prim's algorithm.
    ///
    /// An absent or unknown `start` falls back to the lexicographically
    /// smallest node.
    #[tracing::instrument(skip(self), fields(nodes = self.node_count()))]
    pub fn prim_mst(&self, start: Option<&str>) -> Vec<Edge> {
        let Some(start) = self.resolve_start(start) else {
            return Vec::new();
        };

        let mut visited: HashSet<&str> = HashSet::from([start]);
        let mut frontier: BinaryHeap<Reverse<HeapEntry<&Edge>>> = self
            .neighbors(start)
            .iter()
            .map(|edge| Reverse(HeapEntry::new(edge.cost, edge)))
            .collect();
        let mut tree = Vec::new();

        while visited.len() < self.node_count() {
            let Some(Reverse(HeapEntry { item: edge, .. })) = frontier.pop() else {
                break;
            };
            if !visited.insert(edge.to.as_str()) {
                continue;
            }

            tree.push(edge.clone());
            for next in self.neighbors(&edge.to) {
                if !visited.contains(next.to.as_str()) {
                    frontier.push(Reverse(HeapEntry::new(next.cost, next)));
                }
            }
        }

        tracing::debug!(start, edges = tree.len(), "prim tree built");
        tree
    }
}
