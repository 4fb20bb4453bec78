//! Unweighted path search
//!
//! Both searches ignore costs and return the first path they come across.
//! BFS paths have the fewest hops; DFS paths carry no such guarantee.

use std::collections::{HashSet, VecDeque};

use crate::graph::Graph;

fn owned(path: Vec<&str>) -> Vec<String> {
    path.into_iter().map(str::to_string).collect()
}

impl Graph {
    /// Resolve both endpoints against the node set, borrowing from the graph
    fn search_endpoints(&self, start: &str, target: &str) -> Option<(&str, &str)> {
        let start = self.nodes.get(start)?;
        let target = self.nodes.get(target)?;
        Some((start.as_str(), target.as_str()))
    }

    /// Breadth-first path search.
    ///
    /// Nodes are marked visited when first discovered and the search stops as
    /// soon as `target` is discovered.
    #[tracing::instrument(skip(self), fields(nodes = self.node_count()))]
    pub fn bfs_path(&self, start: &str, target: &str) -> Option<Vec<String>> {
        let (start, target) = self.search_endpoints(start, target)?;
        if start == target {
            return Some(vec![start.to_string()]);
        }

        let mut visited: HashSet<&str> = HashSet::from([start]);
        let mut queue: VecDeque<Vec<&str>> = VecDeque::from([vec![start]]);

        while let Some(path) = queue.pop_front() {
            let Some(&last) = path.last() else {
                continue;
            };

            for edge in self.neighbors(last) {
                let neighbor = edge.to.as_str();
                if !visited.insert(neighbor) {
                    continue;
                }

                let mut extended = path.clone();
                extended.push(neighbor);
                if neighbor == target {
                    tracing::debug!(hops = extended.len() - 1, "bfs path found");
                    return Some(owned(extended));
                }
                queue.push_back(extended);
            }
        }

        tracing::debug!("no bfs path");
        None
    }

    /// Depth-first path search.
    ///
    /// Runs on an explicit stack of `(node, next neighbour index)` frames so
    /// deep graphs cannot exhaust the call stack. Neighbours are tried in
    /// adjacency order and a node is dropped from the path when all of its
    /// neighbours are exhausted, which reproduces recursive backtracking
    /// exactly.
    #[tracing::instrument(skip(self), fields(nodes = self.node_count()))]
    pub fn dfs_path(&self, start: &str, target: &str) -> Option<Vec<String>> {
        let (start, target) = self.search_endpoints(start, target)?;
        if start == target {
            return Some(vec![start.to_string()]);
        }

        let mut visited: HashSet<&str> = HashSet::from([start]);
        let mut path: Vec<&str> = vec![start];
        let mut stack: Vec<(&str, usize)> = vec![(start, 0)];

        while let Some((node, next_index)) = stack.last_mut() {
            let neighbors = self.neighbors(*node);
            let mut next = None;
            while *next_index < neighbors.len() {
                let candidate = neighbors[*next_index].to.as_str();
                *next_index += 1;
                if !visited.contains(candidate) {
                    next = Some(candidate);
                    break;
                }
            }

            match next {
                Some(neighbor) => {
                    visited.insert(neighbor);
                    path.push(neighbor);
                    if neighbor == target {
                        tracing::debug!(hops = path.len() - 1, "dfs path found");
                        return Some(owned(path));
                    }
                    stack.push((neighbor, 0));
                }
                None => {
                    stack.pop();
                    path.pop();
                }
            }
        }

        tracing::debug!("no dfs path");
        None
    }
}
