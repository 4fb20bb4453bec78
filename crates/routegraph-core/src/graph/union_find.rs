//! Disjoint-set forest keyed by node name, used for cycle detection in
//! Kruskal and for counting connected components.

use std::collections::HashMap;

/// Result of a [`UnionFind::union`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnionOutcome {
    /// The two sets were distinct and are now one
    Merged,
    /// Both nodes already shared a root
    AlreadyConnected,
    /// At least one node was never registered
    Missing,
}

impl UnionOutcome {
    pub fn merged(self) -> bool {
        self == UnionOutcome::Merged
    }
}

/// Union-find over string node names with path compression.
///
/// Every registered node starts as its own root. Parent links always lead to a
/// root; `find` re-points every node it walks past directly at that root.
#[derive(Debug, Clone, Default)]
pub struct UnionFind {
    parent: HashMap<String, String>,
}

impl UnionFind {
    /// Create singleton sets for every node
    pub fn new<I, S>(nodes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let parent = nodes
            .into_iter()
            .map(|node| {
                let node = node.into();
                (node.clone(), node)
            })
            .collect();
        Self { parent }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    pub fn contains(&self, node: &str) -> bool {
        self.parent.contains_key(node)
    }

    /// Representative of `node`'s set, or `None` if it was never registered
    pub fn find(&mut self, node: &str) -> Option<String> {
        let mut root = self.parent.get(node)?.as_str();
        let mut walked = Vec::new();
        let mut current = node;

        while root != current {
            walked.push(current.to_string());
            current = root;
            root = self.parent.get(current)?.as_str();
        }

        let root = root.to_string();
        for node in walked {
            if let Some(parent) = self.parent.get_mut(&node) {
                parent.clone_from(&root);
            }
        }
        Some(root)
    }

    /// Merge the sets holding `a` and `b`; `a`'s root is attached under `b`'s
    pub fn union(&mut self, a: &str, b: &str) -> UnionOutcome {
        let (Some(root_a), Some(root_b)) = (self.find(a), self.find(b)) else {
            return UnionOutcome::Missing;
        };

        if root_a == root_b {
            return UnionOutcome::AlreadyConnected;
        }

        self.parent.insert(root_a, root_b);
        UnionOutcome::Merged
    }

    /// Number of disjoint sets
    pub fn component_count(&self) -> usize {
        self.parent
            .iter()
            .filter(|(node, parent)| node == parent)
            .count()
    }
}
