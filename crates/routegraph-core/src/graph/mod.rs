//! Weighted undirected graph engine
//!
//! Provides the in-memory graph and the algorithms run over it:
//! - Dijkstra shortest path and unweighted BFS/DFS path search
//! - Kruskal and Prim minimum spanning trees/forests
//! - Floyd-Warshall all-pairs distances
//! - Nearest-neighbour touring heuristic
//! - Degree ranking by merge sort
//!
//! A [`Graph`] is only ever produced by [`GraphBuilder`] and is immutable
//! afterwards, so every algorithm is a read-only computation over one snapshot.

pub mod algos;
pub mod builder;
pub mod edge;
pub mod types;
pub mod union_find;

pub use algos::{DistanceMatrix, NodeDegree, WeightedPath};
pub use builder::{GraphBuilder, DEFAULT_COST};
pub use edge::Edge;
pub use types::Graph;
pub use union_find::{UnionFind, UnionOutcome};
