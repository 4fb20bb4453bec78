//! Graph algorithm implementations
//!
//! Each submodule adds methods to [`Graph`](crate::graph::Graph):
//! - `dijkstra`: weighted shortest path
//! - `search`: unweighted BFS/DFS path search
//! - `mst`: Kruskal and Prim spanning trees
//! - `floyd_warshall`: all-pairs distances
//! - `tour`: nearest-neighbour touring heuristic
//! - `ranking`: degree ranking by merge sort
//! - `shared`: priority-queue entries used by more than one algorithm

pub mod dijkstra;
pub mod floyd_warshall;
pub mod mst;
pub mod ranking;
pub mod search;
pub mod shared;
pub mod tour;

pub use dijkstra::WeightedPath;
pub use floyd_warshall::DistanceMatrix;
pub use ranking::{merge_sort_by_degree, NodeDegree};
pub use shared::HeapEntry;
