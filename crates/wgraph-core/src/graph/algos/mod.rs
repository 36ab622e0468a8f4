//! Graph algorithm implementations
//!
//! Contains concrete implementations of graph algorithms:
//! - `traversal`: Depth-first and breadth-first traversal
//! - `dijkstra`: Shortest paths for non-negative weights
//! - `bellman_ford`: Shortest paths with negative weights and cycle detection
//! - `shared`: Distance bookkeeping used by both shortest-path algorithms

pub mod bellman_ford;
pub mod dijkstra;
pub mod shared;
pub mod traversal;

pub use bellman_ford::{bellman_ford, BELLMAN_FORD_NOTES};
pub use dijkstra::dijkstra;
pub use traversal::{bfs, dfs};
