//! Weighted graph engine
//!
//! Provides the in-memory graph and the queries built on it:
//! - Adjacency store shared by both orientations
//! - Directed and undirected edge mutation policies
//! - DFS and BFS traversal
//! - Dijkstra and Bellman-Ford single-source shortest paths

pub mod adjacency;
pub mod algos;
pub mod model;
pub mod policy;
pub mod report;
pub mod types;
pub mod vertex;

pub use algos::{bellman_ford, bfs, dfs, dijkstra};
pub use model::Graph;
pub use types::{
    Algorithm, DistanceEntry, Edge, EdgeTriple, Orientation, ShortestPathOutcome,
    ShortestPathReport, Traversal,
};
pub use vertex::Vertex;

impl<V: Vertex> Graph<V> {
    /// Depth-first visit order from `start`
    pub fn dfs(&self, start: &V) -> crate::error::Result<Traversal<V>> {
        algos::dfs(self, start)
    }

    /// Breadth-first visit order from `start`
    pub fn bfs(&self, start: &V) -> crate::error::Result<Traversal<V>> {
        algos::bfs(self, start)
    }

    pub fn dijkstra(&self, start: &V) -> ShortestPathOutcome<V> {
        algos::dijkstra(self, start)
    }

    pub fn bellman_ford(&self, start: &V) -> ShortestPathOutcome<V> {
        algos::bellman_ford(self, start)
    }
}
