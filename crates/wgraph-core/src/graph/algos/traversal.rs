use crate::bail_not_found;
use crate::error::Result;
use crate::graph::model::Graph;
use crate::graph::types::{Algorithm, Traversal};
use crate::graph::vertex::Vertex;
use std::collections::{HashSet, VecDeque};

/// Depth-first traversal from `start` with an explicit stack.
///
/// Neighbors are pushed in reverse list order so they pop in list order,
/// matching what a recursive DFS would visit.
#[tracing::instrument(skip(graph, start), fields(start = %start, vertices = graph.vertex_count()))]
pub fn dfs<V: Vertex>(graph: &Graph<V>, start: &V) -> Result<Traversal<V>> {
    let adjacency = graph.adjacency();
    let Some(start) = adjacency.vertices().find(|&v| v == start) else {
        bail_not_found!("start vertex", start);
    };

    let mut visited: HashSet<&V> = HashSet::with_capacity(adjacency.len());
    let mut order = Vec::new();
    let mut stack: Vec<&V> = vec![start];

    while let Some(current) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }
        order.push(current.clone());

        let edges = adjacency.edges(current).unwrap_or_default();
        for edge in edges.iter().rev() {
            if !visited.contains(&edge.target) {
                stack.push(&edge.target);
            }
        }
    }

    tracing::debug!(visited = order.len(), "dfs complete");
    Ok(Traversal {
        algorithm: Algorithm::Dfs,
        start: start.clone(),
        order,
    })
}

/// Breadth-first traversal from `start` with an explicit queue.
///
/// Vertices are marked when enqueued, so none is queued twice.
#[tracing::instrument(skip(graph, start), fields(start = %start, vertices = graph.vertex_count()))]
pub fn bfs<V: Vertex>(graph: &Graph<V>, start: &V) -> Result<Traversal<V>> {
    let adjacency = graph.adjacency();
    let Some(start) = adjacency.vertices().find(|&v| v == start) else {
        bail_not_found!("start vertex", start);
    };

    let mut visited: HashSet<&V> = HashSet::with_capacity(adjacency.len());
    let mut order = Vec::new();
    let mut queue: VecDeque<&V> = VecDeque::new();

    visited.insert(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        order.push(current.clone());

        let edges = adjacency.edges(current).unwrap_or_default();
        for edge in edges {
            if visited.insert(&edge.target) {
                queue.push_back(&edge.target);
            }
        }
    }

    tracing::debug!(visited = order.len(), "bfs complete");
    Ok(Traversal {
        algorithm: Algorithm::Bfs,
        start: start.clone(),
        order,
    })
}
