use crate::graph::algos::shared::DistanceTable;
use crate::graph::model::Graph;
use crate::graph::types::{Algorithm, ShortestPathOutcome};
use crate::graph::vertex::Vertex;
use std::collections::HashSet;

/// Pick the unvisited vertex with the smallest finite distance.
///
/// Scans in vertex order and only replaces the candidate on a strictly
/// smaller distance, so the first minimal vertex wins ties.
fn closest_unvisited<'g, V: Vertex>(
    vertices: &[&'g V],
    table: &DistanceTable<'g, V>,
    visited: &HashSet<&'g V>,
) -> Option<&'g V> {
    let mut best: Option<(&'g V, i64)> = None;
    for &vertex in vertices {
        if visited.contains(vertex) {
            continue;
        }
        let Some(distance) = table.distance(vertex) else {
            continue;
        };
        if best.is_none_or(|(_, min)| distance < min) {
            best = Some((vertex, distance));
        }
    }
    best.map(|(vertex, _)| vertex)
}

/// Single-source shortest paths by Dijkstra's algorithm (linear-scan
/// selection, no heap).
///
/// Refuses to run when any edge in the graph has a negative weight.
#[tracing::instrument(skip(graph, start), fields(start = %start, vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn dijkstra<V: Vertex>(graph: &Graph<V>, start: &V) -> ShortestPathOutcome<V> {
    let adjacency = graph.adjacency();
    let Some(start) = adjacency.vertices().find(|&v| v == start) else {
        tracing::debug!("start vertex not found");
        return ShortestPathOutcome::StartNotFound {
            start: start.clone(),
        };
    };

    if graph.has_negative_weight() {
        tracing::debug!("negative edge weight present, refusing to run");
        return ShortestPathOutcome::NegativeWeightUnsupported;
    }

    let vertices: Vec<&V> = adjacency.vertices().collect();
    let mut table = DistanceTable::new(start);
    let mut visited: HashSet<&V> = HashSet::with_capacity(vertices.len());

    for _ in 0..vertices.len() {
        let Some(current) = closest_unvisited(&vertices, &table, &visited) else {
            break;
        };
        visited.insert(current);

        for edge in adjacency.edges(current).unwrap_or_default() {
            let neighbor = &edge.target;
            if visited.contains(neighbor) {
                continue;
            }
            if let Some(weight) = graph.edge_weight(current, neighbor) {
                table.relax(current, neighbor, weight);
            }
        }
    }

    tracing::debug!(settled = visited.len(), "dijkstra complete");
    ShortestPathOutcome::Distances(table.into_report(Algorithm::Dijkstra, start, &vertices))
}
