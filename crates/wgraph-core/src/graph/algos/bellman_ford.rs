use crate::graph::algos::shared::DistanceTable;
use crate::graph::model::Graph;
use crate::graph::types::{Algorithm, ShortestPathOutcome};
use crate::graph::vertex::Vertex;

/// Properties listed under a Bellman-Ford report
pub const BELLMAN_FORD_NOTES: [&str; 3] = [
    "Works with negative edge weights",
    "Detects negative cycles",
    "Time complexity: O(V*E)",
];

/// Single-source shortest paths by Bellman-Ford.
///
/// Runs at most |V|-1 relaxation passes over the flat edge list and stops
/// after the first pass that changes nothing. A final pass that can still
/// relax an edge means a negative cycle is reachable from `start`.
#[tracing::instrument(skip(graph, start), fields(start = %start, vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn bellman_ford<V: Vertex>(graph: &Graph<V>, start: &V) -> ShortestPathOutcome<V> {
    let adjacency = graph.adjacency();
    let Some(start) = adjacency.vertices().find(|&v| v == start) else {
        tracing::debug!("start vertex not found");
        return ShortestPathOutcome::StartNotFound {
            start: start.clone(),
        };
    };

    let vertices: Vec<&V> = adjacency.vertices().collect();
    let edges: Vec<(&V, &V, i64)> = adjacency
        .iter()
        .flat_map(|(from, list)| list.iter().map(move |edge| (from, &edge.target, edge.weight)))
        .collect();

    let mut table = DistanceTable::new(start);
    let mut passes = 0;
    for _ in 1..vertices.len() {
        passes += 1;
        let mut changed = false;
        for &(from, to, weight) in &edges {
            changed |= table.relax(from, to, weight);
        }
        if !changed {
            break;
        }
    }

    let negative_cycle = edges
        .iter()
        .any(|&(from, to, weight)| table.improved_via(from, to, weight).is_some());
    if negative_cycle {
        tracing::debug!(passes, "negative cycle detected");
        return ShortestPathOutcome::NegativeCycleDetected;
    }

    tracing::debug!(passes, edges = edges.len(), "bellman-ford complete");
    let mut report = table.into_report(Algorithm::BellmanFord, start, &vertices);
    report.notes = BELLMAN_FORD_NOTES.iter().map(|s| s.to_string()).collect();
    ShortestPathOutcome::Distances(report)
}
