use crate::graph::adjacency::Adjacency;
use crate::graph::types::Edge;
use crate::graph::vertex::Vertex;

/// Add or replace the edge `{from, to}`, writing both mirrored entries.
///
/// A self-loop is stored once. Always counts as one new edge.
pub fn add_edge<V: Vertex>(adjacency: &mut Adjacency<V>, from: V, to: V, weight: i64) -> usize {
    adjacency.insert_vertex(from.clone());
    adjacency.insert_vertex(to.clone());

    adjacency.remove_edge_from_vertex(&from, &to);
    if from != to {
        adjacency.remove_edge_from_vertex(&to, &from);
        if let Some(edges) = adjacency.edges_mut(&to) {
            edges.push(Edge::new(from.clone(), weight));
        }
    }
    if let Some(edges) = adjacency.edges_mut(&from) {
        edges.push(Edge::new(to, weight));
    }
    1
}

/// Delete `v` and the mirror entry of every edge incident to it.
/// Returns the number of edges removed.
pub fn remove_vertex<V: Vertex>(adjacency: &mut Adjacency<V>, v: &V) -> usize {
    let Some(incident) = adjacency.take_vertex(v) else {
        return 0;
    };

    for edge in &incident {
        if &edge.target != v {
            adjacency.remove_edge_from_vertex(&edge.target, v);
        }
    }
    incident.len()
}

/// Delete the edge `{from, to}`. Returns the number of edges removed.
pub fn remove_edge<V: Vertex>(adjacency: &mut Adjacency<V>, from: &V, to: &V) -> usize {
    if !adjacency.contains(from) || !adjacency.contains(to) {
        return 0;
    }

    if from == to {
        return usize::from(adjacency.remove_edge_from_vertex(from, to));
    }

    let removed_from = usize::from(adjacency.remove_edge_from_vertex(from, to));
    let removed_to = usize::from(adjacency.remove_edge_from_vertex(to, from));
    (removed_from + removed_to) / 2
}
