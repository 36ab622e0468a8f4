use crate::graph::adjacency::Adjacency;
use crate::graph::types::Edge;
use crate::graph::vertex::Vertex;

/// Add or replace the arc `from -> to`.
///
/// A replaced arc moves to the end of `from`'s list. Always counts as one
/// new edge.
pub fn add_edge<V: Vertex>(adjacency: &mut Adjacency<V>, from: V, to: V, weight: i64) -> usize {
    adjacency.insert_vertex(from.clone());
    adjacency.insert_vertex(to.clone());

    adjacency.remove_edge_from_vertex(&from, &to);
    if let Some(edges) = adjacency.edges_mut(&from) {
        edges.push(Edge::new(to, weight));
    }
    1
}

/// Delete `v` with its outgoing arcs and every arc pointing at it.
/// Returns the number of arcs removed.
pub fn remove_vertex<V: Vertex>(adjacency: &mut Adjacency<V>, v: &V) -> usize {
    let Some(outgoing) = adjacency.take_vertex(v) else {
        return 0;
    };

    let mut removed = outgoing.len();
    let remaining: Vec<V> = adjacency.vertices().cloned().collect();
    for u in &remaining {
        removed += adjacency.remove_all_edges_to(u, v);
    }
    removed
}

/// Delete the arc `from -> to`. Returns the number of arcs removed.
pub fn remove_edge<V: Vertex>(adjacency: &mut Adjacency<V>, from: &V, to: &V) -> usize {
    adjacency.remove_all_edges_to(from, to)
}
