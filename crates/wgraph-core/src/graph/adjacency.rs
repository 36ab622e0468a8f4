//! Insertion-ordered adjacency lists
//!
//! Vertices iterate in the order they were first added. Traversals and
//! shortest-path queries break ties by "first encountered", so this order
//! has to be deterministic.

use std::collections::HashMap;

use crate::graph::types::{Edge, EdgeTriple};
use crate::graph::vertex::Vertex;

/// Mapping from vertex identity to its outgoing edge list
#[derive(Debug, Clone)]
pub struct Adjacency<V> {
    order: Vec<V>,
    lists: HashMap<V, Vec<Edge<V>>>,
}

impl<V> Default for Adjacency<V> {
    fn default() -> Self {
        Self {
            order: Vec::new(),
            lists: HashMap::new(),
        }
    }
}

impl<V: Vertex> Adjacency<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, v: &V) -> bool {
        self.lists.contains_key(v)
    }

    /// Number of vertices
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Insert `v` with an empty edge list. Returns false if already present.
    pub fn insert_vertex(&mut self, v: V) -> bool {
        if self.lists.contains_key(&v) {
            return false;
        }
        self.lists.insert(v.clone(), Vec::new());
        self.order.push(v);
        true
    }

    /// Delete `v` and hand back its outgoing edges.
    ///
    /// Entries elsewhere that target `v` are left alone; the caller's
    /// mutation policy is responsible for those.
    pub fn take_vertex(&mut self, v: &V) -> Option<Vec<Edge<V>>> {
        let edges = self.lists.remove(v)?;
        self.order.retain(|u| u != v);
        Some(edges)
    }

    /// Outgoing edges of `v` in list order
    pub fn edges(&self, v: &V) -> Option<&[Edge<V>]> {
        self.lists.get(v).map(Vec::as_slice)
    }

    pub fn edges_mut(&mut self, v: &V) -> Option<&mut Vec<Edge<V>>> {
        self.lists.get_mut(v)
    }

    /// Vertices in insertion order
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.order.iter()
    }

    /// `(vertex, outgoing edges)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&V, &[Edge<V>])> + '_ {
        self.order
            .iter()
            .filter_map(move |v| self.lists.get(v).map(|edges| (v, edges.as_slice())))
    }

    /// Weight of the `from -> to` entry, if any
    pub fn weight(&self, from: &V, to: &V) -> Option<i64> {
        self.lists
            .get(from)?
            .iter()
            .find(|edge| &edge.target == to)
            .map(|edge| edge.weight)
    }

    /// Total number of adjacency-list entries
    pub fn entry_count(&self) -> usize {
        self.lists.values().map(Vec::len).sum()
    }

    /// Every entry as a `(from, to, weight)` triple, vertex order then list order
    pub fn triples(&self) -> Vec<EdgeTriple<V>> {
        self.iter()
            .flat_map(|(from, edges)| {
                edges.iter().map(move |edge| EdgeTriple {
                    from: from.clone(),
                    to: edge.target.clone(),
                    weight: edge.weight,
                })
            })
            .collect()
    }

    /// Remove at most one entry `from -> to`. Returns whether one was removed.
    pub fn remove_edge_from_vertex(&mut self, from: &V, to: &V) -> bool {
        let Some(edges) = self.lists.get_mut(from) else {
            return false;
        };
        match edges.iter().position(|edge| &edge.target == to) {
            Some(index) => {
                edges.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove every entry `from -> to`. Returns how many were removed.
    pub fn remove_all_edges_to(&mut self, from: &V, to: &V) -> usize {
        let Some(edges) = self.lists.get_mut(from) else {
            return 0;
        };
        let before = edges.len();
        edges.retain(|edge| &edge.target != to);
        before - edges.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Adjacency<&'static str> {
        let mut adj = Adjacency::new();
        for v in ["C", "A", "B"] {
            adj.insert_vertex(v);
        }
        adj.edges_mut(&"C").unwrap().push(Edge::new("A", 4));
        adj.edges_mut(&"C").unwrap().push(Edge::new("B", 2));
        adj.edges_mut(&"A").unwrap().push(Edge::new("B", 7));
        adj
    }

    #[test]
    fn test_insertion_order_is_kept() {
        let adj = sample();
        let order: Vec<_> = adj.vertices().copied().collect();
        assert_eq!(order, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_insert_vertex_is_idempotent() {
        let mut adj = sample();
        assert!(!adj.insert_vertex("A"));
        assert_eq!(adj.len(), 3);
        assert_eq!(adj.edges(&"A").unwrap().len(), 1);
    }

    #[test]
    fn test_take_vertex_preserves_remaining_order() {
        let mut adj = sample();
        let taken = adj.take_vertex(&"A").unwrap();
        assert_eq!(taken.len(), 1);
        let order: Vec<_> = adj.vertices().copied().collect();
        assert_eq!(order, vec!["C", "B"]);
        assert!(adj.take_vertex(&"A").is_none());
    }

    #[test]
    fn test_weight_lookup() {
        let adj = sample();
        assert_eq!(adj.weight(&"C", &"B"), Some(2));
        assert_eq!(adj.weight(&"B", &"C"), None);
        assert_eq!(adj.weight(&"Z", &"C"), None);
    }

    #[test]
    fn test_triples_follow_vertex_then_list_order() {
        let adj = sample();
        let triples: Vec<_> = adj
            .triples()
            .into_iter()
            .map(|t| (t.from, t.to, t.weight))
            .collect();
        assert_eq!(triples, vec![("C", "A", 4), ("C", "B", 2), ("A", "B", 7)]);
    }

    #[test]
    fn test_remove_edge_from_vertex_removes_one() {
        let mut adj = sample();
        assert!(adj.remove_edge_from_vertex(&"C", &"A"));
        assert!(!adj.remove_edge_from_vertex(&"C", &"A"));
        assert!(!adj.remove_edge_from_vertex(&"Z", &"A"));
        assert_eq!(adj.entry_count(), 2);
    }

    #[test]
    fn test_remove_all_edges_to() {
        let mut adj = sample();
        assert_eq!(adj.remove_all_edges_to(&"C", &"B"), 1);
        assert_eq!(adj.remove_all_edges_to(&"C", &"B"), 0);
        assert_eq!(adj.remove_all_edges_to(&"missing", &"B"), 0);
    }
}
