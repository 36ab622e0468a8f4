use crate::error::Result;
use crate::graph::adjacency::Adjacency;
use crate::graph::policy::{directed, undirected};
use crate::graph::types::{EdgeTriple, Orientation};
use crate::graph::vertex::Vertex;
use crate::{bail_invalid, bail_not_found};

/// Weighted graph over vertex identities of type `V`
///
/// Reads are shared between orientations; `add_edge`, `remove_vertex` and
/// `remove_edge` dispatch to the policy selected at construction.
#[derive(Debug, Clone)]
pub struct Graph<V> {
    adjacency: Adjacency<V>,
    orientation: Orientation,
    edge_count: usize,
}

impl<V: Vertex> Graph<V> {
    /// Create an empty graph with fixed orientation
    pub fn new(orientation: Orientation) -> Self {
        Self {
            adjacency: Adjacency::new(),
            orientation,
            edge_count: 0,
        }
    }

    pub fn directed() -> Self {
        Self::new(Orientation::Directed)
    }

    pub fn undirected() -> Self {
        Self::new(Orientation::Undirected)
    }

    fn ensure_present(v: &V) -> Result<()> {
        if v.is_absent() {
            bail_invalid!("vertex", format!("{:?} (vertex cannot be empty)", v));
        }
        Ok(())
    }

    /// Add `v` with no edges. Adding an existing vertex is a no-op.
    pub fn add_vertex(&mut self, v: V) -> Result<()> {
        Self::ensure_present(&v)?;
        if self.adjacency.insert_vertex(v) {
            tracing::trace!(vertices = self.adjacency.len(), "add_vertex");
        }
        Ok(())
    }

    /// Add or replace an edge, creating missing endpoints.
    ///
    /// Both identities are validated before anything is mutated. The edge
    /// counter grows by one even when an existing edge is replaced.
    pub fn add_edge(&mut self, from: V, to: V, weight: i64) -> Result<()> {
        Self::ensure_present(&from)?;
        Self::ensure_present(&to)?;

        tracing::trace!(from = %from, to = %to, weight, "add_edge");
        let added = match self.orientation {
            Orientation::Directed => directed::add_edge(&mut self.adjacency, from, to, weight),
            Orientation::Undirected => undirected::add_edge(&mut self.adjacency, from, to, weight),
        };
        self.edge_count += added;
        Ok(())
    }

    /// Remove `v` and every edge touching it. Missing vertices are ignored.
    pub fn remove_vertex(&mut self, v: &V) {
        let removed = match self.orientation {
            Orientation::Directed => directed::remove_vertex(&mut self.adjacency, v),
            Orientation::Undirected => undirected::remove_vertex(&mut self.adjacency, v),
        };
        tracing::trace!(vertex = %v, removed, "remove_vertex");
        self.edge_count = self.edge_count.saturating_sub(removed);
    }

    /// Remove the edge between `from` and `to`. Missing edges are ignored.
    pub fn remove_edge(&mut self, from: &V, to: &V) {
        let removed = match self.orientation {
            Orientation::Directed => directed::remove_edge(&mut self.adjacency, from, to),
            Orientation::Undirected => undirected::remove_edge(&mut self.adjacency, from, to),
        };
        tracing::trace!(from = %from, to = %to, removed, "remove_edge");
        self.edge_count = self.edge_count.saturating_sub(removed);
    }

    /// Targets of `v`'s outgoing edges in list order
    pub fn adjacent(&self, v: &V) -> Result<Vec<V>> {
        match self.adjacency.edges(v) {
            Some(edges) => Ok(edges.iter().map(|edge| edge.target.clone()).collect()),
            None => bail_not_found!("vertex", v),
        }
    }

    pub fn contains_vertex(&self, v: &V) -> bool {
        self.adjacency.contains(v)
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Maintained edge counter (arcs when directed, unordered pairs when
    /// undirected). Not recomputed from the adjacency lists.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_directed(&self) -> bool {
        self.orientation.is_directed()
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// All vertices in insertion order
    pub fn vertices(&self) -> Vec<V> {
        self.adjacency.vertices().cloned().collect()
    }

    /// Weight of the `from -> to` edge, `None` if either is missing
    pub fn edge_weight(&self, from: &V, to: &V) -> Option<i64> {
        self.adjacency.weight(from, to)
    }

    /// Every adjacency entry as a `(from, to, weight)` triple.
    ///
    /// Undirected edges appear once per direction.
    pub fn edges(&self) -> Vec<EdgeTriple<V>> {
        self.adjacency.triples()
    }

    pub fn has_negative_weight(&self) -> bool {
        self.adjacency
            .iter()
            .any(|(_, edges)| edges.iter().any(|edge| edge.weight < 0))
    }

    pub(crate) fn adjacency(&self) -> &Adjacency<V> {
        &self.adjacency
    }
}

impl<V: Vertex> Default for Graph<V> {
    fn default() -> Self {
        Self::directed()
    }
}
