use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Outgoing edge stored in a vertex's adjacency list
///
/// Edges compare and hash by `target` alone, so an adjacency list can
/// never hold two entries for the same ordered pair.
#[derive(Debug, Clone, Serialize)]
pub struct Edge<V> {
    pub target: V,
    pub weight: i64,
}

impl<V> Edge<V> {
    pub fn new(target: V, weight: i64) -> Self {
        Edge { target, weight }
    }
}

impl<V: PartialEq> PartialEq for Edge<V> {
    fn eq(&self, other: &Self) -> bool {
        self.target == other.target
    }
}

impl<V: Eq> Eq for Edge<V> {}

impl<V: Hash> Hash for Edge<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.target.hash(state);
    }
}

/// Flattened `(from, to, weight)` view of one adjacency entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdgeTriple<V> {
    pub from: V,
    pub to: V,
    pub weight: i64,
}

/// Edge semantics chosen when a graph is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Each edge is a one-way arc
    #[default]
    Directed,
    /// Each edge is mirrored at both endpoints
    Undirected,
}

impl Orientation {
    pub fn is_directed(&self) -> bool {
        matches!(self, Orientation::Directed)
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Directed => write!(f, "directed"),
            Orientation::Undirected => write!(f, "undirected"),
        }
    }
}

impl FromStr for Orientation {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "directed" => Ok(Orientation::Directed),
            "undirected" => Ok(Orientation::Undirected),
            other => Err(format!(
                "unknown orientation '{}' (expected: directed, undirected)",
                other
            )),
        }
    }
}

/// Query algorithms exposed by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    Dfs,
    Bfs,
    Dijkstra,
    BellmanFord,
}

impl Algorithm {
    /// Heading used in human-readable reports
    pub fn title(&self) -> &'static str {
        match self {
            Algorithm::Dfs => "DFS",
            Algorithm::Bfs => "BFS",
            Algorithm::Dijkstra => "DIJKSTRA",
            Algorithm::BellmanFord => "BELLMAN-FORD",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Dfs => write!(f, "dfs"),
            Algorithm::Bfs => write!(f, "bfs"),
            Algorithm::Dijkstra => write!(f, "dijkstra"),
            Algorithm::BellmanFord => write!(f, "bellman-ford"),
        }
    }
}

/// Visit order produced by a traversal
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Traversal<V> {
    pub algorithm: Algorithm,
    pub start: V,
    pub order: Vec<V>,
}

/// Shortest distance from the start vertex to one vertex
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistanceEntry<V> {
    pub vertex: V,
    /// `None` when the vertex is unreachable from the start
    pub distance: Option<i64>,
    /// Vertices from start to `vertex`, empty when unreachable
    pub path: Vec<V>,
}

impl<V> DistanceEntry<V> {
    pub fn is_reachable(&self) -> bool {
        self.distance.is_some()
    }
}

/// Full distance table for a single-source query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPathReport<V> {
    pub algorithm: Algorithm,
    pub start: V,
    pub entries: Vec<DistanceEntry<V>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
}

impl<V: PartialEq> ShortestPathReport<V> {
    /// Look up the entry for one vertex
    pub fn entry(&self, vertex: &V) -> Option<&DistanceEntry<V>> {
        self.entries.iter().find(|e| &e.vertex == vertex)
    }

    /// Distance to one vertex, `None` if unreachable or unknown
    pub fn distance(&self, vertex: &V) -> Option<i64> {
        self.entry(vertex).and_then(|e| e.distance)
    }
}

/// Result of a shortest-path query
///
/// Algorithmic conditions are values here, not errors: callers branch on
/// the variant instead of handling a fault.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ShortestPathOutcome<V> {
    /// The query completed with a distance table
    Distances(ShortestPathReport<V>),
    /// The requested start vertex is not in the graph
    StartNotFound { start: V },
    /// Dijkstra was asked to run on a graph with a negative edge weight
    NegativeWeightUnsupported,
    /// Bellman-Ford found an edge still relaxable after |V|-1 passes
    NegativeCycleDetected,
}

impl<V> ShortestPathOutcome<V> {
    pub fn report(&self) -> Option<&ShortestPathReport<V>> {
        match self {
            ShortestPathOutcome::Distances(report) => Some(report),
            _ => None,
        }
    }

    pub fn into_report(self) -> Option<ShortestPathReport<V>> {
        match self {
            ShortestPathOutcome::Distances(report) => Some(report),
            _ => None,
        }
    }
}
