use crate::graph::types::{Algorithm, DistanceEntry, ShortestPathReport};
use crate::graph::vertex::Vertex;
use std::collections::HashMap;

/// Tentative distances and predecessors for a single-source query.
///
/// A vertex without a distance is at "infinity".
pub struct DistanceTable<'g, V> {
    distances: HashMap<&'g V, i64>,
    previous: HashMap<&'g V, &'g V>,
}

impl<'g, V: Vertex> DistanceTable<'g, V> {
    pub fn new(start: &'g V) -> Self {
        let mut distances = HashMap::new();
        distances.insert(start, 0);
        Self {
            distances,
            previous: HashMap::new(),
        }
    }

    pub fn distance(&self, v: &V) -> Option<i64> {
        self.distances.get(v).copied()
    }

    /// Distance to `to` through `from` when it beats the current one
    pub fn improved_via(&self, from: &V, to: &V, weight: i64) -> Option<i64> {
        let candidate = self.distance(from)?.checked_add(weight)?;
        match self.distance(to) {
            Some(current) if candidate >= current => None,
            _ => Some(candidate),
        }
    }

    /// Relax the edge `from -> to`. Returns true if the distance improved.
    pub fn relax(&mut self, from: &'g V, to: &'g V, weight: i64) -> bool {
        match self.improved_via(from, to, weight) {
            Some(distance) => {
                self.distances.insert(to, distance);
                self.previous.insert(to, from);
                true
            }
            None => false,
        }
    }

    /// Walk predecessors back from `target`.
    ///
    /// Empty unless the walk ends at `start`.
    pub fn path_to(&self, start: &V, target: &'g V) -> Vec<V> {
        let mut path = vec![target.clone()];
        let mut current = target;
        while let Some(&prev) = self.previous.get(current) {
            // A predecessor chain can only loop if a negative cycle slipped
            // through; stop instead of spinning.
            if path.len() > self.distances.len() {
                return Vec::new();
            }
            path.push(prev.clone());
            current = prev;
        }
        path.reverse();

        if path.first() == Some(start) {
            path
        } else {
            Vec::new()
        }
    }

    /// Build the per-vertex report in `vertices` order
    pub fn into_report(
        self,
        algorithm: Algorithm,
        start: &V,
        vertices: &[&'g V],
    ) -> ShortestPathReport<V> {
        let entries = vertices
            .iter()
            .map(|&v| match self.distance(v) {
                Some(distance) => DistanceEntry {
                    vertex: v.clone(),
                    distance: Some(distance),
                    path: self.path_to(start, v),
                },
                None => DistanceEntry {
                    vertex: v.clone(),
                    distance: None,
                    path: Vec::new(),
                },
            })
            .collect();

        ShortestPathReport {
            algorithm,
            start: start.clone(),
            entries,
            notes: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relax_from_infinity_is_ignored() {
        let (a, b, c) = ("A", "B", "C");
        let mut table = DistanceTable::new(&a);
        assert!(!table.relax(&b, &c, 1));
        assert_eq!(table.distance(&c), None);
    }

    #[test]
    fn test_relax_requires_strict_improvement() {
        let (a, b) = ("A", "B");
        let mut table = DistanceTable::new(&a);
        assert!(table.relax(&a, &b, 4));
        assert!(!table.relax(&a, &b, 4));
        assert!(table.relax(&a, &b, 3));
        assert_eq!(table.distance(&b), Some(3));
    }

    #[test]
    fn test_relax_does_not_overflow() {
        let (a, b, c) = ("A", "B", "C");
        let mut table = DistanceTable::new(&a);
        table.relax(&a, &b, i64::MAX);
        assert!(!table.relax(&b, &c, 1));
        assert_eq!(table.distance(&c), None);
    }

    #[test]
    fn test_path_reconstruction() {
        let (a, b, c) = ("A", "B", "C");
        let mut table = DistanceTable::new(&a);
        table.relax(&a, &b, 1);
        table.relax(&b, &c, 1);
        assert_eq!(table.path_to(&a, &c), vec!["A", "B", "C"]);
        assert_eq!(table.path_to(&a, &a), vec!["A"]);
    }

    #[test]
    fn test_report_marks_unreachable() {
        let (a, b, z) = ("A", "B", "Z");
        let mut table = DistanceTable::new(&a);
        table.relax(&a, &b, 2);
        let report = table.into_report(Algorithm::Dijkstra, &a, &[&a, &b, &z]);

        assert_eq!(report.distance(&b), Some(2));
        assert_eq!(report.entry(&b).unwrap().path, vec!["A", "B"]);
        let unreachable = report.entry(&z).unwrap();
        assert!(!unreachable.is_reachable());
        assert!(unreachable.path.is_empty());
    }
}
