//! Human-readable report text
//!
//! Reports are meant for people, not parsers. Machine consumers should
//! serialize the result types to JSON instead.

use std::fmt;

use crate::graph::types::{ShortestPathOutcome, ShortestPathReport, Traversal};

pub const NEGATIVE_CYCLE_MESSAGE: &str = "Negative cycle detected! Shortest paths are undefined.";
pub const NEGATIVE_WEIGHT_MESSAGE: &str =
    "Error: Dijkstra's algorithm does not support negative edge weights";

/// Comma-separated list in brackets, `[A, B, C]`
pub fn bracketed<V: fmt::Display>(items: &[V]) -> String {
    let parts: Vec<String> = items.iter().map(|item| item.to_string()).collect();
    format!("[{}]", parts.join(", "))
}

impl<V: fmt::Display> fmt::Display for Traversal<V> {
    /// Space-separated visit order
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.order.iter().map(|v| v.to_string()).collect();
        write!(f, "{}", parts.join(" "))
    }
}

impl<V: fmt::Display> fmt::Display for ShortestPathReport<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== {} ===", self.algorithm.title())?;
        writeln!(f, "Start vertex: {}", self.start)?;
        writeln!(f)?;
        writeln!(f, "Shortest distances:")?;

        for entry in &self.entries {
            match entry.distance {
                None => writeln!(f, "{}: unreachable", entry.vertex)?,
                Some(distance) if entry.path.len() > 1 => writeln!(
                    f,
                    "{}: {} (path: {})",
                    entry.vertex,
                    distance,
                    bracketed(&entry.path)
                )?,
                Some(distance) => writeln!(f, "{}: {}", entry.vertex, distance)?,
            }
        }

        if !self.notes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Properties:")?;
            for note in &self.notes {
                writeln!(f, "- {}", note)?;
            }
        }
        Ok(())
    }
}

impl<V: fmt::Display> fmt::Display for ShortestPathOutcome<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShortestPathOutcome::Distances(report) => write!(f, "{}", report),
            ShortestPathOutcome::StartNotFound { start } => {
                writeln!(f, "Start vertex {} not found", start)
            }
            ShortestPathOutcome::NegativeWeightUnsupported => {
                writeln!(f, "{}", NEGATIVE_WEIGHT_MESSAGE)
            }
            ShortestPathOutcome::NegativeCycleDetected => writeln!(f, "{}", NEGATIVE_CYCLE_MESSAGE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::types::{Algorithm, DistanceEntry};

    #[test]
    fn test_bracketed() {
        assert_eq!(bracketed(&["A", "B"]), "[A, B]");
        assert_eq!(bracketed::<&str>(&[]), "[]");
    }

    #[test]
    fn test_traversal_text() {
        let traversal = Traversal {
            algorithm: Algorithm::Dfs,
            start: "A",
            order: vec!["A", "C", "B"],
        };
        assert_eq!(traversal.to_string(), "A C B");
    }

    #[test]
    fn test_report_text() {
        let report = ShortestPathReport {
            algorithm: Algorithm::Dijkstra,
            start: "A",
            entries: vec![
                DistanceEntry {
                    vertex: "A",
                    distance: Some(0),
                    path: vec!["A"],
                },
                DistanceEntry {
                    vertex: "B",
                    distance: Some(5),
                    path: vec!["A", "B"],
                },
                DistanceEntry {
                    vertex: "Z",
                    distance: None,
                    path: vec![],
                },
            ],
            notes: vec![],
        };

        let expected = "=== DIJKSTRA ===\n\
                        Start vertex: A\n\
                        \n\
                        Shortest distances:\n\
                        A: 0\n\
                        B: 5 (path: [A, B])\n\
                        Z: unreachable\n";
        assert_eq!(report.to_string(), expected);
    }

    #[test]
    fn test_report_notes_section() {
        let report = ShortestPathReport {
            algorithm: Algorithm::BellmanFord,
            start: "A",
            entries: vec![DistanceEntry {
                vertex: "A",
                distance: Some(0),
                path: vec!["A"],
            }],
            notes: vec!["Detects negative cycles".to_string()],
        };

        let text = report.to_string();
        assert!(text.starts_with("=== BELLMAN-FORD ===\n"));
        assert!(text.ends_with("\nProperties:\n- Detects negative cycles\n"));
    }

    #[test]
    fn test_outcome_sentinels() {
        let cycle: ShortestPathOutcome<&str> = ShortestPathOutcome::NegativeCycleDetected;
        assert_eq!(cycle.to_string().trim_end(), NEGATIVE_CYCLE_MESSAGE);

        let missing = ShortestPathOutcome::StartNotFound { start: "Q" };
        assert_eq!(missing.to_string(), "Start vertex Q not found\n");
    }
}
