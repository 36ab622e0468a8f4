//! Graph session state and command results

use serde_json::json;

use super::parse::{ShellCommand, HELP_TEXT};
use wgraph_core::error::Result;
use wgraph_core::graph::report::bracketed;
use wgraph_core::graph::{Algorithm, Graph, Orientation, ShortestPathOutcome, Traversal};

/// Result of applying one shell command
#[derive(Debug)]
pub enum Response {
    /// A mutation succeeded
    Ack(String),
    Vertices(Vec<String>),
    Adjacent { vertex: String, targets: Vec<String> },
    Weight { from: String, to: String, weight: Option<i64> },
    Contains { vertex: String, present: bool },
    Info { orientation: Orientation, vertices: usize, edges: usize },
    Traversal(Traversal<String>),
    ShortestPath(ShortestPathOutcome<String>),
    Help,
    Quit,
}

/// One graph plus the commands that act on it
pub struct Session {
    graph: Graph<String>,
}

impl Session {
    pub fn new(orientation: Orientation) -> Self {
        Self {
            graph: Graph::new(orientation),
        }
    }

    pub fn graph(&self) -> &Graph<String> {
        &self.graph
    }

    pub fn apply(&mut self, command: ShellCommand) -> Result<Response> {
        let arrow = if self.graph.is_directed() { "->" } else { "--" };
        let response = match command {
            ShellCommand::AddVertex(v) => {
                let message = format!("added vertex {}", v);
                self.graph.add_vertex(v)?;
                Response::Ack(message)
            }
            ShellCommand::AddEdge { from, to, weight } => {
                let message = format!("added edge {} {} {} ({})", from, arrow, to, weight);
                self.graph.add_edge(from, to, weight)?;
                Response::Ack(message)
            }
            ShellCommand::RemoveVertex(v) => {
                self.graph.remove_vertex(&v);
                Response::Ack(format!("removed vertex {}", v))
            }
            ShellCommand::RemoveEdge { from, to } => {
                self.graph.remove_edge(&from, &to);
                Response::Ack(format!("removed edge {} {} {}", from, arrow, to))
            }
            ShellCommand::Adjacent(vertex) => {
                let targets = self.graph.adjacent(&vertex)?;
                Response::Adjacent { vertex, targets }
            }
            ShellCommand::Weight { from, to } => {
                let weight = self.graph.edge_weight(&from, &to);
                Response::Weight { from, to, weight }
            }
            ShellCommand::Contains(vertex) => {
                let present = self.graph.contains_vertex(&vertex);
                Response::Contains { vertex, present }
            }
            ShellCommand::Vertices => Response::Vertices(self.graph.vertices()),
            ShellCommand::Info => Response::Info {
                orientation: self.graph.orientation(),
                vertices: self.graph.vertex_count(),
                edges: self.graph.edge_count(),
            },
            ShellCommand::Query { algorithm, start } => match algorithm {
                Algorithm::Dfs => Response::Traversal(self.graph.dfs(&start)?),
                Algorithm::Bfs => Response::Traversal(self.graph.bfs(&start)?),
                Algorithm::Dijkstra => Response::ShortestPath(self.graph.dijkstra(&start)),
                Algorithm::BellmanFord => Response::ShortestPath(self.graph.bellman_ford(&start)),
            },
            ShellCommand::Help => Response::Help,
            ShellCommand::Quit => Response::Quit,
        };
        Ok(response)
    }
}

impl Response {
    /// Text for human output, `None` when there is nothing to print
    pub fn to_human(&self, quiet: bool) -> Option<String> {
        let text = match self {
            Response::Ack(_) if quiet => return None,
            Response::Ack(message) => message.clone(),
            Response::Vertices(vertices) => vertices.join(" "),
            Response::Adjacent { vertex, targets } => {
                format!("{}: {}", vertex, bracketed(targets))
            }
            Response::Weight { from, to, weight } => match weight {
                Some(w) => format!("{} -> {}: {}", from, to, w),
                None => format!("{} -> {}: no edge", from, to),
            },
            Response::Contains { present, .. } => present.to_string(),
            Response::Info {
                orientation,
                vertices,
                edges,
            } => format!(
                "Orientation: {}\nVertices: {}\nEdges: {}",
                orientation, vertices, edges
            ),
            Response::Traversal(traversal) => format!(
                "{} from {}: {}",
                traversal.algorithm.title(),
                traversal.start,
                traversal
            ),
            Response::ShortestPath(outcome) => outcome.to_string().trim_end().to_string(),
            Response::Help => HELP_TEXT.to_string(),
            Response::Quit => return None,
        };
        Some(text)
    }

    /// One JSON document per response, tagged with the command name
    pub fn to_json(&self, command: &str) -> Result<Option<serde_json::Value>> {
        let value = match self {
            Response::Ack(message) => json!({ "ok": true, "message": message }),
            Response::Vertices(vertices) => json!({ "vertices": vertices }),
            Response::Adjacent { vertex, targets } => {
                json!({ "vertex": vertex, "targets": targets })
            }
            Response::Weight { from, to, weight } => {
                json!({ "from": from, "to": to, "weight": weight })
            }
            Response::Contains { vertex, present } => {
                json!({ "vertex": vertex, "present": present })
            }
            Response::Info {
                orientation,
                vertices,
                edges,
            } => json!({ "orientation": orientation, "vertices": vertices, "edges": edges }),
            Response::Traversal(traversal) => serde_json::to_value(traversal)?,
            Response::ShortestPath(outcome) => serde_json::to_value(outcome)?,
            Response::Help => json!({ "help": HELP_TEXT }),
            Response::Quit => return Ok(None),
        };

        let mut envelope = json!({ "command": command });
        if let (Some(target), serde_json::Value::Object(fields)) = (envelope.as_object_mut(), value) {
            target.extend(fields);
        }
        Ok(Some(envelope))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::shell::parse::parse_line;
    use wgraph_core::error::GraphError;

    fn run(session: &mut Session, line: &str) -> Result<Response> {
        let command = parse_line(line)?.expect("command line");
        session.apply(command)
    }

    #[test]
    fn test_mutations_and_info() {
        let mut session = Session::new(Orientation::Undirected);
        run(&mut session, "add-edge X Y 1").unwrap();
        run(&mut session, "add-edge Y Z 2").unwrap();

        let info = run(&mut session, "info").unwrap();
        assert_eq!(
            info.to_human(false).unwrap(),
            "Orientation: undirected\nVertices: 3\nEdges: 2"
        );
        assert_eq!(session.graph().edge_weight(&"Z".to_string(), &"Y".to_string()), Some(2));
    }

    #[test]
    fn test_ack_suppressed_when_quiet() {
        let mut session = Session::new(Orientation::Directed);
        let ack = run(&mut session, "add-edge A B 5").unwrap();
        assert_eq!(ack.to_human(false).unwrap(), "added edge A -> B (5)");
        assert_eq!(ack.to_human(true), None);
    }

    #[test]
    fn test_adjacent_missing_vertex_is_not_found() {
        let mut session = Session::new(Orientation::Directed);
        let err = run(&mut session, "adjacent Q").unwrap_err();
        assert!(matches!(err, GraphError::NotFound { .. }));
    }

    #[test]
    fn test_traversal_text() {
        let mut session = Session::new(Orientation::Directed);
        run(&mut session, "add-edge A B 1").unwrap();
        run(&mut session, "add-edge A C 3").unwrap();
        let response = run(&mut session, "bfs A").unwrap();
        assert_eq!(response.to_human(false).unwrap(), "BFS from A: A B C");
    }

    #[test]
    fn test_dijkstra_negative_is_a_result_not_an_error() {
        let mut session = Session::new(Orientation::Directed);
        run(&mut session, "add-edge A B -1").unwrap();
        let response = run(&mut session, "dijkstra A").unwrap();
        assert_eq!(
            response.to_human(false).unwrap(),
            "Error: Dijkstra's algorithm does not support negative edge weights"
        );

        let json = response.to_json("dijkstra").unwrap().unwrap();
        assert_eq!(json["command"], "dijkstra");
        assert_eq!(json["status"], "negative_weight_unsupported");
    }

    #[test]
    fn test_json_envelope_merges_fields() {
        let mut session = Session::new(Orientation::Directed);
        run(&mut session, "add-edge A B 4").unwrap();
        let response = run(&mut session, "weight A B").unwrap();
        let json = response.to_json("weight").unwrap().unwrap();
        assert_eq!(json["command"], "weight");
        assert_eq!(json["weight"], 4);

        let missing = run(&mut session, "weight B A").unwrap();
        let json = missing.to_json("weight").unwrap().unwrap();
        assert!(json["weight"].is_null());
    }
}
