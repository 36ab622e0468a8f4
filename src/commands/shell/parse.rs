//! Line parser for shell commands

use wgraph_core::error::{GraphError, Result};
use wgraph_core::{bail_usage, graph::Algorithm};

/// One parsed shell line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    AddVertex(String),
    AddEdge { from: String, to: String, weight: i64 },
    RemoveVertex(String),
    RemoveEdge { from: String, to: String },
    Adjacent(String),
    Weight { from: String, to: String },
    Contains(String),
    Vertices,
    Info,
    Query { algorithm: Algorithm, start: String },
    Help,
    Quit,
}

impl ShellCommand {
    /// Name as typed in the shell
    pub fn name(&self) -> &'static str {
        match self {
            ShellCommand::AddVertex(_) => "add-vertex",
            ShellCommand::AddEdge { .. } => "add-edge",
            ShellCommand::RemoveVertex(_) => "remove-vertex",
            ShellCommand::RemoveEdge { .. } => "remove-edge",
            ShellCommand::Adjacent(_) => "adjacent",
            ShellCommand::Weight { .. } => "weight",
            ShellCommand::Contains(_) => "contains",
            ShellCommand::Vertices => "vertices",
            ShellCommand::Info => "info",
            ShellCommand::Query { algorithm, .. } => match algorithm {
                Algorithm::Dfs => "dfs",
                Algorithm::Bfs => "bfs",
                Algorithm::Dijkstra => "dijkstra",
                Algorithm::BellmanFord => "bellman-ford",
            },
            ShellCommand::Help => "help",
            ShellCommand::Quit => "quit",
        }
    }
}

pub const HELP_TEXT: &str = "\
Commands:
  add-vertex V              Add a vertex
  add-edge FROM TO WEIGHT   Add or replace a weighted edge
  remove-vertex V           Remove a vertex and its edges
  remove-edge FROM TO       Remove an edge
  adjacent V                List targets of V's edges
  weight FROM TO            Show the weight of an edge
  contains V                Check whether V exists
  vertices                  List vertices in insertion order
  info                      Show orientation and counts
  dfs V | bfs V             Traverse from V
  dijkstra V                Shortest paths (non-negative weights)
  bellman-ford V            Shortest paths (negative weights allowed)
  help                      Show this help
  quit | exit               End the session
Lines starting with # are ignored.";

/// Parse one input line. Blank lines and `#` comments yield `None`.
pub fn parse_line(line: &str) -> Result<Option<ShellCommand>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut tokens = line.split_whitespace();
    let Some(name) = tokens.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = tokens.collect();

    let command = match name {
        "add-vertex" => ShellCommand::AddVertex(one(name, &args, "V")?),
        "add-edge" => {
            let [from, to, weight]: [&str; 3] = exactly(name, &args, "FROM TO WEIGHT")?;
            ShellCommand::AddEdge {
                from: from.to_string(),
                to: to.to_string(),
                weight: parse_weight(weight)?,
            }
        }
        "remove-vertex" => ShellCommand::RemoveVertex(one(name, &args, "V")?),
        "remove-edge" => {
            let [from, to]: [&str; 2] = exactly(name, &args, "FROM TO")?;
            ShellCommand::RemoveEdge {
                from: from.to_string(),
                to: to.to_string(),
            }
        }
        "adjacent" => ShellCommand::Adjacent(one(name, &args, "V")?),
        "weight" => {
            let [from, to]: [&str; 2] = exactly(name, &args, "FROM TO")?;
            ShellCommand::Weight {
                from: from.to_string(),
                to: to.to_string(),
            }
        }
        "contains" => ShellCommand::Contains(one(name, &args, "V")?),
        "vertices" => nullary(name, &args, ShellCommand::Vertices)?,
        "info" => nullary(name, &args, ShellCommand::Info)?,
        "dfs" => query(Algorithm::Dfs, name, &args)?,
        "bfs" => query(Algorithm::Bfs, name, &args)?,
        "dijkstra" => query(Algorithm::Dijkstra, name, &args)?,
        "bellman-ford" => query(Algorithm::BellmanFord, name, &args)?,
        "help" => ShellCommand::Help,
        "quit" | "exit" => ShellCommand::Quit,
        other => bail_usage!(format!("unknown command '{}' (try 'help')", other)),
    };
    Ok(Some(command))
}

fn exactly<'a, const N: usize>(name: &str, args: &[&'a str], usage: &str) -> Result<[&'a str; N]> {
    <[&str; N]>::try_from(args)
        .map_err(|_| GraphError::UsageError(format!("usage: {} {}", name, usage)))
}

fn one(name: &str, args: &[&str], usage: &str) -> Result<String> {
    let [v]: [&str; 1] = exactly(name, args, usage)?;
    Ok(v.to_string())
}

fn nullary(name: &str, args: &[&str], command: ShellCommand) -> Result<ShellCommand> {
    if !args.is_empty() {
        bail_usage!(format!("usage: {} (takes no arguments)", name));
    }
    Ok(command)
}

fn query(algorithm: Algorithm, name: &str, args: &[&str]) -> Result<ShellCommand> {
    Ok(ShellCommand::Query {
        algorithm,
        start: one(name, args, "V")?,
    })
}

fn parse_weight(raw: &str) -> Result<i64> {
    raw.parse::<i64>()
        .map_err(|_| GraphError::invalid_value("weight", format!("'{}' (expected an integer)", raw)))
}
