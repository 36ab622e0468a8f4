//! `wgraph demo` - quick check on two small graphs

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use wgraph_core::error::Result;
use wgraph_core::graph::{Graph, Orientation};

#[derive(Debug, Serialize)]
struct DemoSummary {
    orientation: Orientation,
    vertices: usize,
    edges: usize,
    start: String,
    dfs: Vec<String>,
    bfs: Vec<String>,
}

fn summarize(graph: &Graph<String>, start: &str) -> Result<DemoSummary> {
    let start = start.to_string();
    Ok(DemoSummary {
        orientation: graph.orientation(),
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
        dfs: graph.dfs(&start)?.order,
        bfs: graph.bfs(&start)?.order,
        start,
    })
}

fn build(orientation: Orientation, vertices: &[&str], edges: &[(&str, &str, i64)]) -> Result<Graph<String>> {
    let mut graph = Graph::new(orientation);
    for v in vertices {
        graph.add_vertex(v.to_string())?;
    }
    for (from, to, weight) in edges {
        graph.add_edge(from.to_string(), to.to_string(), *weight)?;
    }
    Ok(graph)
}

/// Build both sample graphs and summarize them
fn run_demo() -> Result<[DemoSummary; 2]> {
    let directed = build(
        Orientation::Directed,
        &["A", "B", "C"],
        &[("A", "B", 1), ("B", "C", 2), ("A", "C", 3)],
    )?;
    let undirected = build(
        Orientation::Undirected,
        &["X", "Y", "Z"],
        &[("X", "Y", 1), ("Y", "Z", 2)],
    )?;
    Ok([summarize(&directed, "A")?, summarize(&undirected, "X")?])
}

fn render_human(summaries: &[DemoSummary]) -> String {
    let mut sections = Vec::new();
    for summary in summaries {
        let heading = if summary.orientation.is_directed() {
            "Directed graph:"
        } else {
            "Undirected graph:"
        };
        sections.push(format!(
            "{}\nVertices: {}\nEdges: {}\nDFS from {}: {}\nBFS from {}: {}",
            heading,
            summary.vertices,
            summary.edges,
            summary.start,
            summary.dfs.join(" "),
            summary.start,
            summary.bfs.join(" "),
        ));
    }
    format!("=== QUICK TEST ===\n{}", sections.join("\n\n"))
}

pub fn execute(ctx: &CommandContext) -> Result<()> {
    let summaries = run_demo()?;
    match ctx.format() {
        OutputFormat::Human => println!("{}", render_human(&summaries)),
        OutputFormat::Json => {
            let [directed, undirected] = &summaries;
            let value = serde_json::json!({ "directed": directed, "undirected": undirected });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }
    Ok(())
}
