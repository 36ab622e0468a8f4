//! Integration tests for `wgraph shell`

mod support;

use predicates::prelude::*;
use support::{wgraph, write_script, WEIGHTED_GRAPH};
use tempfile::tempdir;

#[test]
fn test_shell_dijkstra_report() {
    let dir = tempdir().unwrap();
    let input = format!("{}dijkstra A\n", WEIGHTED_GRAPH);

    wgraph(&dir)
        .args(["--quiet", "shell"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("=== DIJKSTRA ===\nStart vertex: A\n"))
        .stdout(predicate::str::contains("D: 7 (path: [A, B, D])"))
        .stdout(predicate::str::contains("E: 11 (path: [A, B, D, E])"));
}

#[test]
fn test_shell_traversals_and_counts() {
    let dir = tempdir().unwrap();
    let input = format!("{}info\ndfs A\nbfs A\nadjacent C\n", WEIGHTED_GRAPH);

    wgraph(&dir)
        .args(["--quiet", "shell"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::eq(
            "Orientation: directed\n\
             Vertices: 5\n\
             Edges: 7\n\
             DFS from A: A B D E C\n\
             BFS from A: A B C D E\n\
             C: [D, C]\n",
        ));
}

#[test]
fn test_shell_bellman_ford_negative_cycle() {
    let dir = tempdir().unwrap();
    wgraph(&dir)
        .args(["--quiet", "shell"])
        .write_stdin("add-edge A B 1\nadd-edge B C -2\nadd-edge C B 1\nbellman-ford A\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Negative cycle detected! Shortest paths are undefined.",
        ));
}

#[test]
fn test_shell_bellman_ford_properties() {
    let dir = tempdir().unwrap();
    wgraph(&dir)
        .args(["--quiet", "shell"])
        .write_stdin("add-edge S A 4\nadd-edge S B 5\nadd-edge B A -3\nbellman-ford S\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("=== BELLMAN-FORD ==="))
        .stdout(predicate::str::contains("A: 2 (path: [S, B, A])"))
        .stdout(predicate::str::contains("Properties:\n- Works with negative edge weights"));
}

#[test]
fn test_shell_reports_fault_and_continues() {
    let dir = tempdir().unwrap();
    wgraph(&dir)
        .arg("shell")
        .write_stdin("dfs Q\nadd-vertex A\nvertices\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("added vertex A\nA\n"))
        .stderr(predicate::str::contains("line 1: error: start vertex Q not found"));
}

#[test]
fn test_shell_undirected_flag() {
    let dir = tempdir().unwrap();
    wgraph(&dir)
        .args(["--quiet", "shell", "--undirected"])
        .write_stdin("add-edge X Y 1\nadd-edge Y Z 2\nremove-vertex Y\ninfo\nweight Y X\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Vertices: 2\nEdges: 0"))
        .stdout(predicate::str::contains("Y -> X: no edge"));
}

#[test]
fn test_script_runs_to_completion() {
    let dir = tempdir().unwrap();
    let script = write_script(&dir, "graph.wg", &["# sample", "add-edge A B 2", "", "dijkstra A"]);

    wgraph(&dir)
        .args(["--quiet", "shell", "--script"])
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("B: 2 (path: [A, B])"));
}

#[test]
fn test_script_aborts_on_not_found_with_exit_3() {
    let dir = tempdir().unwrap();
    let script = write_script(&dir, "graph.wg", &["add-vertex A", "adjacent Q", "vertices"]);

    wgraph(&dir)
        .args(["shell", "--script"])
        .arg(&script)
        .assert()
        .code(3)
        .stdout(predicate::str::contains("vertices").not())
        .stderr(predicate::str::contains("vertex Q not found"));
}

#[test]
fn test_script_aborts_on_parse_error_with_exit_2() {
    let dir = tempdir().unwrap();
    let script = write_script(&dir, "graph.wg", &["add-edge A B heavy"]);

    wgraph(&dir)
        .args(["--format", "json", "shell", "--script"])
        .arg(&script)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"invalid_value\""));
}

#[test]
fn test_missing_script_is_usage_error() {
    let dir = tempdir().unwrap();
    wgraph(&dir)
        .args(["shell", "--script", "absent.wg"])
        .assert()
        .code(2);
}

#[test]
fn test_shell_json_lines() {
    let dir = tempdir().unwrap();
    let output = wgraph(&dir)
        .args(["--format", "json", "shell"])
        .write_stdin("add-edge A B -1\ndijkstra A\nbellman-ford A\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1]["status"], "negative_weight_unsupported");
    assert_eq!(lines[2]["command"], "bellman-ford");
    assert_eq!(lines[2]["status"], "distances");
    assert_eq!(lines[2]["entries"][1]["distance"], -1);
}

#[test]
fn test_echo_from_config() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("wgraph.toml"), "[shell]\necho = true\n").unwrap();

    wgraph(&dir)
        .args(["--quiet", "shell"])
        .write_stdin("add-vertex A\nvertices\n")
        .assert()
        .success()
        .stdout(predicate::eq("> add-vertex A\n> vertices\nA\n"));
}
