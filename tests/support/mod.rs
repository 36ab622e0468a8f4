use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Get a Command for wgraph, isolated from any wgraph.toml in the tree
pub fn wgraph(dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("wgraph");
    cmd.current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env_remove("WGRAPH_LOG")
        .env_remove("WGRAPH_LOG_LEVEL")
        .env_remove("WGRAPH_CONFIG");
    cmd
}

/// Write a shell script into the temp dir and return its path
#[allow(dead_code)]
pub fn write_script(dir: &TempDir, name: &str, lines: &[&str]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, lines.join("\n") + "\n").unwrap();
    path
}

/// The weighted directed graph used across shell tests
#[allow(dead_code)]
pub const WEIGHTED_GRAPH: &str = "\
add-edge A B 5
add-edge A C 3
add-edge B D 2
add-edge C D 7
add-edge D E 4
add-edge E A 6
add-edge C C 1
";
