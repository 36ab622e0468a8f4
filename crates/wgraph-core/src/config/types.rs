//! Configuration type definitions

use crate::graph::Orientation;
use serde::{Deserialize, Serialize};

/// Default config file name, resolved against the working directory
pub const DEFAULT_CONFIG_FILE: &str = "wgraph.toml";

/// Top-level wgraph configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Graph construction defaults
    #[serde(default)]
    pub graph: GraphConfig,

    /// Interactive shell settings
    #[serde(default)]
    pub shell: ShellConfig,
}

/// Defaults applied when a session creates its graph
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Directed or undirected edge semantics
    #[serde(default)]
    pub orientation: Orientation,
}

/// Shell session settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Prompt printed before each line in interactive mode
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Echo each command before its output
    #[serde(default)]
    pub echo: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            echo: false,
        }
    }
}

fn default_prompt() -> String {
    "wgraph> ".to_string()
}
