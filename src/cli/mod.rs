//! CLI argument parsing for wgraph
//!
//! Supports global flags: --format, --quiet, --verbose, --log-level,
//! --log-json, --config

pub mod parse;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use parse::parse_output_format;
use wgraph_core::graph::Orientation;
pub use wgraph_core::format::OutputFormat;

/// wgraph - weighted graph shell
#[derive(Parser, Debug)]
#[command(name = "wgraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse_output_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (e.g. debug, trace, or a full directive)
    #[arg(long, global = true, env = "WGRAPH_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Configuration file (defaults to ./wgraph.toml when present)
    #[arg(long, global = true, env = "WGRAPH_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run an interactive graph session (reads commands from stdin)
    Shell(ShellArgs),

    /// Build two small sample graphs and print their traversals
    Demo,
}

#[derive(Args, Debug, Clone)]
pub struct ShellArgs {
    /// Start with an undirected graph
    #[arg(long, conflicts_with = "directed")]
    pub undirected: bool,

    /// Start with a directed graph
    #[arg(long)]
    pub directed: bool,

    /// Read commands from a file; the first failing line aborts the run
    #[arg(long)]
    pub script: Option<PathBuf>,
}

impl ShellArgs {
    /// Orientation requested on the command line, if any
    pub fn orientation(&self) -> Option<Orientation> {
        match (self.directed, self.undirected) {
            (true, _) => Some(Orientation::Directed),
            (_, true) => Some(Orientation::Undirected),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_shell_orientation_flags() {
        let cli = Cli::try_parse_from(["wgraph", "shell", "--undirected"]).unwrap();
        let Some(Commands::Shell(args)) = cli.command else {
            panic!("expected shell command");
        };
        assert_eq!(args.orientation(), Some(Orientation::Undirected));

        let cli = Cli::try_parse_from(["wgraph", "shell"]).unwrap();
        let Some(Commands::Shell(args)) = cli.command else {
            panic!("expected shell command");
        };
        assert_eq!(args.orientation(), None);
    }

    #[test]
    fn test_conflicting_orientation_flags() {
        let result = Cli::try_parse_from(["wgraph", "shell", "--directed", "--undirected"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_format_after_subcommand() {
        let cli = Cli::try_parse_from(["wgraph", "demo", "--format", "json"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
    }
}
