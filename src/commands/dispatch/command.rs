//! Command trait and context for dispatching commands

use std::path::Path;
use std::time::Instant;

use crate::cli::{Cli, OutputFormat};
use wgraph_core::config::{Config, DEFAULT_CONFIG_FILE};
use wgraph_core::error::Result;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: Config,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    /// Resolve configuration: an explicit `--config` must exist, the
    /// default `wgraph.toml` is optional.
    pub fn load(cli: &'a Cli, start: Instant) -> Result<Self> {
        let config = match &cli.config {
            Some(path) => Config::load(path)?,
            None => Config::load_or_default(Path::new(DEFAULT_CONFIG_FILE))?,
        };
        Ok(Self { cli, config, start })
    }

    pub fn format(&self) -> OutputFormat {
        self.cli.format
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("wgraph {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("A weighted graph shell with traversal and shortest-path queries.");
        println!();
        println!("Run `wgraph --help` for usage information.");
        Ok(())
    }
}
