//! Command dispatch logic for wgraph

use std::time::Instant;

use crate::cli::{Cli, Commands};
use wgraph_core::error::Result;

mod command;
mod macros;

pub use command::CommandContext;
use command::{Command, NoCommand};
use macros::trace_command;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let ctx = CommandContext::load(cli, start)?;
    trace_command!(cli, start, "load_config");

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let result = match self {
            Commands::Shell(args) => crate::commands::shell::execute(ctx, args),
            Commands::Demo => crate::commands::demo::execute(ctx),
        };
        trace_command!(ctx.cli, ctx.start, "execute_command");
        result
    }
}
