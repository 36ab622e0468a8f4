//! `wgraph shell` - line-oriented graph session
//!
//! Reads one command per line from stdin or a script file. Faults on a
//! line are reported and the session continues, except in script mode
//! where the first fault ends the run with that fault's exit code.

pub mod parse;
pub mod session;

use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal, Write};

use crate::cli::{OutputFormat, ShellArgs};
use crate::commands::dispatch::CommandContext;
use parse::parse_line;
use session::{Response, Session};
use wgraph_core::error::{GraphError, Result};
use wgraph_core::trace_time;

/// Rendering options for one shell run
pub struct ShellOptions {
    pub format: OutputFormat,
    pub quiet: bool,
    pub echo: bool,
    /// Printed before each line when reading from a terminal
    pub prompt: Option<String>,
    /// Stop at the first failing line
    pub abort_on_error: bool,
}

pub fn execute(ctx: &CommandContext, args: &ShellArgs) -> Result<()> {
    let orientation = args
        .orientation()
        .unwrap_or(ctx.config.graph.orientation);
    let mut session = Session::new(orientation);
    tracing::debug!(%orientation, script = ?args.script, "shell start");

    let interactive = args.script.is_none() && io::stdin().is_terminal();
    let options = ShellOptions {
        format: ctx.format(),
        quiet: ctx.cli.quiet,
        echo: ctx.config.shell.echo,
        prompt: (interactive && ctx.format() == OutputFormat::Human)
            .then(|| ctx.config.shell.prompt.clone()),
        abort_on_error: args.script.is_some(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match &args.script {
        Some(path) => {
            let file = File::open(path).map_err(|e| {
                GraphError::invalid_value("script", format!("{}: {}", path.display(), e))
            })?;
            run(&mut session, BufReader::new(file), &mut out, &options)
        }
        None => run(&mut session, io::stdin().lock(), &mut out, &options),
    }
}

/// Drive a session over `input`, writing results to `out`
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    out: &mut W,
    options: &ShellOptions,
) -> Result<()> {
    let start = std::time::Instant::now();
    let mut executed = 0usize;

    prompt(out, options)?;
    for (index, line) in input.lines().enumerate() {
        let line = line?;
        let line_no = index + 1;

        if options.echo && !line.trim().is_empty() {
            writeln!(out, "{}{}", options.prompt.as_deref().unwrap_or("> "), line.trim())?;
        }

        match run_line(session, &line, out, options) {
            Ok(true) => {
                executed += 1;
            }
            Ok(false) => break,
            Err(e) if options.abort_on_error => {
                tracing::debug!(line = line_no, error = %e, "script aborted");
                return Err(e);
            }
            Err(e) => report(&e, line_no, options),
        }
        prompt(out, options)?;
    }

    trace_time!(start, "shell_session", executed = executed);
    Ok(())
}

/// Run one line. Returns `Ok(false)` when the session should end.
fn run_line<W: Write>(
    session: &mut Session,
    line: &str,
    out: &mut W,
    options: &ShellOptions,
) -> Result<bool> {
    let Some(command) = parse_line(line)? else {
        return Ok(true);
    };
    let name = command.name();
    let response = session.apply(command)?;
    if matches!(response, Response::Quit) {
        return Ok(false);
    }

    match options.format {
        OutputFormat::Human => {
            if let Some(text) = response.to_human(options.quiet) {
                writeln!(out, "{}", text)?;
            }
        }
        OutputFormat::Json => {
            if let Some(value) = response.to_json(name)? {
                writeln!(out, "{}", serde_json::to_string(&value)?)?;
            }
        }
    }
    out.flush()?;
    Ok(true)
}

fn prompt<W: Write>(out: &mut W, options: &ShellOptions) -> Result<()> {
    if let Some(prompt) = &options.prompt {
        write!(out, "{}", prompt)?;
        out.flush()?;
    }
    Ok(())
}

/// Report a per-line fault on stderr and keep going
fn report(error: &GraphError, line_no: usize, options: &ShellOptions) {
    match options.format {
        OutputFormat::Json => {
            let mut value = error.to_json();
            value["error"]["line"] = serde_json::json!(line_no);
            eprintln!("{}", value);
        }
        OutputFormat::Human if !options.quiet => eprintln!("line {}: error: {}", line_no, error),
        OutputFormat::Human => {}
    }
}
