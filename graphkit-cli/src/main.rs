//! CLI entry point for graphkit.
//!
//! Parses arguments with clap, runs the command, renders the result to
//! stdout and maps failures to a non-zero exit code. Logging is set up first
//! so every later step can emit diagnostics through `tracing`.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use graphkit_cli::{
    cli::{Cli, CliError, render_summary, run_cli},
    logging::{self, LoggingError},
};
use tracing::error;

fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let summary = run_cli(cli).context("failed to execute command")?;
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    render_summary(&summary, &mut writer).context("failed to render output")?;
    writer.flush().context("failed to flush output")?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main() {
        let cli_error = err.downcast_ref::<CliError>();
        let message = format!("{err:#}");
        error!(
            error = %message,
            code = cli_error.map(CliError::code),
            graph_code = cli_error.and_then(CliError::graph_code),
            "command execution failed"
        );
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

#[expect(
    clippy::print_stderr,
    reason = "Emit one-off diagnostic before tracing is initialized"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialize logging: {err}");
}
