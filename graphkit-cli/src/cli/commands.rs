//! Command implementations and argument parsing for the graphkit CLI.

use std::io::{self, Write};

use clap::{Args, Parser, Subcommand};
use graphkit_core::{
    MazeError, SelectionError,
    maze::{self, Room},
    top_k,
};
use rand::{SeedableRng, rngs::SmallRng};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "graphkit", about = "Carve mazes and select top values.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Carve a grid maze and print it.
    Maze(MazeCommand),
    /// Print the largest values in ascending order.
    TopK(TopKCommand),
}

/// Options accepted by the `maze` command.
#[derive(Debug, Args, Clone)]
pub struct MazeCommand {
    /// Number of columns.
    #[arg(long)]
    pub width: usize,

    /// Number of rows.
    #[arg(long)]
    pub height: usize,

    /// Seed for wall weights; omitted means a fresh maze every run.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Mark the route from the top-left to the bottom-right room.
    #[arg(long)]
    pub solve: bool,
}

/// Options accepted by the `top-k` command.
#[derive(Debug, Args, Clone)]
pub struct TopKCommand {
    /// How many of the largest values to keep.
    #[arg(long, allow_negative_numbers = true)]
    pub count: isize,

    /// Values to select from.
    #[arg(required = true, allow_negative_numbers = true)]
    pub values: Vec<i64>,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Carving or solving the maze failed.
    #[error(transparent)]
    Maze(#[from] MazeError),
    /// Top-k selection rejected its arguments.
    #[error(transparent)]
    Selection(#[from] SelectionError),
}

impl CliError {
    /// Returns the stable code of the underlying library error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Maze(error) => error.code().as_str(),
            Self::Selection(error) => error.code().as_str(),
        }
    }

    /// Returns the graph error code when a maze failure came from the graph.
    #[must_use]
    pub const fn graph_code(&self) -> Option<&'static str> {
        match self {
            Self::Maze(error) => match error.graph_code() {
                Some(code) => Some(code.as_str()),
                None => None,
            },
            Self::Selection(_) => None,
        }
    }
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionSummary {
    /// A carved maze.
    Maze {
        /// ASCII drawing of the maze, with route markers when solved.
        drawing: String,
        /// Number of rooms on the route, when one was requested.
        route_length: Option<usize>,
    },
    /// Selected values in ascending order.
    TopK {
        /// The selection.
        values: Vec<i64>,
    },
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the command's library call fails.
///
/// # Examples
/// ```
/// use graphkit_cli::cli::{Cli, Command, ExecutionSummary, TopKCommand, run_cli};
///
/// let cli = Cli {
///     command: Command::TopK(TopKCommand {
///         count: 2,
///         values: vec![4, 9, 1, 7],
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary, ExecutionSummary::TopK { values: vec![7, 9] });
/// # Ok::<(), graphkit_cli::cli::CliError>(())
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    match cli.command {
        Command::Maze(command) => {
            span.record("command", "maze");
            run_maze(&command)
        }
        Command::TopK(command) => {
            span.record("command", "top-k");
            run_top_k(&command)
        }
    }
}

#[instrument(
    name = "cli.maze",
    err,
    skip(command),
    fields(width = command.width, height = command.height, seeded = command.seed.is_some()),
)]
pub(super) fn run_maze(command: &MazeCommand) -> Result<ExecutionSummary, CliError> {
    let mut rng = command
        .seed
        .map_or_else(SmallRng::from_entropy, SmallRng::seed_from_u64);
    let maze = maze::carve(command.width, command.height, &mut rng)?;

    let route = if command.solve {
        let exit = Room::new(command.height - 1, command.width - 1);
        maze.solve(Room::new(0, 0), exit)?
    } else {
        Vec::new()
    };
    let route_length = command.solve.then_some(route.len());

    info!(
        passages = maze.passage_count(),
        route_length = route_length.map(field::display),
        "maze command completed"
    );
    Ok(ExecutionSummary::Maze {
        drawing: maze.render(&route),
        route_length,
    })
}

#[instrument(
    name = "cli.top_k",
    err,
    skip(command),
    fields(count = command.count, values = command.values.len()),
)]
pub(super) fn run_top_k(command: &TopKCommand) -> Result<ExecutionSummary, CliError> {
    let values = top_k(command.count, &command.values)?;
    info!(selected = values.len(), "top-k command completed");
    Ok(ExecutionSummary::TopK { values })
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// Mazes are printed as drawn, followed by the route length when solved.
/// Selections are printed one value per line.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use graphkit_cli::cli::{ExecutionSummary, render_summary};
/// let summary = ExecutionSummary::TopK { values: vec![3, 8] };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(buffer, b"3\n8\n");
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    match summary {
        ExecutionSummary::Maze {
            drawing,
            route_length,
        } => {
            write!(writer, "{drawing}")?;
            if let Some(length) = route_length {
                writeln!(writer, "route: {length} rooms")?;
            }
        }
        ExecutionSummary::TopK { values } => {
            for value in values {
                writeln!(writer, "{value}")?;
            }
        }
    }
    Ok(())
}
