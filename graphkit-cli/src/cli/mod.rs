//! Command-line interface for carving mazes and selecting top values.
//!
//! `maze` carves a grid maze with Kruskal's algorithm and can draw the
//! corner-to-corner route through it. `top-k` prints the largest values of a
//! list in ascending order.

mod commands;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, MazeCommand, TopKCommand, render_summary, run_cli,
};
