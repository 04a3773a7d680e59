//! Command-line interface for the graphmark benchmark.
//!
//! Offers a single `run` command that generates the synthetic graph, runs the
//! kernels and prints a plain-text summary.

mod commands;

pub use commands::{Cli, CliError, Command, ExecutionSummary, RunCommand, render_summary, run_cli};
