//! Command implementations and argument parsing for the graphmark CLI.

use std::io::{self, Write};

use clap::{Args, Parser, Subcommand};
use graphmark_core::{
    BenchmarkRun, DEFAULT_BFS_MAX_ITERATIONS, DEFAULT_COMPONENT_COUNT,
    DEFAULT_MAX_COMPONENT_OUTDEGREE, DEFAULT_MAX_WEIGHT, DEFAULT_NODE_COUNT,
    DEFAULT_PAGERANK_DAMPING, DEFAULT_PAGERANK_MAX_ERROR, DEFAULT_PAGERANK_MAX_ITERATIONS,
    DEFAULT_SEED, GraphmarkBuilder, GraphmarkError, PageRankStatus,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "graphmark",
    about = "Generate a synthetic multi-component graph and run the analytics kernels."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Generate the graph and run Bellman-Ford, BFS and PageRank over it.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone, PartialEq)]
pub struct RunCommand {
    /// Seed for graph generation.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of nodes to generate.
    #[arg(long, default_value_t = DEFAULT_NODE_COUNT)]
    pub nodes: usize,

    /// Number of components to split the nodes into.
    #[arg(long, default_value_t = DEFAULT_COMPONENT_COUNT)]
    pub components: usize,

    /// Maximum number of cross-component edges drawn per node.
    #[arg(long, default_value_t = DEFAULT_MAX_COMPONENT_OUTDEGREE)]
    pub max_component_outdegree: usize,

    /// Inclusive upper bound on edge weights.
    #[arg(long, default_value_t = DEFAULT_MAX_WEIGHT)]
    pub max_weight: i32,

    /// Hard cap on BFS expansion rounds.
    #[arg(long, default_value_t = DEFAULT_BFS_MAX_ITERATIONS)]
    pub bfs_max_iterations: usize,

    /// Hard cap on PageRank iterations.
    #[arg(long, default_value_t = DEFAULT_PAGERANK_MAX_ITERATIONS)]
    pub pagerank_max_iterations: usize,

    /// L1 error below which PageRank stops.
    #[arg(long, default_value_t = DEFAULT_PAGERANK_MAX_ERROR)]
    pub pagerank_max_error: f64,

    /// PageRank damping factor, in `[0, 1)`.
    #[arg(long, default_value_t = DEFAULT_PAGERANK_DAMPING)]
    pub damping: f64,

    /// Node the Bellman-Ford and BFS kernels start from.
    #[arg(long, default_value_t = 0)]
    pub source: usize,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration or generation failed.
    #[error(transparent)]
    Core(#[from] GraphmarkError),
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Generated graph and kernel results.
    pub run: BenchmarkRun,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when configuration validation or graph generation
/// fails. Kernel failures are reported in the summary instead.
///
/// # Examples
/// ```
/// use graphmark_cli::cli::{Cli, run_cli};
/// use clap::Parser;
///
/// let cli = Cli::parse_from(["graphmark", "run", "--nodes", "10", "--components", "2"]);
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.run.graph().node_count(), 10);
/// # Ok::<(), graphmark_cli::cli::CliError>(())
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_command(&run)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(seed = command.seed, nodes = command.nodes, components = command.components),
)]
pub(super) fn run_command(command: &RunCommand) -> Result<ExecutionSummary, CliError> {
    let graphmark = GraphmarkBuilder::new()
        .with_seed(command.seed)
        .with_node_count(command.nodes)
        .with_component_count(command.components)
        .with_max_component_outdegree(command.max_component_outdegree)
        .with_max_weight(command.max_weight)
        .with_bfs_max_iterations(command.bfs_max_iterations)
        .with_pagerank_max_iterations(command.pagerank_max_iterations)
        .with_pagerank_max_error(command.pagerank_max_error)
        .with_damping(command.damping)
        .with_source(command.source)
        .build()?;

    let run = graphmark.execute()?;
    info!(
        nodes = run.graph().node_count(),
        edges = run.graph().edge_count(),
        "command completed"
    );
    Ok(ExecutionSummary { run })
}

fn status_label(status: PageRankStatus) -> &'static str {
    match status {
        PageRankStatus::Converged => "converged",
        PageRankStatus::NotConverged => "not-converged",
    }
}

/// Writes a plain-text summary of `summary` to `writer`.
///
/// # Errors
/// Propagates write failures from `writer`.
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    let graph = summary.run.graph();
    let report = summary.run.report();
    writeln!(
        writer,
        "graph: nodes={} edges={} components={}",
        graph.node_count(),
        graph.edge_count(),
        graph.component_count()
    )?;

    match report.shortest_paths() {
        Ok(paths) => writeln!(
            writer,
            "bellman-ford: reached={} passes={} status={}",
            paths.reached_count(),
            paths.passes(),
            if paths.converged() { "converged" } else { "bounded" }
        )?,
        Err(err) => writeln!(writer, "bellman-ford: failed code={} ({err})", err.code())?,
    }

    match report.bfs() {
        Ok(bfs) => writeln!(
            writer,
            "bfs: visited={} rounds={} capped={}",
            bfs.visited_count(),
            bfs.rounds(),
            bfs.capped()
        )?,
        Err(err) => writeln!(writer, "bfs: failed code={} ({err})", err.code())?,
    }

    let pagerank = report.pagerank();
    writeln!(
        writer,
        "pagerank: iterations={} error={:.6} status={} rank_sum={:.6}",
        pagerank.iterations(),
        pagerank.error(),
        status_label(pagerank.status()),
        pagerank.rank_sum()
    )?;
    Ok(())
}
