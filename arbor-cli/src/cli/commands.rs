//! Command implementations and argument parsing for the arbor CLI.

use std::io::Write;
use std::path::PathBuf;

use arbor_core::{
    ArborBuilder, ArborError, BatchReport, ExecutionStrategy, FailurePolicy, GraphErrorCode,
};
use arbor_providers_json::{
    JsonProviderError, read_graphs_from_path, write_results, write_results_to_path,
};
use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "arbor",
    about = "Compare Prim's and Kruskal's minimum spanning forests."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Run both algorithms over every graph in a JSON document.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// JSON document holding an array of graphs or an object with a
    /// `graphs` array.
    pub input: PathBuf,

    /// Write the results document here instead of stdout.
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Process graphs concurrently and run both algorithms of a graph in
    /// parallel.
    #[arg(long)]
    pub parallel: bool,

    /// Skip graphs that cannot be built instead of failing the batch.
    #[arg(long = "skip-invalid")]
    pub skip_invalid: bool,
}

impl RunCommand {
    fn execution_strategy(&self) -> ExecutionStrategy {
        if self.parallel {
            ExecutionStrategy::Parallel
        } else {
            ExecutionStrategy::Sequential
        }
    }

    fn failure_policy(&self) -> FailurePolicy {
        if self.skip_invalid {
            FailurePolicy::Skip
        } else {
            FailurePolicy::Abort
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The input document could not be read.
    #[error("failed to read input: {0}")]
    Read(#[source] JsonProviderError),
    /// The results document could not be written.
    #[error("failed to write results: {0}")]
    Write(#[source] JsonProviderError),
    /// The batch could not be processed.
    #[error(transparent)]
    Core(#[from] ArborError),
}

impl CliError {
    /// Returns the stable code of the underlying failure.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Read(err) | Self::Write(err) => err.code().as_str(),
            Self::Core(err) => err.code().as_str(),
        }
    }

    /// Returns the code of the graph construction failure, if any.
    #[must_use]
    pub const fn graph_code(&self) -> Option<GraphErrorCode> {
        match self {
            Self::Core(err) => err.graph_code(),
            Self::Read(_) | Self::Write(_) => None,
        }
    }
}

/// Executes the CLI command represented by `cli`.
///
/// The results document goes to the `--output` file when one is given and
/// to `stdout` otherwise. A one-line summary per graph is logged at `info`
/// once the document has been written.
///
/// # Errors
/// Returns [`CliError`] when reading, processing or writing fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use arbor_cli::cli::{Cli, Command, RunCommand, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(
///     file.path(),
///     r#"[{"id": 1, "nodes": ["A", "B"], "edges": [{"from": "A", "to": "B", "weight": 2}]}]"#,
/// )?;
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         input: file.path().to_path_buf(),
///         output: None,
///         parallel: false,
///         skip_invalid: false,
///     }),
/// };
/// let mut stdout = Vec::new();
/// let batch = run_cli(cli, &mut stdout)?;
/// assert_eq!(batch.reports[0].kruskal.total_cost, 2);
/// assert!(String::from_utf8(stdout)?.contains("\"total_cost\": 2"));
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli, stdout),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli, stdout: impl Write) -> Result<BatchReport, CliError> {
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_command(run, stdout)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command, stdout),
    fields(
        input = %command.input.display(),
        destination = field::Empty,
        strategy = ?command.execution_strategy(),
        policy = ?command.failure_policy(),
    ),
)]
pub(super) fn run_command(
    command: RunCommand,
    stdout: impl Write,
) -> Result<BatchReport, CliError> {
    let arbor = ArborBuilder::new()
        .with_execution_strategy(command.execution_strategy())
        .with_failure_policy(command.failure_policy())
        .build()?;

    let graphs = read_graphs_from_path(&command.input).map_err(CliError::Read)?;
    let batch = arbor.run(&graphs)?;

    let span = Span::current();
    let written = match &command.output {
        Some(path) => {
            span.record("destination", field::display(path.display()));
            write_results_to_path(&batch, path)
        }
        None => {
            span.record("destination", field::display("stdout"));
            write_results(&batch, stdout)
        }
    };
    written.map_err(CliError::Write)?;

    log_summaries(&batch);
    Ok(batch)
}

fn log_summaries(batch: &BatchReport) {
    for report in &batch.reports {
        info!(
            graph_id = report.graph_id,
            vertices = report.input_stats.vertices,
            edges = report.input_stats.edges,
            prim_cost = report.prim.total_cost,
            prim_operations = report.prim.operations_count,
            kruskal_cost = report.kruskal.total_cost,
            kruskal_operations = report.kruskal.operations_count,
            "graph compared"
        );
    }
    for skipped in &batch.skipped {
        info!(
            graph_id = skipped.graph_id,
            code = skipped.code().as_str(),
            "graph skipped"
        );
    }
}
