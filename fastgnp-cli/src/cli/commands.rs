//! Command implementations and argument parsing for the fastgnp CLI.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use fastgnp_core::{
    Algorithm, DEFAULT_SKIP_TABLE_DEPTH, GeneratorBuilder, GnpError, GraphResult,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

const DEFAULT_SEED: u64 = 7;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "fastgnp",
    about = "Generate Erdős–Rényi G(n, p) random directed graphs."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Run one or more seeded generation passes.
    Generate(GenerateCommand),
}

/// Options accepted by the `generate` command.
#[derive(Debug, Args, Clone)]
pub struct GenerateCommand {
    /// Number of vertices (n).
    #[arg(short = 'n', long)]
    pub vertices: u64,

    /// Edge probability p in [0, 1].
    #[arg(short = 'p', long)]
    pub probability: f64,

    /// Algorithm variant: per, pzer, or pprezer.
    #[arg(short = 'a', long, default_value = "per")]
    pub algorithm: Algorithm,

    /// Base random seed; run i uses seed + i.
    #[arg(short = 's', long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of runs to perform.
    #[arg(short = 'r', long, default_value_t = 1)]
    pub runs: u64,

    /// Depth of the precomputed skip table used by pprezer.
    #[arg(long, default_value_t = DEFAULT_SKIP_TABLE_DEPTH)]
    pub skip_table_depth: usize,

    /// Append per-run statistics to this CSV file.
    #[arg(long)]
    pub log_csv: Option<PathBuf>,

    /// Write the edge list of the last run to this CSV file as `u,v` rows.
    #[arg(long)]
    pub edges_out: Option<PathBuf>,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed while writing an output file.
    #[error("failed to write `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Core generation failed.
    #[error(transparent)]
    Core(#[from] GnpError),
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// One result per completed run, in run order.
    pub results: Vec<GraphResult>,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when parameter validation or output writing fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use fastgnp_cli::cli::{Cli, Command, GenerateCommand, run_cli};
/// # use fastgnp_core::Algorithm;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let cli = Cli {
///     command: Command::Generate(GenerateCommand {
///         vertices: 4,
///         probability: 0.0,
///         algorithm: Algorithm::Pzer,
///         seed: 7,
///         runs: 1,
///         skip_table_depth: 10,
///         log_csv: None,
///         edges_out: None,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.results.len(), 1);
/// assert_eq!(summary.results[0].edge_count(), 0);
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Generate(generate) => {
            Span::current().record("command", field::display("generate"));
            run_generate(generate)
        }
    }
}

#[instrument(
    name = "cli.generate",
    err,
    skip(command),
    fields(
        n = command.vertices,
        p = command.probability,
        algorithm = %command.algorithm,
        runs = field::Empty,
    ),
)]
pub(super) fn run_generate(command: GenerateCommand) -> Result<ExecutionSummary, CliError> {
    let runs = command.runs.max(1);
    Span::current().record("runs", field::display(runs));

    let mut results = Vec::with_capacity(runs as usize);
    for run_index in 0..runs {
        let seed = command.seed.wrapping_add(run_index);
        let generator = GeneratorBuilder::new()
            .with_vertices(command.vertices)
            .with_edge_probability(command.probability)
            .with_algorithm(command.algorithm)
            .with_seed(seed)
            .with_skip_table_depth(command.skip_table_depth)
            .build()?;
        let result = generator.generate();
        info!(
            run = run_index,
            seed,
            edges = result.edge_count(),
            elapsed_us = result.elapsed().as_micros() as u64,
            "run completed"
        );
        results.push(result);
    }

    if let Some(path) = command.log_csv.as_deref() {
        append_log_csv(path, &results)?;
        info!(path = %path.display(), "wrote per-run statistics");
    }
    if let Some(path) = command.edges_out.as_deref() {
        if let Some(last) = results.last() {
            write_edges_csv(path, last)?;
            info!(path = %path.display(), edges = last.edge_count(), "wrote edge list");
        }
    }

    Ok(ExecutionSummary { results })
}

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> CliError + '_ {
    move |source| CliError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn create_parent_dirs(path: &Path) -> Result<(), CliError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(io_error(path))?;
        }
    }
    Ok(())
}

/// Appends one `run_index,n,p,algorithm,seed,elapsed_ms,edge_count` row per
/// run, writing the header first when the file does not exist yet.
#[instrument(name = "cli.append_log_csv", err, skip(results), fields(path = %path.display()))]
pub(super) fn append_log_csv(path: &Path, results: &[GraphResult]) -> Result<(), CliError> {
    create_parent_dirs(path)?;
    let is_new = !path.exists();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(io_error(path))?;
    let mut writer = BufWriter::new(file);

    if is_new {
        writeln!(writer, "run_index,n,p,algorithm,seed,elapsed_ms,edge_count")
            .map_err(io_error(path))?;
    }
    for (run_index, result) in results.iter().enumerate() {
        writeln!(
            writer,
            "{run_index},{},{},{},{},{:.3},{}",
            result.vertices(),
            result.edge_probability(),
            result.algorithm(),
            result.seed(),
            result.elapsed().as_secs_f64() * 1_000.0,
            result.edge_count(),
        )
        .map_err(io_error(path))?;
    }
    writer.flush().map_err(io_error(path))?;
    Ok(())
}

/// Writes the `u,v` vertex pairs of `result` as CSV, overwriting `path`.
#[instrument(name = "cli.write_edges_csv", err, skip(result), fields(path = %path.display()))]
pub(super) fn write_edges_csv(path: &Path, result: &GraphResult) -> Result<(), CliError> {
    create_parent_dirs(path)?;
    let file = File::create(path).map_err(io_error(path))?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "u,v").map_err(io_error(path))?;
    for (u, v) in result.edge_pairs() {
        writeln!(writer, "{u},{v}").map_err(io_error(path))?;
    }
    writer.flush().map_err(io_error(path))?;
    Ok(())
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use std::io::Cursor;
/// # use fastgnp_cli::cli::{Cli, Command, GenerateCommand, render_summary, run_cli};
/// # use fastgnp_core::Algorithm;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = run_cli(Cli {
///     command: Command::Generate(GenerateCommand {
///         vertices: 3,
///         probability: 0.0,
///         algorithm: Algorithm::Pzer,
///         seed: 7,
///         runs: 1,
///         skip_table_depth: 10,
///         log_csv: None,
///         edges_out: None,
///     }),
/// })?;
/// let mut buffer = Cursor::new(Vec::new());
/// render_summary(&summary, &mut buffer)?;
/// let rendered = String::from_utf8(buffer.into_inner())?;
/// assert!(rendered.starts_with("G(n=3, p=0) via pzer, 1 runs"));
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    if let Some(first) = summary.results.first() {
        writeln!(
            writer,
            "G(n={}, p={}) via {}, {} runs",
            first.vertices(),
            first.edge_probability(),
            first.algorithm(),
            summary.results.len(),
        )?;
    }
    for (run_index, result) in summary.results.iter().enumerate() {
        writeln!(
            writer,
            "run {run_index}: seed={}, edges={}, elapsed={:.3} ms",
            result.seed(),
            result.edge_count(),
            result.elapsed().as_secs_f64() * 1_000.0,
        )?;
    }
    Ok(())
}
