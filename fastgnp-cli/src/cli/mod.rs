//! Command-line interface for the FASTGNP generator.
//!
//! Offers a single `generate` command that runs one or more seeded
//! generation passes, optionally appending per-run statistics and writing
//! the final run's edge list as CSV.

mod commands;

pub use commands::{Cli, CliError, Command, ExecutionSummary, GenerateCommand, render_summary, run_cli};

#[cfg(test)]
mod tests;
