//! Command-line interface orchestration for arbor.
//!
//! The CLI offers a `run` command that reads a JSON batch of graphs, compares
//! Prim and Kruskal on each one and writes the results document.

mod commands;

pub use commands::{Cli, CliError, Command, RunCommand, run_cli};

#[cfg(test)]
mod test_helpers;
