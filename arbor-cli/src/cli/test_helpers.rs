//! Small helpers shared across CLI tests.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use super::{Cli, Command, RunCommand};

pub(super) const MIXED_BATCH: &str = r#"{"graphs": [
    {"id": 1, "nodes": ["A", "B", "C"], "edges": [
        {"from": "A", "to": "B", "weight": 1},
        {"from": "B", "to": "C", "weight": 2},
        {"from": "A", "to": "C", "weight": 3}
    ]},
    {"id": 2, "nodes": ["A", "B"], "edges": [{"from": "A", "to": "Z", "weight": 1}]},
    {"id": 3, "nodes": ["A", "B", "C", "D"], "edges": [
        {"from": "A", "to": "B", "weight": 5},
        {"from": "C", "to": "D", "weight": 7}
    ]}
]}"#;

pub(super) const VALID_BATCH: &str = r#"[
    {"id": 1, "nodes": ["A", "B", "C"], "edges": [
        {"from": "A", "to": "B", "weight": 1},
        {"from": "B", "to": "C", "weight": 2},
        {"from": "A", "to": "C", "weight": 3}
    ]},
    {"id": 3, "nodes": ["A", "B", "C", "D"], "edges": [
        {"from": "A", "to": "B", "weight": 5},
        {"from": "C", "to": "D", "weight": 7}
    ]}
]"#;

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn write_input(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("graphs.json");
    if let Err(err) = fs::write(&path, contents) {
        panic!("failed to write input: {err}");
    }
    path
}

pub(super) fn run_cli_for(
    input: &Path,
    output: Option<PathBuf>,
    parallel: bool,
    skip_invalid: bool,
) -> Cli {
    Cli {
        command: Command::Run(RunCommand {
            input: input.to_path_buf(),
            output,
            parallel,
            skip_invalid,
        }),
    }
}
