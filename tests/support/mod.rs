use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Get a Command for routegraph, isolated from the caller's environment
pub fn routegraph() -> Command {
    let mut cmd = cargo_bin_cmd!("routegraph");
    cmd.env_remove("ROUTEGRAPH_EDGES")
        .env_remove("ROUTEGRAPH_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Write `content` to `name` inside `dir` and return the full path
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Triangle A-B (1), B-C (2), A-C (10)
pub const TRIANGLE: &str = r#"[
  {"from": "A", "to": "B", "cost": 1},
  {"from": "B", "to": "C", "cost": 2},
  {"from": "A", "to": "C", "cost": 10}
]"#;

/// Two components: A-B (5) and C-D (3)
pub const ISLANDS: &str = r#"{"edges": [
  {"from": "A", "to": "B", "cost": 5},
  {"from": "C", "to": "D", "cost": 3}
]}"#;

/// Small depot network with text and missing costs
pub const DEPOTS_YAML: &str = "\
- from: Depot
  to: North
  cost: 4
- from: Depot
  to: South
  cost: \"1\"
- from: South
  to: North
  cost: 2
- from: North
  to: Port
  cost: 1.5
- from: South
  to: Port
";

/// Temp dir holding `name` with `content`; returns the dir and the edge file
pub fn setup_edges(name: &str, content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = write_file(dir.path(), name, content);
    (dir, path)
}
