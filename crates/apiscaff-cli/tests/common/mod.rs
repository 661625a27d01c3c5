//! Shared helpers for binary tests.

#![allow(dead_code)]

use std::path::Path;

use assert_cmd::Command;
use tempfile::TempDir;

/// `apiscaff` running in `dir` with an isolated environment.
pub fn apiscaff(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("apiscaff").unwrap();
    cmd.current_dir(dir)
        .env("NO_COLOR", "1")
        .env("XDG_CONFIG_HOME", dir.join(".xdg"))
        .env_remove("RUST_LOG")
        .env_remove("APISCAFF_ROOT");
    cmd
}

/// A temp directory initialised with `apiscaff init`.
pub fn initialised_workspace() -> TempDir {
    let temp = TempDir::new().unwrap();
    apiscaff(temp.path()).arg("init").assert().success();
    temp
}

pub fn read_json(path: &Path) -> serde_json::Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}
