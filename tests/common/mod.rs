//! Shared integration-test harness for running the `copilot-docgen`
//! binary against files in a scratch directory.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// A scratch directory holding one input/output pair.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    /// Creates an empty scratch directory.
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create temp dir"),
        }
    }

    /// Path of a file inside the scratch directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Writes `contents` to `name` and returns its path.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.path(name);
        fs::write(&path, contents).expect("failed to write input");
        path
    }

    /// Reads `name` as UTF-8.
    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.path(name)).expect("failed to read output")
    }

    /// Runs the binary with `args`, using the scratch directory as the
    /// working directory.
    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_copilot-docgen"))
            .args(args)
            .current_dir(self.dir.path())
            .env_remove("COPILOT_DOCGEN_INPUT")
            .env_remove("COPILOT_DOCGEN_OUTPUT")
            .env_remove("COPILOT_DOCGEN_LOG_LEVEL")
            .output()
            .expect("failed to spawn copilot-docgen")
    }

    /// Absolute path to a checked-in fixture.
    pub fn fixture_path(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests/fixtures")
            .join(name)
    }

    /// Root of the scratch directory.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
