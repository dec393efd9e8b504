//! Shared fixture for the CLI integration tests.
#![cfg(test)]
#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A scratch working directory holding a `logs/` tree.
pub struct TestFixture {
    temp_dir: TempDir,
    log_dir: PathBuf,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let log_dir = temp_dir.path().join("logs");
        fs::create_dir_all(&log_dir).expect("Failed to create log dir");

        Self { temp_dir, log_dir }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    pub fn write_log(&self, relative: &str, lines: &[&str]) {
        let path = self.log_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(&path, lines.join("\n") + "\n").expect("Failed to write log");
    }

    /// `logscan` running inside the fixture root, so `./` is the temp dir.
    #[allow(deprecated)]
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("logscan").expect("Failed to find logscan binary");
        cmd.current_dir(self.root());
        cmd
    }

    /// Every `log_report_*.txt` file directly inside `dir`.
    pub fn reports_in(&self, dir: &Path) -> Vec<PathBuf> {
        let Ok(entries) = fs::read_dir(dir) else {
            return Vec::new();
        };
        let mut reports: Vec<PathBuf> = entries
            .flatten()
            .map(|e| e.path())
            .filter(|p| {
                p.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.starts_with("log_report_") && n.ends_with(".txt"))
            })
            .collect();
        reports.sort();
        reports
    }
}
