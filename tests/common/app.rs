//! Test project factory for integration tests.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tempfile::TempDir;

use color_grep::models::{AppConfig, InputSource, ScanSummary};
use color_grep::services::Scanner;
use delta_e::ReferenceSet;

use super::fixtures;

/// A throwaway directory tree to scan
pub struct TestProject {
    dir: TempDir,
}

impl TestProject {
    /// Empty project
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Project with the standard fixture files
    pub fn new() -> Self {
        let project = Self::empty();
        project.write("styles/site.css", fixtures::STYLESHEET);
        project.write("index.html", fixtures::MARKUP);
        project.write("app.js", fixtures::SCRIPT);
        project.write("images/logo.png", "#336699 but not a text file we scan");
        project.write(".cache/old.css", "a { color: #336699; }\n");
        project
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    /// Write a file, creating parent directories
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(&path, content).expect("Failed to write fixture");
        path
    }

    /// Scan the whole project with the default config
    pub fn search(&self, references: &[&str], epsilon: f64) -> ScanSummary {
        self.search_with(references, epsilon, &AppConfig::default(), true)
    }

    pub fn search_with(
        &self,
        references: &[&str],
        epsilon: f64,
        config: &AppConfig,
        recursive: bool,
    ) -> ScanSummary {
        let references = ReferenceSet::from_hex(references).expect("Invalid reference colors");
        Scanner::new(references, epsilon).scan_inputs(
            &[InputSource::File(self.root().to_path_buf())],
            config,
            recursive,
            &mut std::io::empty(),
        )
    }

    /// Run the color-grep binary inside the project directory
    pub fn run(&self, args: &[&str]) -> CliOutput {
        self.run_with_stdin(args, "")
    }

    pub fn run_with_stdin(&self, args: &[&str], stdin: &str) -> CliOutput {
        let mut child = Command::new(env!("CARGO_BIN_EXE_color-grep"))
            .args(args)
            .current_dir(self.root())
            .env_remove("COLOR_GREP_CONFIG")
            .env_remove("COLOR_GREP_TEMPLATES")
            .env_remove("RUST_LOG")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to start color-grep");

        child
            .stdin
            .take()
            .expect("stdin is piped")
            .write_all(stdin.as_bytes())
            .expect("Failed to write stdin");

        let output = child.wait_with_output().expect("Failed to wait for color-grep");
        CliOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

/// Captured result of a binary run
#[derive(Debug)]
pub struct CliOutput {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CliOutput {
    pub fn lines(&self) -> Vec<&str> {
        self.stdout.lines().collect()
    }
}
