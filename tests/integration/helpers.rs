//! Test helpers for integration tests

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// A throwaway project directory
pub struct TestProject {
  _root: TempDir,
  pub path: PathBuf,
}

impl TestProject {
  /// Create an empty project (no changelogs/ yet)
  pub fn empty() -> Result<Self> {
    let root = TempDir::new()?;
    let path = root.path().to_path_buf();
    Ok(Self { _root: root, path })
  }

  /// Create a project already set up with `codelog setup`
  pub fn new() -> Result<Self> {
    let project = Self::empty()?;
    run_codelog(&project.path, &["setup"])?;
    Ok(project)
  }

  /// Replace changelogs/codelog.yml
  pub fn write_config(&self, content: &str) -> Result<()> {
    self.write_file("changelogs/codelog.yml", content)
  }

  /// Add an unreleased fragment
  pub fn add_fragment(&self, name: &str, content: &str) -> Result<PathBuf> {
    let path = self.path.join("changelogs/unreleased").join(name);
    std::fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
  }

  /// Add a release file as if it was released earlier
  pub fn add_release(&self, version: &str, content: &str) -> Result<()> {
    self.write_file(&format!("changelogs/releases/{}.md", version), content)
  }

  pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
    let full_path = self.path.join(path);
    if let Some(parent) = full_path.parent() {
      std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&full_path, content).with_context(|| format!("Failed to write {}", path))?;
    Ok(())
  }

  pub fn file_exists(&self, path: &str) -> bool {
    self.path.join(path).exists()
  }

  pub fn read_file(&self, path: &str) -> Result<String> {
    let full_path = self.path.join(path);
    std::fs::read_to_string(&full_path).with_context(|| format!("Failed to read {}", path))
  }

  /// Names of the files in changelogs/unreleased/, `.gitkeep` excluded
  pub fn unreleased(&self) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(self.path.join("changelogs/unreleased"))? {
      let name = entry?.file_name().to_string_lossy().to_string();
      if name != ".gitkeep" {
        names.push(name);
      }
    }
    names.sort();
    Ok(names)
  }
}

/// Run codelog without checking the exit status
pub fn codelog(cwd: &Path, args: &[&str]) -> Result<Output> {
  let codelog_bin = env!("CARGO_BIN_EXE_codelog");

  Command::new(codelog_bin)
    .current_dir(cwd)
    .args(args)
    .env_remove("RUST_LOG")
    .output()
    .context("Failed to run codelog")
}

/// Run codelog, failing unless it exits successfully
pub fn run_codelog(cwd: &Path, args: &[&str]) -> Result<Output> {
  let output = codelog(cwd, args)?;

  if !output.status.success() {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    anyhow::bail!(
      "codelog command failed: codelog {}\nstdout: {}\nstderr: {}",
      args.join(" "),
      stdout,
      stderr
    );
  }

  Ok(output)
}

/// Run codelog, failing unless it exits with `code`; returns stderr
pub fn run_codelog_failing(cwd: &Path, args: &[&str], code: i32) -> Result<String> {
  let output = codelog(cwd, args)?;
  let stderr = String::from_utf8_lossy(&output.stderr).to_string();

  if output.status.code() != Some(code) {
    anyhow::bail!(
      "expected exit code {} from codelog {}, got {:?}\nstderr: {}",
      code,
      args.join(" "),
      output.status.code(),
      stderr
    );
  }

  Ok(stderr)
}

pub fn stdout(output: &Output) -> String {
  String::from_utf8_lossy(&output.stdout).to_string()
}
