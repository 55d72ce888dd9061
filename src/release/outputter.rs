//! Sinks for rendered release text

use crate::core::error::{CodelogResult, ResultExt};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Receives the final rendered text of a step
pub trait Outputter {
  fn print(&mut self, text: &str) -> CodelogResult<()>;
}

/// Writes to standard output (preview mode)
#[derive(Debug, Default)]
pub struct StdoutOutputter;

impl Outputter for StdoutOutputter {
  fn print(&mut self, text: &str) -> CodelogResult<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;
    Ok(())
  }
}

/// Writes (replacing) a file, creating parent directories
#[derive(Debug)]
pub struct FileOutputter {
  path: PathBuf,
}

impl FileOutputter {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }

  pub fn path(&self) -> &Path {
    &self.path
  }
}

impl Outputter for FileOutputter {
  fn print(&mut self, text: &str) -> CodelogResult<()> {
    if let Some(parent) = self.path.parent() {
      fs::create_dir_all(parent).with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(&self.path, text).with_context(|| format!("Failed to write {}", self.path.display()))?;
    tracing::info!(path = %self.path.display(), bytes = text.len(), "wrote file");
    Ok(())
  }
}

/// In-memory capture
impl Outputter for String {
  fn print(&mut self, text: &str) -> CodelogResult<()> {
    self.push_str(text);
    Ok(())
  }
}
