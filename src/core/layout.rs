//! Fixed on-disk layout of a codelog project
//!
//! ```text
//! <root>/
//!   CHANGELOG.md               regenerated (name from codelog.yml)
//!   changelogs/
//!     codelog.yml              configuration
//!     template.yml             template for `codelog new`
//!     header.txt               header of the regenerated changelog
//!     unreleased/*.yml         one fragment per change
//!     releases/<version>.md    one file per release
//! ```
//!
//! Commands build one [`ChangelogLayout`] from the working directory and pass it
//! by reference; nothing below the command layer touches the current directory.

use crate::core::config::CodelogConfig;
use crate::core::error::{CodelogResult, PreconditionError};
use std::path::{Path, PathBuf};

pub const CHANGELOGS_DIR: &str = "changelogs";
pub const CONFIG_FILE: &str = "codelog.yml";
pub const TEMPLATE_FILE: &str = "template.yml";
pub const UNRELEASED_DIR: &str = "unreleased";
pub const RELEASES_DIR: &str = "releases";

/// Paths of a codelog project rooted at `root`
#[derive(Debug, Clone)]
pub struct ChangelogLayout {
  /// Project root (the directory holding `changelogs/`)
  pub root: PathBuf,
}

impl ChangelogLayout {
  pub fn new(root: impl Into<PathBuf>) -> Self {
    Self { root: root.into() }
  }

  /// Get project root as Path reference (convenience)
  pub fn root(&self) -> &Path {
    &self.root
  }

  pub fn changelogs_dir(&self) -> PathBuf {
    self.root.join(CHANGELOGS_DIR)
  }

  pub fn config_file(&self) -> PathBuf {
    self.changelogs_dir().join(CONFIG_FILE)
  }

  pub fn template_file(&self) -> PathBuf {
    self.changelogs_dir().join(TEMPLATE_FILE)
  }

  pub fn unreleased_dir(&self) -> PathBuf {
    self.changelogs_dir().join(UNRELEASED_DIR)
  }

  pub fn releases_dir(&self) -> PathBuf {
    self.changelogs_dir().join(RELEASES_DIR)
  }

  /// changelogs/releases/<version>.md
  pub fn release_file(&self, version: &str) -> PathBuf {
    self.releases_dir().join(format!("{}.md", version))
  }

  /// Regenerated changelog, relative paths resolved against the root
  pub fn changelog_file(&self, config: &CodelogConfig) -> PathBuf {
    self.root.join(&config.default_changelog_filename)
  }

  pub fn header_file(&self, config: &CodelogConfig) -> PathBuf {
    self.root.join(&config.header_textfile)
  }

  pub fn config_exists(&self) -> bool {
    self.config_file().is_file()
  }

  pub fn version_exists(&self, version: &str) -> bool {
    self.release_file(version).is_file()
  }

  /// Load codelog.yml
  pub fn load_config(&self) -> CodelogResult<CodelogConfig> {
    CodelogConfig::load(&self.config_file())
  }

  /// Load codelog.yml, failing with `MissingConfig` when it is absent
  pub fn require_config(&self) -> CodelogResult<CodelogConfig> {
    if !self.config_exists() {
      return Err(
        PreconditionError::MissingConfig {
          path: self.config_file(),
        }
        .into(),
      );
    }
    self.load_config()
  }

  /// All `unreleased/*.yml` fragments, sorted by path
  pub fn fragment_paths(&self) -> CodelogResult<Vec<PathBuf>> {
    list_files(&self.unreleased_dir(), "*.yml")
  }

  /// All `releases/*.md` files, sorted by path
  pub fn release_paths(&self) -> CodelogResult<Vec<PathBuf>> {
    list_files(&self.releases_dir(), "*.md")
  }
}

fn list_files(dir: &Path, pattern: &str) -> CodelogResult<Vec<PathBuf>> {
  let escaped = glob::Pattern::escape(&dir.to_string_lossy());
  let full_pattern = format!("{}/{}", escaped, pattern);

  // Hidden files (editor drafts, `.foo.yml`) are not part of the project
  let options = glob::MatchOptions {
    require_literal_leading_dot: true,
    ..Default::default()
  };

  let mut paths = Vec::new();
  for entry in glob::glob_with(&full_pattern, options)? {
    let path = entry?;
    if path.is_file() {
      paths.push(path);
    }
  }
  paths.sort();
  Ok(paths)
}
