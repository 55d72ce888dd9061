use crate::core::config::CodelogConfig;
use crate::core::error::{CodelogResult, ConfigError, ResultExt};
use crate::core::layout::ChangelogLayout;
use std::fs;
use std::path::Path;

/// Fragment template written by `setup` and used by `new` when template.yml is missing
pub const DEFAULT_TEMPLATE: &str = "\
# One list per category. Empty items are ignored.
# Task codes under Задачи prefix every other entry of this file.
Added:
  -
Changed:
  -
Fixed:
  -
Задачи:
  -
";

pub const DEFAULT_HEADER: &str = "# Changelog\n";

/// Run the setup command
pub fn run_setup(layout: &ChangelogLayout) -> CodelogResult<()> {
  if layout.config_exists() {
    return Err(
      ConfigError::AlreadySetUp {
        path: layout.config_file(),
      }
      .into(),
    );
  }

  println!("📦 Setting up codelog in {}", layout.root().display());

  for dir in [layout.unreleased_dir(), layout.releases_dir()] {
    fs::create_dir_all(&dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    write_new(&dir.join(".gitkeep"), "")?;
  }

  let config = CodelogConfig::default();
  write_new(&layout.config_file(), &config.to_yaml()?)?;
  println!("   Created {}", layout.config_file().display());

  if write_new(&layout.template_file(), DEFAULT_TEMPLATE)? {
    println!("   Created {}", layout.template_file().display());
  }

  let header = layout.header_file(&config);
  if write_new(&header, DEFAULT_HEADER)? {
    println!("   Created {}", header.display());
  }

  println!("✅ Ready. Add changes with `codelog new`");
  Ok(())
}

/// Write `content` unless the file already exists; returns whether it was written
fn write_new(path: &Path, content: &str) -> CodelogResult<bool> {
  if path.exists() {
    tracing::debug!(path = %path.display(), "keeping existing file");
    return Ok(false);
  }
  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent).with_context(|| format!("Failed to create {}", parent.display()))?;
  }
  fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
  Ok(true)
}
