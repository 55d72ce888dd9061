use crate::commands::setup::DEFAULT_TEMPLATE;
use crate::core::error::{CodelogResult, ResultExt};
use crate::core::layout::ChangelogLayout;
use crate::utils;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

/// Run the new command, returns the created fragment
pub fn run_new(layout: &ChangelogLayout, name: Option<String>) -> CodelogResult<PathBuf> {
  layout.require_config()?;

  let template_path = layout.template_file();
  let template = if template_path.is_file() {
    fs::read_to_string(&template_path).with_context(|| format!("Failed to read {}", template_path.display()))?
  } else {
    tracing::debug!(path = %template_path.display(), "template missing, using the built-in one");
    DEFAULT_TEMPLATE.to_string()
  };

  let unreleased = layout.unreleased_dir();
  fs::create_dir_all(&unreleased).with_context(|| format!("Failed to create {}", unreleased.display()))?;

  let file_name = utils::fragment_file_name(chrono::Local::now().naive_local(), name.as_deref());
  let path = unreleased.join(file_name);

  // create_new: two fragments in the same millisecond must not overwrite each other
  let mut file = OpenOptions::new()
    .write(true)
    .create_new(true)
    .open(&path)
    .with_context(|| format!("Failed to create {}", path.display()))?;
  file
    .write_all(template.as_bytes())
    .with_context(|| format!("Failed to write {}", path.display()))?;

  println!("📝 Created {}", path.display());
  Ok(path)
}
