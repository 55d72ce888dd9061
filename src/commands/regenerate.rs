use crate::core::error::CodelogResult;
use crate::core::layout::ChangelogLayout;
use crate::release::FileOutputter;
use crate::release::history;

/// Run the regenerate command
pub fn run_regenerate(layout: &ChangelogLayout) -> CodelogResult<()> {
  let config = layout.require_config()?;

  let mut changelog = FileOutputter::new(layout.changelog_file(&config));
  let count = history::regenerate(layout, &config, &mut changelog)?;

  println!("📚 Regenerated {} from {} release(s)", changelog.path().display(), count);
  Ok(())
}
