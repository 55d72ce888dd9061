//! Release command
//!
//! Preview prints the rendered entry and touches nothing. Otherwise the entry
//! is written to releases/<version>.md, the released fragments are deleted
//! and the full changelog is regenerated, in that order.

use crate::changes::render::ChangelogFormat;
use crate::core::error::CodelogResult;
use crate::core::layout::ChangelogLayout;
use crate::release::history;
use crate::release::{FileOutputter, Outputter, StdoutOutputter, VersionStep};

/// Run the release command
pub fn run_release(
  layout: &ChangelogLayout,
  version: Option<String>,
  date: Option<String>,
  preview: bool,
  json: bool,
) -> CodelogResult<()> {
  let step = VersionStep::new(layout, version, date.as_deref())?;

  if preview {
    let format = if json {
      ChangelogFormat::Json
    } else {
      ChangelogFormat::Markdown
    };
    step.run(&mut StdoutOutputter, format)?;
    return Ok(());
  }

  apply_release(layout, &step)
}

fn apply_release(layout: &ChangelogLayout, step: &VersionStep<'_>) -> CodelogResult<()> {
  let prepared = step.prepare()?;
  let entry = &prepared.entry;

  println!("📦 Releasing {}", entry.version_tag);
  for (category, entries) in entry.changes.iter() {
    println!("   {} ({})", category, entries.len());
  }

  let mut release_file = FileOutputter::new(layout.release_file(&entry.version));
  release_file.print(&entry.to_markdown())?;
  println!("   Wrote {}", release_file.path().display());

  history::clear_unreleased(&prepared.fragments)?;
  println!("   Removed {} unreleased fragment(s)", prepared.fragments.len());

  let mut changelog = FileOutputter::new(layout.changelog_file(step.config()));
  history::regenerate(layout, step.config(), &mut changelog)?;
  println!("   Regenerated {}", changelog.path().display());

  println!("✅ Released {}", entry.version);
  Ok(())
}
