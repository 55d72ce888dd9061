use crate::commands::release::run_release;
use crate::core::error::CodelogResult;
use crate::core::layout::ChangelogLayout;
use crate::release::VersionBump;
use crate::release::history;

/// Run the bump command: release the version after the latest release file
pub fn run_bump(layout: &ChangelogLayout, level: &str, date: Option<String>, preview: bool) -> CodelogResult<()> {
  let bump: VersionBump = level.parse()?;
  let current = history::latest_version(layout)?;
  let next = history::next_version(layout, bump)?;

  match &current {
    Some(current) => tracing::info!(%current, %next, "bumping version"),
    None => tracing::info!(%next, "no previous release, starting from 0.0.0"),
  }

  run_release(layout, Some(next.to_string()), date, preview, false)
}
