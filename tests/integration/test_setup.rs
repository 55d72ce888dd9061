//! Integration tests for `codelog setup`

use crate::helpers::{TestProject, run_codelog, run_codelog_failing, stdout};
use anyhow::Result;

#[test]
fn test_setup_creates_layout() -> Result<()> {
  let project = TestProject::empty()?;

  let output = run_codelog(&project.path, &["setup"])?;

  assert!(stdout(&output).contains("Setting up codelog"));
  assert!(project.file_exists("changelogs/codelog.yml"));
  assert!(project.file_exists("changelogs/template.yml"));
  assert!(project.file_exists("changelogs/header.txt"));
  assert!(project.file_exists("changelogs/unreleased/.gitkeep"));
  assert!(project.file_exists("changelogs/releases/.gitkeep"));

  let config = project.read_file("changelogs/codelog.yml")?;
  assert!(config.contains("default_changelog_filename: CHANGELOG.md"));
  assert!(config.contains("show_date: true"));
  assert!(config.contains("%Y-%m-%d"));

  Ok(())
}

#[test]
fn test_setup_refuses_to_run_twice() -> Result<()> {
  let project = TestProject::new()?;
  project.write_config("show_date: false\n")?;

  let stderr = run_codelog_failing(&project.path, &["setup"], 1)?;

  assert!(stderr.contains("already set up"));
  assert_eq!(project.read_file("changelogs/codelog.yml")?, "show_date: false\n");
  Ok(())
}
