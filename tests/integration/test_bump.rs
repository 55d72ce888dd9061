//! Integration tests for `codelog bump`

use crate::helpers::{TestProject, run_codelog, run_codelog_failing, stdout};
use anyhow::Result;

#[test]
fn test_bump_patch_releases_next_version() -> Result<()> {
  let project = TestProject::new()?;
  project.add_release("0.4.0", "## 0.4.0\n---\n")?;
  project.add_release("0.4.1", "## 0.4.1\n---\n")?;
  project.add_fragment("001.yml", "Fixes: [leak]\n")?;

  run_codelog(&project.path, &["bump", "patch", "2024-06-01"])?;

  assert_eq!(
    project.read_file("changelogs/releases/0.4.2.md")?,
    "## 0.4.2 (2024-06-01)\n### Fixes\n- leak\n\n---\n"
  );
  assert!(project.unreleased()?.is_empty());
  Ok(())
}

#[test]
fn test_bump_preview_uses_next_version() -> Result<()> {
  let project = TestProject::new()?;
  project.add_release("1.3.7", "## 1.3.7\n---\n")?;
  project.add_fragment("001.yml", "Added: [export]\n")?;

  let output = run_codelog(&project.path, &["bump", "major", "2024-06-01", "--preview"])?;

  assert!(stdout(&output).starts_with("## 2.0.0 (2024-06-01)\n"));
  assert!(!project.file_exists("changelogs/releases/2.0.0.md"));
  Ok(())
}

#[test]
fn test_bump_rejects_unknown_level() -> Result<()> {
  let project = TestProject::new()?;

  let stderr = run_codelog_failing(&project.path, &["bump", "huge"], 1)?;
  assert!(stderr.contains("Invalid bump level 'huge'"));
  Ok(())
}
