//! Integration tests for `codelog new`

use crate::helpers::{TestProject, run_codelog, run_codelog_failing, stdout};
use anyhow::Result;

#[test]
fn test_new_creates_fragment_from_template() -> Result<()> {
  let project = TestProject::new()?;
  project.write_file("changelogs/template.yml", "Fixes:\n  -\n")?;

  let output = run_codelog(&project.path, &["new", "Broken login"])?;

  let fragments = project.unreleased()?;
  assert_eq!(fragments.len(), 1);
  assert!(fragments[0].ends_with("_broken_login.yml"));
  assert!(stdout(&output).contains(&fragments[0]));
  assert_eq!(
    project.read_file(&format!("changelogs/unreleased/{}", fragments[0]))?,
    "Fixes:\n  -\n"
  );
  Ok(())
}

#[test]
fn test_untouched_template_releases_empty_headings() -> Result<()> {
  let project = TestProject::new()?;
  run_codelog(&project.path, &["new"])?;

  let output = run_codelog(&project.path, &["release", "0.1.0", "2024-05-01", "--preview"])?;

  assert_eq!(
    stdout(&output),
    "## 0.1.0 (2024-05-01)\n### Added\n\n### Changed\n\n### Fixed\n\n### Задачи\n\n---\n"
  );
  Ok(())
}

#[test]
fn test_new_without_setup_fails() -> Result<()> {
  let project = TestProject::empty()?;

  let stderr = run_codelog_failing(&project.path, &["new"], 1)?;

  assert!(stderr.contains("Missing config file"));
  assert!(stderr.contains("codelog setup"));
  Ok(())
}
