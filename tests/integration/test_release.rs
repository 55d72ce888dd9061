//! Integration tests for `codelog release`

use crate::helpers::{TestProject, run_codelog, run_codelog_failing, stdout};
use anyhow::Result;

#[test]
fn test_release_preview_prints_entry() -> Result<()> {
  let project = TestProject::new()?;
  project.add_fragment("001.yml", "Fixes:\n  - bug A\n")?;
  project.add_fragment("002.yml", "Fixes:\n  - bug B\nЗадачи:\n  - PTK-123\n")?;

  let output = run_codelog(&project.path, &["release", "1.2.0", "2024-03-09", "--preview"])?;

  assert_eq!(
    stdout(&output),
    "## 1.2.0 (2024-03-09)\n### Fixes\n- bug A\n- PTK-123 - bug B\n\n### Задачи\n- PTK-123\n\n---\n"
  );
  assert_eq!(project.unreleased()?, vec!["001.yml", "002.yml"]);
  assert!(!project.file_exists("changelogs/releases/1.2.0.md"));
  Ok(())
}

#[test]
fn test_release_preview_json() -> Result<()> {
  let project = TestProject::new()?;
  project.add_fragment("001.yml", "Added:\n  Search:\n    - by name\n")?;

  let output = run_codelog(&project.path, &["release", "2.0.0", "2024-03-09", "--preview", "--json"])?;
  let json: serde_json::Value = serde_json::from_str(&stdout(&output))?;

  assert_eq!(json["version"], "2.0.0");
  assert_eq!(json["version_tag"], "2.0.0 (2024-03-09)");
  assert_eq!(json["categories"][0]["name"], "Added");
  assert_eq!(json["categories"][0]["entries"][0]["Search"][0], "by name");
  Ok(())
}

#[test]
fn test_release_writes_file_and_regenerates_changelog() -> Result<()> {
  let project = TestProject::new()?;
  project.add_release("1.0.0", "## 1.0.0 (2024-01-01)\n### Added\n- first\n\n---\n")?;
  project.add_fragment("001.yml", "Fixes:\n  - crash on start\nЗадачи:\n  - APP-42\n")?;

  let output = run_codelog(&project.path, &["release", "1.1.0", "2024-02-01"])?;

  assert!(stdout(&output).contains("Released 1.1.0"));
  assert_eq!(
    project.read_file("changelogs/releases/1.1.0.md")?,
    "## 1.1.0 (2024-02-01)\n### Fixes\n- APP-42 - crash on start\n\n### Задачи\n- APP-42\n\n---\n"
  );
  assert!(project.unreleased()?.is_empty());
  assert!(project.file_exists("changelogs/unreleased/.gitkeep"));

  let changelog = project.read_file("CHANGELOG.md")?;
  assert!(changelog.starts_with("# Changelog\n\n## 1.1.0 (2024-02-01)\n"));
  let newer = changelog.find("## 1.1.0").unwrap_or(usize::MAX);
  let older = changelog.find("## 1.0.0").unwrap_or(0);
  assert!(newer < older);
  Ok(())
}

#[test]
fn test_release_honors_date_formats() -> Result<()> {
  let project = TestProject::new()?;
  project.write_config("date_input_format: '%d.%m.%Y'\ndate_output_format: '%B %-d, %Y'\n")?;
  project.add_fragment("001.yml", "Fixes: [typo]\n")?;

  let output = run_codelog(&project.path, &["release", "0.2.0", "09.03.2024", "--preview"])?;
  assert!(stdout(&output).starts_with("## 0.2.0 (March 9, 2024)\n"));

  let stderr = run_codelog_failing(&project.path, &["release", "0.2.0", "2024-03-09"], 1)?;
  assert!(stderr.contains("Invalid date format"));
  Ok(())
}

#[test]
fn test_release_without_version_fails() -> Result<()> {
  let project = TestProject::new()?;
  project.add_fragment("001.yml", "Fixes: [x]\n")?;

  let stderr = run_codelog_failing(&project.path, &["release"], 1)?;
  assert!(stderr.contains("Missing version number"));
  Ok(())
}

#[test]
fn test_release_existing_version_fails() -> Result<()> {
  let project = TestProject::new()?;
  project.add_release("1.2.0", "## 1.2.0\n---\n")?;
  project.add_fragment("001.yml", "Fixes: [x]\n")?;

  let stderr = run_codelog_failing(&project.path, &["release", "1.2.0", "2024-03-09"], 1)?;

  assert!(stderr.contains("Already existing version"));
  assert_eq!(project.unreleased()?, vec!["001.yml"]);
  assert_eq!(project.read_file("changelogs/releases/1.2.0.md")?, "## 1.2.0\n---\n");
  Ok(())
}

#[test]
fn test_release_without_fragments_fails() -> Result<()> {
  let project = TestProject::new()?;

  let stderr = run_codelog_failing(&project.path, &["release", "1.0.0", "2024-03-09"], 1)?;

  assert!(stderr.contains("No detected changes"));
  assert!(!project.file_exists("CHANGELOG.md"));
  Ok(())
}

#[test]
fn test_release_with_broken_fragment_fails_without_output() -> Result<()> {
  let project = TestProject::new()?;
  project.add_fragment("001.yml", "Fixes: [fine]\n")?;
  project.add_fragment("002.yml", "Fixes: [broken\n")?;

  let output = crate::helpers::codelog(&project.path, &["release", "1.0.0", "2024-03-09", "--preview"])?;

  assert_eq!(output.status.code(), Some(3));
  assert!(stdout(&output).is_empty());
  assert!(String::from_utf8_lossy(&output.stderr).contains("Could not parse YAML"));
  assert!(!project.file_exists("changelogs/releases/1.0.0.md"));
  Ok(())
}

#[test]
fn test_release_without_setup_fails() -> Result<()> {
  let project = TestProject::empty()?;

  let stderr = run_codelog_failing(&project.path, &["release", "1.0.0", "not-a-date"], 1)?;
  assert!(stderr.contains("Missing config file"));
  Ok(())
}
