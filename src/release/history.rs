//! Released versions: ordering, bumping, changelog regeneration and cleanup

use crate::core::config::CodelogConfig;
use crate::core::error::{CodelogResult, ConfigError, ResultExt};
use crate::core::layout::ChangelogLayout;
use crate::release::outputter::Outputter;
use std::cmp::Ordering;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

/// Semver component to increment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionBump {
  /// Major version bump (breaking changes)
  Major,
  /// Minor version bump (new features)
  Minor,
  /// Patch version bump (bug fixes)
  Patch,
}

impl VersionBump {
  pub fn as_str(&self) -> &'static str {
    match self {
      VersionBump::Major => "major",
      VersionBump::Minor => "minor",
      VersionBump::Patch => "patch",
    }
  }

  /// Apply bump to a semver version
  pub fn apply(&self, version: &semver::Version) -> Result<semver::Version, ConfigError> {
    let bumped = match self {
      VersionBump::Major => version.major.checked_add(1).map(|major| semver::Version::new(major, 0, 0)),
      VersionBump::Minor => version
        .minor
        .checked_add(1)
        .map(|minor| semver::Version::new(version.major, minor, 0)),
      VersionBump::Patch => version
        .patch
        .checked_add(1)
        .map(|patch| semver::Version::new(version.major, version.minor, patch)),
    };
    bumped.ok_or_else(|| ConfigError::VersionOverflow {
      version: version.to_string(),
      level: self.as_str().to_string(),
    })
  }
}

impl FromStr for VersionBump {
  type Err = ConfigError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "major" => Ok(VersionBump::Major),
      "minor" => Ok(VersionBump::Minor),
      "patch" => Ok(VersionBump::Patch),
      _ => Err(ConfigError::InvalidBump { level: s.to_string() }),
    }
  }
}

/// A file in changelogs/releases/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseFile {
  /// File stem, the version as it was released
  pub name: String,
  /// Parsed version when the name is semver (a leading `v` is accepted)
  pub version: Option<semver::Version>,
  pub path: PathBuf,
}

impl ReleaseFile {
  fn from_path(path: PathBuf) -> Option<Self> {
    let name = path.file_stem()?.to_string_lossy().to_string();
    let version = parse_version(&name);
    Some(Self { name, version, path })
  }
}

/// Lenient semver parse: accepts `v1.2.3`, `1.2` and `1`
pub fn parse_version(name: &str) -> Option<semver::Version> {
  let trimmed = name.strip_prefix('v').unwrap_or(name);
  if let Ok(version) = semver::Version::parse(trimmed) {
    return Some(version);
  }

  let parts: Vec<&str> = trimmed.split('.').collect();
  if parts.len() > 3 {
    return None;
  }
  let mut numbers = [0u64; 3];
  for (slot, part) in numbers.iter_mut().zip(&parts) {
    *slot = part.parse().ok()?;
  }
  Some(semver::Version::new(numbers[0], numbers[1], numbers[2]))
}

/// Newest first: semver releases by version, then the rest by name descending
fn newest_first(a: &ReleaseFile, b: &ReleaseFile) -> Ordering {
  match (&a.version, &b.version) {
    (Some(va), Some(vb)) => vb.cmp(va).then_with(|| b.name.cmp(&a.name)),
    (Some(_), None) => Ordering::Less,
    (None, Some(_)) => Ordering::Greater,
    (None, None) => b.name.cmp(&a.name),
  }
}

/// All release files, newest first
pub fn released_versions(layout: &ChangelogLayout) -> CodelogResult<Vec<ReleaseFile>> {
  let mut releases: Vec<ReleaseFile> = layout
    .release_paths()?
    .into_iter()
    .filter_map(ReleaseFile::from_path)
    .collect();
  releases.sort_by(newest_first);
  Ok(releases)
}

/// Highest released semver version
pub fn latest_version(layout: &ChangelogLayout) -> CodelogResult<Option<semver::Version>> {
  Ok(released_versions(layout)?.into_iter().find_map(|release| release.version))
}

/// Version following the latest release (0.0.0 when nothing was released)
pub fn next_version(layout: &ChangelogLayout, bump: VersionBump) -> CodelogResult<semver::Version> {
  let current = latest_version(layout)?.unwrap_or_else(|| semver::Version::new(0, 0, 0));
  Ok(bump.apply(&current)?)
}

/// Header file followed by every release, newest first
pub fn build_changelog(layout: &ChangelogLayout, config: &CodelogConfig) -> CodelogResult<String> {
  let mut sections = Vec::new();

  let header_path = layout.header_file(config);
  if header_path.is_file() {
    let header = fs::read_to_string(&header_path)
      .with_context(|| format!("Failed to read header {}", header_path.display()))?;
    let header = header.trim_end();
    if !header.is_empty() {
      sections.push(format!("{}\n", header));
    }
  }

  for release in released_versions(layout)? {
    let content = fs::read_to_string(&release.path)
      .with_context(|| format!("Failed to read release {}", release.path.display()))?;
    sections.push(content);
  }

  Ok(sections.join("\n"))
}

/// Rebuild the full changelog into `outputter`, returns the number of releases
pub fn regenerate(layout: &ChangelogLayout, config: &CodelogConfig, outputter: &mut dyn Outputter) -> CodelogResult<usize> {
  let count = released_versions(layout)?.len();
  outputter.print(&build_changelog(layout, config)?)?;
  Ok(count)
}

/// Delete released fragments
pub fn clear_unreleased(fragments: &[PathBuf]) -> CodelogResult<()> {
  for path in fragments {
    fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    tracing::info!(path = %path.display(), "removed released fragment");
  }
  Ok(())
}
