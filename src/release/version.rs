//! The version step: check preconditions, aggregate fragments, render one release
//!
//! Checks run in a fixed order. The config file is checked first and the
//! release date second, both when the step is built; version presence,
//! duplicate version and pending changes are checked when it runs. Nothing
//! reaches the outputter unless every check passed and every fragment parsed.

use crate::changes::aggregate::AggregatedChanges;
use crate::changes::render::{ChangelogFormat, ReleaseEntry};
use crate::core::config::CodelogConfig;
use crate::core::error::{CodelogResult, PreconditionError};
use crate::core::layout::ChangelogLayout;
use crate::release::outputter::Outputter;
use chrono::NaiveDate;
use std::path::PathBuf;

/// A release entry built from the current unreleased fragments
#[derive(Debug, Clone)]
pub struct PreparedRelease {
  pub entry: ReleaseEntry,
  /// Fragments the entry was built from
  pub fragments: Vec<PathBuf>,
}

pub struct VersionStep<'a> {
  layout: &'a ChangelogLayout,
  config: CodelogConfig,
  version: Option<String>,
  release_date: NaiveDate,
}

impl<'a> VersionStep<'a> {
  /// Validate config presence and the release date
  ///
  /// `release_date` defaults to today, written in `date_input_format`.
  pub fn new(layout: &'a ChangelogLayout, version: Option<String>, release_date: Option<&str>) -> CodelogResult<Self> {
    let config = layout.require_config()?;
    let date_text = match release_date {
      Some(date) => date.to_string(),
      None => config.today(),
    };
    let release_date = config
      .parse_release_date(&date_text)
      .ok_or_else(|| PreconditionError::InvalidDateFormat {
        date: date_text.clone(),
        format: config.date_input_format.clone(),
      })?;

    Ok(Self {
      layout,
      config,
      version,
      release_date,
    })
  }

  pub fn config(&self) -> &CodelogConfig {
    &self.config
  }

  /// Normalized release date
  pub fn release_date(&self) -> NaiveDate {
    self.release_date
  }

  /// Run the remaining checks and build the entry without printing it
  pub fn prepare(&self) -> CodelogResult<PreparedRelease> {
    let version = self.version.as_deref().ok_or(PreconditionError::MissingVersion)?;

    if self.layout.version_exists(version) {
      return Err(
        PreconditionError::AlreadyExistingVersion {
          version: version.to_string(),
        }
        .into(),
      );
    }

    let fragments = self.layout.fragment_paths()?;
    if fragments.is_empty() {
      return Err(
        PreconditionError::NoDetectedChanges {
          version: version.to_string(),
        }
        .into(),
      );
    }

    let changes = AggregatedChanges::load(&fragments)?;
    tracing::debug!(
      fragments = fragments.len(),
      categories = changes.len(),
      entries = changes.entry_count(),
      "aggregated unreleased changes"
    );

    let version_tag = self.config.version_tag(version, self.release_date);
    Ok(PreparedRelease {
      entry: ReleaseEntry::new(version, self.release_date, version_tag, changes),
      fragments,
    })
  }

  /// Build the entry and hand the rendered text to `outputter`
  pub fn run(&self, outputter: &mut dyn Outputter, format: ChangelogFormat) -> CodelogResult<PreparedRelease> {
    let prepared = self.prepare()?;
    let text = prepared.entry.render(format)?;
    outputter.print(&text)?;
    Ok(prepared)
  }
}
