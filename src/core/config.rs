use crate::core::error::{CodelogError, CodelogResult, ConfigError, ResultExt};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Configuration for codelog, read from changelogs/codelog.yml
///
/// Every field has a default, so an empty file is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodelogConfig {
  /// File the full changelog is regenerated into (relative to the project root)
  #[serde(default = "default_changelog_filename")]
  pub default_changelog_filename: String,

  /// Text placed on top of the regenerated changelog
  #[serde(default = "default_header_textfile")]
  pub header_textfile: String,

  /// Include the release date in the version tag
  #[serde(default = "default_show_date")]
  pub show_date: bool,

  /// strftime format release dates are given in on the command line
  #[serde(default = "default_date_format")]
  pub date_input_format: String,

  /// strftime format release dates are printed with
  #[serde(default = "default_date_format")]
  pub date_output_format: String,

  /// Release heading template, `{{version}}` and `{{formatted_date}}` are substituted
  #[serde(default = "default_version_tag")]
  pub version_tag: String,
}

fn default_changelog_filename() -> String {
  "CHANGELOG.md".to_string()
}

fn default_header_textfile() -> String {
  "changelogs/header.txt".to_string()
}

fn default_show_date() -> bool {
  true
}

fn default_date_format() -> String {
  "%Y-%m-%d".to_string()
}

fn default_version_tag() -> String {
  "{{version}} ({{formatted_date}})".to_string()
}

impl Default for CodelogConfig {
  fn default() -> Self {
    Self {
      default_changelog_filename: default_changelog_filename(),
      header_textfile: default_header_textfile(),
      show_date: default_show_date(),
      date_input_format: default_date_format(),
      date_output_format: default_date_format(),
      version_tag: default_version_tag(),
    }
  }
}

impl CodelogConfig {
  /// Load config from the given codelog.yml
  pub fn load(config_path: &Path) -> CodelogResult<Self> {
    let content = fs::read_to_string(config_path)
      .with_context(|| format!("Failed to read config from {}", config_path.display()))?;
    Self::parse(config_path, &content)
  }

  /// Parse config text; `path` is only used for error messages
  pub fn parse(path: &Path, content: &str) -> CodelogResult<Self> {
    let Some(document) = serde_yaml::Deserializer::from_str(content).next() else {
      return Ok(Self::default());
    };

    let config = Option::<CodelogConfig>::deserialize(document).map_err(|e| ConfigError::Parse {
      path: path.to_path_buf(),
      message: e.to_string(),
    })?;

    Ok(config.unwrap_or_default())
  }

  /// Serialize to the YAML written by `codelog setup`
  pub fn to_yaml(&self) -> CodelogResult<String> {
    serde_yaml::to_string(self).map_err(|e| CodelogError::message(format!("YAML error: {}", e)))
  }

  /// Parse a release date given on the command line
  pub fn parse_release_date(&self, date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date, &self.date_input_format).ok()
  }

  /// Today's date written in `date_input_format`, the default release date
  pub fn today(&self) -> String {
    format_date(chrono::Local::now().date_naive(), &self.date_input_format)
  }

  /// Heading text for a release
  pub fn version_tag(&self, version: &str, date: NaiveDate) -> String {
    if !self.show_date {
      return version.to_string();
    }

    let formatted_date = format_date(date, &self.date_output_format);
    self
      .version_tag
      .replace("{{version}}", version)
      .replace("{{formatted_date}}", &formatted_date)
  }
}

/// Format a date, falling back to ISO 8601 when the format string is invalid
fn format_date(date: NaiveDate, format: &str) -> String {
  let mut out = String::new();
  match write!(out, "{}", date.format(format)) {
    Ok(()) => out,
    Err(_) => date.to_string(),
  }
}
