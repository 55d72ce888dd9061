//! Release entry rendering
//!
//! Markdown layout:
//!
//! ```text
//! ## 1.2.0 (2024-03-09)
//! ### Fixes
//! - PTK-123 - bug B
//! - Auth
//! 	- login
//!
//! ---
//! ```
//!
//! Nested mappings indent with one tab per level; lists add no indentation.

use crate::changes::aggregate::AggregatedChanges;
use crate::changes::tree::ChangeTree;
use crate::core::error::CodelogResult;
use chrono::NaiveDate;

/// Release entry output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangelogFormat {
  /// Markdown format (default)
  Markdown,
  /// JSON format for programmatic use
  Json,
}

/// One release: heading plus aggregated changes
#[derive(Debug, Clone)]
pub struct ReleaseEntry {
  pub version: String,
  /// Normalized release date
  pub date: NaiveDate,
  /// Heading text produced by the configured version tag
  pub version_tag: String,
  pub changes: AggregatedChanges,
}

impl ReleaseEntry {
  pub fn new(version: impl Into<String>, date: NaiveDate, version_tag: impl Into<String>, changes: AggregatedChanges) -> Self {
    Self {
      version: version.into(),
      date,
      version_tag: version_tag.into(),
      changes,
    }
  }

  /// Render as markdown
  pub fn to_markdown(&self) -> String {
    render_markdown(&self.version_tag, &self.changes)
  }

  /// Render as JSON
  pub fn to_json(&self) -> Result<String, serde_json::Error> {
    use serde::Serialize;

    #[derive(Serialize)]
    struct ReleaseJson<'a> {
      version: &'a str,
      date: String,
      version_tag: &'a str,
      categories: Vec<Category<'a>>,
    }

    #[derive(Serialize)]
    struct Category<'a> {
      name: &'a str,
      entries: &'a [ChangeTree],
    }

    let json_output = ReleaseJson {
      version: &self.version,
      date: self.date.to_string(),
      version_tag: &self.version_tag,
      categories: self
        .changes
        .iter()
        .map(|(name, entries)| Category { name, entries })
        .collect(),
    };

    serde_json::to_string_pretty(&json_output)
  }

  /// Render in the specified format
  pub fn render(&self, format: ChangelogFormat) -> CodelogResult<String> {
    match format {
      ChangelogFormat::Markdown => Ok(self.to_markdown()),
      ChangelogFormat::Json => Ok(self.to_json()?),
    }
  }
}

/// Header, one block per category in insertion order, then `---`
pub fn render_markdown(version_tag: &str, changes: &AggregatedChanges) -> String {
  let mut output = String::new();

  output.push_str(&format!("## {}\n", version_tag));
  for (category, entries) in changes.iter() {
    output.push_str(&format!("### {}\n", category));
    for entry in entries {
      write_tree(&mut output, entry, 0);
    }
    output.push('\n');
  }
  output.push_str("---\n");

  output
}

fn write_tree(output: &mut String, tree: &ChangeTree, depth: usize) {
  let indent = "\t".repeat(depth);
  match tree {
    ChangeTree::Mapping(map) => {
      for (key, value) in map {
        output.push_str(&format!("{}- {}\n", indent, key));
        write_tree(output, value, depth + 1);
      }
    }
    ChangeTree::List(items) => {
      for item in items {
        write_tree(output, item, depth);
      }
    }
    ChangeTree::Leaf(value) => {
      output.push_str(&format!("{}- {}\n", indent, value));
    }
  }
}
