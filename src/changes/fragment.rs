//! Unreleased change fragments and their task prefix

use crate::changes::tree::{ChangeTree, key_to_string};
use crate::core::error::{CodelogResult, FragmentError, ResultExt};
use indexmap::IndexMap;
use regex::Regex;
use serde::Deserialize;
use serde_yaml::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Category whose entries reference tasks in the issue tracker
pub const TASKS_CATEGORY: &str = "Задачи";

/// Task code at the end of an entry, e.g. "Fix login PTK-123"
static TASK_CODE_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"(?:PTK|APP|ptk|app)-[0-9]+\z").expect("Invalid task code regex"));

/// One parsed `changelogs/unreleased/*.yml` file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
  /// Where the fragment was read from
  pub path: PathBuf,
  /// Category name to content, `None` when the category was left empty
  pub categories: IndexMap<String, Option<ChangeTree>>,
  /// Read from the raw tasks category, which still knows strings from numbers
  task_codes: Option<String>,
}

impl Fragment {
  /// Read and parse a fragment file
  pub fn load(path: &Path) -> CodelogResult<Self> {
    let content = fs::read_to_string(path).with_context(|| format!("Failed to read fragment {}", path.display()))?;
    Ok(Self::parse(path, &content)?)
  }

  /// Parse fragment text
  ///
  /// A YAML syntax error is fatal. An empty document, or one that is not a
  /// mapping, yields a fragment without categories.
  pub fn parse(path: &Path, content: &str) -> Result<Self, FragmentError> {
    // Only the first document counts; an empty file has none
    let value = match serde_yaml::Deserializer::from_str(content).next() {
      Some(document) => Value::deserialize(document).map_err(|e| FragmentError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
      })?,
      None => Value::Null,
    };

    let (categories, task_codes) = match value {
      Value::Mapping(map) => {
        let task_codes = map
          .iter()
          .find(|(key, _)| key_to_string(key) == TASKS_CATEGORY)
          .and_then(|(_, tasks)| read_task_codes(tasks));
        let categories = map
          .iter()
          .map(|(key, value)| (key_to_string(key), value))
          .filter(|(name, _)| !name.is_empty())
          .map(|(name, value)| (name, ChangeTree::from_yaml(value)))
          .collect();
        (categories, task_codes)
      }
      Value::Null => (IndexMap::new(), None),
      other => {
        tracing::warn!(
          path = %path.display(),
          kind = value_kind(&other),
          "fragment is not a mapping of categories, skipping"
        );
        (IndexMap::new(), None)
      }
    };

    tracing::debug!(path = %path.display(), categories = categories.len(), "loaded fragment");
    Ok(Self {
      path: path.to_path_buf(),
      categories,
      task_codes,
    })
  }

  /// Task codes of this fragment joined with ", ", empty when there are none
  pub fn task_prefix(&self) -> String {
    match self.extract_task_prefix() {
      Some(prefix) => prefix,
      None => {
        tracing::debug!(path = %self.path.display(), "no task prefix");
        String::new()
      }
    }
  }

  /// `None` when the tasks category is missing or is not a (nested) list of strings
  pub fn extract_task_prefix(&self) -> Option<String> {
    self.task_codes.clone()
  }
}

/// Codes of a tasks value joined with ", "
///
/// Only sequences of strings (nested sequences and nulls allowed) qualify;
/// a number, boolean or mapping anywhere fails the whole value.
fn read_task_codes(tasks: &Value) -> Option<String> {
  if !matches!(tasks, Value::Sequence(_)) {
    return None;
  }

  let mut entries = Vec::new();
  collect_task_entries(tasks, &mut entries)?;

  let codes: Vec<&str> = entries
    .into_iter()
    .filter(|entry| !entry.is_empty())
    .filter_map(task_code)
    .collect();
  Some(codes.join(", "))
}

fn collect_task_entries<'a>(value: &'a Value, out: &mut Vec<&'a str>) -> Option<()> {
  match value {
    Value::Null => {}
    Value::String(s) => out.push(s),
    Value::Sequence(items) => {
      for item in items {
        collect_task_entries(item, out)?;
      }
    }
    Value::Tagged(tagged) => collect_task_entries(&tagged.value, out)?,
    Value::Bool(_) | Value::Number(_) | Value::Mapping(_) => return None,
  }
  Some(())
}

/// Trailing task code of an entry; a single trailing newline is ignored
pub fn task_code(entry: &str) -> Option<&str> {
  let entry = entry.strip_suffix('\n').unwrap_or(entry);
  TASK_CODE_RE.find(entry).map(|m| m.as_str())
}

fn value_kind(value: &Value) -> &'static str {
  match value {
    Value::Null => "null",
    Value::Bool(_) => "bool",
    Value::Number(_) => "number",
    Value::String(_) => "string",
    Value::Sequence(_) => "sequence",
    Value::Mapping(_) => "mapping",
    Value::Tagged(_) => "tagged",
  }
}
