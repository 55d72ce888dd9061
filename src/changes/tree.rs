//! Recursive change tree parsed from fragment YAML

use indexmap::IndexMap;
use serde::Serialize;
use serde_yaml::Value;

/// One category's content: nested categories, lists, or change descriptions
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ChangeTree {
  /// Nested categorization; keys keep their order from the file
  Mapping(IndexMap<String, ChangeTree>),
  /// Sequence of entries, rendered at the depth of its parent
  List(Vec<ChangeTree>),
  /// A change description
  Leaf(String),
}

impl ChangeTree {
  /// Convert a YAML value; `None` for null
  ///
  /// Nulls nested in sequences are dropped, a mapping key with a null value
  /// becomes a key with an empty list.
  pub fn from_yaml(value: &Value) -> Option<Self> {
    match value {
      Value::Null => None,
      Value::Bool(b) => Some(ChangeTree::Leaf(b.to_string())),
      Value::Number(n) => Some(ChangeTree::Leaf(n.to_string())),
      Value::String(s) => Some(ChangeTree::Leaf(s.clone())),
      Value::Sequence(items) => Some(ChangeTree::List(items.iter().filter_map(ChangeTree::from_yaml).collect())),
      Value::Mapping(map) => Some(ChangeTree::Mapping(
        map
          .iter()
          .map(|(key, value)| {
            let subtree = ChangeTree::from_yaml(value).unwrap_or(ChangeTree::List(Vec::new()));
            (key_to_string(key), subtree)
          })
          .collect(),
      )),
      Value::Tagged(tagged) => ChangeTree::from_yaml(&tagged.value),
    }
  }

  /// Drop empty leaves at every level; `None` when nothing survives
  ///
  /// Mapping keys are kept even when everything below them was dropped, so a
  /// sub-heading written without entries still shows up as a bullet.
  pub fn prune(self) -> Option<Self> {
    match self {
      ChangeTree::Leaf(s) if s.is_empty() => None,
      ChangeTree::Leaf(s) => Some(ChangeTree::Leaf(s)),
      ChangeTree::List(items) => {
        let items: Vec<_> = items.into_iter().filter_map(ChangeTree::prune).collect();
        if items.is_empty() {
          None
        } else {
          Some(ChangeTree::List(items))
        }
      }
      ChangeTree::Mapping(map) => {
        let map: IndexMap<_, _> = map
          .into_iter()
          .filter(|(key, _)| !key.is_empty())
          .map(|(key, value)| (key, value.prune().unwrap_or(ChangeTree::List(Vec::new()))))
          .collect();
        if map.is_empty() {
          None
        } else {
          Some(ChangeTree::Mapping(map))
        }
      }
    }
  }

  /// Prepend `prefix` to every bullet this tree renders at its own depth
  ///
  /// Leaves and mapping keys get the prefix; lists are descended because they
  /// add no indentation. Deeper levels are left untouched.
  pub fn with_prefix(self, prefix: &str) -> Self {
    match self {
      ChangeTree::Leaf(s) => ChangeTree::Leaf(format!("{} - {}", prefix, s)),
      ChangeTree::List(items) => ChangeTree::List(items.into_iter().map(|item| item.with_prefix(prefix)).collect()),
      ChangeTree::Mapping(map) => ChangeTree::Mapping(
        map
          .into_iter()
          .map(|(key, value)| (format!("{} - {}", prefix, key), value))
          .collect(),
      ),
    }
  }
}

impl From<&str> for ChangeTree {
  fn from(s: &str) -> Self {
    ChangeTree::Leaf(s.to_string())
  }
}

/// Mapping key as text; non-string keys use their YAML form
pub fn key_to_string(key: &Value) -> String {
  match key {
    Value::String(s) => s.clone(),
    Value::Bool(b) => b.to_string(),
    Value::Number(n) => n.to_string(),
    Value::Null => String::new(),
    Value::Tagged(tagged) => key_to_string(&tagged.value),
    other => serde_yaml::to_string(other).map(|s| s.trim_end().to_string()).unwrap_or_default(),
  }
}
