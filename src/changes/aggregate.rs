//! Merge fragments into one ordered category → entries mapping

use crate::changes::fragment::{Fragment, TASKS_CATEGORY};
use crate::changes::tree::ChangeTree;
use crate::core::error::CodelogResult;
use indexmap::IndexMap;
use serde::Serialize;
use std::path::PathBuf;

/// All unreleased changes, by category in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AggregatedChanges {
  categories: IndexMap<String, Vec<ChangeTree>>,
}

impl AggregatedChanges {
  pub fn new() -> Self {
    Self::default()
  }

  /// Fold every fragment into a fresh aggregate, in the given order
  pub fn from_fragments<I>(fragments: I) -> Self
  where
    I: IntoIterator<Item = Fragment>,
  {
    fragments.into_iter().fold(Self::new(), Self::merge)
  }

  /// Load and merge fragment files; the first unparsable file aborts the load
  pub fn load(paths: &[PathBuf]) -> CodelogResult<Self> {
    let fragments = paths.iter().map(|path| Fragment::load(path)).collect::<CodelogResult<Vec<_>>>()?;
    Ok(Self::from_fragments(fragments))
  }

  /// Merge one fragment
  ///
  /// Every category of the fragment gets a key, even when it contributes
  /// nothing. Entries of categories other than the tasks category are
  /// prefixed with the fragment's task codes.
  pub fn merge(mut self, fragment: Fragment) -> Self {
    let prefix = fragment.task_prefix();

    for (category, content) in fragment.categories {
      let entries = self.categories.entry(category.clone()).or_default();

      let Some(content) = content.and_then(ChangeTree::prune) else {
        continue;
      };

      let items = match content {
        ChangeTree::List(items) => items,
        single => vec![single],
      };

      if category != TASKS_CATEGORY && !prefix.is_empty() {
        entries.extend(items.into_iter().map(|item| item.with_prefix(&prefix)));
      } else {
        entries.extend(items);
      }
    }

    self
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &[ChangeTree])> {
    self.categories.iter().map(|(name, entries)| (name.as_str(), entries.as_slice()))
  }

  pub fn len(&self) -> usize {
    self.categories.len()
  }

  /// Number of entries across all categories
  pub fn entry_count(&self) -> usize {
    self.categories.values().map(Vec::len).sum()
  }
}
