//! Naming helpers for unreleased fragment files

use chrono::NaiveDateTime;

/// Lowercase ASCII slug: alphanumerics kept, every other run collapses to `_`
///
/// Non-ASCII letters are kept as-is so Cyrillic names survive.
pub fn slugify(name: &str) -> String {
  let mut slug = String::with_capacity(name.len());
  let mut pending_separator = false;

  for ch in name.trim().chars() {
    if ch.is_alphanumeric() {
      if pending_separator && !slug.is_empty() {
        slug.push('_');
      }
      pending_separator = false;
      slug.extend(ch.to_lowercase());
    } else {
      pending_separator = true;
    }
  }

  slug
}

/// `<YYYYMMDDHHMMSSmmm>[_<slug>].yml`
///
/// The timestamp prefix keeps fragments in creation order when listed by name.
pub fn fragment_file_name(created_at: NaiveDateTime, name: Option<&str>) -> String {
  let stamp = created_at.format("%Y%m%d%H%M%S%3f").to_string();
  match name.map(slugify).filter(|slug| !slug.is_empty()) {
    Some(slug) => format!("{}_{}.yml", stamp, slug),
    None => format!("{}.yml", stamp),
  }
}
