//! Release steps
//!
//! A release runs three steps in order:
//!
//! 1. **version**: check preconditions, aggregate `changelogs/unreleased/*.yml`
//!    and render the entry into `changelogs/releases/<version>.md`
//! 2. **clear**: delete the fragments that went into the entry
//! 3. **regenerate**: rebuild the full changelog from the header and every
//!    release file, newest first
//!
//! In preview mode only the first step runs and its output goes to stdout.

pub mod history;
pub mod outputter;
pub mod version;

pub use history::VersionBump;
pub use outputter::{FileOutputter, Outputter, StdoutOutputter};
pub use version::VersionStep;
