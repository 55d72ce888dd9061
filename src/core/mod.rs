//! Core building blocks shared by every command
//!
//! - **config**: codelog.yml parsing and version tag formatting
//! - **error**: Error types with contextual help messages and exit codes
//! - **layout**: Fixed paths of the changelogs/ directory

pub mod config;
pub mod error;
pub mod layout;
