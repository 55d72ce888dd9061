//! CLI commands for codelog
//!
//! - **setup**: create the changelogs/ layout with a default configuration
//! - **new**: add an unreleased fragment from the template
//! - **release**: turn unreleased fragments into a release file
//! - **bump**: release the next semver version
//! - **regenerate**: rebuild the full changelog from released files
//!
//! Every command takes the project's `&ChangelogLayout`.

pub mod bump;
pub mod new;
pub mod regenerate;
pub mod release;
pub mod setup;

pub use bump::run_bump;
pub use new::run_new;
pub use regenerate::run_regenerate;
pub use release::run_release;
pub use setup::run_setup;
