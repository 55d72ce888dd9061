//! Terminal-facing helpers

pub mod logging;
