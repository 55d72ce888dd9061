//! Change fragments: parsing, aggregation and rendering
//!
//! - **tree**: the recursive mapping/list/leaf structure of one category
//! - **fragment**: one unreleased YAML file and its task prefix
//! - **aggregate**: fragments merged into category → entries, in first-seen order
//! - **render**: Markdown (and JSON) output of one release entry

pub mod aggregate;
pub mod fragment;
pub mod render;
pub mod tree;
