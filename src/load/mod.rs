//! Recursive YAML loading for the events and definitions trees.

pub mod yaml;

pub use yaml::{load_flat, load_nested};
