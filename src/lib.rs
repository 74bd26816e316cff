//! Event-definition to OpenAPI document generator.
//!
//! Reads a directory tree of YAML event definitions plus a set of model
//! definitions, merges them into a base Swagger/OpenAPI template, strips
//! every null field and hands back the assembled document. One pass, no
//! persistent state.

pub mod events;
pub mod load;
pub mod swagger;

pub type Result<T> = anyhow::Result<T>;
