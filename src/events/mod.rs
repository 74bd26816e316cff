//! Event inputs: composite keys plus the raw definition shape.
//!
//! This layer is intentionally separate from document assembly. It owns:
//! - EventKey (method + URL path derived from a dotted key)
//! - EventDef (serde-friendly shape of one event definition)

pub mod def;
pub mod key;

pub use def::EventDef;
pub use key::EventKey;
