//! Document assembly: base template, operation objects, null stripping.

pub mod generate;
pub mod nulls;
pub mod operation;
pub mod template;

pub use generate::generate;
pub use nulls::strip_nulls;
