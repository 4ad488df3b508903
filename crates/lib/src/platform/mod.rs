//! Platform integration: environment-derived paths and launching files.

pub mod os;
pub mod paths;

pub use os::{Os, open_in_default_app};
