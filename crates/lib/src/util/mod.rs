//! Shared utilities.
//!
//! Path helpers used by resolution and the collaborators, plus test helpers.

pub mod path;

#[cfg(test)]
pub mod testutil;
