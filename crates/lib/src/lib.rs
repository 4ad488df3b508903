//! bridge-lib: Core types and logic for the bridge builder
//!
//! This crate turns a builder command line into a resolved build configuration
//! and provides the collaborators around it:
//! - `resolve`: switch dispatch, settings parsing and the location fallback chain
//! - `options`: the `BuildOptions` record and the allow-listed project properties
//! - `scaffold`: project creation from templates (`new`)
//! - `package`: package download and extraction (`add package`)
//! - `pipeline`: hand-off to the external compilation pipeline

pub mod consts;
pub mod environment;
pub mod options;
pub mod package;
pub mod pipeline;
pub mod platform;
pub mod project_config;
pub mod resolve;
pub mod scaffold;
pub mod util;
