//! Command-line configuration resolution.
//!
//! Turns the raw argument list into an [`Invocation`]. Resolution runs as a
//! chain of stages, each taking the previous stage's record by value:
//!
//! 1. switch dispatch over verbs and switches ([`dispatch`])
//! 2. precedence merge of direct switches over `--settings` ([`merge`])
//! 3. project auto-detection ([`locate::detect_project`])
//! 4. output location derivation ([`output::derive_output_location`])
//! 5. assembly / references folder fallback chain ([`locate::locate_lib`])
//! 6. default file name fallback ([`output::finalize_default_file_name`])
//! 7. default source pattern ([`output::finalize_sources`])
//!
//! Any stage may fail with a [`ResolveError`], in which case no
//! configuration is produced.

mod dispatch;
mod locate;
mod merge;
mod output;
mod settings;

use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

use crate::environment::Environment;
use crate::options::{BuildOptions, ProjectProperty, PropertyError};
use crate::util::path::file_name;

pub use settings::parse_settings;

/// What the command line asked the builder to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
  /// `-h` / `--help`.
  Help,
  /// `-v` / `--version`.
  Version,
  /// `add package <name> [-v <version>]`, installed into `folder`.
  AddPackage {
    folder: PathBuf,
    name: String,
    version: Option<String>,
  },
  /// `new [template]`, scaffolded into `folder`.
  NewProject { folder: PathBuf, template: String },
  /// A resolved build configuration to hand to the pipeline.
  Build(BuildOptions),
}

impl Invocation {
  /// True when the invocation is complete without running the compiler.
  pub fn no_compilation(&self) -> bool {
    !matches!(self, Invocation::Build(_))
  }
}

/// Fatal resolution failures. None of them produce a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
  #[error("project and assembly file specification is mutually exclusive")]
  MutuallyExclusive,

  #[error("invalid argument: {0}")]
  InvalidArgument(String),

  #[error("missing value for {switch}")]
  MissingOperand { switch: String },

  #[error("invalid argument --settings(-S): {argument}: {source}")]
  InvalidSettings {
    argument: String,
    #[source]
    source: PropertyError,
  },

  #[error("please define package name")]
  MissingPackageName,

  #[error("'{0}' is unknown entity for adding")]
  UnknownAddEntity(String),

  #[error(
    "could not default to a project because multiple were found: {}",
    candidates.iter().map(|p| file_name(p)).collect::<Vec<_>>().join(", ")
  )]
  AmbiguousProject { candidates: Vec<PathBuf> },
}

/// Resolve `args` into an [`Invocation`], probing the file system through `env`.
pub fn resolve(args: &[String], env: &dyn Environment) -> Result<Invocation, ResolveError> {
  let draft = match dispatch::dispatch(args, env.current_dir())? {
    dispatch::Dispatched::Done(invocation) => {
      debug!(?invocation, "dispatch finished early");
      return Ok(invocation);
    }
    dispatch::Dispatched::Draft(draft) => draft,
  };

  let options = merge::apply_direct_overrides(draft);
  let options = locate::detect_project(options, env)?;
  let options = output::derive_output_location(options, env.current_dir());
  let options = locate::locate_lib(options, env);
  let options = output::finalize_default_file_name(options);
  let options = output::finalize_sources(options);

  for property in ProjectProperty::ALL {
    if let Some(value) = options.project_properties.get(property) {
      debug!(%property, value = %value, "resolved project property");
    }
  }

  Ok(Invocation::Build(options))
}
