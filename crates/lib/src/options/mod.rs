//! The build configuration record produced by resolution.
//!
//! `BuildOptions` starts out empty, is threaded by value through the
//! resolution stages and is handed read-only to the compilation pipeline
//! once resolution completes.

mod properties;

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::consts::DEFAULT_SOURCES;

pub use properties::{ProjectProperties, ProjectProperty, PropertyError};

/// Fully or partially resolved build configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BuildOptions {
  /// Project descriptor to build. Mutually exclusive with `lib`.
  pub project_location: Option<PathBuf>,
  /// Prebuilt assembly to process directly. Mutually exclusive with `project_location`.
  pub lib: Option<PathBuf>,
  /// Location of the compiler library (informational).
  pub bridge_location: Option<PathBuf>,
  /// Output directory or file stem. Always set once resolution completes.
  pub output_location: Option<PathBuf>,
  /// Absolute folder holding dependency assemblies.
  pub references_path: Option<PathBuf>,
  pub sources: Option<String>,
  pub recursive: bool,
  pub rebuild: bool,
  pub extract_core: bool,
  pub no_timestamp: bool,
  pub run: bool,
  /// Working directory for folder-mode builds.
  pub folder: Option<PathBuf>,
  pub default_file_name: String,
  pub project_properties: ProjectProperties,
}

impl Default for BuildOptions {
  fn default() -> Self {
    Self::new()
  }
}

impl BuildOptions {
  pub fn new() -> Self {
    Self {
      project_location: None,
      lib: None,
      bridge_location: None,
      output_location: None,
      references_path: None,
      sources: None,
      recursive: true,
      rebuild: false,
      extract_core: true,
      no_timestamp: false,
      run: false,
      folder: None,
      default_file_name: String::new(),
      project_properties: ProjectProperties::default(),
    }
  }

  /// True when no project descriptor is known, so a prebuilt assembly is used.
  pub fn is_folder_mode(&self) -> bool {
    self.project_location.is_none()
  }

  /// Source pattern, falling back to the default wildcard.
  pub fn sources_pattern(&self) -> &str {
    self.sources.as_deref().unwrap_or(DEFAULT_SOURCES)
  }

  /// Folder the build operates in: `folder` when set, else `cwd`.
  pub fn build_folder(&self, cwd: &Path) -> PathBuf {
    self.folder.clone().unwrap_or_else(|| cwd.to_path_buf())
  }
}
