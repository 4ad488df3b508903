//! Per-folder project configuration (`bridge.json`).
//!
//! The locator only needs the default reference-assemblies folder from this
//! file. A configuration-specific overlay `bridge.<Configuration>.json` is
//! read on top of the base file when a configuration name is active.
//!
//! # Format
//!
//! ```json
//! {
//!   "referencesPath": "lib/refs"
//! }
//! ```

use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::consts::CONFIG_FILE_NAME;
use crate::environment::Environment;

/// Settings read from the per-folder configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProjectConfig {
  /// Folder with reference assemblies, absolute or relative to the project folder.
  #[serde(default, rename = "referencesPath", alias = "ReferencesPath")]
  pub references_path: Option<String>,
}

impl ProjectConfig {
  /// Load the configuration for `folder`, keyed by the active `configuration`.
  ///
  /// Missing files yield defaults. Unreadable or malformed files are logged
  /// and treated as empty.
  pub fn load(env: &dyn Environment, folder: &Path, configuration: Option<&str>) -> Self {
    let base = read_config(env, &folder.join(CONFIG_FILE_NAME)).unwrap_or_default();

    let Some(configuration) = configuration.filter(|c| !c.trim().is_empty()) else {
      return base;
    };

    match read_config(env, &folder.join(overlay_file_name(configuration))) {
      Some(overlay) => base.overlay(overlay),
      None => base,
    }
  }

  /// Values present in `other` replace ours.
  fn overlay(self, other: ProjectConfig) -> Self {
    Self {
      references_path: other.references_path.or(self.references_path),
    }
  }

  /// The configured references folder, resolved against `folder`.
  pub fn references_dir(&self, folder: &Path) -> Option<PathBuf> {
    let raw = self.references_path.as_deref().filter(|p| !p.trim().is_empty())?;
    Some(folder.join(raw))
  }
}

fn overlay_file_name(configuration: &str) -> String {
  let stem = CONFIG_FILE_NAME.trim_end_matches(".json");
  format!("{stem}.{configuration}.json")
}

fn read_config(env: &dyn Environment, path: &Path) -> Option<ProjectConfig> {
  let content = match env.read_to_string(path) {
    Ok(content) => content,
    Err(e) if e.kind() == io::ErrorKind::NotFound => {
      debug!(path = %path.display(), "no project config");
      return None;
    }
    Err(e) => {
      warn!(path = %path.display(), error = %e, "failed to read project config, ignoring it");
      return None;
    }
  };

  match serde_json::from_str(&content) {
    Ok(config) => Some(config),
    Err(e) => {
      warn!(path = %path.display(), error = %e, "failed to parse project config, ignoring it");
      None
    }
  }
}
