//! Project scaffolding for the `new` verb.
//!
//! A template is a directory under the templates root. Scaffolding copies its
//! tree into the target folder, then expands a copied `packages.config`
//! manifest into package installs and removes the manifest.

mod manifest;

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::consts::PACKAGES_MANIFEST;
use crate::package::{InstalledPackage, PackageError, PackageInstall};

pub use manifest::{ManifestError, PackageReference, parse_manifest};

/// Errors that can occur while scaffolding a project.
#[derive(Debug, Error)]
pub enum ScaffoldError {
  #[error("failed to walk template {}: {source}", path.display())]
  Walk {
    path: PathBuf,
    #[source]
    source: walkdir::Error,
  },

  #[error("failed to create directory {}: {source}", path.display())]
  CreateDir { path: PathBuf, source: std::io::Error },

  #[error("failed to copy {} to {}: {source}", from.display(), to.display())]
  Copy {
    from: PathBuf,
    to: PathBuf,
    source: std::io::Error,
  },

  #[error("failed to read package manifest {}: {source}", path.display())]
  ReadManifest { path: PathBuf, source: std::io::Error },

  #[error("invalid package manifest {}: {source}", path.display())]
  Manifest {
    path: PathBuf,
    #[source]
    source: ManifestError,
  },

  #[error("failed to install package '{id}': {source}")]
  Package {
    id: String,
    #[source]
    source: PackageError,
  },

  #[error("failed to remove package manifest {}: {source}", path.display())]
  RemoveManifest { path: PathBuf, source: std::io::Error },
}

/// Options for scaffolding a project.
#[derive(Debug, Clone)]
pub struct ScaffoldOptions {
  /// Root folder holding one sub-folder per template.
  pub templates_dir: PathBuf,
  /// Template identifier (sub-folder name).
  pub template: String,
  /// Folder the project is created in.
  pub folder: PathBuf,
}

/// Result of scaffolding.
#[derive(Debug, Default)]
pub struct ScaffoldResult {
  /// Whether the template existed. Nothing is created when it didn't.
  pub template_found: bool,
  /// Files copied into the target folder.
  pub files: Vec<PathBuf>,
  /// Packages installed from the template's manifest.
  pub packages: Vec<InstalledPackage>,
}

/// Create a project from a template.
///
/// A missing template is logged and reported through
/// [`ScaffoldResult::template_found`] rather than as an error.
///
/// # Errors
///
/// Returns an error if copying fails, the manifest is malformed or a listed
/// package fails to install.
pub fn create_project(options: &ScaffoldOptions, installer: &dyn PackageInstall) -> Result<ScaffoldResult, ScaffoldError> {
  let template_dir = options.templates_dir.join(&options.template);
  if !template_dir.is_dir() {
    warn!(template = %options.template, path = %template_dir.display(), "template not found");
    return Ok(ScaffoldResult::default());
  }

  info!(template = %options.template, folder = %options.folder.display(), "creating project");
  let files = copy_tree(&template_dir, &options.folder)?;
  let packages = install_manifest_packages(&options.folder, installer)?;

  Ok(ScaffoldResult {
    template_found: true,
    files,
    packages,
  })
}

/// Recreate the tree under `from` inside `to`, overwriting existing files.
fn copy_tree(from: &Path, to: &Path) -> Result<Vec<PathBuf>, ScaffoldError> {
  let mut copied = Vec::new();

  for entry in WalkDir::new(from).min_depth(1).sort_by_file_name() {
    let entry = entry.map_err(|e| ScaffoldError::Walk {
      path: from.to_path_buf(),
      source: e,
    })?;
    let Ok(relative) = entry.path().strip_prefix(from) else {
      continue;
    };
    let dest = to.join(relative);

    if entry.file_type().is_dir() {
      fs::create_dir_all(&dest).map_err(|e| ScaffoldError::CreateDir {
        path: dest.clone(),
        source: e,
      })?;
      continue;
    }

    if let Some(parent) = dest.parent() {
      fs::create_dir_all(parent).map_err(|e| ScaffoldError::CreateDir {
        path: parent.to_path_buf(),
        source: e,
      })?;
    }
    fs::copy(entry.path(), &dest).map_err(|e| ScaffoldError::Copy {
      from: entry.path().to_path_buf(),
      to: dest.clone(),
      source: e,
    })?;
    debug!(path = %dest.display(), "copied template file");
    copied.push(dest);
  }

  Ok(copied)
}

/// Install everything listed in `<folder>/packages.config`, then delete it.
fn install_manifest_packages(
  folder: &Path,
  installer: &dyn PackageInstall,
) -> Result<Vec<InstalledPackage>, ScaffoldError> {
  let manifest_path = folder.join(PACKAGES_MANIFEST);
  if !manifest_path.is_file() {
    return Ok(Vec::new());
  }

  let xml = fs::read_to_string(&manifest_path).map_err(|e| ScaffoldError::ReadManifest {
    path: manifest_path.clone(),
    source: e,
  })?;
  let references = parse_manifest(&xml).map_err(|e| ScaffoldError::Manifest {
    path: manifest_path.clone(),
    source: e,
  })?;

  let mut installed = Vec::with_capacity(references.len());
  for reference in references {
    let package = installer
      .install(folder, &reference.id, reference.version.as_deref())
      .map_err(|e| ScaffoldError::Package {
        id: reference.id.clone(),
        source: e,
      })?;
    installed.push(package);
  }

  fs::remove_file(&manifest_path).map_err(|e| ScaffoldError::RemoveManifest {
    path: manifest_path,
    source: e,
  })?;

  Ok(installed)
}
