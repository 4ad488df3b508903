//! Project and assembly location fallback chain.

use std::path::{Path, PathBuf};

use tracing::{debug, error, info};

use super::ResolveError;
use crate::consts::{ASSEMBLY_EXTENSION, DEFAULT_REFERENCES_PATHS, PROJECT_EXTENSION};
use crate::environment::Environment;
use crate::options::BuildOptions;
use crate::project_config::ProjectConfig;
use crate::util::path::{file_stem, folder_name};

/// Adopt the single project descriptor in the build folder when neither a
/// project nor an assembly was given.
///
/// Zero matches leaves the options in folder mode; more than one is an error.
pub(crate) fn detect_project(mut options: BuildOptions, env: &dyn Environment) -> Result<BuildOptions, ResolveError> {
  if options.project_location.is_some() || options.lib.is_some() {
    return Ok(options);
  }

  let folder = options.build_folder(env.current_dir());
  let mut candidates = match env.files_with_extension(&folder, PROJECT_EXTENSION) {
    Ok(candidates) => candidates,
    Err(e) => {
      error!(folder = %folder.display(), error = %e, "failed to search for project files");
      Vec::new()
    }
  };

  if candidates.len() > 1 {
    return Err(ResolveError::AmbiguousProject { candidates });
  }

  match candidates.pop() {
    Some(project) => {
      info!(project = %project.display(), "defaulting project location");
      options.project_location = Some(project);
    }
    None => debug!(folder = %folder.display(), "no project file found, using folder mode"),
  }

  Ok(options)
}

/// In folder mode, fill in the assembly to process and derive the default
/// file and assembly names from it.
///
/// The assembly is looked up, in order, from:
/// 1. the explicit references path,
/// 2. `referencesPath` in the folder's project config,
/// 3. the first existing conventional references folder (`bin`, `Libs`),
///    which also becomes the references path,
/// 4. `bin/` under the build folder, whether or not it exists.
///
/// In every case the assembly file is named after the build folder.
pub(crate) fn locate_lib(mut options: BuildOptions, env: &dyn Environment) -> BuildOptions {
  if !options.is_folder_mode() {
    return options;
  }

  if options.lib.is_none() {
    let folder = options.build_folder(env.current_dir());
    let assembly = format!("{}.{}", folder_name(&folder), ASSEMBLY_EXTENSION);

    let lib_dir = if let Some(references) = &options.references_path {
      folder.join(references)
    } else if let Some(references) = ProjectConfig::load(
      env,
      &folder,
      options.project_properties.configuration.as_deref(),
    )
    .references_dir(&folder)
    {
      references
    } else if let Some(conventional) = first_existing_references_dir(env, &folder) {
      options.references_path = Some(conventional.clone());
      conventional
    } else {
      folder.join(DEFAULT_REFERENCES_PATHS[0])
    };

    let lib = lib_dir.join(assembly);
    debug!(lib = %lib.display(), "defaulting assembly location");
    options.lib = Some(lib);
  }

  let stem = options.lib.as_deref().map(file_stem).unwrap_or_default();
  options.project_properties.assembly_name = Some(stem.clone());
  options.default_file_name = stem;

  options
}

fn first_existing_references_dir(env: &dyn Environment, folder: &Path) -> Option<PathBuf> {
  DEFAULT_REFERENCES_PATHS
    .iter()
    .map(|name| folder.join(name))
    .find(|candidate| env.dir_exists(candidate))
}
