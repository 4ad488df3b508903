//! Default output location and file name derivation.

use std::path::{Path, PathBuf};

use crate::options::BuildOptions;
use crate::util::path::{file_name, file_stem};

/// Default the output location when `--output` was not given.
///
/// Project mode uses the project file stem; folder mode uses the build folder.
pub(crate) fn derive_output_location(mut options: BuildOptions, cwd: &Path) -> BuildOptions {
  let explicit = options.output_location.as_ref().is_some_and(|p| !p.as_os_str().is_empty());
  if explicit {
    return options;
  }

  let derived = match &options.project_location {
    Some(project) => PathBuf::from(file_stem(project)),
    None => options.build_folder(cwd),
  };
  options.output_location = Some(derived);
  options
}

/// Fall back to the output location's file name when no default file name
/// was derived from an assembly.
pub(crate) fn finalize_default_file_name(mut options: BuildOptions) -> BuildOptions {
  if options.default_file_name.trim().is_empty() {
    options.default_file_name = options.output_location.as_deref().map(file_name).unwrap_or_default();
  }
  options
}

/// Record the source pattern explicitly, using the default wildcard when unset.
pub(crate) fn finalize_sources(mut options: BuildOptions) -> BuildOptions {
  let pattern = options.sources_pattern().to_string();
  options.sources = Some(pattern);
  options
}
