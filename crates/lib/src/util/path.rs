//! Small path helpers with string results.

use std::path::{Component, Path, PathBuf};

/// File name without its final extension, or empty when there is none.
pub fn file_stem(path: &Path) -> String {
  path
    .file_stem()
    .map(|s| s.to_string_lossy().into_owned())
    .unwrap_or_default()
}

/// Final component of `path`, or empty when there is none.
pub fn file_name(path: &Path) -> String {
  path
    .file_name()
    .map(|s| s.to_string_lossy().into_owned())
    .unwrap_or_default()
}

/// Name of a folder, falling back to the whole path for roots.
pub fn folder_name(path: &Path) -> String {
  match path.file_name() {
    Some(name) => name.to_string_lossy().into_owned(),
    None => path.to_string_lossy().into_owned(),
  }
}

/// Resolve `.` and `..` components without touching the file system.
///
/// `..` at the root, or after another leading `..`, is kept.
pub fn normalize(path: &Path) -> PathBuf {
  let mut normalized = PathBuf::new();
  for component in path.components() {
    match component {
      Component::CurDir => {}
      Component::ParentDir => match normalized.components().next_back() {
        Some(Component::Normal(_)) => {
          normalized.pop();
        }
        Some(Component::RootDir | Component::Prefix(_)) => {}
        _ => normalized.push(".."),
      },
      other => normalized.push(other.as_os_str()),
    }
  }
  normalized
}

/// Whether `arg` ends in `.{extension}`, ignoring ASCII case.
pub fn has_extension(arg: &str, extension: &str) -> bool {
  let suffix_len = extension.len() + 1;
  if arg.len() < suffix_len || !arg.is_char_boundary(arg.len() - suffix_len) {
    return false;
  }
  let suffix = &arg[arg.len() - suffix_len..];
  suffix.starts_with('.') && suffix[1..].eq_ignore_ascii_case(extension)
}
