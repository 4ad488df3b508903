//! Locations and endpoints configurable through environment variables.
//!
//! | variable                | default                                  |
//! |-------------------------|------------------------------------------|
//! | `BRIDGE_TEMPLATES`      | `Templates/` next to the executable      |
//! | `BRIDGE_PACKAGE_SOURCE` | `https://www.nuget.org/api/v2/package/`  |
//! | `BRIDGE_TRANSLATOR`     | `bridge-translator` on `PATH`            |

use std::path::PathBuf;

use crate::consts::{DEFAULT_PACKAGE_SOURCE, DEFAULT_TRANSLATOR};

pub const TEMPLATES_ENV: &str = "BRIDGE_TEMPLATES";
pub const PACKAGE_SOURCE_ENV: &str = "BRIDGE_PACKAGE_SOURCE";
pub const TRANSLATOR_ENV: &str = "BRIDGE_TRANSLATOR";

fn non_empty_var(name: &str) -> Option<String> {
  std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Directory containing the running executable, or `.` if it can't be determined.
pub fn install_dir() -> PathBuf {
  std::env::current_exe()
    .ok()
    .and_then(|exe| exe.parent().map(|p| p.to_path_buf()))
    .unwrap_or_else(|| PathBuf::from("."))
}

/// Root folder holding one sub-folder per project template.
pub fn templates_dir() -> PathBuf {
  non_empty_var(TEMPLATES_ENV)
    .map(PathBuf::from)
    .unwrap_or_else(|| install_dir().join("Templates"))
}

/// Base URL packages are downloaded from. Always ends with `/`.
pub fn package_source() -> String {
  let mut source = non_empty_var(PACKAGE_SOURCE_ENV).unwrap_or_else(|| DEFAULT_PACKAGE_SOURCE.to_string());
  if !source.ends_with('/') {
    source.push('/');
  }
  source
}

/// Translator executable the build pipeline launches.
pub fn translator_program() -> PathBuf {
  non_empty_var(TRANSLATOR_ENV)
    .map(PathBuf::from)
    .unwrap_or_else(|| PathBuf::from(DEFAULT_TRANSLATOR))
}
