//! File-system capability used by configuration resolution.
//!
//! Every probe the resolver performs (current directory, project listing,
//! folder existence, config file reads) goes through [`Environment`], so the
//! resolution algorithm can run against an in-memory fake in tests.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// The narrow set of file-system queries resolution depends on.
pub trait Environment {
  /// Directory relative arguments are resolved against.
  fn current_dir(&self) -> &Path;

  /// Files directly inside `dir` whose extension matches `extension`
  /// case-insensitively. Not recursive.
  fn files_with_extension(&self, dir: &Path, extension: &str) -> io::Result<Vec<PathBuf>>;

  fn dir_exists(&self, path: &Path) -> bool;

  fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

/// [`Environment`] backed by the real file system.
#[derive(Debug, Clone)]
pub struct FsEnvironment {
  cwd: PathBuf,
}

impl FsEnvironment {
  /// Capture the process working directory.
  pub fn from_process() -> io::Result<Self> {
    let cwd = std::env::current_dir()?;
    Ok(Self::with_current_dir(cwd))
  }

  pub fn with_current_dir(cwd: impl Into<PathBuf>) -> Self {
    Self { cwd: cwd.into() }
  }
}

impl Environment for FsEnvironment {
  fn current_dir(&self) -> &Path {
    &self.cwd
  }

  fn files_with_extension(&self, dir: &Path, extension: &str) -> io::Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    for entry in fs::read_dir(dir)? {
      let entry = entry?;
      if !entry.file_type()?.is_file() {
        continue;
      }
      let path = entry.path();
      let matches = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(extension));
      if matches {
        found.push(path);
      }
    }
    found.sort();
    Ok(found)
  }

  fn dir_exists(&self, path: &Path) -> bool {
    path.is_dir()
  }

  fn read_to_string(&self, path: &Path) -> io::Result<String> {
    fs::read_to_string(path)
  }
}
