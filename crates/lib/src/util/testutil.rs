//! Test utilities for bridge-lib.
//!
//! [`MemoryEnvironment`] is an in-memory [`Environment`] so resolution can be
//! exercised without touching the real file system.

use std::cell::Cell;
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};

use crate::environment::Environment;

/// In-memory file tree with a fixed working directory.
#[derive(Debug, Default)]
pub struct MemoryEnvironment {
  cwd: PathBuf,
  files: BTreeMap<PathBuf, String>,
  dirs: BTreeSet<PathBuf>,
  listings: Cell<usize>,
}

impl MemoryEnvironment {
  /// Create an environment whose working directory exists and is empty.
  pub fn new(cwd: impl Into<PathBuf>) -> Self {
    let cwd = cwd.into();
    let mut env = Self {
      cwd: cwd.clone(),
      ..Self::default()
    };
    env.add_dir_chain(&cwd);
    env
  }

  /// Add a file (and its parent folders).
  pub fn with_file(mut self, path: impl Into<PathBuf>, content: &str) -> Self {
    let path = path.into();
    if let Some(parent) = path.parent() {
      self.add_dir_chain(parent);
    }
    self.files.insert(path, content.to_string());
    self
  }

  /// Add an empty folder (and its parents).
  pub fn with_dir(mut self, path: impl Into<PathBuf>) -> Self {
    let path = path.into();
    self.add_dir_chain(&path);
    self
  }

  /// Number of directory listings performed so far.
  pub fn listings(&self) -> usize {
    self.listings.get()
  }

  fn add_dir_chain(&mut self, path: &Path) {
    for ancestor in path.ancestors() {
      if ancestor.as_os_str().is_empty() {
        break;
      }
      self.dirs.insert(ancestor.to_path_buf());
    }
  }
}

impl Environment for MemoryEnvironment {
  fn current_dir(&self) -> &Path {
    &self.cwd
  }

  fn files_with_extension(&self, dir: &Path, extension: &str) -> io::Result<Vec<PathBuf>> {
    self.listings.set(self.listings.get() + 1);
    if !self.dirs.contains(dir) {
      return Err(io::Error::new(io::ErrorKind::NotFound, format!("{} not found", dir.display())));
    }
    Ok(
      self
        .files
        .keys()
        .filter(|p| p.parent() == Some(dir))
        .filter(|p| {
          p.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(extension))
        })
        .cloned()
        .collect(),
    )
  }

  fn dir_exists(&self, path: &Path) -> bool {
    self.dirs.contains(path)
  }

  fn read_to_string(&self, path: &Path) -> io::Result<String> {
    self
      .files
      .get(path)
      .cloned()
      .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, format!("{} not found", path.display())))
  }
}
