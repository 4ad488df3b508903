//! Package download and extraction for `add package`.
//!
//! A package is a single zip archive fetched from the package source with one
//! unconditional HTTP request. There is no dependency resolution.
//!
//! # Layout
//!
//! ```text
//! <folder>/packages/<name>[.<version>].nupkg   downloaded archive
//! <folder>/packages/<canonical-name>/          extracted contents
//! ```
//!
//! The canonical name comes from the response's `Content-Disposition` file
//! name when the server sends one.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use reqwest::blocking::Client;
use reqwest::header::CONTENT_DISPOSITION;
use thiserror::Error;
use tracing::{debug, info};

use crate::consts::PACKAGES_DIR;
use crate::platform::paths::package_source;
use crate::util::path::file_stem;

/// Errors that can occur while installing a package.
#[derive(Debug, Error)]
pub enum PackageError {
  #[error("failed to create directory {}: {source}", path.display())]
  CreateDir { path: PathBuf, source: io::Error },

  #[error("failed to remove {}: {source}", path.display())]
  Remove { path: PathBuf, source: io::Error },

  #[error("failed to download '{url}': {message}")]
  Download { url: String, message: String },

  #[error("failed to write {}: {source}", path.display())]
  Write { path: PathBuf, source: io::Error },

  #[error("failed to extract {}: {source}", path.display())]
  Extract {
    path: PathBuf,
    #[source]
    source: zip::result::ZipError,
  },
}

/// Something that can install a named package into a project folder.
pub trait PackageInstall {
  fn install(&self, folder: &Path, name: &str, version: Option<&str>) -> Result<InstalledPackage, PackageError>;
}

/// Result of a successful install.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledPackage {
  /// Canonical package name (folder name under `packages/`).
  pub name: String,
  /// Downloaded archive.
  pub archive: PathBuf,
  /// Folder the archive was extracted into.
  pub dir: PathBuf,
}

/// Installs packages from an HTTP package source.
#[derive(Debug, Clone)]
pub struct PackageInstaller {
  source: String,
  client: Client,
}

impl PackageInstaller {
  /// Create an installer for `source`, a base URL the package name is appended to.
  pub fn new(source: impl Into<String>) -> Self {
    Self {
      source: source.into(),
      client: Client::new(),
    }
  }

  /// Installer for the source configured in the environment.
  pub fn from_env() -> Self {
    Self::new(package_source())
  }

  /// Download URL for `name` at `version` (latest when `None`).
  pub fn package_url(&self, name: &str, version: Option<&str>) -> String {
    match version {
      Some(version) => format!("{}{name}/{version}", self.source),
      None => format!("{}{name}", self.source),
    }
  }

  /// Download `url` into `dest`, returning the `Content-Disposition` header.
  fn download(&self, url: &str, dest: &Path) -> Result<Option<String>, PackageError> {
    let download_err = |message: String| PackageError::Download {
      url: url.to_string(),
      message,
    };

    let mut response = self.client.get(url).send().map_err(|e| download_err(e.to_string()))?;
    if !response.status().is_success() {
      return Err(download_err(format!("HTTP {}", response.status())));
    }

    let disposition = response
      .headers()
      .get(CONTENT_DISPOSITION)
      .and_then(|v| v.to_str().ok())
      .map(str::to_string);

    let mut file = File::create(dest).map_err(|e| PackageError::Write {
      path: dest.to_path_buf(),
      source: e,
    })?;
    let size = response.copy_to(&mut file).map_err(|e| download_err(e.to_string()))?;
    debug!(path = %dest.display(), size, "package archive written");

    Ok(disposition)
  }
}

impl PackageInstall for PackageInstaller {
  fn install(&self, folder: &Path, name: &str, version: Option<&str>) -> Result<InstalledPackage, PackageError> {
    let version = version.filter(|v| !v.trim().is_empty());

    let packages_dir = folder.join(PACKAGES_DIR);
    fs::create_dir_all(&packages_dir).map_err(|e| PackageError::CreateDir {
      path: packages_dir.clone(),
      source: e,
    })?;

    let url = self.package_url(name, version);
    let local_name = match version {
      Some(version) => format!("{name}.{version}"),
      None => name.to_string(),
    };
    let archive = packages_dir.join(format!("{local_name}.nupkg"));
    remove_if_exists(&archive)?;

    info!(package = name, url = %url, "installing package");
    let disposition = self.download(&url, &archive)?;

    let canonical = disposition
      .as_deref()
      .and_then(filename_from_disposition)
      .map(|file| file_stem(Path::new(&file)))
      .filter(|stem| !stem.is_empty())
      .unwrap_or(local_name);

    let dir = packages_dir.join(&canonical);
    remove_if_exists(&dir)?;
    fs::create_dir_all(&dir).map_err(|e| PackageError::CreateDir {
      path: dir.clone(),
      source: e,
    })?;
    extract(&archive, &dir)?;

    info!(package = %canonical, path = %dir.display(), "package installed");

    Ok(InstalledPackage {
      name: canonical,
      archive,
      dir,
    })
  }
}

/// File name from a `Content-Disposition` header value, quotes removed.
fn filename_from_disposition(header: &str) -> Option<String> {
  let start = header.find("filename=")? + "filename=".len();
  let value = header[start..].split(';').next().unwrap_or_default();
  let value = value.replace('"', "");
  let value = value.trim();
  (!value.is_empty()).then(|| value.to_string())
}

fn remove_if_exists(path: &Path) -> Result<(), PackageError> {
  let result = if path.is_dir() {
    fs::remove_dir_all(path)
  } else if path.exists() {
    fs::remove_file(path)
  } else {
    return Ok(());
  };
  result.map_err(|e| PackageError::Remove {
    path: path.to_path_buf(),
    source: e,
  })
}

fn extract(archive_path: &Path, dest: &Path) -> Result<(), PackageError> {
  let extract_err = |source: zip::result::ZipError| PackageError::Extract {
    path: archive_path.to_path_buf(),
    source,
  };

  let file = File::open(archive_path).map_err(|e| extract_err(e.into()))?;
  let mut archive = zip::ZipArchive::new(file).map_err(extract_err)?;
  archive.extract(dest).map_err(extract_err)?;
  Ok(())
}
