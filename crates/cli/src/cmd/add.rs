//! Implementation of the `bridge add package` command.

use std::io::Write;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};

use bridge_lib::package::{PackageInstall, PackageInstaller};

use crate::output::{format_elapsed, print_stat};

/// Download `name` (at `version`, latest when `None`) into `folder/packages`.
pub fn cmd_add_package(folder: &Path, name: &str, version: Option<&str>) -> Result<()> {
  print!("Installing {name}: ... ");
  // The progress line stays open until the download finishes.
  std::io::stdout().flush().ok();

  let started = Instant::now();
  let installer = PackageInstaller::from_env();
  let installed = match installer.install(folder, name, version) {
    Ok(installed) => installed,
    Err(e) => {
      println!("Failed.");
      return Err(e).with_context(|| format!("Failed to install package '{}'", name));
    }
  };
  println!("Done.");

  print_stat("Package", &installed.name);
  print_stat("Location", &installed.dir.display().to_string());
  print_stat("Elapsed", &format_elapsed(started.elapsed()));

  Ok(())
}
