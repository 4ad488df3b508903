//! Implementation of the `bridge new` command.

use std::path::Path;

use anyhow::{Context, Result};

use bridge_lib::package::PackageInstaller;
use bridge_lib::platform::paths::templates_dir;
use bridge_lib::scaffold::{ScaffoldOptions, create_project};

use crate::output::{print_info, print_stat, print_success, print_warning, symbols};

/// Create a project in `folder` from `template`.
///
/// An unknown template is reported as a warning, not a failure.
pub fn cmd_new(folder: &Path, template: &str) -> Result<()> {
  let options = ScaffoldOptions {
    templates_dir: templates_dir(),
    template: template.to_string(),
    folder: folder.to_path_buf(),
  };

  print_info(&format!("Creating '{}' project in {}", template, folder.display()));

  let installer = PackageInstaller::from_env();
  let result = create_project(&options, &installer)
    .with_context(|| format!("Failed to create project from template '{}'", template))?;

  if !result.template_found {
    print_warning(&format!(
      "Template '{}' not found in {}",
      template,
      options.templates_dir.display()
    ));
    return Ok(());
  }

  for package in &result.packages {
    println!("  {} {}", symbols::PLUS, package.name);
  }

  print_success("Project created");
  print_stat("Files", &result.files.len().to_string());
  print_stat("Packages", &result.packages.len().to_string());

  Ok(())
}
