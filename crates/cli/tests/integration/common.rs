//! Shared test helpers for CLI integration tests.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

/// Isolated test environment.
///
/// The builder runs in `<temp>/project`; templates live in `<temp>/Templates`.
pub struct TestEnv {
  pub temp: TempDir,
  pub project: PathBuf,
}

impl TestEnv {
  pub fn new() -> Self {
    let temp = TempDir::new().unwrap();
    let project = temp.path().join("project");
    std::fs::create_dir_all(&project).unwrap();
    let project = dunce::canonicalize(&project).unwrap_or(project);
    Self { temp, project }
  }

  /// Write a file relative to the project folder.
  pub fn write_file(&self, relative_path: &str, content: &str) {
    write(&self.project.join(relative_path), content);
  }

  /// Write a file relative to the templates root.
  pub fn write_template_file(&self, relative_path: &str, content: &str) {
    write(&self.templates_path().join(relative_path), content);
  }

  pub fn templates_path(&self) -> PathBuf {
    self.temp.path().join("Templates")
  }

  /// Where the fake translator stores the options it received.
  pub fn received_path(&self) -> PathBuf {
    self.temp.path().join("received.json")
  }

  /// Install a shell script as the translator.
  #[cfg(unix)]
  pub fn translator(&self, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = self.temp.path().join("translator.sh");
    std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
  }

  /// Translator that records its input and reports `output` as the output folder.
  #[cfg(unix)]
  pub fn recording_translator(&self, output: &Path) -> PathBuf {
    self.translator(&format!(
      "cat > '{}'\necho '{{\"outputPath\": \"{}\"}}'",
      self.received_path().display(),
      output.display()
    ))
  }

  /// Options the recording translator received.
  pub fn received(&self) -> serde_json::Value {
    let content = std::fs::read_to_string(self.received_path()).unwrap();
    serde_json::from_str(&content).unwrap()
  }

  /// Get a pre-configured Command for the bridge binary.
  ///
  /// Sets environment variables for isolated testing:
  /// - `BRIDGE_TEMPLATES`: templates root inside the temp folder
  /// - `BRIDGE_TRANSLATOR`: the test translator (missing until one is installed)
  /// - `BRIDGE_PACKAGE_SOURCE`: an address nothing listens on
  pub fn bridge_cmd(&self) -> Command {
    let mut cmd: Command = cargo_bin_cmd!("bridge");
    cmd.current_dir(&self.project);
    cmd.env("BRIDGE_TEMPLATES", self.templates_path());
    cmd.env("BRIDGE_TRANSLATOR", self.temp.path().join("translator.sh"));
    cmd.env("BRIDGE_PACKAGE_SOURCE", "http://127.0.0.1:9/");
    cmd.env("RUST_LOG", "info");
    cmd
  }

  /// Last component of the project folder.
  pub fn folder_name(&self) -> String {
    self.project.file_name().unwrap().to_string_lossy().into_owned()
  }
}

fn write(path: &Path, content: &str) {
  if let Some(parent) = path.parent() {
    std::fs::create_dir_all(parent).unwrap();
  }
  std::fs::write(path, content).unwrap();
}
