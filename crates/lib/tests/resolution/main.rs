//! Resolution against a real file system.

use std::fs;
use std::path::PathBuf;

use bridge_lib::environment::FsEnvironment;
use bridge_lib::options::BuildOptions;
use bridge_lib::resolve::{Invocation, ResolveError, resolve};
use tempfile::TempDir;

fn args(tokens: &[&str]) -> Vec<String> {
  tokens.iter().map(|t| t.to_string()).collect()
}

fn build(temp: &TempDir, tokens: &[&str]) -> BuildOptions {
  let env = FsEnvironment::with_current_dir(temp.path());
  match resolve(&args(tokens), &env).unwrap() {
    Invocation::Build(options) => options,
    other => panic!("expected a build, got {other:?}"),
  }
}

#[test]
fn folder_switch_is_searched_for_projects() {
  let temp = TempDir::new().unwrap();
  fs::create_dir_all(temp.path().join("site")).unwrap();
  fs::write(temp.path().join("site").join("Site.CSPROJ"), "<Project/>").unwrap();
  fs::write(temp.path().join("Root.csproj"), "<Project/>").unwrap();

  let options = build(&temp, &["-f", "site"]);
  assert_eq!(
    options.project_location,
    Some(temp.path().join("site").join("Site.CSPROJ"))
  );
  assert_eq!(options.output_location, Some(PathBuf::from("Site")));
  assert_eq!(options.default_file_name, "Site");
}

#[test]
fn bridge_json_points_at_references() {
  let temp = TempDir::new().unwrap();
  let folder = temp.path().join("app");
  fs::create_dir_all(folder.join("bin")).unwrap();
  fs::write(folder.join("bridge.json"), r#"{ "referencesPath": "refs", "output": "ignored" }"#).unwrap();

  let options = build(&temp, &["--folder", "app"]);
  assert_eq!(options.lib, Some(folder.join("refs").join("app.dll")));
  assert_eq!(options.output_location, Some(folder.clone()));
  assert_eq!(options.default_file_name, "app");
}

#[test]
fn malformed_bridge_json_falls_through_to_conventions() {
  let temp = TempDir::new().unwrap();
  let folder = temp.path().join("app");
  fs::create_dir_all(folder.join("Libs")).unwrap();
  fs::write(folder.join("bridge.json"), "{ not json").unwrap();

  let options = build(&temp, &["-f", "app"]);
  assert_eq!(options.references_path, Some(folder.join("Libs")));
  assert_eq!(options.lib, Some(folder.join("Libs").join("app.dll")));
}

#[test]
fn two_projects_are_ambiguous() {
  let temp = TempDir::new().unwrap();
  fs::write(temp.path().join("A.csproj"), "").unwrap();
  fs::write(temp.path().join("B.csproj"), "").unwrap();

  let env = FsEnvironment::with_current_dir(temp.path());
  let err = resolve(&args(&["build"]), &env).unwrap_err();
  match err {
    ResolveError::AmbiguousProject { candidates } => assert_eq!(candidates.len(), 2),
    other => panic!("unexpected error {other:?}"),
  }
}

#[test]
fn parent_folder_switch_names_the_assembly_after_the_parent() {
  let temp = TempDir::new().unwrap();
  let app = temp.path().join("app");
  let sub = app.join("sub");
  fs::create_dir_all(&sub).unwrap();

  let env = FsEnvironment::with_current_dir(&sub);
  let options = match resolve(&args(&["-f", ".."]), &env).unwrap() {
    Invocation::Build(options) => options,
    other => panic!("expected a build, got {other:?}"),
  };

  assert_eq!(options.lib, Some(app.join("bin").join("app.dll")));
  assert_eq!(options.default_file_name, "app");
  assert_eq!(options.sources.as_deref(), Some("*.cs"));
}
