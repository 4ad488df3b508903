//! `new` command integration tests.

use predicates::prelude::*;

use super::common::TestEnv;

#[test]
fn new_copies_default_template() {
  let env = TestEnv::new();
  env.write_template_file("classlib/App.csproj", "<Project/>");
  env.write_template_file("classlib/Properties/AssemblyInfo.cs", "// info");

  env
    .bridge_cmd()
    .arg("new")
    .assert()
    .success()
    .stdout(predicate::str::contains("Project created"));

  assert!(env.project.join("App.csproj").is_file());
  assert!(env.project.join("Properties").join("AssemblyInfo.cs").is_file());
}

#[test]
fn new_uses_named_template() {
  let env = TestEnv::new();
  env.write_template_file("classlib/Lib.csproj", "<Project/>");
  env.write_template_file("web/Web.csproj", "<Project/>");

  env.bridge_cmd().args(["new", "web"]).assert().success();

  assert!(env.project.join("Web.csproj").is_file());
  assert!(!env.project.join("Lib.csproj").exists());
}

#[test]
fn new_ignores_switch_after_verb() {
  let env = TestEnv::new();
  env.write_template_file("classlib/App.csproj", "<Project/>");

  env.bridge_cmd().args(["new", "--rebuild"]).assert().success();

  assert!(env.project.join("App.csproj").is_file());
}

#[test]
fn new_with_missing_template_warns() {
  let env = TestEnv::new();

  env
    .bridge_cmd()
    .args(["new", "nope"])
    .assert()
    .success()
    .stderr(predicate::str::contains("Template 'nope' not found"));
}

#[test]
fn new_with_malformed_manifest_fails() {
  let env = TestEnv::new();
  env.write_template_file("classlib/packages.config", "<packages>");

  env
    .bridge_cmd()
    .arg("new")
    .assert()
    .failure()
    .stderr(predicate::str::contains("invalid package manifest"));
}
