//! Build command integration tests.
//!
//! These run a shell script in place of the translator.
#![cfg(unix)]

use predicates::prelude::*;

use super::common::TestEnv;

#[test]
fn folder_mode_resolves_lib_from_libs_folder() {
  let env = TestEnv::new();
  std::fs::create_dir_all(env.project.join("Libs")).unwrap();
  let output = env.project.join("out");
  env.recording_translator(&output);

  env
    .bridge_cmd()
    .arg("build")
    .assert()
    .success()
    .stdout(predicate::str::contains("Build complete"));

  let received = env.received();
  let libs = env.project.join("Libs");
  let lib = libs.join(format!("{}.dll", env.folder_name()));
  assert_eq!(received["Lib"], lib.display().to_string());
  assert_eq!(received["ReferencesPath"], libs.display().to_string());
  assert_eq!(received["Rebuild"], true);
  assert_eq!(received["DefaultFileName"], env.folder_name());
  assert_eq!(received["ProjectProperties"]["AssemblyName"], env.folder_name());
  assert_eq!(received["OutputLocation"], env.project.display().to_string());
}

#[test]
fn direct_switches_override_settings() {
  let env = TestEnv::new();
  env.recording_translator(&env.project.join("out"));

  env
    .bridge_cmd()
    .args(["-S", "Configuration:Debug,Platform:x86", "-c", "Release", "App.csproj"])
    .assert()
    .success();

  let received = env.received();
  assert_eq!(received["ProjectLocation"], "App.csproj");
  assert_eq!(received["OutputLocation"], "App");
  assert_eq!(received["ProjectProperties"]["Configuration"], "Release");
  assert_eq!(received["ProjectProperties"]["Platform"], "x86");
}

#[test]
fn single_project_is_detected() {
  let env = TestEnv::new();
  env.write_file("Site.csproj", "<Project/>");
  env.recording_translator(&env.project.join("out"));

  env
    .bridge_cmd()
    .arg("-notimestamp")
    .assert()
    .success()
    .stderr(predicate::str::contains("defaulting project location"));

  let received = env.received();
  assert_eq!(
    received["ProjectLocation"],
    env.project.join("Site.csproj").display().to_string()
  );
  assert_eq!(received["NoTimestamp"], true);
}

#[test]
fn terminator_binds_one_positional_token() {
  let env = TestEnv::new();
  env.recording_translator(&env.project.join("out"));

  env
    .bridge_cmd()
    .args(["--", "x.csproj", "y.dll", "--bogus"])
    .assert()
    .success();

  let received = env.received();
  assert_eq!(received["ProjectLocation"], "x.csproj");
  assert!(received["Lib"].is_null());
}

#[test]
fn translator_diagnostic_is_reported_with_causes() {
  let env = TestEnv::new();
  env.translator(
    r#"cat > /dev/null
echo '{"message": "bad", "fileName": "A.cs", "startLine": 1, "startColumn": 2, "inner": {"message": "deeper"}}' >&2
exit 1"#,
  );

  env
    .bridge_cmd()
    .arg("App.dll")
    .assert()
    .failure()
    .stderr(predicate::str::contains("A.cs(1, 2): bad"))
    .stderr(predicate::str::contains("caused by: deeper"));
}

#[test]
fn run_without_page_warns_and_succeeds() {
  let env = TestEnv::new();
  env.recording_translator(&env.project.join("out"));

  env
    .bridge_cmd()
    .args(["run", "-lib", "App.dll"])
    .assert()
    .success()
    .stderr(predicate::str::contains("nothing to run"));

  assert_eq!(env.received()["Run"], true);
}
