//! `add package` command integration tests.

use std::io::{Cursor, Write};

use predicates::prelude::*;
use zip::write::SimpleFileOptions;

use super::common::TestEnv;

fn package_archive() -> Vec<u8> {
  let mut buf = Cursor::new(Vec::new());
  {
    let mut zip = zip::ZipWriter::new(&mut buf);
    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
    zip.start_file("Retyped.dom.nuspec", options).unwrap();
    zip.write_all(b"<package/>").unwrap();
    zip.finish().unwrap();
  }
  buf.into_inner()
}

#[test]
fn add_package_downloads_and_extracts() {
  let mut server = mockito::Server::new();
  let mock = server
    .mock("GET", "/Retyped.dom/2.8.0")
    .with_status(200)
    .with_header("content-disposition", "attachment; filename=retyped.dom.2.8.0.nupkg")
    .with_body(package_archive())
    .create();

  let env = TestEnv::new();
  env
    .bridge_cmd()
    .env("BRIDGE_PACKAGE_SOURCE", format!("{}/", server.url()))
    .args(["add", "package", "Retyped.dom", "-v", "2.8.0"])
    .assert()
    .success()
    .stdout(predicate::str::contains("Installing Retyped.dom: ... Done."));

  mock.assert();
  let packages = env.project.join("packages");
  assert!(packages.join("Retyped.dom.2.8.0.nupkg").is_file());
  assert!(packages.join("retyped.dom.2.8.0").join("Retyped.dom.nuspec").is_file());
}

#[test]
fn add_package_reports_http_failure() {
  let mut server = mockito::Server::new();
  server.mock("GET", "/Missing").with_status(404).create();

  let env = TestEnv::new();
  env
    .bridge_cmd()
    .env("BRIDGE_PACKAGE_SOURCE", format!("{}/", server.url()))
    .args(["add", "package", "Missing"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("Failed to install package 'Missing'"));
}

#[test]
fn add_package_does_not_probe_for_projects() {
  let mut server = mockito::Server::new();
  server.mock("GET", "/Foo").with_status(200).with_body(package_archive()).create();

  let env = TestEnv::new();
  env.write_file("A.csproj", "<Project/>");
  env.write_file("B.csproj", "<Project/>");

  env
    .bridge_cmd()
    .env("BRIDGE_PACKAGE_SOURCE", format!("{}/", server.url()))
    .args(["add", "package", "Foo"])
    .assert()
    .success();

  assert!(env.project.join("packages").join("Foo").is_dir());
}
