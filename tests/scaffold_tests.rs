//! Tests for project materialization
//!
//! These tests verify:
//! - Full template tree copy into a fresh destination
//! - Dot-file rename and manifest patch transforms
//! - Precondition failures (existing destination, missing template source)
//! - The coming-soon early exit for placeholder templates

use std::fs;
use std::path::Path;

use create_leeais::config::{PackageManager, ResolvedConfig, Template};
use create_leeais::error::BuildError;
use create_leeais::scaffold::{materialize, Outcome};
use tempfile::TempDir;

const TEMPLATE_GITIGNORE: &str = "node_modules\ndist\n";
const TEMPLATE_MANIFEST: &str = r#"{
  "name": "leeais-react-starter",
  "private": true,
  "version": "0.0.0",
  "scripts": {
    "dev": "vite",
    "build": "vite build"
  }
}
"#;

fn config(name: &str, template: Template) -> ResolvedConfig {
  ResolvedConfig {
    project_name: name.to_string(),
    template,
    package_manager: PackageManager::Npm,
    should_install: false,
  }
}

/// Lays out a small react template tree under `templates_root/react`.
fn write_react_template(templates_root: &Path) {
  let react = templates_root.join("react");
  fs::create_dir_all(react.join("src")).unwrap();
  fs::write(react.join("package.json"), TEMPLATE_MANIFEST).unwrap();
  fs::write(react.join("_gitignore"), TEMPLATE_GITIGNORE).unwrap();
  fs::write(react.join("index.html"), "<!doctype html>\n").unwrap();
  fs::write(react.join("src").join("main.tsx"), "export {};\n").unwrap();
}

#[test]
fn materialize_copies_the_full_template_tree() {
  let templates = TempDir::new().unwrap();
  let cwd = TempDir::new().unwrap();
  write_react_template(templates.path());

  let outcome = materialize(&config("my-app", Template::React), cwd.path(), templates.path())
    .expect("materialization should succeed");

  let destination = cwd.path().join("my-app");
  assert_eq!(outcome, Outcome::Created { path: destination.clone() });

  assert!(destination.join("package.json").is_file());
  assert!(destination.join("index.html").is_file());
  assert!(destination.join("src").join("main.tsx").is_file());
  assert_eq!(
    fs::read_to_string(destination.join("index.html")).unwrap(),
    "<!doctype html>\n"
  );
  assert_eq!(
    fs::read_to_string(destination.join("src").join("main.tsx")).unwrap(),
    "export {};\n"
  );
}

#[test]
fn gitignore_is_renamed_with_identical_content() {
  let templates = TempDir::new().unwrap();
  let cwd = TempDir::new().unwrap();
  write_react_template(templates.path());

  materialize(&config("my-app", Template::React), cwd.path(), templates.path()).unwrap();

  let destination = cwd.path().join("my-app");
  assert!(!destination.join("_gitignore").exists());
  assert_eq!(
    fs::read_to_string(destination.join(".gitignore")).unwrap(),
    TEMPLATE_GITIGNORE
  );
}

#[test]
fn manifest_name_is_patched_and_other_fields_survive() {
  let templates = TempDir::new().unwrap();
  let cwd = TempDir::new().unwrap();
  write_react_template(templates.path());

  materialize(&config("renamed-app", Template::React), cwd.path(), templates.path()).unwrap();

  let manifest_raw =
    fs::read_to_string(cwd.path().join("renamed-app").join("package.json")).unwrap();
  let manifest: serde_json::Value = serde_json::from_str(&manifest_raw).unwrap();

  assert_eq!(manifest["name"], "renamed-app");
  assert_eq!(manifest["private"], true);
  assert_eq!(manifest["version"], "0.0.0");
  assert_eq!(manifest["scripts"]["dev"], "vite");
  assert_eq!(manifest["scripts"]["build"], "vite build");

  // Stable 2-space indentation, `name` still the first key
  assert!(manifest_raw.starts_with("{\n  \"name\": \"renamed-app\","));
  assert!(manifest_raw.ends_with("\n"));
}

#[test]
fn missing_manifest_is_not_an_error() {
  let templates = TempDir::new().unwrap();
  let cwd = TempDir::new().unwrap();
  let react = templates.path().join("react");
  fs::create_dir_all(&react).unwrap();
  fs::write(react.join("index.html"), "<!doctype html>\n").unwrap();

  let outcome = materialize(&config("bare-app", Template::React), cwd.path(), templates.path());
  assert!(outcome.is_ok());
  assert!(cwd.path().join("bare-app").join("index.html").is_file());
}

#[test]
fn corrupt_manifest_is_fatal() {
  let templates = TempDir::new().unwrap();
  let cwd = TempDir::new().unwrap();
  let react = templates.path().join("react");
  fs::create_dir_all(&react).unwrap();
  fs::write(react.join("package.json"), "{ not json").unwrap();

  let err = materialize(&config("bad-manifest", Template::React), cwd.path(), templates.path())
    .expect_err("parse failure should propagate");
  assert!(matches!(err, BuildError::ManifestPatch { .. }));
}

#[test]
fn existing_destination_directory_fails_without_writes() {
  let templates = TempDir::new().unwrap();
  let cwd = TempDir::new().unwrap();
  write_react_template(templates.path());

  let destination = cwd.path().join("my-app");
  fs::create_dir_all(&destination).unwrap();
  fs::write(destination.join("keep.txt"), "precious\n").unwrap();

  let err = materialize(&config("my-app", Template::React), cwd.path(), templates.path())
    .expect_err("existing destination should fail");
  assert!(matches!(err, BuildError::DestinationExists { .. }));

  // Prior contents are byte-identical and nothing new was written
  let entries: Vec<_> = fs::read_dir(&destination).unwrap().collect();
  assert_eq!(entries.len(), 1);
  assert_eq!(fs::read_to_string(destination.join("keep.txt")).unwrap(), "precious\n");
}

#[test]
fn existing_destination_file_also_fails() {
  let templates = TempDir::new().unwrap();
  let cwd = TempDir::new().unwrap();
  write_react_template(templates.path());

  fs::write(cwd.path().join("my-app"), "a plain file\n").unwrap();

  let err = materialize(&config("my-app", Template::React), cwd.path(), templates.path())
    .expect_err("existing file at destination should fail");
  assert!(matches!(err, BuildError::DestinationExists { .. }));
  assert_eq!(fs::read_to_string(cwd.path().join("my-app")).unwrap(), "a plain file\n");
}

#[test]
fn placeholder_templates_exit_early_without_writing() {
  let templates = TempDir::new().unwrap();
  let cwd = TempDir::new().unwrap();
  write_react_template(templates.path());

  for template in [Template::ReactNative, Template::Next, Template::Nest, Template::Node] {
    let outcome = materialize(&config("soon-app", template), cwd.path(), templates.path())
      .expect("placeholder templates are not an error");
    assert_eq!(outcome, Outcome::ComingSoon);
    assert!(!cwd.path().join("soon-app").exists());
  }
}

#[test]
fn existing_destination_wins_over_the_coming_soon_exit() {
  let templates = TempDir::new().unwrap();
  let cwd = TempDir::new().unwrap();
  write_react_template(templates.path());

  fs::create_dir_all(cwd.path().join("taken")).unwrap();

  let err = materialize(&config("taken", Template::Next), cwd.path(), templates.path())
    .expect_err("destination check runs first");
  assert!(matches!(err, BuildError::DestinationExists { .. }));
}

#[test]
fn missing_template_source_is_a_packaging_error() {
  let templates = TempDir::new().unwrap(); // empty: no react/ inside
  let cwd = TempDir::new().unwrap();

  let err = materialize(&config("my-app", Template::React), cwd.path(), templates.path())
    .expect_err("missing template source should fail");
  assert!(matches!(err, BuildError::TemplateSourceMissing { .. }));
  assert!(!cwd.path().join("my-app").exists());
}
