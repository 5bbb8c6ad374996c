/* src/site/src/config/tests/loading.rs */

use std::io::Write;

use super::*;

#[test]
fn missing_default_file_means_defaults() {
  let dir = tempfile::tempdir().unwrap();
  let config = load_site_config(&dir.path().join(DEFAULT_CONFIG_FILE), false).unwrap();
  assert_eq!(config.server.port, 3000);
}

#[test]
fn missing_explicit_file_is_an_error() {
  let dir = tempfile::tempdir().unwrap();
  let err = load_site_config(&dir.path().join("custom.toml"), true).unwrap_err();
  assert!(err.to_string().starts_with("failed to read"));
}

#[test]
fn file_is_parsed_and_validated() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join(DEFAULT_CONFIG_FILE);
  let mut f = std::fs::File::create(&path).unwrap();
  writeln!(f, "[server]\nport = 0").unwrap();
  let err = load_site_config(&path, false).unwrap_err();
  assert!(format!("{err:#}").contains("server.port must not be 0"));

  std::fs::write(&path, "[server]\nport = 8081\n").unwrap();
  assert_eq!(load_site_config(&path, true).unwrap().server.port, 8081);
}

#[test]
fn syntax_error_names_the_file() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join(DEFAULT_CONFIG_FILE);
  std::fs::write(&path, "[server\n").unwrap();
  let err = load_site_config(&path, true).unwrap_err();
  assert!(err.to_string().starts_with("failed to parse"));
}
