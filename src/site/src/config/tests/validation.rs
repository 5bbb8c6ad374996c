/* src/site/src/config/tests/validation.rs */

use super::*;

fn parse(src: &str) -> SiteConfig {
  toml::from_str(src).unwrap()
}

#[test]
fn port_zero_is_invalid() {
  let err = parse("[server]\nport = 0\n").validate().unwrap_err();
  assert_eq!(err.to_string(), "server.port must not be 0");
}

#[test]
fn blank_host_is_invalid() {
  assert!(parse("[server]\nhost = \" \"\n").validate().is_err());
}

#[test]
fn zero_session_durations_are_invalid() {
  let err = parse("[session]\nidle_timeout_secs = 0\n").validate().unwrap_err();
  assert!(err.to_string().contains("idle_timeout_secs"));
  let err = parse("[session]\nprune_interval_secs = 0\n").validate().unwrap_err();
  assert!(err.to_string().contains("prune_interval_secs"));
}
