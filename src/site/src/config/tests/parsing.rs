/* src/site/src/config/tests/parsing.rs */

use std::path::Path;

use fearless_axum::fearless_core::DetailMissPolicy;

use super::*;

#[test]
fn empty_file_uses_defaults() {
  let config: SiteConfig = toml::from_str("").unwrap();
  assert_eq!(config.server.host, "0.0.0.0");
  assert_eq!(config.server.port, 3000);
  assert_eq!(config.site.public_dir, Path::new("public"));
  assert_eq!(config.site.detail_miss, DetailMissPolicy::NotFound);
  assert_eq!(config.session.idle_timeout_secs, 1800);
  assert_eq!(config.session.prune_interval_secs, 60);
  assert_eq!(config.log.filter, "info");
  assert!(config.validate().is_ok());
}

#[test]
fn full_config() {
  let config: SiteConfig = toml::from_str(
    r#"
[server]
host = "127.0.0.1"
port = 8080

[site]
public_dir = "/srv/fearless/public"
detail_miss = "first_item"

[session]
idle_timeout_secs = 600
prune_interval_secs = 30

[log]
filter = "fearless_core=debug,info"
"#,
  )
  .unwrap();
  assert_eq!(config.bind_addr(), "127.0.0.1:8080");
  assert_eq!(config.site.public_dir, Path::new("/srv/fearless/public"));
  assert_eq!(config.site.detail_miss, DetailMissPolicy::FirstItem);
  assert_eq!(config.session.idle_timeout().as_secs(), 600);
  assert_eq!(config.session.prune_interval().as_secs(), 30);
  assert_eq!(config.log.filter, "fearless_core=debug,info");
}

#[test]
fn partial_section_keeps_other_defaults() {
  let config: SiteConfig = toml::from_str("[server]\nport = 4000\n").unwrap();
  assert_eq!(config.server.port, 4000);
  assert_eq!(config.server.host, "0.0.0.0");
}

#[test]
fn unknown_policy_is_rejected() {
  assert!(toml::from_str::<SiteConfig>("[site]\ndetail_miss = \"redirect\"\n").is_err());
}

#[test]
fn unknown_key_is_rejected() {
  assert!(toml::from_str::<SiteConfig>("[server]\nprot = 3000\n").is_err());
}
