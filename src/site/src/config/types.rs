/* src/site/src/config/types.rs */

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Result, bail};
use fearless_axum::fearless_core::DetailMissPolicy;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
  #[serde(default)]
  pub server: ServerSection,
  #[serde(default)]
  pub site: SiteSection,
  #[serde(default)]
  pub session: SessionSection,
  #[serde(default)]
  pub log: LogSection,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
  #[serde(default = "default_host")]
  pub host: String,
  #[serde(default = "default_port")]
  pub port: u16,
}

impl Default for ServerSection {
  fn default() -> Self {
    Self { host: default_host(), port: default_port() }
  }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteSection {
  /// Holds the `images/` and `static/` asset directories.
  #[serde(default = "default_public_dir")]
  pub public_dir: PathBuf,
  #[serde(default)]
  pub detail_miss: DetailMissPolicy,
}

impl Default for SiteSection {
  fn default() -> Self {
    Self { public_dir: default_public_dir(), detail_miss: DetailMissPolicy::default() }
  }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionSection {
  #[serde(default = "default_idle_timeout_secs")]
  pub idle_timeout_secs: u64,
  #[serde(default = "default_prune_interval_secs")]
  pub prune_interval_secs: u64,
}

impl Default for SessionSection {
  fn default() -> Self {
    Self {
      idle_timeout_secs: default_idle_timeout_secs(),
      prune_interval_secs: default_prune_interval_secs(),
    }
  }
}

impl SessionSection {
  pub fn idle_timeout(&self) -> Duration {
    Duration::from_secs(self.idle_timeout_secs)
  }

  pub fn prune_interval(&self) -> Duration {
    Duration::from_secs(self.prune_interval_secs)
  }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogSection {
  /// `tracing_subscriber::EnvFilter` directives; `RUST_LOG` takes precedence.
  #[serde(default = "default_log_filter")]
  pub filter: String,
}

impl Default for LogSection {
  fn default() -> Self {
    Self { filter: default_log_filter() }
  }
}

impl SiteConfig {
  pub fn validate(&self) -> Result<()> {
    if self.server.port == 0 {
      bail!("server.port must not be 0");
    }
    if self.server.host.trim().is_empty() {
      bail!("server.host must not be empty");
    }
    if self.session.idle_timeout_secs == 0 {
      bail!("session.idle_timeout_secs must be greater than 0");
    }
    if self.session.prune_interval_secs == 0 {
      bail!("session.prune_interval_secs must be greater than 0");
    }
    Ok(())
  }

  pub fn bind_addr(&self) -> String {
    format!("{}:{}", self.server.host, self.server.port)
  }
}

fn default_host() -> String {
  "0.0.0.0".to_string()
}

fn default_port() -> u16 {
  3000
}

fn default_public_dir() -> PathBuf {
  PathBuf::from("public")
}

fn default_idle_timeout_secs() -> u64 {
  1800
}

fn default_prune_interval_secs() -> u64 {
  60
}

fn default_log_filter() -> String {
  "info".to_string()
}
