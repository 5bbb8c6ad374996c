/* src/site/src/config/loader.rs */

use std::path::Path;

use anyhow::{Context, Result};

use super::SiteConfig;

pub const DEFAULT_CONFIG_FILE: &str = "site.toml";

/// Read and validate the config at `path`. A missing file at the default
/// location yields the defaults; an explicitly named file must exist.
pub fn load_site_config(path: &Path, explicit: bool) -> Result<SiteConfig> {
  if !explicit && !path.exists() {
    return Ok(SiteConfig::default());
  }
  let content =
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
  let config: SiteConfig =
    toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))?;
  config.validate().with_context(|| format!("invalid config {}", path.display()))?;
  Ok(config)
}
