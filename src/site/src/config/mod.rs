/* src/site/src/config/mod.rs */

mod loader;
mod types;

#[cfg(test)]
mod tests;

pub use loader::{DEFAULT_CONFIG_FILE, load_site_config};
pub use types::SiteConfig;
