/* src/server/adapter/axum/src/lib.rs */

mod error;
mod handler;

use fearless_core::{SiteError, SiteServer};

/// Re-export fearless-core for convenience
pub use fearless_core;

/// Extension trait that converts a `SiteServer` into an Axum router.
pub trait IntoAxumRouter {
  fn into_axum_router(self) -> Result<axum::Router, SiteError>;
}

impl IntoAxumRouter for SiteServer {
  fn into_axum_router(self) -> Result<axum::Router, SiteError> {
    Ok(handler::build_router(self.into_parts()?))
  }
}

#[cfg(test)]
mod tests {
  use fearless_core::{Content, Translations, site_pages};

  use super::*;

  #[test]
  fn into_axum_router_builds_without_panic() {
    let server = SiteServer::new(Content::fearless().unwrap(), Translations::embedded().unwrap())
      .pages(site_pages().unwrap());
    assert!(server.into_axum_router().is_ok());
  }
}
