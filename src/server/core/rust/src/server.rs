/* src/server/core/rust/src/server.rs */

use std::collections::HashSet;
use std::sync::Arc;

use crate::catalog::DetailMissPolicy;
use crate::content::Content;
use crate::errors::SiteError;
use crate::i18n::Translations;
use crate::page::PageDef;
use crate::render::Renderer;
use crate::resolve::{ResolveStrategy, default_strategies};
use crate::session::SessionRegistry;

/// Framework-agnostic parts extracted from `SiteServer`.
/// Adapter crates consume this to build framework-specific routers.
pub struct SiteParts {
  pub pages: Vec<PageDef>,
  pub renderer: Arc<Renderer>,
  pub strategies: Arc<Vec<Box<dyn ResolveStrategy>>>,
  pub sessions: Arc<SessionRegistry>,
}

pub struct SiteServer {
  content: Content,
  translations: Translations,
  pages: Vec<PageDef>,
  detail_miss: DetailMissPolicy,
  strategies: Option<Vec<Box<dyn ResolveStrategy>>>,
  sessions: Option<Arc<SessionRegistry>>,
}

impl SiteServer {
  pub fn new(content: Content, translations: Translations) -> Self {
    Self {
      content,
      translations,
      pages: Vec::new(),
      detail_miss: DetailMissPolicy::default(),
      strategies: None,
      sessions: None,
    }
  }

  pub fn page(mut self, page: PageDef) -> Self {
    self.pages.push(page);
    self
  }

  pub fn pages(mut self, pages: impl IntoIterator<Item = PageDef>) -> Self {
    self.pages.extend(pages);
    self
  }

  pub fn detail_miss(mut self, policy: DetailMissPolicy) -> Self {
    self.detail_miss = policy;
    self
  }

  /// Replace the default chain (`?lang=` override, then session).
  pub fn resolve_strategies(mut self, strategies: Vec<Box<dyn ResolveStrategy>>) -> Self {
    self.strategies = Some(strategies);
    self
  }

  /// Share a session registry with the caller, e.g. for periodic pruning.
  pub fn sessions(mut self, sessions: Arc<SessionRegistry>) -> Self {
    self.sessions = Some(sessions);
    self
  }

  /// Consume the builder, returning framework-agnostic parts for an adapter.
  /// Fails when two pages share a route or a page names an unknown
  /// translation namespace.
  pub fn into_parts(self) -> Result<SiteParts, SiteError> {
    let mut routes = HashSet::new();
    for page in &self.pages {
      if !routes.insert(page.route.as_str()) {
        return Err(SiteError::internal(format!("duplicate page route '{}'", page.route)));
      }
      self.translations.table(&page.namespace)?;
    }

    let renderer = Renderer::new(
      Arc::new(self.content),
      Arc::new(self.translations),
      self.detail_miss,
    )?;
    tracing::debug!(pages = self.pages.len(), detail_miss = ?self.detail_miss, "site assembled");

    Ok(SiteParts {
      pages: self.pages,
      renderer: Arc::new(renderer),
      strategies: Arc::new(self.strategies.unwrap_or_else(default_strategies)),
      sessions: self.sessions.unwrap_or_default(),
    })
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;
  use crate::page::PageData;
  use crate::pages::site_pages;

  fn server() -> SiteServer {
    SiteServer::new(Content::fearless().unwrap(), Translations::embedded().unwrap())
  }

  fn blank(route: &str, namespace: &str) -> PageDef {
    PageDef::new(route, namespace, "", |_| Ok(PageData { title: None, data: json!({}) })).unwrap()
  }

  #[test]
  fn assembles_site_pages() {
    let parts = server().pages(site_pages().unwrap()).into_parts().unwrap();
    assert_eq!(parts.pages.len(), 8);
    assert_eq!(parts.strategies.len(), 2);
    assert!(parts.sessions.is_empty());
  }

  #[test]
  fn rejects_duplicate_routes() {
    let result = server().page(blank("/a", "home")).page(blank("/a", "about")).into_parts();
    let Err(err) = result else { panic!("expected duplicate route error") };
    assert_eq!(err.message(), "duplicate page route '/a'");
  }

  #[test]
  fn rejects_unknown_namespace() {
    assert!(server().page(blank("/a", "shop")).into_parts().is_err());
  }

  #[test]
  fn shares_session_registry() {
    let sessions = Arc::new(SessionRegistry::new());
    let parts = server().sessions(Arc::clone(&sessions)).into_parts().unwrap();
    parts.sessions.open(None);
    assert_eq!(sessions.len(), 1);
  }
}
