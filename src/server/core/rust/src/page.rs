/* src/server/core/rust/src/page.rs */

use std::sync::Arc;

use fearless_injector::Template;
use serde_json::Value;

use crate::catalog::{Catalog, ContentItem, DetailMissPolicy};
use crate::content::Content;
use crate::errors::SiteError;
use crate::i18n::Translations;
use crate::locale::LocaleCode;
use crate::navigation::RouteParams;

/// Inputs of one page render. Pages are pure functions of this context.
pub struct PageContext<'a> {
  pub content: &'a Content,
  pub translations: &'a Translations,
  pub locale: LocaleCode,
  pub params: &'a RouteParams,
  pub detail_miss: DetailMissPolicy,
}

impl<'a> PageContext<'a> {
  /// Route parameter, or "" when the route has none by that name.
  pub fn param(&self, name: &str) -> &'a str {
    self.params.get(name).map_or("", String::as_str)
  }

  /// Translated string from `namespace`.
  pub fn text(&self, namespace: &str, key: &str) -> Result<&'a str, SiteError> {
    Ok(self.translations.table(namespace)?.get(self.locale, key))
  }

  /// Resolve the `{id}` parameter against `catalog`, applying the detail-miss
  /// policy to unknown or malformed ids.
  pub fn lookup<T: ContentItem>(&self, catalog: &'a Catalog<T>, kind: &str) -> Result<&'a T, SiteError> {
    let raw = self.param("id");
    let found = catalog.lookup(raw);
    if found.is_fallback() && self.detail_miss == DetailMissPolicy::NotFound {
      return Err(SiteError::not_found(format!("no {kind} with id '{raw}'")));
    }
    Ok(found.item())
  }
}

/// Loader output: the document title and the data injected into the page
/// template.
pub struct PageData {
  /// `None` shows the bare site name.
  pub title: Option<String>,
  pub data: Value,
}

pub type PageLoader = Arc<dyn Fn(&PageContext<'_>) -> Result<PageData, SiteError> + Send + Sync>;

pub struct PageDef {
  /// Axum route syntax, e.g. "/matches/{id}"
  pub route: String,
  /// Translation namespace exposed to the template as `t`.
  pub namespace: String,
  pub template: Template,
  pub loader: PageLoader,
}

impl PageDef {
  pub fn new<F>(route: &str, namespace: &str, template: &str, loader: F) -> Result<Self, SiteError>
  where
    F: Fn(&PageContext<'_>) -> Result<PageData, SiteError> + Send + Sync + 'static,
  {
    let template = Template::compile(template)
      .map_err(|e| SiteError::internal(format!("page {route}: template: {e}")))?;
    Ok(Self {
      route: route.to_string(),
      namespace: namespace.to_string(),
      template,
      loader: Arc::new(loader),
    })
  }

  pub fn is_detail(&self) -> bool {
    self.route.contains('{')
  }
}
