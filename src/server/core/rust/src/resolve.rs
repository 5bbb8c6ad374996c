/* src/server/core/rust/src/resolve.rs */

use crate::locale::LocaleCode;

/// Request facts available to locale resolution.
pub struct ResolveData<'a> {
  /// Raw query string without the leading `?`.
  pub query: Option<&'a str>,
  /// Current value of the visitor's locale store.
  pub session_locale: Option<LocaleCode>,
}

/// One step of the locale resolution chain. The first strategy returning
/// `Some` wins; when none does the locale is `LocaleCode::initial()`.
pub trait ResolveStrategy: Send + Sync {
  fn kind(&self) -> &'static str;
  fn resolve(&self, data: &ResolveData<'_>) -> Option<LocaleCode>;
}

struct UrlQuery {
  param: String,
}

impl ResolveStrategy for UrlQuery {
  fn kind(&self) -> &'static str {
    "url_query"
  }

  fn resolve(&self, data: &ResolveData<'_>) -> Option<LocaleCode> {
    query_param(data.query?, &self.param)?.parse().ok()
  }
}

struct Session;

impl ResolveStrategy for Session {
  fn kind(&self) -> &'static str {
    "session"
  }

  fn resolve(&self, data: &ResolveData<'_>) -> Option<LocaleCode> {
    data.session_locale
  }
}

/// Read-only override from a query parameter, e.g. `?lang=ro` on a shared link.
pub fn from_url_query(param: impl Into<String>) -> Box<dyn ResolveStrategy> {
  Box::new(UrlQuery { param: param.into() })
}

/// The locale last chosen through the header's language switch.
pub fn from_session() -> Box<dyn ResolveStrategy> {
  Box::new(Session)
}

pub fn default_strategies() -> Vec<Box<dyn ResolveStrategy>> {
  vec![from_url_query("lang"), from_session()]
}

pub fn resolve_chain(strategies: &[Box<dyn ResolveStrategy>], data: &ResolveData<'_>) -> LocaleCode {
  for strategy in strategies {
    if let Some(locale) = strategy.resolve(data) {
      tracing::debug!(strategy = strategy.kind(), %locale, "locale resolved");
      return locale;
    }
  }
  LocaleCode::initial()
}

fn query_param<'a>(query: &'a str, name: &str) -> Option<&'a str> {
  query.split('&').find_map(|pair| match pair.split_once('=') {
    Some((key, value)) if key == name => Some(value),
    _ => None,
  })
}
