/* src/server/adapter/axum/src/handler/mod.rs */

mod locale;
mod page;
mod subscribe;

use std::collections::HashMap;
use std::sync::Arc;

use axum::Router;
use axum::http::HeaderMap;
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::HeaderValue;
use axum::response::Response;
use axum::routing::{get, post};
use fearless_core::{
  LocaleCode, LocaleStore, PageDef, Renderer, ResolveData, ResolveStrategy, Session, SessionRegistry,
  SiteParts, resolve_chain, session_cookie, session_id_from_cookie,
};

pub(crate) const LOCALE_ROUTE: &str = "/_fearless/locale";
pub(crate) const EVENTS_ROUTE: &str = "/_fearless/locale/events";
pub(crate) const HEALTH_ROUTE: &str = "/_fearless/health";

pub(crate) struct AppState {
  /// Keyed by route pattern, as reported by `MatchedPath`.
  pub pages: HashMap<String, Arc<PageDef>>,
  pub renderer: Arc<Renderer>,
  pub strategies: Arc<Vec<Box<dyn ResolveStrategy>>>,
  pub sessions: Arc<SessionRegistry>,
}

fn cookie_session_id(headers: &HeaderMap) -> Option<&str> {
  headers.get(COOKIE).and_then(|value| value.to_str().ok()).and_then(session_id_from_cookie)
}

impl AppState {
  /// Session named by the request's cookie, created when absent. Only the
  /// language switch calls this; readers use `find_session`.
  fn open_session(&self, headers: &HeaderMap) -> Session {
    self.sessions.open(cookie_session_id(headers))
  }

  /// Existing session named by the request's cookie, if any.
  fn find_session(&self, headers: &HeaderMap) -> Option<Arc<LocaleStore>> {
    cookie_session_id(headers).and_then(|id| self.sessions.get(id))
  }

  fn resolve_locale(&self, store: Option<&LocaleStore>, query: Option<&str>) -> LocaleCode {
    let data = ResolveData { query, session_locale: store.map(LocaleStore::current) };
    resolve_chain(&self.strategies, &data)
  }
}

/// Attach the session cookie when the session was minted by this request.
fn with_session_cookie(mut response: Response, session: &Session) -> Response {
  if session.created
    && let Ok(value) = HeaderValue::from_str(&session_cookie(&session.id))
  {
    response.headers_mut().append(SET_COOKIE, value);
  }
  response
}

pub(crate) fn build_router(parts: SiteParts) -> Router {
  let mut page_map = HashMap::new();
  let mut router = Router::new()
    .route(LOCALE_ROUTE, post(locale::handle_switch))
    .route(EVENTS_ROUTE, get(subscribe::handle_events))
    .route(HEALTH_ROUTE, get(handle_health));

  for page in parts.pages {
    let route = page.route.clone();
    page_map.insert(route.clone(), Arc::new(page));
    router = router.route(&route, get(page::handle_page));
  }

  let state = Arc::new(AppState {
    pages: page_map,
    renderer: parts.renderer,
    strategies: parts.strategies,
    sessions: parts.sessions,
  });

  router.fallback(page::handle_not_found).with_state(state)
}

async fn handle_health() -> axum::Json<serde_json::Value> {
  axum::Json(serde_json::json!({ "ok": true }))
}

#[cfg(test)]
pub(crate) mod tests {
  use axum::body::{Body, to_bytes};
  use axum::http::{Request, StatusCode};
  use fearless_core::{Content, DetailMissPolicy, SiteServer, Translations, site_pages};
  use tower::ServiceExt;

  use super::*;

  pub(crate) fn router_with(sessions: Arc<SessionRegistry>, policy: DetailMissPolicy) -> Router {
    let parts = SiteServer::new(Content::fearless().unwrap(), Translations::embedded().unwrap())
      .pages(site_pages().unwrap())
      .detail_miss(policy)
      .sessions(sessions)
      .into_parts()
      .unwrap();
    build_router(parts)
  }

  pub(crate) fn router() -> Router {
    router_with(Arc::new(SessionRegistry::new()), DetailMissPolicy::NotFound)
  }

  pub(crate) async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
  }

  pub(crate) fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::get(uri);
    if let Some(cookie) = cookie {
      builder = builder.header(COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
  }

  #[tokio::test]
  async fn health_reports_ok() {
    let response = router().oneshot(get(HEALTH_ROUTE, None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, r#"{"ok":true}"#);
  }

  #[tokio::test]
  async fn first_visit_does_not_start_a_session() {
    let sessions = Arc::new(SessionRegistry::new());
    let response =
      router_with(Arc::clone(&sessions), DetailMissPolicy::NotFound).oneshot(get("/", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(SET_COOKIE).is_none());
    assert!(body_text(response).await.contains(r#"<html lang="en">"#));
    assert!(sessions.is_empty());
  }

  #[tokio::test]
  async fn anonymous_traffic_leaves_registry_empty() {
    let sessions = Arc::new(SessionRegistry::new());
    let app = router_with(Arc::clone(&sessions), DetailMissPolicy::NotFound);
    for i in 0..50 {
      let cookie = format!("fearless-session=00000000-0000-4000-8000-{i:012}");
      for (uri, cookie) in [("/", None), ("/nope", Some(cookie.as_str())), ("/news/1", Some(cookie.as_str()))] {
        let response = app.clone().oneshot(get(uri, cookie)).await.unwrap();
        assert!(response.headers().get(SET_COOKIE).is_none(), "{uri}");
      }
    }
    assert_eq!(sessions.len(), 0);
  }

  #[tokio::test]
  async fn returning_visit_keeps_cookie() {
    let sessions = Arc::new(SessionRegistry::new());
    let session = sessions.open(None);
    let cookie = format!("fearless-session={}", session.id);
    let response = router_with(Arc::clone(&sessions), DetailMissPolicy::NotFound)
      .oneshot(get("/", Some(&cookie)))
      .await
      .unwrap();
    assert!(response.headers().get(SET_COOKIE).is_none());
    assert_eq!(sessions.len(), 1);
  }

  #[tokio::test]
  async fn unknown_path_is_localized_not_found() {
    let sessions = Arc::new(SessionRegistry::new());
    let session = sessions.open(None);
    session.store.set_locale(LocaleCode::Ro);
    let cookie = format!("fearless-session={}", session.id);
    let response = router_with(sessions, DetailMissPolicy::NotFound)
      .oneshot(get("/shop", Some(&cookie)))
      .await
      .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let html = body_text(response).await;
    assert!(html.contains(r#"<html lang="ro">"#));
    assert!(html.contains("Pagina nu a fost găsită"));
  }
}
