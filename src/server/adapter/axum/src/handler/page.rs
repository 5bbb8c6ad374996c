/* src/server/adapter/axum/src/handler/page.rs */

use std::sync::Arc;

use axum::extract::{MatchedPath, State};
use axum::http::{HeaderMap, Uri};
use axum::response::{Html, IntoResponse, Response};
use fearless_core::{SiteError, match_route};

use super::AppState;
use crate::error::error_page;

pub(super) async fn handle_page(
  State(state): State<Arc<AppState>>,
  matched: MatchedPath,
  uri: Uri,
  headers: HeaderMap,
) -> Response {
  let store = state.find_session(&headers);
  let locale = state.resolve_locale(store.as_deref(), uri.query());
  let path = uri.path();

  let rendered = match state.pages.get(matched.as_str()) {
    Some(page) => {
      let params = match_route(&page.route, path).unwrap_or_default();
      state.renderer.render_page(page, locale, &params, path)
    }
    None => Err(SiteError::not_found(format!("no page registered for {}", matched.as_str()))),
  };

  match rendered {
    Ok(html) => Html(html).into_response(),
    Err(err) => error_page(&state.renderer, &err, locale, path),
  }
}

pub(super) async fn handle_not_found(
  State(state): State<Arc<AppState>>,
  uri: Uri,
  headers: HeaderMap,
) -> Response {
  let store = state.find_session(&headers);
  let locale = state.resolve_locale(store.as_deref(), uri.query());
  let err = SiteError::not_found(format!("no route for {}", uri.path()));
  error_page(&state.renderer, &err, locale, uri.path())
}
