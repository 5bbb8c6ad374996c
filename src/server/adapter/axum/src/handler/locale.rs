/* src/server/adapter/axum/src/handler/locale.rs */

use std::sync::Arc;

use axum::Form;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Redirect, Response};
use fearless_core::LocaleCode;
use serde::Deserialize;

use super::{AppState, with_session_cookie};
use crate::error::JsonError;

#[derive(Deserialize)]
pub(super) struct SwitchForm {
  #[serde(default)]
  locale: String,
  next: Option<String>,
}

/// Language switch: updates the visitor's store and sends the browser back
/// to the page it came from.
pub(super) async fn handle_switch(
  State(state): State<Arc<AppState>>,
  headers: HeaderMap,
  Form(form): Form<SwitchForm>,
) -> Result<Response, JsonError> {
  let code: LocaleCode = form.locale.parse()?;
  let session = state.open_session(&headers);
  session.store.set_locale(code);
  tracing::info!(session = %session.id, locale = %code, "locale switched");

  let response = Redirect::to(safe_next(form.next.as_deref()));
  Ok(with_session_cookie(response.into_response(), &session))
}

/// Same-site absolute path, else "/".
fn safe_next(next: Option<&str>) -> &str {
  match next {
    Some(path) if path.starts_with('/') && !path.starts_with("//") && !path.contains('\\') => path,
    _ => "/",
  }
}
