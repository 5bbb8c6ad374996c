/* src/server/adapter/axum/src/error.rs */

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use fearless_core::{LocaleCode, Renderer, SiteError};

fn status_of(err: &SiteError) -> StatusCode {
  StatusCode::from_u16(err.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

/// Newtype wrapper to implement `IntoResponse` for `SiteError` on the JSON
/// endpoints. Required because of the orphan rule.
pub(crate) struct JsonError(pub SiteError);

impl IntoResponse for JsonError {
  fn into_response(self) -> Response {
    let err = self.0;
    let body = serde_json::json!({
      "ok": false,
      "error": {
        "code": err.code(),
        "message": err.message(),
      }
    });
    (status_of(&err), axum::Json(body)).into_response()
  }
}

impl From<SiteError> for JsonError {
  fn from(err: SiteError) -> Self {
    Self(err)
  }
}

/// Localized HTML error page for a failed page render.
pub(crate) fn error_page(renderer: &Renderer, err: &SiteError, locale: LocaleCode, path: &str) -> Response {
  let status = status_of(err);
  if status.is_server_error() {
    tracing::error!(path, error = %err, "page render failed");
  } else {
    tracing::debug!(path, error = %err, "page not rendered");
  }
  (status, Html(renderer.render_error(status.as_u16(), locale, path))).into_response()
}
