/* src/server/adapter/axum/src/handler/subscribe.rs */

use std::convert::Infallible;
use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::response::{IntoResponse, Response};
use fearless_core::LocaleCode;
use tokio_stream::StreamExt;

use super::AppState;

fn locale_event(code: LocaleCode) -> Result<Event, Infallible> {
  Ok(Event::default().event("locale").data(code.as_str()))
}

/// One `locale` event per `set_locale` on the visitor's store. The
/// subscription lives exactly as long as the connection. Visitors without a
/// session get 204, which tells `EventSource` not to reconnect.
pub(super) async fn handle_events(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
  let Some(store) = state.find_session(&headers) else {
    return StatusCode::NO_CONTENT.into_response();
  };
  tracing::debug!(subscribers = store.subscriber_count() + 1, "locale events subscribed");
  let events = store.watch().map(locale_event);
  Sse::new(events).keep_alive(KeepAlive::default()).into_response()
}
