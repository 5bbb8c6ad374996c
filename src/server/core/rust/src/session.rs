/* src/server/core/rust/src/session.rs */

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use uuid::Uuid;

use crate::broadcast::LocaleStore;

pub const SESSION_COOKIE: &str = "fearless-session";

struct SessionEntry {
  store: Arc<LocaleStore>,
  last_seen: Instant,
}

/// A visitor's locale store, keyed by the session cookie.
pub struct Session {
  pub id: String,
  pub store: Arc<LocaleStore>,
  /// True when the id was minted by this call and the cookie must be set.
  pub created: bool,
}

/// Maps session ids to locale stores. Each visitor gets an independent store
/// so one visitor's language switch never reaches another visitor's pages.
#[derive(Default)]
pub struct SessionRegistry {
  sessions: Mutex<HashMap<String, SessionEntry>>,
}

impl SessionRegistry {
  pub fn new() -> Self {
    Self::default()
  }

  /// Look up the session for `id`, creating it when absent. Ids the registry
  /// did not mint, including malformed ones, are replaced with a fresh one.
  pub fn open(&self, id: Option<&str>) -> Session {
    let mut sessions = self.lock();
    let now = Instant::now();

    if let Some(id) = id
      && let Some(entry) = sessions.get_mut(id)
    {
      entry.last_seen = now;
      return Session { id: id.to_string(), store: Arc::clone(&entry.store), created: false };
    }

    let id = Uuid::new_v4().to_string();
    let store = Arc::new(LocaleStore::new());
    sessions.insert(id.clone(), SessionEntry { store: Arc::clone(&store), last_seen: now });
    tracing::debug!(session = %id, total = sessions.len(), "session opened");
    Session { id, store, created: true }
  }

  /// Existing session only. Refreshes its idle clock but never creates one.
  pub fn get(&self, id: &str) -> Option<Arc<LocaleStore>> {
    let mut sessions = self.lock();
    let entry = sessions.get_mut(id)?;
    entry.last_seen = Instant::now();
    Some(Arc::clone(&entry.store))
  }

  /// Drop sessions idle for longer than `idle` that have no live subscribers.
  /// Returns how many were removed.
  pub fn prune(&self, idle: Duration) -> usize {
    let mut sessions = self.lock();
    let before = sessions.len();
    let now = Instant::now();
    sessions.retain(|_, entry| {
      now.duration_since(entry.last_seen) < idle || entry.store.subscriber_count() > 0
    });
    before - sessions.len()
  }

  pub fn len(&self) -> usize {
    self.lock().len()
  }

  pub fn is_empty(&self) -> bool {
    self.lock().is_empty()
  }

  fn lock(&self) -> MutexGuard<'_, HashMap<String, SessionEntry>> {
    self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
  }
}

/// Extract the session id from a `Cookie` header value.
pub fn session_id_from_cookie(header: &str) -> Option<&str> {
  header.split(';').find_map(|pair| {
    let (name, value) = pair.trim().split_once('=')?;
    (name == SESSION_COOKIE && !value.is_empty()).then_some(value)
  })
}

/// `Set-Cookie` value for a session id. No `Max-Age`: the cookie lives for
/// the browser session.
pub fn session_cookie(id: &str) -> String {
  format!("{SESSION_COOKIE}={id}; Path=/; HttpOnly; SameSite=Lax")
}
