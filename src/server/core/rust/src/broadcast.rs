/* src/server/core/rust/src/broadcast.rs */

//! Locale store with synchronous change notification.
//!
//! One store exists per visitor session. The header's language switch is the
//! only writer; open pages subscribe and re-render on every notification.

use std::pin::Pin;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::task::{Context, Poll};

use futures_core::Stream;
use tokio::sync::mpsc;

use crate::locale::LocaleCode;

type Handler = Arc<dyn Fn(LocaleCode) + Send + Sync>;

struct Inner {
  current: LocaleCode,
  next_id: u64,
  handlers: Vec<(u64, Handler)>,
}

pub struct LocaleStore {
  inner: Arc<Mutex<Inner>>,
}

impl LocaleStore {
  pub fn new() -> Self {
    Self {
      inner: Arc::new(Mutex::new(Inner {
        current: LocaleCode::initial(),
        next_id: 0,
        handlers: Vec::new(),
      })),
    }
  }

  pub fn current(&self) -> LocaleCode {
    self.lock().current
  }

  /// Store `code` and notify every live subscriber once, in registration
  /// order, even when the value did not change. Handlers run after the lock
  /// is released and may read `current()`.
  pub fn set_locale(&self, code: LocaleCode) {
    let handlers: Vec<Handler> = {
      let mut inner = self.lock();
      inner.current = code;
      inner.handlers.iter().map(|(_, handler)| Arc::clone(handler)).collect()
    };
    for handler in handlers {
      handler(code);
    }
  }

  /// Register `handler` for future changes. Past changes are not replayed.
  /// The handler stays registered until the returned guard is dropped.
  pub fn subscribe<F>(&self, handler: F) -> Subscription
  where
    F: Fn(LocaleCode) + Send + Sync + 'static,
  {
    let mut inner = self.lock();
    let id = inner.next_id;
    inner.next_id += 1;
    inner.handlers.push((id, Arc::new(handler)));
    Subscription { id, store: Arc::downgrade(&self.inner) }
  }

  pub fn subscriber_count(&self) -> usize {
    self.lock().handlers.len()
  }

  /// Subscribe through an async stream of locale changes. Dropping the
  /// stream releases the subscription.
  pub fn watch(&self) -> LocaleWatch {
    let (tx, rx) = mpsc::unbounded_channel();
    let subscription = self.subscribe(move |code| {
      // A closed receiver means the watch is being dropped.
      let _ = tx.send(code);
    });
    LocaleWatch { rx, _subscription: subscription }
  }

  fn lock(&self) -> MutexGuard<'_, Inner> {
    self.inner.lock().unwrap_or_else(PoisonError::into_inner)
  }
}

impl Default for LocaleStore {
  fn default() -> Self {
    Self::new()
  }
}

/// Registration guard returned by `LocaleStore::subscribe`.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
  id: u64,
  store: Weak<Mutex<Inner>>,
}

impl Subscription {
  pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
  fn drop(&mut self) {
    if let Some(inner) = self.store.upgrade() {
      let mut inner = inner.lock().unwrap_or_else(PoisonError::into_inner);
      inner.handlers.retain(|(id, _)| *id != self.id);
    }
  }
}

/// Stream of locale notifications for one subscriber.
pub struct LocaleWatch {
  rx: mpsc::UnboundedReceiver<LocaleCode>,
  _subscription: Subscription,
}

impl LocaleWatch {
  pub async fn recv(&mut self) -> Option<LocaleCode> {
    self.rx.recv().await
  }
}

impl Stream for LocaleWatch {
  type Item = LocaleCode;

  fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<LocaleCode>> {
    self.rx.poll_recv(cx)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn recorder() -> (Arc<Mutex<Vec<LocaleCode>>>, impl Fn(LocaleCode) + Send + Sync + 'static) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    (seen, move |code| sink.lock().unwrap().push(code))
  }

  #[test]
  fn starts_at_initial_locale() {
    assert_eq!(LocaleStore::new().current(), LocaleCode::En);
  }

  #[test]
  fn each_subscriber_gets_one_notification_per_call() {
    let store = LocaleStore::new();
    let (a, handler_a) = recorder();
    let (b, handler_b) = recorder();
    let _sub_a = store.subscribe(handler_a);
    let _sub_b = store.subscribe(handler_b);

    store.set_locale(LocaleCode::Ro);

    assert_eq!(*a.lock().unwrap(), [LocaleCode::Ro]);
    assert_eq!(*b.lock().unwrap(), [LocaleCode::Ro]);
    assert_eq!(store.current(), LocaleCode::Ro);
  }

  #[test]
  fn unsubscribed_handler_is_not_called() {
    let store = LocaleStore::new();
    let (seen, handler) = recorder();
    let sub = store.subscribe(handler);
    store.set_locale(LocaleCode::Ro);
    sub.unsubscribe();
    store.set_locale(LocaleCode::En);

    assert_eq!(*seen.lock().unwrap(), [LocaleCode::Ro]);
    assert_eq!(store.subscriber_count(), 0);
  }

  #[test]
  fn dropping_the_guard_unsubscribes() {
    let store = LocaleStore::new();
    let (seen, handler) = recorder();
    {
      let _sub = store.subscribe(handler);
      assert_eq!(store.subscriber_count(), 1);
    }
    store.set_locale(LocaleCode::Ro);
    assert!(seen.lock().unwrap().is_empty());
  }

  #[test]
  fn late_subscriber_gets_no_replay() {
    let store = LocaleStore::new();
    store.set_locale(LocaleCode::Ro);
    let (seen, handler) = recorder();
    let _sub = store.subscribe(handler);
    assert!(seen.lock().unwrap().is_empty());
    assert_eq!(store.current(), LocaleCode::Ro);
  }

  #[test]
  fn ro_then_en_ends_in_english_after_two_notifications() {
    let store = LocaleStore::new();
    let (seen, handler) = recorder();
    let _sub = store.subscribe(handler);
    store.set_locale(LocaleCode::Ro);
    store.set_locale(LocaleCode::En);

    assert_eq!(*seen.lock().unwrap(), [LocaleCode::Ro, LocaleCode::En]);
    assert_eq!(store.current(), LocaleCode::En);
  }

  #[test]
  fn repeating_the_same_locale_still_notifies() {
    let store = LocaleStore::new();
    let (seen, handler) = recorder();
    let _sub = store.subscribe(handler);
    store.set_locale(LocaleCode::En);
    let after_first = store.current();
    store.set_locale(LocaleCode::En);

    assert_eq!(*seen.lock().unwrap(), [LocaleCode::En, LocaleCode::En]);
    assert_eq!(after_first, store.current());
  }

  #[test]
  fn handlers_may_read_the_store() {
    let store = Arc::new(LocaleStore::new());
    let observed = Arc::new(Mutex::new(None));
    let sink = Arc::clone(&observed);
    let reader = Arc::clone(&store);
    let _sub = store.subscribe(move |_| *sink.lock().unwrap() = Some(reader.current()));

    store.set_locale(LocaleCode::Ro);
    assert_eq!(*observed.lock().unwrap(), Some(LocaleCode::Ro));
  }

  #[test]
  fn guard_outliving_store_is_harmless() {
    let store = LocaleStore::new();
    let sub = store.subscribe(|_| {});
    drop(store);
    drop(sub);
  }

  #[tokio::test]
  async fn watch_yields_changes_and_releases_on_drop() {
    let store = LocaleStore::new();
    let mut watch = store.watch();
    assert_eq!(store.subscriber_count(), 1);

    store.set_locale(LocaleCode::Ro);
    store.set_locale(LocaleCode::En);
    assert_eq!(watch.recv().await, Some(LocaleCode::Ro));
    assert_eq!(watch.recv().await, Some(LocaleCode::En));

    drop(watch);
    assert_eq!(store.subscriber_count(), 0);
  }
}
