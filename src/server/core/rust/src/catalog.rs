/* src/server/core/rust/src/catalog.rs */

//! Ordered content collections addressed by integer route ids.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::errors::SiteError;

/// Anything a detail route can address.
pub trait ContentItem {
  fn id(&self) -> i64;
}

/// What to do when a detail route names an id the catalog does not hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetailMissPolicy {
  /// Localized 404 page.
  #[default]
  NotFound,
  /// Render the first item of the catalog with status 200.
  FirstItem,
}

/// Result of resolving a raw route segment against a catalog.
#[derive(Debug, PartialEq, Eq)]
pub enum Lookup<'a, T> {
  Found(&'a T),
  /// No item matched; carries the catalog's first item.
  Fallback(&'a T),
}

impl<'a, T> Lookup<'a, T> {
  /// The item to display: the match, or the first item on a miss.
  pub fn item(&self) -> &'a T {
    match *self {
      Self::Found(item) | Self::Fallback(item) => item,
    }
  }

  pub fn is_fallback(&self) -> bool {
    matches!(self, Self::Fallback(_))
  }
}

/// A non-empty ordered collection with unique ids.
#[derive(Debug, Clone)]
pub struct Catalog<T> {
  items: Vec<T>,
}

impl<T: ContentItem> Catalog<T> {
  pub fn new(name: &str, items: Vec<T>) -> Result<Self, SiteError> {
    if items.is_empty() {
      return Err(SiteError::internal(format!("catalog '{name}' is empty")));
    }
    let mut seen = HashSet::with_capacity(items.len());
    for item in &items {
      if !seen.insert(item.id()) {
        return Err(SiteError::internal(format!("catalog '{name}' has duplicate id {}", item.id())));
      }
    }
    Ok(Self { items })
  }

  /// Items in source order.
  pub fn items(&self) -> &[T] {
    &self.items
  }

  pub fn get(&self, id: i64) -> Option<&T> {
    self.items.iter().find(|item| item.id() == id)
  }

  pub fn first(&self) -> &T {
    // Non-empty by construction.
    &self.items[0]
  }

  /// Resolve a raw route segment. Unparseable input and unknown ids both
  /// fall back to the first item.
  pub fn lookup(&self, raw: &str) -> Lookup<'_, T> {
    match parse_route_id(raw).and_then(|id| self.get(id)) {
      Some(item) => Lookup::Found(item),
      None => {
        tracing::debug!(raw, "route id did not match; falling back to first item");
        Lookup::Fallback(self.first())
      }
    }
  }
}

/// Lenient base-10 parse of a route segment. Leading whitespace is skipped,
/// then an optional sign and the longest run of ASCII digits are read; the
/// rest is ignored. `None` when no digit follows or the value overflows `i64`.
pub fn parse_route_id(raw: &str) -> Option<i64> {
  let trimmed = raw.trim_start();
  let sign = usize::from(trimmed.starts_with(['+', '-']));
  let digits = trimmed[sign..].bytes().take_while(u8::is_ascii_digit).count();
  if digits == 0 {
    return None;
  }
  trimmed[..sign + digits].parse().ok()
}
