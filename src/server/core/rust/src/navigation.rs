/* src/server/core/rust/src/navigation.rs */

use std::collections::HashMap;

pub type RouteParams = HashMap<String, String>;

/// Detail path for a list row: `"{list_route}/{id}"`. The id is not checked
/// against any catalog; the detail page resolves it on arrival.
pub fn navigate_to_detail(list_route: &str, id: i64) -> String {
  format!("{}/{id}", list_route.trim_end_matches('/'))
}

/// Match `path` against an axum-style pattern such as `/players/{id}` and
/// collect the named segments.
pub fn match_route(pattern: &str, path: &str) -> Option<RouteParams> {
  let mut params = RouteParams::new();
  let mut pattern_segments = segments(pattern);
  let mut path_segments = segments(path);
  loop {
    match (pattern_segments.next(), path_segments.next()) {
      (None, None) => return Some(params),
      (Some(expected), Some(actual)) => {
        if let Some(name) = expected.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
          params.insert(name.to_string(), actual.to_string());
        } else if expected != actual {
          return None;
        }
      }
      _ => return None,
    }
  }
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
  path.split('/').filter(|segment| !segment.is_empty())
}
