/* src/server/injector/rust/src/helpers.rs */

use serde_json::Value;

/// Lookup scope for one render pass. Inside `each` blocks `$` names the
/// current item and `$$` the item of the enclosing `each`.
#[derive(Clone, Copy)]
pub(crate) struct Scope<'a> {
  pub(crate) root: &'a Value,
  pub(crate) item: Option<&'a Value>,
  pub(crate) parent: Option<&'a Value>,
}

impl<'a> Scope<'a> {
  pub(crate) fn new(root: &'a Value) -> Self {
    Self { root, item: None, parent: None }
  }

  pub(crate) fn enter(self, item: &'a Value) -> Self {
    Self { root: self.root, item: Some(item), parent: self.item }
  }

  pub(crate) fn resolve(&self, path: &str) -> Option<&'a Value> {
    let mut keys = path.split('.');
    let mut current = match keys.next()? {
      "$" => self.item?,
      "$$" => self.parent?,
      first => self.root.get(first)?,
    };
    for key in keys {
      current = match current {
        Value::Array(items) => items.get(key.parse::<usize>().ok()?)?,
        other => other.get(key)?,
      };
    }
    Some(current)
  }
}

pub(crate) fn is_truthy(value: &Value) -> bool {
  match value {
    Value::Null => false,
    Value::Bool(b) => *b,
    Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
    Value::String(s) => !s.is_empty(),
    Value::Array(items) => !items.is_empty(),
    Value::Object(_) => true,
  }
}

pub(crate) fn stringify(value: &Value) -> String {
  match value {
    Value::Null => String::new(),
    Value::Bool(b) => b.to_string(),
    Value::Number(n) => n.to_string(),
    Value::String(s) => s.clone(),
    other => other.to_string(),
  }
}

/// Escape text for HTML element content and quoted attribute values.
pub fn escape_html(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  for ch in s.chars() {
    match ch {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#x27;"),
      c => out.push(c),
    }
  }
  out
}
