/* src/server/injector/rust/src/render.rs */

use serde_json::Value;

use crate::ast::Node;
use crate::helpers::{Scope, escape_html, is_truthy, stringify};

pub(crate) fn render(nodes: &[Node], scope: Scope<'_>, out: &mut String) {
  for node in nodes {
    match node {
      Node::Text(text) => out.push_str(text),

      Node::Slot { path, raw } => {
        let text = stringify(scope.resolve(path).unwrap_or(&Value::Null));
        if *raw {
          out.push_str(&text);
        } else {
          out.push_str(&escape_html(&text));
        }
      }

      Node::If { path, then_nodes, else_nodes } => {
        if scope.resolve(path).is_some_and(is_truthy) {
          render(then_nodes, scope, out);
        } else {
          render(else_nodes, scope, out);
        }
      }

      Node::Each { path, body } => {
        if let Some(Value::Array(items)) = scope.resolve(path) {
          for item in items {
            render(body, scope.enter(item), out);
          }
        }
      }

      Node::Match { path, branches } => {
        let key = stringify(scope.resolve(path).unwrap_or(&Value::Null));
        if let Some((_, body)) = branches.iter().find(|(value, _)| *value == key) {
          render(body, scope, out);
        }
      }
    }
  }
}
