/* src/server/injector/rust/src/ast.rs */

#[derive(Debug, Clone)]
pub(crate) enum Node {
  Text(String),
  /// `raw` slots (`:html`) are emitted without escaping.
  Slot {
    path: String,
    raw: bool,
  },
  If {
    path: String,
    then_nodes: Vec<Node>,
    else_nodes: Vec<Node>,
  },
  Each {
    path: String,
    body: Vec<Node>,
  },
  Match {
    path: String,
    branches: Vec<(String, Vec<Node>)>,
  },
}
