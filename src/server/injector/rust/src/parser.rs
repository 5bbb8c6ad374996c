/* src/server/injector/rust/src/parser.rs */

use std::fmt;

use crate::ast::Node;
use crate::token::Token;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
  /// `<!--fl:` without a closing `-->`; offset is the byte position of the opener.
  UnclosedMarker { offset: usize },
  /// A block directive (`if:`, `each:`, `match:`) that is never closed.
  Unterminated { directive: String },
  /// A closing or branch directive with no open block to attach to.
  Unexpected { directive: String },
}

impl fmt::Display for TemplateError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::UnclosedMarker { offset } => write!(f, "unclosed template marker at byte {offset}"),
      Self::Unterminated { directive } => write!(f, "block `{directive}` is never closed"),
      Self::Unexpected { directive } => write!(f, "unexpected directive `{directive}`"),
    }
  }
}

impl std::error::Error for TemplateError {}

pub(crate) fn parse(tokens: &[Token<'_>]) -> Result<Vec<Node>, TemplateError> {
  let mut parser = Parser { tokens, pos: 0 };
  let (nodes, _) = parser.block(&|_| false)?;
  Ok(nodes)
}

struct Parser<'t, 'a> {
  tokens: &'t [Token<'a>],
  pos: usize,
}

impl<'a> Parser<'_, 'a> {
  /// Collect nodes until a marker accepted by `stop` is consumed. Returns that
  /// marker, or `None` when the tokens ran out first.
  fn block(
    &mut self,
    stop: &dyn Fn(&str) -> bool,
  ) -> Result<(Vec<Node>, Option<&'a str>), TemplateError> {
    let mut nodes = Vec::new();
    while let Some(&token) = self.tokens.get(self.pos) {
      self.pos += 1;
      match token {
        Token::Text(text) => nodes.push(Node::Text(text.to_string())),
        Token::Marker(directive) => {
          if stop(directive) {
            return Ok((nodes, Some(directive)));
          }
          nodes.push(self.directive(directive)?);
        }
      }
    }
    Ok((nodes, None))
  }

  fn directive(&mut self, directive: &'a str) -> Result<Node, TemplateError> {
    if let Some(path) = directive.strip_prefix("if:") {
      return self.if_block(directive, path);
    }
    if let Some(path) = directive.strip_prefix("each:") {
      let (body, end) = self.block(&|d| d == "endeach")?;
      if end.is_none() {
        return Err(unterminated(directive));
      }
      return Ok(Node::Each { path: path.to_string(), body });
    }
    if let Some(path) = directive.strip_prefix("match:") {
      return self.match_block(directive, path);
    }
    if is_closing(directive) {
      return Err(TemplateError::Unexpected { directive: directive.to_string() });
    }
    match directive.strip_suffix(":html") {
      Some(path) => Ok(Node::Slot { path: path.to_string(), raw: true }),
      None => Ok(Node::Slot { path: directive.to_string(), raw: false }),
    }
  }

  fn if_block(&mut self, directive: &'a str, path: &str) -> Result<Node, TemplateError> {
    let endif = format!("endif:{path}");
    let (then_nodes, end) = self.block(&|d| d == "else" || d == endif)?;
    let else_nodes = match end {
      Some("else") => {
        let (nodes, end) = self.block(&|d| d == endif)?;
        if end.is_none() {
          return Err(unterminated(directive));
        }
        nodes
      }
      Some(_) => Vec::new(),
      None => return Err(unterminated(directive)),
    };
    Ok(Node::If { path: path.to_string(), then_nodes, else_nodes })
  }

  fn match_block(&mut self, directive: &'a str, path: &str) -> Result<Node, TemplateError> {
    let mut branches = Vec::new();

    // Only whitespace may separate `match:` from its first `when:`.
    let mut pending = loop {
      match self.tokens.get(self.pos).copied() {
        Some(Token::Text(text)) if text.trim().is_empty() => self.pos += 1,
        Some(Token::Marker(d)) if d.starts_with("when:") || d == "endmatch" => {
          self.pos += 1;
          break d.strip_prefix("when:");
        }
        Some(Token::Text(_)) => {
          return Err(TemplateError::Unexpected { directive: format!("text inside {directive}") });
        }
        Some(Token::Marker(d)) => {
          return Err(TemplateError::Unexpected { directive: d.to_string() });
        }
        None => return Err(unterminated(directive)),
      }
    };

    while let Some(value) = pending {
      let (body, end) = self.block(&|d| d.starts_with("when:") || d == "endmatch")?;
      branches.push((value.to_string(), body));
      pending = match end {
        Some(d) => d.strip_prefix("when:"),
        None => return Err(unterminated(directive)),
      };
    }

    Ok(Node::Match { path: path.to_string(), branches })
  }
}

fn is_closing(directive: &str) -> bool {
  matches!(directive, "else" | "endeach" | "endmatch")
    || directive.starts_with("endif:")
    || directive.starts_with("when:")
}

fn unterminated(directive: &str) -> TemplateError {
  TemplateError::Unterminated { directive: directive.to_string() }
}
