/* src/server/injector/rust/src/token.rs */

use crate::TemplateError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token<'a> {
  Text(&'a str),
  /// Directive body between `<!--fl:` and `-->`.
  Marker(&'a str),
}

pub(crate) const MARKER_OPEN: &str = "<!--fl:";
pub(crate) const MARKER_CLOSE: &str = "-->";

pub(crate) fn tokenize(template: &str) -> Result<Vec<Token<'_>>, TemplateError> {
  let mut tokens = Vec::new();
  let mut rest = template;
  let mut offset = 0;

  while !rest.is_empty() {
    let Some(open) = rest.find(MARKER_OPEN) else {
      tokens.push(Token::Text(rest));
      break;
    };
    if open > 0 {
      tokens.push(Token::Text(&rest[..open]));
    }
    let body_start = open + MARKER_OPEN.len();
    let Some(close) = rest[body_start..].find(MARKER_CLOSE) else {
      return Err(TemplateError::UnclosedMarker { offset: offset + open });
    };
    tokens.push(Token::Marker(rest[body_start..body_start + close].trim()));
    let consumed = body_start + close + MARKER_CLOSE.len();
    offset += consumed;
    rest = &rest[consumed..];
  }

  Ok(tokens)
}
