/* src/server/core/rust/src/errors.rs */

use std::fmt;

use fearless_injector::TemplateError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteError {
  code: &'static str,
  message: String,
  status: u16,
}

impl SiteError {
  pub fn new(code: &'static str, message: impl Into<String>, status: u16) -> Self {
    Self { code, message: message.into(), status }
  }

  pub fn validation(msg: impl Into<String>) -> Self {
    Self::new("VALIDATION_ERROR", msg, 400)
  }

  pub fn not_found(msg: impl Into<String>) -> Self {
    Self::new("NOT_FOUND", msg, 404)
  }

  pub fn internal(msg: impl Into<String>) -> Self {
    Self::new("INTERNAL_ERROR", msg, 500)
  }

  pub fn code(&self) -> &'static str {
    self.code
  }

  pub fn message(&self) -> &str {
    &self.message
  }

  pub fn status(&self) -> u16 {
    self.status
  }

  pub fn is_not_found(&self) -> bool {
    self.status == 404
  }
}

impl fmt::Display for SiteError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}: {}", self.code, self.message)
  }
}

impl std::error::Error for SiteError {}

impl From<TemplateError> for SiteError {
  fn from(err: TemplateError) -> Self {
    Self::internal(format!("template: {err}"))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn constructors_set_status() {
    assert_eq!(SiteError::validation("x").status(), 400);
    assert_eq!(SiteError::not_found("x").status(), 404);
    assert_eq!(SiteError::internal("x").status(), 500);
  }

  #[test]
  fn explicit_status() {
    let err = SiteError::new("GONE", "article removed", 410);
    assert_eq!(err.code(), "GONE");
    assert_eq!(err.message(), "article removed");
    assert_eq!(err.status(), 410);
    assert!(!err.is_not_found());
  }

  #[test]
  fn display_format() {
    assert_eq!(SiteError::not_found("no match 99").to_string(), "NOT_FOUND: no match 99");
  }

  #[test]
  fn template_errors_are_internal() {
    let err: SiteError = TemplateError::UnclosedMarker { offset: 3 }.into();
    assert_eq!(err.status(), 500);
    assert_eq!(err.message(), "template: unclosed template marker at byte 3");
  }
}
