/* src/server/core/rust/src/locale.rs */

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::SiteError;

/// Display language of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocaleCode {
  #[default]
  En,
  Ro,
}

impl LocaleCode {
  pub const ALL: [LocaleCode; 2] = [LocaleCode::En, LocaleCode::Ro];

  /// Locale every visitor starts with. There is no detection of a previous
  /// choice or of the browser language.
  pub fn initial() -> Self {
    Self::En
  }

  pub fn as_str(self) -> &'static str {
    match self {
      Self::En => "en",
      Self::Ro => "ro",
    }
  }

  pub fn native_name(self) -> &'static str {
    match self {
      Self::En => "English",
      Self::Ro => "Română",
    }
  }

  pub fn toggled(self) -> Self {
    match self {
      Self::En => Self::Ro,
      Self::Ro => Self::En,
    }
  }
}

impl fmt::Display for LocaleCode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for LocaleCode {
  type Err = SiteError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "en" => Ok(Self::En),
      "ro" => Ok(Self::Ro),
      other => Err(SiteError::validation(format!("unsupported locale '{other}'"))),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn initial_is_english() {
    assert_eq!(LocaleCode::initial(), LocaleCode::En);
    assert_eq!(LocaleCode::default(), LocaleCode::initial());
  }

  #[test]
  fn parse_known_codes() {
    assert_eq!("en".parse::<LocaleCode>().unwrap(), LocaleCode::En);
    assert_eq!("ro".parse::<LocaleCode>().unwrap(), LocaleCode::Ro);
  }

  #[test]
  fn parse_is_exact() {
    for input in ["EN", "ro-RO", " ro", "", "fr"] {
      let err = input.parse::<LocaleCode>().unwrap_err();
      assert_eq!(err.status(), 400, "{input:?} should be rejected");
    }
  }

  #[test]
  fn display_round_trips_codes() {
    for code in LocaleCode::ALL {
      assert_eq!(code.to_string().parse::<LocaleCode>().unwrap(), code);
    }
  }

  #[test]
  fn toggle_and_names() {
    assert_eq!(LocaleCode::En.toggled(), LocaleCode::Ro);
    assert_eq!(LocaleCode::Ro.toggled(), LocaleCode::En);
    assert_eq!(LocaleCode::Ro.native_name(), "Română");
  }

  #[test]
  fn serde_uses_lowercase_codes() {
    assert_eq!(serde_json::to_string(&LocaleCode::Ro).unwrap(), "\"ro\"");
    assert_eq!(serde_json::from_str::<LocaleCode>("\"en\"").unwrap(), LocaleCode::En);
  }
}
