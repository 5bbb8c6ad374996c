/* src/server/core/rust/src/i18n.rs */

//! Per-page translation tables.
//!
//! Messages live in one JSON file per locale, grouped by namespace (one
//! namespace per page plus `header`, `footer` and `errors`). Both files are
//! checked for identical key sets at load time, so a missing translation is a
//! startup failure rather than a blank label.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::errors::SiteError;
use crate::locale::LocaleCode;

const EN_MESSAGES: &str = include_str!("../locales/en.json");
const RO_MESSAGES: &str = include_str!("../locales/ro.json");

type Messages = Map<String, Value>;

/// Display strings of one namespace in every supported locale.
#[derive(Debug, Clone)]
pub struct TranslationTable {
  namespace: String,
  en: Messages,
  ro: Messages,
}

impl TranslationTable {
  pub fn namespace(&self) -> &str {
    &self.namespace
  }

  /// Display string for `key`. Unknown keys render as the empty string.
  pub fn get(&self, locale: LocaleCode, key: &str) -> &str {
    match self.for_locale(locale).get(key).and_then(Value::as_str) {
      Some(text) => text,
      None => {
        tracing::warn!(namespace = %self.namespace, key, %locale, "missing translation key");
        ""
      }
    }
  }

  /// All messages of the namespace for `locale`, as a JSON object.
  pub fn messages(&self, locale: LocaleCode) -> Value {
    Value::Object(self.for_locale(locale).clone())
  }

  fn for_locale(&self, locale: LocaleCode) -> &Messages {
    match locale {
      LocaleCode::En => &self.en,
      LocaleCode::Ro => &self.ro,
    }
  }
}

#[derive(Debug, Clone)]
pub struct Translations {
  tables: BTreeMap<String, TranslationTable>,
}

impl Translations {
  /// Messages bundled with the crate.
  pub fn embedded() -> Result<Self, SiteError> {
    Self::load(EN_MESSAGES, RO_MESSAGES)
  }

  /// Parse and cross-check the English and Romanian message files.
  pub fn load(en_source: &str, ro_source: &str) -> Result<Self, SiteError> {
    let en = parse_file(LocaleCode::En, en_source)?;
    let mut ro = parse_file(LocaleCode::Ro, ro_source)?;

    check_same_keys(&en, &ro, LocaleCode::Ro)?;
    check_same_keys(&ro, &en, LocaleCode::En)?;

    let mut tables = BTreeMap::new();
    for (namespace, en_messages) in en {
      let ro_messages = ro.remove(&namespace).unwrap_or_default();
      tables.insert(
        namespace.clone(),
        TranslationTable { namespace, en: en_messages, ro: ro_messages },
      );
    }
    tracing::debug!(namespaces = tables.len(), "translations loaded");
    Ok(Self { tables })
  }

  pub fn table(&self, namespace: &str) -> Result<&TranslationTable, SiteError> {
    self
      .tables
      .get(namespace)
      .ok_or_else(|| SiteError::internal(format!("unknown translation namespace '{namespace}'")))
  }

  pub fn namespaces(&self) -> impl Iterator<Item = &str> {
    self.tables.keys().map(String::as_str)
  }
}

fn parse_file(locale: LocaleCode, source: &str) -> Result<BTreeMap<String, Messages>, SiteError> {
  let root: Value = serde_json::from_str(source)
    .map_err(|e| SiteError::internal(format!("locale '{locale}': invalid JSON: {e}")))?;
  let Value::Object(namespaces) = root else {
    return Err(SiteError::internal(format!("locale '{locale}': top level must be an object")));
  };

  let mut out = BTreeMap::new();
  for (namespace, messages) in namespaces {
    let Value::Object(messages) = messages else {
      return Err(SiteError::internal(format!(
        "locale '{locale}': namespace '{namespace}' must be an object"
      )));
    };
    if let Some((key, _)) = messages.iter().find(|(_, v)| !v.is_string()) {
      return Err(SiteError::internal(format!(
        "locale '{locale}': '{namespace}.{key}' must be a string"
      )));
    }
    out.insert(namespace, messages);
  }
  Ok(out)
}

/// Every namespace and key of `reference` must exist in `other`.
fn check_same_keys(
  reference: &BTreeMap<String, Messages>,
  other: &BTreeMap<String, Messages>,
  other_locale: LocaleCode,
) -> Result<(), SiteError> {
  for (namespace, messages) in reference {
    let Some(other_messages) = other.get(namespace) else {
      return Err(SiteError::internal(format!(
        "namespace '{namespace}' missing for locale '{other_locale}'"
      )));
    };
    if let Some(key) = messages.keys().find(|key| !other_messages.contains_key(*key)) {
      return Err(SiteError::internal(format!(
        "translation key '{namespace}.{key}' missing for locale '{other_locale}'"
      )));
    }
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn embedded_messages_load() {
    let translations = Translations::embedded().unwrap();
    let namespaces: Vec<&str> = translations.namespaces().collect();
    for expected in [
      "about",
      "errors",
      "footer",
      "header",
      "home",
      "match_detail",
      "matches",
      "news",
      "news_detail",
      "player_detail",
      "players",
    ] {
      assert!(namespaces.contains(&expected), "missing namespace {expected}");
    }
  }

  #[test]
  fn lookup_follows_locale() {
    let translations = Translations::embedded().unwrap();
    let header = translations.table("header").unwrap();
    assert_eq!(header.get(LocaleCode::En, "home"), "Home");
    assert_eq!(header.get(LocaleCode::Ro, "home"), "Acasă");
    assert_eq!(header.get(LocaleCode::Ro, "news"), "Știri");
  }

  #[test]
  fn switch_label_names_the_other_language() {
    let translations = Translations::embedded().unwrap();
    let header = translations.table("header").unwrap();
    assert_eq!(header.get(LocaleCode::En, "switch_language"), "Switch to Română");
    assert_eq!(header.get(LocaleCode::Ro, "switch_language"), "Switch to English");
  }

  #[test]
  fn unknown_key_is_blank() {
    let translations = Translations::embedded().unwrap();
    assert_eq!(translations.table("home").unwrap().get(LocaleCode::En, "nope"), "");
  }

  #[test]
  fn unknown_namespace_is_an_error() {
    let err = Translations::embedded().unwrap().table("shop").unwrap_err();
    assert_eq!(err.status(), 500);
  }

  #[test]
  fn messages_are_a_json_object() {
    let translations = Translations::embedded().unwrap();
    let messages = translations.table("news").unwrap().messages(LocaleCode::Ro);
    assert_eq!(messages["read_more"], "Citește mai mult");
  }

  #[test]
  fn missing_key_fails_load() {
    let err = Translations::load(
      r#"{"home": {"title": "Home", "subtitle": "Hi"}}"#,
      r#"{"home": {"title": "Acasă"}}"#,
    )
    .unwrap_err();
    assert_eq!(err.message(), "translation key 'home.subtitle' missing for locale 'ro'");
  }

  #[test]
  fn extra_key_fails_load() {
    let err = Translations::load(
      r#"{"home": {"title": "Home"}}"#,
      r#"{"home": {"title": "Acasă", "extra": "x"}}"#,
    )
    .unwrap_err();
    assert_eq!(err.message(), "translation key 'home.extra' missing for locale 'en'");
  }

  #[test]
  fn missing_namespace_fails_load() {
    let err = Translations::load(r#"{"home": {}, "about": {}}"#, r#"{"home": {}}"#).unwrap_err();
    assert_eq!(err.message(), "namespace 'about' missing for locale 'ro'");
  }

  #[test]
  fn non_string_value_fails_load() {
    let err = Translations::load(r#"{"home": {"n": 1}}"#, r#"{"home": {"n": "1"}}"#).unwrap_err();
    assert!(err.message().contains("'home.n' must be a string"));
  }

  #[test]
  fn invalid_json_fails_load() {
    assert!(Translations::load("{", "{}").is_err());
    assert!(Translations::load("[]", "{}").is_err());
  }
}
