/* src/server/core/rust/src/render.rs */

use std::sync::Arc;

use fearless_injector::Template;
use serde_json::{Map, Value, json};

use crate::catalog::DetailMissPolicy;
use crate::content::Content;
use crate::errors::SiteError;
use crate::i18n::Translations;
use crate::locale::LocaleCode;
use crate::navigation::RouteParams;
use crate::page::{PageContext, PageDef};

pub const SITE_NAME: &str = "Fearless Gaming";

const LAYOUT_TEMPLATE: &str = include_str!("../templates/layout.html");
const ERROR_TEMPLATE: &str = include_str!("../templates/error.html");

const NAV: [(&str, &str); 5] = [
  ("/", "home"),
  ("/matches", "matches"),
  ("/players", "players"),
  ("/news", "news"),
  ("/about", "about"),
];

/// Renders pages into the shared layout.
pub struct Renderer {
  content: Arc<Content>,
  translations: Arc<Translations>,
  layout: Template,
  error: Template,
  detail_miss: DetailMissPolicy,
}

impl Renderer {
  pub fn new(
    content: Arc<Content>,
    translations: Arc<Translations>,
    detail_miss: DetailMissPolicy,
  ) -> Result<Self, SiteError> {
    let layout = Template::compile(LAYOUT_TEMPLATE)
      .map_err(|e| SiteError::internal(format!("layout template: {e}")))?;
    let error = Template::compile(ERROR_TEMPLATE)
      .map_err(|e| SiteError::internal(format!("error template: {e}")))?;
    Ok(Self { content, translations, layout, error, detail_miss })
  }

  pub fn content(&self) -> &Content {
    &self.content
  }

  pub fn translations(&self) -> &Translations {
    &self.translations
  }

  /// Full HTML document for `page` at `path`.
  pub fn render_page(
    &self,
    page: &PageDef,
    locale: LocaleCode,
    params: &RouteParams,
    path: &str,
  ) -> Result<String, SiteError> {
    let ctx = PageContext {
      content: &self.content,
      translations: &self.translations,
      locale,
      params,
      detail_miss: self.detail_miss,
    };
    let loaded = (page.loader)(&ctx)?;

    let mut data = match loaded.data {
      Value::Object(map) => map,
      Value::Null => Map::new(),
      other => {
        return Err(SiteError::internal(format!(
          "page {}: loader returned {other} instead of an object",
          page.route
        )));
      }
    };
    data.insert("locale".into(), Value::String(locale.as_str().into()));
    data.insert("t".into(), self.translations.table(&page.namespace)?.messages(locale));

    let body = page.template.render(&Value::Object(data));
    self.wrap(locale, loaded.title.as_deref(), &body, path)
  }

  /// Localized error page. Never fails: missing chrome renders blank.
  pub fn render_error(&self, status: u16, locale: LocaleCode, path: &str) -> String {
    let (title_key, message_key) = match status {
      404 => ("not_found_title", "not_found_message"),
      400..=499 => ("bad_request_title", "bad_request_message"),
      _ => ("server_error_title", "server_error_message"),
    };
    let t = self.translations.table("errors").ok();
    let text = |key: &str| t.map_or("", |table| table.get(locale, key));
    let title = text(title_key);

    let body = self.error.render(&json!({
      "status": status,
      "title": title,
      "message": text(message_key),
      "back_home": text("back_home"),
    }));
    self.wrap(locale, Some(title), &body, path).unwrap_or(body)
  }

  fn wrap(&self, locale: LocaleCode, title: Option<&str>, body: &str, path: &str) -> Result<String, SiteError> {
    let header = self.translations.table("header")?;
    let footer = self.translations.table("footer")?;

    let nav: Vec<Value> = NAV
      .iter()
      .map(|&(href, key)| {
        json!({
          "href": href,
          "label": header.get(locale, key),
          "active": is_active(href, path),
        })
      })
      .collect();
    let locales: Vec<Value> = LocaleCode::ALL
      .iter()
      .map(|code| {
        json!({
          "code": code.as_str(),
          "name": code.native_name(),
          "current": *code == locale,
        })
      })
      .collect();
    let title = match title {
      Some(title) if !title.is_empty() => format!("{title} | {SITE_NAME}"),
      _ => SITE_NAME.to_string(),
    };

    Ok(self.layout.render(&json!({
      "lang": locale.as_str(),
      "title": title,
      "path": path,
      "nav": nav,
      "locales": locales,
      "switch_to": locale.toggled().as_str(),
      "header": header.messages(locale),
      "footer": footer.messages(locale),
      "body": body,
    })))
  }
}

fn is_active(href: &str, path: &str) -> bool {
  if href == "/" {
    return path == "/";
  }
  path == href || path.strip_prefix(href).is_some_and(|rest| rest.starts_with('/'))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::page::PageData;

  fn renderer(detail_miss: DetailMissPolicy) -> Renderer {
    Renderer::new(
      Arc::new(Content::fearless().unwrap()),
      Arc::new(Translations::embedded().unwrap()),
      detail_miss,
    )
    .unwrap()
  }

  fn echo_page() -> PageDef {
    PageDef::new("/echo", "about", "<h1><!--fl:t.title--></h1><p><!--fl:name--></p>", |ctx| {
      Ok(PageData {
        title: Some(ctx.text("about", "title")?.to_string()),
        data: json!({ "name": ctx.content.players.first().nickname }),
      })
    })
    .unwrap()
  }

  #[test]
  fn page_is_wrapped_in_layout() {
    let html = renderer(DetailMissPolicy::NotFound)
      .render_page(&echo_page(), LocaleCode::En, &RouteParams::new(), "/echo")
      .unwrap();
    assert!(html.contains(r#"<html lang="en">"#));
    assert!(html.contains("<title>About Fearless | Fearless Gaming</title>"));
    assert!(html.contains("<h1>About Fearless</h1><p>WolfKing</p>"));
    assert!(html.contains("Quick Links"));
  }

  #[test]
  fn chrome_follows_page_locale() {
    let html = renderer(DetailMissPolicy::NotFound)
      .render_page(&echo_page(), LocaleCode::Ro, &RouteParams::new(), "/echo")
      .unwrap();
    assert!(html.contains(r#"<html lang="ro">"#));
    assert!(html.contains("<h1>Despre Fearless</h1>"));
    assert!(html.contains("Link-uri Rapide"));
    assert!(html.contains("Switch to English"));
    assert!(!html.contains("Quick Links"));
  }

  #[test]
  fn error_page_is_localized() {
    let r = renderer(DetailMissPolicy::NotFound);
    let en = r.render_error(404, LocaleCode::En, "/nope");
    let ro = r.render_error(404, LocaleCode::Ro, "/nope");
    assert!(en.contains("Page not found"));
    assert!(ro.contains("Pagina nu a fost găsită"));
    assert!(r.render_error(500, LocaleCode::En, "/").contains("Something went wrong"));
    assert!(r.render_error(400, LocaleCode::En, "/").contains("Invalid request"));
  }

  #[test]
  fn non_object_loader_data_is_an_error() {
    let page = PageDef::new("/bad", "about", "", |_| Ok(PageData { title: None, data: json!([1]) }))
      .unwrap();
    let err = renderer(DetailMissPolicy::NotFound)
      .render_page(&page, LocaleCode::En, &RouteParams::new(), "/bad")
      .unwrap_err();
    assert_eq!(err.status(), 500);
  }

  #[test]
  fn active_nav_entry() {
    assert!(is_active("/", "/"));
    assert!(!is_active("/", "/matches"));
    assert!(is_active("/matches", "/matches/3"));
    assert!(!is_active("/news", "/newsletter"));
  }
}
