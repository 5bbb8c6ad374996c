/* src/server/core/rust/src/pages/home.rs */

use serde_json::{Value, json};

use super::{match_card, player_card};
use crate::errors::SiteError;
use crate::page::{PageData, PageDef};

const TEMPLATE: &str = include_str!("../../templates/home.html");

pub(super) fn page() -> Result<PageDef, SiteError> {
  PageDef::new("/", "home", TEMPLATE, |ctx| {
    let players: Vec<Value> =
      ctx.content.players.items().iter().map(|p| player_card(p, ctx.locale)).collect();
    let upcoming: Vec<Value> =
      ctx.content.upcoming_matches().map(|m| match_card(m, ctx.locale)).collect();
    Ok(PageData { title: None, data: json!({ "players": players, "upcoming": upcoming }) })
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::catalog::DetailMissPolicy;
  use crate::locale::LocaleCode;
  use crate::navigation::RouteParams;
  use crate::pages::tests::Fixture;

  #[test]
  fn roster_and_upcoming_matches() {
    let fixture = Fixture::new();
    let params = RouteParams::new();
    let ctx = fixture.ctx(LocaleCode::En, &params, DetailMissPolicy::NotFound);
    let loaded = (page().unwrap().loader)(&ctx).unwrap();

    assert!(loaded.title.is_none());
    assert_eq!(loaded.data["players"].as_array().unwrap().len(), 5);
    assert_eq!(loaded.data["players"][0]["href"], "/players/1");
    let upcoming = loaded.data["upcoming"].as_array().unwrap();
    assert_eq!(upcoming.len(), 3);
    assert_eq!(upcoming[2]["opponent"], "G2 Esports");
  }

  #[test]
  fn renders_hero_in_romanian() {
    let fixture = Fixture::new();
    let params = RouteParams::new();
    let ctx = fixture.ctx(LocaleCode::Ro, &params, DetailMissPolicy::NotFound);
    let page = page().unwrap();
    let mut data = (page.loader)(&ctx).unwrap().data;
    data["t"] = fixture.translations.table("home").unwrap().messages(LocaleCode::Ro);
    let html = page.template.render(&data);
    assert!(html.contains("Echipă profesională de Counter-Strike 2 din România"));
    assert!(html.contains(r#"href="/matches/1""#));
  }
}
