/* src/server/core/rust/src/pages/mod.rs */

//! Page definitions of the site. Each loader is a pure function of content,
//! locale and route parameters.

mod about;
mod home;
mod matches;
mod news;
mod players;

use serde_json::{Value, json};

use crate::content::{Match, PLACEHOLDER_IMAGE, Player};
use crate::errors::SiteError;
use crate::locale::LocaleCode;
use crate::navigation::navigate_to_detail;
use crate::page::PageDef;

pub const MATCHES_ROUTE: &str = "/matches";
pub const PLAYERS_ROUTE: &str = "/players";
pub const NEWS_ROUTE: &str = "/news";

/// Every page of the site, in registration order.
pub fn site_pages() -> Result<Vec<PageDef>, SiteError> {
  Ok(vec![
    home::page()?,
    matches::list()?,
    matches::detail()?,
    players::list()?,
    players::detail()?,
    news::list()?,
    news::detail()?,
    about::page()?,
  ])
}

/// Card data shared by the home page and the matches list.
fn match_card(m: &Match, locale: LocaleCode) -> Value {
  let scores: Vec<Value> = m
    .player_scores
    .iter()
    .map(|s| json!({ "player": s.player, "kd": format!("{}-{}", s.kills, s.deaths) }))
    .collect();
  json!({
    "id": m.id,
    "href": navigate_to_detail(MATCHES_ROUTE, m.id),
    "opponent": m.opponent,
    "tournament": m.tournament,
    "date": m.date.format(locale),
    "date_iso": m.date.iso(),
    "time": m.time,
    "status": m.status.as_str(),
    "map": m.map_played(),
    "score": m.score.map(|s| s.to_string()),
    "won": m.score.is_some_and(|s| s.won()),
    "scores": scores,
  })
}

fn player_card(p: &Player, locale: LocaleCode) -> Value {
  json!({
    "id": p.id,
    "href": navigate_to_detail(PLAYERS_ROUTE, p.id),
    "nickname": p.nickname,
    "name": p.name,
    "role": p.role.label(locale),
    "country": p.country.get(locale),
    "age": p.age,
    "photo": PLACEHOLDER_IMAGE,
    "socials": p.socials.to_json(),
  })
}
