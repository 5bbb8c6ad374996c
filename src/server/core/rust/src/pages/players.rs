/* src/server/core/rust/src/pages/players.rs */

use serde_json::{Value, json};

use super::{MATCHES_ROUTE, PLAYERS_ROUTE, player_card};
use crate::content::PLACEHOLDER_IMAGE;
use crate::errors::SiteError;
use crate::navigation::navigate_to_detail;
use crate::page::{PageData, PageDef};

const LIST_TEMPLATE: &str = include_str!("../../templates/players.html");
const DETAIL_TEMPLATE: &str = include_str!("../../templates/player_detail.html");

const RECENT_MATCHES: usize = 3;

pub(super) fn list() -> Result<PageDef, SiteError> {
  PageDef::new(PLAYERS_ROUTE, "players", LIST_TEMPLATE, |ctx| {
    let players: Vec<Value> =
      ctx.content.players.items().iter().map(|p| player_card(p, ctx.locale)).collect();
    let staff: Vec<Value> = ctx
      .content
      .staff
      .items()
      .iter()
      .map(|s| {
        json!({
          "name": s.name,
          "role": s.role.get(ctx.locale),
          "description": s.description.get(ctx.locale),
          "photo": PLACEHOLDER_IMAGE,
          "socials": s.socials.to_json(),
        })
      })
      .collect();
    Ok(PageData {
      title: Some(ctx.text("players", "title")?.to_string()),
      data: json!({ "players": players, "staff": staff }),
    })
  })
}

pub(super) fn detail() -> Result<PageDef, SiteError> {
  PageDef::new("/players/{id}", "player_detail", DETAIL_TEMPLATE, |ctx| {
    let p = ctx.lookup(&ctx.content.players, "player")?;
    let locale = ctx.locale;

    let recent: Vec<Value> = ctx
      .content
      .recent_matches_for(p.nickname, RECENT_MATCHES)
      .into_iter()
      .map(|m| {
        json!({
          "href": navigate_to_detail(MATCHES_ROUTE, m.id),
          "opponent": m.opponent,
          "date": m.date.format(locale),
          "score": m.score.map(|s| s.to_string()),
          "won": m.score.is_some_and(|s| s.won()),
          "map": m.map_played(),
        })
      })
      .collect();

    let mut player = player_card(p, locale);
    player["bio"] = json!(p.bio.get(locale));
    player["joined"] = json!(p.joined.format_month_year(locale));

    Ok(PageData {
      title: Some(p.nickname.to_string()),
      data: json!({ "player": player, "recent": recent }),
    })
  })
}
