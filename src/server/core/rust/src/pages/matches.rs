/* src/server/core/rust/src/pages/matches.rs */

use serde_json::{Value, json};

use super::{MATCHES_ROUTE, match_card};
use crate::content::PLACEHOLDER_IMAGE;
use crate::errors::SiteError;
use crate::navigation::navigate_to_detail;
use crate::page::{PageData, PageDef};

const LIST_TEMPLATE: &str = include_str!("../../templates/matches.html");
const DETAIL_TEMPLATE: &str = include_str!("../../templates/match_detail.html");

pub(super) fn list() -> Result<PageDef, SiteError> {
  PageDef::new(MATCHES_ROUTE, "matches", LIST_TEMPLATE, |ctx| {
    let upcoming: Vec<Value> =
      ctx.content.upcoming_matches().map(|m| match_card(m, ctx.locale)).collect();
    let past: Vec<Value> = ctx.content.past_matches().map(|m| match_card(m, ctx.locale)).collect();
    Ok(PageData {
      title: Some(ctx.text("matches", "title")?.to_string()),
      data: json!({ "upcoming": upcoming, "past": past }),
    })
  })
}

pub(super) fn detail() -> Result<PageDef, SiteError> {
  PageDef::new("/matches/{id}", "match_detail", DETAIL_TEMPLATE, |ctx| {
    let m = ctx.lookup(&ctx.content.matches, "match")?;
    let locale = ctx.locale;

    let lineup: Vec<Value> = ctx
      .content
      .players
      .items()
      .iter()
      .map(|p| {
        json!({
          "href": navigate_to_detail(super::PLAYERS_ROUTE, p.id),
          "nickname": p.nickname,
          "role": p.role.label(locale),
          "photo": PLACEHOLDER_IMAGE,
        })
      })
      .collect();
    let opponent_lineup: Vec<Value> = m
      .opponent_lineup
      .iter()
      .map(|entry| {
        json!({ "nickname": entry.nickname, "role": entry.role.label(locale), "photo": PLACEHOLDER_IMAGE })
      })
      .collect();
    let previous: Vec<Value> = m
      .previous_meetings
      .iter()
      .map(|meeting| {
        json!({
          "tournament": meeting.tournament,
          "date": meeting.date.format(locale),
          "date_iso": meeting.date.iso(),
          "score": meeting.score.to_string(),
          "won": meeting.score.won(),
        })
      })
      .collect();

    let mut card = match_card(m, locale);
    card["venue"] = json!(m.venue);
    card["description"] = json!(m.description.get(locale));
    card["maps"] = json!(m.maps);

    Ok(PageData {
      title: Some(format!("FEARLESS vs {}", m.opponent)),
      data: json!({
        "match": card,
        "lineup": lineup,
        "opponent_lineup": opponent_lineup,
        "previous": previous,
      }),
    })
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::catalog::DetailMissPolicy;
  use crate::locale::LocaleCode;
  use crate::navigation::RouteParams;
  use crate::pages::tests::{Fixture, id_param};

  #[test]
  fn list_splits_upcoming_and_past() {
    let fixture = Fixture::new();
    let params = RouteParams::new();
    let ctx = fixture.ctx(LocaleCode::En, &params, DetailMissPolicy::NotFound);
    let loaded = (list().unwrap().loader)(&ctx).unwrap();
    let upcoming = loaded.data["upcoming"].as_array().unwrap();
    let past = loaded.data["past"].as_array().unwrap();
    assert_eq!(upcoming.len(), 3);
    assert_eq!(past.len(), 5);
    assert_eq!(past[0]["opponent"], "Team Liquid");
    assert_eq!(past[4]["score"], "14-16");
    assert_eq!(loaded.title.as_deref(), Some("Matches"));
  }

  #[test]
  fn detail_of_upcoming_match() {
    let fixture = Fixture::new();
    let params = id_param("1");
    let ctx = fixture.ctx(LocaleCode::Ro, &params, DetailMissPolicy::NotFound);
    let loaded = (detail().unwrap().loader)(&ctx).unwrap();
    let data = &loaded.data;
    assert_eq!(data["match"]["status"], "upcoming");
    assert_eq!(data["match"]["venue"], "Online");
    assert!(data["match"]["description"].as_str().unwrap().starts_with("Un meci important"));
    assert_eq!(data["match"]["maps"], json!(["Inferno", "Mirage", "Nuke"]));
    assert_eq!(data["lineup"][0]["role"], "Lider în Joc");
    assert_eq!(data["opponent_lineup"][3]["role"], "Suport");
    assert_eq!(data["previous"][1]["date"], "10 Decembrie, 2024");
    assert_eq!(data["previous"][1]["won"], false);
  }

  #[test]
  fn detail_of_completed_match_has_scores() {
    let fixture = Fixture::new();
    let params = id_param("6");
    let ctx = fixture.ctx(LocaleCode::En, &params, DetailMissPolicy::NotFound);
    let loaded = (detail().unwrap().loader)(&ctx).unwrap();
    assert_eq!(loaded.data["match"]["status"], "completed");
    assert_eq!(loaded.data["match"]["scores"][1]["kd"], "25-12");
    assert_eq!(loaded.title.as_deref(), Some("FEARLESS vs Vitality"));
  }

  #[test]
  fn detail_miss_follows_policy() {
    let fixture = Fixture::new();
    let params = id_param("abc");
    let strict = fixture.ctx(LocaleCode::En, &params, DetailMissPolicy::NotFound);
    let Err(err) = (detail().unwrap().loader)(&strict) else {
      panic!("expected not found");
    };
    assert!(err.is_not_found());

    let lenient = fixture.ctx(LocaleCode::En, &params, DetailMissPolicy::FirstItem);
    let loaded = (detail().unwrap().loader)(&lenient).unwrap();
    assert_eq!(loaded.data["match"]["opponent"], "Fnatic");
  }
}
