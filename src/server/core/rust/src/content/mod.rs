/* src/server/core/rust/src/content/mod.rs */

//! The organization's content: matches, roster, staff and news.
//!
//! Every locale-dependent field is a [`Localized`] pair resolved at render
//! time, so content text always follows the same locale as the page chrome.

mod matches;
mod news;
mod people;

use serde_json::{Value, json};

pub use matches::{LineupEntry, Match, MatchStatus, Meeting, PlayerScore, Score};
pub use news::{NewsArticle, NewsCategory};
pub use people::{Player, Role, StaffMember};

use crate::catalog::Catalog;
use crate::errors::SiteError;
use crate::locale::LocaleCode;

pub const PLACEHOLDER_IMAGE: &str = "/static/placeholder.svg";

/// Text available in every supported locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Localized {
  pub en: &'static str,
  pub ro: &'static str,
}

impl Localized {
  pub const fn new(en: &'static str, ro: &'static str) -> Self {
    Self { en, ro }
  }

  /// Text that reads the same in every locale (names, map titles).
  pub const fn same(text: &'static str) -> Self {
    Self { en: text, ro: text }
  }

  pub fn get(&self, locale: LocaleCode) -> &'static str {
    match locale {
      LocaleCode::En => self.en,
      LocaleCode::Ro => self.ro,
    }
  }
}

const MONTHS_EN: [&str; 12] = [
  "January",
  "February",
  "March",
  "April",
  "May",
  "June",
  "July",
  "August",
  "September",
  "October",
  "November",
  "December",
];

const MONTHS_RO: [&str; 12] = [
  "Ianuarie",
  "Februarie",
  "Martie",
  "Aprilie",
  "Mai",
  "Iunie",
  "Iulie",
  "August",
  "Septembrie",
  "Octombrie",
  "Noiembrie",
  "Decembrie",
];

/// Calendar date. Field order gives chronological `Ord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Date {
  pub year: u16,
  pub month: u8,
  pub day: u8,
}

impl Date {
  pub const fn new(year: u16, month: u8, day: u8) -> Self {
    Self { year, month, day }
  }

  fn month_name(&self, locale: LocaleCode) -> &'static str {
    let index = usize::from(self.month.clamp(1, 12) - 1);
    match locale {
      LocaleCode::En => MONTHS_EN[index],
      LocaleCode::Ro => MONTHS_RO[index],
    }
  }

  /// `May 10, 2025` / `10 Mai, 2025`
  pub fn format(&self, locale: LocaleCode) -> String {
    let month = self.month_name(locale);
    match locale {
      LocaleCode::En => format!("{month} {}, {}", self.day, self.year),
      LocaleCode::Ro => format!("{} {month}, {}", self.day, self.year),
    }
  }

  /// `January 2022` / `Ianuarie 2022`
  pub fn format_month_year(&self, locale: LocaleCode) -> String {
    format!("{} {}", self.month_name(locale), self.year)
  }

  /// `2025-05-10`, for `<time datetime>`.
  pub fn iso(&self) -> String {
    format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
  }
}

/// Social profiles. Absent entries are not rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SocialLinks {
  pub twitter: Option<&'static str>,
  pub instagram: Option<&'static str>,
  pub twitch: Option<&'static str>,
  pub linkedin: Option<&'static str>,
  /// Discord tag, shown as text.
  pub discord: Option<&'static str>,
}

impl SocialLinks {
  pub fn to_json(&self) -> Value {
    let links: Vec<Value> = [
      ("Twitter", self.twitter),
      ("Instagram", self.instagram),
      ("Twitch", self.twitch),
      ("LinkedIn", self.linkedin),
    ]
    .into_iter()
    .filter_map(|(label, href)| href.map(|href| json!({ "label": label, "href": href })))
    .collect();
    json!({ "links": links, "discord": self.discord })
  }
}

/// Everything the site displays.
pub struct Content {
  pub matches: Catalog<Match>,
  pub players: Catalog<Player>,
  pub staff: Catalog<StaffMember>,
  pub news: Catalog<NewsArticle>,
}

impl Content {
  pub fn new(
    matches: Vec<Match>,
    players: Vec<Player>,
    staff: Vec<StaffMember>,
    news: Vec<NewsArticle>,
  ) -> Result<Self, SiteError> {
    Ok(Self {
      matches: Catalog::new("matches", matches)?,
      players: Catalog::new("players", players)?,
      staff: Catalog::new("staff", staff)?,
      news: Catalog::new("news", news)?,
    })
  }

  /// The Fearless Gaming dataset.
  pub fn fearless() -> Result<Self, SiteError> {
    Self::new(matches::all(), people::players(), people::staff(), news::all())
  }

  /// Matches not yet completed, in source order.
  pub fn upcoming_matches(&self) -> impl Iterator<Item = &Match> {
    self.matches.items().iter().filter(|m| m.status != MatchStatus::Completed)
  }

  /// Completed matches, in source order.
  pub fn past_matches(&self) -> impl Iterator<Item = &Match> {
    self.matches.items().iter().filter(|m| m.status == MatchStatus::Completed)
  }

  /// Completed matches the player has a score line in, newest first.
  pub fn recent_matches_for<'a>(&'a self, nickname: &str, limit: usize) -> Vec<&'a Match> {
    let mut played: Vec<&Match> =
      self.past_matches().filter(|m| m.score_for(nickname).is_some()).collect();
    played.sort_by(|a, b| b.date.cmp(&a.date));
    played.truncate(limit);
    played
  }
}
