/* src/server/core/rust/src/content/matches.rs */

use std::fmt;

use super::{Date, Localized, Role};
use crate::catalog::ContentItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStatus {
  Upcoming,
  Live,
  Completed,
}

impl MatchStatus {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Upcoming => "upcoming",
      Self::Live => "live",
      Self::Completed => "completed",
    }
  }
}

/// Rounds won by Fearless and by the opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
  pub ours: u8,
  pub theirs: u8,
}

impl Score {
  pub const fn new(ours: u8, theirs: u8) -> Self {
    Self { ours, theirs }
  }

  pub fn won(&self) -> bool {
    self.ours > self.theirs
  }
}

impl fmt::Display for Score {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}-{}", self.ours, self.theirs)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerScore {
  pub player: &'static str,
  pub kills: u16,
  pub deaths: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineupEntry {
  pub nickname: &'static str,
  pub role: Role,
}

/// An earlier encounter with the same opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Meeting {
  pub tournament: &'static str,
  pub date: Date,
  pub score: Score,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
  pub id: i64,
  pub opponent: &'static str,
  pub tournament: &'static str,
  pub date: Date,
  pub time: &'static str,
  pub venue: &'static str,
  pub status: MatchStatus,
  /// Map pool for upcoming matches; the single map played for completed ones.
  pub maps: Vec<&'static str>,
  pub score: Option<Score>,
  pub description: Localized,
  pub opponent_lineup: Vec<LineupEntry>,
  pub player_scores: Vec<PlayerScore>,
  pub previous_meetings: Vec<Meeting>,
}

impl Match {
  pub fn score_for(&self, nickname: &str) -> Option<&PlayerScore> {
    self.player_scores.iter().find(|score| score.player == nickname)
  }

  /// The map a completed match was played on.
  pub fn map_played(&self) -> Option<&'static str> {
    match self.status {
      MatchStatus::Completed => self.maps.first().copied(),
      _ => None,
    }
  }
}

impl ContentItem for Match {
  fn id(&self) -> i64 {
    self.id
  }
}

const ROSTER: [&str; 5] = ["WolfKing", "ShadowBite", "Blaze", "Phantom", "Viper"];

fn opponent_lineup() -> Vec<LineupEntry> {
  [
    ("Player1", Role::InGameLeader),
    ("Player2", Role::Awper),
    ("Player3", Role::Rifler),
    ("Player4", Role::Support),
    ("Player5", Role::EntryFragger),
  ]
  .into_iter()
  .map(|(nickname, role)| LineupEntry { nickname, role })
  .collect()
}

struct Fixture {
  id: i64,
  opponent: &'static str,
  tournament: &'static str,
  date: Date,
  time: &'static str,
  venue: &'static str,
  description: Localized,
}

fn upcoming(fixture: Fixture, maps: &[&'static str], previous_meetings: Vec<Meeting>) -> Match {
  Match {
    id: fixture.id,
    opponent: fixture.opponent,
    tournament: fixture.tournament,
    date: fixture.date,
    time: fixture.time,
    venue: fixture.venue,
    status: MatchStatus::Upcoming,
    maps: maps.to_vec(),
    score: None,
    description: fixture.description,
    opponent_lineup: opponent_lineup(),
    player_scores: Vec::new(),
    previous_meetings,
  }
}

/// `kills_deaths` follows `ROSTER` order.
fn completed(fixture: Fixture, map: &'static str, score: Score, kills_deaths: [(u16, u16); 5]) -> Match {
  let player_scores = ROSTER
    .iter()
    .zip(kills_deaths)
    .map(|(&player, (kills, deaths))| PlayerScore { player, kills, deaths })
    .collect();
  Match {
    id: fixture.id,
    opponent: fixture.opponent,
    tournament: fixture.tournament,
    date: fixture.date,
    time: fixture.time,
    venue: fixture.venue,
    status: MatchStatus::Completed,
    maps: vec![map],
    score: Some(score),
    description: fixture.description,
    opponent_lineup: opponent_lineup(),
    player_scores,
    previous_meetings: Vec::new(),
  }
}

pub(super) fn all() -> Vec<Match> {
  vec![
    upcoming(
      Fixture {
        id: 1,
        opponent: "Fnatic",
        tournament: "ESL Pro League",
        date: Date::new(2025, 5, 10),
        time: "18:00",
        venue: "Online",
        description: Localized::new(
          "An important match in the ESL Pro League, where our team will face Fnatic in a confrontation that could decide qualification for the playoffs.",
          "Un meci important în cadrul ESL Pro League, unde echipa noastră va întâlni Fnatic într-o confruntare ce poate decide calificarea în playoff.",
        ),
      },
      &["Inferno", "Mirage", "Nuke"],
      vec![
        Meeting { tournament: "IEM Katowice", date: Date::new(2025, 3, 15), score: Score::new(16, 14) },
        Meeting { tournament: "BLAST Premier", date: Date::new(2024, 12, 10), score: Score::new(13, 16) },
        Meeting { tournament: "ESL Pro League", date: Date::new(2024, 9, 5), score: Score::new(16, 10) },
      ],
    ),
    upcoming(
      Fixture {
        id: 2,
        opponent: "Natus Vincere",
        tournament: "BLAST Premier",
        date: Date::new(2025, 5, 15),
        time: "20:00",
        venue: "Online",
        description: Localized::new(
          "A BLAST Premier group stage clash against Natus Vincere, one of the most decorated rosters in Counter-Strike.",
          "O confruntare din faza grupelor BLAST Premier împotriva Natus Vincere, una dintre cele mai titrate echipe din Counter-Strike.",
        ),
      },
      &["Ancient", "Anubis", "Mirage"],
      vec![Meeting {
        tournament: "BLAST Premier",
        date: Date::new(2024, 11, 20),
        score: Score::new(11, 16),
      }],
    ),
    upcoming(
      Fixture {
        id: 3,
        opponent: "G2 Esports",
        tournament: "IEM Cologne",
        date: Date::new(2025, 5, 22),
        time: "19:00",
        venue: "LANXESS Arena, Köln",
        description: Localized::new(
          "Fearless opens its IEM Cologne campaign against G2 Esports in front of a packed arena.",
          "Fearless își începe parcursul la IEM Cologne împotriva G2 Esports, în fața unei arene pline.",
        ),
      },
      &["Nuke", "Vertigo", "Inferno"],
      vec![
        Meeting { tournament: "IEM Katowice", date: Date::new(2025, 2, 8), score: Score::new(16, 13) },
        Meeting { tournament: "ESL Pro League", date: Date::new(2024, 10, 2), score: Score::new(9, 16) },
      ],
    ),
    completed(
      Fixture {
        id: 4,
        opponent: "Team Liquid",
        tournament: "ESL Pro League",
        date: Date::new(2025, 5, 1),
        time: "18:00",
        venue: "Online",
        description: Localized::new(
          "A close win over Team Liquid on Inferno, sealed in the final rounds.",
          "O victorie strânsă în fața Team Liquid pe Inferno, decisă în rundele finale.",
        ),
      },
      "Inferno",
      Score::new(16, 14),
      [(24, 18), (21, 15), (19, 17), (16, 19), (22, 16)],
    ),
    completed(
      Fixture {
        id: 5,
        opponent: "FaZe Clan",
        tournament: "BLAST Premier",
        date: Date::new(2025, 4, 28),
        time: "20:00",
        venue: "Online",
        description: Localized::new(
          "A narrow loss to FaZe Clan on Mirage after a strong first half.",
          "O înfrângere la limită în fața FaZe Clan pe Mirage, după o primă repriză puternică.",
        ),
      },
      "Mirage",
      Score::new(13, 16),
      [(19, 21), (17, 20), (15, 18), (14, 22), (18, 19)],
    ),
    completed(
      Fixture {
        id: 6,
        opponent: "Vitality",
        tournament: "IEM Cologne",
        date: Date::new(2025, 4, 25),
        time: "17:00",
        venue: "LANXESS Arena, Köln",
        description: Localized::new(
          "A convincing win over Vitality on Nuke, led by ShadowBite's 25 kills.",
          "O victorie convingătoare în fața Vitality pe Nuke, cu ShadowBite la 25 de eliminări.",
        ),
      },
      "Nuke",
      Score::new(16, 10),
      [(22, 15), (25, 12), (18, 14), (16, 13), (20, 16)],
    ),
    completed(
      Fixture {
        id: 7,
        opponent: "Cloud9",
        tournament: "ESL Pro League",
        date: Date::new(2025, 4, 20),
        time: "19:00",
        venue: "Online",
        description: Localized::new(
          "A controlled win over Cloud9 on Ancient.",
          "O victorie controlată în fața Cloud9 pe Ancient.",
        ),
      },
      "Ancient",
      Score::new(16, 12),
      [(20, 16), (23, 14), (17, 15), (15, 17), (19, 14)],
    ),
    completed(
      Fixture {
        id: 8,
        opponent: "Astralis",
        tournament: "BLAST Premier",
        date: Date::new(2025, 4, 15),
        time: "18:30",
        venue: "Online",
        description: Localized::new(
          "Astralis edged out Fearless 16-14 on Vertigo.",
          "Astralis a trecut de Fearless cu 16-14 pe Vertigo.",
        ),
      },
      "Vertigo",
      Score::new(14, 16),
      [(18, 19), (16, 20), (19, 18), (15, 21), (17, 17)],
    ),
  ]
}
