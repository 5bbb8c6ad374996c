/* src/server/core/rust/src/content/people.rs */

use super::{Date, Localized, SocialLinks};
use crate::catalog::ContentItem;
use crate::locale::LocaleCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
  InGameLeader,
  Awper,
  Rifler,
  Support,
  EntryFragger,
}

impl Role {
  pub fn label(self, locale: LocaleCode) -> &'static str {
    let text = match self {
      Self::InGameLeader => Localized::new("In-Game Leader", "Lider în Joc"),
      Self::Awper => Localized::same("AWPer"),
      Self::Rifler => Localized::same("Rifler"),
      Self::Support => Localized::new("Support", "Suport"),
      Self::EntryFragger => Localized::same("Entry Fragger"),
    };
    text.get(locale)
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
  pub id: i64,
  pub nickname: &'static str,
  pub name: &'static str,
  pub role: Role,
  pub country: Localized,
  pub age: u8,
  /// Only month and year are displayed.
  pub joined: Date,
  pub bio: Localized,
  pub socials: SocialLinks,
}

impl ContentItem for Player {
  fn id(&self) -> i64 {
    self.id
  }
}

/// Non-playing member of the organization. Listed, never linked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaffMember {
  pub id: i64,
  pub name: &'static str,
  pub role: Localized,
  pub description: Localized,
  pub socials: SocialLinks,
}

impl ContentItem for StaffMember {
  fn id(&self) -> i64 {
    self.id
  }
}

const ROMANIA: Localized = Localized::new("Romania", "România");

macro_rules! player_socials {
  ($handle:literal) => {
    SocialLinks {
      twitter: Some(concat!("https://twitter.com/", $handle)),
      instagram: Some(concat!("https://instagram.com/", $handle)),
      twitch: Some(concat!("https://twitch.tv/", $handle)),
      linkedin: None,
      discord: None,
    }
  };
}

pub(super) fn players() -> Vec<Player> {
  vec![
    Player {
      id: 1,
      nickname: "WolfKing",
      name: "Alexandru Popescu",
      role: Role::InGameLeader,
      country: ROMANIA,
      age: 24,
      joined: Date::new(2022, 1, 1),
      bio: Localized::new(
        "Alexandru is one of the most experienced CS2 players in Romania. With a career spanning over 7 years in esports, he became the leader of Fearless Gaming in 2022. Known for his innovative strategies and ability to stay calm under pressure, WolfKing has led the team to numerous victories in national and international competitions.",
        "Alexandru este unul dintre cei mai experimentați jucători de CS2 din România. Cu o carieră de peste 7 ani în esports, el a devenit liderul echipei Fearless Gaming în 2022. Cunoscut pentru strategiile sale inovatoare și capacitatea de a rămâne calm în momentele de presiune, WolfKing a condus echipa la numeroase victorii în competițiile naționale și internaționale.",
      ),
      socials: SocialLinks { discord: Some("WolfKing#1234"), ..player_socials!("wolfking") },
    },
    Player {
      id: 2,
      nickname: "ShadowBite",
      name: "Mihai Ionescu",
      role: Role::Awper,
      country: ROMANIA,
      age: 22,
      joined: Date::new(2022, 3, 1),
      bio: Localized::new(
        "Mihai is the team's primary AWPer. His precise opening picks and calm in clutch situations have made him one of the most feared snipers on the Romanian scene.",
        "Mihai este principalul AWPer al echipei. Eliminările sale precise de deschidere și calmul în situațiile de clutch l-au transformat într-unul dintre cei mai temuți lunetiști de pe scena din România.",
      ),
      socials: player_socials!("shadowbite"),
    },
    Player {
      id: 3,
      nickname: "Blaze",
      name: "Andrei Dumitrescu",
      role: Role::Rifler,
      country: ROMANIA,
      age: 23,
      joined: Date::new(2022, 6, 1),
      bio: Localized::new(
        "Andrei is a versatile rifler who adapts to any position. His consistency round after round gives the team a reliable anchor on every map.",
        "Andrei este un rifler versatil care se adaptează oricărei poziții. Constanța sa de la o rundă la alta oferă echipei un punct de sprijin sigur pe fiecare hartă.",
      ),
      socials: player_socials!("blaze"),
    },
    Player {
      id: 4,
      nickname: "Phantom",
      name: "Cristian Stancu",
      role: Role::Support,
      country: ROMANIA,
      age: 25,
      joined: Date::new(2023, 4, 1),
      bio: Localized::new(
        "Cristian is the team's support player, known for selfless utility usage and clutch performances in decisive rounds.",
        "Cristian este jucătorul de suport al echipei, cunoscut pentru folosirea dezinteresată a grenadelor și performanțele din rundele decisive.",
      ),
      socials: player_socials!("phantom"),
    },
    Player {
      id: 5,
      nickname: "Viper",
      name: "Radu Munteanu",
      role: Role::EntryFragger,
      country: ROMANIA,
      age: 21,
      joined: Date::new(2024, 1, 1),
      bio: Localized::new(
        "Radu is the youngest member of the roster and the first player through the door. His aggressive entries open up space for the rest of the team.",
        "Radu este cel mai tânăr membru al echipei și primul care intră pe site. Intrările sale agresive creează spațiu pentru restul echipei.",
      ),
      socials: player_socials!("viper"),
    },
  ]
}

pub(super) fn staff() -> Vec<StaffMember> {
  vec![
    StaffMember {
      id: 1,
      name: "Elena Popescu",
      role: Localized::same("Manager"),
      description: Localized::new(
        "Responsible for team management and competition organization.",
        "Responsabilă cu managementul echipei și organizarea competițiilor.",
      ),
      socials: SocialLinks {
        twitter: Some("https://twitter.com/elena"),
        linkedin: Some("https://linkedin.com/in/elena"),
        ..SocialLinks::default()
      },
    },
    StaffMember {
      id: 2,
      name: "Marius Ionescu",
      role: Localized::new("Coach", "Antrenor"),
      description: Localized::new(
        "Head coach with over 5 years of experience in CS2.",
        "Antrenor principal cu experiență de peste 5 ani în CS2.",
      ),
      socials: SocialLinks {
        twitter: Some("https://twitter.com/marius"),
        instagram: Some("https://instagram.com/marius"),
        ..SocialLinks::default()
      },
    },
    StaffMember {
      id: 3,
      name: "Andrei Popa",
      role: Localized::new("Analyst", "Analist"),
      description: Localized::new(
        "Analyzes opponent tactics and develops strategies for the team.",
        "Analizează tacticile adversarilor și dezvoltă strategii pentru echipă.",
      ),
      socials: SocialLinks {
        twitter: Some("https://twitter.com/andrei"),
        linkedin: Some("https://linkedin.com/in/andrei"),
        ..SocialLinks::default()
      },
    },
  ]
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn role_labels_follow_locale() {
    assert_eq!(Role::InGameLeader.label(LocaleCode::En), "In-Game Leader");
    assert_eq!(Role::InGameLeader.label(LocaleCode::Ro), "Lider în Joc");
    assert_eq!(Role::Support.label(LocaleCode::Ro), "Suport");
    assert_eq!(Role::Awper.label(LocaleCode::Ro), "AWPer");
  }

  #[test]
  fn player_socials_use_handle() {
    let players = players();
    assert_eq!(players[2].socials.twitch, Some("https://twitch.tv/blaze"));
    assert_eq!(players[0].socials.discord, Some("WolfKing#1234"));
    assert_eq!(players[1].socials.discord, None);
  }

  #[test]
  fn staff_roles_are_localized() {
    let staff = staff();
    assert_eq!(staff[1].role.get(LocaleCode::Ro), "Antrenor");
    assert_eq!(staff[0].socials.instagram, None);
  }
}
