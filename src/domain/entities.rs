use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Canonical player name confirmed by the player directory.
///
/// Only the player resolver constructs these, so a `PlayerRef` never holds
/// unvalidated user text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PlayerRef(String);

impl PlayerRef {
    pub(crate) fn confirmed(canonical_name: impl Into<String>) -> Self {
        Self(canonical_name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlayerRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One of the 30 canonical franchise names from the alias table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TeamRef(&'static str);

impl TeamRef {
    pub(crate) const fn canonical(name: &'static str) -> Self {
        Self(name)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for TeamRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

/// Home or away, from the player's team perspective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Venue {
    Home,
    Away,
}

impl Venue {
    /// Anything other than "home" counts as away.
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("home") {
            Venue::Home
        } else {
            Venue::Away
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Venue::Home => "Home",
            Venue::Away => "Away",
        }
    }
}

impl std::fmt::Display for Venue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Upcoming game as reported by the schedule collaborator (raw opponent text).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledGame {
    pub date: DateTime<Utc>,
    pub opponent: String,
    #[serde(default)]
    pub location: String,
}

/// Upcoming game with the opponent canonicalised.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NextGame {
    pub date: DateTime<Utc>,
    pub opponent: TeamRef,
    pub venue: Venue,
}

/// Where the opponent used for a projection came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum OpponentSource {
    /// Named in the query text.
    Query,
    /// The player's next scheduled game.
    Schedule,
    /// Configured fallback.
    Default,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_venue_parse() {
        assert_eq!(Venue::parse("Home"), Venue::Home);
        assert_eq!(Venue::parse(" home "), Venue::Home);
        assert_eq!(Venue::parse("Away"), Venue::Away);
        assert_eq!(Venue::parse("@"), Venue::Away);
        assert_eq!(Venue::parse(""), Venue::Away);
    }

    #[test]
    fn test_refs_serialize_as_plain_strings() {
        let player = PlayerRef::confirmed("Nikola Jokic");
        let team = TeamRef::canonical("Nuggets");
        assert_eq!(serde_json::to_string(&player).unwrap(), "\"Nikola Jokic\"");
        assert_eq!(serde_json::to_string(&team).unwrap(), "\"Nuggets\"");
        assert_eq!(player.to_string(), "Nikola Jokic");
    }
}
