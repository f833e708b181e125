//! Offline fixture store
//!
//! Serves players, signals and schedules from a JSON file so the CLI and the
//! integration tests run without the stats service.
//!
//! ```json
//! {
//!   "players": ["LeBron James", "Stephen Curry"],
//!   "signals": [
//!     { "player": "LeBron James", "opponent": "Celtics", "signals": { ... } },
//!     { "player": "LeBron James", "signals": { ... } }
//!   ],
//!   "schedule": [
//!     { "player": "LeBron James", "date": "2026-01-15T00:30:00Z",
//!       "opponent": "Boston Celtics", "location": "Away" }
//!   ],
//!   "seasons": [
//!     { "player": "LeBron James", "season": "2025-2026", "gamesPlayed": 40,
//!       "averages": { ... }, "range": { ... } }
//!   ]
//! }
//! ```
//!
//! A signals entry without an opponent applies to every opponent that has no
//! entry of its own.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

use crate::domain::{
    PlayerDirectory, PlayerSignals, ScheduleProvider, ScheduledGame, SeasonSummary, StatsProvider,
    TeamRef,
};
use crate::error::{CourtsideError, Result};
use crate::query::canonical_team;

#[derive(Debug, Deserialize)]
struct FixtureFile {
    #[serde(default)]
    players: Vec<String>,
    #[serde(default)]
    signals: Vec<SignalsEntry>,
    #[serde(default)]
    schedule: Vec<ScheduleEntry>,
    #[serde(default)]
    seasons: Vec<SeasonEntry>,
}

#[derive(Debug, Deserialize)]
struct SignalsEntry {
    player: String,
    opponent: Option<String>,
    signals: PlayerSignals,
}

#[derive(Debug, Deserialize)]
struct ScheduleEntry {
    player: String,
    date: DateTime<Utc>,
    opponent: String,
    #[serde(default)]
    location: String,
}

#[derive(Debug, Deserialize)]
struct SeasonEntry {
    player: String,
    #[serde(flatten)]
    summary: SeasonSummary,
}

type SignalsKey = (String, Option<TeamRef>);

#[derive(Debug, Default)]
pub struct FixtureStore {
    players: Vec<String>,
    signals: HashMap<SignalsKey, PlayerSignals>,
    /// Sorted by date per player.
    schedule: HashMap<String, Vec<ScheduledGame>>,
    seasons: HashMap<String, SeasonSummary>,
}

fn key(player: &str) -> String {
    player.trim().to_lowercase()
}

/// Rank for a substring hit: prefix matches, then "First Last" names, then
/// everything else.
fn match_rank(name_lower: &str, fragment: &str) -> u8 {
    if name_lower.starts_with(fragment) {
        0
    } else if name_lower.matches(' ').count() == 1 {
        1
    } else {
        2
    }
}

impl FixtureStore {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let store = Self::from_json(&raw)?;
        info!(
            "Loaded fixtures from {}: {} players, {} signal sets",
            path.display(),
            store.players.len(),
            store.signals.len()
        );
        Ok(store)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let file: FixtureFile = serde_json::from_str(raw)?;
        let mut store = FixtureStore {
            players: file.players,
            ..Self::default()
        };

        for entry in file.signals {
            if entry.player.trim().is_empty() {
                return Err(CourtsideError::InvalidInput(
                    "signals entry without a player name".to_string(),
                ));
            }
            let opponent = match entry.opponent.as_deref() {
                Some(name) => Some(
                    canonical_team(name)
                        .ok_or_else(|| CourtsideError::TeamNotFound(name.to_string()))?,
                ),
                None => None,
            };
            if !store.players.iter().any(|p| key(p) == key(&entry.player)) {
                store.players.push(entry.player.clone());
            }
            store
                .signals
                .insert((key(&entry.player), opponent), entry.signals);
        }

        for entry in file.schedule {
            store
                .schedule
                .entry(key(&entry.player))
                .or_default()
                .push(ScheduledGame {
                    date: entry.date,
                    opponent: entry.opponent,
                    location: entry.location,
                });
        }
        for games in store.schedule.values_mut() {
            games.sort_by_key(|g| g.date);
        }

        for entry in file.seasons {
            store.seasons.insert(key(&entry.player), entry.summary);
        }

        Ok(store)
    }

    pub fn players(&self) -> &[String] {
        &self.players
    }

    /// Best ranked player whose name contains `fragment` (case-insensitive).
    pub fn search(&self, fragment: &str) -> Option<&str> {
        let fragment = fragment.trim().to_lowercase();
        if fragment.is_empty() {
            return None;
        }

        self.players
            .iter()
            .filter_map(|name| {
                let lower = name.to_lowercase();
                lower
                    .contains(&fragment)
                    .then(|| (match_rank(&lower, &fragment), name.len(), name.as_str()))
            })
            .min()
            .map(|(_, _, name)| name)
    }

    /// Next game on or after `now`.
    pub fn next_game_after(&self, player: &str, now: DateTime<Utc>) -> Option<&ScheduledGame> {
        self.schedule
            .get(&key(player))?
            .iter()
            .find(|g| g.date >= now)
    }
}

#[async_trait]
impl PlayerDirectory for FixtureStore {
    async fn find_player(&self, fragment: &str) -> Result<Option<String>> {
        Ok(self.search(fragment).map(str::to_string))
    }
}

#[async_trait]
impl StatsProvider for FixtureStore {
    async fn player_signals(
        &self,
        player: &str,
        opponent: TeamRef,
    ) -> Result<Option<PlayerSignals>> {
        let player = key(player);
        let signals = self
            .signals
            .get(&(player.clone(), Some(opponent)))
            .or_else(|| self.signals.get(&(player, None)));
        Ok(signals.cloned())
    }

    async fn season_summary(&self, player: &str) -> Result<Option<SeasonSummary>> {
        Ok(self.seasons.get(&key(player)).cloned())
    }
}

#[async_trait]
impl ScheduleProvider for FixtureStore {
    async fn next_game(&self, player: &str) -> Result<Option<ScheduledGame>> {
        Ok(self.next_game_after(player, Utc::now()).cloned())
    }
}
