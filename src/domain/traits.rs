//! Collaborator capabilities the core consumes.
//!
//! Stats ingestion and storage live outside this crate; these traits are the
//! only way the query and projection code reaches them. Implementations:
//! `adapters::StatsApiClient` (HTTP) and `adapters::FixtureStore` (offline).

use async_trait::async_trait;

use crate::error::Result;

use super::entities::{ScheduledGame, TeamRef};
use super::stats::{PlayerSignals, SeasonSummary};

/// Player lookup by name fragment.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlayerDirectory: Send + Sync {
    /// Best canonical match for `fragment`, or `None`.
    ///
    /// Matching is substring based and ranked: names starting with the
    /// fragment first, then two-part names, then everything else.
    async fn find_player(&self, fragment: &str) -> Result<Option<String>>;
}

/// Aggregated player stats, per opponent or for the whole season.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatsProvider: Send + Sync {
    /// `None` when the player has no stats this season.
    async fn player_signals(
        &self,
        player: &str,
        opponent: TeamRef,
    ) -> Result<Option<PlayerSignals>>;

    /// Season averages and ranges, or `None` when the player has no games
    /// this season.
    async fn season_summary(&self, player: &str) -> Result<Option<SeasonSummary>>;
}

/// Upcoming schedule lookup.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ScheduleProvider: Send + Sync {
    /// Next game of the player's current team, or `None`.
    async fn next_game(&self, player: &str) -> Result<Option<ScheduledGame>>;
}
