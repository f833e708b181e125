//! Projection Engine
//!
//! Blends season, recent-form and matchup signals into a per-stat point
//! estimate, then scores each estimate's confidence.

use std::sync::Arc;
use tracing::{debug, info};

use super::confidence::{self, ConfidenceInputs};
use crate::domain::{
    NextGame, OpponentSource, PlayerProjection, PlayerRef, PlayerSignals, Projection,
    StatCategory, StatSignals, StatsProvider, TeamRef,
};
use crate::error::{CourtsideError, Result};

/// League-average points allowed; the pace anchor.
pub const LEAGUE_AVERAGE_ALLOWED: f64 = 110.0;

/// Prior meetings needed before matchup history is trusted.
pub const MIN_MATCHUP_GAMES: u32 = 2;

/// Fantasy weights: pts + 1.2 reb + 1.5 ast + 3 stl + 3 blk - tov.
const FANTASY_WEIGHTS: [(StatCategory, f64); 6] = [
    (StatCategory::Points, 1.0),
    (StatCategory::Rebounds, 1.2),
    (StatCategory::Assists, 1.5),
    (StatCategory::Steals, 3.0),
    (StatCategory::Blocks, 3.0),
    (StatCategory::Turnovers, -1.0),
];

pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Which blend produced a base estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Blend {
    /// 0.5 V + 0.3 L5 + 0.2 S
    Matchup,
    /// 0.3 S + 0.3 L10 + 0.4 L5
    Recency,
}

pub fn blend_for(signals: &StatSignals, matchup_games: u32) -> Blend {
    if signals.vs_opponent_average.is_some() && matchup_games >= MIN_MATCHUP_GAMES {
        Blend::Matchup
    } else {
        Blend::Recency
    }
}

/// Unadjusted, unrounded estimate.
pub fn base_estimate(signals: &StatSignals, matchup_games: u32) -> f64 {
    let s = signals.season_average;
    let l5 = signals.last5_or_season();
    match (blend_for(signals, matchup_games), signals.vs_opponent_average) {
        (Blend::Matchup, Some(v)) => 0.5 * v + 0.3 * l5 + 0.2 * s,
        _ => 0.3 * s + 0.3 * signals.last10_or_season() + 0.4 * l5,
    }
}

/// Multiplier from the opponent's points allowed. Only points, rebounds and
/// assists are pace-sensitive.
pub fn pace_factor(stat: StatCategory, allowed: f64) -> f64 {
    let (weak_defence, strong_defence) = match stat {
        StatCategory::Points => (1.05, 0.95),
        StatCategory::Rebounds => (0.95, 1.05),
        StatCategory::Assists => (1.02, 0.98),
        _ => return 1.0,
    };
    if allowed > LEAGUE_AVERAGE_ALLOWED {
        weak_defence
    } else if allowed < LEAGUE_AVERAGE_ALLOWED {
        strong_defence
    } else {
        1.0
    }
}

/// Project every category from `signals`, in `StatCategory::ALL` order.
pub fn project_signals(signals: &PlayerSignals) -> Vec<Projection> {
    let allowed = signals
        .opponent_points_allowed
        .unwrap_or(LEAGUE_AVERAGE_ALLOWED);

    let mut projections: Vec<Projection> = StatCategory::COUNTING
        .iter()
        .filter_map(|&stat| {
            let stat_signals = signals.stat(stat)?;
            let value = round1(
                base_estimate(stat_signals, signals.vs_opponent_games)
                    * pace_factor(stat, allowed),
            );
            let confidence = confidence::score(ConfidenceInputs {
                stat,
                signals: stat_signals,
                games_played: signals.games_played,
                matchup_games: signals.vs_opponent_games,
                estimate: value,
            });
            Some(Projection {
                stat,
                value,
                confidence,
            })
        })
        .collect();

    let fantasy = fantasy_projection(&projections);
    projections.push(fantasy);
    projections
}

/// Fantasy score from already-projected components.
fn fantasy_projection(projections: &[Projection]) -> Projection {
    let component = |stat: StatCategory| projections.iter().find(|p| p.stat == stat);

    let value = FANTASY_WEIGHTS
        .iter()
        .map(|&(stat, weight)| component(stat).map(|p| p.value).unwrap_or(0.0) * weight)
        .sum::<f64>();
    let confidences: Vec<u8> = FANTASY_WEIGHTS
        .iter()
        .filter_map(|&(stat, _)| component(stat).map(|p| p.confidence))
        .collect();

    Projection {
        stat: StatCategory::FantasyScore,
        value: round1(value),
        confidence: confidence::mean(&confidences),
    }
}

#[derive(Clone)]
pub struct ProjectionEngine {
    stats: Arc<dyn StatsProvider>,
}

impl ProjectionEngine {
    pub fn new(stats: Arc<dyn StatsProvider>) -> Self {
        Self { stats }
    }

    /// Fetch signals for `player` against `opponent` and project them.
    pub async fn project(
        &self,
        player: &PlayerRef,
        opponent: TeamRef,
        opponent_source: OpponentSource,
        next_game: Option<NextGame>,
    ) -> Result<PlayerProjection> {
        debug!("Fetching signals for {} vs {}", player, opponent);
        let signals = self
            .stats
            .player_signals(player.as_str(), opponent)
            .await?
            .ok_or_else(|| {
                CourtsideError::StatsUnavailable(format!("{} vs {}", player, opponent))
            })?;

        let projections = project_signals(&signals);
        if let Some(points) = projections.first() {
            info!(
                "Projected {} vs {}: {:.1} pts ({}% confidence)",
                player, opponent, points.value, points.confidence
            );
        }

        Ok(PlayerProjection {
            player: player.clone(),
            opponent,
            opponent_source,
            next_game,
            projections,
            signals,
        })
    }
}
