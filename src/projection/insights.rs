//! Single-player insights
//!
//! Short analysis lines attached to a single-subject projection.

use crate::domain::{PlayerProjection, StatCategory};

pub const STANDARD_PROJECTION: &str = "Standard projection";

const STREAK_MARGIN: f64 = 3.0;
const WEAK_DEFENSE_ALLOWED: f64 = 115.0;
const STRONG_DEFENSE_ALLOWED: f64 = 105.0;
const LOW_CONFIDENCE: u8 = 50;

/// Matchup-history margins and the unit used in the message.
const MATCHUP_CALLOUTS: [(StatCategory, f64, &str); 3] = [
    (StatCategory::Points, 3.0, "pts"),
    (StatCategory::Rebounds, 2.0, "rebs"),
    (StatCategory::Assists, 1.5, "ast"),
];

/// Insights for `projection`; matchup callouts only for categories in `shown`.
pub fn insights(projection: &PlayerProjection, shown: &[StatCategory]) -> Vec<String> {
    let mut out = Vec::new();
    let signals = &projection.signals;
    let opponent = projection.opponent;

    if let Some(last5) = signals.points.last5_average {
        let season = signals.points.season_average;
        if last5 < season - STREAK_MARGIN {
            out.push(format!(
                "Cold Streak: Recent performance ({:.1} pts) below season average ({:.1} pts)",
                last5, season
            ));
        } else if last5 > season + STREAK_MARGIN {
            out.push(format!(
                "Hot Streak: Recent performance ({:.1} pts) above season average ({:.1} pts)",
                last5, season
            ));
        }
    }

    for (stat, margin, unit) in MATCHUP_CALLOUTS {
        if !shown.contains(&stat) {
            continue;
        }
        let Some(stat_signals) = signals.stat(stat) else {
            continue;
        };
        let Some(vs) = stat_signals.vs_opponent_average else {
            continue;
        };
        let diff = vs - stat_signals.season_average;
        if diff > margin {
            out.push(format!(
                "Strong Matchup: Averages {:.1} {} vs {}",
                vs, unit, opponent
            ));
        } else if diff < -margin {
            out.push(format!(
                "Tough Matchup: Averages {:.1} {} vs {}",
                vs, unit, opponent
            ));
        }
    }

    if let Some(allowed) = signals.opponent_points_allowed {
        if allowed > WEAK_DEFENSE_ALLOWED {
            out.push(format!(
                "Weak Defense: {} allows {:.1} pts/game",
                opponent, allowed
            ));
        } else if allowed < STRONG_DEFENSE_ALLOWED {
            out.push(format!(
                "Strong Defense: {} allows only {:.1} pts/game",
                opponent, allowed
            ));
        }
    }

    if projection
        .get(StatCategory::Points)
        .is_some_and(|p| p.confidence < LOW_CONFIDENCE)
    {
        out.push("Lower Confidence: Recent inconsistency or limited matchup data".to_string());
    }

    if out.is_empty() {
        out.push(STANDARD_PROJECTION.to_string());
    }
    out
}
