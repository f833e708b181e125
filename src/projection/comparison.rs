//! Comparison Synthesizer
//!
//! Turns two player projections into a start/sit call. Fantasy score decides
//! the recommendation; reasons are appended in fixed priority order.

use tracing::info;

use super::engine::round1;
use crate::domain::{
    ComparedPlayer, ComparisonResult, ConfidenceLabel, FormTrend, PlayerProjection, StatCategory,
};

/// Fantasy gap below which neither player is recommended.
pub const TOO_CLOSE_MARGIN: f64 = 2.0;
/// Fantasy gap above which a recommendation is high confidence.
pub const DECISIVE_MARGIN: f64 = 5.0;
/// Points gap worth calling out.
pub const POINTS_GAP_REASON: f64 = 5.0;
/// Vs-opponent points above season average that count as a favourable matchup.
pub const MATCHUP_EDGE: f64 = 3.0;

pub const TOO_CLOSE: &str = "Too close to call!";

pub fn compare(first: PlayerProjection, second: PlayerProjection) -> ComparisonResult {
    let first = ComparedPlayer {
        form: FormTrend::from_points(&first.signals.points),
        projection: first,
    };
    let second = ComparedPlayer {
        form: FormTrend::from_points(&second.signals.points),
        projection: second,
    };

    let fantasy_a = first.projection.fantasy_score();
    let fantasy_b = second.projection.fantasy_score();
    let diff = round1((fantasy_a - fantasy_b).abs());

    // "Too close" and "start" need diff < 2 and diff >= 2 respectively, so
    // they are exclusive branches.
    let (recommendation, confidence) = if diff < TOO_CLOSE_MARGIN {
        (TOO_CLOSE.to_string(), ConfidenceLabel::Low)
    } else {
        let leader = if fantasy_a > fantasy_b { &first } else { &second };
        let label = if diff > DECISIVE_MARGIN {
            ConfidenceLabel::High
        } else {
            ConfidenceLabel::Medium
        };
        (format!("Start {}", leader.projection.player), label)
    };

    let reasons = reasons(&first, &second);
    info!(
        "Compared {} ({:.1}) vs {} ({:.1}): {} [{}]",
        first.projection.player,
        fantasy_a,
        second.projection.player,
        fantasy_b,
        recommendation,
        confidence
    );

    ComparisonResult {
        first,
        second,
        recommendation,
        confidence,
        reasons,
    }
}

fn reasons(first: &ComparedPlayer, second: &ComparedPlayer) -> Vec<String> {
    let mut reasons = Vec::new();
    let players = [first, second];

    let points_a = first.projection.value(StatCategory::Points);
    let points_b = second.projection.value(StatCategory::Points);
    let points_gap = round1((points_a - points_b).abs());
    if points_gap > POINTS_GAP_REASON {
        let leader = if points_a > points_b { first } else { second };
        reasons.push(format!(
            "{} projected for +{:.1} more points",
            leader.projection.player, points_gap
        ));
    }

    for p in players.iter().filter(|p| p.form == FormTrend::Hot) {
        reasons.push(format!("{} is hot (last 5 games)", p.projection.player));
    }
    for p in players.iter().filter(|p| p.form == FormTrend::Cold) {
        reasons.push(format!("{} has been cold", p.projection.player));
    }

    for p in players {
        let points = &p.projection.signals.points;
        if let Some(vs) = points.vs_opponent_average {
            if vs > points.season_average + MATCHUP_EDGE {
                reasons.push(format!(
                    "{} performs well vs {}",
                    p.projection.player, p.projection.opponent
                ));
            }
        }
    }

    reasons
}
