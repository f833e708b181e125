//! Confidence scoring
//!
//! Hand-tuned additive score, clamped to [MIN_CONFIDENCE, MAX_CONFIDENCE].
//! Not a calibrated probability. Points use scoring-sized thresholds; every
//! other counting stat uses the small-stat scale.

use crate::domain::{StatCategory, StatSignals, MAX_CONFIDENCE, MIN_CONFIDENCE};

const BASE_SCORE: i32 = 30;

/// Thresholds that depend on the typical magnitude of a stat.
#[derive(Debug, Clone, Copy)]
struct Scale {
    /// |L5 - S| below each bound earns the paired bonus (first hit wins).
    consistency: [(f64, i32); 4],
    /// Secondary recency bonus bounds.
    recency: [(f64, i32); 2],
    /// |estimate - S| above each bound costs the paired penalty.
    deviation: [(f64, i32); 2],
}

const SCORING_SCALE: Scale = Scale {
    consistency: [(2.0, 20), (4.0, 12), (6.0, 6), (10.0, 2)],
    recency: [(3.0, 10), (5.0, 5)],
    deviation: [(10.0, -10), (5.0, -5)],
};

const SMALL_SCALE: Scale = Scale {
    consistency: [(1.0, 20), (2.0, 12), (3.0, 6), (5.0, 2)],
    recency: [(1.5, 10), (2.5, 5)],
    deviation: [(5.0, -10), (2.5, -5)],
};

const SEASON_SAMPLE: [(u32, i32); 5] = [(30, 20), (20, 14), (15, 8), (10, 4), (5, 2)];
const MATCHUP_SAMPLE: [(u32, i32); 3] = [(5, 15), (3, 9), (1, 4)];

fn scale_for(stat: StatCategory) -> &'static Scale {
    match stat {
        StatCategory::Points => &SCORING_SCALE,
        _ => &SMALL_SCALE,
    }
}

fn below(value: f64, bands: &[(f64, i32)]) -> i32 {
    bands
        .iter()
        .find(|(bound, _)| value < *bound)
        .map(|(_, bonus)| *bonus)
        .unwrap_or(0)
}

fn at_least(value: u32, bands: &[(u32, i32)]) -> i32 {
    bands
        .iter()
        .find(|(min, _)| value >= *min)
        .map(|(_, bonus)| *bonus)
        .unwrap_or(0)
}

/// Inputs to one confidence score.
#[derive(Debug, Clone, Copy)]
pub struct ConfidenceInputs<'a> {
    pub stat: StatCategory,
    pub signals: &'a StatSignals,
    pub games_played: u32,
    /// Prior meetings with the opponent.
    pub matchup_games: u32,
    /// Final (adjusted, rounded) estimate.
    pub estimate: f64,
}

pub fn score(inputs: ConfidenceInputs<'_>) -> u8 {
    let scale = scale_for(inputs.stat);
    let s = inputs.signals.season_average;
    let l5 = inputs.signals.last5_or_season();

    let mut total = BASE_SCORE;
    total += below((l5 - s).abs(), &scale.consistency);
    total += at_least(inputs.games_played, &SEASON_SAMPLE);
    total += at_least(inputs.matchup_games, &MATCHUP_SAMPLE);

    // Zero averages earn no recency bonus.
    if l5 != 0.0 && s != 0.0 {
        total += below((l5 - s).abs(), &scale.recency);
    }

    let deviation = (inputs.estimate - s).abs();
    if let Some((_, penalty)) = scale.deviation.iter().find(|(bound, _)| deviation > *bound) {
        total += penalty;
    }

    clamp(total)
}

/// Mean of component confidences, rounded and clamped.
pub fn mean(confidences: &[u8]) -> u8 {
    if confidences.is_empty() {
        return MIN_CONFIDENCE;
    }
    let sum: f64 = confidences.iter().map(|&c| f64::from(c)).sum();
    clamp((sum / confidences.len() as f64).round() as i32)
}

fn clamp(total: i32) -> u8 {
    total.clamp(i32::from(MIN_CONFIDENCE), i32::from(MAX_CONFIDENCE)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steady(season: f64) -> StatSignals {
        StatSignals {
            last5_average: Some(season),
            last10_average: Some(season),
            ..StatSignals::season(season)
        }
    }

    #[test]
    fn test_steady_veteran_scorer() {
        let signals = steady(25.0);
        let c = score(ConfidenceInputs {
            stat: StatCategory::Points,
            signals: &signals,
            games_played: 40,
            matchup_games: 0,
            estimate: 25.0,
        });
        // 30 + 20 consistency + 20 sample + 10 recency
        assert_eq!(c, 80);
    }

    #[test]
    fn test_matchup_sample_counts_prior_meetings() {
        let signals = steady(20.0);
        let inputs = ConfidenceInputs {
            stat: StatCategory::Points,
            signals: &signals,
            games_played: 0,
            matchup_games: 3,
            estimate: 20.0,
        };
        // 30 + 20 consistency + 9 matchup sample + 10 recency, no vs average needed
        assert_eq!(score(inputs), 69);
        assert_eq!(score(ConfidenceInputs { matchup_games: 5, ..inputs }), 75);
        assert_eq!(score(ConfidenceInputs { matchup_games: 1, ..inputs }), 64);
        assert_eq!(score(ConfidenceInputs { matchup_games: 0, ..inputs }), 60);
    }

    #[test]
    fn test_small_scale_thresholds() {
        let signals = StatSignals {
            last5_average: Some(9.2),
            ..StatSignals::season(8.0)
        };
        // |L5 - S| = 1.2: +12 consistency, +10 recency on the small scale.
        let c = score(ConfidenceInputs {
            stat: StatCategory::Assists,
            signals: &signals,
            games_played: 0,
            matchup_games: 0,
            estimate: 8.6,
        });
        assert_eq!(c, 30 + 12 + 10);

        // Same gap on points: +20 consistency, +10 recency.
        let c = score(ConfidenceInputs {
            stat: StatCategory::Points,
            signals: &signals,
            games_played: 0,
            matchup_games: 0,
            estimate: 8.6,
        });
        assert_eq!(c, 30 + 20 + 10);
    }

    #[test]
    fn test_deviation_penalty() {
        let signals = steady(20.0);
        let base = ConfidenceInputs {
            stat: StatCategory::Points,
            signals: &signals,
            games_played: 30,
            matchup_games: 0,
            estimate: 20.0,
        };
        let c0 = score(base);
        let c5 = score(ConfidenceInputs { estimate: 26.0, ..base });
        let c10 = score(ConfidenceInputs { estimate: 31.0, ..base });
        assert_eq!(c0 - c5, 5);
        assert_eq!(c0 - c10, 10);
    }

    #[test]
    fn test_missing_recent_form_counts_as_season() {
        let signals = StatSignals::season(25.0);
        let c = score(ConfidenceInputs {
            stat: StatCategory::Points,
            signals: &signals,
            games_played: 30,
            matchup_games: 0,
            estimate: 25.0,
        });
        // L5 defaults to S: full consistency and recency bonuses.
        assert_eq!(c, 80);
    }

    #[test]
    fn test_zero_averages_skip_recency_bonus() {
        let signals = StatSignals::season(0.0);
        let c = score(ConfidenceInputs {
            stat: StatCategory::Blocks,
            signals: &signals,
            games_played: 30,
            matchup_games: 0,
            estimate: 0.0,
        });
        // 30 + 20 consistency + 20 sample
        assert_eq!(c, 70);
    }

    #[test]
    fn test_clamped_low_and_high() {
        let volatile = StatSignals {
            last5_average: Some(2.0),
            ..StatSignals::season(30.0)
        };
        let low = score(ConfidenceInputs {
            stat: StatCategory::Points,
            signals: &volatile,
            games_played: 0,
            matchup_games: 0,
            estimate: 5.0,
        });
        assert_eq!(low, MIN_CONFIDENCE);

        let mut perfect = steady(25.0);
        perfect.vs_opponent_average = Some(25.0);
        let high = score(ConfidenceInputs {
            stat: StatCategory::Points,
            signals: &perfect,
            games_played: 82,
            matchup_games: 10,
            estimate: 25.0,
        });
        assert_eq!(high, MAX_CONFIDENCE);
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[80, 70, 60, 50, 40, 30]), 55);
        assert_eq!(mean(&[85, 85, 85, 85, 85, 84]), 85);
        assert_eq!(mean(&[]), MIN_CONFIDENCE);
    }
}
