use serde::Serialize;

use super::entities::{NextGame, OpponentSource, PlayerRef, TeamRef};
use super::stats::{PlayerSignals, SeasonSummary, StatCategory, StatSignals};

/// Lowest confidence a projection can carry.
pub const MIN_CONFIDENCE: u8 = 20;
/// Highest confidence a projection can carry.
pub const MAX_CONFIDENCE: u8 = 85;

/// Point estimate for one statistic
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Projection {
    pub stat: StatCategory,
    /// Rounded to one decimal place.
    pub value: f64,
    /// Heuristic score in [MIN_CONFIDENCE, MAX_CONFIDENCE]; not a probability.
    pub confidence: u8,
}

/// Everything projected for one player against one opponent.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerProjection {
    pub player: PlayerRef,
    pub opponent: TeamRef,
    pub opponent_source: OpponentSource,
    pub next_game: Option<NextGame>,
    /// One entry per category, in `StatCategory::ALL` order.
    pub projections: Vec<Projection>,
    /// Signals the projections were computed from.
    pub signals: PlayerSignals,
}

impl PlayerProjection {
    pub fn get(&self, stat: StatCategory) -> Option<&Projection> {
        self.projections.iter().find(|p| p.stat == stat)
    }

    pub fn value(&self, stat: StatCategory) -> f64 {
        self.get(stat).map(|p| p.value).unwrap_or(0.0)
    }

    pub fn fantasy_score(&self) -> f64 {
        self.value(StatCategory::FantasyScore)
    }
}

/// Recent scoring form relative to the season average
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FormTrend {
    Hot,
    Cold,
    Steady,
}

impl FormTrend {
    /// Margin (points) the last-5 average must clear to count as hot or cold.
    pub const MARGIN: f64 = 2.0;

    pub fn from_points(points: &StatSignals) -> Self {
        let Some(last5) = points.last5_average else {
            return FormTrend::Steady;
        };
        if last5 > points.season_average + Self::MARGIN {
            FormTrend::Hot
        } else if last5 < points.season_average - Self::MARGIN {
            FormTrend::Cold
        } else {
            FormTrend::Steady
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FormTrend::Hot => "HOT",
            FormTrend::Cold => "COLD",
            FormTrend::Steady => "STEADY",
        }
    }
}

impl std::fmt::Display for FormTrend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How decisive a start/sit recommendation is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ConfidenceLabel {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for ConfidenceLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ConfidenceLabel::Low => "Low",
            ConfidenceLabel::Medium => "Medium",
            ConfidenceLabel::High => "High",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparedPlayer {
    #[serde(flatten)]
    pub projection: PlayerProjection,
    pub form: FormTrend,
}

/// Head-to-head result for two projected players.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub first: ComparedPlayer,
    pub second: ComparedPlayer,
    pub recommendation: String,
    pub confidence: ConfidenceLabel,
    /// Ordered by priority.
    pub reasons: Vec<String>,
}

/// Single-subject answer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionReport {
    #[serde(flatten)]
    pub projection: PlayerProjection,
    /// Categories the user asked about (or the standard set).
    pub shown: Vec<StatCategory>,
    pub insights: Vec<String>,
}

/// Season overview returned when no opponent could be determined.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonReport {
    pub player: PlayerRef,
    #[serde(flatten)]
    pub summary: SeasonSummary,
    pub note: String,
}
