use serde::{Deserialize, Serialize};

/// A statistic a user can ask about.
///
/// Variant order is the order projections are produced and reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StatCategory {
    Points,
    Rebounds,
    Assists,
    Steals,
    Blocks,
    ThreePointers,
    Turnovers,
    FantasyScore,
}

impl StatCategory {
    pub const ALL: [StatCategory; 8] = [
        StatCategory::Points,
        StatCategory::Rebounds,
        StatCategory::Assists,
        StatCategory::Steals,
        StatCategory::Blocks,
        StatCategory::ThreePointers,
        StatCategory::Turnovers,
        StatCategory::FantasyScore,
    ];

    /// Box-score categories backed directly by upstream signals.
    pub const COUNTING: [StatCategory; 7] = [
        StatCategory::Points,
        StatCategory::Rebounds,
        StatCategory::Assists,
        StatCategory::Steals,
        StatCategory::Blocks,
        StatCategory::ThreePointers,
        StatCategory::Turnovers,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatCategory::Points => "points",
            StatCategory::Rebounds => "rebounds",
            StatCategory::Assists => "assists",
            StatCategory::Steals => "steals",
            StatCategory::Blocks => "blocks",
            StatCategory::ThreePointers => "three-pointers",
            StatCategory::Turnovers => "turnovers",
            StatCategory::FantasyScore => "fantasy-score",
        }
    }

    /// Shown when the user did not name any category. Three-pointers are
    /// only reported on request.
    pub fn is_standard(&self) -> bool {
        !matches!(self, StatCategory::ThreePointers)
    }
}

impl std::fmt::Display for StatCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Upstream signals for one statistic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatSignals {
    pub season_average: f64,
    #[serde(default)]
    pub last5_average: Option<f64>,
    #[serde(default)]
    pub last10_average: Option<f64>,
    /// Historical average against the opponent being projected.
    #[serde(default)]
    pub vs_opponent_average: Option<f64>,
}

impl StatSignals {
    pub fn season(season_average: f64) -> Self {
        Self {
            season_average,
            ..Self::default()
        }
    }

    /// Last-5 average, or the season average when absent.
    pub fn last5_or_season(&self) -> f64 {
        self.last5_average.unwrap_or(self.season_average)
    }

    /// Last-10 average, or the season average when absent.
    pub fn last10_or_season(&self) -> f64 {
        self.last10_average.unwrap_or(self.season_average)
    }
}

/// Per-player, per-opponent bundle consumed by the projection engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSignals {
    pub points: StatSignals,
    pub rebounds: StatSignals,
    pub assists: StatSignals,
    #[serde(default)]
    pub steals: StatSignals,
    #[serde(default)]
    pub blocks: StatSignals,
    #[serde(default)]
    pub three_pointers: StatSignals,
    #[serde(default)]
    pub turnovers: StatSignals,
    /// Games played this season.
    #[serde(default)]
    pub games_played: u32,
    /// Prior meetings with the opponent behind `vs_opponent_average`.
    #[serde(default)]
    pub vs_opponent_games: u32,
    /// Points the opponent allows per game.
    #[serde(default)]
    pub opponent_points_allowed: Option<f64>,
}

impl PlayerSignals {
    /// Signals for a counting stat; `None` for the derived fantasy score.
    pub fn stat(&self, category: StatCategory) -> Option<&StatSignals> {
        match category {
            StatCategory::Points => Some(&self.points),
            StatCategory::Rebounds => Some(&self.rebounds),
            StatCategory::Assists => Some(&self.assists),
            StatCategory::Steals => Some(&self.steals),
            StatCategory::Blocks => Some(&self.blocks),
            StatCategory::ThreePointers => Some(&self.three_pointers),
            StatCategory::Turnovers => Some(&self.turnovers),
            StatCategory::FantasyScore => None,
        }
    }
}

/// Season-to-date per-game averages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonAverages {
    pub points: f64,
    pub rebounds: f64,
    pub assists: f64,
    #[serde(default)]
    pub steals: f64,
    #[serde(default)]
    pub blocks: f64,
    #[serde(default)]
    pub three_pointers: f64,
    #[serde(default)]
    pub turnovers: f64,
}

/// Single-game lows and highs this season
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatRange {
    pub min_points: f64,
    pub max_points: f64,
    pub min_rebounds: f64,
    pub max_rebounds: f64,
    #[serde(default)]
    pub min_assists: f64,
    #[serde(default)]
    pub max_assists: f64,
}

/// Season overview for a player, used when there is no opponent to project against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonSummary {
    pub season: String,
    pub games_played: u32,
    pub averages: SeasonAverages,
    pub range: StatRange,
}
