use serde::Serialize;
use std::collections::BTreeSet;

use super::entities::{PlayerRef, TeamRef};
use super::stats::StatCategory;

/// Structured reading of a free-form question.
///
/// Fields are private so the comparison invariant holds: a secondary subject
/// only exists on comparison queries.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryInterpretation {
    is_comparison: bool,
    requested_stats: BTreeSet<StatCategory>,
    primary_subject: Option<PlayerRef>,
    secondary_subject: Option<PlayerRef>,
    opponent_team: Option<TeamRef>,
    summary: String,
}

impl QueryInterpretation {
    pub fn single(
        requested_stats: BTreeSet<StatCategory>,
        player: Option<PlayerRef>,
        opponent_team: Option<TeamRef>,
    ) -> Self {
        let mut interpretation = Self {
            is_comparison: false,
            requested_stats,
            primary_subject: player,
            secondary_subject: None,
            opponent_team,
            summary: String::new(),
        };
        interpretation.summary = interpretation.describe();
        interpretation
    }

    pub fn comparison(
        requested_stats: BTreeSet<StatCategory>,
        first: Option<PlayerRef>,
        second: Option<PlayerRef>,
        opponent_team: Option<TeamRef>,
    ) -> Self {
        let mut interpretation = Self {
            is_comparison: true,
            requested_stats,
            primary_subject: first,
            secondary_subject: second,
            opponent_team,
            summary: String::new(),
        };
        interpretation.summary = interpretation.describe();
        interpretation
    }

    pub fn is_comparison(&self) -> bool {
        self.is_comparison
    }

    pub fn requested_stats(&self) -> &BTreeSet<StatCategory> {
        &self.requested_stats
    }

    pub fn primary_subject(&self) -> Option<&PlayerRef> {
        self.primary_subject.as_ref()
    }

    pub fn secondary_subject(&self) -> Option<&PlayerRef> {
        self.secondary_subject.as_ref()
    }

    pub fn opponent_team(&self) -> Option<TeamRef> {
        self.opponent_team
    }

    /// Both players of a comparison, when both were found.
    pub fn comparison_pair(&self) -> Option<(&PlayerRef, &PlayerRef)> {
        if !self.is_comparison {
            return None;
        }
        Some((self.primary_subject.as_ref()?, self.secondary_subject.as_ref()?))
    }

    /// True when `stat` should be shown. No explicit request means all
    /// standard categories.
    pub fn wants(&self, stat: StatCategory) -> bool {
        if self.requested_stats.is_empty() {
            stat.is_standard()
        } else {
            self.requested_stats.contains(&stat)
        }
    }

    /// Categories to report, in `StatCategory::ALL` order.
    pub fn shown_stats(&self) -> Vec<StatCategory> {
        StatCategory::ALL
            .into_iter()
            .filter(|stat| self.wants(*stat))
            .collect()
    }

    /// Diagnostic description of what was understood. Observability only.
    pub fn summary(&self) -> &str {
        &self.summary
    }

    fn describe(&self) -> String {
        let stats = self
            .requested_stats
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        match (self.is_comparison, &self.primary_subject, &self.secondary_subject) {
            (true, Some(a), Some(b)) => format!("Comparing {} vs {}", a, b),
            (true, _, _) => "Comparison requested but couldn't find both players".to_string(),
            (false, Some(player), _) => {
                let mut msg = format!("User wants stats for player: {}", player);
                if let Some(team) = self.opponent_team {
                    msg.push_str(&format!(" vs {}", team));
                }
                if !stats.is_empty() {
                    msg.push_str(&format!(" - Stats: {}", stats));
                }
                msg
            }
            (false, None, _) if !stats.is_empty() => format!("User wants stats: {}", stats),
            (false, None, _) => "No specific stats requested".to_string(),
        }
    }
}
