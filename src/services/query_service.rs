//! Query Service
//!
//! The one operation the crate exposes to callers: raw question in, a
//! projection report, a comparison, a season summary, or a not-found reason
//! out. A player with no opponent to project against falls back to their
//! season summary. Resolution misses and upstream failures end up as
//! `QueryOutcome::NotFound`; nothing here returns an error.

use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::{
    ComparisonResult, NextGame, OpponentSource, PlayerDirectory, PlayerRef, ProjectionReport,
    QueryInterpretation, ScheduleProvider, SeasonReport, StatsProvider, TeamRef, Venue,
};
use crate::error::CourtsideError;
use crate::projection::{compare, insights, ProjectionEngine};
use crate::query::{canonical_team, PlayerResolver, QueryInterpreter};

pub const NO_PLAYER: &str = "Couldn't find a player name in your query.";

/// Answer to one query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum QueryOutcome {
    Projection(ProjectionReport),
    Comparison(ComparisonResult),
    SeasonStats(SeasonReport),
    NotFound { reason: String },
}

impl QueryOutcome {
    fn not_found(reason: impl Into<String>) -> Self {
        QueryOutcome::NotFound {
            reason: reason.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, QueryOutcome::NotFound { .. })
    }
}

/// Opponent picked for one player, with where it came from.
#[derive(Debug, Clone, PartialEq)]
struct ResolvedOpponent {
    team: TeamRef,
    source: OpponentSource,
    next_game: Option<NextGame>,
}

#[derive(Clone)]
pub struct QueryService {
    interpreter: QueryInterpreter,
    resolver: PlayerResolver,
    engine: ProjectionEngine,
    stats: Arc<dyn StatsProvider>,
    schedule: Arc<dyn ScheduleProvider>,
    default_opponent: Option<TeamRef>,
}

impl QueryService {
    pub fn new(
        directory: Arc<dyn PlayerDirectory>,
        stats: Arc<dyn StatsProvider>,
        schedule: Arc<dyn ScheduleProvider>,
        default_opponent: Option<TeamRef>,
    ) -> Self {
        Self {
            interpreter: QueryInterpreter::new(directory.clone()),
            resolver: PlayerResolver::new(directory),
            engine: ProjectionEngine::new(stats.clone()),
            stats,
            schedule,
            default_opponent,
        }
    }

    /// Build over a single backend that provides all three capabilities.
    pub fn with_backend<B>(backend: Arc<B>, default_opponent: Option<TeamRef>) -> Self
    where
        B: PlayerDirectory + StatsProvider + ScheduleProvider + 'static,
    {
        Self::new(backend.clone(), backend.clone(), backend, default_opponent)
    }

    pub async fn interpret(&self, raw: &str) -> QueryInterpretation {
        self.interpreter.interpret(raw).await
    }

    pub async fn handle_query(&self, raw: &str) -> QueryOutcome {
        let interpretation = self.interpret(raw).await;
        self.answer(&interpretation).await
    }

    /// Project a named player directly (no free-text interpretation).
    pub async fn project_player(&self, player: &str, opponent: Option<&str>) -> QueryOutcome {
        let Some(player) = self.resolver.resolve(player).await else {
            return QueryOutcome::not_found(format!("Couldn't find a player named '{}'", player));
        };
        let opponent = match opponent {
            Some(name) => match canonical_team(name) {
                Some(team) => Some(team),
                None => return QueryOutcome::not_found(format!("Unknown team '{}'", name)),
            },
            None => None,
        };
        let interpretation = QueryInterpretation::single(Default::default(), Some(player), opponent);
        self.answer(&interpretation).await
    }

    /// Compare two named players directly.
    pub async fn compare_players(
        &self,
        first: &str,
        second: &str,
        opponent: Option<&str>,
    ) -> QueryOutcome {
        let (a, b) = tokio::join!(self.resolver.resolve(first), self.resolver.resolve(second));
        let opponent = match opponent {
            Some(name) => match canonical_team(name) {
                Some(team) => Some(team),
                None => return QueryOutcome::not_found(format!("Unknown team '{}'", name)),
            },
            None => None,
        };
        let interpretation = QueryInterpretation::comparison(Default::default(), a, b, opponent);
        self.answer(&interpretation).await
    }

    /// Route an interpretation to the single or comparison flow.
    pub async fn answer(&self, interpretation: &QueryInterpretation) -> QueryOutcome {
        if let Some((first, second)) = interpretation.comparison_pair() {
            return self
                .comparison(first, second, interpretation.opponent_team())
                .await;
        }

        let subject = interpretation
            .primary_subject()
            .or(interpretation.secondary_subject());
        match subject {
            Some(player) => {
                if interpretation.is_comparison() {
                    info!("Only one player found, projecting {} alone", player);
                }
                self.single(player, interpretation).await
            }
            None => QueryOutcome::not_found(NO_PLAYER),
        }
    }

    async fn single(&self, player: &PlayerRef, interpretation: &QueryInterpretation) -> QueryOutcome {
        let Some(opponent) = self
            .resolve_opponent(player, interpretation.opponent_team())
            .await
        else {
            return self.season_stats(player).await;
        };

        let projection = match self
            .engine
            .project(player, opponent.team, opponent.source, opponent.next_game)
            .await
        {
            Ok(projection) => projection,
            Err(e) => return stats_failure(player, opponent.team, e),
        };

        let shown = interpretation.shown_stats();
        let insights = insights(&projection, &shown);
        QueryOutcome::Projection(ProjectionReport {
            projection,
            shown,
            insights,
        })
    }

    /// Season averages and ranges for a player with nothing to project against.
    async fn season_stats(&self, player: &PlayerRef) -> QueryOutcome {
        let note = format!("No upcoming games found for {}", player);
        match self.stats.season_summary(player.as_str()).await {
            Ok(Some(summary)) => {
                info!("No opponent for {}, showing season stats", player);
                QueryOutcome::SeasonStats(SeasonReport {
                    player: player.clone(),
                    summary,
                    note,
                })
            }
            Ok(None) => QueryOutcome::not_found(note),
            Err(e) => {
                warn!("Season stats lookup for {} failed: {}", player, e);
                QueryOutcome::not_found(note)
            }
        }
    }

    /// An opponent named in the query applies to both players and wins over
    /// each player's own next game. Either side without an opponent makes the
    /// whole comparison not found.
    async fn comparison(
        &self,
        first: &PlayerRef,
        second: &PlayerRef,
        explicit: Option<TeamRef>,
    ) -> QueryOutcome {
        let (opp_a, opp_b) = tokio::join!(
            self.resolve_opponent(first, explicit),
            self.resolve_opponent(second, explicit)
        );
        let Some(opp_a) = opp_a else {
            return QueryOutcome::not_found(format!("No upcoming games found for {}", first));
        };
        let Some(opp_b) = opp_b else {
            return QueryOutcome::not_found(format!("No upcoming games found for {}", second));
        };
        let (team_a, team_b) = (opp_a.team, opp_b.team);

        let (proj_a, proj_b) = tokio::join!(
            self.engine
                .project(first, opp_a.team, opp_a.source, opp_a.next_game),
            self.engine
                .project(second, opp_b.team, opp_b.source, opp_b.next_game)
        );
        let proj_a = match proj_a {
            Ok(p) => p,
            Err(e) => return stats_failure(first, team_a, e),
        };
        let proj_b = match proj_b {
            Ok(p) => p,
            Err(e) => return stats_failure(second, team_b, e),
        };

        QueryOutcome::Comparison(compare(proj_a, proj_b))
    }

    /// Explicit opponent, else the next scheduled game, else the configured
    /// default.
    async fn resolve_opponent(
        &self,
        player: &PlayerRef,
        explicit: Option<TeamRef>,
    ) -> Option<ResolvedOpponent> {
        if let Some(team) = explicit {
            return Some(ResolvedOpponent {
                team,
                source: OpponentSource::Query,
                next_game: None,
            });
        }

        match self.schedule.next_game(player.as_str()).await {
            Ok(Some(game)) => match canonical_team(&game.opponent) {
                Some(team) => {
                    info!(
                        "Next game for {}: {} on {} ({})",
                        player,
                        team,
                        game.date.format("%Y-%m-%d"),
                        game.location
                    );
                    return Some(ResolvedOpponent {
                        team,
                        source: OpponentSource::Schedule,
                        next_game: Some(NextGame {
                            date: game.date,
                            opponent: team,
                            venue: Venue::parse(&game.location),
                        }),
                    });
                }
                None => warn!(
                    "Next game opponent '{}' for {} is not a known team",
                    game.opponent, player
                ),
            },
            Ok(None) => info!("No upcoming game for {}", player),
            Err(e) => warn!("Next game lookup for {} failed: {}", player, e),
        }

        self.default_opponent.map(|team| ResolvedOpponent {
            team,
            source: OpponentSource::Default,
            next_game: None,
        })
    }
}

fn stats_failure(player: &PlayerRef, opponent: TeamRef, e: CourtsideError) -> QueryOutcome {
    if e.is_not_found() {
        info!("No stats for {} vs {}", player, opponent);
        QueryOutcome::not_found(format!("No stats available for {} vs {}", player, opponent))
    } else {
        warn!("Stats lookup for {} vs {} failed: {}", player, opponent, e);
        QueryOutcome::not_found(format!("Couldn't load stats for {}: {}", player, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        ConfidenceLabel, MockPlayerDirectory, MockScheduleProvider, MockStatsProvider,
        PlayerSignals, ScheduledGame, SeasonAverages, SeasonSummary, StatCategory, StatRange,
        StatSignals,
    };
    use chrono::{TimeZone, Utc};

    const ROSTER: &[&str] = &["LeBron James", "Stephen Curry", "Nikola Jokic"];

    fn directory() -> MockPlayerDirectory {
        let mut directory = MockPlayerDirectory::new();
        directory.expect_find_player().returning(|fragment| {
            Ok(ROSTER
                .iter()
                .find(|n| n.to_lowercase().contains(fragment))
                .map(|n| n.to_string()))
        });
        directory
    }

    fn flat(season: f64) -> StatSignals {
        StatSignals {
            last5_average: Some(season),
            last10_average: Some(season),
            ..StatSignals::season(season)
        }
    }

    fn signals_for(player: &str) -> PlayerSignals {
        let (pts, reb, ast) = match player {
            "LeBron James" => (25.0, 7.0, 8.0),
            "Stephen Curry" => (27.0, 4.0, 5.0),
            _ => (26.0, 12.0, 9.0),
        };
        PlayerSignals {
            points: flat(pts),
            rebounds: flat(reb),
            assists: flat(ast),
            games_played: 40,
            ..PlayerSignals::default()
        }
    }

    fn stats() -> MockStatsProvider {
        let mut stats = MockStatsProvider::new();
        stats
            .expect_player_signals()
            .returning(|player, _| Ok(Some(signals_for(player))));
        stats.expect_season_summary().returning(|_| Ok(None));
        stats
    }

    fn schedule_with(opponent: &'static str) -> MockScheduleProvider {
        let mut schedule = MockScheduleProvider::new();
        schedule.expect_next_game().returning(move |_| {
            Ok(Some(ScheduledGame {
                date: Utc.with_ymd_and_hms(2026, 11, 2, 0, 30, 0).unwrap(),
                opponent: opponent.to_string(),
                location: "Home".to_string(),
            }))
        });
        schedule
    }

    fn service(schedule: MockScheduleProvider, default: Option<TeamRef>) -> QueryService {
        QueryService::new(
            Arc::new(directory()),
            Arc::new(stats()),
            Arc::new(schedule),
            default,
        )
    }

    #[tokio::test]
    async fn test_explicit_opponent_skips_schedule() {
        let mut schedule = MockScheduleProvider::new();
        schedule.expect_next_game().times(0);
        let outcome = service(schedule, None)
            .handle_query("How many points will LeBron score against the Celtics?")
            .await;

        let QueryOutcome::Projection(report) = outcome else {
            panic!("expected projection, got {:?}", outcome);
        };
        assert_eq!(report.projection.opponent.as_str(), "Celtics");
        assert_eq!(report.projection.opponent_source, OpponentSource::Query);
        assert_eq!(report.shown, vec![StatCategory::Points]);
    }

    #[tokio::test]
    async fn test_next_game_fills_missing_opponent() {
        let outcome = service(schedule_with("Los Angeles Lakers"), None)
            .handle_query("how many rebounds will Jokic get")
            .await;

        let QueryOutcome::Projection(report) = outcome else {
            panic!("expected projection, got {:?}", outcome);
        };
        assert_eq!(report.projection.player.as_str(), "Nikola Jokic");
        assert_eq!(report.projection.opponent.as_str(), "Lakers");
        assert_eq!(report.projection.opponent_source, OpponentSource::Schedule);
        let next = report.projection.next_game.unwrap();
        assert_eq!(next.venue, Venue::Home);
        assert_eq!(report.shown, vec![StatCategory::Rebounds]);
    }

    #[tokio::test]
    async fn test_default_opponent_when_schedule_fails() {
        let mut schedule = MockScheduleProvider::new();
        schedule.expect_next_game().returning(|_| {
            Err(CourtsideError::Upstream {
                endpoint: "next-game".into(),
                status: 502,
            })
        });
        let outcome = service(schedule, canonical_team("knicks"))
            .handle_query("tell me about Curry")
            .await;

        let QueryOutcome::Projection(report) = outcome else {
            panic!("expected projection, got {:?}", outcome);
        };
        assert_eq!(report.projection.opponent.as_str(), "Knicks");
        assert_eq!(report.projection.opponent_source, OpponentSource::Default);
        assert!(!report.shown.contains(&StatCategory::ThreePointers));
    }

    #[tokio::test]
    async fn test_no_opponent_anywhere() {
        let mut schedule = MockScheduleProvider::new();
        schedule.expect_next_game().returning(|_| Ok(None));
        let outcome = service(schedule, None)
            .handle_query("how many assists for LeBron")
            .await;
        assert_eq!(
            outcome,
            QueryOutcome::NotFound {
                reason: "No upcoming games found for LeBron James".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_season_stats_when_no_opponent() {
        let mut stats = MockStatsProvider::new();
        stats.expect_player_signals().times(0);
        stats.expect_season_summary().returning(|player| {
            assert_eq!(player, "Stephen Curry");
            Ok(Some(SeasonSummary {
                season: "2025-2026".to_string(),
                games_played: 30,
                averages: SeasonAverages {
                    points: 27.0,
                    rebounds: 4.0,
                    assists: 5.0,
                    three_pointers: 4.8,
                    ..SeasonAverages::default()
                },
                range: StatRange {
                    min_points: 12.0,
                    max_points: 46.0,
                    ..StatRange::default()
                },
            }))
        });
        let mut schedule = MockScheduleProvider::new();
        schedule.expect_next_game().returning(|_| Ok(None));
        let service = QueryService::new(
            Arc::new(directory()),
            Arc::new(stats),
            Arc::new(schedule),
            None,
        );

        let outcome = service.handle_query("how many threes for Curry").await;
        let QueryOutcome::SeasonStats(report) = outcome else {
            panic!("expected season stats, got {:?}", outcome);
        };
        assert_eq!(report.player.as_str(), "Stephen Curry");
        assert_eq!(report.summary.games_played, 30);
        assert_eq!(report.summary.range.max_points, 46.0);
        assert_eq!(report.note, "No upcoming games found for Stephen Curry");

        let json = serde_json::to_value(QueryOutcome::SeasonStats(report)).unwrap();
        assert_eq!(json["kind"], "seasonStats");
        assert_eq!(json["gamesPlayed"], 30);
        assert_eq!(json["averages"]["threePointers"], 4.8);
    }

    #[tokio::test]
    async fn test_season_stats_failure_is_not_found() {
        let mut stats = MockStatsProvider::new();
        stats.expect_season_summary().returning(|_| {
            Err(CourtsideError::Upstream {
                endpoint: "stats".into(),
                status: 500,
            })
        });
        let mut schedule = MockScheduleProvider::new();
        schedule.expect_next_game().returning(|_| Ok(None));
        let service = QueryService::new(
            Arc::new(directory()),
            Arc::new(stats),
            Arc::new(schedule),
            None,
        );

        let outcome = service.project_player("Jokic", None).await;
        assert_eq!(
            outcome,
            QueryOutcome::NotFound {
                reason: "No upcoming games found for Nikola Jokic".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_no_player() {
        let outcome = service(MockScheduleProvider::new(), None)
            .handle_query("who wins tonight")
            .await;
        assert_eq!(
            outcome,
            QueryOutcome::NotFound {
                reason: NO_PLAYER.to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_comparison_uses_each_players_next_game() {
        let mut schedule = MockScheduleProvider::new();
        schedule.expect_next_game().times(2).returning(|player| {
            let opponent = if player == "LeBron James" { "Boston Celtics" } else { "Phoenix Suns" };
            Ok(Some(ScheduledGame {
                date: Utc.with_ymd_and_hms(2026, 11, 2, 0, 30, 0).unwrap(),
                opponent: opponent.to_string(),
                location: "Away".to_string(),
            }))
        });
        let outcome = service(schedule, None)
            .handle_query("LeBron vs Curry who scores more")
            .await;

        let QueryOutcome::Comparison(result) = outcome else {
            panic!("expected comparison, got {:?}", outcome);
        };
        assert_eq!(result.first.projection.player.as_str(), "LeBron James");
        assert_eq!(result.first.projection.opponent.as_str(), "Celtics");
        assert_eq!(result.second.projection.opponent.as_str(), "Suns");
        // LeBron 25 + 8.4 + 12 = 45.4 vs Curry 27 + 4.8 + 7.5 = 39.3
        assert_eq!(result.recommendation, "Start LeBron James");
        assert_eq!(result.confidence, ConfidenceLabel::High);
    }

    #[tokio::test]
    async fn test_comparison_with_one_player_degrades_to_single() {
        let outcome = service(schedule_with("Miami Heat"), None)
            .handle_query("is Jokic better than Zorpus")
            .await;

        let QueryOutcome::Projection(report) = outcome else {
            panic!("expected projection, got {:?}", outcome);
        };
        assert_eq!(report.projection.player.as_str(), "Nikola Jokic");
    }

    #[tokio::test]
    async fn test_missing_stats_is_not_found() {
        let mut stats = MockStatsProvider::new();
        stats.expect_player_signals().returning(|_, _| Ok(None));
        let service = QueryService::new(
            Arc::new(directory()),
            Arc::new(stats),
            Arc::new(MockScheduleProvider::new()),
            None,
        );
        let outcome = service.project_player("Curry", Some("Denver")).await;
        assert_eq!(
            outcome,
            QueryOutcome::NotFound {
                reason: "No stats available for Stephen Curry vs Nuggets".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_direct_compare_and_unknown_team() {
        let service = service(MockScheduleProvider::new(), None);
        let outcome = service
            .compare_players("Jokic", "LeBron", Some("Portland"))
            .await;
        let QueryOutcome::Comparison(result) = outcome else {
            panic!("expected comparison, got {:?}", outcome);
        };
        assert_eq!(result.first.projection.opponent.as_str(), "Trail Blazers");
        assert_eq!(result.first.projection.opponent_source, OpponentSource::Query);
        assert_eq!(result.second.projection.opponent.as_str(), "Trail Blazers");
        assert_eq!(result.second.projection.opponent_source, OpponentSource::Query);

        let outcome = service.project_player("Jokic", Some("Seattle")).await;
        assert!(outcome.is_not_found());
    }

    #[test]
    fn test_outcome_serializes_with_kind_tag() {
        let json = serde_json::to_value(QueryOutcome::not_found("nope")).unwrap();
        assert_eq!(json["kind"], "notFound");
        assert_eq!(json["reason"], "nope");
    }
}
