//! Stats API adapter
//!
//! HTTP client for the stats service that fronts the ETL store. Implements
//! all three collaborator traits; 404s are read as "nothing found".

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::domain::{
    PlayerDirectory, PlayerSignals, ScheduleProvider, ScheduledGame, SeasonAverages, SeasonSummary,
    StatRange, StatsProvider, TeamRef,
};
use crate::error::{CourtsideError, Result};

#[derive(Debug, Deserialize)]
struct PlayerLookupResponse {
    #[serde(default)]
    found: bool,
    player: Option<PlayerRow>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct PlayerRow {
    player_name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NextGameResponse {
    #[serde(default)]
    found: bool,
    next_game: Option<ScheduledGame>,
}

/// `/api/stats/{name}`; `projection` carries the averages including turnovers.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SeasonStatsResponse {
    #[serde(default)]
    found: bool,
    season: Option<String>,
    #[serde(default)]
    games_played: u32,
    projection: Option<SeasonAverages>,
    range: Option<StatRange>,
}

impl SeasonStatsResponse {
    fn into_summary(self, default_season: &str) -> Option<SeasonSummary> {
        if !self.found {
            return None;
        }
        Some(SeasonSummary {
            season: self.season.unwrap_or_else(|| default_season.to_string()),
            games_played: self.games_played,
            averages: self.projection?,
            range: self.range.unwrap_or_default(),
        })
    }
}

#[derive(Clone)]
pub struct StatsApiClient {
    http: Client,
    base_url: String,
    season: String,
}

impl StatsApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent("courtside/0.1")
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            season: config.season.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `path`, decoding the body on success. 404 maps to `None`.
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<Option<T>> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let resp = self.http.get(&url).query(query).send().await?;
        let status = resp.status();

        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            warn!("{} returned {}", url, status);
            return Err(CourtsideError::Upstream {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }

        let body = resp.text().await?;
        Ok(Some(serde_json::from_str(&body)?))
    }
}

fn segment(raw: &str) -> String {
    urlencoding::encode(raw).into_owned()
}

#[async_trait]
impl PlayerDirectory for StatsApiClient {
    async fn find_player(&self, fragment: &str) -> Result<Option<String>> {
        let path = format!("/api/player/{}", segment(fragment));
        let resp: Option<PlayerLookupResponse> = self.get_json("player", &path, &[]).await?;

        Ok(resp
            .filter(|r| r.found)
            .and_then(|r| r.player)
            .map(|p| p.player_name))
    }
}

#[async_trait]
impl StatsProvider for StatsApiClient {
    async fn player_signals(
        &self,
        player: &str,
        opponent: TeamRef,
    ) -> Result<Option<PlayerSignals>> {
        let path = format!(
            "/api/signals/{}/{}",
            segment(player),
            segment(opponent.as_str())
        );
        self.get_json("signals", &path, &[("season", self.season.as_str())])
            .await
    }

    async fn season_summary(&self, player: &str) -> Result<Option<SeasonSummary>> {
        let path = format!("/api/stats/{}", segment(player));
        let resp: Option<SeasonStatsResponse> = self.get_json("stats", &path, &[]).await?;

        Ok(resp.and_then(|r| r.into_summary(&self.season)))
    }
}

#[async_trait]
impl ScheduleProvider for StatsApiClient {
    async fn next_game(&self, player: &str) -> Result<Option<ScheduledGame>> {
        let path = format!("/api/next-game/{}", segment(player));
        let resp: Option<NextGameResponse> = self.get_json("next-game", &path, &[]).await?;

        Ok(resp.filter(|r| r.found).and_then(|r| r.next_game))
    }
}
