use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

use crate::adapters::{FixtureStore, StatsApiClient};
use crate::config::AppConfig;
use crate::error::Result;
use crate::services::QueryService;

#[derive(Parser)]
#[command(name = "courtside")]
#[command(version = "0.1.0")]
#[command(about = "Answer NBA player questions with stat projections", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config directory (default.toml, then $COURTSIDE_ENV.toml)
    #[arg(short, long, default_value = "config")]
    pub config: PathBuf,

    /// Serve players, stats and schedules from a JSON fixture file instead of the stats API
    #[arg(short, long, env = "COURTSIDE_FIXTURES")]
    pub fixtures: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Ask a free-form question ("How many points will LeBron score against the Celtics?")
    Ask {
        #[arg(required = true, trailing_var_arg = true)]
        query: Vec<String>,
    },
    /// Show how a question is interpreted, without projecting
    Interpret {
        #[arg(required = true, trailing_var_arg = true)]
        query: Vec<String>,
    },
    /// Project one player
    Project {
        /// Player name or fragment
        player: String,
        /// Opponent team (any alias); defaults to the next scheduled game
        #[arg(short, long)]
        opponent: Option<String>,
    },
    /// Compare two players for a start/sit call
    Compare {
        first: String,
        second: String,
        /// Opponent team for both players; defaults to each player's next game
        #[arg(short, long)]
        opponent: Option<String>,
    },
}

/// Service over the fixture file when given, else over the stats API.
pub fn build_service(config: &AppConfig, fixtures: Option<&Path>) -> Result<QueryService> {
    let default_opponent = config.query.default_opponent_team();

    match fixtures {
        Some(path) => {
            let store = FixtureStore::load(path)?;
            Ok(QueryService::with_backend(Arc::new(store), default_opponent))
        }
        None => {
            let client = StatsApiClient::new(&config.api)?;
            info!("Using stats API at {}", client.base_url());
            Ok(QueryService::with_backend(Arc::new(client), default_opponent))
        }
    }
}

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("rendering result as JSON")?;
    println!("{}", rendered);
    Ok(())
}
