use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::domain::TeamRef;
use crate::query::canonical_team;

/// Main application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub query: QueryConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Stats service base URL (player, signals and next-game endpoints)
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Season the signals are aggregated over (e.g., "2025-2026")
    #[serde(default = "default_season")]
    pub season: String,
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_season() -> String {
    "2025-2026".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
            season: default_season(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct QueryConfig {
    /// Opponent used when neither the query nor the schedule names one.
    /// Any team alias is accepted (e.g., "lakers", "Boston").
    #[serde(default)]
    pub default_opponent: Option<String>,
}

impl QueryConfig {
    /// Configured fallback opponent, if it names a known team.
    pub fn default_opponent_team(&self) -> Option<TeamRef> {
        self.default_opponent.as_deref().and_then(canonical_team)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Enable JSON formatted logs
    #[serde(default)]
    pub json: bool,
    /// Directory for daily rolling log files; console only when unset
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
            dir: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();

        let builder = Config::builder()
            // Start with default values
            .set_default("api.base_url", default_base_url())?
            .set_default("api.timeout_ms", 10_000_i64)?
            .set_default("api.season", default_season())?
            .set_default("logging.level", "info")?
            .set_default("logging.json", false)?
            // Load default config file
            .add_source(File::from(config_dir.join("default.toml")).required(false))
            // Load environment-specific config (e.g., config/production.toml)
            .add_source(
                File::from(config_dir.join(
                    std::env::var("COURTSIDE_ENV").unwrap_or_else(|_| "development".to_string()),
                ))
                .required(false),
            )
            // Override with environment variables (COURTSIDE_API__BASE_URL, etc.)
            .add_source(
                Environment::with_prefix("COURTSIDE")
                    .separator("__")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }

    /// Built-in defaults, for running without a config directory
    pub fn default_config() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default_config();
        assert_eq!(config.api.base_url, "http://localhost:3000");
        assert_eq!(config.api.timeout_ms, 10_000);
        assert_eq!(config.api.season, "2025-2026");
        assert_eq!(config.logging.level, "info");
        assert!(config.query.default_opponent_team().is_none());
    }

    #[test]
    fn test_load_from_missing_dir_uses_defaults() {
        let config = AppConfig::load_from("does/not/exist").unwrap();
        assert_eq!(config.api.timeout_ms, 10_000);
        assert!(!config.logging.json);
    }

    #[test]
    fn test_load_from_file() {
        let dir = std::env::temp_dir().join(format!("courtside-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(
            dir.join("default.toml"),
            r#"
            [api]
            base_url = "http://stats.internal:8080"
            season = "2024-2025"

            [query]
            default_opponent = "boston"
            "#,
        )
        .unwrap();

        let config = AppConfig::load_from(&dir).unwrap();
        std::fs::remove_dir_all(&dir).ok();

        assert_eq!(config.api.base_url, "http://stats.internal:8080");
        assert_eq!(config.api.season, "2024-2025");
        assert_eq!(config.api.timeout_ms, 10_000);
        assert_eq!(
            config.query.default_opponent_team().unwrap().as_str(),
            "Celtics"
        );
    }

    #[test]
    fn test_unknown_default_opponent_is_ignored() {
        let query = QueryConfig {
            default_opponent: Some("Sonics".to_string()),
        };
        assert!(query.default_opponent_team().is_none());
    }
}
