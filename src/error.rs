use thiserror::Error;

/// Main error type for the query and projection service
#[derive(Error, Debug)]
pub enum CourtsideError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    // Network errors
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Upstream {endpoint} returned status {status}")]
    Upstream { endpoint: String, status: u16 },

    // Serialization errors
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // Lookup errors
    #[error("Team not found: {0}")]
    TeamNotFound(String),

    #[error("Stats unavailable: {0}")]
    StatsUnavailable(String),

    // Validation errors
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias for CourtsideError
pub type Result<T> = std::result::Result<T, CourtsideError>;

impl CourtsideError {
    /// True for errors that mean "nothing matched" rather than a failure.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CourtsideError::TeamNotFound(_) | CourtsideError::StatsUnavailable(_)
        )
    }
}
