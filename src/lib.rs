pub mod adapters;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod projection;
pub mod query;
pub mod services;

pub use adapters::{FixtureStore, StatsApiClient};
pub use config::AppConfig;
pub use domain::{
    ComparisonResult, PlayerProjection, Projection, ProjectionReport, QueryInterpretation,
    StatCategory,
};
pub use error::{CourtsideError, Result};
pub use query::QueryInterpreter;
pub use services::{QueryOutcome, QueryService};
