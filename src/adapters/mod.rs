pub mod fixtures;
pub mod stats_api;

pub use fixtures::FixtureStore;
pub use stats_api::StatsApiClient;
