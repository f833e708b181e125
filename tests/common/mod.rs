#![allow(dead_code)]

use courtside::domain::TeamRef;
use courtside::{FixtureStore, QueryService};
use std::sync::Arc;

pub const LEAGUE: &str = include_str!("../fixtures/league.json");

pub fn league() -> Arc<FixtureStore> {
    Arc::new(FixtureStore::from_json(LEAGUE).expect("league fixture parses"))
}

pub fn service() -> QueryService {
    QueryService::with_backend(league(), None)
}

pub fn service_with_default(opponent: TeamRef) -> QueryService {
    QueryService::with_backend(league(), Some(opponent))
}
