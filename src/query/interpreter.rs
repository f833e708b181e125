//! Query Interpreter
//!
//! Facade over the intent extractor and the entity scanner: raw text in,
//! `QueryInterpretation` out.

use std::sync::Arc;
use tracing::info;

use super::intent;
use super::player_resolver::PlayerResolver;
use super::scanner::EntityScanner;
use crate::domain::{PlayerDirectory, QueryInterpretation};

#[derive(Clone)]
pub struct QueryInterpreter {
    scanner: EntityScanner,
}

impl QueryInterpreter {
    pub fn new(directory: Arc<dyn PlayerDirectory>) -> Self {
        Self {
            scanner: EntityScanner::new(PlayerResolver::new(directory)),
        }
    }

    pub async fn interpret(&self, raw: &str) -> QueryInterpretation {
        let intent = intent::classify(raw);

        let interpretation = if intent.is_comparison {
            let (first, second) = self.scanner.find_two_players(raw).await;
            // A comparison opponent applies to both players, so nothing is excluded.
            let opponent = self.scanner.find_opponent(raw, None);
            QueryInterpretation::comparison(intent.requested_stats, first, second, opponent)
        } else {
            let player = self.scanner.find_player(raw).await;
            let opponent = self.scanner.find_opponent(raw, player.as_ref());
            QueryInterpretation::single(intent.requested_stats, player, opponent)
        };

        info!("Interpreted '{}': {}", raw, interpretation.summary());
        interpretation
    }
}
