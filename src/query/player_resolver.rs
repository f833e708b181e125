//! Player Resolver
//!
//! Confirms that a text fragment names a known player and returns the
//! directory's canonical spelling. Every call is one directory lookup, so
//! callers decide which fragments are worth trying.

use std::sync::Arc;
use tracing::{debug, warn};

use crate::domain::{PlayerDirectory, PlayerRef};

/// Fragments shorter than this are rejected without a lookup.
pub const MIN_CANDIDATE_CHARS: usize = 2;

#[derive(Clone)]
pub struct PlayerResolver {
    directory: Arc<dyn PlayerDirectory>,
}

impl PlayerResolver {
    pub fn new(directory: Arc<dyn PlayerDirectory>) -> Self {
        Self { directory }
    }

    /// Resolve `candidate` to a canonical player.
    ///
    /// Lookup failures are logged and reported as a miss.
    pub async fn resolve(&self, candidate: &str) -> Option<PlayerRef> {
        if candidate.chars().count() < MIN_CANDIDATE_CHARS {
            return None;
        }

        let fragment = candidate.to_lowercase();
        match self.directory.find_player(&fragment).await {
            Ok(Some(name)) if !name.trim().is_empty() => {
                debug!("Resolved '{}' -> {}", candidate, name);
                Some(PlayerRef::confirmed(name))
            }
            Ok(_) => {
                debug!("No player matches '{}'", candidate);
                None
            }
            Err(e) => {
                warn!("Player lookup for '{}' failed: {}", candidate, e);
                None
            }
        }
    }
}
