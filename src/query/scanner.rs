//! Entity Scanner
//!
//! Recovers one or two player names from free text. Both the single and the
//! two-player scan run the same `TokenMatcher`: two-token windows first
//! (either order), then single tokens, skipping stop words. Lookups run one
//! at a time and stop as soon as enough players are found.

use tracing::debug;

use super::player_resolver::PlayerResolver;
use super::teams::resolve_team;
use crate::domain::{PlayerRef, TeamRef};

/// Query filler that is never part of a player name.
pub const STOP_WORDS: &[&str] = &[
    "how", "many", "will", "have", "get", "score", "what", "is", "are", "the", "a", "an",
    "points", "rebounds", "assists", "stats", "for", "about", "tell", "me", "against", "vs",
    "versus", "playing",
];

/// `STOP_WORDS` plus comparison keywords, for scanning a whole comparison query.
pub const COMPARISON_STOP_WORDS: &[&str] = &[
    "how", "many", "will", "have", "get", "score", "what", "is", "are", "the", "a", "an",
    "points", "rebounds", "assists", "stats", "for", "about", "tell", "me", "against", "vs",
    "versus", "playing", "who", "better", "or", "compare", "between", "and",
];

const SPLIT_DELIMITERS: &[&str] = &[" vs ", " versus ", " or "];
const COMPARE_PREFIX: &str = "compare ";
const COMPARE_DELIMITERS: &[&str] = &[" and ", " to "];

/// Whitespace tokenizer; strips punctuation from token edges ("Curry?" -> "Curry").
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace()
        .map(|t| t.trim_matches(|c: char| c.is_ascii_punctuation()))
        .filter(|t| !t.is_empty())
        .collect()
}

/// Scans tokens for up to `limit` distinct players.
#[derive(Debug, Clone, Copy)]
pub struct TokenMatcher {
    stop_words: &'static [&'static str],
    limit: usize,
}

impl TokenMatcher {
    pub const SINGLE: TokenMatcher = TokenMatcher::new(STOP_WORDS, 1);
    pub const PAIR: TokenMatcher = TokenMatcher::new(COMPARISON_STOP_WORDS, 2);

    pub const fn new(stop_words: &'static [&'static str], limit: usize) -> Self {
        Self { stop_words, limit }
    }

    fn is_stop_word(&self, token: &str) -> bool {
        let lower = token.to_lowercase();
        self.stop_words.contains(&lower.as_str())
    }

    /// Distinct players in order of discovery, at most `limit`.
    pub async fn collect(&self, text: &str, resolver: &PlayerResolver) -> Vec<PlayerRef> {
        let tokens = tokenize(text);
        let mut found: Vec<PlayerRef> = Vec::with_capacity(self.limit);

        // Pass 1: full names from adjacent pairs.
        let mut i = 0;
        while i + 1 < tokens.len() && found.len() < self.limit {
            let (a, b) = (tokens[i], tokens[i + 1]);
            if self.is_stop_word(a) || self.is_stop_word(b) {
                i += 1;
                continue;
            }

            let forward = format!("{} {}", a, b);
            let reversed = format!("{} {}", b, a);
            if accept(resolver, &forward, &mut found).await
                || accept(resolver, &reversed, &mut found).await
            {
                // Both tokens are used up.
                i += 2;
                continue;
            }
            i += 1;
        }

        // Pass 2: single tokens.
        for token in &tokens {
            if found.len() >= self.limit {
                break;
            }
            if self.is_stop_word(token) {
                continue;
            }
            accept(resolver, token, &mut found).await;
        }

        found
    }
}

/// Resolve `candidate` and keep it if it is a player not already collected.
async fn accept(resolver: &PlayerResolver, candidate: &str, found: &mut Vec<PlayerRef>) -> bool {
    match resolver.resolve(candidate).await {
        Some(player) if !found.contains(&player) => {
            found.push(player);
            true
        }
        _ => false,
    }
}

/// Split a comparison at its first delimiter into the two sides.
pub fn split_comparison(text: &str) -> Option<(&str, &str)> {
    // ASCII lowering keeps byte offsets aligned with `text`.
    let lower = text.to_ascii_lowercase();

    for delim in SPLIT_DELIMITERS {
        if let Some(idx) = lower.find(delim) {
            return Some((&text[..idx], &text[idx + delim.len()..]));
        }
    }

    let start = lower.find(COMPARE_PREFIX)? + COMPARE_PREFIX.len();
    let rest = &lower[start..];
    let (idx, len) = COMPARE_DELIMITERS
        .iter()
        .filter_map(|d| rest.find(d).map(|idx| (idx, d.len())))
        .min_by_key(|(idx, _)| *idx)?;
    Some((&text[start..start + idx], &text[start + idx + len..]))
}

#[derive(Clone)]
pub struct EntityScanner {
    resolver: PlayerResolver,
}

impl EntityScanner {
    pub fn new(resolver: PlayerResolver) -> Self {
        Self { resolver }
    }

    /// First player named in `text`.
    pub async fn find_player(&self, text: &str) -> Option<PlayerRef> {
        TokenMatcher::SINGLE
            .collect(text, &self.resolver)
            .await
            .into_iter()
            .next()
    }

    /// Two distinct players for a comparison. Either side may be missing;
    /// a side naming the same player as the first is dropped.
    pub async fn find_two_players(&self, text: &str) -> (Option<PlayerRef>, Option<PlayerRef>) {
        if let Some((left, right)) = split_comparison(text) {
            debug!("Comparison split: '{}' | '{}'", left.trim(), right.trim());
            let first = self.find_player(left).await;
            let second = self.find_player(right).await;
            if first.is_some() && second == first {
                debug!("Both sides resolve to {:?}, keeping one", first);
                return (first, None);
            }
            return (first, second);
        }

        debug!("No comparison delimiter, scanning whole query");
        let mut found = TokenMatcher::PAIR
            .collect(text, &self.resolver)
            .await
            .into_iter();
        (found.next(), found.next())
    }

    /// Opponent named in `text`, ignoring the resolved player's name.
    pub fn find_opponent(&self, text: &str, player: Option<&PlayerRef>) -> Option<TeamRef> {
        resolve_team(text, player.map(|p| p.as_str()).unwrap_or(""))
    }
}
