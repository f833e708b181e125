//! Intent Extractor
//!
//! Pure keyword analysis: is this a comparison, and which stats were asked
//! for. Matching is substring based on the lower-cased query.

use std::collections::BTreeSet;

use crate::domain::StatCategory;

const COMPARISON_KEYWORDS: &[&str] = &[
    "vs", "versus", " or ", "compare", "better", "who", "which", "between",
];

struct StatKeywords {
    stat: StatCategory,
    keywords: &'static [&'static str],
}

const STAT_KEYWORDS: &[StatKeywords] = &[
    StatKeywords { stat: StatCategory::Points, keywords: &["points", "pts", "score"] },
    StatKeywords { stat: StatCategory::Rebounds, keywords: &["rebounds", "rebs", "boards"] },
    StatKeywords { stat: StatCategory::Assists, keywords: &["assists", "ast", "dimes"] },
    StatKeywords { stat: StatCategory::Steals, keywords: &["steals", "steal"] },
    StatKeywords { stat: StatCategory::Blocks, keywords: &["blocks", "block"] },
    StatKeywords { stat: StatCategory::ThreePointers, keywords: &["three", "3pt", "3-point"] },
    StatKeywords { stat: StatCategory::Turnovers, keywords: &["turnover", "turnovers"] },
    StatKeywords { stat: StatCategory::FantasyScore, keywords: &["fantasy", "projected"] },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Intent {
    pub is_comparison: bool,
    /// Empty means no explicit request.
    pub requested_stats: BTreeSet<StatCategory>,
}

pub fn classify(query: &str) -> Intent {
    let query = query.to_lowercase();
    Intent {
        is_comparison: is_comparison(&query),
        requested_stats: requested_stats(&query),
    }
}

/// `query` must already be lower-cased.
fn is_comparison(query: &str) -> bool {
    COMPARISON_KEYWORDS.iter().any(|kw| query.contains(kw))
}

/// `query` must already be lower-cased.
fn requested_stats(query: &str) -> BTreeSet<StatCategory> {
    STAT_KEYWORDS
        .iter()
        .filter(|group| group.keywords.iter().any(|kw| query.contains(kw)))
        .map(|group| group.stat)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comparison_keywords() {
        assert!(classify("LeBron vs Curry").is_comparison);
        assert!(classify("Who is better, Tatum or Brown?").is_comparison);
        assert!(classify("compare jokic and embiid").is_comparison);
        assert!(!classify("how many rebounds will Jokic get").is_comparison);
        // " or " needs the surrounding spaces.
        assert!(!classify("Jordan Poole points").is_comparison);
    }

    #[test]
    fn test_stats_from_keywords() {
        let intent = classify("LeBron vs Curry who scores more");
        assert_eq!(
            intent.requested_stats.into_iter().collect::<Vec<_>>(),
            vec![StatCategory::Points]
        );

        let intent = classify("Jokic boards and dimes tonight");
        assert_eq!(
            intent.requested_stats.into_iter().collect::<Vec<_>>(),
            vec![StatCategory::Rebounds, StatCategory::Assists]
        );

        let intent = classify("Curry 3PT makes and fantasy outlook");
        assert!(intent.requested_stats.contains(&StatCategory::ThreePointers));
        assert!(intent.requested_stats.contains(&StatCategory::FantasyScore));
    }

    #[test]
    fn test_no_stat_keywords_is_empty() {
        assert!(classify("tell me about Wembanyama").requested_stats.is_empty());
    }

    #[test]
    fn test_keyword_order_does_not_matter() {
        let a = classify("steals blocks turnovers for Davis");
        let b = classify("turnovers for Davis, blocks, steals");
        assert_eq!(a.requested_stats, b.requested_stats);
        assert_eq!(a.requested_stats.len(), 3);
    }
}
