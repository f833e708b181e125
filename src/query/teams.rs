//! Team Resolver
//!
//! Static alias table of the 30 franchises. Matching is a case-insensitive
//! substring scan in table order, so earlier rows win when a fragment hits
//! more than one alias.

use crate::domain::TeamRef;

struct TeamAliases {
    canonical: &'static str,
    aliases: &'static [&'static str],
}

// Hornets sit above Nets: "hornets" contains "nets".
const TEAMS: &[TeamAliases] = &[
    TeamAliases { canonical: "Lakers", aliases: &["lakers", "la lakers", "los angeles lakers"] },
    TeamAliases { canonical: "Warriors", aliases: &["warriors", "golden state", "gsw"] },
    TeamAliases { canonical: "Celtics", aliases: &["celtics", "boston"] },
    TeamAliases { canonical: "Heat", aliases: &["heat", "miami"] },
    TeamAliases { canonical: "Bulls", aliases: &["bulls", "chicago"] },
    TeamAliases { canonical: "Knicks", aliases: &["knicks", "new york", "ny knicks"] },
    TeamAliases { canonical: "Hornets", aliases: &["hornets", "charlotte"] },
    TeamAliases { canonical: "Nets", aliases: &["nets", "brooklyn"] },
    TeamAliases { canonical: "76ers", aliases: &["sixers", "76ers", "philadelphia"] },
    TeamAliases { canonical: "Bucks", aliases: &["bucks", "milwaukee"] },
    TeamAliases { canonical: "Raptors", aliases: &["raptors", "toronto"] },
    TeamAliases { canonical: "Cavaliers", aliases: &["cavaliers", "cavs", "cleveland"] },
    TeamAliases { canonical: "Pistons", aliases: &["pistons", "detroit"] },
    TeamAliases { canonical: "Pacers", aliases: &["pacers", "indiana"] },
    TeamAliases { canonical: "Hawks", aliases: &["hawks", "atlanta"] },
    TeamAliases { canonical: "Magic", aliases: &["magic", "orlando"] },
    TeamAliases { canonical: "Wizards", aliases: &["wizards", "washington"] },
    TeamAliases { canonical: "Nuggets", aliases: &["nuggets", "denver"] },
    TeamAliases { canonical: "Timberwolves", aliases: &["timberwolves", "wolves", "minnesota"] },
    TeamAliases { canonical: "Thunder", aliases: &["thunder", "okc", "oklahoma city"] },
    TeamAliases { canonical: "Trail Blazers", aliases: &["blazers", "trail blazers", "portland"] },
    TeamAliases { canonical: "Jazz", aliases: &["jazz", "utah"] },
    TeamAliases { canonical: "Suns", aliases: &["suns", "phoenix"] },
    TeamAliases { canonical: "Kings", aliases: &["kings", "sacramento"] },
    TeamAliases { canonical: "Mavericks", aliases: &["mavericks", "mavs", "dallas"] },
    TeamAliases { canonical: "Rockets", aliases: &["rockets", "houston"] },
    TeamAliases { canonical: "Grizzlies", aliases: &["grizzlies", "memphis"] },
    TeamAliases { canonical: "Pelicans", aliases: &["pelicans", "new orleans"] },
    TeamAliases { canonical: "Spurs", aliases: &["spurs", "san antonio"] },
    TeamAliases { canonical: "Clippers", aliases: &["clippers", "la clippers", "los angeles clippers"] },
];

/// Find the opponent named in `query`, ignoring the first occurrence of
/// `exclude` (usually the resolved player name) so a player's name cannot
/// be read as a team.
pub fn resolve_team(query: &str, exclude: &str) -> Option<TeamRef> {
    let mut search = query.to_lowercase();
    let exclude = exclude.trim().to_lowercase();
    if !exclude.is_empty() {
        search = search.replacen(&exclude, "", 1);
    }

    TEAMS
        .iter()
        .find(|team| team.aliases.iter().any(|alias| search.contains(alias)))
        .map(|team| TeamRef::canonical(team.canonical))
}

/// Canonicalise a team name from an upstream source (e.g. "Los Angeles Lakers").
pub fn canonical_team(name: &str) -> Option<TeamRef> {
    resolve_team(name, "")
}

/// Every alias with its canonical team, in table order.
pub fn aliases() -> impl Iterator<Item = (&'static str, TeamRef)> {
    TEAMS.iter().flat_map(|team| {
        team.aliases
            .iter()
            .map(move |alias| (*alias, TeamRef::canonical(team.canonical)))
    })
}

/// All canonical teams, in table order.
pub fn all_teams() -> impl Iterator<Item = TeamRef> {
    TEAMS.iter().map(|team| TeamRef::canonical(team.canonical))
}
