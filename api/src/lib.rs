pub mod client;
pub mod normalize;
pub mod wire;

use serde::Serialize;

/// Cross-team search needs at least this many characters before any request
/// is issued.
pub const MIN_SEARCH_CHARS: usize = 2;

// ---------------------------------------------------------------------------
// Domain types: clean model, independent of the Stats API wire format
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: u32,
    pub name: String,          // "Minnesota Twins"
    pub team_name: String,     // "Twins"
    pub location_name: String, // "Minnesota"
    pub abbreviation: String,  // "MIN"
}

/// Team a player record was found on. Only attached to cross-team search results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TeamRef {
    pub id: u32,
    pub name: String,
}

impl From<&Team> for TeamRef {
    fn from(team: &Team) -> Self {
        Self { id: team.id, name: team.name.clone() }
    }
}

/// Display-ready player built from a roster entry plus an optional season
/// stats payload. See [`normalize::normalize_player`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    pub id: u32,
    pub name: String,
    pub number: String,
    pub position: String,      // "SP", "C", "DH", "TWP"
    pub position_type: String, // "Pitcher", "Infielder", ...
    pub is_two_way: bool,
    pub bats: String,
    pub throws: String,
    pub height: String,
    pub weight: u32,
    pub birth_date: String, // "March 7, 1996" or "N/A"
    pub age: String,        // "28" or "N/A"
    pub image_url: String,
    pub year: u16,
    pub stats: PlayerStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<TeamRef>,
}

impl PlayerRecord {
    pub fn is_pitcher(&self) -> bool {
        self.position_type == "Pitcher"
    }

    /// Up to two initials, used where a headshot would be drawn.
    pub fn initials(&self) -> String {
        let initials: String = self
            .name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .collect();
        if initials.is_empty() { "?".to_string() } else { initials.to_uppercase() }
    }

    /// Case-insensitive substring match on the player's name.
    pub fn name_matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
    }

    pub fn on_team(mut self, team: Option<TeamRef>) -> Self {
        self.team = team;
        self
    }
}

/// The single stats block a player card renders. `TwoWay` is produced iff
/// the record's `is_two_way` flag is set.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PlayerStats {
    Hitting(HittingStats),
    Pitching(PitchingStats),
    TwoWay { hitting: HittingStats, pitching: PitchingStats },
}

impl Default for PlayerStats {
    fn default() -> Self {
        PlayerStats::Hitting(HittingStats::default())
    }
}

impl PlayerStats {
    pub fn hitting(&self) -> Option<&HittingStats> {
        match self {
            PlayerStats::Hitting(h) | PlayerStats::TwoWay { hitting: h, .. } => Some(h),
            PlayerStats::Pitching(_) => None,
        }
    }

    pub fn pitching(&self) -> Option<&PitchingStats> {
        match self {
            PlayerStats::Pitching(p) | PlayerStats::TwoWay { pitching: p, .. } => Some(p),
            PlayerStats::Hitting(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HittingStats {
    pub avg: String,
    pub home_runs: u32,
    pub rbi: u32,
    pub ops: String,
    pub games: u32,
    pub hits: u32,
    pub at_bats: u32,
}

impl Default for HittingStats {
    fn default() -> Self {
        Self {
            avg: ".000".into(),
            home_runs: 0,
            rbi: 0,
            ops: ".000".into(),
            games: 0,
            hits: 0,
            at_bats: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PitchingStats {
    pub era: String,
    pub wins: u32,
    pub losses: u32,
    pub strikeouts: u32,
    pub innings: String,
    pub saves: u32,
    pub games: u32,
}

impl Default for PitchingStats {
    fn default() -> Self {
        Self {
            era: "0.00".into(),
            wins: 0,
            losses: 0,
            strikeouts: 0,
            innings: "0.0".into(),
            saves: 0,
            games: 0,
        }
    }
}

// ---------------------------------------------------------------------------
// Player detail (career, season-by-season, postseason, awards, transactions)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum StatGroup {
    #[default]
    Hitting,
    Pitching,
}

impl StatGroup {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "hitting" => Some(StatGroup::Hitting),
            "pitching" => Some(StatGroup::Pitching),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatGroup::Hitting => "Hitting",
            StatGroup::Pitching => "Pitching",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerDetail {
    pub id: u32,
    pub full_name: String,
    pub primary_number: String,
    pub primary_position: String,
    pub current_team: String,
    pub birth_date: String,
    pub height: String,
    pub weight: u32,
    pub bats: String,   // "Left"
    pub throws: String, // "Right"
    pub image_url: String,
    /// One section per stat group with any data; hitting first.
    pub sections: Vec<StatSection>,
    pub awards: Vec<Award>,
    pub transactions: Vec<Transaction>,
    pub highlight_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatSection {
    pub group: StatGroup,
    /// Regular-season career totals.
    pub career: Option<StatLine>,
    /// Regular seasons with at least one game, newest first.
    pub seasons: Vec<SeasonLine>,
    /// Postseason appearances, newest first.
    pub postseason: Vec<SeasonLine>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeasonLine {
    pub season: String,
    pub team: String,
    pub line: StatLine,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StatLine {
    Hitting(HittingLine),
    Pitching(PitchingLine),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HittingLine {
    pub games: u32,
    pub at_bats: u32,
    pub runs: u32,
    pub hits: u32,
    pub doubles: u32,
    pub triples: u32,
    pub home_runs: u32,
    pub rbi: u32,
    pub stolen_bases: u32,
    pub walks: u32,
    pub strikeouts: u32,
    pub avg: String,
    pub obp: String,
    pub slg: String,
    pub ops: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PitchingLine {
    pub wins: u32,
    pub losses: u32,
    pub era: String,
    pub games: u32,
    pub games_started: u32,
    pub saves: u32,
    pub innings: String,
    pub hits: u32,
    pub runs: u32,
    pub earned_runs: u32,
    pub walks: u32,
    pub strikeouts: u32,
    pub whip: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Award {
    pub name: String,
    pub season: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transaction {
    pub date: String, // "Jan 5, 2024"
    pub description: String,
    pub type_code: String,
    pub type_desc: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> PlayerRecord {
        PlayerRecord { name: name.to_string(), ..Default::default() }
    }

    #[test]
    fn initials_take_first_two_words() {
        assert_eq!(named("Carlos Correa").initials(), "CC");
        assert_eq!(named("jose miranda jr").initials(), "JM");
        assert_eq!(named("").initials(), "?");
    }

    #[test]
    fn name_match_ignores_case() {
        let player = named("Pablo López");
        assert!(player.name_matches("lóp"));
        assert!(player.name_matches("PABLO"));
        assert!(!player.name_matches("lopez"));
    }

    #[test]
    fn stat_accessors_follow_shape() {
        let two_way = PlayerStats::TwoWay { hitting: HittingStats::default(), pitching: PitchingStats::default() };
        assert!(two_way.hitting().is_some() && two_way.pitching().is_some());
        assert!(PlayerStats::default().pitching().is_none());
    }
}
