/// MLB Stats API raw wire types: serde shapes for deserializing responses.
/// Every field is optional; the normalizer in normalize.rs maps these to the
/// clean domain types in lib.rs.
use serde::{Deserialize, Deserializer};
use serde_json::Value;

// ---------------------------------------------------------------------------
// Teams  (/teams?sportId=1)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct TeamsResponse {
    pub teams: Option<Vec<TeamEntry>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TeamEntry {
    pub id: Option<u32>,
    pub name: Option<String>,
    pub team_name: Option<String>,
    pub location_name: Option<String>,
    pub abbreviation: Option<String>,
    pub sport: Option<IdRef>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct IdRef {
    pub id: Option<u32>,
}

// ---------------------------------------------------------------------------
// Roster  (/teams/{id}/roster/40Man?season={year})
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct RosterResponse {
    pub roster: Option<Vec<RosterEntry>>,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RosterEntry {
    pub person: Option<PersonRef>,
    /// Sent as a string ("12"); some historical rosters omit it.
    #[serde(default, deserialize_with = "lenient_string")]
    pub jersey_number: Option<String>,
    pub position: Option<Position>,
    pub status: Option<CodeDescription>,
}

impl RosterEntry {
    pub fn person_id(&self) -> Option<u32> {
        self.person.as_ref().and_then(|p| p.id)
    }

    pub fn full_name(&self) -> &str {
        self.person
            .as_ref()
            .and_then(|p| p.full_name.as_deref())
            .unwrap_or_default()
    }
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PersonRef {
    pub id: Option<u32>,
    pub full_name: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct Position {
    pub code: Option<String>,
    pub abbreviation: Option<String>,
    #[serde(rename = "type")]
    pub position_type: Option<String>, // "Pitcher", "Infielder", "Outfielder", "Catcher", "Hitter", "Two-Way Player"
    pub name: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct CodeDescription {
    pub code: Option<String>,
    pub description: Option<String>,
}

// ---------------------------------------------------------------------------
// People  (/people/{id}?hydrate=...)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct PeopleResponse {
    pub people: Option<Vec<Person>>,
}

/// One hydrated person. Which optional blocks are present depends on the
/// `hydrate` query: stats, awards, currentTeam, transactions.
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: Option<u32>,
    pub full_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub primary_number: Option<String>,
    pub primary_position: Option<Position>,
    pub current_team: Option<TeamRefEntry>,
    pub birth_date: Option<String>, // "1996-03-07"
    #[serde(default, deserialize_with = "lenient_u32")]
    pub current_age: Option<u32>,
    pub height: Option<String>, // "6' 3\""
    #[serde(default, deserialize_with = "lenient_u32")]
    pub weight: Option<u32>,
    pub bat_side: Option<CodeDescription>,
    pub pitch_hand: Option<CodeDescription>,
    pub stats: Option<Vec<StatBlock>>,
    pub awards: Option<Vec<PersonAward>>,
    pub transactions: Option<Vec<PersonTransaction>>,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct TeamRefEntry {
    pub id: Option<u32>,
    pub name: Option<String>,
}

/// One `(type, group)` slice of a person's statistics, e.g. season/hitting.
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct StatBlock {
    #[serde(rename = "type")]
    pub stat_type: Option<DisplayName>,
    pub group: Option<DisplayName>,
    pub splits: Option<Vec<Split>>,
}

impl StatBlock {
    pub fn type_name(&self) -> Option<&str> {
        self.stat_type.as_ref().and_then(|t| t.display_name.as_deref())
    }

    pub fn group_name(&self) -> Option<&str> {
        self.group.as_ref().and_then(|g| g.display_name.as_deref())
    }

    pub fn splits(&self) -> &[Split] {
        self.splits.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DisplayName {
    pub display_name: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Split {
    #[serde(default, deserialize_with = "lenient_string")]
    pub season: Option<String>,
    pub game_type: Option<String>, // "R" regular season, "P" postseason
    pub team: Option<TeamRefEntry>,
    pub stat: Option<StatFields>,
}

/// Union of the hitting and pitching stat fields the viewer reads. Counts are
/// numbers on the wire, rates are preformatted strings (".287", "3.50").
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatFields {
    #[serde(default, deserialize_with = "lenient_u32")]
    pub games_played: Option<u32>,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub games_started: Option<u32>,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub at_bats: Option<u32>,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub runs: Option<u32>,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub hits: Option<u32>,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub doubles: Option<u32>,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub triples: Option<u32>,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub home_runs: Option<u32>,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub rbi: Option<u32>,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub stolen_bases: Option<u32>,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub base_on_balls: Option<u32>,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub strike_outs: Option<u32>,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub wins: Option<u32>,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub losses: Option<u32>,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub saves: Option<u32>,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub earned_runs: Option<u32>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub avg: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub obp: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub slg: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub ops: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub era: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub whip: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub innings_pitched: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct PersonAward {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub season: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PersonTransaction {
    pub date: Option<String>,
    pub description: Option<String>,
    pub type_code: Option<String>,
    pub type_desc: Option<String>,
}

// ---------------------------------------------------------------------------
// Video search  (search-api-mlbtv Suggest query)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct SuggestResponse {
    pub data: Option<SuggestData>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct SuggestData {
    pub search: Option<SuggestSearch>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct SuggestSearch {
    pub suggestions: Option<Vec<Suggestion>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct Suggestion {
    pub slug: Option<String>,
}

// ---------------------------------------------------------------------------
// Lenient scalars: a field of the wrong JSON type reads as absent instead of
// failing the whole payload.
// ---------------------------------------------------------------------------

fn lenient_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }))
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stat_fields_tolerate_mistyped_values() {
        let raw = r#"{"atBats": "300", "homeRuns": "lots", "avg": 0.25, "wins": null}"#;
        let stat: StatFields = serde_json::from_str(raw).expect("lenient parse");
        assert_eq!(stat.at_bats, Some(300));
        assert_eq!(stat.home_runs, None);
        assert_eq!(stat.avg.as_deref(), Some("0.25"));
        assert_eq!(stat.wins, None);
        assert_eq!(stat.era, None);
    }

    #[test]
    fn roster_entry_reads_nested_person_and_position() {
        let raw = r#"{
            "person": {"id": 660271, "fullName": "Shohei Ohtani"},
            "jerseyNumber": "17",
            "position": {"code": "Y", "abbreviation": "TWP", "type": "Two-Way Player", "name": "Two-Way Player"},
            "status": {"code": "A", "description": "Active"}
        }"#;
        let entry: RosterEntry = serde_json::from_str(raw).expect("roster entry");
        assert_eq!(entry.person_id(), Some(660271));
        assert_eq!(entry.full_name(), "Shohei Ohtani");
        assert_eq!(entry.jersey_number.as_deref(), Some("17"));
        assert_eq!(
            entry.position.and_then(|p| p.position_type).as_deref(),
            Some("Two-Way Player")
        );
    }

    #[test]
    fn stat_block_exposes_type_and_group_names() {
        let raw = r#"{
            "type": {"displayName": "season"},
            "group": {"displayName": "pitching"},
            "splits": [{"season": "2024", "stat": {"era": "3.50"}}]
        }"#;
        let block: StatBlock = serde_json::from_str(raw).expect("stat block");
        assert_eq!(block.type_name(), Some("season"));
        assert_eq!(block.group_name(), Some("pitching"));
        assert_eq!(block.splits().len(), 1);
    }
}
