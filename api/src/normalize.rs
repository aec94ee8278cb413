//! Total mapping from Stats API wire shapes to display records.
//!
//! Nothing in here fails: every absent or empty field degrades to the
//! documented default (`0`, `".000"`, `"0.00"`, `"0.0"`, `"N/A"`).

use crate::client::player_image_url;
use crate::wire::{Person, PersonTransaction, RosterEntry, Split, StatBlock, StatFields, TeamEntry};
use crate::{
    Award, HittingLine, HittingStats, PitchingLine, PitchingStats, PlayerDetail, PlayerRecord,
    PlayerStats, SeasonLine, StatGroup, StatLine, StatSection, Team, Transaction,
};
use chrono::NaiveDate;

const NOT_AVAILABLE: &str = "N/A";
const ZERO_INNINGS: &str = "0.0";
const REGULAR_SEASON: &str = "R";
const POSTSEASON: &str = "P";

// ---------------------------------------------------------------------------
// Player record (roster card)
// ---------------------------------------------------------------------------

/// Fold a roster entry and its optional season stats payload into a record.
pub fn normalize_player(entry: &RosterEntry, person: Option<&Person>, year: u16) -> PlayerRecord {
    let position = entry.position.clone().unwrap_or_default();
    let position_type = position.position_type.unwrap_or_default();
    let id = entry.person_id().unwrap_or_default();

    let blocks = person.and_then(|p| p.stats.as_deref()).unwrap_or_default();
    let hitting = first_split_stat(blocks, "season", "hitting").map(hitting_stats);
    let pitching = first_split_stat(blocks, "season", "pitching").map(pitching_stats);

    let is_two_way = match (&hitting, &pitching) {
        (Some(h), Some(p)) => h.at_bats > 0 && p.innings != ZERO_INNINGS,
        _ => false,
    };

    let stats = match (hitting, pitching) {
        (Some(hitting), Some(pitching)) if is_two_way => PlayerStats::TwoWay { hitting, pitching },
        (_, Some(pitching)) if position_type == "Pitcher" => PlayerStats::Pitching(pitching),
        (hitting, _) => PlayerStats::Hitting(hitting.unwrap_or_default()),
    };

    PlayerRecord {
        id,
        name: entry.full_name().to_string(),
        number: text_or(&entry.jersey_number, "00"),
        position: position.abbreviation.unwrap_or_default(),
        position_type,
        is_two_way,
        bats: person
            .and_then(|p| p.bat_side.as_ref())
            .map(|s| text_or(&s.code, "R"))
            .unwrap_or_else(|| "R".into()),
        throws: person
            .and_then(|p| p.pitch_hand.as_ref())
            .map(|s| text_or(&s.code, "R"))
            .unwrap_or_else(|| "R".into()),
        height: person
            .map(|p| text_or(&p.height, NOT_AVAILABLE))
            .unwrap_or_else(|| NOT_AVAILABLE.into()),
        weight: person.and_then(|p| p.weight).unwrap_or_default(),
        birth_date: person
            .and_then(|p| p.birth_date.as_deref())
            .and_then(format_birth_date)
            .unwrap_or_else(|| NOT_AVAILABLE.into()),
        age: person
            .and_then(|p| p.current_age)
            .filter(|age| *age > 0)
            .map(|age| age.to_string())
            .unwrap_or_else(|| NOT_AVAILABLE.into()),
        image_url: player_image_url(id),
        year,
        stats,
        team: None,
    }
}

/// First split's stat object of the first block matching `(stat_type, group)`.
/// A matching block with no splits counts as absent.
fn first_split_stat<'a>(blocks: &'a [StatBlock], stat_type: &str, group: &str) -> Option<&'a StatFields> {
    blocks
        .iter()
        .find(|b| b.type_name() == Some(stat_type) && b.group_name() == Some(group))
        .and_then(|b| b.splits().first())
        .and_then(|s| s.stat.as_ref())
}

fn hitting_stats(stat: &StatFields) -> HittingStats {
    HittingStats {
        avg: text_or(&stat.avg, ".000"),
        home_runs: stat.home_runs.unwrap_or_default(),
        rbi: stat.rbi.unwrap_or_default(),
        ops: text_or(&stat.ops, ".000"),
        games: stat.games_played.unwrap_or_default(),
        hits: stat.hits.unwrap_or_default(),
        at_bats: stat.at_bats.unwrap_or_default(),
    }
}

fn pitching_stats(stat: &StatFields) -> PitchingStats {
    PitchingStats {
        era: text_or(&stat.era, "0.00"),
        wins: stat.wins.unwrap_or_default(),
        losses: stat.losses.unwrap_or_default(),
        strikeouts: stat.strike_outs.unwrap_or_default(),
        innings: text_or(&stat.innings_pitched, ZERO_INNINGS),
        saves: stat.saves.unwrap_or_default(),
        games: stat.games_played.unwrap_or_default(),
    }
}

// ---------------------------------------------------------------------------
// Teams
// ---------------------------------------------------------------------------

/// Keep MLB (sportId 1) clubs only and sort them by name.
pub fn normalize_teams(entries: Vec<TeamEntry>) -> Vec<Team> {
    let mut teams: Vec<Team> = entries
        .into_iter()
        .filter(|t| t.sport.as_ref().and_then(|s| s.id) == Some(1))
        .filter_map(|t| {
            Some(Team {
                id: t.id?,
                name: t.name.unwrap_or_default(),
                team_name: t.team_name.unwrap_or_default(),
                location_name: t.location_name.unwrap_or_default(),
                abbreviation: t.abbreviation.unwrap_or_default(),
            })
        })
        .collect();
    teams.sort_by(|a, b| a.name.cmp(&b.name));
    teams
}

// ---------------------------------------------------------------------------
// Player detail
// ---------------------------------------------------------------------------

/// Most recent `limit` transactions, newest first.
pub fn normalize_transactions(raw: Vec<PersonTransaction>, limit: usize) -> Vec<Transaction> {
    raw.into_iter()
        .rev()
        .take(limit)
        .map(|t| Transaction {
            date: t
                .date
                .as_deref()
                .map(|d| format_transaction_date(d).unwrap_or_else(|| d.to_string()))
                .unwrap_or_default(),
            description: t.description.unwrap_or_default(),
            type_code: t.type_code.unwrap_or_default(),
            type_desc: t.type_desc.unwrap_or_default(),
        })
        .collect()
}

pub fn normalize_detail(
    person: &Person,
    transactions: Vec<Transaction>,
    highlight_url: Option<String>,
) -> PlayerDetail {
    let id = person.id.unwrap_or_default();
    let blocks = person.stats.as_deref().unwrap_or_default();

    let sections = [StatGroup::Hitting, StatGroup::Pitching]
        .into_iter()
        .map(|group| stat_section(blocks, group))
        .filter(|s| s.career.is_some() || !s.seasons.is_empty() || !s.postseason.is_empty())
        .collect();

    let awards = person
        .awards
        .iter()
        .flatten()
        .map(|a| Award {
            name: a.name.clone().unwrap_or_default(),
            season: a.season.clone().unwrap_or_default(),
        })
        .collect();

    PlayerDetail {
        id,
        full_name: person.full_name.clone().unwrap_or_default(),
        primary_number: text_or(&person.primary_number, "--"),
        primary_position: person
            .primary_position
            .as_ref()
            .and_then(|p| p.name.clone())
            .unwrap_or_default(),
        current_team: person
            .current_team
            .as_ref()
            .and_then(|t| t.name.clone())
            .unwrap_or_default(),
        birth_date: person
            .birth_date
            .as_deref()
            .and_then(format_birth_date)
            .unwrap_or_else(|| NOT_AVAILABLE.into()),
        height: text_or(&person.height, NOT_AVAILABLE),
        weight: person.weight.unwrap_or_default(),
        bats: person
            .bat_side
            .as_ref()
            .map(|s| text_or(&s.description, NOT_AVAILABLE))
            .unwrap_or_else(|| NOT_AVAILABLE.into()),
        throws: person
            .pitch_hand
            .as_ref()
            .map(|s| text_or(&s.description, NOT_AVAILABLE))
            .unwrap_or_else(|| NOT_AVAILABLE.into()),
        image_url: player_image_url(id),
        sections,
        awards,
        transactions,
        highlight_url,
    }
}

fn stat_section(blocks: &[StatBlock], group: StatGroup) -> StatSection {
    let in_group = |b: &&StatBlock| b.group_name().and_then(StatGroup::from_name) == Some(group);

    let career = blocks
        .iter()
        .filter(in_group)
        .find(|b| b.type_name() == Some("career"))
        .and_then(|b| {
            let splits = b.splits();
            splits
                .iter()
                .find(|s| s.game_type.as_deref() == Some(REGULAR_SEASON))
                .or_else(|| splits.iter().find(|s| s.game_type.is_none()))
        })
        .and_then(|s| s.stat.as_ref())
        .map(|stat| stat_line(group, stat));

    let year_by_year: Vec<&Split> = blocks
        .iter()
        .filter(in_group)
        .filter(|b| b.type_name() == Some("yearByYear"))
        .flat_map(|b| b.splits())
        .filter(|s| s.stat.as_ref().and_then(|st| st.games_played).unwrap_or_default() > 0)
        .collect();

    let seasons = season_lines(group, &year_by_year, |game_type| {
        game_type.is_none() || game_type == Some(REGULAR_SEASON)
    });
    let postseason = season_lines(group, &year_by_year, |game_type| game_type == Some(POSTSEASON));

    StatSection { group, career, seasons, postseason }
}

fn season_lines(group: StatGroup, splits: &[&Split], keep: impl Fn(Option<&str>) -> bool) -> Vec<SeasonLine> {
    let mut lines: Vec<SeasonLine> = splits
        .iter()
        .filter(|s| keep(s.game_type.as_deref()))
        .filter_map(|s| {
            let stat = s.stat.as_ref()?;
            Some(SeasonLine {
                season: s.season.clone().unwrap_or_default(),
                team: s
                    .team
                    .as_ref()
                    .and_then(|t| t.name.clone())
                    .unwrap_or_else(|| NOT_AVAILABLE.into()),
                line: stat_line(group, stat),
            })
        })
        .collect();
    lines.reverse();
    lines
}

fn stat_line(group: StatGroup, stat: &StatFields) -> StatLine {
    match group {
        StatGroup::Hitting => StatLine::Hitting(HittingLine {
            games: stat.games_played.unwrap_or_default(),
            at_bats: stat.at_bats.unwrap_or_default(),
            runs: stat.runs.unwrap_or_default(),
            hits: stat.hits.unwrap_or_default(),
            doubles: stat.doubles.unwrap_or_default(),
            triples: stat.triples.unwrap_or_default(),
            home_runs: stat.home_runs.unwrap_or_default(),
            rbi: stat.rbi.unwrap_or_default(),
            stolen_bases: stat.stolen_bases.unwrap_or_default(),
            walks: stat.base_on_balls.unwrap_or_default(),
            strikeouts: stat.strike_outs.unwrap_or_default(),
            avg: text_or(&stat.avg, ".000"),
            obp: text_or(&stat.obp, ".000"),
            slg: text_or(&stat.slg, ".000"),
            ops: text_or(&stat.ops, ".000"),
        }),
        StatGroup::Pitching => StatLine::Pitching(PitchingLine {
            wins: stat.wins.unwrap_or_default(),
            losses: stat.losses.unwrap_or_default(),
            era: text_or(&stat.era, "0.00"),
            games: stat.games_played.unwrap_or_default(),
            games_started: stat.games_started.unwrap_or_default(),
            saves: stat.saves.unwrap_or_default(),
            innings: text_or(&stat.innings_pitched, ZERO_INNINGS),
            hits: stat.hits.unwrap_or_default(),
            runs: stat.runs.unwrap_or_default(),
            earned_runs: stat.earned_runs.unwrap_or_default(),
            walks: stat.base_on_balls.unwrap_or_default(),
            strikeouts: stat.strike_outs.unwrap_or_default(),
            whip: text_or(&stat.whip, "0.00"),
        }),
    }
}

// ---------------------------------------------------------------------------
// Formatting helpers
// ---------------------------------------------------------------------------

fn text_or(value: &Option<String>, default: &str) -> String {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(default)
        .to_string()
}

/// Leading ISO date of `raw`; transaction dates sometimes carry a time part.
fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    let date = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

/// "1996-03-07" -> "March 7, 1996"
pub fn format_birth_date(raw: &str) -> Option<String> {
    parse_iso_date(raw).map(|d| d.format("%B %-d, %Y").to_string())
}

/// "2024-01-05" -> "Jan 5, 2024"
pub fn format_transaction_date(raw: &str) -> Option<String> {
    parse_iso_date(raw).map(|d| d.format("%b %-d, %Y").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::{CodeDescription, DisplayName, PersonAward, PersonRef, Position, TeamRefEntry};

    fn roster_entry(id: u32, name: &str, number: &str, abbreviation: &str, position_type: &str) -> RosterEntry {
        RosterEntry {
            person: Some(PersonRef { id: Some(id), full_name: Some(name.into()) }),
            jersey_number: Some(number.into()),
            position: Some(Position {
                code: None,
                abbreviation: Some(abbreviation.into()),
                position_type: Some(position_type.into()),
                name: None,
            }),
            status: None,
        }
    }

    fn block(stat_type: &str, group: &str, splits: Vec<Split>) -> StatBlock {
        StatBlock {
            stat_type: Some(DisplayName { display_name: Some(stat_type.into()) }),
            group: Some(DisplayName { display_name: Some(group.into()) }),
            splits: Some(splits),
        }
    }

    fn split(stat: StatFields) -> Split {
        Split { stat: Some(stat), ..Default::default() }
    }

    fn season_split(season: &str, game_type: Option<&str>, team: &str, stat: StatFields) -> Split {
        Split {
            season: Some(season.into()),
            game_type: game_type.map(Into::into),
            team: Some(TeamRefEntry { id: None, name: Some(team.into()) }),
            stat: Some(stat),
        }
    }

    fn person_with(blocks: Vec<StatBlock>) -> Person {
        Person { stats: Some(blocks), ..Default::default() }
    }

    #[test]
    fn missing_payload_defaults_every_field() {
        let entry = roster_entry(1, "Test Player", "12", "CF", "Outfielder");
        let record = normalize_player(&entry, None, 2024);

        assert!(!record.is_two_way);
        assert_eq!(record.stats, PlayerStats::Hitting(HittingStats::default()));
        let hitting = record.stats.hitting().expect("hitting block");
        assert_eq!(hitting.avg, ".000");
        assert_eq!(hitting.ops, ".000");
        assert_eq!(hitting.home_runs, 0);
        assert_eq!(hitting.at_bats, 0);
        assert_eq!(record.bats, "R");
        assert_eq!(record.throws, "R");
        assert_eq!(record.height, "N/A");
        assert_eq!(record.weight, 0);
        assert_eq!(record.birth_date, "N/A");
        assert_eq!(record.age, "N/A");
        assert_eq!(record.year, 2024);
        assert!(record.image_url.contains("/people/1/headshot"));
    }

    #[test]
    fn pitching_only_payload_for_starter_yields_flat_pitching_stats() {
        let entry = roster_entry(1, "Test Player", "12", "SP", "Pitcher");
        let person = person_with(vec![block(
            "season",
            "pitching",
            vec![split(StatFields {
                era: Some("3.50".into()),
                wins: Some(10),
                losses: Some(5),
                ..Default::default()
            })],
        )]);

        let record = normalize_player(&entry, Some(&person), 2024);

        assert_eq!(record.id, 1);
        assert_eq!(record.name, "Test Player");
        assert_eq!(record.number, "12");
        assert_eq!(record.position, "SP");
        assert!(!record.is_two_way);
        assert_eq!(
            record.stats,
            PlayerStats::Pitching(PitchingStats {
                era: "3.50".into(),
                wins: 10,
                losses: 5,
                ..Default::default()
            })
        );
    }

    #[test]
    fn hitting_and_pitching_with_playing_time_is_two_way() {
        let entry = roster_entry(660271, "Shohei Ohtani", "17", "TWP", "Two-Way Player");
        let person = person_with(vec![
            block("season", "hitting", vec![split(StatFields { at_bats: Some(300), ..Default::default() })]),
            block(
                "season",
                "pitching",
                vec![split(StatFields { innings_pitched: Some("40.0".into()), ..Default::default() })],
            ),
        ]);

        let record = normalize_player(&entry, Some(&person), 2023);

        assert!(record.is_two_way);
        match &record.stats {
            PlayerStats::TwoWay { hitting, pitching } => {
                assert_eq!(hitting.at_bats, 300);
                assert_eq!(pitching.innings, "40.0");
            }
            other => panic!("expected two-way stats, got {other:?}"),
        }
    }

    #[test]
    fn zero_innings_is_not_two_way() {
        let entry = roster_entry(5, "Position Player", "5", "1B", "Infielder");
        let person = person_with(vec![
            block("season", "hitting", vec![split(StatFields { at_bats: Some(410), ..Default::default() })]),
            block(
                "season",
                "pitching",
                vec![split(StatFields { innings_pitched: Some("0.0".into()), ..Default::default() })],
            ),
        ]);

        let record = normalize_player(&entry, Some(&person), 2024);

        assert!(!record.is_two_way);
        assert_eq!(record.stats.hitting().map(|h| h.at_bats), Some(410));
        assert!(record.stats.pitching().is_none());
    }

    #[test]
    fn mop_up_inning_without_at_bats_is_not_two_way() {
        let entry = roster_entry(6, "Utility Guy", "6", "2B", "Infielder");
        let person = person_with(vec![
            block("season", "hitting", vec![split(StatFields::default())]),
            block(
                "season",
                "pitching",
                vec![split(StatFields { innings_pitched: Some("1.0".into()), ..Default::default() })],
            ),
        ]);

        let record = normalize_player(&entry, Some(&person), 2024);

        assert!(!record.is_two_way);
        assert!(matches!(record.stats, PlayerStats::Hitting(_)));
    }

    #[test]
    fn pitcher_without_pitching_split_falls_back_to_hitting_defaults() {
        let entry = roster_entry(7, "Prospect Arm", "77", "RP", "Pitcher");
        let person = person_with(vec![]);

        let record = normalize_player(&entry, Some(&person), 2024);

        assert_eq!(record.stats, PlayerStats::Hitting(HittingStats::default()));
    }

    #[test]
    fn empty_split_list_counts_as_absent() {
        let entry = roster_entry(8, "Reliever", "48", "RP", "Pitcher");
        let person = person_with(vec![block("season", "pitching", vec![])]);

        let record = normalize_player(&entry, Some(&person), 2024);

        assert_eq!(record.stats, PlayerStats::Hitting(HittingStats::default()));
    }

    #[test]
    fn non_season_blocks_are_ignored() {
        let entry = roster_entry(9, "Veteran", "9", "LF", "Outfielder");
        let person = person_with(vec![block(
            "career",
            "hitting",
            vec![split(StatFields { home_runs: Some(300), ..Default::default() })],
        )]);

        let record = normalize_player(&entry, Some(&person), 2024);

        assert_eq!(record.stats.hitting().map(|h| h.home_runs), Some(0));
    }

    #[test]
    fn biographical_fields_are_formatted() {
        let entry = roster_entry(10, "Pablo López", "", "SP", "Pitcher");
        let person = Person {
            birth_date: Some("1996-03-07".into()),
            current_age: Some(28),
            height: Some("6' 3\"".into()),
            weight: Some(210),
            bat_side: Some(CodeDescription { code: Some("L".into()), description: Some("Left".into()) }),
            pitch_hand: Some(CodeDescription { code: Some("R".into()), description: Some("Right".into()) }),
            ..Default::default()
        };

        let record = normalize_player(&entry, Some(&person), 2024);

        assert_eq!(record.number, "00");
        assert_eq!(record.birth_date, "March 7, 1996");
        assert_eq!(record.age, "28");
        assert_eq!(record.height, "6' 3\"");
        assert_eq!(record.weight, 210);
        assert_eq!(record.bats, "L");
        assert_eq!(record.throws, "R");
    }

    #[test]
    fn normalizing_twice_is_structurally_equal() {
        let entry = roster_entry(11, "Same Guy", "11", "SS", "Infielder");
        let person = person_with(vec![block(
            "season",
            "hitting",
            vec![split(StatFields { avg: Some(".287".into()), hits: Some(150), ..Default::default() })],
        )]);

        let first = normalize_player(&entry, Some(&person), 2024);
        let second = normalize_player(&entry, Some(&person), 2024);

        assert_eq!(first, second);
    }

    #[test]
    fn empty_rate_strings_fall_back_to_defaults() {
        let entry = roster_entry(12, "Blank Rates", "12", "C", "Catcher");
        let person = person_with(vec![block(
            "season",
            "hitting",
            vec![split(StatFields { avg: Some(String::new()), ops: Some("  ".into()), ..Default::default() })],
        )]);

        let record = normalize_player(&entry, Some(&person), 2024);

        let hitting = record.stats.hitting().expect("hitting");
        assert_eq!(hitting.avg, ".000");
        assert_eq!(hitting.ops, ".000");
    }

    #[test]
    fn teams_are_filtered_to_mlb_and_sorted() {
        use crate::wire::IdRef;
        let team = |id: u32, name: &str, sport: u32| TeamEntry {
            id: Some(id),
            name: Some(name.into()),
            sport: Some(IdRef { id: Some(sport) }),
            ..Default::default()
        };
        let teams = normalize_teams(vec![
            team(142, "Minnesota Twins", 1),
            team(4124, "St. Paul Saints", 11),
            team(109, "Arizona Diamondbacks", 1),
        ]);
        let names: Vec<&str> = teams.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Arizona Diamondbacks", "Minnesota Twins"]);
    }

    #[test]
    fn transactions_are_newest_first_and_capped() {
        let txn = |date: &str, desc: &str| PersonTransaction {
            date: Some(date.into()),
            description: Some(desc.into()),
            ..Default::default()
        };
        let out = normalize_transactions(
            vec![
                txn("2019-07-01", "oldest"),
                txn("2021-03-02", "older"),
                txn("2023-11-15", "newer"),
                txn("2024-01-05", "newest"),
            ],
            3,
        );
        let descriptions: Vec<&str> = out.iter().map(|t| t.description.as_str()).collect();
        assert_eq!(descriptions, vec!["newest", "newer", "older"]);
        assert_eq!(out[0].date, "Jan 5, 2024");
    }

    #[test]
    fn detail_splits_regular_and_postseason_by_group() {
        let games = |n: u32| StatFields { games_played: Some(n), ..Default::default() };
        let person = Person {
            id: Some(660271),
            full_name: Some("Shohei Ohtani".into()),
            stats: Some(vec![
                block(
                    "career",
                    "hitting",
                    vec![
                        season_split("", Some("P"), "", games(5)),
                        season_split("", Some("R"), "", StatFields { home_runs: Some(225), ..games(900) }),
                    ],
                ),
                block(
                    "yearByYear",
                    "hitting",
                    vec![
                        season_split("2018", Some("R"), "Los Angeles Angels", games(104)),
                        season_split("2019", None, "Los Angeles Angels", games(106)),
                        season_split("2020", Some("R"), "Los Angeles Angels", games(0)),
                        season_split("2024", Some("P"), "Los Angeles Dodgers", games(16)),
                    ],
                ),
                block(
                    "yearByYear",
                    "pitching",
                    vec![season_split(
                        "2018",
                        Some("R"),
                        "Los Angeles Angels",
                        StatFields { innings_pitched: Some("51.2".into()), ..games(10) },
                    )],
                ),
            ]),
            awards: Some(vec![PersonAward { name: Some("AL MVP".into()), season: Some("2021".into()) }]),
            ..Default::default()
        };

        let detail = normalize_detail(&person, vec![], Some("https://www.mlb.com/video/x".into()));

        assert_eq!(detail.sections.len(), 2);
        let hitting = &detail.sections[0];
        assert_eq!(hitting.group, StatGroup::Hitting);
        match &hitting.career {
            Some(StatLine::Hitting(line)) => assert_eq!(line.home_runs, 225),
            other => panic!("expected regular-season hitting career line, got {other:?}"),
        }
        let seasons: Vec<&str> = hitting.seasons.iter().map(|s| s.season.as_str()).collect();
        assert_eq!(seasons, vec!["2019", "2018"]);
        assert_eq!(hitting.postseason.len(), 1);
        assert_eq!(hitting.postseason[0].team, "Los Angeles Dodgers");

        let pitching = &detail.sections[1];
        assert_eq!(pitching.group, StatGroup::Pitching);
        assert!(pitching.career.is_none());
        match &pitching.seasons[0].line {
            StatLine::Pitching(line) => {
                assert_eq!(line.innings, "51.2");
                assert_eq!(line.era, "0.00");
            }
            other => panic!("expected pitching line, got {other:?}"),
        }

        assert_eq!(detail.awards, vec![Award { name: "AL MVP".into(), season: "2021".into() }]);
        assert_eq!(detail.highlight_url.as_deref(), Some("https://www.mlb.com/video/x"));
        assert_eq!(detail.bats, "N/A");
    }

    #[test]
    fn detail_without_stats_has_no_sections() {
        let detail = normalize_detail(&Person::default(), vec![], None);
        assert!(detail.sections.is_empty());
        assert_eq!(detail.primary_number, "--");
        assert_eq!(detail.birth_date, "N/A");
    }

    #[test]
    fn unparseable_birth_date_reads_as_not_available() {
        assert_eq!(format_birth_date("sometime in 1990"), None);
        assert_eq!(format_birth_date("1990-12-25").as_deref(), Some("December 25, 1990"));
        assert_eq!(format_transaction_date("2024-07-30T00:00:00Z").as_deref(), Some("Jul 30, 2024"));
    }
}
