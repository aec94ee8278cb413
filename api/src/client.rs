use crate::normalize::{normalize_detail, normalize_player, normalize_teams, normalize_transactions};
use crate::wire::{PeopleResponse, Person, RosterEntry, RosterResponse, SuggestResponse, TeamsResponse};
use crate::{MIN_SEARCH_CHARS, PlayerDetail, PlayerRecord, Team, TeamRef, Transaction};
use futures_util::stream::{self, StreamExt};
use log::{debug, warn};
use reqwest::{Client, Url};
use std::fmt;
use std::time::Duration;

pub type ApiResult<T> = Result<T, ApiError>;

pub const MLB_STATS_API: &str = "https://statsapi.mlb.com/api/v1";
const MLB_VIDEO_SEARCH: &str =
    "https://search-api-mlbtv.mlb.com/svc/search/v2/graphql/persisted/query/core/Suggest";
const MLB_WEB: &str = "https://www.mlb.com";
const HEADSHOT_BASE: &str =
    "https://img.mlbstatic.com/mlb-photos/image/upload/d_people:generic:headshot:67:current.png/w_213,q_auto:best/v1/people";

/// Upper bound on concurrent per-player/per-team requests in a fan-out.
pub const MAX_IN_FLIGHT: usize = 16;
pub const RECENT_TRANSACTIONS: usize = 3;

const SEASON_HYDRATE: &str = "stats(group=[hitting,pitching],type=[season],season=";
const DETAIL_HYDRATE: &str = "stats(group=[hitting,pitching],type=[yearByYear,career,careerRegularSeason,careerPostseason],gameType=[R,P]),awards,currentTeam";

/// Headshot for a player. The CDN serves a generic silhouette when no photo
/// exists, so this never needs a request.
pub fn player_image_url(player: u32) -> String {
    format!("{HEADSHOT_BASE}/{player}/headshot/67/current")
}

/// MLB Stats API client.
#[derive(Debug, Clone)]
pub struct MlbApi {
    client: Client,
    timeout: Duration,
    base_url: String,
    search_url: String,
}

impl Default for MlbApi {
    fn default() -> Self {
        Self::with_base_urls(MLB_STATS_API, MLB_VIDEO_SEARCH)
    }
}

#[derive(Debug)]
pub enum ApiError {
    Network(reqwest::Error, String),
    Api(reqwest::Error, String),
    Parsing(reqwest::Error, String),
    NotFound(String),
    Other(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(e, url) => write!(f, "Network error for {url}: {e}"),
            ApiError::Api(e, url) => write!(f, "API error for {url}: {e}"),
            ApiError::Parsing(e, url) => write!(f, "Parse error for {url}: {e}"),
            ApiError::NotFound(msg) => write!(f, "Not found: {msg}"),
            ApiError::Other(msg) => write!(f, "Error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Network(e, _) | ApiError::Api(e, _) | ApiError::Parsing(e, _) => Some(e),
            ApiError::NotFound(_) | ApiError::Other(_) => None,
        }
    }
}

impl MlbApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stats API at `base_url`, default video search host.
    pub fn with_base_url(base_url: &str) -> Self {
        Self::with_base_urls(base_url, MLB_VIDEO_SEARCH)
    }

    /// Point the client at other hosts. Trailing slashes are ignored.
    pub fn with_base_urls(base_url: &str, search_url: &str) -> Self {
        Self {
            client: Client::builder()
                .user_agent("mlbtui/0.1 (terminal roster viewer)")
                .build()
                .unwrap_or_default(),
            timeout: Duration::from_secs(10),
            base_url: base_url.trim_end_matches('/').to_string(),
            search_url: search_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// All MLB clubs, sorted by name.
    pub async fn fetch_teams(&self) -> ApiResult<Vec<Team>> {
        let url = format!("{}/teams?sportId=1", self.base_url);
        let raw: TeamsResponse = self.get(&url).await?;
        Ok(normalize_teams(raw.teams.unwrap_or_default()))
    }

    /// 40-man roster for a team in a season, in API order.
    pub async fn fetch_roster(&self, team: u32, season: u16) -> ApiResult<Vec<RosterEntry>> {
        let url = format!("{}/teams/{team}/roster/40Man?season={season}", self.base_url);
        let raw: RosterResponse = self.get(&url).await?;
        Ok(raw.roster.unwrap_or_default())
    }

    /// Season hitting and pitching stats plus biographical fields. `None` when
    /// the API knows no such person.
    pub async fn fetch_player_stats(&self, player: u32, season: u16) -> ApiResult<Option<Person>> {
        let url = format!("{}/people/{player}?hydrate={SEASON_HYDRATE}{season})", self.base_url);
        let raw: PeopleResponse = self.get(&url).await?;
        Ok(raw.people.and_then(|people| people.into_iter().next()))
    }

    /// Career, year-by-year and postseason stats with awards and current team.
    pub async fn fetch_player_detail(&self, player: u32) -> ApiResult<Person> {
        let url = format!("{}/people/{player}?hydrate={DETAIL_HYDRATE}", self.base_url);
        let raw: PeopleResponse = self.get(&url).await?;
        raw.people
            .and_then(|people| people.into_iter().next())
            .ok_or_else(|| ApiError::NotFound(format!("player {player}")))
    }

    /// Most recent transactions, newest first. Failures read as none.
    pub async fn fetch_player_transactions(&self, player: u32) -> Vec<Transaction> {
        let url = format!("{}/people/{player}?hydrate=transactions", self.base_url);
        match self.get::<PeopleResponse>(&url).await {
            Ok(raw) => {
                let transactions = raw
                    .people
                    .and_then(|people| people.into_iter().next())
                    .and_then(|person| person.transactions)
                    .unwrap_or_default();
                normalize_transactions(transactions, RECENT_TRANSACTIONS)
            }
            Err(e) => {
                warn!("transactions for player {player}: {e}");
                Vec::new()
            }
        }
    }

    /// Link to the top video search hit for a player name, if any.
    pub async fn fetch_highlight_url(&self, name: &str) -> Option<String> {
        let variables = serde_json::json!({
            "query": name,
            "limit": 1,
            "languagePreference": "EN",
            "contentPreference": "CMS_VIDEO",
        });
        let url = Url::parse_with_params(&self.search_url, &[("variables", variables.to_string())])
            .map_err(|e| warn!("highlight search url: {e}"))
            .ok()?;

        match self.get::<SuggestResponse>(url.as_str()).await {
            Ok(raw) => raw
                .data
                .and_then(|d| d.search)
                .and_then(|s| s.suggestions)
                .and_then(|s| s.into_iter().next())
                .and_then(|s| s.slug)
                .filter(|slug| !slug.is_empty())
                .map(|slug| format!("{MLB_WEB}{slug}")),
            Err(e) => {
                debug!("no highlights for {name}: {e}");
                None
            }
        }
    }

    /// Roster plus per-player season stats. A player whose stats request fails
    /// still gets a record, with default stats.
    pub async fn fetch_roster_with_stats(&self, team: u32, season: u16) -> ApiResult<Vec<PlayerRecord>> {
        let roster = self.fetch_roster(team, season).await?;
        let records: Vec<PlayerRecord> = stream::iter(roster)
            .map(|entry| async move {
                let person = self.stats_or_none(&entry, season).await;
                normalize_player(&entry, person.as_ref(), season)
            })
            .buffered(MAX_IN_FLIGHT)
            .collect()
            .await;
        Ok(records)
    }

    /// Name search across every team's roster. Stats are only fetched for the
    /// matches. Teams whose roster fails to load are skipped; the search fails
    /// only when all of them do.
    pub async fn search_all_teams(&self, teams: &[Team], season: u16, query: &str) -> ApiResult<Vec<PlayerRecord>> {
        let query = query.trim().to_lowercase();
        if query.chars().count() < MIN_SEARCH_CHARS || teams.is_empty() {
            return Ok(Vec::new());
        }

        // Owned team and query per future; the worker spawns this onto the runtime.
        let rosters: Vec<Option<Vec<(TeamRef, RosterEntry)>>> = stream::iter(teams.iter().map(TeamRef::from).collect::<Vec<_>>())
            .map(|team| {
                let query = query.clone();
                async move {
                    match self.fetch_roster(team.id, season).await {
                        Ok(roster) => Some(
                            roster
                                .into_iter()
                                .filter(|entry| entry.full_name().to_lowercase().contains(&query))
                                .map(|entry| (team.clone(), entry))
                                .collect(),
                        ),
                        Err(e) => {
                            warn!("search: roster for team {} skipped: {e}", team.id);
                            None
                        }
                    }
                }
            })
            .buffered(MAX_IN_FLIGHT)
            .collect()
            .await;

        if rosters.iter().all(Option::is_none) {
            return Err(ApiError::Other(format!("no roster could be loaded for {season}")));
        }

        let matches: Vec<(TeamRef, RosterEntry)> = rosters.into_iter().flatten().flatten().collect();
        debug!("search '{query}' matched {} players", matches.len());

        let records: Vec<PlayerRecord> = stream::iter(matches)
            .map(|(team, entry)| async move {
                let person = self.stats_or_none(&entry, season).await;
                normalize_player(&entry, person.as_ref(), season).on_team(Some(team))
            })
            .buffered(MAX_IN_FLIGHT)
            .collect()
            .await;
        Ok(records)
    }

    /// Everything the player view shows, fetched concurrently.
    pub async fn fetch_player_profile(&self, player: u32, name: &str) -> ApiResult<PlayerDetail> {
        let (detail, transactions, highlight) = futures_util::join!(
            self.fetch_player_detail(player),
            self.fetch_player_transactions(player),
            self.fetch_highlight_url(name),
        );
        Ok(normalize_detail(&detail?, transactions, highlight))
    }

    async fn stats_or_none(&self, entry: &RosterEntry, season: u16) -> Option<Person> {
        let id = entry.person_id()?;
        match self.fetch_player_stats(id, season).await {
            Ok(person) => person,
            Err(e) => {
                warn!("stats for {} ({id}) unavailable: {e}", entry.full_name());
                None
            }
        }
    }

    async fn get<T: serde::de::DeserializeOwned>(&self, url: &str) -> ApiResult<T> {
        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| ApiError::Network(e, url.to_owned()))?;

        response
            .error_for_status()
            .map_err(|e| ApiError::Api(e, url.to_owned()))?
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parsing(e, url.to_owned()))
    }
}
