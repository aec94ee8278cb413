use crate::app::MenuItem;
use crate::state::app_settings::{FIRST_SEASON, current_season};
use crate::state::messages::{RequestKind, Ticket};
use mlb_api::{MIN_SEARCH_CHARS, PlayerDetail, PlayerRecord, Team};

// ---------------------------------------------------------------------------
// Request generations
// ---------------------------------------------------------------------------

/// Latest generation issued per request kind. Responses carrying an older
/// generation are stale and get dropped.
#[derive(Debug, Default)]
pub struct RequestTokens {
    teams: u64,
    roster: u64,
    search: u64,
    player: u64,
}

impl RequestTokens {
    pub fn issue(&mut self, kind: RequestKind) -> Ticket {
        let slot = self.slot(kind);
        *slot += 1;
        Ticket { kind, generation: *slot }
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        let latest = match ticket.kind {
            RequestKind::Teams => self.teams,
            RequestKind::Roster => self.roster,
            RequestKind::Search => self.search,
            RequestKind::Player => self.player,
        };
        ticket.generation == latest
    }

    fn slot(&mut self, kind: RequestKind) -> &mut u64 {
        match kind {
            RequestKind::Teams => &mut self.teams,
            RequestKind::Roster => &mut self.roster,
            RequestKind::Search => &mut self.search,
            RequestKind::Player => &mut self.player,
        }
    }
}

// ---------------------------------------------------------------------------
// List selection
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub index: usize,
}

impl Selection {
    pub fn next(&mut self, len: usize) {
        if self.index + 1 < len {
            self.index += 1;
        }
    }

    pub fn prev(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    /// Keep the cursor inside a list that may have shrunk.
    pub fn clamp(&mut self, len: usize) {
        self.index = self.index.min(len.saturating_sub(1));
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }
}

// ---------------------------------------------------------------------------
// Roster filtering
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum PositionFilter {
    #[default]
    All,
    Pitchers,
    Catchers,
    Infielders,
    Outfielders,
    DesignatedHitters,
    TwoWay,
}

const POSITION_FILTERS: [PositionFilter; 7] = [
    PositionFilter::All,
    PositionFilter::Pitchers,
    PositionFilter::Catchers,
    PositionFilter::Infielders,
    PositionFilter::Outfielders,
    PositionFilter::DesignatedHitters,
    PositionFilter::TwoWay,
];

impl PositionFilter {
    pub fn matches(&self, player: &PlayerRecord) -> bool {
        match self {
            PositionFilter::All => true,
            PositionFilter::Pitchers => player.is_pitcher() && !player.is_two_way,
            PositionFilter::Catchers => player.position == "C",
            PositionFilter::Infielders => player.position_type == "Infielder",
            PositionFilter::Outfielders => player.position_type == "Outfielder",
            PositionFilter::DesignatedHitters => player.position == "DH",
            PositionFilter::TwoWay => player.is_two_way,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PositionFilter::All => "All",
            PositionFilter::Pitchers => "Pitchers",
            PositionFilter::Catchers => "Catchers",
            PositionFilter::Infielders => "Infielders",
            PositionFilter::Outfielders => "Outfielders",
            PositionFilter::DesignatedHitters => "DH",
            PositionFilter::TwoWay => "Two-Way",
        }
    }

    pub fn next(self) -> Self {
        let idx = POSITION_FILTERS.iter().position(|f| *f == self).unwrap_or_default();
        POSITION_FILTERS[(idx + 1) % POSITION_FILTERS.len()]
    }

    pub fn prev(self) -> Self {
        let idx = POSITION_FILTERS.iter().position(|f| *f == self).unwrap_or_default();
        POSITION_FILTERS[(idx + POSITION_FILTERS.len() - 1) % POSITION_FILTERS.len()]
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ViewFilter {
    pub position: PositionFilter,
    pub query: String,
    pub all_teams: bool,
}

impl ViewFilter {
    /// Cross-team results are shown only while all-teams mode has a query.
    pub fn searching_all_teams(&self) -> bool {
        self.all_teams && !self.query.trim().is_empty()
    }

    pub fn search_query_too_short(&self) -> bool {
        self.searching_all_teams() && self.query.trim().chars().count() < MIN_SEARCH_CHARS
    }
}

/// Players to show for a filter. In all-teams mode the position filter is
/// ignored and results come from the cross-team search.
pub fn visible_players<'a>(
    roster: &'a [PlayerRecord],
    search_results: &'a [PlayerRecord],
    filter: &ViewFilter,
) -> Vec<&'a PlayerRecord> {
    let query = filter.query.trim();
    if filter.searching_all_teams() {
        if filter.search_query_too_short() {
            return Vec::new();
        }
        return search_results.iter().filter(|p| p.name_matches(query)).collect();
    }

    roster
        .iter()
        .filter(|p| filter.position.matches(p))
        .filter(|p| query.is_empty() || p.name_matches(query))
        .collect()
}

// ---------------------------------------------------------------------------
// Roster tab
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct RosterState {
    pub team_id: u32,
    pub season: u16,
    pub players: Vec<PlayerRecord>,
    pub loaded: bool,
    pub search_results: Vec<PlayerRecord>,
    /// Query and season the current `search_results` answer.
    pub searched_query: Option<(String, u16)>,
    pub filter: ViewFilter,
    pub composing: bool,
    pub selection: Selection,
    pub error: Option<String>,
}

impl Default for RosterState {
    fn default() -> Self {
        Self {
            team_id: crate::state::app_settings::DEFAULT_TEAM,
            season: current_season(),
            players: Vec::new(),
            loaded: false,
            search_results: Vec::new(),
            searched_query: None,
            filter: ViewFilter::default(),
            composing: false,
            selection: Selection::default(),
            error: None,
        }
    }
}

impl RosterState {
    pub fn visible_players(&self) -> Vec<&PlayerRecord> {
        visible_players(&self.players, &self.search_results, &self.filter)
    }

    pub fn selected_player(&self) -> Option<&PlayerRecord> {
        self.visible_players().get(self.selection.index).copied()
    }

    pub fn select_next(&mut self) {
        let len = self.visible_players().len();
        self.selection.next(len);
    }

    pub fn select_prev(&mut self) {
        self.selection.prev();
    }

    /// Re-seat the cursor after the visible list changed.
    pub fn refilter(&mut self) {
        let len = self.visible_players().len();
        self.selection.clamp(len);
    }

    /// Step the season by `delta`, staying within FIRST_SEASON..=current.
    /// Returns false when already at the bound.
    pub fn step_season(&mut self, delta: i32) -> bool {
        let next = (i32::from(self.season) + delta).clamp(i32::from(FIRST_SEASON), i32::from(current_season()));
        let next = u16::try_from(next).unwrap_or(FIRST_SEASON);
        if next == self.season {
            return false;
        }
        self.season = next;
        true
    }

    pub fn load(&mut self, players: Vec<PlayerRecord>) {
        self.players = players;
        self.loaded = true;
        self.error = None;
        self.refilter();
    }
}

// ---------------------------------------------------------------------------
// Teams tab
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct TeamsState {
    pub teams: Vec<Team>,
    pub selection: Selection,
    pub error: Option<String>,
}

impl TeamsState {
    pub fn team(&self, id: u32) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    pub fn selected(&self) -> Option<&Team> {
        self.teams.get(self.selection.index)
    }

    pub fn focus(&mut self, id: u32) {
        if let Some(idx) = self.teams.iter().position(|t| t.id == id) {
            self.selection.index = idx;
        }
    }

    /// Team `step` places away from `current` in name order, wrapping.
    pub fn cycle_from(&self, current: u32, step: isize) -> Option<&Team> {
        if self.teams.is_empty() {
            return None;
        }
        let len = self.teams.len() as isize;
        let idx = self.teams.iter().position(|t| t.id == current).map_or(0, |i| i as isize);
        self.teams.get((idx + step).rem_euclid(len) as usize)
    }
}

// ---------------------------------------------------------------------------
// Player tab
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct DetailState {
    /// Player the latest request was made for.
    pub player: Option<(u32, String)>,
    pub detail: Option<PlayerDetail>,
    pub scroll_offset: u16,
    /// Furthest offset that still fills the pane, set on each draw.
    pub max_scroll: u16,
    pub error: Option<String>,
}

impl DetailState {
    pub fn scroll(&mut self, down: bool) {
        self.scroll_offset = if down {
            self.scroll_offset.saturating_add(1).min(self.max_scroll)
        } else {
            self.scroll_offset.saturating_sub(1)
        };
    }

    /// Bound scrolling to `content_lines` rendered in a pane `viewport` rows tall.
    pub fn fit_to(&mut self, content_lines: usize, viewport: u16) {
        self.max_scroll = u16::try_from(content_lines).unwrap_or(u16::MAX).saturating_sub(viewport);
        self.scroll_offset = self.scroll_offset.min(self.max_scroll);
    }
}

// ---------------------------------------------------------------------------
// Root app state
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct AppState {
    pub active_tab: MenuItem,
    pub previous_tab: MenuItem,
    pub show_logs: bool,
    pub last_error: Option<String>,
    pub roster: RosterState,
    pub teams: TeamsState,
    pub detail: DetailState,
    pub tokens: RequestTokens,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn team_name(&self) -> String {
        self.teams
            .team(self.roster.team_id)
            .map(|t| t.name.clone())
            .unwrap_or_else(|| format!("Team {}", self.roster.team_id))
    }
}
